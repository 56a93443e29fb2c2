//! Headless data table.
//!
//! `staffing-table` keeps the view state of a table (sort, checkbox
//! selection, one expanded detail row and a keyboard cursor) for any list
//! of records, and projects it into a [`TableView`] that a front end can
//! draw. [`render_lines`] draws it as plain text.
//!
//! # Example
//!
//! ```
//! use staffing_table::{Column, DataTable, TableRow};
//!
//! #[derive(Clone)]
//! struct Person {
//!     id: &'static str,
//!     age: Option<u32>,
//! }
//!
//! impl TableRow for Person {
//!     type Key = &'static str;
//!
//!     fn key(&self) -> &'static str {
//!         self.id
//!     }
//!
//!     fn field(&self, column_id: &str) -> Option<String> {
//!         match column_id {
//!             "age" => self.age.map(|a| a.to_string()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let table = DataTable::with_rows(
//!     vec![Column::new("age", "Age").sort_by_key(|p: &Person| p.age)],
//!     vec![Person { id: "a", age: Some(3) }, Person { id: "b", age: Some(1) }],
//! );
//! table.toggle_sort("age");
//! assert_eq!(table.displayed_keys(), vec!["b", "a"]);
//! ```

mod column;
mod events;
mod render;
mod row;
mod selection;
mod sort;
mod state;
pub mod text;
mod view;

pub use column::{Alignment, CellRenderer, Column, Comparator, compare_missing_last};
pub use events::{EventResult, TableAction};
pub use render::{Line, LineKind, render_lines};
pub use row::{EMPTY_CELL, TableRow};
pub use selection::{CheckState, Selection};
pub use sort::{SortDirection, SortState, next_sort};
pub use state::{DEFAULT_EMPTY_STATE, DataTable, SelectionCallback};
pub use view::{BodyView, HIDE_DETAILS, HeaderCell, HeaderView, RowView, SHOW_DETAILS, TableView};
