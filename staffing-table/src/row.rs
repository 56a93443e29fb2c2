//! The `TableRow` trait.

use std::hash::Hash;

/// Placeholder shown for a cell that has no value.
pub const EMPTY_CELL: &str = "—";

/// Trait for records that can be displayed as rows in a [`DataTable`](crate::DataTable).
///
/// # Example
///
/// ```
/// use staffing_table::TableRow;
///
/// #[derive(Clone)]
/// struct Vendor {
///     id: String,
///     name: String,
///     phone: Option<String>,
/// }
///
/// impl TableRow for Vendor {
///     type Key = String;
///
///     fn key(&self) -> String {
///         self.id.clone()
///     }
///
///     fn field(&self, column_id: &str) -> Option<String> {
///         match column_id {
///             "name" => Some(self.name.clone()),
///             "phone" => self.phone.clone(),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow: Clone + Send + Sync + 'static {
    /// The key type used to identify this row.
    type Key: Clone + Eq + Hash + Send + Sync + 'static;

    /// Stable key for this row.
    ///
    /// Selection and expansion follow the key, so it must not depend on the
    /// row's position. Two rows sharing a key share their selection and
    /// expansion state.
    fn key(&self) -> Self::Key;

    /// Display text for a column that has no custom renderer.
    ///
    /// Returning `None` shows [`EMPTY_CELL`].
    fn field(&self, column_id: &str) -> Option<String> {
        let _ = column_id;
        None
    }
}
