//! Column descriptors for the data table.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Projects a row into the text shown in a cell.
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Orders two rows for a sortable column.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Column configuration.
///
/// A column is sortable exactly when it carries a comparator. There is no
/// separate `sortable` flag, so a column that only knows how to render
/// cannot be clicked into a meaningless sort.
///
/// # Examples
///
/// ```
/// use staffing_table::{Alignment, Column};
///
/// struct Person {
///     name: String,
///     age: Option<u32>,
/// }
///
/// let columns: Vec<Column<Person>> = vec![
///     Column::new("name", "Name")
///         .render(|p: &Person| p.name.clone())
///         .sort_by_key(|p: &Person| Some(p.name.to_lowercase())),
///     Column::new("age", "Age")
///         .align(Alignment::Right)
///         .render(|p: &Person| p.age.map(|a| a.to_string()).unwrap_or_default())
///         .sort_by_key(|p: &Person| p.age),
/// ];
/// assert!(columns[1].is_sortable());
/// ```
pub struct Column<T> {
    /// Identifier, also used as the field name for the fallback lookup.
    pub id: String,
    /// Header text.
    pub label: String,
    /// Horizontal alignment of header and cells.
    pub align: Alignment,
    /// Fixed width in terminal columns; `None` sizes to content.
    pub width: Option<u16>,
    renderer: Option<CellRenderer<T>>,
    comparator: Option<Comparator<T>>,
}

impl<T> Column<T> {
    /// Create a column that renders through [`TableRow::field`](crate::TableRow::field).
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            align: Alignment::Left,
            width: None,
            renderer: None,
            comparator: None,
        }
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set a fixed width in terminal columns.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Render cells with the given projection instead of the field lookup.
    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(f));
        self
    }

    /// Make the column sortable with an explicit comparator.
    ///
    /// The comparator defines ascending order; descending reverses it.
    pub fn sort_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.comparator = Some(Arc::new(f));
        self
    }

    /// Make the column sortable by an optional key.
    ///
    /// Rows whose key is `None` sort after every present key in ascending
    /// order, and therefore before them in descending order. Two missing
    /// keys compare equal.
    pub fn sort_by_key<K, F>(self, f: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> Option<K> + Send + Sync + 'static,
    {
        self.sort_with(move |a, b| compare_missing_last(f(a), f(b)))
    }

    /// Whether clicking this column's header sorts the table.
    pub fn is_sortable(&self) -> bool {
        self.comparator.is_some()
    }

    pub(crate) fn renderer(&self) -> Option<&CellRenderer<T>> {
        self.renderer.as_ref()
    }

    pub(crate) fn comparator(&self) -> Option<&Comparator<T>> {
        self.comparator.as_ref()
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            align: self.align,
            width: self.width,
            renderer: self.renderer.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("align", &self.align)
            .field("width", &self.width)
            .field("custom_render", &self.renderer.is_some())
            .field("sortable", &self.comparator.is_some())
            .finish()
    }
}

/// Compare two optional keys, placing `None` after every `Some`.
pub fn compare_missing_last<K: Ord>(a: Option<K>, b: Option<K>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}
