//! Data table state.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::column::{CellRenderer, Column};
use crate::row::TableRow;
use crate::selection::{CheckState, Selection};
use crate::sort::{SortState, next_sort};

/// Default text shown when the table has no rows.
pub const DEFAULT_EMPTY_STATE: &str = "No records found.";

/// Callback receiving the selected rows after every selection change.
pub type SelectionCallback<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// Internal state for the data table.
pub(crate) struct TableInner<T: TableRow> {
    /// Column definitions.
    pub columns: Vec<Column<T>>,
    /// Rows in input order.
    pub rows: Vec<T>,
    /// Displayed order as indices into `rows`.
    pub order: Vec<usize>,
    /// Active sort, if any.
    pub sort: Option<SortState>,
    /// Whether the checkbox column is shown.
    pub selectable: bool,
    pub selection: Selection<T::Key>,
    /// Detail renderer; present when rows can be expanded.
    pub detail: Option<CellRenderer<T>>,
    /// The single expanded row.
    pub expanded: Option<T::Key>,
    /// Focused position in displayed order.
    pub cursor: Option<usize>,
    pub loading: bool,
    pub empty_state: String,
    pub on_selection_change: Option<SelectionCallback<T>>,
}

impl<T: TableRow> TableInner<T> {
    fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            order: Vec::new(),
            sort: None,
            selectable: false,
            selection: Selection::new(),
            detail: None,
            expanded: None,
            cursor: None,
            loading: false,
            empty_state: DEFAULT_EMPTY_STATE.to_string(),
            on_selection_change: None,
        }
    }

    /// Rebuild the displayed order from the input rows and the sort.
    ///
    /// The cursor stays on the same row when that row is still present.
    fn resort(&mut self) {
        let cursor_key = self.cursor_key();

        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        if let Some(sort) = &self.sort
            && let Some(cmp) = self
                .columns
                .iter()
                .find(|c| c.id == sort.column)
                .and_then(|c| c.comparator())
        {
            let rows = &self.rows;
            order.sort_by(|&a, &b| sort.direction.apply(cmp(&rows[a], &rows[b])));
        }
        self.order = order;

        self.cursor = match cursor_key {
            Some(key) => self
                .position_of(&key)
                .or_else(|| self.clamped_cursor(self.cursor)),
            None => self.clamped_cursor(self.cursor),
        };
    }

    fn clamped_cursor(&self, cursor: Option<usize>) -> Option<usize> {
        let cursor = cursor?;
        if self.order.is_empty() {
            None
        } else {
            Some(cursor.min(self.order.len() - 1))
        }
    }

    fn cursor_key(&self) -> Option<T::Key> {
        self.cursor
            .and_then(|c| self.order.get(c))
            .map(|&i| self.rows[i].key())
    }

    /// Position of a key in displayed order.
    pub fn position_of(&self, key: &T::Key) -> Option<usize> {
        self.order.iter().position(|&i| &self.rows[i].key() == key)
    }

    pub fn displayed(&self) -> impl Iterator<Item = &T> {
        self.order.iter().map(|&i| &self.rows[i])
    }

    pub fn distinct_keys(&self) -> HashSet<T::Key> {
        self.rows.iter().map(|r| r.key()).collect()
    }

    pub fn contains_key(&self, key: &T::Key) -> bool {
        self.rows.iter().any(|r| &r.key() == key)
    }

    pub fn selected_rows(&self) -> Vec<T> {
        self.displayed()
            .filter(|r| self.selection.is_selected(&r.key()))
            .cloned()
            .collect()
    }

    /// Selected rows and the callback to notify, if one is registered.
    fn selection_notice(&self) -> Option<(SelectionCallback<T>, Vec<T>)> {
        self.on_selection_change
            .as_ref()
            .map(|cb| (cb.clone(), self.selected_rows()))
    }
}

/// A sortable, selectable and expandable table over arbitrary records.
///
/// `DataTable<T>` holds only view state:
/// - the active sort (ascending → descending → unsorted per column)
/// - the set of checked row keys, with a derived select-all state
/// - at most one expanded row
/// - a keyboard cursor
///
/// It never fetches, pages or caches rows; callers hand it the list to show
/// with [`set_rows`](Self::set_rows). Handles are cheap to clone and share
/// the same state.
pub struct DataTable<T: TableRow> {
    pub(crate) inner: Arc<RwLock<TableInner<T>>>,
    pub(crate) dirty: Arc<AtomicBool>,
}

impl<T: TableRow> Clone for DataTable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            dirty: self.dirty.clone(),
        }
    }
}

impl<T: TableRow> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("DataTable");
        if let Ok(guard) = self.inner.read() {
            s.field("columns", &guard.columns)
                .field("rows", &guard.rows.len())
                .field("sort", &guard.sort)
                .field("selected", &guard.selection.len())
                .field("loading", &guard.loading);
        }
        s.finish()
    }
}

impl<T: TableRow> DataTable<T> {
    /// Create an empty table with column definitions.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(TableInner::new(columns))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: Vec<Column<T>>, rows: Vec<T>) -> Self {
        let table = Self::new(columns);
        table.set_rows(rows);
        table.dirty.store(false, Ordering::SeqCst);
        table
    }

    /// Show the checkbox column.
    pub fn with_selectable(self, selectable: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.selectable = selectable;
            if !selectable {
                guard.selection.clear();
            }
        }
        self
    }

    /// Allow rows to expand into a detail panel rendered by `detail`.
    pub fn with_details<F>(self, detail: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.detail = Some(Arc::new(detail));
        }
        self
    }

    /// Text shown when there are no rows.
    pub fn with_empty_state(self, text: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.empty_state = text.into();
        }
        self
    }

    /// Register the selection-change callback.
    ///
    /// Called after every selection mutation with the selected rows in
    /// displayed order. The table's lock is released before the call, so
    /// the callback may read from the table.
    pub fn with_selection_callback<F>(self, callback: F) -> Self
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_selection_change = Some(Arc::new(callback));
        }
        self
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Returns true if state changed since the last call.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }

    fn notify(notice: Option<(SelectionCallback<T>, Vec<T>)>) {
        if let Some((callback, rows)) = notice {
            callback(&rows);
        }
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    pub fn columns(&self) -> Vec<Column<T>> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Replace the rows.
    ///
    /// Sort and selection survive. Selected keys that are no longer present
    /// are dropped, and the expanded row collapses if it disappeared.
    pub fn set_rows(&self, rows: Vec<T>) {
        let notice = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            guard.rows = rows;
            let keys = guard.distinct_keys();
            let pruned = guard.selection.retain_keys(&keys);
            if guard.expanded.as_ref().is_some_and(|k| !keys.contains(k)) {
                guard.expanded = None;
            }
            guard.resort();
            self.mark_dirty();
            if pruned {
                log::debug!("selection pruned to {} rows", guard.selection.len());
                guard.selection_notice()
            } else {
                None
            }
        };
        Self::notify(notice);
    }

    /// Rows in input order.
    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Rows in displayed (sorted) order.
    pub fn displayed_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.displayed().cloned().collect())
            .unwrap_or_default()
    }

    /// Keys in displayed order.
    pub fn displayed_keys(&self) -> Vec<T::Key> {
        self.inner
            .read()
            .map(|g| g.displayed().map(|r| r.key()).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// While loading, the body is a single placeholder row and selection and
    /// expansion toggles are ignored.
    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.loading != loading
        {
            guard.loading = loading;
            self.mark_dirty();
        }
    }

    pub fn is_loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    pub fn empty_state(&self) -> String {
        self.inner
            .read()
            .map(|g| g.empty_state.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    pub fn sort(&self) -> Option<SortState> {
        self.inner.read().ok().and_then(|g| g.sort.clone())
    }

    /// Advance the sort cycle for a column.
    ///
    /// Returns false if the column does not exist or is not sortable.
    pub fn toggle_sort(&self, column_id: &str) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        let sortable = guard
            .columns
            .iter()
            .any(|c| c.id == column_id && c.is_sortable());
        if !sortable {
            log::debug!("ignoring sort on non-sortable column {column_id:?}");
            return false;
        }
        guard.sort = next_sort(guard.sort.as_ref(), column_id);
        guard.resort();
        self.mark_dirty();
        true
    }

    /// Advance the sort cycle for the column at `index`.
    pub fn toggle_sort_at(&self, index: usize) -> bool {
        let column_id = self
            .inner
            .read()
            .ok()
            .and_then(|g| g.columns.get(index).map(|c| c.id.clone()));
        match column_id {
            Some(id) => self.toggle_sort(&id),
            None => false,
        }
    }

    /// Return to input order.
    pub fn clear_sort(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.sort.is_some()
        {
            guard.sort = None;
            guard.resort();
            self.mark_dirty();
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn is_selectable(&self) -> bool {
        self.inner.read().map(|g| g.selectable).unwrap_or(false)
    }

    /// Flip the checkbox of the row with `key`.
    ///
    /// Ignored when the table is not selectable, is loading, or has no row
    /// with that key.
    pub fn toggle_row(&self, key: &T::Key) -> bool {
        let notice = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            if !guard.selectable || guard.loading || !guard.contains_key(key) {
                return false;
            }
            guard.selection.toggle(key.clone());
            self.mark_dirty();
            guard.selection_notice()
        };
        Self::notify(notice);
        true
    }

    /// Header checkbox: select every row, or clear when all are selected.
    pub fn toggle_all(&self) -> bool {
        let notice = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            if !guard.selectable || guard.loading {
                return false;
            }
            let keys = guard.distinct_keys();
            guard.selection.toggle_all(keys);
            log::debug!("select all toggled, {} selected", guard.selection.len());
            self.mark_dirty();
            guard.selection_notice()
        };
        Self::notify(notice);
        true
    }

    /// Clear the selection. Returns false if nothing was selected.
    pub fn clear_selection(&self) -> bool {
        let notice = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            if guard.selection.is_empty() {
                return false;
            }
            guard.selection.clear();
            self.mark_dirty();
            guard.selection_notice()
        };
        Self::notify(notice);
        true
    }

    pub fn is_selected(&self, key: &T::Key) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(key))
            .unwrap_or(false)
    }

    /// Selected keys in displayed order.
    pub fn selected_keys(&self) -> Vec<T::Key> {
        self.inner
            .read()
            .map(|g| {
                g.displayed()
                    .map(|r| r.key())
                    .filter(|k| g.selection.is_selected(k))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Selected rows in displayed order.
    pub fn selected_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.selected_rows())
            .unwrap_or_default()
    }

    /// Header checkbox state, or `None` when the table is not selectable.
    pub fn select_all_state(&self) -> Option<CheckState> {
        self.inner.read().ok().and_then(|g| {
            g.selectable
                .then(|| g.selection.check_state(g.distinct_keys().len()))
        })
    }

    // -------------------------------------------------------------------------
    // Expansion
    // -------------------------------------------------------------------------

    pub fn is_expandable(&self) -> bool {
        self.inner.read().map(|g| g.detail.is_some()).unwrap_or(false)
    }

    /// Open the detail panel of `key`, closing any other; close it if it is
    /// already open.
    pub fn toggle_expanded(&self, key: &T::Key) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        if guard.detail.is_none() || guard.loading || !guard.contains_key(key) {
            return false;
        }
        guard.expanded = if guard.expanded.as_ref() == Some(key) {
            None
        } else {
            Some(key.clone())
        };
        self.mark_dirty();
        true
    }

    pub fn expanded(&self) -> Option<T::Key> {
        self.inner.read().ok().and_then(|g| g.expanded.clone())
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Cursor position in displayed order.
    pub fn cursor(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|g| g.cursor)
    }

    /// The row under the cursor.
    pub fn cursor_row(&self) -> Option<T> {
        self.inner.read().ok().and_then(|g| {
            g.cursor
                .and_then(|c| g.order.get(c))
                .map(|&i| g.rows[i].clone())
        })
    }

    /// Move the cursor to `index`. Returns false if out of range.
    pub fn set_cursor(&self, index: usize) -> bool {
        if let Ok(mut guard) = self.inner.write()
            && index < guard.order.len()
        {
            if guard.cursor != Some(index) {
                guard.cursor = Some(index);
                self.mark_dirty();
            }
            return true;
        }
        false
    }

    fn move_cursor(&self, f: impl FnOnce(Option<usize>, usize) -> usize) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        let len = guard.order.len();
        if len == 0 {
            return false;
        }
        let next = f(guard.cursor, len - 1).min(len - 1);
        if guard.cursor == Some(next) {
            return false;
        }
        guard.cursor = Some(next);
        self.mark_dirty();
        true
    }

    pub fn cursor_up(&self) -> bool {
        self.move_cursor(|cursor, _| cursor.map_or(0, |c| c.saturating_sub(1)))
    }

    pub fn cursor_down(&self) -> bool {
        self.move_cursor(|cursor, _| cursor.map_or(0, |c| c + 1))
    }

    pub fn cursor_first(&self) -> bool {
        self.move_cursor(|_, _| 0)
    }

    pub fn cursor_last(&self) -> bool {
        self.move_cursor(|_, last| last)
    }
}
