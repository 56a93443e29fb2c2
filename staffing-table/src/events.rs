//! Actions for driving a data table from an input layer.

use crate::row::TableRow;
use crate::state::DataTable;

/// Result of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The action changed table state.
    Consumed,
    /// The action did not apply.
    Ignored,
}

impl From<bool> for EventResult {
    fn from(changed: bool) -> Self {
        if changed {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// Something the user did to a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction<K> {
    /// Click on a column header.
    Sort(String),
    /// Click on the header of the nth column.
    SortAt(usize),
    /// Click on a row checkbox.
    ToggleRow(K),
    /// Click on the header checkbox.
    ToggleAll,
    /// Click on a row's details toggle.
    ToggleExpanded(K),
    CursorUp,
    CursorDown,
    CursorFirst,
    CursorLast,
    /// Toggle the checkbox of the row under the cursor.
    ToggleCursorRow,
    /// Toggle the details of the row under the cursor.
    ExpandCursorRow,
}

impl<T: TableRow> DataTable<T> {
    /// Apply a user action.
    pub fn apply(&self, action: TableAction<T::Key>) -> EventResult {
        let changed = match action {
            TableAction::Sort(column) => self.toggle_sort(&column),
            TableAction::SortAt(index) => self.toggle_sort_at(index),
            TableAction::ToggleRow(key) => self.toggle_row(&key),
            TableAction::ToggleAll => self.toggle_all(),
            TableAction::ToggleExpanded(key) => self.toggle_expanded(&key),
            TableAction::CursorUp => self.cursor_up(),
            TableAction::CursorDown => self.cursor_down(),
            TableAction::CursorFirst => self.cursor_first(),
            TableAction::CursorLast => self.cursor_last(),
            TableAction::ToggleCursorRow => self
                .cursor_row()
                .is_some_and(|row| self.toggle_row(&row.key())),
            TableAction::ExpandCursorRow => self
                .cursor_row()
                .is_some_and(|row| self.toggle_expanded(&row.key())),
        };
        changed.into()
    }
}
