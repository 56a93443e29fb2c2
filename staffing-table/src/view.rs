//! Render-ready snapshot of a data table.

use crate::column::Alignment;
use crate::row::{EMPTY_CELL, TableRow};
use crate::selection::CheckState;
use crate::sort::SortDirection;
use crate::state::DataTable;

/// Label of the details toggle for a collapsed row.
pub const SHOW_DETAILS: &str = "View details";
/// Label of the details toggle for the expanded row.
pub const HIDE_DETAILS: &str = "Hide details";

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: String,
    pub label: String,
    pub align: Alignment,
    pub width: Option<u16>,
    pub sortable: bool,
    /// Direction shown next to the label when this column is the active sort.
    pub sort: Option<SortDirection>,
}

/// The header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Select-all checkbox, present when the table is selectable and not
    /// loading.
    pub select_all: Option<CheckState>,
    pub columns: Vec<HeaderCell>,
    /// Whether a trailing details column exists.
    pub details: bool,
}

/// One data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<K> {
    pub key: K,
    /// Cell text, one per column.
    pub cells: Vec<String>,
    /// Checkbox state; `None` when the table is not selectable.
    pub selected: Option<bool>,
    /// Details toggle state; `None` when rows cannot expand.
    pub expanded: Option<bool>,
    pub focused: bool,
    /// Detail panel content for the expanded row.
    pub detail: Option<String>,
}

impl<K> RowView<K> {
    /// Label of this row's details toggle.
    pub fn details_label(&self) -> Option<&'static str> {
        self.expanded
            .map(|open| if open { HIDE_DETAILS } else { SHOW_DETAILS })
    }
}

/// The table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView<K> {
    /// A single placeholder row spanning every column.
    Loading,
    /// No rows; carries the empty-state text.
    Empty(String),
    Rows(Vec<RowView<K>>),
}

/// Snapshot of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<K> {
    pub header: HeaderView,
    pub body: BodyView<K>,
}

impl<K> TableView<K> {
    /// Number of columns a full-width row spans, including the checkbox and
    /// details columns.
    pub fn column_span(&self) -> usize {
        self.header.columns.len()
            + usize::from(self.header.select_all.is_some())
            + usize::from(self.header.details)
    }

    /// Data rows, empty while loading or when there are none.
    pub fn rows(&self) -> &[RowView<K>] {
        match &self.body {
            BodyView::Rows(rows) => rows,
            _ => &[],
        }
    }
}

impl<T: TableRow> DataTable<T> {
    /// Project the current state into a [`TableView`].
    pub fn view(&self) -> TableView<T::Key> {
        let Ok(guard) = self.inner.read() else {
            return TableView {
                header: HeaderView {
                    select_all: None,
                    columns: Vec::new(),
                    details: false,
                },
                body: BodyView::Empty(String::new()),
            };
        };

        let columns = guard
            .columns
            .iter()
            .map(|col| HeaderCell {
                id: col.id.clone(),
                label: col.label.clone(),
                align: col.align,
                width: col.width,
                sortable: col.is_sortable(),
                sort: guard
                    .sort
                    .as_ref()
                    .filter(|s| s.column == col.id)
                    .map(|s| s.direction),
            })
            .collect();

        // Loading hides the interactive columns along with the rows.
        let interactive = !guard.loading;
        let header = HeaderView {
            select_all: (guard.selectable && interactive)
                .then(|| guard.selection.check_state(guard.distinct_keys().len())),
            columns,
            details: guard.detail.is_some() && interactive,
        };

        let body = if guard.loading {
            BodyView::Loading
        } else if guard.rows.is_empty() {
            BodyView::Empty(guard.empty_state.clone())
        } else {
            let rows = guard
                .displayed()
                .enumerate()
                .map(|(pos, row)| {
                    let key = row.key();
                    let cells = guard
                        .columns
                        .iter()
                        .map(|col| match col.renderer() {
                            Some(render) => render(row),
                            None => row
                                .field(&col.id)
                                .unwrap_or_else(|| EMPTY_CELL.to_string()),
                        })
                        .collect();
                    let is_expanded = guard.expanded.as_ref() == Some(&key);
                    RowView {
                        selected: guard
                            .selectable
                            .then(|| guard.selection.is_selected(&key)),
                        expanded: guard.detail.as_ref().map(|_| is_expanded),
                        focused: guard.cursor == Some(pos),
                        detail: guard
                            .detail
                            .as_ref()
                            .filter(|_| is_expanded)
                            .map(|render| render(row)),
                        cells,
                        key,
                    }
                })
                .collect();
            BodyView::Rows(rows)
        };

        TableView { header, body }
    }
}
