//! Plain-text rendering of a [`TableView`].
//!
//! Produces one [`Line`] per terminal row. Lines are padded to the full
//! width so a front end can style them as bars.

use crate::column::Alignment;
use crate::text::{display_width, fit, wrap};
use crate::view::{BodyView, HIDE_DETAILS, HeaderView, RowView, SHOW_DETAILS, TableView};

/// Gap between columns.
const COLUMN_GAP: &str = "  ";

/// Upper bound for content-sized columns.
const MAX_AUTO_WIDTH: usize = 40;

/// Indent of the detail panel under an expanded row.
const DETAIL_INDENT: usize = 4;

/// Placeholder glyph for the loading row.
const SKELETON: char = '░';

/// What a rendered line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Row { selected: bool, focused: bool },
    /// Part of the expanded row's detail panel.
    Detail,
    /// The loading skeleton row.
    Skeleton,
    /// The empty-state message.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl Line {
    fn new(kind: LineKind, text: String) -> Self {
        Self { kind, text }
    }
}

/// Render a table view into `width` columns.
pub fn render_lines<K>(view: &TableView<K>, width: u16) -> Vec<Line> {
    let width = width as usize;
    let widths = column_widths(view);
    let mut lines = vec![Line::new(
        LineKind::Header,
        fit(&header_text(&view.header, &widths), width, Alignment::Left),
    )];

    match &view.body {
        BodyView::Loading => {
            let skeleton: String = std::iter::repeat_n(SKELETON, width).collect();
            lines.push(Line::new(LineKind::Skeleton, skeleton));
        }
        BodyView::Empty(text) => {
            lines.push(Line::new(
                LineKind::Empty,
                fit(text, width, Alignment::Center),
            ));
        }
        BodyView::Rows(rows) => {
            for row in rows {
                let kind = LineKind::Row {
                    selected: row.selected.unwrap_or(false),
                    focused: row.focused,
                };
                lines.push(Line::new(
                    kind,
                    fit(&row_text(&view.header, row, &widths), width, Alignment::Left),
                ));
                if let Some(detail) = &row.detail {
                    let indent = DETAIL_INDENT.min(width.saturating_sub(1));
                    let mut wrapped = wrap(detail, width.saturating_sub(indent));
                    if wrapped.is_empty() {
                        wrapped.push(String::new());
                    }
                    for text in wrapped {
                        let indented = format!("{}{text}", " ".repeat(indent));
                        lines.push(Line::new(
                            LineKind::Detail,
                            fit(&indented, width, Alignment::Left),
                        ));
                    }
                }
            }
        }
    }

    lines
}

/// Width of each data column: fixed, or sized to header and content.
fn column_widths<K>(view: &TableView<K>) -> Vec<usize> {
    view.header
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            if let Some(w) = col.width {
                return w as usize;
            }
            // Room for the sort indicator so sorting does not shift columns.
            let header = display_width(&col.label) + if col.sortable { 2 } else { 0 };
            let content = view
                .rows()
                .iter()
                .filter_map(|r| r.cells.get(i))
                .map(|c| display_width(c))
                .max()
                .unwrap_or(0);
            header.max(content).min(MAX_AUTO_WIDTH)
        })
        .collect()
}

fn header_text(header: &HeaderView, widths: &[usize]) -> String {
    let mut parts = Vec::with_capacity(widths.len() + 2);
    if let Some(state) = header.select_all {
        parts.push(state.indicator().to_string());
    }
    for (col, &w) in header.columns.iter().zip(widths) {
        let label = match col.sort {
            Some(direction) => format!("{} {}", col.label, direction.indicator()),
            None => col.label.clone(),
        };
        parts.push(fit(&label, w, col.align));
    }
    if header.details {
        parts.push(" ".repeat(details_width()));
    }
    parts.join(COLUMN_GAP)
}

fn row_text<K>(header: &HeaderView, row: &RowView<K>, widths: &[usize]) -> String {
    let mut parts = Vec::with_capacity(widths.len() + 2);
    if let Some(selected) = row.selected {
        parts.push(if selected { "■" } else { "□" }.to_string());
    }
    for ((cell, col), &w) in row.cells.iter().zip(&header.columns).zip(widths) {
        parts.push(fit(cell, w, col.align));
    }
    if let Some(label) = row.details_label() {
        parts.push(fit(label, details_width(), Alignment::Left));
    }
    parts.join(COLUMN_GAP)
}

fn details_width() -> usize {
    display_width(SHOW_DETAILS).max(display_width(HIDE_DETAILS))
}
