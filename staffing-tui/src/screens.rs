//! One table per record type.
//!
//! [`ScreenRecord`] describes how a record type shows up in a table: its
//! columns, comparators, detail panel and searchable fields.
//! [`RecordScreen`] ties such a table to the record's repository.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use staffing_lib::error::StoreError;
use staffing_lib::model::{Candidate, ComplianceItem, Entity, Occupation, Screen, Vendor};
use staffing_lib::store::{CollectionStore, Repository, Store};
use staffing_lib::summary::{candidates_by_status, occupations_by_category, required_compliance};
use staffing_table::{
    Alignment, Column, DataTable, EventResult, Line, TableAction, TableRow, render_lines,
};

use crate::filter::filter_rows;

/// A record type that has its own list screen.
pub trait ScreenRecord: Entity + TableRow<Key = String> {
    const SCREEN: Screen;

    /// Shown when the collection (or the filtered view of it) is empty.
    const EMPTY_STATE: &'static str;

    /// Field ids matched by the fuzzy filter.
    const SEARCH_FIELDS: &'static [&'static str];

    fn columns() -> Vec<Column<Self>>;

    /// Text of the detail panel under an expanded row.
    fn detail(&self) -> String;

    /// Short name used in status messages.
    fn name(&self) -> String;

    /// Moves the record to its next status and returns the new label.
    fn cycle_status(&mut self) -> String;

    /// Totals over every loaded record, shown in the status line.
    fn summarize(_records: &[Self]) -> Option<String> {
        None
    }
}

impl ScreenRecord for Occupation {
    const SCREEN: Screen = Screen::Occupations;
    const EMPTY_STATE: &'static str = "No occupations found.";
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "category", "description"];

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("title", "Title").sort_by_key(|o: &Occupation| Some(o.title.to_lowercase())),
            Column::new("category", "Category")
                .sort_by_key(|o: &Occupation| Some(o.category.to_lowercase())),
            Column::new("bill_rate", "Bill Rate")
                .align(Alignment::Right)
                .sort_by_key(|o: &Occupation| Some(o.bill_rate)),
            Column::new("status", "Status").sort_by_key(|o: &Occupation| Some(!o.active)),
            Column::new("created", "Created").sort_by_key(|o: &Occupation| Some(o.created_at)),
        ]
    }

    fn detail(&self) -> String {
        let description = if self.description.is_empty() {
            "No description."
        } else {
            self.description.as_str()
        };
        format!(
            "{description}\nBills at {} in {}.",
            self.rate_label(),
            self.category
        )
    }

    fn name(&self) -> String {
        self.title.clone()
    }

    fn cycle_status(&mut self) -> String {
        self.active = !self.active;
        self.status_label().to_string()
    }

    fn summarize(records: &[Self]) -> Option<String> {
        let groups = occupations_by_category(records);
        if groups.is_empty() {
            return None;
        }
        let parts: Vec<String> = groups
            .iter()
            .map(|g| format!("{} {} @ ${:.2}/hr", g.category, g.count, g.average_rate))
            .collect();
        Some(parts.join(" · "))
    }
}

impl ScreenRecord for Vendor {
    const SCREEN: Screen = Screen::Vendors;
    const EMPTY_STATE: &'static str = "No vendors found.";
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "contact_email", "phone", "status"];

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("name", "Name").sort_by_key(|v: &Vendor| Some(v.name.to_lowercase())),
            Column::new("contact_email", "Contact")
                .sort_by_key(|v: &Vendor| Some(v.contact_email.to_lowercase())),
            Column::new("phone", "Phone").sort_by_key(|v: &Vendor| v.phone.clone()),
            Column::new("status", "Status").sort_by_key(|v: &Vendor| Some(v.status)),
            Column::new("occupations", "Occupations")
                .align(Alignment::Right)
                .sort_by_key(|v: &Vendor| Some(v.occupation_ids.len())),
        ]
    }

    fn detail(&self) -> String {
        format!(
            "Contact {} at {}.\nSupplies {} occupations. Status: {}.",
            self.name,
            self.contact_email,
            self.occupation_ids.len(),
            self.status
        )
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn cycle_status(&mut self) -> String {
        self.status = self.status.next();
        self.status.to_string()
    }
}

impl ScreenRecord for ComplianceItem {
    const SCREEN: Screen = Screen::Compliance;
    const EMPTY_STATE: &'static str = "No compliance items found.";
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "category"];

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("name", "Name")
                .sort_by_key(|c: &ComplianceItem| Some(c.name.to_lowercase())),
            Column::new("category", "Category")
                .sort_by_key(|c: &ComplianceItem| Some(c.category.to_lowercase())),
            Column::new("required", "Required").sort_by_key(|c: &ComplianceItem| Some(!c.required)),
            Column::new("renewal_days", "Renewal")
                .align(Alignment::Right)
                .sort_by_key(|c: &ComplianceItem| c.renewal_days),
        ]
    }

    fn detail(&self) -> String {
        let renewal = match self.renewal_days {
            Some(days) => format!("Renew every {days} days."),
            None => "Does not expire.".to_string(),
        };
        if self.description.is_empty() {
            renewal
        } else {
            format!("{}\n{renewal}", self.description)
        }
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn cycle_status(&mut self) -> String {
        self.required = !self.required;
        if self.required { "Required" } else { "Optional" }.to_string()
    }

    fn summarize(records: &[Self]) -> Option<String> {
        Some(format!(
            "{} of {} required",
            required_compliance(records),
            records.len()
        ))
    }
}

impl ScreenRecord for Candidate {
    const SCREEN: Screen = Screen::Candidates;
    const EMPTY_STATE: &'static str = "No candidates found.";
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email", "status"];

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("name", "Name").sort_by_key(|c: &Candidate| {
                Some((c.last_name.to_lowercase(), c.first_name.to_lowercase()))
            }),
            Column::new("email", "Email").sort_by_key(|c: &Candidate| Some(c.email.to_lowercase())),
            Column::new("status", "Status").sort_by_key(|c: &Candidate| Some(c.status)),
            Column::new("created", "Applied").sort_by_key(|c: &Candidate| Some(c.created_at)),
        ]
    }

    fn detail(&self) -> String {
        let source = if self.vendor_id.is_some() {
            "Submitted by a vendor."
        } else {
            "Applied directly."
        };
        format!("{} <{}>\n{source} Status: {}.", self.full_name(), self.email, self.status)
    }

    fn name(&self) -> String {
        self.full_name()
    }

    fn cycle_status(&mut self) -> String {
        self.status = self.status.next();
        self.status.to_string()
    }

    fn summarize(records: &[Self]) -> Option<String> {
        let parts: Vec<String> = candidates_by_status(records)
            .into_iter()
            .map(|(status, count)| format!("{} {count}", status.label()))
            .collect();
        Some(parts.join(" · "))
    }
}

/// What the front end needs from a screen, whatever its record type.
#[async_trait]
pub trait ListScreen: Send + Sync {
    fn screen(&self) -> Screen;

    /// Fetch every record from the store and refresh the table.
    async fn load(&mut self) -> Result<usize, StoreError>;

    fn set_loading(&self, loading: bool);

    fn is_loading(&self) -> bool;

    fn apply(&self, action: TableAction<String>) -> EventResult;

    fn filter(&self) -> &str;

    fn set_filter(&mut self, query: &str);

    /// Advance the status of the record under the cursor and save it.
    ///
    /// Returns the record name and its new status label.
    async fn cycle_cursor_status(&mut self) -> Result<Option<(String, String)>, StoreError>;

    /// Delete every selected record, returning how many were removed.
    async fn delete_selected(&mut self) -> Result<usize, StoreError>;

    fn selected_count(&self) -> usize;

    /// Rows currently shown, after filtering.
    fn shown_count(&self) -> usize;

    /// Records loaded from the store.
    fn total_count(&self) -> usize;

    fn summary(&self) -> Option<String>;

    fn render(&self, width: u16) -> Vec<Line>;

    fn take_dirty(&self) -> bool;
}

/// List screen for one record type.
pub struct RecordScreen<E: ScreenRecord> {
    repo: CollectionStore<E>,
    table: DataTable<E>,
    records: Vec<E>,
    query: String,
    selected: Arc<AtomicUsize>,
}

impl<E: ScreenRecord> RecordScreen<E> {
    pub fn new(store: &Store, selectable: bool) -> Self {
        let selected = Arc::new(AtomicUsize::new(0));
        let counter = selected.clone();
        let table = DataTable::new(E::columns())
            .with_selectable(selectable)
            .with_details(|row: &E| row.detail())
            .with_empty_state(E::EMPTY_STATE)
            .with_selection_callback(move |rows: &[E]| {
                counter.store(rows.len(), Ordering::SeqCst);
                log::debug!("{}: {} selected", E::COLLECTION, rows.len());
            });
        Self {
            repo: store.repository::<E>(),
            table,
            records: Vec::new(),
            query: String::new(),
            selected,
        }
    }

    pub fn table(&self) -> &DataTable<E> {
        &self.table
    }

    fn refilter(&self) {
        self.table
            .set_rows(filter_rows(&self.records, &self.query, E::SEARCH_FIELDS));
    }
}

#[async_trait]
impl<E: ScreenRecord> ListScreen for RecordScreen<E> {
    fn screen(&self) -> Screen {
        E::SCREEN
    }

    async fn load(&mut self) -> Result<usize, StoreError> {
        self.records = self.repo.list().await?;
        self.refilter();
        log::debug!("loaded {} {}", self.records.len(), E::COLLECTION);
        Ok(self.records.len())
    }

    fn set_loading(&self, loading: bool) {
        self.table.set_loading(loading);
    }

    fn is_loading(&self) -> bool {
        self.table.is_loading()
    }

    fn apply(&self, action: TableAction<String>) -> EventResult {
        self.table.apply(action)
    }

    fn filter(&self) -> &str {
        &self.query
    }

    fn set_filter(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.refilter();
        }
    }

    async fn cycle_cursor_status(&mut self) -> Result<Option<(String, String)>, StoreError> {
        let Some(mut record) = self.table.cursor_row() else {
            return Ok(None);
        };
        let label = record.cycle_status();
        let saved = self.repo.update(record).await?;
        let name = saved.name();
        if let Some(slot) = self.records.iter_mut().find(|r| r.id() == saved.id()) {
            *slot = saved;
        }
        self.refilter();
        Ok(Some((name, label)))
    }

    async fn delete_selected(&mut self) -> Result<usize, StoreError> {
        let keys = self.table.selected_keys();
        if keys.is_empty() {
            return Ok(0);
        }
        let removed = self.repo.delete_many(&keys).await?;
        self.records.retain(|r| !keys.iter().any(|k| k == r.id()));
        self.refilter();
        log::info!("deleted {removed} {}", E::COLLECTION);
        Ok(removed)
    }

    fn selected_count(&self) -> usize {
        self.selected.load(Ordering::SeqCst)
    }

    fn shown_count(&self) -> usize {
        self.table.len()
    }

    fn total_count(&self) -> usize {
        self.records.len()
    }

    fn summary(&self) -> Option<String> {
        E::summarize(&self.records)
    }

    fn render(&self, width: u16) -> Vec<Line> {
        render_lines(&self.table.view(), width)
    }

    fn take_dirty(&self) -> bool {
        self.table.take_dirty()
    }
}

/// Build the screen for `screen`.
///
/// Rows get checkboxes only when the portal may change records.
pub fn build_screen(screen: Screen, store: &Store, selectable: bool) -> Box<dyn ListScreen> {
    match screen {
        Screen::Occupations => Box::new(RecordScreen::<Occupation>::new(store, selectable)),
        Screen::Vendors => Box::new(RecordScreen::<Vendor>::new(store, selectable)),
        Screen::Compliance => Box::new(RecordScreen::<ComplianceItem>::new(store, selectable)),
        Screen::Candidates => Box::new(RecordScreen::<Candidate>::new(store, selectable)),
    }
}
