use std::sync::{Arc, Mutex};

use staffing_table::{CheckState, Column, DataTable, EventResult, TableAction, TableRow};

#[derive(Clone, Debug, PartialEq)]
struct Worker {
    id: u32,
    name: String,
}

impl TableRow for Worker {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn field(&self, column_id: &str) -> Option<String> {
        match column_id {
            "name" => Some(self.name.clone()),
            _ => None,
        }
    }
}

fn workers(n: u32) -> Vec<Worker> {
    (1..=n)
        .map(|id| Worker {
            id,
            name: format!("worker {id}"),
        })
        .collect()
}

/// Selectable table that records every selection callback.
fn recording_table(rows: Vec<Worker>) -> (DataTable<Worker>, Arc<Mutex<Vec<Vec<u32>>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    let table = DataTable::with_rows(
        vec![Column::new("name", "Name").sort_by_key(|w: &Worker| Some(w.name.clone()))],
        rows,
    )
    .with_selectable(true)
    .with_selection_callback(move |rows: &[Worker]| {
        sink.lock()
            .unwrap()
            .push(rows.iter().map(|w| w.id).collect());
    });
    (table, calls)
}

fn last_call(calls: &Arc<Mutex<Vec<Vec<u32>>>>) -> Vec<u32> {
    calls.lock().unwrap().last().cloned().unwrap_or_default()
}

// ============================================================================
// Select all
// ============================================================================

#[test]
fn test_select_all_then_none() {
    let (t, calls) = recording_table(workers(5));

    assert!(t.toggle_all());
    assert_eq!(last_call(&calls), vec![1, 2, 3, 4, 5]);
    assert_eq!(t.select_all_state(), Some(CheckState::Checked));

    assert!(t.toggle_all());
    assert_eq!(last_call(&calls), Vec::<u32>::new());
    assert_eq!(t.select_all_state(), Some(CheckState::Unchecked));
    assert_eq!(calls.lock().unwrap().len(), 2);
}

#[test]
fn test_select_all_from_partial_selects_everything() {
    let (t, calls) = recording_table(workers(5));

    t.toggle_row(&2);
    t.toggle_row(&4);
    assert_eq!(last_call(&calls), vec![2, 4]);
    assert_eq!(t.select_all_state(), Some(CheckState::Indeterminate));

    t.toggle_all();
    assert_eq!(last_call(&calls), vec![1, 2, 3, 4, 5]);
    assert_eq!(t.selected_keys().len(), 5);
}

#[test]
fn test_toggle_row_twice_deselects() {
    let (t, calls) = recording_table(workers(3));

    assert!(t.toggle_row(&3));
    assert!(t.is_selected(&3));
    assert!(t.toggle_row(&3));
    assert!(!t.is_selected(&3));
    assert_eq!(calls.lock().unwrap().len(), 2);
}

#[test]
fn test_callback_receives_full_rows_in_display_order() {
    let rows = vec![
        Worker { id: 1, name: "zed".into() },
        Worker { id: 2, name: "amy".into() },
    ];
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    let t = DataTable::with_rows(
        vec![Column::new("name", "Name").sort_by_key(|w: &Worker| Some(w.name.clone()))],
        rows,
    )
    .with_selectable(true)
    .with_selection_callback(move |rows: &[Worker]| {
        *sink.lock().unwrap() = rows.to_vec();
    });

    t.toggle_sort("name");
    t.toggle_all();

    let got = received.lock().unwrap().clone();
    assert_eq!(got.iter().map(|w| w.name.as_str()).collect::<Vec<_>>(), vec!["amy", "zed"]);
}

// ============================================================================
// Guards
// ============================================================================

#[test]
fn test_not_selectable_ignores_toggles() {
    let t = DataTable::with_rows(vec![Column::new("name", "Name")], workers(2));
    assert!(!t.toggle_row(&1));
    assert!(!t.toggle_all());
    assert_eq!(t.select_all_state(), None);
}

#[test]
fn test_loading_ignores_toggles() {
    let (t, calls) = recording_table(workers(2));
    t.set_loading(true);

    assert_eq!(t.apply(TableAction::ToggleRow(1)), EventResult::Ignored);
    assert_eq!(t.apply(TableAction::ToggleAll), EventResult::Ignored);
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_unknown_key_is_ignored() {
    let (t, calls) = recording_table(workers(2));
    assert!(!t.toggle_row(&42));
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_select_all_on_empty_table_clears() {
    let (t, calls) = recording_table(Vec::new());
    assert!(t.toggle_all());
    assert_eq!(last_call(&calls), Vec::<u32>::new());
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_selection_follows_record_when_input_reorders() {
    let (t, _) = recording_table(workers(3));
    t.toggle_row(&1);

    let mut reversed = workers(3);
    reversed.reverse();
    t.set_rows(reversed);

    assert!(t.is_selected(&1));
    assert_eq!(t.selected_rows().iter().map(|w| w.id).collect::<Vec<_>>(), vec![1]);
    assert_eq!(t.displayed_keys(), vec![3, 2, 1]);
}

#[test]
fn test_new_rows_keep_surviving_selection() {
    let (t, calls) = recording_table(workers(4));
    t.toggle_row(&1);
    t.toggle_row(&4);
    let before = calls.lock().unwrap().len();

    t.set_rows(workers(4));
    assert_eq!(calls.lock().unwrap().len(), before);
    assert_eq!(t.selected_keys(), vec![1, 4]);

    t.set_rows(workers(2));
    assert_eq!(t.selected_keys(), vec![1]);
    assert_eq!(last_call(&calls), vec![1]);
}

#[test]
fn test_shared_key_shares_selection() {
    let rows = vec![
        Worker { id: 7, name: "first".into() },
        Worker { id: 7, name: "second".into() },
    ];
    let (t, calls) = recording_table(rows);

    t.toggle_row(&7);
    assert_eq!(last_call(&calls), vec![7, 7]);
    assert_eq!(t.select_all_state(), Some(CheckState::Checked));
}

#[test]
fn test_select_all_counts_shared_keys_once() {
    let rows = vec![
        Worker { id: 1, name: "a".into() },
        Worker { id: 1, name: "b".into() },
        Worker { id: 2, name: "c".into() },
    ];
    let (t, calls) = recording_table(rows);

    t.toggle_all();
    assert_eq!(last_call(&calls), vec![1, 1, 2]);
    assert_eq!(t.select_all_state(), Some(CheckState::Checked));

    t.toggle_all();
    assert!(last_call(&calls).is_empty());
    assert_eq!(t.select_all_state(), Some(CheckState::Unchecked));
}

#[test]
fn test_toggle_cursor_row() {
    let (t, _) = recording_table(workers(3));
    assert_eq!(t.apply(TableAction::ToggleCursorRow), EventResult::Ignored);

    t.apply(TableAction::CursorDown);
    t.apply(TableAction::CursorDown);
    assert_eq!(t.apply(TableAction::ToggleCursorRow), EventResult::Consumed);
    assert_eq!(t.selected_keys(), vec![2]);
}

#[test]
fn test_clear_selection() {
    let (t, calls) = recording_table(workers(3));
    assert!(!t.clear_selection());
    t.toggle_all();
    assert!(t.clear_selection());
    assert_eq!(last_call(&calls), Vec::<u32>::new());
}
