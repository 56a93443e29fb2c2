use staffing_table::TableRow;
use staffing_tui::filter::{filter_rows, fuzzy_filter, search_text};

#[derive(Clone, Debug)]
struct Item {
    id: u32,
    title: &'static str,
    note: Option<&'static str>,
}

impl TableRow for Item {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn field(&self, column_id: &str) -> Option<String> {
        match column_id {
            "title" => Some(self.title.to_string()),
            "note" => self.note.map(str::to_string),
            _ => None,
        }
    }
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_blank_query_keeps_everything_in_order() {
    let matches = fuzzy_filter("  ", &labels(&["b", "a"]));
    assert_eq!(matches.iter().map(|m| m.index).collect::<Vec<_>>(), vec![0, 1]);
    assert!(matches.iter().all(|m| m.score == 0));
}

#[test]
fn test_non_matching_items_dropped() {
    let matches = fuzzy_filter("xyz", &labels(&["apple", "banana"]));
    assert!(matches.is_empty());
}

#[test]
fn test_best_match_first() {
    let items = labels(&["Picker / Packer", "Registered Nurse", "Nurse"]);
    let matches = fuzzy_filter("nurse", &items);

    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|m| m.index != 0));
    assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_case_is_ignored() {
    let matches = fuzzy_filter("FORK", &labels(&["forklift operator"]));
    assert_eq!(matches.len(), 1);
}

#[test]
fn test_search_text_skips_missing_fields() {
    let item = Item {
        id: 1,
        title: "Line Cook",
        note: None,
    };
    assert_eq!(search_text(&item, &["title", "note", "other"]), "Line Cook");
}

#[test]
fn test_filter_rows_matches_any_field() {
    let rows = vec![
        Item {
            id: 1,
            title: "Line Cook",
            note: Some("kitchen"),
        },
        Item {
            id: 2,
            title: "Forklift Operator",
            note: None,
        },
    ];

    let hits = filter_rows(&rows, "kitchen", &["title", "note"]);
    assert_eq!(hits.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);

    let all = filter_rows(&rows, "", &["title"]);
    assert_eq!(all.len(), 2);
}
