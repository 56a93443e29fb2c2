//! Fuzzy row filtering using nucleo-matcher.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use staffing_table::TableRow;

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Score `items` against `query`.
///
/// Returns matches sorted by score, highest first; equal scores keep item
/// order. A blank query matches every item with score 0.
pub fn fuzzy_filter<S: AsRef<str>>(query: &str, items: &[S]) -> Vec<FilterMatch> {
    if query.trim().is_empty() {
        return (0..items.len())
            .map(|index| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let haystack = Utf32Str::new(label.as_ref(), &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
    matches
}

/// Text a row is matched against: the given fields joined by spaces.
pub fn search_text<T: TableRow>(row: &T, fields: &[&str]) -> String {
    fields
        .iter()
        .filter_map(|id| row.field(id))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rows matching `query`, best match first.
pub fn filter_rows<T: TableRow>(rows: &[T], query: &str, fields: &[&str]) -> Vec<T> {
    if query.trim().is_empty() {
        return rows.to_vec();
    }
    let labels: Vec<String> = rows.iter().map(|row| search_text(row, fields)).collect();
    fuzzy_filter(query, &labels)
        .into_iter()
        .map(|m| rows[m.index].clone())
        .collect()
}
