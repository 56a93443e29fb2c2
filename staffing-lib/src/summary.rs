//! Derived totals shown alongside the lists.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::model::{Candidate, CandidateStatus, ComplianceItem, Occupation};

/// Totals for one occupation category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: String,
    pub count: usize,
    pub active: usize,
    /// Mean bill rate, rounded to cents.
    pub average_rate: Decimal,
}

/// Group occupations by category, sorted by category name.
pub fn occupations_by_category(occupations: &[Occupation]) -> Vec<CategorySummary> {
    let mut groups: BTreeMap<&str, Vec<&Occupation>> = BTreeMap::new();
    for occupation in occupations {
        groups
            .entry(occupation.category.trim())
            .or_default()
            .push(occupation);
    }

    groups
        .into_iter()
        .map(|(category, items)| {
            let total: Decimal = items.iter().map(|o| o.bill_rate).sum();
            let average_rate = (total / Decimal::from(items.len())).round_dp(2);
            CategorySummary {
                category: category.to_string(),
                count: items.len(),
                active: items.iter().filter(|o| o.active).count(),
                average_rate,
            }
        })
        .collect()
}

/// Candidate count per status; every status is present, possibly zero.
pub fn candidates_by_status(candidates: &[Candidate]) -> BTreeMap<CandidateStatus, usize> {
    let mut counts: BTreeMap<CandidateStatus, usize> =
        CandidateStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for candidate in candidates {
        *counts.entry(candidate.status).or_default() += 1;
    }
    counts
}

/// Number of compliance items every placement must satisfy.
pub fn required_compliance(items: &[ComplianceItem]) -> usize {
    items.iter().filter(|i| i.required).count()
}
