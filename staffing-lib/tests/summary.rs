use rust_decimal::Decimal;
use staffing_lib::model::{Candidate, CandidateStatus, ComplianceItem, Occupation};
use staffing_lib::summary::{candidates_by_status, occupations_by_category, required_compliance};

#[test]
fn test_occupations_grouped_by_category() {
    let mut inactive = Occupation::new("Picker", "Warehouse", Decimal::new(2000, 2));
    inactive.active = false;
    let occupations = vec![
        Occupation::new("Nurse", "Healthcare", Decimal::new(6000, 2)),
        Occupation::new("Forklift", "Warehouse", Decimal::new(2500, 2)),
        inactive,
        Occupation::new("Aide", "Healthcare", Decimal::new(3001, 2)),
    ];

    let summary = occupations_by_category(&occupations);
    assert_eq!(summary.len(), 2);

    assert_eq!(summary[0].category, "Healthcare");
    assert_eq!(summary[0].count, 2);
    assert_eq!(summary[0].average_rate, Decimal::new(4500, 2));

    assert_eq!(summary[1].category, "Warehouse");
    assert_eq!(summary[1].active, 1);
    assert_eq!(summary[1].average_rate, Decimal::new(2250, 2));
}

#[test]
fn test_candidates_by_status_includes_zero_counts() {
    let candidates = vec![
        Candidate::new("A", "One", "a@x.example"),
        Candidate::new("B", "Two", "b@x.example").with_status(CandidateStatus::Placed),
        Candidate::new("C", "Three", "c@x.example"),
    ];
    let counts = candidates_by_status(&candidates);
    assert_eq!(counts[&CandidateStatus::Applied], 2);
    assert_eq!(counts[&CandidateStatus::Placed], 1);
    assert_eq!(counts[&CandidateStatus::Screening], 0);
    assert_eq!(counts.len(), 4);
}

#[test]
fn test_required_compliance_count() {
    let items = vec![
        ComplianceItem::new("Background Check", "Screening"),
        ComplianceItem::new("Food Handler", "Health").optional(),
    ];
    assert_eq!(required_compliance(&items), 1);
}
