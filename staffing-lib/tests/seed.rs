use staffing_lib::model::{Candidate, ComplianceItem, Entity, Occupation, Vendor};
use staffing_lib::seed::{demo_occupations, seed_if_empty};
use staffing_lib::store::{Repository, Store};

#[tokio::test]
async fn test_seed_fills_every_collection() {
    let store = Store::in_memory();
    let report = seed_if_empty(&store).await.unwrap();

    assert_eq!(report.occupations, store.repository::<Occupation>().list().await.unwrap().len());
    assert!(report.vendors > 0);
    assert!(report.compliance > 0);
    assert!(report.candidates > 0);
    assert_eq!(store.collections().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let store = Store::in_memory();
    let first = seed_if_empty(&store).await.unwrap();
    let second = seed_if_empty(&store).await.unwrap();

    assert!(first.total() > 0);
    assert_eq!(second.total(), 0);
}

#[tokio::test]
async fn test_seed_leaves_existing_collection_alone() {
    let store = Store::in_memory();
    let repo = store.repository::<Vendor>();
    repo.add(Vendor::new("Mine", "me@mine.example")).await.unwrap();

    let report = seed_if_empty(&store).await.unwrap();
    assert_eq!(report.vendors, 0);
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_seeded_candidates_reference_occupations() {
    let store = Store::in_memory();
    seed_if_empty(&store).await.unwrap();

    let occupations = store.repository::<Occupation>().list().await.unwrap();
    let candidates = store.repository::<Candidate>().list().await.unwrap();
    for candidate in candidates {
        let occupation_id = candidate.occupation_id.expect("seeded candidates have occupations");
        assert!(occupations.iter().any(|o| o.id == occupation_id));
    }
}

#[test]
fn test_demo_records_are_valid() {
    for occupation in demo_occupations() {
        occupation.validate().unwrap();
    }
    for item in staffing_lib::seed::demo_compliance() {
        ComplianceItem::validate(&item).unwrap();
    }
}
