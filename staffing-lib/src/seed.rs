//! Demo data for a fresh store.

use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::model::{
    Candidate, CandidateStatus, ComplianceItem, Entity, Occupation, Vendor, VendorStatus,
};
use crate::store::{CollectionStore, Repository, Store};

/// How many records were written per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub occupations: usize,
    pub vendors: usize,
    pub compliance: usize,
    pub candidates: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.occupations + self.vendors + self.compliance + self.candidates
    }
}

/// Demo occupations.
pub fn demo_occupations() -> Vec<Occupation> {
    vec![
        Occupation::new("Registered Nurse", "Healthcare", Decimal::new(6250, 2))
            .with_description("Acute and long-term care shifts, valid state license required."),
        Occupation::new("Certified Nursing Assistant", "Healthcare", Decimal::new(2875, 2))
            .with_description("Patient support under RN supervision."),
        Occupation::new("Forklift Operator", "Warehouse", Decimal::new(2400, 2))
            .with_description("Sit-down and reach truck, certification on file."),
        Occupation::new("Picker / Packer", "Warehouse", Decimal::new(1950, 2)),
        Occupation::new("Line Cook", "Hospitality", Decimal::new(2200, 2))
            .with_description("High-volume kitchen experience preferred."),
        Occupation::new("Front Desk Agent", "Hospitality", Decimal::new(2050, 2)),
        Occupation::new("Help Desk Technician", "IT", Decimal::new(3600, 2))
            .with_description("Tier 1 support, ticketing and remote tooling."),
    ]
}

/// Demo vendors, staffing the given occupations round-robin.
pub fn demo_vendors(occupations: &[Occupation]) -> Vec<Vendor> {
    let ids = |step: usize, offset: usize| -> Vec<String> {
        occupations
            .iter()
            .skip(offset)
            .step_by(step.max(1))
            .map(|o| o.id.clone())
            .collect()
    };
    vec![
        Vendor::new("Acme Staffing", "ops@acme-staffing.example")
            .with_phone("555-0100")
            .with_status(VendorStatus::Active)
            .with_occupations(ids(2, 0)),
        Vendor::new("Blue Line Workforce", "hello@blueline.example")
            .with_status(VendorStatus::Active)
            .with_occupations(ids(2, 1)),
        Vendor::new("Crew Co", "contact@crewco.example")
            .with_phone("555-0199")
            .with_occupations(ids(3, 0)),
        Vendor::new("Northwind Talent", "talent@northwind.example")
            .with_status(VendorStatus::Suspended),
    ]
}

/// Demo compliance requirements.
pub fn demo_compliance() -> Vec<ComplianceItem> {
    vec![
        ComplianceItem::new("Background Check", "Screening")
            .with_description("County and federal criminal search."),
        ComplianceItem::new("Drug Screen", "Screening").renew_every(365),
        ComplianceItem::new("TB Test", "Health")
            .renew_every(365)
            .with_description("Required for all healthcare placements."),
        ComplianceItem::new("Nursing License", "Licensing").renew_every(730),
        ComplianceItem::new("Forklift Certification", "Licensing").renew_every(1095),
        ComplianceItem::new("Food Handler Card", "Health")
            .optional()
            .renew_every(1095),
    ]
}

/// Demo candidates spread across occupations and vendors.
pub fn demo_candidates(occupations: &[Occupation], vendors: &[Vendor]) -> Vec<Candidate> {
    const PEOPLE: [(&str, &str); 8] = [
        ("Maria", "Lopez"),
        ("James", "Carter"),
        ("Aisha", "Khan"),
        ("Tom", "Nguyen"),
        ("Sofia", "Rossi"),
        ("Daniel", "Okafor"),
        ("Emma", "Schultz"),
        ("Liam", "O'Brien"),
    ];

    PEOPLE
        .iter()
        .enumerate()
        .map(|(i, (first, last))| {
            let email = format!(
                "{}.{}@mail.example",
                first.to_lowercase(),
                last.to_lowercase().replace('\'', "")
            );
            let status = CandidateStatus::ALL[i % CandidateStatus::ALL.len()];
            let mut candidate = Candidate::new(*first, *last, email).with_status(status);
            if !occupations.is_empty() {
                candidate = candidate.for_occupation(occupations[i % occupations.len()].id.clone());
            }
            if !vendors.is_empty() && i % 3 != 0 {
                candidate = candidate.from_vendor(vendors[i % vendors.len()].id.clone());
            }
            candidate
        })
        .collect()
}

async fn fill_if_empty<E: Entity>(
    repo: &CollectionStore<E>,
    records: Vec<E>,
) -> Result<usize, StoreError> {
    if !repo.list().await?.is_empty() {
        return Ok(0);
    }
    let count = records.len();
    repo.replace_all(records).await?;
    log::info!("seeded {count} {} records", E::COLLECTION);
    Ok(count)
}

/// Populate every empty collection with demo records.
///
/// Collections that already hold records are left alone, so running this
/// twice writes nothing the second time.
pub async fn seed_if_empty(store: &Store) -> Result<SeedReport, StoreError> {
    let occupations_repo = store.repository::<Occupation>();
    let vendors_repo = store.repository::<Vendor>();

    let occupations = fill_if_empty(&occupations_repo, demo_occupations()).await?;
    let occupation_list = occupations_repo.list().await?;

    let vendors = fill_if_empty(&vendors_repo, demo_vendors(&occupation_list)).await?;
    let vendor_list = vendors_repo.list().await?;

    let compliance = fill_if_empty(&store.repository::<ComplianceItem>(), demo_compliance()).await?;
    let candidates = fill_if_empty(
        &store.repository::<Candidate>(),
        demo_candidates(&occupation_list, &vendor_list),
    )
    .await?;

    Ok(SeedReport {
        occupations,
        vendors,
        compliance,
        candidates,
    })
}
