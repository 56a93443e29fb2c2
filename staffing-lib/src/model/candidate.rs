//! Candidates moving through the placement pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use staffing_table::TableRow;

use super::{Entity, new_id, short_date};
use crate::error::{FieldChecks, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CandidateStatus {
    Applied,
    Screening,
    Placed,
    Inactive,
}

impl CandidateStatus {
    pub const ALL: [CandidateStatus; 4] = [
        CandidateStatus::Applied,
        CandidateStatus::Screening,
        CandidateStatus::Placed,
        CandidateStatus::Inactive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CandidateStatus::Applied => "Applied",
            CandidateStatus::Screening => "Screening",
            CandidateStatus::Placed => "Placed",
            CandidateStatus::Inactive => "Inactive",
        }
    }

    /// Next pipeline stage; `Inactive` wraps back to `Applied`.
    pub fn next(self) -> Self {
        match self {
            CandidateStatus::Applied => CandidateStatus::Screening,
            CandidateStatus::Screening => CandidateStatus::Placed,
            CandidateStatus::Placed => CandidateStatus::Inactive,
            CandidateStatus::Inactive => CandidateStatus::Applied,
        }
    }
}

impl std::fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub occupation_id: Option<String>,
    /// Vendor that submitted the candidate, if any.
    pub vendor_id: Option<String>,
    pub status: CandidateStatus,
    pub created_at: DateTime<Utc>,
}

impl Candidate {
    /// Creates an applicant with a fresh id.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            occupation_id: None,
            vendor_id: None,
            status: CandidateStatus::Applied,
            created_at: Utc::now(),
        }
    }

    pub fn for_occupation(mut self, occupation_id: impl Into<String>) -> Self {
        self.occupation_id = Some(occupation_id.into());
        self
    }

    pub fn from_vendor(mut self, vendor_id: impl Into<String>) -> Self {
        self.vendor_id = Some(vendor_id.into());
        self
    }

    pub fn with_status(mut self, status: CandidateStatus) -> Self {
        self.status = status;
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

impl Entity for Candidate {
    const COLLECTION: &'static str = "candidates";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new("Candidate")
            .required("first_name", &self.first_name)
            .required("last_name", &self.last_name)
            .email("email", &self.email)
            .finish()
    }
}

impl TableRow for Candidate {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, column_id: &str) -> Option<String> {
        match column_id {
            "name" => Some(self.full_name()),
            "email" => Some(self.email.clone()),
            "status" => Some(self.status.to_string()),
            "created" => Some(short_date(&self.created_at)),
            _ => None,
        }
    }
}
