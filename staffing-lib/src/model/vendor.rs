//! Staffing vendors that supply candidates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use staffing_table::TableRow;

use super::{Entity, new_id, short_date};
use crate::error::{FieldChecks, ValidationError};

/// Onboarding state of a vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VendorStatus {
    Pending,
    Active,
    Suspended,
}

impl VendorStatus {
    pub fn label(self) -> &'static str {
        match self {
            VendorStatus::Pending => "Pending",
            VendorStatus::Active => "Active",
            VendorStatus::Suspended => "Suspended",
        }
    }

    /// Next status in the review cycle.
    pub fn next(self) -> Self {
        match self {
            VendorStatus::Pending => VendorStatus::Active,
            VendorStatus::Active => VendorStatus::Suspended,
            VendorStatus::Suspended => VendorStatus::Pending,
        }
    }
}

impl std::fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub status: VendorStatus,
    /// Occupations this vendor can staff.
    pub occupation_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Vendor {
    /// Creates a pending vendor with a fresh id.
    pub fn new(name: impl Into<String>, contact_email: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            contact_email: contact_email.into(),
            phone: None,
            status: VendorStatus::Pending,
            occupation_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_status(mut self, status: VendorStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_occupations(mut self, ids: Vec<String>) -> Self {
        self.occupation_ids = ids;
        self
    }
}

impl Entity for Vendor {
    const COLLECTION: &'static str = "vendors";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new("Vendor")
            .required("name", &self.name)
            .email("contact_email", &self.contact_email)
            .check(
                "phone",
                self.phone.as_deref().is_none_or(|p| !p.trim().is_empty()),
                "must not be blank when present",
            )
            .finish()
    }
}

impl TableRow for Vendor {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, column_id: &str) -> Option<String> {
        match column_id {
            "name" => Some(self.name.clone()),
            "contact_email" => Some(self.contact_email.clone()),
            "phone" => self.phone.clone(),
            "status" => Some(self.status.to_string()),
            "occupations" => Some(self.occupation_ids.len().to_string()),
            "created" => Some(short_date(&self.created_at)),
            _ => None,
        }
    }
}
