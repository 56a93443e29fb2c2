//! Compliance requirements such as licenses and background checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use staffing_table::TableRow;

use super::{Entity, new_id, short_date};
use crate::error::{FieldChecks, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub id: String,
    pub name: String,
    /// Grouping such as "Licensing" or "Health".
    pub category: String,
    /// Whether every placed candidate must hold this item.
    pub required: bool,
    /// Days until the item must be renewed; `None` never expires.
    pub renewal_days: Option<u32>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl ComplianceItem {
    /// Creates a required item with a fresh id.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            category: category.into(),
            required: true,
            renewal_days: None,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn renew_every(mut self, days: u32) -> Self {
        self.renewal_days = Some(days);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Entity for ComplianceItem {
    const COLLECTION: &'static str = "compliance";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new("ComplianceItem")
            .required("name", &self.name)
            .required("category", &self.category)
            .check(
                "renewal_days",
                self.renewal_days != Some(0),
                "must be at least one day",
            )
            .finish()
    }
}

impl TableRow for ComplianceItem {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, column_id: &str) -> Option<String> {
        match column_id {
            "name" => Some(self.name.clone()),
            "category" => Some(self.category.clone()),
            "required" => Some(if self.required { "Required" } else { "Optional" }.to_string()),
            "renewal_days" => self.renewal_days.map(|d| format!("{d} days")),
            "created" => Some(short_date(&self.created_at)),
            _ => None,
        }
    }
}
