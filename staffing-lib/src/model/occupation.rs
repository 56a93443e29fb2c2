//! Occupations offered to organizations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use staffing_table::TableRow;

use super::{Entity, new_id, short_date};
use crate::error::{FieldChecks, ValidationError};

/// A job type with a standard hourly bill rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occupation {
    pub id: String,
    pub title: String,
    /// Grouping such as "Healthcare" or "Warehouse".
    pub category: String,
    /// Hourly bill rate.
    pub bill_rate: Decimal,
    pub description: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Occupation {
    /// Creates an active occupation with a fresh id.
    pub fn new(title: impl Into<String>, category: impl Into<String>, bill_rate: Decimal) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            category: category.into(),
            bill_rate,
            description: String::new(),
            active: true,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Bill rate formatted for display, e.g. `$42.50/hr`.
    pub fn rate_label(&self) -> String {
        format!("${:.2}/hr", self.bill_rate)
    }

    pub fn status_label(&self) -> &'static str {
        if self.active { "Active" } else { "Inactive" }
    }
}

impl Entity for Occupation {
    const COLLECTION: &'static str = "occupations";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new("Occupation")
            .required("title", &self.title)
            .required("category", &self.category)
            .check(
                "bill_rate",
                !self.bill_rate.is_sign_negative(),
                "must not be negative",
            )
            .finish()
    }
}

impl TableRow for Occupation {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, column_id: &str) -> Option<String> {
        match column_id {
            "title" => Some(self.title.clone()),
            "category" => Some(self.category.clone()),
            "bill_rate" => Some(self.rate_label()),
            "status" => Some(self.status_label().to_string()),
            "description" => Some(self.description.clone()).filter(|d| !d.is_empty()),
            "created" => Some(short_date(&self.created_at)),
            _ => None,
        }
    }
}
