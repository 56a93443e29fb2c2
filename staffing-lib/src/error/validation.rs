//! Validation error types

/// Error information for a specific field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    /// The field that failed validation.
    pub field: String,
    /// Human-readable validation error message.
    pub message: String,
}

impl FieldValidationError {
    /// Creates a new field validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A record failed validation on one or more fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} is invalid: {}", join_fields(.fields))]
pub struct ValidationError {
    /// Name of the record type.
    pub entity: &'static str,
    /// Every failing field, in check order.
    pub fields: Vec<FieldValidationError>,
}

impl ValidationError {
    /// Returns the error for `field`, if that field failed.
    pub fn field(&self, field: &str) -> Option<&FieldValidationError> {
        self.fields.iter().find(|f| f.field == field)
    }
}

fn join_fields(fields: &[FieldValidationError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collects field checks for one record.
///
/// # Example
///
/// ```
/// use staffing_lib::error::FieldChecks;
///
/// let result = FieldChecks::new("Vendor")
///     .required("name", "  ")
///     .email("contact_email", "not-an-email")
///     .finish();
/// assert_eq!(result.unwrap_err().fields.len(), 2);
/// ```
#[derive(Debug)]
pub struct FieldChecks {
    entity: &'static str,
    fields: Vec<FieldValidationError>,
}

impl FieldChecks {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            fields: Vec::new(),
        }
    }

    /// The value must contain something other than whitespace.
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.fields
                .push(FieldValidationError::new(field, "is required"));
        }
        self
    }

    /// The value must be a valid email address.
    pub fn email(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.fields
                .push(FieldValidationError::new(field, "is required"));
        } else if !email_address::EmailAddress::is_valid(value.trim()) {
            self.fields
                .push(FieldValidationError::new(field, "is not a valid email address"));
        }
        self
    }

    /// Fail `field` with `message` when `ok` is false.
    pub fn check(mut self, field: &str, ok: bool, message: &str) -> Self {
        if !ok {
            self.fields.push(FieldValidationError::new(field, message));
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                entity: self.entity,
                fields: self.fields,
            })
        }
    }
}
