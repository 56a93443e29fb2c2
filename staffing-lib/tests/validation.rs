use rust_decimal::Decimal;
use staffing_lib::error::{FieldChecks, FieldValidationError};
use staffing_lib::model::{Candidate, ComplianceItem, Entity, Occupation, Vendor};

#[test]
fn test_field_checks_pass() {
    assert!(FieldChecks::new("Thing").required("name", "x").finish().is_ok());
}

#[test]
fn test_blank_is_required_error() {
    let err = FieldChecks::new("Thing")
        .required("name", "   ")
        .finish()
        .unwrap_err();
    assert_eq!(err.fields, vec![FieldValidationError::new("name", "is required")]);
    assert_eq!(err.to_string(), "Thing is invalid: name: is required");
}

#[test]
fn test_email_checks() {
    let err = FieldChecks::new("Thing")
        .email("a", "")
        .email("b", "nobody")
        .email("c", "someone@example.com")
        .finish()
        .unwrap_err();
    assert_eq!(err.fields.len(), 2);
    assert_eq!(err.field("a").unwrap().message, "is required");
    assert_eq!(err.field("b").unwrap().message, "is not a valid email address");
    assert!(err.field("c").is_none());
}

#[test]
fn test_occupation_negative_rate() {
    let occupation = Occupation::new("Cook", "Hospitality", Decimal::new(-100, 2));
    let err = occupation.validate().unwrap_err();
    assert!(err.field("bill_rate").is_some());
}

#[test]
fn test_vendor_blank_phone() {
    let vendor = Vendor::new("Acme", "ops@acme.example").with_phone(" ");
    assert!(vendor.validate().unwrap_err().field("phone").is_some());
}

#[test]
fn test_compliance_zero_renewal() {
    let item = ComplianceItem::new("TB Test", "Health").renew_every(0);
    assert!(item.validate().unwrap_err().field("renewal_days").is_some());
}

#[test]
fn test_candidate_requires_names() {
    let candidate = Candidate::new("", " ", "x@y.example");
    let err = candidate.validate().unwrap_err();
    assert!(err.field("first_name").is_some());
    assert!(err.field("last_name").is_some());
    assert!(err.field("email").is_none());
}
