use staffing_lib::model::{Portal, Screen};

#[test]
fn test_admin_sees_every_screen() {
    assert_eq!(Portal::Admin.screens().len(), 4);
    assert!(Portal::Admin.screens().contains(&Screen::Vendors));
}

#[test]
fn test_vendor_portal_has_no_vendor_screen() {
    assert!(!Portal::Vendor.screens().contains(&Screen::Vendors));
}

#[test]
fn test_next_wraps() {
    assert_eq!(Portal::Candidate.next(), Portal::Admin);
    assert_eq!(Portal::Admin.next(), Portal::Organization);
}

#[test]
fn test_parse_ignores_case() {
    assert_eq!(Portal::parse(" vendor "), Some(Portal::Vendor));
    assert_eq!(Portal::parse("nope"), None);
}

#[test]
fn test_candidate_portal_is_read_only() {
    assert!(!Portal::Candidate.can_edit());
    assert!(Portal::Organization.can_edit());
}
