use lead_map::{KeywordTable, classify, classify_with, detect_column};
use lead_model::Role;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn resolves_owner_and_property_headers() {
    let cols = headers(&["Property Address", "Owner First", "Owner Last", "Mailing City"]);
    let roles = classify(&cols);

    assert_eq!(roles.header(Role::Address), Some("Property Address"));
    assert_eq!(roles.header(Role::FirstName), Some("Owner First"));
    assert_eq!(roles.header(Role::LastName), Some("Owner Last"));
    assert_eq!(roles.header(Role::City), Some("Mailing City"));
    assert!(!roles.name_split_required());
}

#[test]
fn missing_email_header_leaves_role_unassigned() {
    let cols = headers(&["Property Address", "Owner First", "Owner Last", "Mailing City"]);
    let roles = classify(&cols);

    assert_eq!(roles.header(Role::Email), None);
    assert_eq!(roles.header(Role::Phone), None);
    assert_eq!(roles.header(Role::FullName), None);
}

#[test]
fn first_header_in_table_order_wins() {
    let cols = headers(&["Mailing Address", "Property Address", "ZIP", "Postal Code"]);
    let roles = classify(&cols);

    assert_eq!(roles.header(Role::Address), Some("Mailing Address"));
    assert_eq!(roles.header(Role::Zip), Some("ZIP"));
}

#[test]
fn a_header_may_serve_several_roles() {
    let cols = headers(&["Email Address", "City"]);
    let roles = classify(&cols);

    assert_eq!(roles.header(Role::Email), Some("Email Address"));
    assert_eq!(roles.header(Role::Address), Some("Email Address"));
}

#[test]
fn matching_is_case_insensitive_and_separator_tolerant() {
    let cols = headers(&["OWNER_FIRST_NAME", "owner-last-name", "E-MAIL"]);
    let roles = classify(&cols);

    assert_eq!(roles.header(Role::FirstName), Some("OWNER_FIRST_NAME"));
    assert_eq!(roles.header(Role::LastName), Some("owner-last-name"));
    assert_eq!(roles.header(Role::Email), Some("E-MAIL"));
}

#[test]
fn full_name_requires_split_when_first_and_last_are_missing() {
    let cols = headers(&["Owner Name", "Street"]);
    let roles = classify(&cols);

    assert_eq!(roles.header(Role::FullName), Some("Owner Name"));
    assert!(roles.name_split_required());
    assert_eq!(roles.header(Role::FirstName), None);
}

#[test]
fn full_name_is_ignored_when_first_name_exists() {
    let cols = headers(&["First Name", "Owner Name"]);
    let roles = classify(&cols);

    assert_eq!(roles.header(Role::FirstName), Some("First Name"));
    assert_eq!(roles.header(Role::FullName), None);
    assert!(!roles.name_split_required());
}

#[test]
fn empty_headers_resolve_nothing() {
    let roles = classify(&[]);
    assert_eq!(roles.assigned().count(), 0);
    assert!(roles.key_roles().is_empty());
}

#[test]
fn extra_keywords_extend_detection() {
    let cols = headers(&["Situs", "Tel #"]);
    assert_eq!(classify(&cols).header(Role::Address), None);

    let table = KeywordTable::default()
        .with_extra(Role::Address, ["situs"])
        .with_extra(Role::Phone, ["tel"]);
    let roles = classify_with(&cols, &table);
    assert_eq!(roles.header(Role::Address), Some("Situs"));
    assert_eq!(roles.header(Role::Phone), Some("Tel #"));
}

#[test]
fn detect_column_returns_none_without_match() {
    let cols = headers(&["APN", "Notes"]);
    assert_eq!(detect_column(&cols, &["zip", "postal"]), None);
}
