use super::*;
use crate::net::types::{Address, ProfileStatus, User};

#[test]
fn name_patch_trims_and_skips_blank_fields() {
    let patch = name_patch("  Ada ", "   ").unwrap();
    assert_eq!(patch.first_name.as_deref(), Some("Ada"));
    assert_eq!(patch.last_name, None);
}

#[test]
fn name_patch_none_when_both_blank() {
    assert_eq!(name_patch("", "  "), None);
}

#[test]
fn profile_rows_fill_missing_values_with_dash() {
    let profile = Profile::from_cached_user(User {
        id: "1".to_owned(),
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        email: "a@b.com".to_owned(),
        role: "user".to_owned(),
        is_active: true,
    });
    let rows = profile_rows(&profile);
    assert_eq!(rows[0], ("Name", "A B".to_owned()));
    assert_eq!(rows[2], ("Phone", "—".to_owned()));
    assert_eq!(rows[4], ("Status", "Active".to_owned()));
    assert_eq!(rows[5], ("Location", "—".to_owned()));
}

#[test]
fn profile_rows_join_address_parts() {
    let mut profile = Profile::from_cached_user(User {
        id: "1".to_owned(),
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        email: "a@b.com".to_owned(),
        role: "user".to_owned(),
        is_active: true,
    });
    profile.status = ProfileStatus::Suspended;
    profile.address = Some(Address {
        city: Some("Lagos".to_owned()),
        country: Some("Nigeria".to_owned()),
        ..Address::default()
    });
    let rows = profile_rows(&profile);
    assert_eq!(rows[4].1, "Suspended");
    assert_eq!(rows[5].1, "Lagos, Nigeria");
}
