use super::*;

fn user() -> User {
    User {
        id: "1".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        role: "admin".to_owned(),
        is_active: true,
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_camel_case_fields() {
    let raw = r#"{"id":"1","firstName":"A","lastName":"B","email":"a@b.com","role":"user","isActive":true}"#;
    let parsed: User = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.first_name, "A");
    assert_eq!(parsed.last_name, "B");
    assert!(parsed.is_active);
}

#[test]
fn user_serializes_camel_case_fields() {
    let value = serde_json::to_value(user()).unwrap();
    assert_eq!(value["firstName"], "Ada");
    assert_eq!(value["isActive"], true);
    assert!(value.get("first_name").is_none());
}

#[test]
fn display_name_joins_first_and_last() {
    assert_eq!(user().display_name(), "Ada Lovelace");
}

#[test]
fn display_name_falls_back_to_email() {
    let mut u = user();
    u.first_name = String::new();
    u.last_name = "  ".to_owned();
    assert_eq!(u.display_name(), "ada@example.com");
}

#[test]
fn initials_use_first_letters() {
    assert_eq!(user().initials(), "AL");
    let mut u = user();
    u.last_name = String::new();
    assert_eq!(u.initials(), "A");
}

// =============================================================
// UserPatch
// =============================================================

#[test]
fn patch_changes_only_present_fields() {
    let mut u = user();
    UserPatch { first_name: Some("X".to_owned()), ..UserPatch::default() }.apply_to(&mut u);
    assert_eq!(u.first_name, "X");
    assert_eq!(u.last_name, "Lovelace");
    assert_eq!(u.email, "ada@example.com");
    assert_eq!(u.role, "admin");
    assert!(u.is_active);
}

#[test]
fn default_patch_is_empty() {
    assert!(UserPatch::default().is_empty());
    assert!(!UserPatch { is_active: Some(false), ..UserPatch::default() }.is_empty());
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_from_cached_user_defaults_status_to_active() {
    let profile = Profile::from_cached_user(user());
    assert_eq!(profile.status, ProfileStatus::Active);
    assert_eq!(profile.first_name, "Ada");
    assert_eq!(profile.phone, None);
    assert_eq!(profile.address, None);
}

#[test]
fn user_from_profile_maps_status_to_is_active() {
    let mut profile = Profile::from_cached_user(user());
    profile.status = ProfileStatus::Suspended;
    assert!(!User::from(&profile).is_active);
    profile.status = ProfileStatus::Active;
    assert!(User::from(&profile).is_active);
}

#[test]
fn profile_deserializes_optional_fields() {
    let raw = r#"{
        "id": "7",
        "firstName": "Grace",
        "lastName": "Hopper",
        "email": "grace@example.com",
        "phone": "555-0100",
        "role": "editor",
        "status": "inactive",
        "address": { "city": "Arlington", "zipCode": "22201" },
        "socialLinks": { "linkedin": "https://linkedin.com/in/grace" }
    }"#;
    let profile: Profile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.status, ProfileStatus::Inactive);
    assert_eq!(profile.phone.as_deref(), Some("555-0100"));
    assert_eq!(profile.address.unwrap().zip_code.as_deref(), Some("22201"));
    assert_eq!(profile.social_links.unwrap().linkedin.as_deref(), Some("https://linkedin.com/in/grace"));
    assert_eq!(profile.profile_image, None);
}

#[test]
fn profile_missing_status_defaults_to_active() {
    let raw = r#"{"id":"7","firstName":"G","lastName":"H","email":"g@h.com","role":"user"}"#;
    let profile: Profile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.status, ProfileStatus::Active);
}

// =============================================================
// ProfileResponse
// =============================================================

#[test]
fn profile_response_without_success_yields_none() {
    let raw = r#"{"success":false}"#;
    let resp: ProfileResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.into_profile(), None);
}

#[test]
fn profile_response_with_data_yields_profile() {
    let raw = r#"{"success":true,"data":{"user":{"id":"7","firstName":"G","lastName":"H","email":"g@h.com","role":"user","status":"active"}}}"#;
    let resp: ProfileResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.into_profile().unwrap().id, "7");
}

#[test]
fn login_response_parses_token_and_user() {
    let raw = r#"{"token":"abc","user":{"id":"1","firstName":"A","lastName":"B","email":"a@b.com","role":"user","isActive":true}}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "abc");
    assert_eq!(resp.user.email, "a@b.com");
}
