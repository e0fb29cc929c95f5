use super::*;
use crate::util::storage::MemoryStorage;

fn store() -> (Arc<MemoryStorage>, CredentialStore) {
    let storage = Arc::new(MemoryStorage::new());
    let store = CredentialStore::new(storage.clone());
    (storage, store)
}

fn user() -> User {
    User {
        id: "1".to_owned(),
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        email: "a@b.com".to_owned(),
        role: "user".to_owned(),
        is_active: true,
    }
}

#[test]
fn empty_store_reads_absent() {
    let (_, store) = store();
    assert_eq!(store.get_stored_token(), None);
    assert_eq!(store.get_stored_user(), None);
    assert_eq!(store.read_user(), Ok(None));
}

#[test]
fn token_and_user_round_trip_under_fixed_keys() {
    let (storage, store) = store();
    store.set_stored_token("abc");
    store.set_stored_user(&user());

    assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("abc"));
    assert!(storage.get_item(USER_KEY).unwrap().contains("\"firstName\":\"A\""));
    assert_eq!(store.get_stored_token().as_deref(), Some("abc"));
    assert_eq!(store.get_stored_user(), Some(user()));
}

#[test]
fn empty_token_reads_absent() {
    let (storage, store) = store();
    storage.set_item(TOKEN_KEY, "");
    assert_eq!(store.get_stored_token(), None);
}

#[test]
fn corrupt_user_reads_absent_without_failing() {
    let (storage, store) = store();
    storage.set_item(USER_KEY, "{not json");
    assert_eq!(store.get_stored_user(), None);
    // Getter leaves the record in place for the caller to decide.
    assert!(storage.get_item(USER_KEY).is_some());
}

#[test]
fn read_user_reports_corruption() {
    let (storage, store) = store();
    storage.set_item(USER_KEY, "[]");
    assert!(matches!(store.read_user(), Err(StorageError::Corrupt { key: USER_KEY, .. })));
}

#[test]
fn clear_removes_both_keys_and_is_idempotent() {
    let (storage, store) = store();
    store.set_stored_token("abc");
    store.set_stored_user(&user());
    store.clear();
    assert!(storage.is_empty());
    store.clear();
    assert!(storage.is_empty());
}
