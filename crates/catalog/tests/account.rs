use std::sync::Arc;

use tastebook_catalog::{AccountGate, CatalogErrorKind, RegisterRequest};
use tastebook_prefs_store::MemoryPrefsStore;

fn gate() -> (AccountGate, Arc<MemoryPrefsStore>) {
    let prefs = Arc::new(MemoryPrefsStore::new());
    (AccountGate::new(prefs.clone(), "username"), prefs)
}

#[test]
fn demo_credentials_log_in_and_persist_the_username() {
    let (gate, _prefs) = gate();
    assert!(gate.current_user().is_none());

    gate.login("user", "123").unwrap();
    assert_eq!(gate.current_user().as_deref(), Some("user"));
}

#[test]
fn wrong_credentials_are_rejected() {
    let (gate, _prefs) = gate();
    for (username, password) in [("user", "wrong"), ("admin", "123"), ("", "")] {
        let err = gate.login(username, password).unwrap_err();
        assert!(matches!(err.kind(), CatalogErrorKind::InvalidCredentials));
    }
    assert!(gate.current_user().is_none());
}

#[test]
fn register_requires_every_field() {
    let (gate, _prefs) = gate();
    let req = RegisterRequest {
        name: "Ana".into(),
        email: String::new(),
        username: "ana".into(),
        password: "pw".into(),
    };
    let err = gate.register(&req).unwrap_err();
    assert!(matches!(err.kind(), CatalogErrorKind::InvalidInput(_)));
    assert!(gate.current_user().is_none());
}

#[test]
fn register_remembers_the_username() {
    let (gate, _prefs) = gate();
    let req = RegisterRequest {
        name: "Ana".into(),
        email: "ana@example.com".into(),
        username: "ana".into(),
        password: "pw".into(),
    };
    gate.register(&req).unwrap();
    assert_eq!(gate.current_user().as_deref(), Some("ana"));
}

#[test]
fn logout_clears_the_stored_username() {
    let (gate, _prefs) = gate();
    gate.login("user", "123").unwrap();
    gate.logout().unwrap();
    assert!(gate.current_user().is_none());
    gate.logout().unwrap();
}
