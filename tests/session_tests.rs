// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::session::{Session, SessionStore};

#[test]
fn missing_file_loads_anonymous() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::at(dir.path().join("session.json"));
    assert_eq!(store.load().unwrap(), Session::Anonymous);
}

#[test]
fn save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::at(dir.path().join("session.json"));
    let session = Session::authenticated("tok-123".to_string(), "a@b.test".to_string());
    store.save(&session).unwrap();
    assert_eq!(store.load().unwrap(), session);
    assert!(store.load().unwrap().is_authenticated());
    assert_eq!(store.load().unwrap().email(), Some("a@b.test"));
}

#[test]
fn clear_returns_to_anonymous() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::at(dir.path().join("session.json"));
    let session = Session::authenticated("tok-123".to_string(), "a@b.test".to_string());
    store.save(&session).unwrap();
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), Session::Anonymous);
    // clearing twice is fine
    store.clear().unwrap();
}

#[test]
fn logout_transition() {
    let mut session = Session::authenticated("tok".to_string(), "a@b.test".to_string());
    session.logout();
    assert_eq!(session, Session::Anonymous);
    assert!(!session.is_authenticated());
    assert_eq!(session.email(), None);
}
