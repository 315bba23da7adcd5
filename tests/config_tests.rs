// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::config::{resolve_api_url, Config, ConfigStore, DEFAULT_API_URL};

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::at(dir.path().join("config.json"));
    let cfg = store.load().unwrap();
    assert!(cfg.api_url.is_none());
}

#[test]
fn save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::at(dir.path().join("config.json"));
    let cfg = Config {
        api_url: Some("https://finance.example.com".to_string()),
    };
    store.save(&cfg).unwrap();
    assert_eq!(
        store.load().unwrap().api_url.as_deref(),
        Some("https://finance.example.com")
    );
}

#[test]
fn url_falls_back_to_default() {
    let cfg = Config::default();
    assert_eq!(resolve_api_url(&cfg), DEFAULT_API_URL);
}

#[test]
fn configured_url_wins_over_default() {
    let cfg = Config {
        api_url: Some("https://finance.example.com".to_string()),
    };
    assert_eq!(resolve_api_url(&cfg), "https://finance.example.com");
}
