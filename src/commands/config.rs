// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config::{resolve_api_url, ConfigStore};
use crate::session::SessionStore;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-url", sub)) => {
            let url = sub.get_one::<String>("url").unwrap();
            let store = ConfigStore::open_default()?;
            let mut cfg = store.load()?;
            cfg.api_url = Some(url.trim_end_matches('/').to_string());
            store.save(&cfg)?;
            println!("API base URL set to {}", resolve_api_url(&cfg));
        }
        Some(("show", _)) => {
            let cfg = ConfigStore::open_default()?.load()?;
            println!("API base URL: {}", resolve_api_url(&cfg));
            let session = SessionStore::open_default()?.load()?;
            match session.email() {
                Some(email) => println!("Session: {}", email),
                None => println!("Session: anonymous"),
            }
        }
        _ => {}
    }
    Ok(())
}
