// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let (api, store) = super::authenticated_client()?;
            let cat = super::checked(&store, api.create_category(name.trim()))?;
            println!("Added category '{}' (id {})", cat.name, cat.id);
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let (api, store) = super::authenticated_client()?;
            let cats = super::checked(&store, api.list_categories())?;
            if !maybe_print_json(json_flag, jsonl_flag, &cats)? {
                let rows = cats
                    .iter()
                    .map(|c| vec![c.id.to_string(), c.name.clone()])
                    .collect();
                println!("{}", pretty_table(&["Id", "Category"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}
