// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{NaiveTime, Utc};
use rust_decimal::prelude::ToPrimitive;

use crate::models::{NewTransaction, TransactionPatch, TxKind};
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(sub)?,
        Some(("list", sub)) => list(sub)?,
        Some(("edit", sub)) => edit(sub)?,
        Some(("rm", sub)) => rm(sub)?,
        _ => {}
    }
    Ok(())
}

fn wire_amount(s: &str) -> Result<f64> {
    parse_decimal(s)?
        .to_f64()
        .with_context(|| format!("Amount '{}' out of range", s))
}

fn add(sub: &clap::ArgMatches) -> Result<()> {
    let desc = sub.get_one::<String>("desc").unwrap();
    let amount = wire_amount(sub.get_one::<String>("amount").unwrap())?;
    let kind: TxKind = sub.get_one::<String>("type").unwrap().parse()?;
    let category_id = *sub.get_one::<i64>("category-id").unwrap();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?.and_time(NaiveTime::MIN).and_utc(),
        None => Utc::now(),
    };

    let (api, store) = super::authenticated_client()?;
    let tx = super::checked(
        &store,
        api.create_transaction(&NewTransaction {
            description: desc.trim().to_string(),
            amount,
            kind,
            category_id,
            date,
        }),
    )?;
    println!("Recorded {} '{}' (id {})", tx.kind, tx.description, tx.id);
    Ok(())
}

fn list(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let skip = *sub.get_one::<usize>("skip").unwrap_or(&0);
    let limit = *sub.get_one::<usize>("limit").unwrap_or(&100);

    let (api, store) = super::authenticated_client()?;
    let txs = super::checked(&store, api.list_transactions(skip, limit))?;
    if maybe_print_json(json_flag, jsonl_flag, &txs)? {
        return Ok(());
    }

    let categories = super::checked(&store, api.list_categories())?;
    let rows = txs
        .iter()
        .map(|t| super::dashboard::transaction_row(t, &categories))
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Description", "Type", "Amount", "Category"], rows)
    );
    Ok(())
}

fn edit(sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut patch = TransactionPatch::default();
    if let Some(d) = sub.get_one::<String>("desc") {
        patch.description = Some(d.trim().to_string());
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        patch.amount = Some(wire_amount(a)?);
    }
    if let Some(t) = sub.get_one::<String>("type") {
        patch.kind = Some(t.parse()?);
    }
    if let Some(c) = sub.get_one::<i64>("category-id") {
        patch.category_id = Some(*c);
    }
    if let Some(d) = sub.get_one::<String>("date") {
        patch.date = Some(parse_date(d)?.and_time(NaiveTime::MIN).and_utc());
    }

    let (api, store) = super::authenticated_client()?;
    let tx = super::checked(&store, api.update_transaction(id, &patch))?;
    println!("Updated transaction {}", tx.id);
    Ok(())
}

fn rm(sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let (api, store) = super::authenticated_client()?;
    super::checked(&store, api.delete_transaction(id))?;
    println!("Deleted transaction {}", id);
    Ok(())
}
