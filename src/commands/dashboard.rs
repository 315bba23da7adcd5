// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::{
    compute_category_slices, compute_income_expense_split, IncomeExpenseSplit, Slice,
    DEFAULT_MAX_SLICES, EXPENSE_COLOR, INCOME_COLOR,
};
use crate::models::{Summary, Transaction, User};
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};

// The original client pulls the whole history in one page for correct
// percentages; anything beyond this is out of chart territory anyway.
const FULL_HISTORY_LIMIT: usize = 10_000;

#[derive(Serialize)]
struct DashboardReport {
    user: User,
    summary: Summary,
    split: Option<IncomeExpenseSplit>,
    slices: Vec<Slice>,
    recent: Vec<Transaction>,
}

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let recent_limit = *sub.get_one::<usize>("recent").unwrap_or(&5);
    let max_slices = *sub.get_one::<usize>("max-slices").unwrap_or(&DEFAULT_MAX_SLICES);

    let (api, store) = super::authenticated_client()?;

    // All fetches land before aggregation starts, so the engine sees one
    // consistent snapshot.
    let user = super::checked(&store, api.me())?;
    let summary = match (sub.get_one::<String>("from"), sub.get_one::<String>("to")) {
        (Some(from), Some(to)) => super::checked(
            &store,
            api.summary_by_date(parse_date(from)?, parse_date(to)?),
        )?,
        _ => super::checked(&store, api.summary_total())?,
    };
    let recent = super::checked(&store, api.list_transactions(0, recent_limit))?;
    let history = super::checked(&store, api.list_transactions(0, FULL_HISTORY_LIMIT))?;
    let categories = super::checked(&store, api.list_categories())?;

    let slices = compute_category_slices(&history, &categories, max_slices);
    // KPIs and the two-way split come from the server summary, the
    // authoritative figures, rather than a client-side re-sum.
    let income = Decimal::try_from(summary.total_income)
        .with_context(|| format!("Invalid total_income '{}'", summary.total_income))?;
    let expense = Decimal::try_from(summary.total_expense)
        .with_context(|| format!("Invalid total_expense '{}'", summary.total_expense))?;
    let split = compute_income_expense_split(income, expense);

    let report = DashboardReport {
        user,
        summary,
        split,
        slices,
        recent,
    };
    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }

    println!("Signed in as {}", report.user.email);
    println!(
        "{}",
        pretty_table(
            &["Total Income", "Total Expense", "Balance"],
            vec![vec![
                format!("{:.2}", report.summary.total_income),
                format!("{:.2}", report.summary.total_expense),
                format!("{:.2}", report.summary.balance),
            ]],
        )
    );

    match &report.split {
        Some(split) => {
            let rows = vec![
                vec![
                    "Income".to_string(),
                    format!("{}%", split.income_pct),
                    INCOME_COLOR.to_string(),
                ],
                vec![
                    "Expense".to_string(),
                    format!("{}%", split.expense_pct),
                    EXPENSE_COLOR.to_string(),
                ],
            ];
            println!("{}", pretty_table(&["Kind", "Share", "Color"], rows));
        }
        None => println!("No income or expenses recorded yet."),
    }

    if report.slices.is_empty() {
        println!("No expenses to break down by category.");
    } else {
        let rows = report
            .slices
            .iter()
            .map(|s| {
                vec![
                    (s.rank + 1).to_string(),
                    s.label.clone(),
                    fmt_money(s.amount),
                    format!("{}%", s.pct),
                    s.color.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["#", "Category", "Spent", "Share", "Color"], rows)
        );
    }

    let rows = report
        .recent
        .iter()
        .map(|t| transaction_row(t, &categories))
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Description", "Type", "Amount", "Category"], rows)
    );
    Ok(())
}

pub(super) fn transaction_row(
    t: &Transaction,
    categories: &[crate::models::Category],
) -> Vec<String> {
    vec![
        t.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        t.description.clone(),
        t.kind.to_string(),
        raw_amount(&t.amount),
        crate::aggregate::resolve_category_label(t, categories),
    ]
}

// Show the amount the way the server sent it; interpretation belongs to the
// normalizer, not the listing.
fn raw_amount(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
