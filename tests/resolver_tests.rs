// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::aggregate::resolve_category_label;
use billfold::models::{Category, Transaction, TxKind};
use serde_json::json;

fn cat(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        owner_id: 1,
    }
}

fn tx_with(category_id: Option<i64>, embedded: Option<Category>) -> Transaction {
    Transaction {
        id: 0,
        description: "test".to_string(),
        amount: json!(10.0),
        kind: TxKind::Expense,
        category_id,
        date: None,
        owner_id: 1,
        category: embedded,
    }
}

#[test]
fn embedded_category_wins_over_collection() {
    let cats = vec![cat(7, "Stale Name")];
    let tx = tx_with(Some(7), Some(cat(7, "Fresh Name")));
    assert_eq!(resolve_category_label(&tx, &cats), "Fresh Name");
}

#[test]
fn falls_back_to_collection_lookup() {
    let cats = vec![cat(7, "Groceries")];
    let tx = tx_with(Some(7), None);
    assert_eq!(resolve_category_label(&tx, &cats), "Groceries");
}

#[test]
fn dangling_reference_gets_synthetic_label() {
    // Category 42 was deleted after the transaction was recorded.
    let cats = vec![cat(7, "Groceries")];
    let tx = tx_with(Some(42), None);
    assert_eq!(resolve_category_label(&tx, &cats), "cat#42");
}

#[test]
fn absent_reference_is_uncategorized() {
    let tx = tx_with(None, None);
    assert_eq!(resolve_category_label(&tx, &[]), "Uncategorized");
}

#[test]
fn uncategorized_expenses_share_one_bucket() {
    use billfold::aggregate::compute_category_slices;
    let txs = vec![tx_with(None, None), tx_with(None, None)];
    let slices = compute_category_slices(&txs, &[], 8);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].label, "Uncategorized");
    assert_eq!(slices[0].pct, 100);
}
