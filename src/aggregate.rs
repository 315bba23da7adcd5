// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{Category, Transaction, TxKind};

/// Default cap on explicit category slices; everything past it folds into
/// the synthetic "Others" slice.
pub const DEFAULT_MAX_SLICES: usize = 8;

/// Chart palette, cycled by rank. "Others" sits outside the cycle.
pub const PALETTE: [&str; 10] = [
    "#7c3aed", "#06b6d4", "#f59e0b", "#10b981", "#ef4444", "#8b5cf6", "#22c55e", "#ec4899",
    "#14b8a6", "#6366f1",
];
pub const OTHERS_COLOR: &str = "#94a3b8";
pub const OTHERS_LABEL: &str = "Others";

pub const INCOME_COLOR: &str = "#22c55e";
pub const EXPENSE_COLOR: &str = "#ef4444";

/// One wedge of the expense-by-category chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub label: String,
    pub amount: Decimal,
    pub pct: u32,
    pub color: &'static str,
    pub rank: usize,
}

/// The two-way income/expense proportion. Always sums to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncomeExpenseSplit {
    pub income_pct: u32,
    pub expense_pct: u32,
}

/// Normalize a raw wire amount to a positive magnitude.
///
/// Accepts JSON numbers and numeric strings. Returns `None` when the value
/// does not parse, is not finite, or has absolute value <= 0; such
/// transactions are excluded from every sum rather than treated as errors.
pub fn normalize_amount(raw: &serde_json::Value) -> Option<Decimal> {
    let parsed = match raw {
        serde_json::Value::Number(n) => Decimal::try_from(n.as_f64()?).ok()?,
        serde_json::Value::String(s) => {
            let s = s.trim();
            match s.parse::<Decimal>() {
                Ok(d) => d,
                // Covers exponent notation and rejects "NaN"/"inf" via the
                // finiteness check built into Decimal::try_from.
                Err(_) => Decimal::try_from(s.parse::<f64>().ok()?).ok()?,
            }
        }
        _ => return None,
    };
    let magnitude = parsed.abs();
    if magnitude > Decimal::ZERO {
        Some(magnitude)
    } else {
        None
    }
}

/// Map a transaction to a display label. Never fails: falls back to
/// `cat#<id>` for a dangling reference and `Uncategorized` when the
/// transaction carries no category at all.
pub fn resolve_category_label(tx: &Transaction, categories: &[Category]) -> String {
    if let Some(embedded) = &tx.category {
        return embedded.name.clone();
    }
    match tx.category_id {
        Some(id) => categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("cat#{}", id)),
        None => "Uncategorized".to_string(),
    }
}

// Grouping prefers the numeric id; transactions without one group by their
// fallback label so two uncategorized expenses land in the same bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum GroupKey {
    Id(i64),
    Label(String),
}

fn pct_of(part: Decimal, whole: Decimal) -> u32 {
    (part / whole * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// Build the ranked expense-by-category slice list from a full transaction
/// history.
///
/// Expenses are normalized, grouped by category, summed, and stable-sorted
/// descending by amount (ties keep first-encountered order). The top
/// `max_slices` groups stay explicit; the remainder folds into one "Others"
/// slice whose percentage is the sum of the folded groups' individually
/// rounded percentages, not a recomputation over the folded sum. That keeps
/// the displayed total near 100 in both branches but can drift by ±1% from
/// the true proportion; callers must not "correct" it.
pub fn compute_category_slices(
    transactions: &[Transaction],
    categories: &[Category],
    max_slices: usize,
) -> Vec<Slice> {
    let mut order: Vec<(String, Decimal)> = Vec::new();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();

    for tx in transactions {
        if tx.kind != TxKind::Expense {
            continue;
        }
        let Some(amount) = normalize_amount(&tx.amount) else {
            continue;
        };
        let label = resolve_category_label(tx, categories);
        let key = match tx.category_id {
            Some(id) => GroupKey::Id(id),
            None => GroupKey::Label(label.clone()),
        };
        match index.get(&key) {
            Some(&i) => order[i].1 += amount,
            None => {
                index.insert(key, order.len());
                order.push((label, amount));
            }
        }
    }

    let grand: Decimal = order.iter().map(|(_, total)| *total).sum();
    if grand <= Decimal::ZERO {
        return Vec::new();
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));

    let fold_from = max_slices.min(order.len());
    let mut slices: Vec<Slice> = order[..fold_from]
        .iter()
        .enumerate()
        .map(|(rank, (label, amount))| Slice {
            label: label.clone(),
            amount: *amount,
            pct: pct_of(*amount, grand),
            color: PALETTE[rank % PALETTE.len()],
            rank,
        })
        .collect();

    if order.len() > max_slices {
        let folded = &order[fold_from..];
        let amount: Decimal = folded.iter().map(|(_, total)| *total).sum();
        let pct = folded.iter().map(|(_, total)| pct_of(*total, grand)).sum();
        slices.push(Slice {
            label: OTHERS_LABEL.to_string(),
            amount,
            pct,
            color: OTHERS_COLOR,
            rank: fold_from,
        });
    }

    slices
}

/// Two-way split for the income/expense chart. `None` when there is nothing
/// to draw. The expense share is derived by subtraction rather than rounded
/// independently, so the pair sums to exactly 100 by construction.
pub fn compute_income_expense_split(
    income: Decimal,
    expense: Decimal,
) -> Option<IncomeExpenseSplit> {
    let total = income + expense;
    if total <= Decimal::ZERO {
        return None;
    }
    let income_pct = pct_of(income, total).min(100);
    Some(IncomeExpenseSplit {
        income_pct,
        expense_pct: 100 - income_pct,
    })
}
