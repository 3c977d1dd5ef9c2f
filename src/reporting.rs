// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Read-only views over a loaded collection.

use crate::error::Result;
use crate::ledger::{add_checked, normalize_category};
use crate::models::Transaction;
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};

/// Entries in insertion order, or `None` when there is nothing to show.
///
/// The returned iterator is `Clone`, so it can be walked more than once.
pub fn history(txs: &[Transaction]) -> Option<std::slice::Iter<'_, Transaction>> {
    if txs.is_empty() {
        None
    } else {
        Some(txs.iter())
    }
}

pub fn categories(txs: &[Transaction]) -> BTreeSet<&str> {
    txs.iter().map(|t| t.category.as_str()).collect()
}

/// Entries filed under `category`. A blank label means the default category.
pub fn by_category<'a>(
    txs: &'a [Transaction],
    category: &str,
) -> impl Iterator<Item = &'a Transaction> + Clone + use<'a> {
    let label = normalize_category(category);
    txs.iter().filter(move |t| t.category == label)
}

pub fn is_in_month(t: &Transaction, month: &str) -> bool {
    t.date.format("%Y-%m").to_string() == month
}

/// Entries dated in `month` (`YYYY-MM`).
pub fn in_month<'a>(
    txs: &'a [Transaction],
    month: &str,
) -> impl Iterator<Item = &'a Transaction> + Clone + use<'a> {
    let month = month.to_string();
    txs.iter().filter(move |t| is_in_month(t, &month))
}

/// Total spent per category, largest first.
pub fn spending_totals<'a, I>(txs: I) -> Result<Vec<(String, Decimal)>>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut agg: HashMap<&str, Decimal> = HashMap::new();
    for t in txs.into_iter().filter(|t| t.is_expense()) {
        let total = agg.entry(t.category.as_str()).or_insert(Decimal::ZERO);
        *total = add_checked(*total, t.amount)?;
    }
    let mut items: Vec<(String, Decimal)> = agg
        .into_iter()
        .map(|(cat, amt)| (cat.to_string(), amt))
        .collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(items)
}
