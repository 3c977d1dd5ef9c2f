// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::add_checked;
use crate::models::Transaction;
use crate::store::Store;
use crate::utils::{fmt_money, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(store: &Store) -> Result<()> {
    let txs = store.load();
    let rows = check(&txs);
    if rows.is_empty() {
        println!("doctor: no issues found in {} entries", txs.len());
    } else {
        println!("{}", pretty_table(&["#", "Issue", "Detail"], rows));
    }
    Ok(())
}

/// Returns one `[position, issue, detail]` row per problem found.
pub fn check(txs: &[Transaction]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut running = Decimal::ZERO;
    for (i, t) in txs.iter().enumerate() {
        let pos = (i + 1).to_string();
        running = match add_checked(running, t.signed_amount()) {
            Ok(v) => v,
            Err(e) => {
                rows.push(vec![pos, "balance_overflow".into(), e.to_string()]);
                break;
            }
        };

        // 1) Amounts are recorded unsigned
        if t.amount.is_sign_negative() && !t.amount.is_zero() {
            rows.push(vec![pos.clone(), "negative_amount".into(), t.amount.to_string()]);
        }

        // 2) Blank labels should have been stored as the default
        if t.category.trim().is_empty() {
            rows.push(vec![pos.clone(), "blank_category".into(), t.date.to_string()]);
        }

        // 3) Snapshot disagrees with the recomputed running balance
        if let Some(snap) = t.balance {
            if snap.round_dp(2) != running.round_dp(2) {
                rows.push(vec![
                    pos,
                    "balance_snapshot_mismatch".into(),
                    format!("stored {} vs computed {}", fmt_money(&snap), fmt_money(&running)),
                ]);
            }
        }
    }
    rows
}
