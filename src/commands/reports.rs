// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::totals;
use crate::models::Transaction;
use crate::reporting::{by_category, in_month, is_in_month, spending_totals};
use crate::store::Store;
use crate::utils::{
    TX_HEADERS, fmt_money, maybe_print_json, parse_month, pretty_table, transaction_rows,
};
use anyhow::Result;
use serde_json::json;

pub fn balance(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = store.load();
    let t = totals(&txs)?;
    let net = t.balance()?;
    let doc = json!({
        "income": fmt_money(&t.income),
        "expense": fmt_money(&t.expense),
        "balance": fmt_money(&net),
        "entries": txs.len(),
    });
    if maybe_print_json(json_flag, jsonl_flag, &doc)? {
        return Ok(());
    }
    if txs.is_empty() {
        println!("No transactions found. Starting fresh.");
    }
    println!(
        "{}",
        pretty_table(
            &["Income", "Expense", "Balance"],
            vec![vec![
                fmt_money(&t.income),
                fmt_money(&t.expense),
                fmt_money(&net),
            ]],
        )
    );
    Ok(())
}

pub fn spend(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = store.load();
    let month = sub
        .get_one::<String>("month")
        .map(|m| parse_month(m))
        .transpose()?;
    let scoped: Vec<&Transaction> = match &month {
        Some(m) => in_month(&txs, m).collect(),
        None => txs.iter().collect(),
    };

    if let Some(cat) = sub.get_one::<String>("category") {
        let matched: Vec<&Transaction> = by_category(&txs, cat)
            .filter(|t| month.as_deref().map_or(true, |m| is_in_month(t, m)))
            .collect();
        if maybe_print_json(json_flag, jsonl_flag, &matched)? {
            return Ok(());
        }
        if matched.is_empty() {
            println!("No transactions found.");
        } else {
            println!("{}", pretty_table(&TX_HEADERS, transaction_rows(matched)));
        }
        return Ok(());
    }

    let data: Vec<Vec<String>> = spending_totals(scoped)?
        .into_iter()
        .map(|(cat, amt)| vec![cat, fmt_money(&amt)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Category", "Spent"], data));
    }
    Ok(())
}
