// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::required;
use crate::ledger::{balance, parse_amount, record};
use crate::models::{Transaction, TxType};
use crate::reporting::{by_category, history, is_in_month};
use crate::store::Store;
use crate::utils::{
    TX_HEADERS, fmt_money, maybe_print_json, parse_date, parse_month, pretty_table, today,
    transaction_rows,
};
use anyhow::Result;

pub fn add(store: &Store, r#type: TxType, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(required(sub, "amount")?)?;
    let category = sub
        .get_one::<String>("category")
        .map(String::as_str)
        .unwrap_or_default();
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today(),
    };

    let mut txs = store.load();
    let tx = record(store, &mut txs, r#type, amount, category, date)?;
    println!(
        "Recorded {} {} in '{}' on {}",
        tx.r#type,
        fmt_money(&tx.amount),
        tx.category,
        tx.date
    );
    println!("Current balance: {}", fmt_money(&balance(&txs)?));
    Ok(())
}

pub fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = store.load();
    let data = query_rows(&txs, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No transactions found.");
    } else {
        println!("{}", pretty_table(&TX_HEADERS, transaction_rows(data)));
    }
    Ok(())
}

/// Applies the `history` filters. Order stays chronological; `--limit` keeps the newest.
pub fn query_rows<'a>(txs: &'a [Transaction], sub: &clap::ArgMatches) -> Result<Vec<&'a Transaction>> {
    let Some(entries) = history(txs) else {
        return Ok(Vec::new());
    };
    let mut data: Vec<&Transaction> = match sub.get_one::<String>("category") {
        Some(cat) => by_category(txs, cat).collect(),
        None => entries.collect(),
    };
    if let Some(month) = sub.get_one::<String>("month") {
        let month = parse_month(month)?;
        data.retain(|t| is_in_month(t, &month));
    }
    if let Some(limit) = sub.get_one::<usize>("limit") {
        let skip = data.len().saturating_sub(*limit);
        data.drain(..skip);
    }
    Ok(data)
}
