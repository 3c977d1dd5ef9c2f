// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Interactive numbered menu. Every action reloads the file, so nothing is
//! cached between choices.

use crate::error::BudgetError;
use crate::ledger::{balance, parse_amount, record};
use crate::models::{DEFAULT_CATEGORY, Transaction, TxType};
use crate::reporting::{by_category, categories, history};
use crate::store::Store;
use crate::utils::{TX_HEADERS, fmt_money, pretty_table, transaction_rows};
use anyhow::Result;
use chrono::NaiveDate;
use std::io::{BufRead, Write};

const MENU: &str = "\
=== Budget Tracker ===
1. Add Income
2. Add Expense
3. View Balance
4. View Transactions
5. View Spending by Category
6. Exit
Choose an option (1-6): ";

pub const INVALID_AMOUNT: &str = "Invalid amount. Please enter a number.";
pub const NO_TRANSACTIONS: &str = "No transactions found.";

/// Runs the menu until the user picks exit or input ends.
pub fn run<R: BufRead, W: Write>(
    store: &Store,
    mut input: R,
    mut out: W,
    today: NaiveDate,
) -> Result<()> {
    loop {
        write!(out, "{}", MENU)?;
        out.flush()?;
        let Some(choice) = read_line(&mut input)? else {
            writeln!(out)?;
            break;
        };
        match choice.as_str() {
            "1" => add(store, &mut input, &mut out, TxType::Income, today)?,
            "2" => add(store, &mut input, &mut out, TxType::Expense, today)?,
            "3" => show_balance(store, &mut out)?,
            "4" => show_history(store, &mut out)?,
            "5" => show_category(store, &mut input, &mut out)?,
            "6" => {
                writeln!(out, "Thanks for using budgetbook.")?;
                break;
            }
            other => writeln!(
                out,
                "You typed '{}', please choose an option between 1 and 6.",
                other
            )?,
        }
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<String> {
    write!(out, "{}", text)?;
    out.flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}

fn add<R: BufRead, W: Write>(
    store: &Store,
    input: &mut R,
    out: &mut W,
    r#type: TxType,
    today: NaiveDate,
) -> Result<()> {
    let raw = prompt(input, out, "How much would you like to add? ")?;
    let amount = match parse_amount(&raw) {
        Ok(a) => a,
        Err(BudgetError::NegativeAmount(_)) => {
            writeln!(out, "Invalid amount. Amounts cannot be negative.")?;
            return Ok(());
        }
        Err(e @ BudgetError::AmountTooLarge(_)) => {
            writeln!(out, "{}", e)?;
            return Ok(());
        }
        Err(_) => {
            writeln!(out, "{}", INVALID_AMOUNT)?;
            return Ok(());
        }
    };
    let category = prompt(
        input,
        out,
        &format!("Enter the category (default is '{}'): ", DEFAULT_CATEGORY),
    )?;

    let mut txs = store.load();
    let tx = match record(store, &mut txs, r#type, amount, &category, today) {
        Ok(tx) => tx,
        Err(e @ (BudgetError::AmountOverflow | BudgetError::AmountTooLarge(_))) => {
            writeln!(out, "{}", e)?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let label = match r#type {
        TxType::Income => "Income",
        TxType::Expense => "Expense",
    };
    writeln!(
        out,
        "{} added: {} ({})",
        label,
        fmt_money(&tx.amount),
        tx.category
    )?;
    if r#type == TxType::Income {
        print_balance(&txs, out)?;
    }
    Ok(())
}

fn print_balance<W: Write>(txs: &[Transaction], out: &mut W) -> Result<()> {
    match balance(txs) {
        Ok(b) => writeln!(out, "Current balance: {}", fmt_money(&b))?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

fn show_balance<W: Write>(store: &Store, out: &mut W) -> Result<()> {
    let txs = store.load();
    if txs.is_empty() {
        writeln!(out, "No transactions found. Starting fresh.")?;
    } else {
        print_balance(&txs, out)?;
    }
    Ok(())
}

fn show_history<W: Write>(store: &Store, out: &mut W) -> Result<()> {
    let txs = store.load();
    match history(&txs) {
        Some(entries) => {
            writeln!(out, "{}", pretty_table(&TX_HEADERS, transaction_rows(entries)))?;
        }
        None => writeln!(out, "{}", NO_TRANSACTIONS)?,
    }
    Ok(())
}

fn show_category<R: BufRead, W: Write>(store: &Store, input: &mut R, out: &mut W) -> Result<()> {
    let txs = store.load();
    if txs.is_empty() {
        writeln!(out, "{}", NO_TRANSACTIONS)?;
        return Ok(());
    }
    let labels: Vec<&str> = categories(&txs).into_iter().collect();
    writeln!(out, "Available categories: {}", labels.join(", "))?;
    let wanted = prompt(input, out, "Enter a category to view spending: ")?;
    let rows = transaction_rows(by_category(&txs, &wanted));
    if rows.is_empty() {
        writeln!(out, "{}", NO_TRANSACTIONS)?;
    } else {
        writeln!(out, "{}", pretty_table(&TX_HEADERS, rows))?;
    }
    Ok(())
}
