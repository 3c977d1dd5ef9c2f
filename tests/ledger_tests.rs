// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetbook::error::BudgetError;
use budgetbook::ledger::{balance, record, totals};
use budgetbook::models::{DEFAULT_CATEGORY, Transaction, TxType};
use budgetbook::reporting::{by_category, categories, history};
use budgetbook::store::Store;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn salary_then_food_scenario() {
    let dir = tempdir().unwrap();
    let store = Store::open_or_init(dir.path().join("transaction.json")).unwrap();
    let mut txs = store.load();
    assert!(txs.is_empty());

    record(&store, &mut txs, TxType::Income, dec("500"), "Salary", day("2025-03-01")).unwrap();
    assert_eq!(format!("{:.2}", balance(&store.load()).unwrap()), "500.00");

    record(&store, &mut txs, TxType::Expense, dec("150"), "Food", day("2025-03-02")).unwrap();
    let stored = store.load();
    assert_eq!(format!("{:.2}", balance(&stored).unwrap()), "350.00");

    let listed: Vec<&Transaction> = history(&stored).unwrap().collect();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].category, "Salary");
    assert_eq!(listed[1].category, "Food");

    let food: Vec<&Transaction> = by_category(&stored, "Food").collect();
    assert_eq!(food.len(), 1);
    assert_eq!(food[0].r#type, TxType::Expense);
    assert_eq!(food[0].amount, dec("150"));
    assert_eq!(food[0].balance, Some(dec("350")));
}

#[test]
fn balance_is_income_minus_expense() {
    assert_eq!(balance(&[]).unwrap(), Decimal::ZERO);

    let dir = tempdir().unwrap();
    let store = Store::new(dir.path().join("t.json"));
    let mut txs = Vec::new();
    let entries = [
        (TxType::Income, "1200.50"),
        (TxType::Expense, "99.99"),
        (TxType::Expense, "0.51"),
        (TxType::Income, "10"),
    ];
    for (t, amt) in entries {
        record(&store, &mut txs, t, dec(amt), "X", day("2025-01-01")).unwrap();
    }
    let t = totals(&txs).unwrap();
    assert_eq!(t.income, dec("1210.50"));
    assert_eq!(t.expense, dec("100.50"));
    assert_eq!(balance(&txs).unwrap(), dec("1110.00"));
    assert_eq!(t.balance().unwrap(), balance(&txs).unwrap());
}

#[test]
fn append_adds_exactly_one_and_keeps_prior_entries() {
    let dir = tempdir().unwrap();
    let store = Store::new(dir.path().join("t.json"));
    let mut txs = Vec::new();
    record(&store, &mut txs, TxType::Income, dec("20"), "Gift", day("2025-02-01")).unwrap();
    record(&store, &mut txs, TxType::Expense, dec("5"), "Snacks", day("2025-02-02")).unwrap();
    let before = store.load();

    let mut txs = store.load();
    record(&store, &mut txs, TxType::Expense, dec("3"), "Bus", day("2025-02-03")).unwrap();
    let after = store.load();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
}

#[test]
fn blank_category_is_stored_as_default() {
    let dir = tempdir().unwrap();
    let store = Store::new(dir.path().join("t.json"));
    let mut txs = Vec::new();
    record(&store, &mut txs, TxType::Expense, dec("7"), "", day("2025-02-01")).unwrap();
    record(&store, &mut txs, TxType::Income, dec("7"), "   ", day("2025-02-01")).unwrap();

    let stored = store.load();
    assert!(stored.iter().all(|t| t.category == DEFAULT_CATEGORY));
    assert_eq!(categories(&stored).into_iter().collect::<Vec<_>>(), vec![DEFAULT_CATEGORY]);
    // a blank query falls back to the same label
    assert_eq!(by_category(&stored, "").count(), 2);
}

#[test]
fn negative_amount_is_rejected_without_writing() {
    let dir = tempdir().unwrap();
    let store = Store::open_or_init(dir.path().join("t.json")).unwrap();
    let mut txs = store.load();
    let err = record(&store, &mut txs, TxType::Expense, dec("-1"), "X", day("2025-02-01"))
        .unwrap_err();
    assert!(matches!(err, BudgetError::NegativeAmount(_)));
    assert!(txs.is_empty());
    assert!(store.load().is_empty());
}

#[test]
fn history_signals_empty_and_is_restartable() {
    assert!(history(&[]).is_none());

    let dir = tempdir().unwrap();
    let store = Store::new(dir.path().join("t.json"));
    let mut txs = Vec::new();
    record(&store, &mut txs, TxType::Income, dec("1"), "A", day("2025-01-01")).unwrap();
    record(&store, &mut txs, TxType::Income, dec("2"), "B", day("2025-01-02")).unwrap();

    let it = history(&txs).unwrap();
    let first: Vec<_> = it.clone().map(|t| t.amount).collect();
    let second: Vec<_> = it.map(|t| t.amount).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![dec("1"), dec("2")]);
}

#[test]
fn unknown_category_yields_nothing() {
    let dir = tempdir().unwrap();
    let store = Store::new(dir.path().join("t.json"));
    let mut txs = Vec::new();
    record(&store, &mut txs, TxType::Income, dec("1"), "A", day("2025-01-01")).unwrap();
    assert_eq!(by_category(&txs, "Nope").count(), 0);
}

#[test]
fn overflowing_balance_rejects_append_without_writing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("transaction.json");
    std::fs::write(
        &path,
        r#"[{"type": "income", "amount": 79228162514264337593543950335, "category": "Windfall", "date": "2025-01-01"}]"#,
    )
    .unwrap();
    let store = Store::new(&path);
    let before = std::fs::read_to_string(&path).unwrap();

    let mut txs = store.load();
    assert_eq!(txs.len(), 1);
    let err = record(&store, &mut txs, TxType::Income, dec("1"), "Salary", day("2025-01-02"))
        .unwrap_err();
    assert!(matches!(err, BudgetError::AmountOverflow));
    assert_eq!(txs.len(), 1);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);

    // the stored entry can still be spent against
    record(&store, &mut txs, TxType::Expense, dec("5"), "Food", day("2025-01-03")).unwrap();
    assert_eq!(store.load().len(), 2);
}

#[test]
fn oversized_amount_is_rejected_by_record() {
    let dir = tempdir().unwrap();
    let store = Store::open_or_init(dir.path().join("t.json")).unwrap();
    let mut txs = store.load();
    let err = record(&store, &mut txs, TxType::Income, Decimal::MAX, "X", day("2025-02-01"))
        .unwrap_err();
    assert!(matches!(err, BudgetError::AmountTooLarge(_)));
    assert!(store.load().is_empty());
}

#[test]
fn negative_zero_is_stored_as_zero() {
    let dir = tempdir().unwrap();
    let store = Store::new(dir.path().join("t.json"));
    let mut txs = Vec::new();
    record(&store, &mut txs, TxType::Expense, dec("-0"), "X", day("2025-02-01")).unwrap();
    let stored = store.load();
    assert!(!stored[0].amount.is_sign_negative());
    assert!(
        std::fs::read_to_string(store.path())
            .unwrap()
            .contains("\"amount\": 0,")
    );
}
