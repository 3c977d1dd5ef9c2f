// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Balance derivation and appending new entries.

use crate::error::{BudgetError, Result};
use crate::models::{DEFAULT_CATEGORY, Transaction, TxType};
use crate::store::Store;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Largest amount a single entry may carry.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0); // 1_000_000_000_000_000

pub(crate) fn add_checked(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b).ok_or(BudgetError::AmountOverflow)
}

/// Income minus expenses over the whole collection.
pub fn balance(txs: &[Transaction]) -> Result<Decimal> {
    txs.iter()
        .try_fold(Decimal::ZERO, |acc, t| add_checked(acc, t.signed_amount()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl Totals {
    pub fn balance(&self) -> Result<Decimal> {
        self.income
            .checked_sub(self.expense)
            .ok_or(BudgetError::AmountOverflow)
    }
}

pub fn totals(txs: &[Transaction]) -> Result<Totals> {
    txs.iter().try_fold(Totals::default(), |mut acc, t| {
        match t.r#type {
            TxType::Income => acc.income = add_checked(acc.income, t.amount)?,
            TxType::Expense => acc.expense = add_checked(acc.expense, t.amount)?,
        }
        Ok(acc)
    })
}

/// Trims the label; blank input becomes [`DEFAULT_CATEGORY`].
pub fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Rejects negative and oversized amounts; `-0` comes back as `0`.
fn check_amount(amount: Decimal) -> Result<Decimal> {
    if amount.is_zero() {
        return Ok(amount.abs());
    }
    if amount.is_sign_negative() {
        return Err(BudgetError::NegativeAmount(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(BudgetError::AmountTooLarge(amount));
    }
    Ok(amount)
}

/// Parses user input into a non-negative amount no larger than [`MAX_AMOUNT`].
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let trimmed = s.trim();
    let amount = trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| BudgetError::InvalidAmount(s.to_string()))?;
    check_amount(amount)
}

/// Appends a new entry and persists the whole collection.
///
/// The entry carries a snapshot of the balance after it is applied. Nothing is
/// appended or written when `amount` is out of range or the new balance
/// cannot be represented.
pub fn record<'a>(
    store: &Store,
    txs: &'a mut Vec<Transaction>,
    r#type: TxType,
    amount: Decimal,
    category: &str,
    date: NaiveDate,
) -> Result<&'a Transaction> {
    let amount = check_amount(amount)?;
    let mut tx = Transaction {
        r#type,
        amount,
        category: normalize_category(category),
        date,
        balance: None,
    };
    tx.balance = Some(add_checked(balance(txs)?, tx.signed_amount())?);
    txs.push(tx);
    if let Err(e) = store.save(txs) {
        txs.pop();
        return Err(e);
    }
    tracing::debug!(kind = %r#type, %amount, "recorded transaction");
    let idx = txs.len() - 1;
    Ok(&txs[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_plain_numbers() {
        assert_eq!(parse_amount("12.5").unwrap(), Decimal::new(125, 1));
        assert_eq!(parse_amount(" 500 ").unwrap(), Decimal::from(500));
        assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_rejects_text_and_negatives() {
        assert!(matches!(
            parse_amount("abc"),
            Err(BudgetError::InvalidAmount(_))
        ));
        assert!(matches!(parse_amount(""), Err(BudgetError::InvalidAmount(_))));
        assert!(matches!(
            parse_amount("-3"),
            Err(BudgetError::NegativeAmount(_))
        ));
    }

    #[test]
    fn parse_amount_bounds_and_negative_zero() {
        assert_eq!(parse_amount("1000000000000000").unwrap(), MAX_AMOUNT);
        assert!(matches!(
            parse_amount("1000000000000000.01"),
            Err(BudgetError::AmountTooLarge(_))
        ));
        assert!(matches!(
            parse_amount("79228162514264337593543950335"),
            Err(BudgetError::AmountTooLarge(_))
        ));
        let zero = parse_amount("-0").unwrap();
        assert!(zero.is_zero());
        assert!(!zero.is_sign_negative());
    }

    #[test]
    fn totals_report_overflow_instead_of_panicking() {
        let huge = Transaction {
            r#type: TxType::Income,
            amount: Decimal::MAX,
            category: "X".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            balance: None,
        };
        let txs = vec![huge.clone(), huge];
        assert!(matches!(balance(&txs), Err(BudgetError::AmountOverflow)));
        assert!(matches!(totals(&txs), Err(BudgetError::AmountOverflow)));
    }

    #[test]
    fn blank_category_becomes_default() {
        assert_eq!(normalize_category(""), DEFAULT_CATEGORY);
        assert_eq!(normalize_category("   "), DEFAULT_CATEGORY);
        assert_eq!(normalize_category(" Food "), "Food");
    }
}
