// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label given to entries recorded without a category.
///
/// Older files may also carry `General`, which the previous tool used as the
/// blank-query fallback; such entries are kept as-is.
pub const DEFAULT_CATEGORY: &str = "Others";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Income,
    Expense,
}

impl TxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Income => "income",
            TxType::Expense => "expense",
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of `transaction.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub r#type: TxType,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    /// Running balance right after this entry was recorded. Informational only.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub balance: Option<Decimal>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.r#type == TxType::Expense
    }

    /// Effect of this entry on the balance.
    pub fn signed_amount(&self) -> Decimal {
        match self.r#type {
            TxType::Income => self.amount,
            TxType::Expense => -self.amount,
        }
    }
}
