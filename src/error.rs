// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Failures surfaced by the ledger core. Front-ends wrap these in `anyhow`.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid amount '{0}', expected a number")]
    InvalidAmount(String),
    #[error("Amount must not be negative (got {0})")]
    NegativeAmount(Decimal),
    #[error("Amount {0} is larger than the allowed maximum")]
    AmountTooLarge(Decimal),
    #[error("Balance is too large to represent")]
    AmountOverflow,
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
}

pub type Result<T> = std::result::Result<T, BudgetError>;
