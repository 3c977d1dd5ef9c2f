// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod console;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reporting;
pub mod store;
pub mod utils;
