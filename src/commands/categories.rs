// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::reporting::{by_category, categories};
use crate::store::Store;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(store: &Store) -> Result<()> {
    let txs = store.load();
    let labels = categories(&txs);
    if labels.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }
    let data: Vec<Vec<String>> = labels
        .into_iter()
        .map(|c| vec![c.to_string(), by_category(&txs, c).count().to_string()])
        .collect();
    println!("{}", pretty_table(&["Category", "Entries"], data));
    Ok(())
}
