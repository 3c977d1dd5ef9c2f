// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::required;
use crate::store::Store;
use anyhow::{Result, bail};

pub fn handle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = required(sub, "format")?.to_lowercase();
    let out = required(sub, "out")?;

    match fmt.as_str() {
        "csv" | "json" => {}
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }

    let txs = store.load();
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["type", "amount", "category", "date", "balance"])?;
            for t in &txs {
                wtr.write_record([
                    t.r#type.to_string(),
                    t.amount.to_string(),
                    t.category.clone(),
                    t.date.to_string(),
                    t.balance.map(|b| b.to_string()).unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            std::fs::write(out, serde_json::to_string_pretty(&txs)?)?;
        }
    }
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
