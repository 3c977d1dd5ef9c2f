// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use budgetbook::models::TxType;
use budgetbook::store::{self, Store};
use budgetbook::{cli, commands, console, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    utils::init_tracing(matches.get_flag("verbose"));

    let path = match matches.get_one::<PathBuf>("file") {
        Some(p) => p.clone(),
        None => store::default_path()?,
    };
    let store = Store::open_or_init(path)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Ledger file ready at {}", store.path().display());
        }
        Some(("income", sub)) => commands::transactions::add(&store, TxType::Income, sub)?,
        Some(("expense", sub)) => commands::transactions::add(&store, TxType::Expense, sub)?,
        Some(("balance", sub)) => commands::reports::balance(&store, sub)?,
        Some(("history", sub)) => commands::transactions::list(&store, sub)?,
        Some(("categories", _)) => commands::categories::handle(&store)?,
        Some(("spend", sub)) => commands::reports::spend(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        Some(("menu", _)) => {
            let stdin = std::io::stdin();
            console::run(&store, stdin.lock(), std::io::stdout(), utils::today())?;
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
