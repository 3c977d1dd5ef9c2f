// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn entry_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("amount")
                .required(true)
                .allow_hyphen_values(true)
                .help("Non-negative amount, e.g. 12.50"),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .short('c')
                .help("Category label (blank means 'Others')"),
        )
        .arg(
            Arg::new("date")
                .long("date")
                .help("Entry date YYYY-MM-DD (defaults to today)"),
        )
}

pub fn build_cli() -> Command {
    Command::new("budgetbook")
        .version(crate_version!())
        .about("Personal income/expense ledger kept in a JSON file")
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .global(true)
                .env("BUDGETBOOK_FILE")
                .value_parser(value_parser!(std::path::PathBuf))
                .help("Ledger file (defaults to transaction.json in the platform data dir)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug details to stderr"),
        )
        .subcommand(Command::new("init").about("Create the ledger file if missing"))
        .subcommand(entry_command("income", "Record income"))
        .subcommand(entry_command("expense", "Record an expense"))
        .subcommand(json_flags(
            Command::new("balance").about("Show the current balance"),
        ))
        .subcommand(json_flags(
            Command::new("history")
                .about("List transactions in the order they were recorded")
                .arg(Arg::new("category").long("category").short('c'))
                .arg(Arg::new("month").long("month").help("YYYY-MM"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("Only the most recent N entries"),
                ),
        ))
        .subcommand(Command::new("categories").about("List category labels in use"))
        .subcommand(json_flags(
            Command::new("spend")
                .about("Spending per category, or the entries of one category")
                .arg(Arg::new("category").long("category").short('c'))
                .arg(Arg::new("month").long("month").help("YYYY-MM")),
        ))
        .subcommand(
            Command::new("export")
                .about("Write all transactions to CSV or JSON")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .required(true)
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(Command::new("doctor").about("Check the ledger file for inconsistencies"))
        .subcommand(Command::new("menu").about("Interactive console menu"))
}
