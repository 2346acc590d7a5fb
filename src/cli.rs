// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_name("ID")
        .value_parser(value_parser!(u32).range(1..))
        .help("Expense ID as shown by `list`")
}

fn description_arg() -> Arg {
    Arg::new("description")
        .long("description")
        .short('d')
        .value_name("TEXT")
        .allow_hyphen_values(true)
        .help("What the money was spent on")
}

fn amount_arg() -> Arg {
    Arg::new("amount")
        .long("amount")
        .short('a')
        .value_name("AMOUNT")
        .allow_hyphen_values(true)
        .help("Amount spent, e.g. 20 or 15.50")
}

pub fn build_cli() -> Command {
    Command::new("expense-tracker")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Record, summarize and export personal expenses")
        .arg(
            Arg::new("data_dir")
                .long("data-dir")
                .global(true)
                .env("EXPENSE_TRACKER_DIR")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding expenses.json (defaults to the platform data dir)"),
        )
        .subcommand(
            Command::new("add")
                .about("Record a new expense dated today")
                .arg(description_arg().required(true))
                .arg(amount_arg().required(true)),
        )
        .subcommand(
            Command::new("list")
                .about("List all expenses")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("jsonl")
                        .help("Print as a JSON array"),
                )
                .arg(
                    Arg::new("jsonl")
                        .long("jsonl")
                        .action(ArgAction::SetTrue)
                        .help("Print one JSON object per line"),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an expense; later IDs shift down by one")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("update")
                .about("Change an expense's description and/or amount; the date becomes today")
                .arg(id_arg())
                .arg(description_arg())
                .arg(amount_arg()),
        )
        .subcommand(
            Command::new("summary")
                .about("Total of all expenses, or of one month of the current year")
                .arg(
                    Arg::new("month")
                        .long("month")
                        .short('m')
                        .value_name("1-12")
                        .value_parser(value_parser!(u32).range(1..=12)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write all expenses to a CSV file")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .value_name("PATH")
                        .value_parser(value_parser!(PathBuf))
                        .help("Destination file (defaults to expenses.csv next to the store)"),
                ),
        )
        .subcommand(Command::new("path").about("Show where expenses are stored"))
}
