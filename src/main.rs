// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use env_logger::Env;
use std::path::PathBuf;

use expense_tracker::{ExpenseStore, cli, commands, store};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let dir = store::store_dir(matches.get_one::<PathBuf>("data_dir").map(PathBuf::as_path))?;
    let store = ExpenseStore::open_or_init(&dir)?;

    match matches.subcommand() {
        Some(("add", sub)) => commands::expenses::add(&store, sub)?,
        Some(("list", sub)) => commands::expenses::list(&store, sub)?,
        Some(("delete", sub)) => commands::expenses::delete(&store, sub)?,
        Some(("update", sub)) => commands::expenses::update(&store, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("path", _)) => {
            println!("Expenses stored at {}", store.path().display());
            println!("CSV exports go to  {}", store.export_path().display());
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
