// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::store::ExpenseStore;
use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub const CSV_HEADER: [&str; 4] = ["ID", "Date", "Description", "Amount"];

pub fn handle(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let ledger = store.load()?;
    if ledger.is_empty() {
        println!("No expenses to export.");
        return Ok(());
    }
    let out = sub
        .get_one::<PathBuf>("out")
        .cloned()
        .unwrap_or_else(|| store.export_path());
    let file = File::create(&out).with_context(|| format!("Create {}", out.display()))?;
    write_csv(&ledger, file).with_context(|| format!("Write {}", out.display()))?;
    println!("Expenses exported successfully to {}", out.display());
    Ok(())
}

/// Fields are written as-is: a comma or newline inside a description ends up
/// splitting the row.
pub fn write_csv<W: Write>(ledger: &Ledger, out: W) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(out);
    wtr.write_record(CSV_HEADER)?;
    for e in ledger {
        wtr.write_record([
            e.id.to_string(),
            e.date.to_string(),
            e.description.clone(),
            format!("{:.2}", e.amount),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
