// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::ExpenseStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table, today};
use anyhow::{Context, Result};

pub fn add(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub
        .get_one::<String>("description")
        .context("--description is required")?;
    let amount = sub
        .get_one::<String>("amount")
        .context("--amount is required")?;

    let mut ledger = store.load()?;
    let id = ledger.add(description, amount, today())?.id;
    store.save(&ledger)?;
    println!("Expense added successfully (ID: {})", id);
    Ok(())
}

pub fn list(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let ledger = store.load()?;
    if maybe_print_json(json_flag, jsonl_flag, &ledger)? {
        return Ok(());
    }
    if ledger.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = ledger
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.date.to_string(),
                e.description.clone(),
                fmt_money(e.amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Date", "Description", "Amount"], rows)
    );
    Ok(())
}

pub fn delete(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<u32>("id").context("--id is required")?;
    let mut ledger = store.load()?;
    ledger.delete(id)?;
    store.save(&ledger)?;
    println!("Expense with ID {} deleted successfully", id);
    Ok(())
}

pub fn update(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<u32>("id").context("--id is required")?;
    let description = sub.get_one::<String>("description").map(|s| s.as_str());
    let amount = sub.get_one::<String>("amount").map(|s| s.as_str());

    let mut ledger = store.load()?;
    ledger.update(id, description, amount, today())?;
    store.save(&ledger)?;
    println!("Expense with ID {} updated successfully", id);
    Ok(())
}
