// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ExpenseResult;
use crate::ledger::Ledger;
use crate::models::Summary;
use crate::store::ExpenseStore;
use crate::utils::{fmt_money, month_name, today};
use anyhow::Result;
use chrono::NaiveDate;

pub fn handle(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let ledger = store.load()?;
    let month = sub.get_one::<u32>("month").copied();
    println!("{}", summary_line(&ledger, month, today())?);
    Ok(())
}

/// The line printed by `summary`, for all expenses or for `month` of the
/// year `today` falls in.
pub fn summary_line(
    ledger: &Ledger,
    month: Option<u32>,
    today: NaiveDate,
) -> ExpenseResult<String> {
    let line = match month {
        Some(month) => {
            let name = month_name(month)?;
            match ledger.total_for_month(month, today)? {
                Summary::NoExpenses => "No expenses found".to_string(),
                Summary::NoneInPeriod => {
                    format!("No expenses recorded for {} of the current year.", name)
                }
                Summary::Total(total) => {
                    format!("Total expenses for {}: {}", name, fmt_money(total))
                }
            }
        }
        None => match ledger.total() {
            Summary::Total(total) => format!("Total expenses: {}", fmt_money(total)),
            // an unfiltered total has no period to miss
            Summary::NoExpenses | Summary::NoneInPeriod => "No expenses found".to_string(),
        },
    };
    Ok(line)
}
