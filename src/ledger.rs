// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory expense collection and the operations applied to it between a
//! store load and save.

use chrono::{Datelike, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Summary};
use crate::utils::{month_name, parse_amount};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Expenses in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn get(&self, id: u32) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn add(
        &mut self,
        description: &str,
        amount: &str,
        today: NaiveDate,
    ) -> ExpenseResult<&Expense> {
        let amount = parse_amount(amount)?;
        let id = next_id(self.expenses.len())?;
        self.expenses.push(Expense {
            id,
            description: description.to_string(),
            amount,
            date: today,
        });
        debug!("added expense {} ({:.2})", id, amount);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Removes the expense and renumbers everything after it.
    pub fn delete(&mut self, id: u32) -> ExpenseResult<Expense> {
        let pos = self.position(id)?;
        let removed = self.expenses.remove(pos);
        self.renumber();
        Ok(removed)
    }

    /// Empty strings count as "not provided", matching how the CLI treats a
    /// blank `--description ""`. The date is refreshed even when nothing else
    /// changes.
    pub fn update(
        &mut self,
        id: u32,
        description: Option<&str>,
        amount: Option<&str>,
        today: NaiveDate,
    ) -> ExpenseResult<&Expense> {
        let pos = self.position(id)?;
        let amount = amount
            .filter(|a| !a.is_empty())
            .map(parse_amount)
            .transpose()?;

        let expense = &mut self.expenses[pos];
        if let Some(d) = description.filter(|d| !d.is_empty()) {
            expense.description = d.to_string();
        }
        if let Some(a) = amount {
            expense.amount = a;
        }
        expense.date = today;
        debug!("updated expense {}", id);
        Ok(&self.expenses[pos])
    }

    pub fn total(&self) -> Summary {
        if self.is_empty() {
            return Summary::NoExpenses;
        }
        Summary::Total(self.expenses.iter().map(|e| e.amount).sum())
    }

    /// Total for `month` of the year `today` falls in. Expenses from the same
    /// month of other years are ignored.
    pub fn total_for_month(&self, month: u32, today: NaiveDate) -> ExpenseResult<Summary> {
        month_name(month)?;
        if self.is_empty() {
            return Ok(Summary::NoExpenses);
        }
        let mut matched = self
            .expenses
            .iter()
            .filter(|e| e.date.year() == today.year() && e.date.month() == month)
            .peekable();
        if matched.peek().is_none() {
            return Ok(Summary::NoneInPeriod);
        }
        Ok(Summary::Total(matched.map(|e| e.amount).sum()))
    }

    fn position(&self, id: u32) -> ExpenseResult<usize> {
        self.expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(ExpenseError::NotFound(id))
    }

    fn renumber(&mut self) {
        for (id, e) in (1u32..).zip(self.expenses.iter_mut()) {
            e.id = id;
        }
        debug!("renumbered {} expenses", self.expenses.len());
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Id for an expense appended after `len` others.
fn next_id(len: usize) -> ExpenseResult<u32> {
    u32::try_from(len + 1).map_err(|_| ExpenseError::TooManyExpenses)
}
