// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u32, // 1-based position, reassigned on delete
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate, // last modified, YYYY-MM-DD
}

/// Outcome of a summary query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Summary {
    /// The store holds no expenses at all.
    NoExpenses,
    /// Expenses exist but none fall in the requested period.
    NoneInPeriod,
    Total(f64),
}
