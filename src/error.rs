// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types shared by the store and ledger.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpenseError {
    /// The store file exists but could not be read or parsed.
    #[error("Failed to read expense store {}: {reason}", .path.display())]
    StorageRead { path: PathBuf, reason: String },

    #[error("Failed to write expense store {}: {reason}", .path.display())]
    StorageWrite { path: PathBuf, reason: String },

    #[error("Expense with ID {0} not found")]
    NotFound(u32),

    #[error("Invalid amount '{0}', expected a number")]
    InvalidAmount(String),

    #[error("Invalid month {0}, expected 1-12")]
    InvalidMonth(u32),

    /// Ids are `u32`; a store already holding `u32::MAX` expenses cannot grow.
    #[error("Cannot add more than {} expenses", u32::MAX)]
    TooManyExpenses,
}

impl ExpenseError {
    pub fn read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::StorageRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::StorageWrite {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type ExpenseResult<T> = Result<T, ExpenseError>;
