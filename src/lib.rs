// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod error;
pub mod ledger;
pub mod models;
pub mod store;
pub mod utils;
pub mod commands;

pub use error::{ExpenseError, ExpenseResult};
pub use ledger::Ledger;
pub use store::ExpenseStore;
