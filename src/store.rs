// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{debug, info};
use once_cell::sync::Lazy;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::ledger::Ledger;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "ExpenseTracker", "expense-tracker"));

pub const STORE_FILE: &str = "expenses.json";
pub const EXPORT_FILE: &str = "expenses.csv";

/// Directory holding the store. An explicit directory (from `--data-dir` or
/// `EXPENSE_TRACKER_DIR`) wins over the platform data dir.
pub fn store_dir(custom: Option<&Path>) -> Result<PathBuf> {
    let dir = match custom {
        Some(dir) => dir.to_path_buf(),
        None => ProjectDirs::from(APP.0, APP.1, APP.2)
            .context("Could not determine platform-specific data dir")?
            .data_dir()
            .to_path_buf(),
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data dir {}", dir.display()))?;
    Ok(dir)
}

/// The single JSON document holding every expense. Each command loads the
/// whole file, works on the returned [`Ledger`] and saves it back.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Opens the store in `dir`, writing an empty collection first if the file
    /// does not exist yet. An existing file is never touched.
    pub fn open_or_init(dir: &Path) -> ExpenseResult<Self> {
        let store = Self {
            path: dir.join(STORE_FILE),
        };
        if !store.path.exists() {
            store.save(&Ledger::default())?;
            info!("created {}", store.path.display());
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default CSV destination, next to the store.
    pub fn export_path(&self) -> PathBuf {
        self.path.with_file_name(EXPORT_FILE)
    }

    pub fn load(&self) -> ExpenseResult<Ledger> {
        let file = File::open(&self.path).map_err(|e| ExpenseError::read(&self.path, e))?;
        let ledger: Ledger = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ExpenseError::read(&self.path, e))?;
        debug!("loaded {} expenses from {}", ledger.len(), self.path.display());
        Ok(ledger)
    }

    /// Replaces the store with `ledger`. The data goes to a sibling temp file
    /// first and is renamed over the store once synced.
    pub fn save(&self, ledger: &Ledger) -> ExpenseResult<()> {
        let temp_path = self.path.with_extension("json.tmp");
        let write = || -> std::io::Result<()> {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, ledger)?;
            writer.flush()?;
            writer.get_ref().sync_all()
        };
        if let Err(e) = write().and_then(|()| fs::rename(&temp_path, &self.path)) {
            let _ = fs::remove_file(&temp_path);
            return Err(ExpenseError::write(&self.path, e));
        }
        debug!("saved {} expenses to {}", ledger.len(), self.path.display());
        Ok(())
    }
}
