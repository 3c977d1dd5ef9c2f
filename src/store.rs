// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::models::Transaction;
use anyhow::Context;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Budgetbook", "budgetbook"));

pub const FILE_NAME: &str = "transaction.json";
const TMP_SUFFIX: &str = "tmp";

/// Platform data dir location of the ledger file. The directory is created on demand.
pub fn default_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(FILE_NAME))
}

/// The JSON file holding every transaction, read and written as one document.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the store, writing an empty `[]` document if the file does not exist yet.
    pub fn open_or_init(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);
        if !store.path.exists() {
            store.save(&[])?;
            tracing::info!(path = %store.path.display(), "initialized empty ledger file");
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling scratch file: the full file name with `.tmp` appended.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".");
        name.push(TMP_SUFFIX);
        PathBuf::from(name)
    }

    /// Reads the whole collection.
    ///
    /// Never fails: a missing, empty or unreadable file is reported through the
    /// log and yields an empty collection. The file itself is left untouched.
    pub fn load(&self) -> Vec<Transaction> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no ledger file yet, starting fresh");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "could not read ledger file, starting fresh");
                return Vec::new();
            }
        };
        if data.trim().is_empty() {
            tracing::info!(path = %self.path.display(), "ledger file is empty, starting fresh");
            return Vec::new();
        }
        match serde_json::from_str::<Vec<Transaction>>(&data) {
            Ok(txs) => {
                tracing::debug!(path = %self.path.display(), entries = txs.len(), "loaded ledger");
                txs
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ledger file is not valid, starting fresh");
                Vec::new()
            }
        }
    }

    /// Replaces the file with the full collection.
    pub fn save(&self, txs: &[Transaction]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut buf = Vec::new();
        let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
        txs.serialize(&mut ser)?;

        let tmp = self.tmp_path();
        let written = fs::File::create(&tmp).and_then(|mut file| {
            file.write_all(&buf)?;
            file.flush()
        });
        if let Err(e) = written.and_then(|_| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        tracing::debug!(path = %self.path.display(), entries = txs.len(), "saved ledger");
        Ok(())
    }
}
