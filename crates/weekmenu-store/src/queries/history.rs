//! Persistence for the plan history (`history.json`).

use anyhow::{Context, Result};

use crate::models::HistoryEntry;
use crate::store::{HISTORY_FILE, Store};

/// Load all history entries in stored order. An absent file is an empty history.
pub fn load_history(store: &Store) -> Result<Vec<HistoryEntry>> {
    let entries: Option<Vec<HistoryEntry>> = store
        .read(HISTORY_FILE)
        .context("failed to load plan history")?;
    Ok(entries.unwrap_or_default())
}

/// Overwrite the history with `entries`.
pub fn save_history(store: &Store, entries: &[HistoryEntry]) -> Result<()> {
    store
        .write(HISTORY_FILE, &entries)
        .context("failed to save plan history")
}
