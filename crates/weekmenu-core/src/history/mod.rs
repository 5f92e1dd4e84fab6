//! Rolling history of generated plans.
//!
//! Pruning is lazy: entries older than the retention window are dropped only
//! when a new entry is recorded.

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use tracing::info;

use weekmenu_store::Store;
use weekmenu_store::models::{HistoryEntry, WeekPlan};
use weekmenu_store::queries::history as db;

/// Days an entry is kept, counted back from the date of the latest write.
pub const RETENTION_DAYS: i64 = 14;

/// Oldest date still retained when writing on `today`.
pub fn retention_cutoff(today: NaiveDate) -> NaiveDate {
    today - Duration::days(RETENTION_DAYS)
}

/// Drop entries dated before the cutoff for `today`. Entries exactly
/// [`RETENTION_DAYS`] old are kept. Returns the number removed.
pub fn prune(entries: &mut Vec<HistoryEntry>, today: NaiveDate) -> usize {
    let cutoff = retention_cutoff(today);
    let before = entries.len();
    entries.retain(|e| e.date >= cutoff);
    before - entries.len()
}

/// Append a snapshot of `plan` dated `date`, then prune relative to `date`.
pub fn append(entries: &mut Vec<HistoryEntry>, plan: &WeekPlan, date: NaiveDate) -> usize {
    entries.push(HistoryEntry {
        date,
        plan: plan.clone(),
    });
    prune(entries, date)
}

/// Order entries for display: newest date first, and for equal dates the
/// most recently recorded first.
pub fn newest_first(mut entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    entries.reverse();
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

/// Record a generated plan and persist the pruned history.
///
/// Returns the number of entries pruned. Same-day duplicates are kept.
pub fn record(store: &Store, plan: &WeekPlan, date: NaiveDate) -> Result<usize> {
    let mut entries = db::load_history(store)?;
    let pruned = append(&mut entries, plan, date);
    db::save_history(store, &entries)?;
    info!(%date, kept = entries.len(), pruned, "plan recorded in history");
    Ok(pruned)
}

/// All retained entries, newest first.
pub fn list(store: &Store) -> Result<Vec<HistoryEntry>> {
    Ok(newest_first(db::load_history(store)?))
}
