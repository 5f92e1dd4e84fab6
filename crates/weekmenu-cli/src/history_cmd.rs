//! CLI handler for `weekmenu history`: past generated plans, newest first.

use anyhow::Result;

use weekmenu_core::history::RETENTION_DAYS;
use weekmenu_core::{Catalog, Planner};
use weekmenu_store::models::HistoryEntry;

use crate::plan_cmds::format_plan;

pub fn run_history(planner: &Planner) -> Result<()> {
    let entries = planner.history()?;
    print!("{}", format_history(planner.catalog(), &entries));
    Ok(())
}

/// Render entries in the order given, one plan table per entry.
pub fn format_history(catalog: &Catalog, entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No history entries.\n".to_owned();
    }

    let mut out = format!("Plan history (last {RETENTION_DAYS} days):\n");
    for entry in entries {
        out.push('\n');
        out.push_str(&format!("{}\n", entry.date.format("%Y-%m-%d")));
        out.push_str(&format_plan(catalog, &entry.plan));
    }
    out
}
