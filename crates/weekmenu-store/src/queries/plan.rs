//! Persistence for the current week plan (`plan.json`).

use anyhow::{Context, Result};

use crate::models::WeekPlan;
use crate::store::{PLAN_FILE, Store};

/// Load the current plan. Returns `None` when no plan has been written yet.
pub fn load_plan(store: &Store) -> Result<Option<WeekPlan>> {
    store.read(PLAN_FILE).context("failed to load week plan")
}

/// Overwrite the current plan.
pub fn save_plan(store: &Store, plan: &WeekPlan) -> Result<()> {
    store
        .write(PLAN_FILE, plan)
        .context("failed to save week plan")
}
