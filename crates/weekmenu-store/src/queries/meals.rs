//! Persistence for the meal catalog (`meals.json`).

use anyhow::{Context, Result};

use crate::models::Meal;
use crate::store::{MEALS_FILE, Store};

/// Load the catalog. Returns `None` when no catalog has been written yet.
pub fn load_meals(store: &Store) -> Result<Option<Vec<Meal>>> {
    store
        .read(MEALS_FILE)
        .context("failed to load meal catalog")
}

/// Overwrite the catalog with `meals`.
pub fn save_meals(store: &Store, meals: &[Meal]) -> Result<()> {
    store
        .write(MEALS_FILE, &meals)
        .context("failed to save meal catalog")
}

/// Whether a catalog exists on disk.
pub fn catalog_exists(store: &Store) -> bool {
    store.exists(MEALS_FILE)
}
