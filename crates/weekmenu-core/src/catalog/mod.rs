//! The meal catalog: append-only, seeded with a built-in set on first run.

use anyhow::Result;
use tracing::{debug, info};

use weekmenu_store::Store;
use weekmenu_store::models::{Meal, MealId};
use weekmenu_store::queries::meals as db;

/// Built-in meals written on first run: `(name, dinner_only)`.
pub const SEED_MEALS: [(&str, bool); 6] = [
    ("Beef stew with vegetables", false),
    ("Tortillas with beans and corn", false),
    ("Lentil and chickpea stew", false),
    ("Chickpea spread", true),
    ("Chicken with green beans and vegetables", false),
    ("Garden salad with boiled eggs", false),
];

/// Build the seed catalog with fresh ids.
pub fn seed_meals() -> Vec<Meal> {
    SEED_MEALS
        .iter()
        .map(|&(name, dinner_only)| Meal::new(name, dinner_only))
        .collect()
}

/// In-memory view of the catalog, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    meals: Vec<Meal>,
}

impl Catalog {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Meals that may be served for lunch (not flagged dinner-only).
    pub fn lunch_eligible(&self) -> impl Iterator<Item = &Meal> {
        self.meals.iter().filter(|m| m.is_lunch_eligible())
    }

    pub fn get(&self, id: MealId) -> Option<&Meal> {
        self.meals.iter().find(|m| m.id == id)
    }

    /// Display name for a slot reference, if the meal is in the catalog.
    pub fn name_of(&self, id: MealId) -> Option<&str> {
        self.get(id).map(|m| m.name.as_str())
    }
}

/// Result of loading the catalog from disk.
#[derive(Debug)]
pub enum CatalogLoad {
    /// A catalog already existed.
    Existing(Catalog),
    /// No catalog existed; the seed set was written.
    Seeded(Catalog),
}

/// Load the catalog, writing the seed set when none exists yet.
pub fn load_catalog(store: &Store) -> Result<CatalogLoad> {
    match db::load_meals(store)? {
        Some(meals) => {
            debug!(meals = meals.len(), "catalog loaded");
            Ok(CatalogLoad::Existing(Catalog::new(meals)))
        }
        None => {
            let meals = seed_meals();
            db::save_meals(store, &meals)?;
            info!(meals = meals.len(), "meal catalog seeded");
            Ok(CatalogLoad::Seeded(Catalog::new(meals)))
        }
    }
}

/// Append a meal and persist the full catalog.
///
/// A blank name is a no-op and returns `None`. Duplicate names are allowed.
pub fn add_meal(
    store: &Store,
    catalog: &mut Catalog,
    name: &str,
    dinner_only: bool,
) -> Result<Option<Meal>> {
    let name = name.trim();
    if name.is_empty() {
        debug!("ignoring meal with blank name");
        return Ok(None);
    }

    let meal = Meal::new(name, dinner_only);
    catalog.meals.push(meal.clone());
    db::save_meals(store, &catalog.meals)?;
    info!(id = %meal.id, name = %meal.name, dinner_only, "meal added");
    Ok(Some(meal))
}
