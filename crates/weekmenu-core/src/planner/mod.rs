//! Application state for one interaction cycle.
//!
//! A [`Planner`] holds the catalog and the current week plan loaded from the
//! store. Every mutating call persists what it changed before returning.
//! Catalog, plan and history are separate files with no cross-file
//! transaction: a failure between writing the plan and the history leaves
//! the plan updated and the history unchanged.

use anyhow::Result;
use chrono::NaiveDate;
use rand::Rng;

use weekmenu_store::Store;
use weekmenu_store::models::{Day, HistoryEntry, Meal, MealId, WeekPlan};
use weekmenu_store::queries::plan as plan_db;

use crate::catalog::{self, Catalog, CatalogLoad};
use crate::generator::{self, InsufficientCatalog};
use crate::history;

/// Errors from [`Planner::generate`].
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Nothing was written.
    #[error(transparent)]
    InsufficientCatalog(#[from] InsufficientCatalog),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Outcome of [`Planner::open`].
#[derive(Debug)]
pub enum Opened {
    /// State loaded; the cycle may proceed.
    Ready(Planner),
    /// First run: the seed catalog was written and the cycle must stop here.
    Seeded { meals: usize },
}

#[derive(Debug)]
pub struct Planner {
    store: Store,
    catalog: Catalog,
    plan: WeekPlan,
}

impl Planner {
    /// Load the catalog and the current plan.
    ///
    /// A missing catalog is seeded and reported as [`Opened::Seeded`]. A
    /// missing plan loads as an empty week without being written.
    pub fn open(store: Store) -> Result<Opened> {
        let catalog = match catalog::load_catalog(&store)? {
            CatalogLoad::Existing(c) => c,
            CatalogLoad::Seeded(c) => return Ok(Opened::Seeded { meals: c.len() }),
        };
        let plan = plan_db::load_plan(&store)?.unwrap_or_default();
        Ok(Opened::Ready(Self {
            store,
            catalog,
            plan,
        }))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn plan(&self) -> &WeekPlan {
        &self.plan
    }

    /// Display name of a slot's meal. `None` for an empty slot or an id the
    /// catalog does not know.
    pub fn meal_name(&self, id: Option<MealId>) -> Option<&str> {
        id.and_then(|id| self.catalog.name_of(id))
    }

    /// Add a meal to the catalog. A blank name is a no-op returning `None`.
    pub fn add_meal(&mut self, name: &str, dinner_only: bool) -> Result<Option<Meal>> {
        catalog::add_meal(&self.store, &mut self.catalog, name, dinner_only)
    }

    /// Generate a new week, persist it, then record it in history for `today`.
    ///
    /// On [`GenerateError::InsufficientCatalog`] neither the plan nor the
    /// history is touched.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<&WeekPlan, GenerateError> {
        let plan = generator::generate(&self.catalog, rng)?;
        plan_db::save_plan(&self.store, &plan)?;
        history::record(&self.store, &plan, today)?;
        self.plan = plan;
        Ok(&self.plan)
    }

    /// Replace the current plan with an empty week.
    pub fn reset_plan(&mut self) -> Result<()> {
        self.plan = WeekPlan::empty();
        plan_db::save_plan(&self.store, &self.plan)
    }

    /// Reroll one lunch. Returns `false` when no other candidate exists, in
    /// which case nothing is written.
    pub fn reroll_lunch<R: Rng + ?Sized>(&mut self, day: Day, rng: &mut R) -> Result<bool> {
        let changed = generator::reroll_lunch(&mut self.plan, day, &self.catalog, rng);
        if changed {
            plan_db::save_plan(&self.store, &self.plan)?;
        }
        Ok(changed)
    }

    /// Reroll one dinner. Returns `false` when no other candidate exists, in
    /// which case nothing is written.
    pub fn reroll_dinner<R: Rng + ?Sized>(&mut self, day: Day, rng: &mut R) -> Result<bool> {
        let changed = generator::reroll_dinner(&mut self.plan, day, &self.catalog, rng);
        if changed {
            plan_db::save_plan(&self.store, &self.plan)?;
        }
        Ok(changed)
    }

    /// Leftovers shortcut: dinner becomes lunch, then the plan is saved.
    pub fn copy_lunch_to_dinner(&mut self, day: Day) -> Result<()> {
        generator::copy_lunch_to_dinner(&mut self.plan, day);
        plan_db::save_plan(&self.store, &self.plan)
    }

    /// Retained history, newest first.
    pub fn history(&self) -> Result<Vec<HistoryEntry>> {
        history::list(&self.store)
    }
}
