//! Week plan generation and single-slot edits.
//!
//! Bulk generation draws lunches and dinners without replacement from two
//! independent pools:
//! - lunch: meals not flagged dinner-only
//! - dinner: every meal
//!
//! A meal may therefore be one day's lunch and another day's dinner. Only
//! bulk generation keeps dinner-only meals out of lunch slots; the leftovers
//! shortcut can copy anything.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, warn};

use weekmenu_store::models::{Day, Meal, MealId, WeekPlan};

use crate::catalog::Catalog;

/// Number of distinct meals each pool must supply for a full week.
pub const PLAN_DAYS: usize = Day::ALL.len();

/// The catalog cannot fill a week without repeating a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "not enough meals to plan a week without repeats: \
     {lunch_eligible} lunch-eligible and {total} in total, at least {required} of each needed"
)]
pub struct InsufficientCatalog {
    pub lunch_eligible: usize,
    pub total: usize,
    pub required: usize,
}

/// Generate a fully filled plan, Monday..Sunday.
///
/// Lunches are pairwise distinct and dinners are pairwise distinct. Returns
/// [`InsufficientCatalog`] when either pool holds fewer than [`PLAN_DAYS`]
/// meals.
pub fn generate<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
) -> Result<WeekPlan, InsufficientCatalog> {
    let lunch_pool: Vec<&Meal> = catalog.lunch_eligible().collect();
    let dinner_pool: Vec<&Meal> = catalog.meals().iter().collect();

    if lunch_pool.len() < PLAN_DAYS || dinner_pool.len() < PLAN_DAYS {
        let err = InsufficientCatalog {
            lunch_eligible: lunch_pool.len(),
            total: dinner_pool.len(),
            required: PLAN_DAYS,
        };
        warn!(
            lunch_eligible = err.lunch_eligible,
            total = err.total,
            "catalog too small for a week plan"
        );
        return Err(err);
    }

    let lunches = lunch_pool.choose_multiple(rng, PLAN_DAYS);
    let dinners = dinner_pool.choose_multiple(rng, PLAN_DAYS);

    let mut plan = WeekPlan::empty();
    for ((day, lunch), dinner) in Day::ALL.into_iter().zip(lunches).zip(dinners) {
        let slot = plan.slot_mut(day);
        slot.lunch = Some(lunch.id);
        slot.dinner = Some(dinner.id);
    }

    info!(
        lunch_pool = lunch_pool.len(),
        dinner_pool = dinner_pool.len(),
        "week plan generated"
    );
    Ok(plan)
}

/// Pick a random meal from `pool` other than `current`.
fn pick_other<'a, R: Rng + ?Sized>(
    pool: impl Iterator<Item = &'a Meal>,
    current: Option<MealId>,
    rng: &mut R,
) -> Option<MealId> {
    let candidates: Vec<&Meal> = pool.filter(|m| Some(m.id) != current).collect();
    candidates.choose(rng).map(|m| m.id)
}

/// Replace `day`'s lunch with a different lunch-eligible meal.
///
/// Returns `false` (plan untouched) when no other lunch-eligible meal exists.
pub fn reroll_lunch<R: Rng + ?Sized>(
    plan: &mut WeekPlan,
    day: Day,
    catalog: &Catalog,
    rng: &mut R,
) -> bool {
    let slot = plan.slot_mut(day);
    match pick_other(catalog.lunch_eligible(), slot.lunch, rng) {
        Some(id) => {
            debug!(day = %day, meal = %id, "lunch rerolled");
            slot.lunch = Some(id);
            true
        }
        None => false,
    }
}

/// Replace `day`'s dinner with a different meal from the whole catalog.
///
/// Returns `false` (plan untouched) when no other meal exists.
pub fn reroll_dinner<R: Rng + ?Sized>(
    plan: &mut WeekPlan,
    day: Day,
    catalog: &Catalog,
    rng: &mut R,
) -> bool {
    let slot = plan.slot_mut(day);
    match pick_other(catalog.meals().iter(), slot.dinner, rng) {
        Some(id) => {
            debug!(day = %day, meal = %id, "dinner rerolled");
            slot.dinner = Some(id);
            true
        }
        None => false,
    }
}

/// Leftovers: set `day`'s dinner to its lunch. An empty lunch clears dinner.
pub fn copy_lunch_to_dinner(plan: &mut WeekPlan, day: Day) {
    let slot = plan.slot_mut(day);
    slot.dinner = slot.lunch;
}
