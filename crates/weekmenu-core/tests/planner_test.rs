//! Integration tests for the `Planner` read-modify-write cycle against a
//! temporary on-disk store.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use weekmenu_core::{GenerateError, Opened, Planner};
use weekmenu_store::Store;
use weekmenu_store::models::{Day, WeekPlan};
use weekmenu_store::queries::{history, meals, plan};
use weekmenu_store::store::{HISTORY_FILE, PLAN_FILE};
use weekmenu_test_utils::{TestStore, catalog, create_test_store};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn open(store: &Store) -> Planner {
    match Planner::open(store.clone()).expect("open should succeed") {
        Opened::Ready(p) => p,
        Opened::Seeded { .. } => panic!("expected an existing catalog"),
    }
}

/// A store whose catalog holds `lunch` lunch-eligible and `dinner_only`
/// dinner-only meals.
fn store_with_catalog(lunch: usize, dinner_only: usize) -> TestStore {
    let ts = create_test_store();
    meals::save_meals(&ts.store, &catalog(lunch, dinner_only)).unwrap();
    ts
}

// -----------------------------------------------------------------------
// First run and catalog
// -----------------------------------------------------------------------

#[test]
fn first_open_seeds_catalog_and_halts() {
    let ts = create_test_store();

    let opened = Planner::open(ts.store.clone()).unwrap();
    assert!(matches!(opened, Opened::Seeded { meals: 6 }));

    let seeded = meals::load_meals(&ts.store).unwrap().unwrap();
    assert_eq!(seeded.len(), 6);
    assert_eq!(seeded.iter().filter(|m| m.dinner_only).count(), 1);
    assert!(!ts.store.exists(PLAN_FILE), "no plan operations on the seeding cycle");

    // The next cycle proceeds normally with an empty plan.
    let planner = open(&ts.store);
    assert_eq!(planner.catalog().len(), 6);
    assert!(planner.plan().is_empty());
}

#[test]
fn add_meal_persists_catalog() {
    let ts = store_with_catalog(2, 0);
    let mut planner = open(&ts.store);

    let meal = planner.add_meal("Mushroom risotto", true).unwrap().unwrap();
    assert_eq!(meal.name, "Mushroom risotto");
    assert!(meal.dinner_only);

    let reloaded = open(&ts.store);
    assert_eq!(reloaded.catalog().len(), 3);
    assert_eq!(reloaded.catalog().name_of(meal.id), Some("Mushroom risotto"));
}

#[test]
fn add_meal_with_blank_name_is_noop() {
    let ts = store_with_catalog(2, 0);
    let mut planner = open(&ts.store);

    assert!(planner.add_meal("", false).unwrap().is_none());
    assert!(planner.add_meal("   ", true).unwrap().is_none());

    assert_eq!(planner.catalog().len(), 2);
    assert_eq!(open(&ts.store).catalog().len(), 2);
}

#[test]
fn add_meal_allows_duplicate_names() {
    let ts = store_with_catalog(0, 0);
    let mut planner = open(&ts.store);

    let a = planner.add_meal("Soup", false).unwrap().unwrap();
    let b = planner.add_meal("Soup", false).unwrap().unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(open(&ts.store).catalog().len(), 2);
}

// -----------------------------------------------------------------------
// Generation
// -----------------------------------------------------------------------

#[test]
fn generate_persists_plan_and_history() {
    let ts = store_with_catalog(7, 1);
    let mut planner = open(&ts.store);
    let mut rng = StdRng::seed_from_u64(4);
    let today = date(2026, 6, 1);

    let generated = planner.generate(today, &mut rng).unwrap().clone();
    assert!(generated.is_full());

    assert_eq!(plan::load_plan(&ts.store).unwrap(), Some(generated.clone()));
    let entries = history::load_history(&ts.store).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].date, today);
    assert_eq!(entries[0].plan, generated);

    // Reopening restores the generated plan.
    assert_eq!(open(&ts.store).plan(), &generated);
}

#[test]
fn insufficient_catalog_writes_nothing() {
    let ts = store_with_catalog(5, 1);
    let mut planner = open(&ts.store);
    let mut rng = StdRng::seed_from_u64(4);

    let err = planner.generate(date(2026, 6, 1), &mut rng).unwrap_err();
    assert!(matches!(err, GenerateError::InsufficientCatalog(_)));

    assert!(!ts.store.exists(PLAN_FILE));
    assert!(!ts.store.exists(HISTORY_FILE));
    assert!(planner.plan().is_empty());
}

#[test]
fn insufficient_catalog_leaves_existing_plan_untouched() {
    let ts = store_with_catalog(6, 3);
    let mut existing = WeekPlan::empty();
    let first = meals::load_meals(&ts.store).unwrap().unwrap()[0].id;
    existing.slot_mut(Day::Monday).lunch = Some(first);
    plan::save_plan(&ts.store, &existing).unwrap();
    let before = std::fs::read_to_string(ts.store.path(PLAN_FILE)).unwrap();

    let mut planner = open(&ts.store);
    let mut rng = StdRng::seed_from_u64(4);
    assert!(planner.generate(date(2026, 6, 1), &mut rng).is_err());

    let after = std::fs::read_to_string(ts.store.path(PLAN_FILE)).unwrap();
    assert_eq!(before, after);
    assert_eq!(planner.plan(), &existing);
}

#[test]
fn same_day_generations_are_both_recorded() {
    let ts = store_with_catalog(8, 0);
    let mut planner = open(&ts.store);
    let mut rng = StdRng::seed_from_u64(8);
    let today = date(2026, 6, 1);

    planner.generate(today, &mut rng).unwrap();
    planner.generate(today, &mut rng).unwrap();

    let entries = planner.history().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.date == today));
    assert_eq!(&entries[0].plan, planner.plan(), "newest entry listed first");
}

// -----------------------------------------------------------------------
// History retention
// -----------------------------------------------------------------------

#[test]
fn entry_is_kept_fourteen_days_later() {
    let ts = store_with_catalog(7, 0);
    let mut planner = open(&ts.store);
    let mut rng = StdRng::seed_from_u64(1);
    let d = date(2026, 2, 20);

    planner.generate(d, &mut rng).unwrap();
    planner.generate(date(2026, 3, 6), &mut rng).unwrap();

    let dates: Vec<NaiveDate> = planner.history().unwrap().iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date(2026, 3, 6), d]);
}

#[test]
fn entry_is_pruned_fifteen_days_later() {
    let ts = store_with_catalog(7, 0);
    let mut planner = open(&ts.store);
    let mut rng = StdRng::seed_from_u64(1);
    let d = date(2026, 2, 20);

    planner.generate(d, &mut rng).unwrap();
    planner.generate(date(2026, 3, 7), &mut rng).unwrap();

    let dates: Vec<NaiveDate> = planner.history().unwrap().iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date(2026, 3, 7)]);
}

#[test]
fn history_is_listed_newest_first() {
    let ts = store_with_catalog(7, 0);
    let mut planner = open(&ts.store);
    let mut rng = StdRng::seed_from_u64(1);

    for day in [3, 1, 5] {
        planner.generate(date(2026, 7, day), &mut rng).unwrap();
    }

    let dates: Vec<NaiveDate> = planner.history().unwrap().iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date(2026, 7, 5), date(2026, 7, 3), date(2026, 7, 1)]);
}

// -----------------------------------------------------------------------
// Slot edits and reset
// -----------------------------------------------------------------------

#[test]
fn reroll_persists_the_plan() {
    let ts = store_with_catalog(3, 1);
    let mut planner = open(&ts.store);
    let mut rng = StdRng::seed_from_u64(6);

    assert!(planner.reroll_lunch(Day::Monday, &mut rng).unwrap());
    assert!(planner.reroll_dinner(Day::Monday, &mut rng).unwrap());

    let saved = plan::load_plan(&ts.store).unwrap().unwrap();
    assert_eq!(&saved, planner.plan());
    assert!(saved.slot(Day::Monday).is_full());
    assert!(!ts.store.exists(HISTORY_FILE), "rerolls are not recorded in history");
}

#[test]
fn reroll_without_candidates_writes_nothing() {
    let ts = store_with_catalog(0, 1);
    let mut planner = open(&ts.store);
    let mut rng = StdRng::seed_from_u64(6);

    assert!(!planner.reroll_lunch(Day::Friday, &mut rng).unwrap());
    assert!(!ts.store.exists(PLAN_FILE));
}

#[test]
fn leftovers_copy_lunch_and_persist() {
    let ts = store_with_catalog(7, 0);
    let mut planner = open(&ts.store);
    let mut rng = StdRng::seed_from_u64(2);
    planner.generate(date(2026, 6, 1), &mut rng).unwrap();

    planner.copy_lunch_to_dinner(Day::Saturday).unwrap();

    let saved = plan::load_plan(&ts.store).unwrap().unwrap();
    let slot = saved.slot(Day::Saturday);
    assert_eq!(slot.dinner, slot.lunch);
    assert_eq!(
        planner.meal_name(slot.dinner),
        planner.meal_name(slot.lunch)
    );
}

#[test]
fn leftovers_on_empty_lunch_clears_dinner() {
    let ts = store_with_catalog(2, 0);
    let mut planner = open(&ts.store);
    let mut rng = StdRng::seed_from_u64(2);
    planner.reroll_dinner(Day::Sunday, &mut rng).unwrap();
    assert!(planner.plan().slot(Day::Sunday).dinner.is_some());

    planner.copy_lunch_to_dinner(Day::Sunday).unwrap();

    assert!(planner.plan().slot(Day::Sunday).is_empty());
    assert!(plan::load_plan(&ts.store).unwrap().unwrap().slot(Day::Sunday).is_empty());
}

#[test]
fn reset_writes_an_empty_plan() {
    let ts = store_with_catalog(7, 0);
    let mut planner = open(&ts.store);
    let mut rng = StdRng::seed_from_u64(2);
    planner.generate(date(2026, 6, 1), &mut rng).unwrap();

    planner.reset_plan().unwrap();

    assert!(planner.plan().is_empty());
    assert_eq!(plan::load_plan(&ts.store).unwrap(), Some(WeekPlan::empty()));
    assert_eq!(planner.history().unwrap().len(), 1, "reset keeps history");
}
