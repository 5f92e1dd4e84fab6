//! CLI handlers for `weekmenu plan` subcommands.
//!
//! Implements:
//! - `weekmenu plan show`               -- print the current week grid
//! - `weekmenu plan generate`           -- draw a new week and record it in history
//! - `weekmenu plan reset`              -- clear every slot
//! - `weekmenu plan reroll-lunch <day>` -- pick a different lunch for one day
//! - `weekmenu plan reroll-dinner <day>`
//! - `weekmenu plan leftovers <day>`    -- dinner becomes that day's lunch

use std::fmt::Write as _;

use anyhow::Result;
use chrono::{Local, NaiveDate};

use weekmenu_core::{Catalog, GenerateError, Planner};
use weekmenu_store::models::{Course, Day, MealId, WeekPlan};

use crate::PlanCommands;

/// Placeholder shown for an empty slot.
const EMPTY_SLOT: &str = "-";
/// Placeholder shown for a reference the catalog cannot resolve.
const UNKNOWN_MEAL: &str = "(unknown meal)";

// -----------------------------------------------------------------------
// Public entry point
// -----------------------------------------------------------------------

/// Dispatch a `PlanCommands` variant to the appropriate handler.
pub fn run_plan_command(command: PlanCommands, planner: &mut Planner) -> Result<()> {
    match command {
        PlanCommands::Show => {
            cmd_show(planner);
            Ok(())
        }
        PlanCommands::Generate => cmd_generate(planner, Local::now().date_naive()),
        PlanCommands::Reset => cmd_reset(planner),
        PlanCommands::RerollLunch { day } => cmd_reroll(planner, day, Course::Lunch),
        PlanCommands::RerollDinner { day } => cmd_reroll(planner, day, Course::Dinner),
        PlanCommands::Leftovers { day } => cmd_leftovers(planner, day),
    }
}

// -----------------------------------------------------------------------
// Rendering
// -----------------------------------------------------------------------

/// Text for one slot: the meal name, or a placeholder.
pub fn slot_label(catalog: &Catalog, id: Option<MealId>) -> &str {
    match id {
        None => EMPTY_SLOT,
        Some(id) => catalog.name_of(id).unwrap_or(UNKNOWN_MEAL),
    }
}

/// Render a plan as a three-column table, Monday first.
pub fn format_plan(catalog: &Catalog, plan: &WeekPlan) -> String {
    let rows: Vec<(Day, &str, &str)> = plan
        .iter()
        .map(|(day, slot)| {
            (
                day,
                slot_label(catalog, slot.lunch),
                slot_label(catalog, slot.dinner),
            )
        })
        .collect();

    // "Wednesday" is the longest label.
    let day_w = 9;
    let lunch_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(5).max(5);

    let mut out = String::new();
    let _ = writeln!(out, "{:<day_w$}  {:<lunch_w$}  DINNER", "DAY", "LUNCH");
    for (day, lunch, dinner) in rows {
        let _ = writeln!(out, "{:<day_w$}  {:<lunch_w$}  {}", day.label(), lunch, dinner);
    }
    out
}

fn cmd_show(planner: &Planner) {
    if planner.plan().is_empty() {
        println!("The week plan is empty. Use `weekmenu plan generate` to fill it.");
        println!();
    }
    print!("{}", format_plan(planner.catalog(), planner.plan()));
}

// -----------------------------------------------------------------------
// weekmenu plan generate
// -----------------------------------------------------------------------

fn cmd_generate(planner: &mut Planner, today: NaiveDate) -> Result<()> {
    match planner.generate(today, &mut rand::rng()) {
        Ok(_) => {}
        Err(GenerateError::InsufficientCatalog(e)) => {
            println!("Warning: {e}.");
            println!("Add meals with `weekmenu meal add <name>` and try again.");
            return Ok(());
        }
        Err(GenerateError::Storage(e)) => return Err(e),
    }

    println!("Week plan generated and saved.");
    println!();
    print!("{}", format_plan(planner.catalog(), planner.plan()));
    Ok(())
}

// -----------------------------------------------------------------------
// weekmenu plan reset
// -----------------------------------------------------------------------

fn cmd_reset(planner: &mut Planner) -> Result<()> {
    planner.reset_plan()?;
    println!("Week plan reset.");
    Ok(())
}

// -----------------------------------------------------------------------
// weekmenu plan reroll-lunch / reroll-dinner <day>
// -----------------------------------------------------------------------

fn cmd_reroll(planner: &mut Planner, day: Day, course: Course) -> Result<()> {
    let mut rng = rand::rng();
    let changed = match course {
        Course::Lunch => planner.reroll_lunch(day, &mut rng)?,
        Course::Dinner => planner.reroll_dinner(day, &mut rng)?,
    };

    if changed {
        let id = planner.plan().slot(day).get(course);
        println!("{day} {course}: {}", slot_label(planner.catalog(), id));
    } else {
        println!("No other meal available for {day} {course}.");
    }
    Ok(())
}

// -----------------------------------------------------------------------
// weekmenu plan leftovers <day>
// -----------------------------------------------------------------------

fn cmd_leftovers(planner: &mut Planner, day: Day) -> Result<()> {
    planner.copy_lunch_to_dinner(day)?;
    let dinner = planner.plan().slot(day).dinner;
    println!(
        "{day} {}: {} (leftovers from lunch)",
        Course::Dinner,
        slot_label(planner.catalog(), dinner)
    );
    Ok(())
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
