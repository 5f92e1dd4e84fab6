//! CLI handlers for `weekmenu meal` subcommands.

use anyhow::Result;

use weekmenu_core::{Catalog, Planner};

use crate::MealCommands;

/// Dispatch a `MealCommands` variant to the appropriate handler.
pub fn run_meal_command(command: MealCommands, planner: &mut Planner) -> Result<()> {
    match command {
        MealCommands::Add { name, dinner_only } => cmd_add(planner, &name, dinner_only),
        MealCommands::List => {
            print!("{}", format_catalog(planner.catalog()));
            Ok(())
        }
    }
}

/// Add a meal. A blank name is silently ignored.
fn cmd_add(planner: &mut Planner, name: &str, dinner_only: bool) -> Result<()> {
    if let Some(meal) = planner.add_meal(name, dinner_only)? {
        println!("Meal '{}' added to the catalog.", meal.name);
    }
    Ok(())
}

/// One line per meal, dinner-only meals tagged.
pub fn format_catalog(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "No meals in the catalog. Use `weekmenu meal add <name>` to add one.\n".to_owned();
    }

    let mut out = format!(
        "Meals ({} total, {} lunch-eligible):\n",
        catalog.len(),
        catalog.lunch_eligible().count()
    );
    for meal in catalog.meals() {
        let tag = if meal.dinner_only { " (dinner only)" } else { "" };
        out.push_str(&format!("  - {}{}\n", meal.name, tag));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use weekmenu_store::models::Meal;

    #[test]
    fn format_catalog_tags_dinner_only_meals() {
        let catalog = Catalog::new(vec![
            Meal::new("Goulash", false),
            Meal::new("Chickpea spread", true),
        ]);
        let text = format_catalog(&catalog);
        assert!(text.starts_with("Meals (2 total, 1 lunch-eligible):"));
        assert!(text.contains("  - Goulash\n"));
        assert!(text.contains("  - Chickpea spread (dinner only)\n"));
    }

    #[test]
    fn format_catalog_empty() {
        assert!(format_catalog(&Catalog::default()).starts_with("No meals"));
    }
}
