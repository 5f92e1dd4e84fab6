//! Planning logic for weekmenu: the meal catalog, week plan generation,
//! the rolling plan history, and the [`planner::Planner`] state object that
//! ties them to the on-disk store.

pub mod catalog;
pub mod generator;
pub mod history;
pub mod planner;

pub use catalog::{Catalog, CatalogLoad};
pub use generator::{InsufficientCatalog, PLAN_DAYS};
pub use planner::{GenerateError, Opened, Planner};
