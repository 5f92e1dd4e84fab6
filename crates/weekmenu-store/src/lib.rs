//! Data model and flat-file persistence for weekmenu.
//!
//! Three independent JSON collections live in the data directory: the meal
//! catalog, the current week plan, and the plan history.

pub mod config;
pub mod models;
pub mod queries;
pub mod store;

pub use config::StoreConfig;
pub use store::{Store, StoreError};
