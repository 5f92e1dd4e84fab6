//! Load/save functions for each persisted collection.

pub mod history;
pub mod meals;
pub mod plan;
