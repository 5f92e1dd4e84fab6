//! Shared test utilities for weekmenu integration tests.
//!
//! Each test gets its own temporary data directory, removed when the
//! [`TestStore`] is dropped.

use tempfile::TempDir;

use weekmenu_store::models::Meal;
use weekmenu_store::{Store, StoreConfig};

/// A [`Store`] rooted in a fresh temporary directory.
pub struct TestStore {
    pub store: Store,
    pub config: StoreConfig,
    /// Held to keep the directory alive for the duration of the test.
    _dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp data directory");
        let config = StoreConfig::new(dir.path().join("weekmenu"));
        let store = Store::open(&config).expect("failed to open temp store");
        Self {
            store,
            config,
            _dir: dir,
        }
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a test store in a temporary directory.
pub fn create_test_store() -> TestStore {
    TestStore::new()
}

/// Build a catalog with `lunch` lunch-eligible meals followed by
/// `dinner_only` dinner-only meals. Names are `lunch-N` and `dinner-N`.
pub fn catalog(lunch: usize, dinner_only: usize) -> Vec<Meal> {
    let lunches = (0..lunch).map(|i| Meal::new(format!("lunch-{i}"), false));
    let dinners = (0..dinner_only).map(|i| Meal::new(format!("dinner-{i}"), true));
    lunches.chain(dinners).collect()
}
