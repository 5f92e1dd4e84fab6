use std::env;
use std::path::PathBuf;

/// Storage location configuration.
///
/// Reads from the `WEEKMENU_DATA_DIR` environment variable, falling back to
/// the XDG data directory (`$XDG_DATA_HOME/weekmenu` or
/// `~/.local/share/weekmenu`) when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding `meals.json`, `plan.json` and `history.json`.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Environment variable that overrides the data directory.
    pub const ENV_VAR: &str = "WEEKMENU_DATA_DIR";

    /// Build a config from the environment.
    ///
    /// Priority: `WEEKMENU_DATA_DIR` env var, then [`Self::default_data_dir`].
    pub fn from_env() -> Self {
        let data_dir = env::var_os(Self::ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_data_dir);
        Self { data_dir }
    }

    /// Build a config from an explicit directory (useful for tests and CLI flags).
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The data directory used when nothing else is configured.
    ///
    /// Always uses XDG layout, like the config directory, so the files end
    /// up in the same place on Linux and macOS.
    pub fn default_data_dir() -> PathBuf {
        if let Some(xdg) = env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
            return PathBuf::from(xdg).join("weekmenu");
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".local")
            .join("share")
            .join("weekmenu")
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
