use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite file for the Products tab
    #[serde(default = "default_products_db")]
    pub products_db: String,
    /// SQLite file for the Employees tab
    #[serde(default = "default_employees_db")]
    pub employees_db: String,
    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_products_db() -> String {
    "products.db".to_string()
}

fn default_employees_db() -> String {
    "employees.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            products_db: default_products_db(),
            employees_db: default_employees_db(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".formdesk"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("formdesk.log"))
    }

    fn load_from(path: &Path) -> anyhow::Result<Config> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load the config, writing defaults on first start.
    ///
    /// Logging is not up yet, so a problem comes back alongside the
    /// defaults for the caller to report. A file that exists but cannot be
    /// read or parsed is left alone.
    pub fn load_or_init() -> (Config, Option<anyhow::Error>) {
        match Self::config_path() {
            Some(path) => Self::load_or_init_at(&path),
            None => (
                Config::default(),
                Some(anyhow::anyhow!("Could not determine config directory")),
            ),
        }
    }

    fn load_or_init_at(path: &Path) -> (Config, Option<anyhow::Error>) {
        if path.exists() {
            return match Self::load_from(path) {
                Ok(config) => (config, None),
                Err(e) => (
                    Config::default(),
                    Some(e.context(format!("Ignoring unreadable config {}", path.display()))),
                ),
            };
        }

        let config = Config::default();
        let problem = config
            .save_to(path)
            .err()
            .map(|e| e.context("Could not write default config"));
        (config, problem)
    }

    /// Save the config to disk
    fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create config directory if it doesn't exist
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }
}
