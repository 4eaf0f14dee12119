//! Configuration for the cafeteria module

use serde::Deserialize;

/// Cafeteria module configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Apply pending schema migrations during init
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            run_migrations: true,
        }
    }
}

fn default_true() -> bool {
    true
}
