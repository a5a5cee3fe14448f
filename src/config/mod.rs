//! Configuration module for skillmeter
//!
//! Resolution order:
//! 1. `--config <PATH>` (must exist)
//! 2. Project config (`./skillmeter.toml`)
//! 3. User config (`<config dir>/skillmeter/config.toml`)
//! 4. Built-in defaults
//!
//! Environment variables (`SKILLMETER_*`) are applied on top.

mod loader;
mod types;

pub use loader::{user_config_path, with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    ColorMode, Config, ConfigSource, OutputConfig, ScoringConfig, Verbosity, MAX_BAR_WIDTH,
};
