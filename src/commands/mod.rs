//! Command handlers for the `skillmeter` binary.

pub mod catalog;
pub mod check;
pub mod render;
pub mod score;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use skillmeter::{Config, ConfigSource, ConfigWarning};

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;

/// Flags shared by every command.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub json: bool,
    pub verbose: u8,
    pub config: Option<PathBuf>,
    pub color: Option<ColorWhen>,
}

/// Resolved configuration plus output settings for one invocation.
pub struct Session {
    pub config: Config,
    pub source: ConfigSource,
    pub warnings: Vec<ConfigWarning>,
    pub ui: UiContext,
}

impl Session {
    pub fn load(args: &GlobalArgs) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let (config, warnings, source) = Config::resolve(args.config.as_deref(), &cwd)?;
        let config = config.with_env_overrides();
        info!(source = %source, "configuration resolved");
        for w in &warnings {
            warn!(key = %w.key, file = %w.file.display(), "unknown config key");
        }
        let ui = UiContext::new(args.json, args.verbose, args.color, &config);
        Ok(Self {
            config,
            source,
            warnings,
            ui,
        })
    }
}
