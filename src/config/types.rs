//! Configuration type definitions

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::SkillCatalog;
use crate::domain::policies::{validate_skills, validate_technologies, CatalogValidation, SkillDraft};
use crate::domain::services::StableScoreComputer;
use crate::domain::value_objects::{JitterRange, Level};
use crate::error::{SkillError, SkillResult};

use super::loader::{self, ConfigWarning};

/// Scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Jitter half-width; negative values are rejected when scoring
    #[serde(default = "default_range")]
    pub range: i64,

    /// Informational only; levels are always clamped to `Level::MIN..=Level::MAX`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_level: Option<i64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            range: default_range(),
            min_level: None,
        }
    }
}

fn default_range() -> i64 {
    i64::from(JitterRange::DEFAULT.get())
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,

    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
            bar_width: default_bar_width(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_bar_width() -> usize {
    24
}

/// Widest bar the panel will draw.
pub const MAX_BAR_WIDTH: usize = 200;

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config <PATH>`
    Explicit(PathBuf),
    /// `./skillmeter.toml`
    Project(PathBuf),
    /// `<config dir>/skillmeter/config.toml`
    User(PathBuf),
    Builtin,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::User(p) => write!(f, "{}", p.display()),
            Self::Builtin => f.write_str("built-in defaults"),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Replaces the built-in technology list when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Replaces the built-in skill list when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillDraft>>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SkillResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SkillResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective configuration for a run.
    ///
    /// An explicit path must exist; otherwise falls back through the
    /// project file, the user file, and built-in defaults.
    pub fn resolve(
        explicit: Option<&Path>,
        project_root: &Path,
    ) -> SkillResult<(Self, Vec<ConfigWarning>, ConfigSource)> {
        loader::resolve(explicit, project_root)
    }

    /// Apply environment variable overrides (SKILLMETER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Validated jitter range.
    pub fn jitter_range(&self) -> SkillResult<JitterRange> {
        JitterRange::from_signed(self.scoring.range)
    }

    /// Validated bar width.
    pub fn bar_width(&self) -> SkillResult<usize> {
        let width = self.output.bar_width;
        if width > MAX_BAR_WIDTH {
            return Err(SkillError::invalid_argument(
                "output.bar_width",
                format!("must be at most {MAX_BAR_WIDTH}, got {width}"),
            ));
        }
        Ok(width)
    }

    pub fn computer(&self) -> SkillResult<StableScoreComputer> {
        Ok(StableScoreComputer::new(self.jitter_range()?))
    }

    /// Skill drafts: configured ones, or the built-in catalog.
    pub fn skill_drafts(&self) -> Vec<SkillDraft> {
        match &self.skills {
            Some(drafts) => drafts.clone(),
            None => SkillCatalog::builtin()
                .skills()
                .iter()
                .map(SkillDraft::from)
                .collect(),
        }
    }

    pub fn technologies(&self) -> Vec<String> {
        match &self.technologies {
            Some(t) => t.clone(),
            None => SkillCatalog::builtin().technologies().to_vec(),
        }
    }

    /// Validate the effective catalog without failing.
    pub fn validate_catalog(&self) -> CatalogValidation {
        let technologies = self.technologies();
        let mut validation = validate_skills(&self.skill_drafts());
        validation
            .warnings
            .extend(validate_technologies(&technologies));
        if let Some(min) = self.scoring.min_level {
            if min != i64::from(Level::MIN) {
                validation.warnings.push(format!(
                    "scoring.min_level = {min} has no effect; levels are clamped to {}..={}",
                    Level::MIN,
                    Level::MAX
                ));
            }
        }
        validation
    }

    /// The effective catalog, or the first validation error.
    pub fn catalog(&self) -> SkillResult<SkillCatalog> {
        let records = validate_skills(&self.skill_drafts()).into_records()?;
        Ok(SkillCatalog::new(records, self.technologies()))
    }
}
