//! skillmeter - stable skill-level scoring
//!
//! Turns hand-authored skill entries (name, base score, category) into
//! display levels that look varied but never change between runs. The
//! variation is a small jitter derived from a 32-bit hash of the skill
//! name, so any faithful implementation produces the same numbers.

pub mod config;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use config::{Config, ConfigSource, ConfigWarning};
pub use domain::entities::{categories_in_order, ComputedSkill, SkillCatalog, SkillRecord};
pub use domain::policies::{validate_skills, CatalogValidation, SkillDraft};
pub use domain::services::{
    compute_level, LevelCache, RevealConfig, RevealSchedule, ScoreBreakdown, StableScoreComputer,
};
pub use domain::value_objects::{stable_hash, stable_jitter, JitterRange, Level};
pub use error::{SkillError, SkillResult};
