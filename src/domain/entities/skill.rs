//! Skill entities
//!
//! `SkillRecord` is authored once at configuration time. `ComputedSkill`
//! is derived from it on demand and never stored.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Level;

/// An author-provided competency entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillRecord {
    name: String,
    base: i32,
    category: String,
}

impl SkillRecord {
    pub fn new(name: impl Into<String>, base: i32, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base,
            category: category.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> i32 {
        self.base
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// A `SkillRecord` plus its derived display level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComputedSkill {
    #[serde(flatten)]
    record: SkillRecord,
    level: Level,
}

impl ComputedSkill {
    pub fn new(record: SkillRecord, level: Level) -> Self {
        Self { record, level }
    }

    pub fn record(&self) -> &SkillRecord {
        &self.record
    }

    pub fn name(&self) -> &str {
        self.record.name()
    }

    pub fn category(&self) -> &str {
        self.record.category()
    }

    pub fn base(&self) -> i32 {
        self.record.base()
    }

    pub fn level(&self) -> Level {
        self.level
    }
}
