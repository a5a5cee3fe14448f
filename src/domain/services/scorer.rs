//! Stable score computation
//!
//! Converts an authored base score plus a name-derived jitter into a
//! bounded display level. Pure: no I/O, no shared state, safe to call
//! from any thread.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::trace;

use crate::domain::entities::{ComputedSkill, SkillRecord};
use crate::domain::value_objects::{jitter_from_hash, stable_hash, JitterRange, Level};

/// Compute the display level for `name` with base score `base`.
///
/// `base` need not be pre-clamped; the result is always in
/// `[Level::MIN, Level::MAX]`.
pub fn compute_level(name: &str, base: i32, range: JitterRange) -> Level {
    ScoreBreakdown::compute(name, base, range).level
}

/// Every intermediate value of one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub hash: i32,
    pub jitter: i64,
    /// `base + jitter`, before clamping
    pub unclamped: i64,
    pub level: Level,
}

impl ScoreBreakdown {
    pub fn compute(name: &str, base: i32, range: JitterRange) -> Self {
        let hash = stable_hash(name);
        let jitter = jitter_from_hash(hash, range);
        let unclamped = i64::from(base) + jitter;
        let level = Level::clamped(unclamped);
        trace!(name, base, hash, jitter, level = level.get(), "computed level");
        Self {
            hash,
            jitter,
            unclamped,
            level,
        }
    }

    /// True when the clamp moved the value.
    pub fn was_clamped(&self) -> bool {
        i64::from(self.level.get()) != self.unclamped
    }
}

/// Scores skill records with a fixed jitter range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StableScoreComputer {
    range: JitterRange,
}

impl StableScoreComputer {
    pub fn new(range: JitterRange) -> Self {
        Self { range }
    }

    pub fn range(&self) -> JitterRange {
        self.range
    }

    pub fn level(&self, name: &str, base: i32) -> Level {
        compute_level(name, base, self.range)
    }

    pub fn compute(&self, record: &SkillRecord) -> ComputedSkill {
        ComputedSkill::new(record.clone(), self.level(record.name(), record.base()))
    }

    /// Score every record; results keep input order.
    ///
    /// Records are scored in parallel. Each result depends only on its
    /// own record, so the processing order is irrelevant.
    pub fn compute_all(&self, records: &[SkillRecord]) -> Vec<ComputedSkill> {
        records.par_iter().map(|r| self.compute(r)).collect()
    }
}

/// Memoizes levels for the lifetime of one render pass.
///
/// Owned by the caller; create a fresh cache per pass and drop it after.
#[derive(Debug, Default)]
pub struct LevelCache {
    computer: StableScoreComputer,
    levels: HashMap<(String, i32), Level>,
    hits: usize,
}

impl LevelCache {
    pub fn new(computer: StableScoreComputer) -> Self {
        Self {
            computer,
            levels: HashMap::new(),
            hits: 0,
        }
    }

    pub fn level(&mut self, name: &str, base: i32) -> Level {
        if let Some(level) = self.levels.get(&(name.to_string(), base)) {
            self.hits += 1;
            return *level;
        }
        let level = self.computer.level(name, base);
        self.levels.insert((name.to_string(), base), level);
        level
    }

    pub fn compute(&mut self, record: &SkillRecord) -> ComputedSkill {
        let level = self.level(record.name(), record.base());
        ComputedSkill::new(record.clone(), level)
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
