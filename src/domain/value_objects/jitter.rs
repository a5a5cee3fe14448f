//! Stable name hash and the jitter derived from it.
//!
//! The hash is a DJB2-style multiply-xor over UTF-16 code units with
//! 32-bit signed wraparound. Every step must stay in `i32` so that the
//! same name yields the same jitter in any faithful implementation.

use std::fmt;

use crate::error::{SkillError, SkillResult};

/// Initial accumulator value.
pub const HASH_SEED: i32 = 5381;

/// Hash `name` into a 32-bit signed accumulator.
///
/// Iterates UTF-16 code units, so characters outside the Basic
/// Multilingual Plane contribute both surrogate halves.
pub fn stable_hash(name: &str) -> i32 {
    name.encode_utf16()
        .fold(HASH_SEED, |h, unit| h.wrapping_mul(33) ^ i32::from(unit))
}

/// Half-width of the jitter band; jitter lands in `[-range, +range]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JitterRange(u32);

impl JitterRange {
    pub const DEFAULT: JitterRange = JitterRange(3);

    pub const fn new(range: u32) -> Self {
        Self(range)
    }

    /// Build from a signed value, rejecting negatives.
    pub fn from_signed(range: i64) -> SkillResult<Self> {
        u32::try_from(range).map(Self).map_err(|_| {
            SkillError::invalid_argument(
                "range",
                format!("must be a non-negative 32-bit integer, got {range}"),
            )
        })
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Number of distinct jitter values (`2 * range + 1`).
    fn modulus(self) -> u64 {
        2 * u64::from(self.0) + 1
    }
}

impl Default for JitterRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for JitterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "±{}", self.0)
    }
}

impl TryFrom<i64> for JitterRange {
    type Error = SkillError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_signed(value)
    }
}

impl From<u32> for JitterRange {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Map a hash onto `[-range, +range]`.
///
/// `abs(i32::MIN)` is treated as `2^31`.
pub fn jitter_from_hash(hash: i32, range: JitterRange) -> i64 {
    let offset = u64::from(hash.unsigned_abs()) % range.modulus();
    // offset < 2^33, fits i64
    offset as i64 - i64::from(range.get())
}

/// Deterministic jitter for `name`.
pub fn stable_jitter(name: &str, range: JitterRange) -> i64 {
    jitter_from_hash(stable_hash(name), range)
}
