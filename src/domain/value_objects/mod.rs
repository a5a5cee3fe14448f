//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod jitter;
mod level;

pub use jitter::{jitter_from_hash, stable_hash, stable_jitter, JitterRange, HASH_SEED};
pub use level::Level;
