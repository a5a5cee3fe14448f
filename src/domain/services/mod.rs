//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod reveal;
mod scorer;

pub use reveal::{Ease, RevealConfig, RevealSchedule, RevealTrigger, SlideFrom};
pub use scorer::{compute_level, LevelCache, ScoreBreakdown, StableScoreComputer};
