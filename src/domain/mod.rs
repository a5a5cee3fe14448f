//! Domain Layer
//!
//! Pure scoring logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Skill records, computed skills, the catalog
//! - `value_objects/` - Jitter range, stable hash, display level
//! - `services/` - Score computation and reveal timings
//! - `policies/` - Validation of authored entries

pub mod entities;
pub mod policies;
pub mod services;
pub mod value_objects;
