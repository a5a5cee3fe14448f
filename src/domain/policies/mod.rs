//! Domain Policies
//!
//! Business rules that govern which authored entries are accepted.

mod validation;

pub use validation::{
    validate_skills, validate_technologies, CatalogValidation, SkillDraft, BASE_MAX, BASE_MIN,
};
