//! Domain Entities
//!
//! - `SkillRecord` - An authored skill entry
//! - `ComputedSkill` - A skill with its derived display level
//! - `SkillCatalog` - The authored skill and technology lists

mod catalog;
mod skill;

pub use catalog::{categories_in_order, SkillCatalog};
pub use skill::{ComputedSkill, SkillRecord};
