//! Catalog validation policy
//!
//! Authored entries are checked here, before they reach the scorer.
//! The scorer itself never fails on typed input.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::SkillRecord;
use crate::error::{SkillError, SkillResult};

/// Inclusive bounds for an authored base score.
pub const BASE_MIN: i64 = 0;
pub const BASE_MAX: i64 = 100;

/// A skill entry as written by the author, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SkillDraft {
    pub fn new(name: impl Into<String>, base: i64, category: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            base: Some(base),
            category: Some(category.into()),
        }
    }
}

impl From<&SkillRecord> for SkillDraft {
    fn from(record: &SkillRecord) -> Self {
        Self::new(record.name(), i64::from(record.base()), record.category())
    }
}

/// Outcome of validating a list of drafts.
#[derive(Debug, Default)]
pub struct CatalogValidation {
    /// Entries that passed, in input order
    pub records: Vec<SkillRecord>,
    pub errors: Vec<SkillError>,
    pub warnings: Vec<String>,
}

impl CatalogValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Valid records, or the first error.
    pub fn into_records(self) -> SkillResult<Vec<SkillRecord>> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.records),
        }
    }
}

/// Validate authored skill drafts.
pub fn validate_skills(drafts: &[SkillDraft]) -> CatalogValidation {
    let mut out = CatalogValidation::default();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, draft) in drafts.iter().enumerate() {
        let Some(name) = draft.name.as_deref() else {
            out.errors.push(SkillError::invalid_argument(
                format!("skills[{index}].name"),
                "is required",
            ));
            continue;
        };

        if name.trim().is_empty() {
            out.errors.push(SkillError::invalid_argument(
                format!("skills[{index}].name"),
                "must not be empty",
            ));
            continue;
        }

        if let Some(&first) = seen.get(name) {
            out.errors.push(SkillError::DuplicateSkill {
                name: name.to_string(),
                first,
                second: index,
            });
            continue;
        }

        let Some(base) = draft.base else {
            out.errors.push(SkillError::MissingField {
                field: "base".to_string(),
                index,
            });
            continue;
        };

        if !(BASE_MIN..=BASE_MAX).contains(&base) {
            out.errors.push(SkillError::BaseOutOfRange {
                name: name.to_string(),
                base,
            });
            continue;
        }

        let category = match draft.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            Some(_) => {
                out.warnings.push(format!("skill '{name}' has an empty category"));
                ""
            }
            None => {
                out.errors.push(SkillError::MissingField {
                    field: "category".to_string(),
                    index,
                });
                continue;
            }
        };

        // Only accepted entries claim a name.
        seen.insert(name, index);
        // base is within 0..=100 here
        out.records.push(SkillRecord::new(name, base as i32, category));
    }

    out
}

/// Warnings for the technology list (blank or repeated entries).
pub fn validate_technologies(technologies: &[String]) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut seen: Vec<&str> = Vec::new();
    for (index, tech) in technologies.iter().enumerate() {
        let t = tech.trim();
        if t.is_empty() {
            warnings.push(format!("technology #{index} is empty"));
        } else if seen.contains(&t) {
            warnings.push(format!("technology '{t}' is listed more than once"));
        } else {
            seen.push(t);
        }
    }
    warnings
}
