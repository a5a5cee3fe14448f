//! Error types for skillmeter
//!
//! Library code returns `SkillError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for skillmeter operations
pub type SkillResult<T> = Result<T, SkillError>;

/// Main error type for skillmeter operations
#[derive(Error, Debug)]
pub enum SkillError {
    /// A required input was absent or malformed (e.g. negative jitter range)
    #[error("invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    /// Skill entry lacks a required key
    #[error("skill #{index} is missing required field '{field}'")]
    MissingField { field: String, index: usize },

    /// Two skills share a name
    #[error("duplicate skill '{name}' (entries #{first} and #{second})")]
    DuplicateSkill {
        name: String,
        first: usize,
        second: usize,
    },

    /// Base score outside the authored range
    #[error("skill '{name}' has base {base}, expected 0..=100")]
    BaseOutOfRange { name: String, base: i64 },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Explicit config path does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SkillError {
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Short machine-readable code used in JSON error events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::MissingField { .. } => "missing_field",
            Self::DuplicateSkill { .. } => "duplicate_skill",
            Self::BaseOutOfRange { .. } => "base_out_of_range",
            Self::InvalidConfig { .. } => "invalid_config",
            Self::ConfigNotFound { .. } => "config_not_found",
            Self::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_argument() {
        let err = SkillError::invalid_argument("range", "must be non-negative, got -1");
        assert_eq!(
            err.to_string(),
            "invalid argument 'range': must be non-negative, got -1"
        );
        assert_eq!(err.code(), "invalid_argument");
    }

    #[test]
    fn test_error_display_duplicate_skill() {
        let err = SkillError::DuplicateSkill {
            name: "Python".to_string(),
            first: 0,
            second: 3,
        };
        assert_eq!(
            err.to_string(),
            "duplicate skill 'Python' (entries #0 and #3)"
        );
    }

    #[test]
    fn test_error_display_config_not_found() {
        let err = SkillError::ConfigNotFound {
            path: PathBuf::from("missing/skillmeter.toml"),
        };
        assert_eq!(
            err.to_string(),
            "config file not found: missing/skillmeter.toml"
        );
    }
}
