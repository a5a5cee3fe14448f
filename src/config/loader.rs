//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{SkillError, SkillResult};

use super::types::{ColorMode, Config, ConfigSource, Verbosity, MAX_BAR_WIDTH};

/// File name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "skillmeter.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SkillResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SkillError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit path, then project file, then user file, then defaults.
pub fn resolve(
    explicit: Option<&Path>,
    project_root: &Path,
) -> SkillResult<(Config, Vec<ConfigWarning>, ConfigSource)> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(SkillError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let (config, warnings) = load_with_warnings(path)?;
        debug!(path = %path.display(), "loaded explicit config");
        return Ok((config, warnings, ConfigSource::Explicit(path.to_path_buf())));
    }

    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.exists() {
        let (config, warnings) = load_with_warnings(&project_config)?;
        debug!(path = %project_config.display(), "loaded project config");
        return Ok((config, warnings, ConfigSource::Project(project_config)));
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            let (config, warnings) = load_with_warnings(&user_config)?;
            debug!(path = %user_config.display(), "loaded user config");
            return Ok((config, warnings, ConfigSource::User(user_config)));
        }
    }

    debug!("no config file found, using built-in defaults");
    Ok((Config::default(), Vec::new(), ConfigSource::Builtin))
}

/// `<config dir>/skillmeter/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("skillmeter").join("config.toml"))
}

/// Apply environment variable overrides (SKILLMETER_* prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(range) = get_env("SKILLMETER_RANGE") {
        match range.trim().parse::<i64>() {
            Ok(r) if r >= 0 => config.scoring.range = r,
            _ => warn!(value = %range, "ignoring invalid SKILLMETER_RANGE"),
        }
    }

    if let Some(verbosity) = get_env("SKILLMETER_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "normal" => Verbosity::Normal,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => {
                warn!(value = %verbosity, "ignoring invalid SKILLMETER_VERBOSITY");
                config.output.verbosity
            }
        };
    }

    if let Some(color) = get_env("SKILLMETER_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "auto" => ColorMode::Auto,
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => {
                warn!(value = %color, "ignoring invalid SKILLMETER_COLOR");
                config.output.color
            }
        };
    }

    if let Some(width) = get_env("SKILLMETER_BAR_WIDTH") {
        match width.trim().parse::<usize>() {
            Ok(w) if w <= MAX_BAR_WIDTH => config.output.bar_width = w,
            _ => warn!(value = %width, "ignoring invalid SKILLMETER_BAR_WIDTH"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "scoring",
        "range",
        "min_level",
        "output",
        "verbosity",
        "color",
        "unicode",
        "bar_width",
        "skills",
        "name",
        "base",
        "category",
        "technologies",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
