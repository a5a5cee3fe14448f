//! NDJSON output for `--json` mode.
//!
//! Every event is one JSON object per line with an `event` field.

use std::io::{self, Write};

use serde::Serialize;

use skillmeter::{ComputedSkill, RevealConfig};

/// Write a single NDJSON event.
pub fn write_event(out: &mut impl Write, event: &impl Serialize) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: &impl Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            count: None,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// One scored skill.
#[derive(Debug, Clone, Serialize)]
pub struct SkillEvent<'a> {
    pub event: &'static str,
    pub index: usize,
    #[serde(flatten)]
    pub skill: &'a ComputedSkill,
    pub percent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<RevealConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar: Option<RevealConfig>,
}

impl<'a> SkillEvent<'a> {
    pub fn new(index: usize, skill: &'a ComputedSkill) -> Self {
        Self {
            event: "skill",
            index,
            skill,
            percent: skill.level().percent(),
            card: None,
            bar: None,
        }
    }

    pub fn with_reveal(mut self, card: RevealConfig, bar: RevealConfig) -> Self {
        self.card = Some(card);
        self.bar = Some(bar);
        self
    }
}

/// One entry of the technology list.
#[derive(Debug, Clone, Serialize)]
pub struct TechnologyEvent<'a> {
    pub event: &'static str,
    pub index: usize,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chip: Option<RevealConfig>,
}

impl<'a> TechnologyEvent<'a> {
    pub fn new(index: usize, name: &'a str) -> Self {
        Self {
            event: "technology",
            index,
            name,
            chip: None,
        }
    }

    pub fn with_reveal(mut self, chip: RevealConfig) -> Self {
        self.chip = Some(chip);
        self
    }
}

/// Result of `skillmeter score`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreEvent<'a> {
    pub event: &'static str,
    pub name: &'a str,
    pub base: i32,
    pub range: u32,
    pub hash: i32,
    pub jitter: i64,
    pub level: u8,
    pub percent: String,
    pub clamped: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmeter::{Level, RevealSchedule, SkillRecord};

    #[test]
    fn start_event_serializes_correctly() {
        let json = serde_json::to_value(StartEvent::new("render")).unwrap();
        assert_eq!(json["event"], "start");
        assert_eq!(json["command"], "render");
        assert!(json["version"].is_string());
    }

    #[test]
    fn complete_event_with_count() {
        let json = serde_json::to_value(CompleteEvent::success("render").with_count(8)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 8);

        let json = serde_json::to_value(CompleteEvent::failure("check")).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("count").is_none());
    }

    #[test]
    fn error_event_with_help() {
        let event = ErrorEvent::new("score", "invalid_argument", "bad range")
            .with_help("range must be >= 0");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "error");
        assert_eq!(json["code"], "invalid_argument");
        assert_eq!(json["help"], "range must be >= 0");
    }

    #[test]
    fn skill_event_flattens_skill() {
        let skill = ComputedSkill::new(SkillRecord::new("Python", 88, "Languages"), Level::clamped(89));
        let schedule = RevealSchedule::default();
        let event = SkillEvent::new(5, &skill).with_reveal(schedule.card(5), schedule.bar(5));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "skill");
        assert_eq!(json["name"], "Python");
        assert_eq!(json["level"], 89);
        assert_eq!(json["percent"], "89%");
        assert_eq!(json["bar"]["delay_ms"], 800);
    }

    #[test]
    fn write_event_appends_newline() {
        let mut buf = Vec::new();
        write_event(&mut buf, &TechnologyEvent::new(0, "Docker")).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert_eq!(line, "{\"event\":\"technology\",\"index\":0,\"name\":\"Docker\"}\n");
    }
}
