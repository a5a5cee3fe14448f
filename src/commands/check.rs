use std::process::ExitCode;

use anyhow::Result;

use skillmeter::SkillError;

use crate::ui::json::{write_event, CompleteEvent, StartEvent};
use crate::ui::views::check::CheckView;

use super::{GlobalArgs, Session};

/// Exit code when the catalog has validation errors.
const EXIT_INVALID: u8 = 2;

pub fn cmd_check(args: &GlobalArgs) -> Result<ExitCode> {
    let session = Session::load(args)?;
    let validation = session.config.validate_catalog();
    let setting_errors: Vec<SkillError> = [
        session.config.jitter_range().err(),
        session.config.bar_width().err(),
    ]
    .into_iter()
    .flatten()
    .collect();
    let valid = validation.is_valid() && setting_errors.is_empty();

    if session.ui.json {
        let mut out = std::io::stdout().lock();
        write_event(&mut out, &StartEvent::new("check"))?;
        for w in &session.warnings {
            write_event(
                &mut out,
                &serde_json::json!({
                    "event": "warning",
                    "kind": "unknown_key",
                    "key": w.key,
                    "file": w.file.display().to_string(),
                    "line": w.line,
                    "suggestion": w.suggestion,
                }),
            )?;
        }
        for err in validation.errors.iter().chain(&setting_errors) {
            write_event(
                &mut out,
                &serde_json::json!({
                    "event": "issue",
                    "code": err.code(),
                    "message": err.to_string(),
                }),
            )?;
        }
        for warning in &validation.warnings {
            write_event(
                &mut out,
                &serde_json::json!({ "event": "warning", "kind": "catalog", "message": warning }),
            )?;
        }
        let complete = if valid {
            CompleteEvent::success("check")
        } else {
            CompleteEvent::failure("check")
        };
        write_event(&mut out, &complete.with_count(validation.records.len()))?;
    } else if !session.ui.quiet || !valid {
        print!(
            "{}",
            CheckView::new(&session.source, &validation, &session.warnings)
                .render(session.ui.color, session.ui.unicode)
        );
        for err in &setting_errors {
            eprintln!("{} {}", session.ui.glyphs().error, err);
        }
    }

    if valid {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_INVALID))
    }
}
