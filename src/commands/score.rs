use std::process::ExitCode;

use anyhow::Result;

use skillmeter::config::Verbosity;
use skillmeter::{JitterRange, ScoreBreakdown};

use crate::ui::json::{emit, ScoreEvent};
use crate::ui::text::ColoredText;

use super::{GlobalArgs, Session};

pub fn cmd_score(args: &GlobalArgs, name: &str, base: i32, range: Option<i64>) -> Result<ExitCode> {
    let session = Session::load(args)?;
    let range = match range {
        Some(r) => JitterRange::from_signed(r)?,
        None => session.config.jitter_range()?,
    };

    let breakdown = ScoreBreakdown::compute(name, base, range);

    if session.ui.json {
        emit(&ScoreEvent {
            event: "score",
            name,
            base,
            range: range.get(),
            hash: breakdown.hash,
            jitter: breakdown.jitter,
            level: breakdown.level.get(),
            percent: breakdown.level.percent(),
            clamped: breakdown.was_clamped(),
        })?;
        return Ok(ExitCode::SUCCESS);
    }

    let percent = ColoredText::accent(breakdown.level.percent())
        .bold()
        .render(session.ui.color);
    println!("{percent}");

    let detailed =
        session.ui.verbose > 0 || session.config.output.verbosity >= Verbosity::Verbose;
    if detailed {
        let g = session.ui.glyphs();
        println!("  {} hash {}", g.arrow, breakdown.hash);
        println!("  {} jitter {:+} (range {})", g.arrow, breakdown.jitter, range);
        if breakdown.was_clamped() {
            println!("  {} clamped from {}", g.arrow, breakdown.unclamped);
        }
    }

    Ok(ExitCode::SUCCESS)
}
