use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use tracing::debug;

use skillmeter::{LevelCache, RevealSchedule};

use crate::ui::json::{write_event, CompleteEvent, SkillEvent, StartEvent, TechnologyEvent};
use crate::ui::views::skills::SkillsPanel;

use super::{GlobalArgs, Session};

pub fn cmd_render(args: &GlobalArgs, no_bars: bool, schedule: bool) -> Result<ExitCode> {
    let session = Session::load(args)?;
    let catalog = session.config.catalog()?;
    let bar_width = session.config.bar_width()?;

    // One cache per render pass; dropped when this function returns.
    let mut cache = LevelCache::new(session.config.computer()?);
    let computed: Vec<_> = catalog.skills().iter().map(|r| cache.compute(r)).collect();
    debug!(skills = computed.len(), cache_hits = cache.hits(), "render pass computed");

    let reveal = schedule.then(RevealSchedule::default);

    if session.ui.json {
        let mut out = std::io::stdout().lock();
        write_event(&mut out, &StartEvent::new("render"))?;
        for (i, skill) in computed.iter().enumerate() {
            let mut event = SkillEvent::new(i, skill);
            if let Some(s) = reveal {
                event = event.with_reveal(s.card(i), s.bar(i));
            }
            write_event(&mut out, &event)?;
        }
        for (i, tech) in catalog.technologies().iter().enumerate() {
            let mut event = TechnologyEvent::new(i, tech);
            if let Some(s) = reveal {
                event = event.with_reveal(s.chip(i));
            }
            write_event(&mut out, &event)?;
        }
        write_event(
            &mut out,
            &CompleteEvent::success("render").with_count(computed.len()),
        )?;
        out.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let panel = SkillsPanel::new(&computed, catalog.technologies())
        .bar_width(bar_width)
        .show_bars(!no_bars)
        .schedule(reveal);
    print!("{}", panel.render(session.ui.color, session.ui.unicode));

    Ok(ExitCode::SUCCESS)
}
