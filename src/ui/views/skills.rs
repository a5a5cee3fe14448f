//! Skills panel: grouped skill bars plus the technology list.

use unicode_width::UnicodeWidthStr;

use skillmeter::{categories_in_order, ComputedSkill, RevealConfig, RevealSchedule};

use crate::ui::text::ColoredText;
use crate::ui::theme::Glyphs;

pub struct SkillsPanel<'a> {
    skills: &'a [ComputedSkill],
    technologies: &'a [String],
    bar_width: usize,
    show_bars: bool,
    schedule: Option<RevealSchedule>,
}

impl<'a> SkillsPanel<'a> {
    pub fn new(skills: &'a [ComputedSkill], technologies: &'a [String]) -> Self {
        Self {
            skills,
            technologies,
            bar_width: 24,
            show_bars: true,
            schedule: None,
        }
    }

    pub fn bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    pub fn show_bars(mut self, show: bool) -> Self {
        self.show_bars = show;
        self
    }

    pub fn schedule(mut self, schedule: Option<RevealSchedule>) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let glyphs = Glyphs::new(supports_unicode);
        let mut out = String::new();

        out.push_str(&ColoredText::plain("Tools & Technologies").bold().render(supports_color));
        out.push('\n');

        if self.skills.is_empty() {
            out.push('\n');
            out.push_str(&ColoredText::dim("No skills configured.").render(supports_color));
            out.push('\n');
        }

        let name_width = self
            .skills
            .iter()
            .map(|s| s.name().width())
            .max()
            .unwrap_or(0);

        for category in categories_in_order(self.skills.iter().map(ComputedSkill::category)) {
            out.push('\n');
            let heading = if category.is_empty() { "(uncategorized)" } else { category };
            out.push_str(&ColoredText::dim(heading).render(supports_color));
            out.push('\n');

            for skill in self.skills.iter().filter(|s| s.category() == category) {
                out.push_str(&self.render_row(skill, name_width, &glyphs, supports_color));
                out.push('\n');
            }
        }

        if !self.technologies.is_empty() {
            out.push('\n');
            out.push_str(&ColoredText::plain("Also Experienced In").bold().render(supports_color));
            out.push('\n');
            let sep = format!(" {} ", glyphs.bullet);
            out.push_str("  ");
            out.push_str(&self.technologies.join(&sep));
            out.push('\n');
        }

        if let Some(schedule) = self.schedule {
            out.push_str(&self.render_schedule(schedule));
        }

        out
    }

    fn render_row(
        &self,
        skill: &ComputedSkill,
        name_width: usize,
        glyphs: &Glyphs,
        supports_color: bool,
    ) -> String {
        let name = skill.name();
        let pad = " ".repeat(name_width.saturating_sub(name.width()));
        let percent = format!("{:>4}", skill.level().percent());
        let percent = ColoredText::accent(percent).bold().render(supports_color);

        if !self.show_bars || self.bar_width == 0 {
            return format!("  {name}{pad}  {percent}");
        }

        let filled = skill.level().fill(self.bar_width);
        let bar = format!(
            "{}{}",
            glyphs.bar_filled.repeat(filled),
            glyphs.bar_empty.repeat(self.bar_width - filled)
        );
        format!("  {name}{pad}  {bar}  {percent}")
    }

    fn render_schedule(&self, schedule: RevealSchedule) -> String {
        let mut out = String::new();
        out.push('\n');
        out.push_str("Reveal schedule\n");
        out.push_str(&format!("  header      {}\n", describe(&schedule.header())));
        for (i, skill) in self.skills.iter().enumerate() {
            out.push_str(&format!(
                "  card #{i:<4} {}  ({})\n",
                describe(&schedule.card(i)),
                skill.name()
            ));
            out.push_str(&format!("  bar  #{i:<4} {}\n", describe(&schedule.bar(i))));
        }
        if !self.technologies.is_empty() {
            out.push_str(&format!("  tech cloud  {}\n", describe(&schedule.technologies())));
            for i in 0..self.technologies.len() {
                out.push_str(&format!("  chip #{i:<4} {}\n", describe(&schedule.chip(i))));
            }
        }
        out
    }
}

fn describe(reveal: &RevealConfig) -> String {
    let timing = format!("+{}ms for {}ms", reveal.delay_ms, reveal.duration_ms);
    match reveal.scale_from {
        Some(pct) => format!("{timing}, scale {pct}%"),
        None => timing,
    }
}
