//! Output of `skillmeter check`.

use skillmeter::{CatalogValidation, ConfigSource, ConfigWarning};

use crate::ui::text::ColoredText;
use crate::ui::theme::Glyphs;

pub struct CheckView<'a> {
    source: &'a ConfigSource,
    validation: &'a CatalogValidation,
    config_warnings: &'a [ConfigWarning],
}

impl<'a> CheckView<'a> {
    pub fn new(
        source: &'a ConfigSource,
        validation: &'a CatalogValidation,
        config_warnings: &'a [ConfigWarning],
    ) -> Self {
        Self {
            source,
            validation,
            config_warnings,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let g = Glyphs::new(supports_unicode);
        let mut out = String::new();

        out.push_str(&format!("Config: {}\n\n", self.source));

        for w in self.config_warnings {
            let location = match w.line {
                Some(line) => format!("{}:{}", w.file.display(), line),
                None => w.file.display().to_string(),
            };
            let msg = format!("{} unknown key '{}' in {}", g.warning, w.key, location);
            out.push_str(&ColoredText::warning(msg).render(supports_color));
            out.push('\n');
            if let Some(s) = &w.suggestion {
                out.push_str(&format!("    {} did you mean '{}'?\n", g.arrow, s));
            }
        }

        for err in &self.validation.errors {
            let msg = format!("{} {}", g.error, err);
            out.push_str(&ColoredText::error(msg).render(supports_color));
            out.push('\n');
        }

        for warning in &self.validation.warnings {
            let msg = format!("{} {}", g.warning, warning);
            out.push_str(&ColoredText::warning(msg).render(supports_color));
            out.push('\n');
        }

        let valid = self.validation.records.len();
        let msg = format!("{} {} skill(s) valid", g.success, valid);
        out.push_str(&ColoredText::success(msg).render(supports_color));
        out.push('\n');

        out.push('\n');
        out.push_str(&format!(
            "Summary: {} valid, {} errors, {} warnings\n",
            valid,
            self.validation.errors.len(),
            self.validation.warnings.len() + self.config_warnings.len()
        ));
        out
    }
}
