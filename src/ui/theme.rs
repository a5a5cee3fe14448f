use crossterm::style::Color;

/// Design tokens for the skillmeter terminal UI.
///
/// All colors, icons and bar glyphs are sourced from this module.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #FACC15, the site's primary accent
    pub const ACCENT: Color = Color::Yellow;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const BULLET: &str = "•";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
    pub const BULLET: &str = "*";
}

pub mod bars {
    pub const FILLED: &str = "█";
    pub const EMPTY: &str = "░";
}

pub mod bars_ascii {
    pub const FILLED: &str = "#";
    pub const EMPTY: &str = ".";
}

/// Unicode or ASCII glyph set, chosen once per render.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub arrow: &'static str,
    pub bullet: &'static str,
    pub bar_filled: &'static str,
    pub bar_empty: &'static str,
}

impl Glyphs {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                success: icons::SUCCESS,
                error: icons::ERROR,
                warning: icons::WARNING,
                arrow: icons::ARROW,
                bullet: icons::BULLET,
                bar_filled: bars::FILLED,
                bar_empty: bars::EMPTY,
            }
        } else {
            Self {
                success: icons_ascii::SUCCESS,
                error: icons_ascii::ERROR,
                warning: icons_ascii::WARNING,
                arrow: icons_ascii::ARROW,
                bullet: icons_ascii::BULLET,
                bar_filled: bars_ascii::FILLED,
                bar_empty: bars_ascii::EMPTY,
            }
        }
    }
}
