//! Reveal schedule for the Skills section
//!
//! Explicit per-element animation settings: what triggers the reveal,
//! how long it runs, and how long it waits. Timings are whole
//! milliseconds so staggered delays stay exact.

use std::time::Duration;

use serde::Serialize;

/// Condition that starts a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevealTrigger {
    /// Section enters the viewport; `margin_px` shrinks (negative) or
    /// grows the viewport bounds.
    InView { once: bool, margin_px: i32 },
    /// Start immediately.
    Immediate,
}

/// Side a card slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideFrom {
    Left,
    Right,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    #[default]
    Linear,
    EaseOut,
}

/// Animation settings for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealConfig {
    pub trigger: RevealTrigger,
    pub duration_ms: u32,
    pub delay_ms: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide: Option<(SlideFrom, u16)>,
    /// Starting scale in percent; the element grows to 100%.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_from: Option<u8>,
    pub ease: Ease,
}

impl RevealConfig {
    pub fn new(trigger: RevealTrigger, duration_ms: u32, delay_ms: u32) -> Self {
        Self {
            trigger,
            duration_ms,
            delay_ms,
            slide: None,
            scale_from: None,
            ease: Ease::default(),
        }
    }

    pub fn slide(mut self, from: SlideFrom, offset_px: u16) -> Self {
        self.slide = Some((from, offset_px));
        self
    }

    pub fn scale_from(mut self, percent: u8) -> Self {
        self.scale_from = Some(percent);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.delay_ms))
    }

    /// Time from trigger until the element is fully shown.
    pub fn finishes_at(&self) -> Duration {
        self.delay() + self.duration()
    }
}

/// Timings for every element of the Skills section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSchedule {
    trigger: RevealTrigger,
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self {
            trigger: RevealTrigger::InView {
                once: true,
                margin_px: -100,
            },
        }
    }
}

const SLIDE_OFFSET_PX: u16 = 30;
const CHIP_SCALE_PERCENT: u8 = 80;

impl RevealSchedule {
    pub fn new(trigger: RevealTrigger) -> Self {
        Self { trigger }
    }

    pub fn trigger(&self) -> RevealTrigger {
        self.trigger
    }

    pub fn header(&self) -> RevealConfig {
        RevealConfig::new(self.trigger, 600, 0).slide(SlideFrom::Below, SLIDE_OFFSET_PX)
    }

    /// Skill card `index`; even cards enter from the left, odd from the right.
    pub fn card(&self, index: usize) -> RevealConfig {
        let from = if index % 2 == 0 {
            SlideFrom::Left
        } else {
            SlideFrom::Right
        };
        RevealConfig::new(self.trigger, 500, stagger(0, 100, index)).slide(from, SLIDE_OFFSET_PX)
    }

    /// Progress bar fill for skill card `index`.
    pub fn bar(&self, index: usize) -> RevealConfig {
        RevealConfig::new(self.trigger, 1000, stagger(300, 100, index)).ease(Ease::EaseOut)
    }

    pub fn technologies(&self) -> RevealConfig {
        RevealConfig::new(self.trigger, 600, 500).slide(SlideFrom::Below, SLIDE_OFFSET_PX)
    }

    /// Technology chip `index`.
    pub fn chip(&self, index: usize) -> RevealConfig {
        RevealConfig::new(self.trigger, 300, stagger(600, 50, index)).scale_from(CHIP_SCALE_PERCENT)
    }
}

fn stagger(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(step_ms.saturating_mul(index))
}
