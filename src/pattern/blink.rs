use super::PatternGenerator;
use crate::color::{BLACK, Rgbw};

/// `on_duration` frames of `color`, then `off_duration` frames of `off_color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkPattern {
    pub color: Rgbw,
    pub off_color: Rgbw,
    pub on_duration: usize,
    pub off_duration: usize,
}

impl BlinkPattern {
    /// Blink against black.
    pub const fn new(color: Rgbw, on_duration: usize, off_duration: usize) -> Self {
        Self {
            color,
            off_color: BLACK,
            on_duration,
            off_duration,
        }
    }

    #[must_use]
    pub const fn with_off_color(mut self, off_color: Rgbw) -> Self {
        self.off_color = off_color;
        self
    }
}

impl PatternGenerator for BlinkPattern {
    fn frames_per_loop(&self) -> usize {
        self.on_duration.saturating_add(self.off_duration)
    }

    fn generate_loop(&self, from: Rgbw, steps: &mut Vec<Rgbw>) -> Rgbw {
        steps.extend(core::iter::repeat_n(self.color, self.on_duration));
        steps.extend(core::iter::repeat_n(self.off_color, self.off_duration));
        steps.last().copied().unwrap_or(from)
    }
}
