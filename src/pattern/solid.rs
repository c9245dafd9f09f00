use super::PatternGenerator;
use crate::color::Rgbw;

/// Hold a single color for a number of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidPattern {
    pub color: Rgbw,
    pub duration_frames: usize,
}

impl SolidPattern {
    pub const fn new(color: Rgbw, duration_frames: usize) -> Self {
        Self {
            color,
            duration_frames,
        }
    }
}

impl PatternGenerator for SolidPattern {
    fn frames_per_loop(&self) -> usize {
        self.duration_frames
    }

    fn generate_loop(&self, from: Rgbw, steps: &mut Vec<Rgbw>) -> Rgbw {
        if self.duration_frames == 0 {
            return from;
        }
        steps.extend(core::iter::repeat_n(self.color, self.duration_frames));
        self.color
    }
}
