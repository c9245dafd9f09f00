use super::PatternGenerator;
use crate::color::{Rgbw, wheel};

/// One full turn of the color wheel spread over `duration_frames`.
///
/// Frame `i` shows wheel position `floor(i * 255 / duration_frames)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainbowPattern {
    pub duration_frames: usize,
}

impl Default for RainbowPattern {
    fn default() -> Self {
        Self::new(255)
    }
}

impl RainbowPattern {
    pub const fn new(duration_frames: usize) -> Self {
        Self { duration_frames }
    }
}

impl PatternGenerator for RainbowPattern {
    fn frames_per_loop(&self) -> usize {
        self.duration_frames
    }

    #[allow(clippy::cast_possible_truncation)]
    fn generate_loop(&self, from: Rgbw, steps: &mut Vec<Rgbw>) -> Rgbw {
        let frames = self.duration_frames;
        steps.extend((0..frames).map(|i| wheel(((i * 255) / frames) as u8)));
        steps.last().copied().unwrap_or(from)
    }
}
