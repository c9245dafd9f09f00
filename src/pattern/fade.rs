use super::PatternGenerator;
use crate::color::{Rgbw, interpolate_color};

/// Linear fade from the current color to `target`.
///
/// Steps are interpolated at `1..=duration_frames`, so the starting color
/// itself is never emitted and the last step is exactly `target`. Later
/// loops start from `target` and therefore hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadePattern {
    pub target: Rgbw,
    pub duration_frames: usize,
}

impl FadePattern {
    pub const fn new(target: Rgbw, duration_frames: usize) -> Self {
        Self {
            target,
            duration_frames,
        }
    }
}

impl PatternGenerator for FadePattern {
    fn frames_per_loop(&self) -> usize {
        self.duration_frames
    }

    fn generate_loop(&self, from: Rgbw, steps: &mut Vec<Rgbw>) -> Rgbw {
        if self.duration_frames == 0 {
            return from;
        }
        let total = i32::try_from(self.duration_frames).unwrap_or(i32::MAX);
        steps.extend((1..=total).map(|step| interpolate_color(from, self.target, step, total)));
        self.target
    }
}
