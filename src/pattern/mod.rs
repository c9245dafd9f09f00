//! Step sequence generators.
//!
//! A pattern turns a starting color into a finite list of colors, one per
//! frame. Patterns hold no state, so the same value can be generated again
//! for any pixel. All variants live in the [`Pattern`] enum.

mod blink;
mod fade;
mod rainbow;
mod solid;

pub use blink::BlinkPattern;
pub use fade::FadePattern;
pub use rainbow::RainbowPattern;
pub use solid::SolidPattern;

use crate::color::Rgbw;

pub trait PatternGenerator {
    /// Number of steps a single loop produces.
    fn frames_per_loop(&self) -> usize;

    /// Append one loop to `steps`, starting from `from`.
    ///
    /// Returns the color the loop ends on, which is the start of the next loop.
    fn generate_loop(&self, from: Rgbw, steps: &mut Vec<Rgbw>) -> Rgbw;

    /// Generate `num_loops` loops, starting from `current`.
    ///
    /// A loop count of zero is treated as one.
    fn generate(&self, current: Rgbw, num_loops: usize) -> Vec<Rgbw> {
        let num_loops = num_loops.max(1);
        let mut steps = Vec::with_capacity(self.frames_per_loop().checked_mul(num_loops).unwrap_or_default());
        let mut from = current;
        for _ in 0..num_loops {
            from = self.generate_loop(from, &mut steps);
        }
        steps
    }
}

/// Pattern slot - enum containing all pattern kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Hold one color.
    Solid(SolidPattern),
    /// Linear transition towards a color.
    Fade(FadePattern),
    /// Alternate between an on and an off color.
    Blink(BlinkPattern),
    /// One turn of the color wheel.
    Rainbow(RainbowPattern),
}

impl Pattern {
    pub const fn solid(color: Rgbw, duration_frames: usize) -> Self {
        Self::Solid(SolidPattern::new(color, duration_frames))
    }

    pub const fn fade(target: Rgbw, duration_frames: usize) -> Self {
        Self::Fade(FadePattern::new(target, duration_frames))
    }

    pub const fn blink(color: Rgbw, on_duration: usize, off_duration: usize) -> Self {
        Self::Blink(BlinkPattern::new(color, on_duration, off_duration))
    }

    pub const fn rainbow(duration_frames: usize) -> Self {
        Self::Rainbow(RainbowPattern::new(duration_frames))
    }

    /// Generate the full step list.
    pub fn generate(&self, current: Rgbw, num_loops: usize) -> Vec<Rgbw> {
        match self {
            Self::Solid(pattern) => pattern.generate(current, num_loops),
            Self::Fade(pattern) => pattern.generate(current, num_loops),
            Self::Blink(pattern) => pattern.generate(current, num_loops),
            Self::Rainbow(pattern) => pattern.generate(current, num_loops),
        }
    }

    /// Number of steps `generate` produces for `num_loops`.
    pub fn len(&self, num_loops: usize) -> usize {
        let per_loop = match self {
            Self::Solid(pattern) => pattern.frames_per_loop(),
            Self::Fade(pattern) => pattern.frames_per_loop(),
            Self::Blink(pattern) => pattern.frames_per_loop(),
            Self::Rainbow(pattern) => pattern.frames_per_loop(),
        };
        per_loop.saturating_mul(num_loops.max(1))
    }

    pub fn is_empty(&self) -> bool {
        self.len(1) == 0
    }
}
