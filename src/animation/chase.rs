use super::{AnimationError, AnimationParams, Direction, FromParams, PixelProgram, clamp_frames};
use crate::color::{BLACK, ColorName, Rgbw};
use crate::pattern::Pattern;
use crate::pixel::{Pixel, PixelError};

/// Frames the head takes to light up.
const HEAD_FRAMES: usize = 2;

/// A lit head running along the segment, leaving a fading tail.
///
/// Pixel `i` waits `i * speed_delay` frames (counted from the far end when
/// running backward), fades in over two frames, then fades out over
/// `tail_length * speed_delay` frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChaseAnimation {
    pub color: Rgbw,
    pub direction: Direction,
    pub tail_length: usize,
    /// Frames between neighbouring pixels.
    pub speed_delay: usize,
}

impl Default for ChaseAnimation {
    fn default() -> Self {
        Self {
            color: ColorName::Red.rgbw(),
            direction: Direction::Forward,
            tail_length: 5,
            speed_delay: 2,
        }
    }
}

impl FromParams for ChaseAnimation {
    fn from_params(params: &AnimationParams) -> Result<Self, AnimationError> {
        let defaults = Self::default();
        Ok(Self {
            color: params.color("color", defaults.color)?,
            direction: params.direction("direction", defaults.direction)?,
            tail_length: params.frames("tail_length", defaults.tail_length)?,
            speed_delay: params.frames("speed_delay", defaults.speed_delay)?,
        })
    }
}

impl ChaseAnimation {
    /// Frames the pixel at `position` waits before its head, at most
    /// [`MAX_FRAMES`](super::MAX_FRAMES).
    pub const fn delay(&self, position: usize, count: usize) -> usize {
        clamp_frames(self.direction.rank(position, count).saturating_mul(self.speed_delay))
    }

    /// Frames the tail takes to fade out, at most [`MAX_FRAMES`](super::MAX_FRAMES).
    pub const fn tail_frames(&self) -> usize {
        clamp_frames(self.tail_length.saturating_mul(self.speed_delay))
    }
}

impl PixelProgram for ChaseAnimation {
    const PARAMS: &'static [&'static str] = &["color", "direction", "tail_length", "speed_delay"];

    fn enqueue(&self, position: usize, count: usize, pixel: &mut Pixel) -> Result<(), PixelError> {
        let delay = self.delay(position, count);
        if delay > 0 {
            pixel.add_pattern(&Pattern::solid(BLACK, delay), 1)?;
        }
        pixel.add_pattern(&Pattern::fade(self.color, HEAD_FRAMES), 1)?;
        pixel.add_pattern(&Pattern::fade(BLACK, self.tail_frames()), 1)
    }
}
