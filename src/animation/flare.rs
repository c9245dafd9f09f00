use super::{AnimationError, AnimationParams, FromParams, PixelProgram, clamp_frames};
use crate::color::{ColorName, Rgbw};
use crate::pattern::Pattern;
use crate::pixel::{Pixel, PixelError};

/// Transition from `color1` to `color2` spreading out from the middle.
///
/// The pixel at distance `d` from `count / 2` holds `color1` for
/// `1 + d * speed_delay` frames, then fades to `color2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlareAnimation {
    pub color1: Rgbw,
    pub color2: Rgbw,
    pub speed_delay: usize,
    pub transition_duration: usize,
}

impl Default for FlareAnimation {
    fn default() -> Self {
        Self {
            color1: ColorName::Red.rgbw(),
            color2: ColorName::Yellow.rgbw(),
            speed_delay: 2,
            transition_duration: 10,
        }
    }
}

impl FromParams for FlareAnimation {
    fn from_params(params: &AnimationParams) -> Result<Self, AnimationError> {
        let defaults = Self::default();
        Ok(Self {
            color1: params.color("color1", defaults.color1)?,
            color2: params.color("color2", defaults.color2)?,
            speed_delay: params.frames("speed_delay", defaults.speed_delay)?,
            transition_duration: params
                .frames("transition_duration", defaults.transition_duration)?,
        })
    }
}

impl FlareAnimation {
    /// Frames the pixel at `position` holds `color1` after the first frame,
    /// at most [`MAX_FRAMES`](super::MAX_FRAMES).
    pub const fn delay(&self, position: usize, count: usize) -> usize {
        clamp_frames(position.abs_diff(count / 2).saturating_mul(self.speed_delay))
    }
}

impl PixelProgram for FlareAnimation {
    const PARAMS: &'static [&'static str] =
        &["color1", "color2", "speed_delay", "transition_duration"];

    fn enqueue(&self, position: usize, count: usize, pixel: &mut Pixel) -> Result<(), PixelError> {
        pixel.add_pattern(&Pattern::solid(self.color1, 1), 1)?;
        let delay = self.delay(position, count);
        if delay > 0 {
            pixel.add_pattern(&Pattern::solid(self.color1, delay), 1)?;
        }
        pixel.add_pattern(&Pattern::fade(self.color2, self.transition_duration), 1)
    }
}
