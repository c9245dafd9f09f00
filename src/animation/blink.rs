use super::{AnimationError, AnimationParams, FromParams, PixelProgram};
use crate::color::{ColorName, Rgbw};
use crate::pattern::Pattern;
use crate::pixel::{Pixel, PixelError};

/// One synchronized blink: `duration` frames on, `duration` frames off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkAnimation {
    pub color: Rgbw,
    pub duration: usize,
}

impl Default for BlinkAnimation {
    fn default() -> Self {
        Self {
            color: ColorName::Green.rgbw(),
            duration: 10,
        }
    }
}

impl FromParams for BlinkAnimation {
    fn from_params(params: &AnimationParams) -> Result<Self, AnimationError> {
        let defaults = Self::default();
        Ok(Self {
            color: params.color("color", defaults.color)?,
            duration: params.frames("duration", defaults.duration)?,
        })
    }
}

impl PixelProgram for BlinkAnimation {
    const PARAMS: &'static [&'static str] = &["color", "duration"];

    fn enqueue(&self, _position: usize, _count: usize, pixel: &mut Pixel) -> Result<(), PixelError> {
        pixel.add_pattern(&Pattern::blink(self.color, self.duration, self.duration), 1)
    }
}
