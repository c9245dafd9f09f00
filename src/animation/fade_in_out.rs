use super::{AnimationError, AnimationParams, FromParams, PixelProgram};
use crate::color::{BLACK, ColorName, Rgbw};
use crate::pattern::Pattern;
use crate::pixel::{Pixel, PixelError};

/// Whole segment fades up to a color and back down, in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeInOutAnimation {
    pub color: Rgbw,
    /// Frames for each half of the fade.
    pub duration: usize,
}

impl Default for FadeInOutAnimation {
    fn default() -> Self {
        Self {
            color: ColorName::Blue.rgbw(),
            duration: 30,
        }
    }
}

impl FromParams for FadeInOutAnimation {
    fn from_params(params: &AnimationParams) -> Result<Self, AnimationError> {
        let defaults = Self::default();
        Ok(Self {
            color: params.color("color", defaults.color)?,
            duration: params.frames("duration", defaults.duration)?,
        })
    }
}

impl PixelProgram for FadeInOutAnimation {
    const PARAMS: &'static [&'static str] = &["color", "duration"];

    fn enqueue(&self, _position: usize, _count: usize, pixel: &mut Pixel) -> Result<(), PixelError> {
        pixel.add_pattern(&Pattern::fade(self.color, self.duration), 1)?;
        pixel.add_pattern(&Pattern::fade(BLACK, self.duration), 1)
    }
}
