use super::{AnimationError, AnimationParams, FromParams, PixelProgram};
use crate::color::{ColorName, Rgbw};
use crate::pattern::Pattern;
use crate::pixel::{Pixel, PixelError};

/// Paint the segment a single color and hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidAnimation {
    pub color: Rgbw,
}

impl Default for SolidAnimation {
    fn default() -> Self {
        Self {
            color: ColorName::White.rgbw(),
        }
    }
}

impl FromParams for SolidAnimation {
    fn from_params(params: &AnimationParams) -> Result<Self, AnimationError> {
        Ok(Self {
            color: params.color("color", Self::default().color)?,
        })
    }
}

impl PixelProgram for SolidAnimation {
    const PARAMS: &'static [&'static str] = &["color"];

    fn enqueue(&self, _position: usize, _count: usize, pixel: &mut Pixel) -> Result<(), PixelError> {
        pixel.add_pattern(&Pattern::solid(self.color, 1), 1)
    }
}
