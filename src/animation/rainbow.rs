use super::{AnimationError, AnimationParams, FromParams, PixelProgram};
use crate::pattern::{Pattern, RainbowPattern};
use crate::pixel::{Pixel, PixelError};

/// Every pixel runs the same 255 frame color wheel cycle.
///
/// There is no phase offset between pixels, so the whole segment changes
/// color together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainbowAnimation {
    /// Accepted for compatibility with stored commands; the cycle length is fixed.
    pub speed: usize,
}

impl Default for RainbowAnimation {
    fn default() -> Self {
        Self { speed: 10 }
    }
}

impl FromParams for RainbowAnimation {
    fn from_params(params: &AnimationParams) -> Result<Self, AnimationError> {
        Ok(Self {
            speed: params.frames("speed", Self::default().speed)?,
        })
    }
}

impl PixelProgram for RainbowAnimation {
    const PARAMS: &'static [&'static str] = &["speed"];

    fn enqueue(&self, _position: usize, _count: usize, pixel: &mut Pixel) -> Result<(), PixelError> {
        pixel.add_pattern(&Pattern::Rainbow(RainbowPattern::default()), 1)
    }
}
