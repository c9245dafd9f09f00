//! Named group of pixels covering a contiguous strip range.

use crate::bounds::LedRange;
use crate::geometry::CalculatedSegment;
use crate::pixel::{Pixel, PixelState};
use crate::sink::PixelSink;

/// Contiguous run of pixels on one side of the table.
///
/// Pixels are created once, in strip order, and never reallocated.
#[derive(Debug, Clone)]
pub struct Segment {
    name: String,
    side: String,
    range: LedRange,
    pixels: Vec<Pixel>,
}

impl Segment {
    pub fn new(name: impl Into<String>, side: impl Into<String>, range: LedRange) -> Self {
        Self {
            name: name.into(),
            side: side.into(),
            range,
            pixels: range.indices().map(Pixel::new).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Table side label.
    pub fn side(&self) -> &str {
        &self.side
    }

    pub const fn range(&self) -> LedRange {
        self.range
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range.contains(index)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Number of pixels currently playing.
    pub fn active_pixels(&self) -> usize {
        self.pixels.iter().filter(|pixel| pixel.is_active()).count()
    }

    pub fn is_idle(&self) -> bool {
        self.pixels
            .iter()
            .all(|pixel| pixel.state() == PixelState::Idle)
    }

    /// Advance every pixel by one frame.
    pub fn animate<S: PixelSink + ?Sized>(&mut self, sink: &mut S) {
        for pixel in &mut self.pixels {
            pixel.advance(sink);
        }
    }

    /// Reset every pixel and turn the segment off.
    pub fn clear<S: PixelSink + ?Sized>(&mut self, sink: &mut S) {
        for pixel in &mut self.pixels {
            pixel.reset(sink);
        }
    }
}

impl From<&CalculatedSegment> for Segment {
    fn from(segment: &CalculatedSegment) -> Self {
        Self::new(segment.name.clone(), segment.side_name.clone(), segment.range())
    }
}
