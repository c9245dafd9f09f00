//! Hardware boundary.
//!
//! The engine only ever sets single pixels and flushes whole frames, so any
//! strip driver, simulator or test double can stand behind [`PixelSink`].

use smart_leds::SmartLedsWrite;
use tracing::warn;

use crate::color::{BLACK, Rgbw};
use crate::config::StripConfig;
use crate::math8::scale_color;

/// Abstract LED strip.
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait PixelSink {
    /// Stage a color for the pixel at `index`. Out of range indices are ignored.
    fn set_pixel(&mut self, index: usize, color: Rgbw);

    /// Push every staged pixel to the strip in one batch.
    fn flush(&mut self);

    /// Number of pixels the strip holds.
    fn pixel_count(&self) -> usize;
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink {
    pixel_count: usize,
}

impl NullSink {
    pub const fn new(pixel_count: usize) -> Self {
        Self { pixel_count }
    }
}

impl PixelSink for NullSink {
    fn set_pixel(&mut self, _index: usize, _color: Rgbw) {}

    fn flush(&mut self) {}

    fn pixel_count(&self) -> usize {
        self.pixel_count
    }
}

/// In-memory strip that remembers staged and flushed frames.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    staged: Vec<Rgbw>,
    shown: Vec<Rgbw>,
    writes: usize,
    flushes: usize,
}

impl RecordingSink {
    pub fn new(pixel_count: usize) -> Self {
        Self {
            staged: vec![BLACK; pixel_count],
            shown: vec![BLACK; pixel_count],
            writes: 0,
            flushes: 0,
        }
    }

    /// Pixel colors as of the last flush.
    pub fn shown(&self) -> &[Rgbw] {
        &self.shown
    }

    /// Pixel colors including writes not yet flushed.
    pub fn staged(&self) -> &[Rgbw] {
        &self.staged
    }

    /// Total accepted `set_pixel` calls.
    pub const fn writes(&self) -> usize {
        self.writes
    }

    pub const fn flushes(&self) -> usize {
        self.flushes
    }
}

impl PixelSink for RecordingSink {
    fn set_pixel(&mut self, index: usize, color: Rgbw) {
        if let Some(pixel) = self.staged.get_mut(index) {
            *pixel = color;
            self.writes += 1;
        }
    }

    fn flush(&mut self) {
        self.shown.copy_from_slice(&self.staged);
        self.flushes += 1;
    }

    fn pixel_count(&self) -> usize {
        self.staged.len()
    }
}

/// Adapter from a `smart-leds` driver to [`PixelSink`].
///
/// Keeps a frame buffer, applies the configured brightness and writes the
/// whole frame to the driver on every flush.
pub struct SmartLedsSink<W> {
    driver: W,
    frame: Vec<Rgbw>,
    brightness: u8,
}

impl<W> SmartLedsSink<W>
where
    W: SmartLedsWrite<Color = Rgbw>,
    W::Error: core::fmt::Debug,
{
    pub fn new(driver: W, config: &StripConfig) -> Self {
        Self {
            driver,
            frame: vec![BLACK; config.led_count],
            brightness: config.brightness,
        }
    }

    /// Release the wrapped driver.
    pub fn into_inner(self) -> W {
        self.driver
    }
}

impl<W> PixelSink for SmartLedsSink<W>
where
    W: SmartLedsWrite<Color = Rgbw>,
    W::Error: core::fmt::Debug,
{
    fn set_pixel(&mut self, index: usize, color: Rgbw) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = color;
        }
    }

    fn flush(&mut self) {
        let brightness = self.brightness;
        let frame = self.frame.iter().map(|color| scale_color(*color, brightness));
        if let Err(error) = self.driver.write(frame) {
            warn!(?error, "LED driver rejected frame");
        }
    }

    fn pixel_count(&self) -> usize {
        self.frame.len()
    }
}
