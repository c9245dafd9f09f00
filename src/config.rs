//! Construction-time configuration.

use embassy_time::Duration;

/// Default target frame rate (20 FPS).
pub const DEFAULT_FPS: u64 = 20;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS);

/// Default pause between two polls of the command source.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Physical strip parameters.
///
/// These are platform values handed to whatever driver backs the
/// [`PixelSink`](crate::sink::PixelSink); the engine itself only reads
/// `led_count` and `brightness`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripConfig {
    /// Number of LED pixels on the strip.
    pub led_count: usize,
    /// GPIO pin connected to the data line.
    pub pin: u8,
    /// Signal frequency in hertz.
    pub frequency_hz: u32,
    /// DMA channel used to generate the signal.
    pub dma_channel: u8,
    /// Global brightness (0 = dark, 255 = full).
    pub brightness: u8,
    /// Invert the signal (NPN level shifter).
    pub invert: bool,
    /// PWM channel.
    pub channel: u8,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            led_count: 300,
            pin: 18,
            frequency_hz: 800_000,
            dma_channel: 10,
            brightness: 255,
            invert: false,
            channel: 0,
        }
    }
}

/// Timing of the two runtime activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Period of one tick.
    pub frame_duration: Duration,
    /// Sleep between command source polls.
    pub poll_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            frame_duration: DEFAULT_FRAME_DURATION,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}
