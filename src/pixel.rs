//! Playback of queued color steps for one LED.

use tracing::warn;

use crate::color::{BLACK, Rgbw};
use crate::pattern::Pattern;
use crate::sink::PixelSink;

/// Playback state of a [`Pixel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelState {
    /// Nothing queued, not playing.
    Idle,
    /// Steps queued, waiting for `start`.
    Loaded,
    /// Playing one queued step per tick.
    Active,
}

/// Errors returned by [`Pixel`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelError {
    /// Patterns cannot be queued while the pixel is playing.
    Active { index: usize },
}

impl core::fmt::Display for PixelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Active { index } => {
                write!(f, "pixel {} is active, cannot add pattern", index)
            }
        }
    }
}

impl std::error::Error for PixelError {}

/// One LED bound to a fixed strip index.
///
/// Patterns are appended to the step buffer while the pixel is not playing.
/// Once started, each [`advance`](Self::advance) consumes one step and writes
/// it to the sink. The tick after the last step returns the pixel to
/// [`PixelState::Idle`] with an empty buffer.
#[derive(Debug, Clone)]
pub struct Pixel {
    index: usize,
    current: Rgbw,
    steps: Vec<Rgbw>,
    cursor: usize,
    active: bool,
}

impl Pixel {
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            current: BLACK,
            steps: Vec::new(),
            cursor: 0,
            active: false,
        }
    }

    /// Strip index of this pixel.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Last color written to the strip.
    pub const fn current_color(&self) -> Rgbw {
        self.current
    }

    /// Steps in the buffer, played or not.
    pub fn queued_steps(&self) -> &[Rgbw] {
        &self.steps
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> PixelState {
        if self.active {
            PixelState::Active
        } else if self.steps.is_empty() {
            PixelState::Idle
        } else {
            PixelState::Loaded
        }
    }

    /// Append the steps of `pattern`, looped `num_loops` times.
    ///
    /// Generation starts from the color the pixel reaches once the already
    /// queued steps have played, so consecutive patterns form one timeline.
    /// Only a pixel with nothing queued starts from the color it shows. A
    /// fade queued behind a head color therefore fades from that head color,
    /// not from the color currently on the strip.
    pub fn add_pattern(&mut self, pattern: &Pattern, num_loops: usize) -> Result<(), PixelError> {
        if self.active {
            warn!(index = self.index, "cannot add pattern while active");
            return Err(PixelError::Active { index: self.index });
        }
        let from = self.steps.last().copied().unwrap_or(self.current);
        let steps = pattern.generate(from, num_loops);
        self.steps.extend(steps);
        Ok(())
    }

    /// Begin playback from the first queued step.
    pub fn start(&mut self) {
        self.active = true;
        self.cursor = 0;
    }

    /// Pause playback, keeping buffer and cursor.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Play one step.
    ///
    /// Inactive pixels are left alone. An active pixel with no steps left
    /// drops its buffer, goes idle and writes nothing.
    pub fn advance<S: PixelSink + ?Sized>(&mut self, sink: &mut S) -> PixelState {
        if !self.active {
            return self.state();
        }

        let Some(color) = self.steps.get(self.cursor).copied() else {
            self.active = false;
            self.steps.clear();
            self.cursor = 0;
            return PixelState::Idle;
        };

        self.current = color;
        self.cursor += 1;
        sink.set_pixel(self.index, color);
        PixelState::Active
    }

    /// Stop, drop queued steps and turn the LED off.
    pub fn reset<S: PixelSink + ?Sized>(&mut self, sink: &mut S) {
        self.active = false;
        self.steps.clear();
        self.cursor = 0;
        self.current = BLACK;
        sink.set_pixel(self.index, BLACK);
    }
}
