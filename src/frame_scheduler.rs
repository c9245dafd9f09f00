//! Frame scheduling and timing utilities.
//!
//! Provides frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping between frames.

use embassy_time::{Duration, Instant};

use crate::command_processor::CommandProcessor;
use crate::config::DEFAULT_FRAME_DURATION;
use crate::controller::Controller;
use crate::sink::PixelSink;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
    /// Commands handled at the start of this frame.
    pub commands: usize,
}

/// Fixed-cadence driver of a [`Controller`].
///
/// Each tick first hands pending commands to the controller, then advances
/// every segment and flushes the strip once. Falling more than two frames
/// behind skips the backlog instead of catching up.
///
/// # Usage.
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(controller, processor);
///
/// while scheduler.controller().is_running() {
///     let result = scheduler.tick(Instant::from_millis(elapsed_ms()));
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, S: PixelSink, const SIZE: usize> {
    controller: Controller<S>,
    processor: CommandProcessor<'a, SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, S: PixelSink, const SIZE: usize> FrameScheduler<'a, S, SIZE> {
    /// Create a scheduler running at `DEFAULT_FRAME_DURATION` (20 FPS).
    pub fn new(controller: Controller<S>, processor: CommandProcessor<'a, SIZE>) -> Self {
        Self::with_frame_duration(controller, processor, DEFAULT_FRAME_DURATION)
    }

    pub fn with_frame_duration(
        controller: Controller<S>,
        processor: CommandProcessor<'a, SIZE>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            controller,
            processor,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// A frame whose commands stop the controller does not advance any
    /// segment.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = Duration::from_millis(self.frame_duration.as_millis() * 2);
        if now.as_millis() > self.next_frame.as_millis() + max_drift.as_millis() {
            self.next_frame = now;
        }

        let commands = self.processor.process_pending(&mut self.controller);
        if self.controller.is_running() {
            self.controller.tick();
        }

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            commands,
        }
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub const fn controller(&self) -> &Controller<S> {
        &self.controller
    }

    /// Stop scheduling and hand the controller back.
    pub fn into_controller(self) -> Controller<S> {
        self.controller
    }
}
