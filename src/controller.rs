//! Segment map, animation queues and command dispatch.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::animation::{Animation, AnimationError, AnimationParams};
use crate::bounds::LedRange;
use crate::color::Rgbw;
use crate::command::{Action, CommandRecord, Target};
use crate::geometry::CalculatedSegment;
use crate::pattern::Pattern;
use crate::queue::AnimationQueue;
use crate::segment::Segment;
use crate::sink::PixelSink;

/// Owner of every segment, their animation queues and the strip.
///
/// All mutation goes through `&mut self`: commands through
/// [`handle_command`](Self::handle_command), playback through
/// [`tick`](Self::tick).
pub struct Controller<S: PixelSink> {
    sink: S,
    segments: BTreeMap<String, Segment>,
    queues: BTreeMap<String, AnimationQueue>,
    running: bool,
}

impl<S: PixelSink> Controller<S> {
    /// Controller without segments.
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
            segments: BTreeMap::new(),
            queues: BTreeMap::new(),
            running: true,
        }
    }

    /// Controller with one segment per calculated range.
    pub fn from_segments(sink: S, segments: &[CalculatedSegment]) -> Self {
        let mut controller = Self::new(sink);
        for segment in segments {
            controller.add_segment(Segment::from(segment));
        }
        info!(
            segments = controller.segments.len(),
            pixels = controller.sink.pixel_count(),
            "controller ready"
        );
        controller
    }

    /// Register a segment with an empty queue.
    ///
    /// Returns `false` and keeps the existing segment if the name is taken.
    pub fn add_segment(&mut self, segment: Segment) -> bool {
        let name = segment.name().to_owned();
        if self.segments.contains_key(&name) {
            warn!(segment = %name, "duplicate segment ignored");
            return false;
        }
        let range = segment.range();
        if range.end >= self.sink.pixel_count() {
            warn!(
                segment = %name,
                end = range.end,
                pixels = self.sink.pixel_count(),
                "segment extends past the strip"
            );
        }
        self.queues.insert(name.clone(), AnimationQueue::new());
        self.segments.insert(name, segment);
        true
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Lower the running flag.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn segment_names(&self) -> impl Iterator<Item = &str> {
        self.segments.keys().map(String::as_str)
    }

    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.segments.get(name)
    }

    /// Animations waiting in the queue of `name`.
    pub fn queue_len(&self, name: &str) -> Option<usize> {
        self.queues.get(name).map(AnimationQueue::len)
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Dispatch one command.
    ///
    /// Unknown targets, animations and colors are logged and leave every
    /// segment and queue unchanged.
    pub fn handle_command(&mut self, command: &CommandRecord) {
        debug!(action = command.action.as_str(), "handling command");
        match command.action {
            Action::Quit => {
                info!("quit requested");
                self.stop();
            }
            Action::TriggerAll => self.trigger_all(),
            Action::Clear => {
                if let Some(target) = self.target_of(command) {
                    self.clear(target);
                }
            }
            Action::Trigger => match self.target_of(command) {
                Some(Target::All) => self.trigger_all(),
                Some(Target::Segment(name)) => self.trigger(name),
                None => {}
            },
            Action::Queue | Action::Immediate => {
                let Some(target) = self.target_of(command) else {
                    return;
                };
                let Some(name) = command.animation.as_deref() else {
                    warn!(action = command.action.as_str(), "command without animation dropped");
                    return;
                };
                let animation = match Animation::from_name(name, &command.params) {
                    Ok(animation) => animation,
                    Err(error) => {
                        warn!(%error, "command dropped");
                        return;
                    }
                };
                if command.action == Action::Queue {
                    self.enqueue(target, animation);
                } else {
                    self.apply(target, &animation);
                }
            }
        }
    }

    /// Build an animation by name and apply it to `target` at once.
    ///
    /// Returns how many pixels accepted it. Unknown targets accept nothing.
    pub fn apply_animation(
        &mut self,
        target: &str,
        name: &str,
        params: &AnimationParams,
    ) -> Result<usize, AnimationError> {
        let animation = Animation::from_name(name, params)?;
        Ok(self.apply(&Target::parse(target), &animation))
    }

    /// Paint every segment pixel with an index in `start..=end`.
    ///
    /// The color shows on the next tick and then holds. Playing pixels keep
    /// their program. Returns how many pixels were painted.
    pub fn set_color_range(&mut self, start: usize, end: usize, color: Rgbw) -> usize {
        let Some(range) = LedRange::new(start, end) else {
            warn!(start, end, "empty color range");
            return 0;
        };
        let pattern = Pattern::solid(color, 1);
        let mut painted = 0;
        for segment in self.segments.values_mut() {
            for pixel in segment.pixels_mut() {
                if range.contains(pixel.index()) && pixel.add_pattern(&pattern, 1).is_ok() {
                    pixel.start();
                    painted += 1;
                }
            }
        }
        painted
    }

    /// Turn off `target` (a segment name or `ALL`).
    pub fn clear_segment(&mut self, target: &str) {
        self.clear(&Target::parse(target));
    }

    /// Advance every segment one frame and show the result.
    pub fn tick(&mut self) {
        for segment in self.segments.values_mut() {
            segment.animate(&mut self.sink);
        }
        self.sink.flush();
    }

    /// Turn every pixel off and show it.
    pub fn shutdown(&mut self) {
        self.clear(&Target::All);
        self.sink.flush();
        info!("all segments cleared");
    }

    fn target_of<'c>(&self, command: &'c CommandRecord) -> Option<&'c Target> {
        match &command.target {
            None => {
                warn!(action = command.action.as_str(), "command without target dropped");
                None
            }
            Some(Target::Segment(name)) if !self.segments.contains_key(name) => {
                warn!(segment = %name, "unknown target");
                None
            }
            Some(target) => Some(target),
        }
    }

    fn clear(&mut self, target: &Target) {
        match target {
            Target::All => {
                for segment in self.segments.values_mut() {
                    segment.clear(&mut self.sink);
                }
            }
            Target::Segment(name) => match self.segments.get_mut(name) {
                Some(segment) => segment.clear(&mut self.sink),
                None => warn!(segment = %name, "unknown target"),
            },
        }
    }

    fn enqueue(&mut self, target: &Target, animation: Animation) {
        for (name, queue) in &mut self.queues {
            if matches!(target, Target::Segment(wanted) if wanted != name) {
                continue;
            }
            match queue.push(animation) {
                Ok(()) => debug!(segment = %name, animation = animation.name(), "animation queued"),
                Err(rejected) => warn!(
                    segment = %name,
                    animation = rejected.name(),
                    "animation queue full, animation dropped"
                ),
            }
        }
    }

    fn apply(&mut self, target: &Target, animation: &Animation) -> usize {
        match target {
            Target::All => self
                .segments
                .values_mut()
                .map(|segment| animation.apply(segment.pixels_mut()))
                .sum(),
            Target::Segment(name) => match self.segments.get_mut(name) {
                Some(segment) => animation.apply(segment.pixels_mut()),
                None => {
                    warn!(segment = %name, "unknown target");
                    0
                }
            },
        }
    }

    fn trigger(&mut self, name: &str) {
        let Some(animation) = self.queues.get_mut(name).and_then(AnimationQueue::pop) else {
            debug!(segment = name, "nothing queued");
            return;
        };
        info!(segment = name, animation = animation.name(), "triggering animation");
        if let Some(segment) = self.segments.get_mut(name) {
            animation.apply(segment.pixels_mut());
        }
    }

    fn trigger_all(&mut self) {
        let names: Vec<String> = self
            .queues
            .iter()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        for name in names {
            self.trigger(&name);
        }
    }
}
