pub mod animation;
pub mod bounds;
pub mod channel;
pub mod color;
pub mod command;
pub mod command_processor;
pub mod config;
pub mod controller;
pub mod frame_scheduler;
pub mod geometry;
pub mod math8;
pub mod pattern;
pub mod pixel;
pub mod queue;
pub mod runtime;
pub mod segment;
pub mod sink;

pub use animation::{Animation, AnimationError, AnimationId, AnimationParams, Direction, ParamValue};
pub use bounds::LedRange;
pub use command::{Action, CommandError, CommandRecord, Target};
pub use command_processor::{CommandChannel, CommandProcessor, CommandReceiver, CommandSender};
pub use config::{RuntimeConfig, StripConfig};
pub use controller::Controller;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use geometry::{
    CalculatedSegment, Layout, Placement, SegmentDefinition, Table, TableSide, calculate_segments,
};
pub use pattern::Pattern;
pub use pixel::{Pixel, PixelError, PixelState};
pub use queue::AnimationQueue;
pub use runtime::{CommandPoll, CommandSource, ScriptedSource, run};
pub use segment::Segment;
pub use sink::{NullSink, PixelSink, RecordingSink, SmartLedsSink};

pub use color::{ColorName, Rgbw, rgbw};
pub use embassy_time::{Duration, Instant};
