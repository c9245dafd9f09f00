//! Threaded run loop.
//!
//! Two activities share one [`CommandChannel`]: the intake thread polls a
//! [`CommandSource`] and forwards what it gets, the tick thread drives the
//! [`FrameScheduler`]. Neither ever waits on the other. Lowering the running
//! flag (a `quit` command or a closed source) ends both loops, and the tick
//! side turns the strip off before returning.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant as StdInstant;

use embassy_time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::channel::TrySendError;
use crate::command::CommandRecord;
use crate::command_processor::{CommandChannel, CommandProcessor, CommandSender};
use crate::config::RuntimeConfig;
use crate::controller::Controller;
use crate::frame_scheduler::FrameScheduler;
use crate::sink::PixelSink;

/// Commands that may wait between two frames.
pub const COMMAND_CHANNEL_SIZE: usize = 32;

/// Outcome of one non-blocking poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandPoll {
    /// A command arrived.
    Ready(CommandRecord),
    /// Nothing yet, poll again later.
    Pending,
    /// The source is exhausted and will never produce another command.
    Closed,
}

/// Producer of commands, polled without blocking.
pub trait CommandSource {
    fn poll_command(&mut self) -> CommandPoll;
}

/// Source that replays a fixed list of commands, then closes.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    commands: std::collections::VecDeque<CommandRecord>,
}

impl ScriptedSource {
    pub fn new(commands: impl IntoIterator<Item = CommandRecord>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }
}

impl CommandSource for ScriptedSource {
    fn poll_command(&mut self) -> CommandPoll {
        self.commands
            .pop_front()
            .map_or(CommandPoll::Closed, CommandPoll::Ready)
    }
}

/// Run intake and tick until the controller stops.
///
/// Returns the controller after its final clear-all and flush.
pub fn run<S, C>(controller: Controller<S>, mut source: C, config: &RuntimeConfig) -> Controller<S>
where
    S: PixelSink + Send,
    C: CommandSource + Send,
{
    let channel = CommandChannel::<COMMAND_CHANNEL_SIZE>::new();
    let running = AtomicBool::new(controller.is_running());
    let started = StdInstant::now();
    info!(
        frame_ms = config.frame_duration.as_millis(),
        poll_ms = config.poll_interval.as_millis(),
        "runtime started"
    );

    let controller = thread::scope(|scope| {
        let sender = channel.sender();
        let running = &running;
        scope.spawn(move || intake(&mut source, sender, running, config.poll_interval));

        let processor = CommandProcessor::new(channel.receiver());
        let mut scheduler =
            FrameScheduler::with_frame_duration(controller, processor, config.frame_duration);
        while running.load(Ordering::Acquire) {
            let result = scheduler.tick(elapsed(started));
            if !scheduler.controller().is_running() {
                running.store(false, Ordering::Release);
                break;
            }
            thread::sleep(to_std(result.sleep_duration));
        }

        let mut controller = scheduler.into_controller();
        controller.stop();
        controller.shutdown();
        controller
    });

    info!("runtime stopped");
    controller
}

fn intake<C: CommandSource, const SIZE: usize>(
    source: &mut C,
    sender: CommandSender<'_, SIZE>,
    running: &AtomicBool,
    poll_interval: Duration,
) {
    while running.load(Ordering::Acquire) {
        match source.poll_command() {
            CommandPoll::Ready(command) => {
                debug!(action = command.action.as_str(), "command received");
                if let Err(TrySendError(command)) = sender.try_send(command) {
                    warn!(
                        action = command.action.as_str(),
                        pending = sender.len(),
                        capacity = sender.capacity(),
                        "command channel full, command dropped"
                    );
                }
            }
            CommandPoll::Pending => thread::sleep(to_std(poll_interval)),
            CommandPoll::Closed => {
                info!("command source closed");
                let mut quit = CommandRecord::quit();
                while let Err(TrySendError(rejected)) = sender.try_send(quit) {
                    if !running.load(Ordering::Acquire) {
                        return;
                    }
                    quit = rejected;
                    thread::sleep(to_std(poll_interval));
                }
                return;
            }
        }
    }
}

fn elapsed(started: StdInstant) -> Instant {
    let millis = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    Instant::from_millis(millis)
}

fn to_std(duration: Duration) -> std::time::Duration {
    std::time::Duration::from_millis(duration.as_millis())
}
