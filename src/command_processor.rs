//! Command processing module.
//!
//! Hands queued commands over to the controller at the start of a frame.

use crate::channel::{Channel, Receiver, Sender};
use crate::command::CommandRecord;
use crate::controller::Controller;
use crate::sink::PixelSink;

/// Type alias for command sender.
pub type CommandSender<'a, const SIZE: usize> = Sender<'a, CommandRecord, SIZE>;

/// Type alias for command receiver.
pub type CommandReceiver<'a, const SIZE: usize> = Receiver<'a, CommandRecord, SIZE>;

/// Type alias for the command channel.
pub type CommandChannel<const SIZE: usize> = Channel<CommandRecord, SIZE>;

/// Drains the command channel into a [`Controller`].
pub struct CommandProcessor<'a, const SIZE: usize> {
    commands: CommandReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> CommandProcessor<'a, SIZE> {
    pub const fn new(commands: CommandReceiver<'a, SIZE>) -> Self {
        Self { commands }
    }

    /// Handle every queued command (non-blocking).
    ///
    /// Stops early once a command lowers the running flag; whatever is left
    /// in the channel is never applied. Returns how many commands were handled.
    pub fn process_pending<S: PixelSink>(&mut self, controller: &mut Controller<S>) -> usize {
        let mut handled = 0;
        while controller.is_running() {
            let Ok(command) = self.commands.try_receive() else {
                break;
            };
            controller.handle_command(&command);
            handled += 1;
        }
        handled
    }
}
