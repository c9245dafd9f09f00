//! Command records and their text form.
//!
//! A command names an action, the target it applies to and, for the
//! animation actions, the animation and its parameters:
//!
//! ```text
//! quit
//! clear ALL
//! trigger_all
//! trigger north
//! queue north Chase color=RED direction=-1 speed_delay=3
//! immediate ALL Solid color=0x00FF8800
//! ```

use core::str::FromStr;

use crate::animation::{AnimationParams, ParamValue};

const ACTION_NAME_QUIT: &str = "quit";
const ACTION_NAME_CLEAR: &str = "clear";
const ACTION_NAME_TRIGGER_ALL: &str = "trigger_all";
const ACTION_NAME_TRIGGER: &str = "trigger";
const ACTION_NAME_QUEUE: &str = "queue";
const ACTION_NAME_IMMEDIATE: &str = "immediate";

/// Target name that addresses every segment.
pub const BROADCAST_TARGET: &str = "ALL";

/// What a command does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the runtime.
    Quit,
    /// Turn a target off and drop its pixel programs.
    Clear,
    /// Apply the head of every non-empty queue.
    TriggerAll,
    /// Apply the head of one target's queue.
    Trigger,
    /// Append an animation to a target's queue.
    Queue,
    /// Apply an animation to a target now.
    Immediate,
}

impl Action {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quit => ACTION_NAME_QUIT,
            Self::Clear => ACTION_NAME_CLEAR,
            Self::TriggerAll => ACTION_NAME_TRIGGER_ALL,
            Self::Trigger => ACTION_NAME_TRIGGER,
            Self::Queue => ACTION_NAME_QUEUE,
            Self::Immediate => ACTION_NAME_IMMEDIATE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ACTION_NAME_QUIT => Some(Self::Quit),
            ACTION_NAME_CLEAR => Some(Self::Clear),
            ACTION_NAME_TRIGGER_ALL => Some(Self::TriggerAll),
            ACTION_NAME_TRIGGER => Some(Self::Trigger),
            ACTION_NAME_QUEUE => Some(Self::Queue),
            ACTION_NAME_IMMEDIATE => Some(Self::Immediate),
            _ => None,
        }
    }

    /// Whether the action addresses a target.
    pub const fn needs_target(self) -> bool {
        !matches!(self, Self::Quit | Self::TriggerAll)
    }

    /// Whether the action carries an animation.
    pub const fn needs_animation(self) -> bool {
        matches!(self, Self::Queue | Self::Immediate)
    }
}

/// Segment selection of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Every segment.
    All,
    /// One segment by name.
    Segment(String),
}

impl Target {
    pub fn parse(name: &str) -> Self {
        if name == BROADCAST_TARGET {
            Self::All
        } else {
            Self::Segment(name.to_owned())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => BROADCAST_TARGET,
            Self::Segment(name) => name,
        }
    }
}

/// Errors raised while reading a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The line holds no action.
    Empty,
    /// No action has this name.
    UnknownAction(String),
    /// The action needs a target and none was given.
    MissingTarget(Action),
    /// The action needs an animation name and none was given.
    MissingAnimation(Action),
    /// A parameter is not written as `key=value`.
    MalformedParam(String),
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownAction(action) => write!(f, "unknown action: {}", action),
            Self::MissingTarget(action) => {
                write!(f, "action {} needs a target", action.as_str())
            }
            Self::MissingAnimation(action) => {
                write!(f, "action {} needs an animation", action.as_str())
            }
            Self::MalformedParam(param) => {
                write!(f, "parameter {} is not key=value", param)
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// One command for the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    pub action: Action,
    pub target: Option<Target>,
    pub animation: Option<String>,
    pub params: AnimationParams,
}

impl CommandRecord {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            target: None,
            animation: None,
            params: AnimationParams::new(),
        }
    }

    pub fn quit() -> Self {
        Self::new(Action::Quit)
    }

    pub fn clear(target: &str) -> Self {
        Self::new(Action::Clear).with_target(target)
    }

    pub fn trigger_all() -> Self {
        Self::new(Action::TriggerAll)
    }

    pub fn trigger(target: &str) -> Self {
        Self::new(Action::Trigger).with_target(target)
    }

    pub fn queue(target: &str, animation: &str, params: AnimationParams) -> Self {
        Self::new(Action::Queue)
            .with_target(target)
            .with_animation(animation, params)
    }

    pub fn immediate(target: &str, animation: &str, params: AnimationParams) -> Self {
        Self::new(Action::Immediate)
            .with_target(target)
            .with_animation(animation, params)
    }

    #[must_use]
    pub fn with_target(mut self, target: &str) -> Self {
        self.target = Some(Target::parse(target));
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: &str, params: AnimationParams) -> Self {
        self.animation = Some(animation.to_owned());
        self.params = params;
        self
    }
}

impl FromStr for CommandRecord {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let action_name = words.next().ok_or(CommandError::Empty)?;
        let action = Action::parse_from_str(action_name)
            .ok_or_else(|| CommandError::UnknownAction(action_name.to_owned()))?;

        let mut record = Self::new(action);
        if action.needs_target() {
            let target = words.next().ok_or(CommandError::MissingTarget(action))?;
            record.target = Some(Target::parse(target));
        }
        if action.needs_animation() {
            let animation = words.next().ok_or(CommandError::MissingAnimation(action))?;
            record.animation = Some(animation.to_owned());
            for word in words {
                let (key, value) = word
                    .split_once('=')
                    .ok_or_else(|| CommandError::MalformedParam(word.to_owned()))?;
                record.params.insert(key, parse_value(value));
            }
        }

        Ok(record)
    }
}

/// Decimal and `0x` hex numbers become numbers, anything else stays text.
fn parse_value(value: &str) -> ParamValue {
    let number = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16).ok(),
        None => value.parse::<i64>().ok(),
    };
    number.map_or_else(|| ParamValue::Text(value.to_owned()), ParamValue::Number)
}
