use std::collections::BTreeMap;

use crate::color::{ColorName, Rgbw, rgbw_from_u32};

/// Longest run of frames a parameter or a derived delay may span.
///
/// About 55 minutes at 20 FPS.
pub const MAX_FRAMES: usize = u16::MAX as usize;

const FRAME_COUNT: &str = "a frame count from 0 to 65535";

/// Limit a derived frame count to [`MAX_FRAMES`].
pub(crate) const fn clamp_frames(frames: usize) -> usize {
    if frames > MAX_FRAMES { MAX_FRAMES } else { frames }
}

/// Parameter value as it arrives with a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Number(i64),
    Text(String),
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<ColorName> for ParamValue {
    fn from(value: ColorName) -> Self {
        Self::Text(value.as_str().to_owned())
    }
}

impl core::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Errors raised while building an animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// No animation has this name.
    UnknownAnimation(String),
    /// A color parameter names an unknown color.
    UnknownColor { key: String, name: String },
    /// A parameter has a value of the wrong kind or range.
    InvalidParam { key: String, expected: &'static str },
}

impl core::fmt::Display for AnimationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownAnimation(name) => write!(f, "unknown animation: {}", name),
            Self::UnknownColor { key, name } => {
                write!(f, "unknown color {} for parameter {}", name, key)
            }
            Self::InvalidParam { key, expected } => {
                write!(f, "parameter {} must be {}", key, expected)
            }
        }
    }
}

impl std::error::Error for AnimationError {}

/// Travel direction for staggered animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Lowest segment position first.
    #[default]
    Forward,
    /// Highest segment position first.
    Backward,
}

impl Direction {
    /// Steps of delay before the pixel at `position` of `count` starts.
    pub const fn rank(self, position: usize, count: usize) -> usize {
        match self {
            Self::Forward => position,
            Self::Backward => count - 1 - position,
        }
    }
}

/// Named animation parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationParams {
    values: BTreeMap<String, ParamValue>,
}

impl AnimationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter while building.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Color parameter: a packed `0xWWRRGGBB` number or a color name.
    pub fn color(&self, key: &str, default: Rgbw) -> Result<Rgbw, AnimationError> {
        match self.get(key) {
            None => Ok(default),
            Some(ParamValue::Number(value)) => u32::try_from(*value)
                .map(rgbw_from_u32)
                .map_err(|_| invalid(key, "a packed 32-bit color")),
            Some(ParamValue::Text(name)) => ColorName::parse_from_str(name)
                .map(ColorName::rgbw)
                .ok_or_else(|| AnimationError::UnknownColor {
                    key: key.to_owned(),
                    name: name.clone(),
                }),
        }
    }

    /// Frame count parameter, between 0 and [`MAX_FRAMES`].
    pub fn frames(&self, key: &str, default: usize) -> Result<usize, AnimationError> {
        match self.get(key) {
            None => Ok(default),
            Some(ParamValue::Number(value)) => usize::try_from(*value)
                .ok()
                .filter(|frames| *frames <= MAX_FRAMES)
                .ok_or_else(|| invalid(key, FRAME_COUNT)),
            Some(ParamValue::Text(_)) => Err(invalid(key, FRAME_COUNT)),
        }
    }

    /// Direction parameter: `1`/`forward` or `-1`/`backward`.
    pub fn direction(&self, key: &str, default: Direction) -> Result<Direction, AnimationError> {
        match self.get(key) {
            None => Ok(default),
            Some(ParamValue::Number(1)) => Ok(Direction::Forward),
            Some(ParamValue::Number(-1)) => Ok(Direction::Backward),
            Some(ParamValue::Text(text)) if text.eq_ignore_ascii_case("forward") => {
                Ok(Direction::Forward)
            }
            Some(ParamValue::Text(text)) if text.eq_ignore_ascii_case("backward") => {
                Ok(Direction::Backward)
            }
            Some(_) => Err(invalid(key, "1, -1, forward or backward")),
        }
    }
}

fn invalid(key: &str, expected: &'static str) -> AnimationError {
    AnimationError::InvalidParam {
        key: key.to_owned(),
        expected,
    }
}
