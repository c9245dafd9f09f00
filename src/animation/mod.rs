//! Animations - parameterized pixel programs.
//!
//! An animation appends patterns to every pixel of a segment, using the
//! pixel's position to stagger timing. Animations are plain values and can be
//! applied any number of times. All variants are known at compile time and
//! stored in the [`Animation`] enum.

mod blink;
mod chase;
mod fade_in_out;
mod flare;
mod params;
mod rainbow;
mod solid;

pub use blink::BlinkAnimation;
pub use chase::ChaseAnimation;
pub use fade_in_out::FadeInOutAnimation;
pub use flare::FlareAnimation;
pub use params::{AnimationError, AnimationParams, Direction, MAX_FRAMES, ParamValue};

use params::clamp_frames;
pub use rainbow::RainbowAnimation;
pub use solid::SolidAnimation;

use tracing::{debug, warn};

use crate::pixel::{Pixel, PixelError, PixelState};

const ANIMATION_NAME_CHASE: &str = "Chase";
const ANIMATION_NAME_FADE_IN_OUT: &str = "FadeInOut";
const ANIMATION_NAME_FLARE: &str = "Flare";
const ANIMATION_NAME_BLINK: &str = "Blink";
const ANIMATION_NAME_RAINBOW: &str = "Rainbow";
const ANIMATION_NAME_SOLID: &str = "Solid";

pub trait PixelProgram {
    /// Parameter names this animation understands.
    const PARAMS: &'static [&'static str];

    /// Queue the patterns for the pixel at `position` of `count`.
    fn enqueue(&self, position: usize, count: usize, pixel: &mut Pixel) -> Result<(), PixelError>;
}

/// Known animation ids that can be requested by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationId {
    Chase,
    FadeInOut,
    Flare,
    Blink,
    Rainbow,
    Solid,
}

impl AnimationId {
    pub const ALL: [Self; 6] = [
        Self::Chase,
        Self::FadeInOut,
        Self::Flare,
        Self::Blink,
        Self::Rainbow,
        Self::Solid,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chase => ANIMATION_NAME_CHASE,
            Self::FadeInOut => ANIMATION_NAME_FADE_IN_OUT,
            Self::Flare => ANIMATION_NAME_FLARE,
            Self::Blink => ANIMATION_NAME_BLINK,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::Solid => ANIMATION_NAME_SOLID,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_CHASE => Some(Self::Chase),
            ANIMATION_NAME_FADE_IN_OUT => Some(Self::FadeInOut),
            ANIMATION_NAME_FLARE => Some(Self::Flare),
            ANIMATION_NAME_BLINK => Some(Self::Blink),
            ANIMATION_NAME_RAINBOW => Some(Self::Rainbow),
            ANIMATION_NAME_SOLID => Some(Self::Solid),
            _ => None,
        }
    }

    /// Build the animation from its defaults overridden by `params`.
    pub fn to_animation(self, params: &AnimationParams) -> Result<Animation, AnimationError> {
        Ok(match self {
            Self::Chase => Animation::Chase(build::<ChaseAnimation>(self, params)?),
            Self::FadeInOut => Animation::FadeInOut(build::<FadeInOutAnimation>(self, params)?),
            Self::Flare => Animation::Flare(build::<FlareAnimation>(self, params)?),
            Self::Blink => Animation::Blink(build::<BlinkAnimation>(self, params)?),
            Self::Rainbow => Animation::Rainbow(build::<RainbowAnimation>(self, params)?),
            Self::Solid => Animation::Solid(build::<SolidAnimation>(self, params)?),
        })
    }
}

trait FromParams: PixelProgram + Sized {
    fn from_params(params: &AnimationParams) -> Result<Self, AnimationError>;
}

fn build<A: FromParams>(id: AnimationId, params: &AnimationParams) -> Result<A, AnimationError> {
    for key in params.keys() {
        if !A::PARAMS.contains(&key) {
            warn!(animation = id.as_str(), key, "unknown animation parameter ignored");
        }
    }
    A::from_params(params)
}

/// Animation slot - enum containing all animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Chase(ChaseAnimation),
    FadeInOut(FadeInOutAnimation),
    Flare(FlareAnimation),
    Blink(BlinkAnimation),
    Rainbow(RainbowAnimation),
    Solid(SolidAnimation),
}

impl Animation {
    /// Look up an animation by name and build it from `params`.
    pub fn from_name(name: &str, params: &AnimationParams) -> Result<Self, AnimationError> {
        let id = AnimationId::parse_from_str(name)
            .ok_or_else(|| AnimationError::UnknownAnimation(name.to_owned()))?;
        id.to_animation(params)
    }

    pub const fn id(&self) -> AnimationId {
        match self {
            Self::Chase(_) => AnimationId::Chase,
            Self::FadeInOut(_) => AnimationId::FadeInOut,
            Self::Flare(_) => AnimationId::Flare,
            Self::Blink(_) => AnimationId::Blink,
            Self::Rainbow(_) => AnimationId::Rainbow,
            Self::Solid(_) => AnimationId::Solid,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.id().as_str()
    }

    /// Queue this animation on `pixels` and start them.
    ///
    /// Pixels that are already playing reject the patterns and keep their
    /// current program. Returns how many pixels accepted the animation.
    pub fn apply(&self, pixels: &mut [Pixel]) -> usize {
        let count = pixels.len();
        let mut accepted = 0;
        for (position, pixel) in pixels.iter_mut().enumerate() {
            if self.enqueue(position, count, pixel).is_ok() {
                accepted += 1;
            }
        }

        for pixel in pixels.iter_mut() {
            if pixel.state() == PixelState::Loaded {
                pixel.start();
            }
        }

        debug!(animation = self.name(), accepted, count, "animation applied");
        accepted
    }

    fn enqueue(&self, position: usize, count: usize, pixel: &mut Pixel) -> Result<(), PixelError> {
        match self {
            Self::Chase(animation) => animation.enqueue(position, count, pixel),
            Self::FadeInOut(animation) => animation.enqueue(position, count, pixel),
            Self::Flare(animation) => animation.enqueue(position, count, pixel),
            Self::Blink(animation) => animation.enqueue(position, count, pixel),
            Self::Rainbow(animation) => animation.enqueue(position, count, pixel),
            Self::Solid(animation) => animation.enqueue(position, count, pixel),
        }
    }
}
