//! Four channel strip colors and the helpers built on them.

mod names;
mod utils;
mod wheel;

pub use names::ColorName;
pub use utils::{interpolate_color, rgbw_from_u32, rgbw_to_u32};
pub use wheel::wheel;

use smart_leds::{RGBW, White};

/// Strip color: 8-bit red, green, blue and white channels.
///
/// The white channel lives in `a` as `White(w)`, matching the `smart-leds`
/// driver types for RGBW strips.
pub type Rgbw = RGBW<u8>;

/// Build a color from its four channels.
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw { r, g, b, a: White(w) }
}

/// All channels off.
pub const BLACK: Rgbw = rgbw(0, 0, 0, 0);
