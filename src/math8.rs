use smart_leds::White;

use crate::color::{Rgbw, rgbw};

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0).
///
/// `scale == 255` returns the value unchanged.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale every channel of a color, white included.
#[inline]
pub const fn scale_color(color: Rgbw, scale: u8) -> Rgbw {
    let White(w) = color.a;
    rgbw(
        scale8(color.r, scale),
        scale8(color.g, scale),
        scale8(color.b, scale),
        scale8(w, scale),
    )
}
