use smart_leds::White;

use crate::color::{Rgbw, rgbw};

/// Create a color from its packed form (`0xWWRRGGBB`).
#[allow(clippy::cast_possible_truncation)]
pub const fn rgbw_from_u32(color: u32) -> Rgbw {
    rgbw(
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
        ((color >> 24) & 0xFF) as u8,
    )
}

/// Pack a color into `0xWWRRGGBB`.
pub const fn rgbw_to_u32(color: Rgbw) -> u32 {
    let White(w) = color.a;
    ((w as u32) << 24) | ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Linearly interpolate between two colors.
///
/// Every channel is `floor(start + (end - start) * step / total_steps)`.
/// A non-positive `total_steps` yields `end`. Steps outside
/// `0..=total_steps` are extrapolated and clamped to the channel range.
pub fn interpolate_color(start: Rgbw, end: Rgbw, step: i32, total_steps: i32) -> Rgbw {
    if total_steps <= 0 {
        return end;
    }

    let White(start_w) = start.a;
    let White(end_w) = end.a;

    rgbw(
        interpolate_channel(start.r, end.r, step, total_steps),
        interpolate_channel(start.g, end.g, step, total_steps),
        interpolate_channel(start.b, end.b, step, total_steps),
        interpolate_channel(start_w, end_w, step, total_steps),
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn interpolate_channel(start: u8, end: u8, step: i32, total_steps: i32) -> u8 {
    let start = i64::from(start);
    let end = i64::from(end);
    let step = i64::from(step);
    let total = i64::from(total_steps);

    // start + (end - start) * step / total, kept exact and floored.
    let weighted = start * total + (end - start) * step;
    weighted.div_euclid(total).clamp(0, 255) as u8
}
