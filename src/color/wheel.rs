use crate::color::{Rgbw, rgbw};

/// Color wheel over `0..=255`.
///
/// Three linear ramps: red to green, green to blue, blue back to red.
/// The white channel is always off.
pub const fn wheel(position: u8) -> Rgbw {
    if position < 85 {
        rgbw(position * 3, 255 - position * 3, 0, 0)
    } else if position < 170 {
        let position = position - 85;
        rgbw(255 - position * 3, 0, position * 3, 0)
    } else {
        let position = position - 170;
        rgbw(0, position * 3, 255 - position * 3, 0)
    }
}
