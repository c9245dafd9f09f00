use crate::color::{Rgbw, rgbw};

const COLOR_NAMES: [(&str, ColorName); 16] = [
    ("RED", ColorName::Red),
    ("ORANGE", ColorName::Orange),
    ("YELLOW", ColorName::Yellow),
    ("GREEN", ColorName::Green),
    ("BLUE", ColorName::Blue),
    ("INDIGO", ColorName::Indigo),
    ("VIOLET", ColorName::Violet),
    ("PURPLE", ColorName::Purple),
    ("CYAN", ColorName::Cyan),
    ("MAGENTA", ColorName::Magenta),
    ("WHITE", ColorName::White),
    ("BLACK", ColorName::Black),
    ("GOLD", ColorName::Gold),
    ("PINK", ColorName::Pink),
    ("TEAL", ColorName::Teal),
    ("LIME", ColorName::Lime),
];

/// Named colors that commands may refer to instead of a packed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorName {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
    Purple,
    Cyan,
    Magenta,
    White,
    Black,
    Gold,
    Pink,
    Teal,
    Lime,
}

impl ColorName {
    /// Every known name, in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        COLOR_NAMES.iter().map(|(_, name)| *name)
    }

    /// Look up a name, ignoring ASCII case.
    pub fn parse_from_str(s: &str) -> Option<Self> {
        COLOR_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, color)| *color)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Orange => "ORANGE",
            Self::Yellow => "YELLOW",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Indigo => "INDIGO",
            Self::Violet => "VIOLET",
            Self::Purple => "PURPLE",
            Self::Cyan => "CYAN",
            Self::Magenta => "MAGENTA",
            Self::White => "WHITE",
            Self::Black => "BLACK",
            Self::Gold => "GOLD",
            Self::Pink => "PINK",
            Self::Teal => "TEAL",
            Self::Lime => "LIME",
        }
    }

    /// Resolved strip color. Named colors never use the white channel.
    pub const fn rgbw(self) -> Rgbw {
        match self {
            Self::Red => rgbw(255, 0, 0, 0),
            Self::Orange => rgbw(255, 165, 0, 0),
            Self::Yellow => rgbw(255, 255, 0, 0),
            Self::Green => rgbw(0, 255, 0, 0),
            Self::Blue => rgbw(0, 0, 255, 0),
            Self::Indigo => rgbw(75, 0, 130, 0),
            Self::Violet => rgbw(238, 130, 238, 0),
            Self::Purple => rgbw(128, 0, 128, 0),
            Self::Cyan => rgbw(0, 255, 255, 0),
            Self::Magenta => rgbw(255, 0, 255, 0),
            Self::White => rgbw(255, 255, 255, 0),
            Self::Black => rgbw(0, 0, 0, 0),
            Self::Gold => rgbw(255, 215, 0, 0),
            Self::Pink => rgbw(255, 192, 203, 0),
            Self::Teal => rgbw(0, 128, 128, 0),
            Self::Lime => rgbw(50, 205, 50, 0),
        }
    }
}
