mod wheel;

use smart_leds::RGB8;

pub use wheel::{rainbow, wheel};

pub type Rgb = RGB8;

/// Channel bytes of one LED in wire order (blue, green, red)
pub type WireColor = [u8; 3];

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Convert an API color into the byte order the sinks expect
#[inline]
pub const fn to_wire(color: Rgb) -> WireColor {
    [color.b, color.g, color.r]
}

/// Convert wire-order bytes back into an API color
#[inline]
pub const fn from_wire(bytes: WireColor) -> Rgb {
    Rgb {
        r: bytes[2],
        g: bytes[1],
        b: bytes[0],
    }
}

const COLOR_NAME_RED: &str = "red";
const COLOR_NAME_ORANGE: &str = "orange";
const COLOR_NAME_YELLOW: &str = "yellow";
const COLOR_NAME_GREEN: &str = "green";
const COLOR_NAME_BLUE: &str = "blue";
const COLOR_NAME_INDIGO: &str = "indigo";
const COLOR_NAME_VIOLET: &str = "violet";
const COLOR_NAME_PINK: &str = "pink";
const COLOR_NAME_BLACK: &str = "black";
const COLOR_NAME_WHITE: &str = "white";

/// Colors that can be requested by name from a script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
    Pink,
    Black,
    White,
}

impl NamedColor {
    pub const ALL: [Self; 10] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Pink,
        Self::Black,
        Self::White,
    ];

    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Red => Rgb::new(255, 0, 0),
            Self::Orange => Rgb::new(255, 128, 0),
            Self::Green => Rgb::new(0, 255, 0),
            Self::Blue => Rgb::new(0, 0, 255),
            // Palette value, same triple as yellow. See `command_rgb`.
            Self::Yellow | Self::Indigo => Rgb::new(255, 255, 0),
            Self::Violet => Rgb::new(255, 0, 255),
            Self::Pink => Rgb::new(255, 0, 128),
            Self::Black => BLACK,
            Self::White => WHITE,
        }
    }

    /// Color applied when the name is used as a single-color command
    ///
    /// Matches [`NamedColor::rgb`] except for indigo, whose command form is
    /// cyan while the blend palette keeps the yellow triple.
    pub const fn command_rgb(self) -> Rgb {
        match self {
            Self::Indigo => Rgb::new(0, 255, 255),
            other => other.rgb(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => COLOR_NAME_RED,
            Self::Orange => COLOR_NAME_ORANGE,
            Self::Yellow => COLOR_NAME_YELLOW,
            Self::Green => COLOR_NAME_GREEN,
            Self::Blue => COLOR_NAME_BLUE,
            Self::Indigo => COLOR_NAME_INDIGO,
            Self::Violet => COLOR_NAME_VIOLET,
            Self::Pink => COLOR_NAME_PINK,
            Self::Black => COLOR_NAME_BLACK,
            Self::White => COLOR_NAME_WHITE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            COLOR_NAME_RED => Some(Self::Red),
            COLOR_NAME_ORANGE => Some(Self::Orange),
            COLOR_NAME_YELLOW => Some(Self::Yellow),
            COLOR_NAME_GREEN => Some(Self::Green),
            COLOR_NAME_BLUE => Some(Self::Blue),
            COLOR_NAME_INDIGO => Some(Self::Indigo),
            COLOR_NAME_VIOLET => Some(Self::Violet),
            COLOR_NAME_PINK => Some(Self::Pink),
            COLOR_NAME_BLACK => Some(Self::Black),
            COLOR_NAME_WHITE => Some(Self::White),
            _ => None,
        }
    }
}

/// Resolve a color word
///
/// Palette names give their command value; any other CSS color name is
/// looked up in the CSS table.
pub fn lookup(name: &str) -> Option<Rgb> {
    if let Some(color) = NamedColor::parse_from_str(name) {
        return Some(color.command_rgb());
    }
    palette::named::from_str(name).map(|css| Rgb::new(css.red, css.green, css.blue))
}

impl From<NamedColor> for Rgb {
    fn from(color: NamedColor) -> Self {
        color.rgb()
    }
}
