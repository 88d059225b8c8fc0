use crate::color::Rgb;

const COLOR_NAME_RED: &str = "red";
const COLOR_NAME_GREEN: &str = "green";
const COLOR_NAME_BLUE: &str = "blue";
const COLOR_NAME_YELLOW: &str = "yellow";
const COLOR_NAME_PURPLE: &str = "purple";
const COLOR_NAME_TURQUOISE: &str = "turquoise";
const COLOR_NAME_ORANGE: &str = "orange";
const COLOR_NAME_WHITE: &str = "white";

/// Named colors available to the effects
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Turquoise,
    Orange,
    White,
}

impl Color {
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Purple,
        Self::Turquoise,
        Self::Orange,
        Self::White,
    ];

    /// RGB value of the color
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Red => Rgb { r: 255, g: 0, b: 0 },
            Self::Green => Rgb { r: 0, g: 255, b: 0 },
            Self::Blue => Rgb { r: 0, g: 0, b: 255 },
            Self::Yellow => Rgb {
                r: 255,
                g: 255,
                b: 0,
            },
            Self::Purple => Rgb {
                r: 160,
                g: 32,
                b: 240,
            },
            Self::Turquoise => Rgb {
                r: 48,
                g: 213,
                b: 200,
            },
            Self::Orange => Rgb {
                r: 255,
                g: 120,
                b: 0,
            },
            Self::White => Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => COLOR_NAME_RED,
            Self::Green => COLOR_NAME_GREEN,
            Self::Blue => COLOR_NAME_BLUE,
            Self::Yellow => COLOR_NAME_YELLOW,
            Self::Purple => COLOR_NAME_PURPLE,
            Self::Turquoise => COLOR_NAME_TURQUOISE,
            Self::Orange => COLOR_NAME_ORANGE,
            Self::White => COLOR_NAME_WHITE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            COLOR_NAME_RED => Some(Self::Red),
            COLOR_NAME_GREEN => Some(Self::Green),
            COLOR_NAME_BLUE => Some(Self::Blue),
            COLOR_NAME_YELLOW => Some(Self::Yellow),
            COLOR_NAME_PURPLE => Some(Self::Purple),
            COLOR_NAME_TURQUOISE => Some(Self::Turquoise),
            COLOR_NAME_ORANGE => Some(Self::Orange),
            COLOR_NAME_WHITE => Some(Self::White),
            _ => None,
        }
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.rgb()
    }
}
