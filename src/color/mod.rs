mod catalog;
mod utils;

pub use catalog::Color;
use smart_leds::{RGB8, RGBW};
pub use utils::{decompose24, lerp_rgb, rgbw, scale_rgb};

pub type Rgb = RGB8;
pub type Rgbw = RGBW<u8>;
