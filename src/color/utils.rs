use smart_leds::White;

use crate::{
    color::{Rgb, Rgbw},
    error::ColorError,
    math::{Progress, lerp, scale},
};

/// Largest value a packed 0xRRGGBB word can hold
const MAX_PACKED_24: u32 = 0x00FF_FFFF;

/// Split a packed 24-bit color (0xRRGGBB format) into its channels
///
/// Words with any bit above the 24-bit range set are rejected rather than
/// truncated.
#[allow(clippy::cast_possible_truncation)]
pub const fn decompose24(packed: u32) -> Result<Rgb, ColorError> {
    if packed > MAX_PACKED_24 {
        return Err(ColorError::InvalidColorEncoding(packed));
    }
    Ok(Rgb {
        r: ((packed >> 16) & 0xFF) as u8,
        g: ((packed >> 8) & 0xFF) as u8,
        b: (packed & 0xFF) as u8,
    })
}

/// Interpolate each channel of two RGB colors
///
/// # Arguments
/// * `start` - Color at progress 0.0
/// * `end` - Color at progress 1.0
/// * `progress` - Interpolation point
pub fn lerp_rgb(start: Rgb, end: Rgb, progress: Progress) -> Rgb {
    Rgb {
        r: lerp(i32::from(start.r), i32::from(end.r), progress),
        g: lerp(i32::from(start.g), i32::from(end.g), progress),
        b: lerp(i32::from(start.b), i32::from(end.b), progress),
    }
}

/// Scale each channel of an RGB color by the progress fraction
pub fn scale_rgb(color: Rgb, progress: Progress) -> Rgb {
    Rgb {
        r: scale(i32::from(color.r), progress),
        g: scale(i32::from(color.g), progress),
        b: scale(i32::from(color.b), progress),
    }
}

/// Build an RGBW value
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw { r, g, b, a: White(w) }
}
