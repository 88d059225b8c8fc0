//! Error types
//!
//! Channel values never fail: anything out of range is saturated. The only
//! color failure is a read-back word that is not a packed 24-bit color.

use core::fmt;

/// Error returned when decoding a color fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    /// The word does not fit in 24 bits
    InvalidColorEncoding(u32),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorEncoding(word) => {
                write!(f, "color {word:#010x} is not a 24-bit value")
            }
        }
    }
}

/// Error returned by effects.
///
/// `E` is the error type of the strip driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectError<E> {
    /// Pixel read-back was not a packed 24-bit color
    InvalidColorEncoding(u32),
    /// The cancel signal was raised at a frame boundary
    Interrupted,
    /// The strip driver failed
    Driver(E),
}

impl<E> EffectError<E> {
    /// Check if this is a cancellation rather than a failure
    pub const fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

impl<E> From<ColorError> for EffectError<E> {
    fn from(error: ColorError) -> Self {
        match error {
            ColorError::InvalidColorEncoding(word) => Self::InvalidColorEncoding(word),
        }
    }
}

impl<E: fmt::Display> fmt::Display for EffectError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorEncoding(word) => {
                fmt::Display::fmt(&ColorError::InvalidColorEncoding(*word), f)
            }
            Self::Interrupted => f.write_str("effect interrupted"),
            Self::Driver(error) => write!(f, "strip driver error: {error}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for EffectError<E> {}

impl core::error::Error for ColorError {}
