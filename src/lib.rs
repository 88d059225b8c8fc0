#![no_std]

pub mod cancel;
pub mod color;
pub mod config;
pub mod effect;
pub mod error;
pub mod frame_driver;
pub mod math;
pub mod strip;

pub use cancel::{CancelSignal, CancelTrigger};
pub use config::{LightConfig, StripConfig};
pub use effect::{BreatheConfig, ChaseConfig, ChaseRing, ColorLoopConfig, EffectId, FlowConfig};
pub use error::{ColorError, EffectError};
pub use frame_driver::{FrameClock, FrameDriver, Pacing};
pub use strip::LedStrip;

pub use color::{Color, Rgb, Rgbw};
pub use embassy_time::Duration;
pub use math::{Progress, clamp, lerp, scale};

/// Abstract LED strip driver trait
///
/// Implement this trait to support different hardware platforms, e.g. a PWM
/// or SPI backed WS281x driver on a single-board computer. The effects are
/// generic over this trait.
pub trait StripDriver {
    /// Error reported by the hardware
    type Error;

    /// Initialize the hardware
    fn begin(&mut self, config: &StripConfig) -> Result<(), Self::Error>;

    /// Write one pixel into the buffer without flushing
    fn set_pixel_color(&mut self, index: usize, color: Rgbw);

    /// Read back one pixel as a packed 0xRRGGBB word
    ///
    /// Bits above bit 23 must be clear. Drivers whose hardware reports RGBW
    /// pixels as 0xWWRRGGBB mask the white byte off here; a set white byte
    /// makes `turn_off` fail with `InvalidColorEncoding`.
    fn pixel_color(&self, index: usize) -> u32;

    /// Number of pixels in the strip
    fn num_pixels(&self) -> usize;

    /// Flush the whole buffer to the LEDs, blocking until done
    fn show(&mut self) -> Result<(), Self::Error>;
}
