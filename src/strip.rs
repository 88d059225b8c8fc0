#[cfg(feature = "log")]
use log::info;

use crate::StripDriver;
use crate::cancel::CancelSignal;
use crate::config::{LightConfig, StripConfig};
use crate::effect::{BreatheConfig, ChaseConfig, ColorLoopConfig, EffectId, FlowConfig};
use crate::error::EffectError;
use crate::frame_driver::{FrameClock, FrameDriver};

/// LED strip - runs effects on an owned strip driver
///
/// Every effect borrows the strip mutably for its whole duration. The
/// long-running effects return only after the cancel signal is raised.
pub struct LedStrip<'a, S: StripDriver, C: FrameClock> {
    pub(crate) frames: FrameDriver<'a, S, C>,
    pub(crate) brightness: u8,
}

impl<'a, S: StripDriver, C: FrameClock> LedStrip<'a, S, C> {
    /// Initialize the strip hardware and create the effect runner
    ///
    /// Driver failures are returned unchanged.
    pub fn new(
        mut driver: S,
        clock: C,
        signal: &'a CancelSignal,
        strip_config: &StripConfig,
        config: &LightConfig,
    ) -> Result<Self, S::Error> {
        driver.begin(strip_config)?;
        let frames = FrameDriver::new(driver, clock, signal, config.frame_duration());

        #[cfg(feature = "log")]
        info!(
            "[LedStrip.new] {} pixels on pin {}, {} steps, {} us per frame",
            frames.pixel_count(),
            strip_config.led_pin,
            config.brightness,
            frames.frame_duration().as_micros()
        );

        Ok(Self {
            frames,
            brightness: config.brightness,
        })
    }

    /// Step count of fades and transitions
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Get a reference to the frame driver.
    pub fn frames(&self) -> &FrameDriver<'a, S, C> {
        &self.frames
    }

    /// Get a mutable reference to the frame driver.
    pub fn frames_mut(&mut self) -> &mut FrameDriver<'a, S, C> {
        &mut self.frames
    }

    /// Get a reference to the strip driver.
    pub fn driver(&self) -> &S {
        self.frames.strip()
    }

    /// Run a long-running effect with its default configuration
    pub fn run(&mut self, effect: EffectId) -> Result<(), EffectError<S::Error>> {
        match effect {
            EffectId::ColorLoop => self.color_loop(&ColorLoopConfig::default()),
            EffectId::Breathe => self.breathe(&BreatheConfig::default()),
            EffectId::Flow => self.flow(&FlowConfig::default()),
            EffectId::Chase => self.chase(&ChaseConfig::default()),
        }
    }

    /// Check if fades and transitions produce any frames
    pub(crate) const fn animates(&self) -> bool {
        self.brightness > 0
    }
}
