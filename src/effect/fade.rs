//! Fade in, fade out and breathing

use core::convert::Infallible;

#[cfg(feature = "log")]
use log::debug;

use crate::{
    LedStrip, StripDriver,
    color::{Color, Rgb, decompose24, scale_rgb},
    error::EffectError,
    frame_driver::{FrameClock, Pacing},
    math::{Progress, step_of},
};

/// Configuration for [`LedStrip::breathe`]
#[derive(Debug, Clone, Copy)]
pub struct BreatheConfig {
    /// Brightness step while fading in (recommended 1-6)
    pub shine_speed: u8,
    /// Channel decrement while fading out (recommended 3-8)
    pub fade_speed: u8,
    /// Color to breathe
    pub color: Rgb,
}

impl Default for BreatheConfig {
    fn default() -> Self {
        Self {
            shine_speed: 5,
            fade_speed: 7,
            color: Color::Red.rgb(),
        }
    }
}

impl<S: StripDriver, C: FrameClock> LedStrip<'_, S, C> {
    /// Fade every pixel in from black to `color`
    ///
    /// Renders one frame per `shine_speed` step below `brightness`; step `i`
    /// shows the color scaled by `i / brightness`, so the last frame is just
    /// short of full.
    pub fn turn_on(
        &mut self,
        color: Rgb,
        shine_speed: u8,
    ) -> Result<(), EffectError<S::Error>> {
        let steps = u32::from(self.brightness);
        for step in (0..steps).step_by(step_of(shine_speed)) {
            let frame = scale_rgb(color, Progress::from_step(step, steps));
            self.frames.fill_rgb(frame);
            self.frames.render_and_wait()?;
        }
        Ok(())
    }

    /// Fade every pixel out, starting from the color of pixel 0
    ///
    /// Fails with [`EffectError::InvalidColorEncoding`] if pixel 0 does not
    /// read back as a 24-bit color.
    pub fn turn_off(&mut self, fade_speed: u8) -> Result<(), EffectError<S::Error>> {
        self.fade_out(fade_speed, Pacing::Cancellable)
    }

    /// Alternate fading in and out until cancelled, then fade out
    pub fn breathe(&mut self, config: &BreatheConfig) -> Result<(), EffectError<S::Error>> {
        #[cfg(feature = "log")]
        debug!("[LedStrip.breathe] color {:?}", config.color);

        let outcome = self.breathe_frames(config);
        self.recover(outcome)?;
        let cleared = self.fade_out(config.fade_speed, Pacing::Uninterruptible);
        self.settle(cleared)
    }

    fn breathe_frames(
        &mut self,
        config: &BreatheConfig,
    ) -> Result<Infallible, EffectError<S::Error>> {
        if !self.animates() {
            return self.idle();
        }
        loop {
            self.turn_on(config.color, config.shine_speed)?;
            self.turn_off(config.fade_speed)?;
        }
    }

    /// Subtract `fade_speed` from every channel each frame
    ///
    /// Keeps going while any channel is still above zero, so channels that
    /// already reached zero keep going negative and are clamped on write.
    pub(crate) fn fade_out(
        &mut self,
        fade_speed: u8,
        pacing: Pacing,
    ) -> Result<(), EffectError<S::Error>> {
        if self.frames.pixel_count() == 0 {
            return Ok(());
        }

        let current = decompose24(self.frames.pixel_color(0))?;
        let fade = i32::from(fade_speed.max(1));
        let (mut r, mut g, mut b) = (
            i32::from(current.r),
            i32::from(current.g),
            i32::from(current.b),
        );

        while r > 0 || g > 0 || b > 0 {
            r -= fade;
            g -= fade;
            b -= fade;
            self.frames.fill(r, g, b);
            self.frames.present(pacing)?;
        }
        Ok(())
    }
}
