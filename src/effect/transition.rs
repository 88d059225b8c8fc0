//! Color transitions

use core::convert::Infallible;

#[cfg(feature = "log")]
use log::debug;

use super::DEFAULT_COLOR_ORDER;
use crate::{
    LedStrip, StripDriver,
    color::{Rgb, lerp_rgb},
    error::EffectError,
    frame_driver::{FrameClock, Pacing},
    math::{Progress, step_of},
};

/// Configuration for [`LedStrip::color_loop`]
#[derive(Debug, Clone, Copy)]
pub struct ColorLoopConfig<'a> {
    /// Brightness step while fading in the first color (recommended 1-6)
    pub shine_speed: u8,
    /// Channel decrement while fading out after cancellation (recommended 3-8)
    pub fade_speed: u8,
    /// Interpolation step between colors (recommended 1-6)
    pub effect_speed: u8,
    /// Colors to cycle through
    pub color_order: &'a [Rgb],
}

impl Default for ColorLoopConfig<'_> {
    fn default() -> Self {
        Self {
            shine_speed: 5,
            fade_speed: 7,
            effect_speed: 3,
            color_order: &DEFAULT_COLOR_ORDER,
        }
    }
}

impl<S: StripDriver, C: FrameClock> LedStrip<'_, S, C> {
    /// Blend every pixel from `start` to `end`
    ///
    /// Frame `i` shows each channel interpolated at `i / brightness`.
    pub fn transition(
        &mut self,
        start: Rgb,
        end: Rgb,
        effect_speed: u8,
    ) -> Result<(), EffectError<S::Error>> {
        let steps = u32::from(self.brightness);
        for step in (0..steps).step_by(step_of(effect_speed)) {
            let frame = lerp_rgb(start, end, Progress::from_step(step, steps));
            self.frames.fill_rgb(frame);
            self.frames.render_and_wait()?;
        }
        Ok(())
    }

    /// Transition through `colors` in order, wrapping to the first, forever
    ///
    /// Never returns `Ok`. A cancellation is handed back as
    /// [`EffectError::Interrupted`] and the strip keeps the last frame.
    pub fn transition_effect(
        &mut self,
        colors: &[Rgb],
        effect_speed: u8,
    ) -> Result<Infallible, EffectError<S::Error>> {
        if colors.is_empty() || !self.animates() {
            return self.idle();
        }
        loop {
            for (index, &start) in colors.iter().enumerate() {
                let end = colors[(index + 1) % colors.len()];
                self.transition(start, end, effect_speed)?;
            }
        }
    }

    /// Fade in the first color, then cycle through all colors until
    /// cancelled, then fade out
    pub fn color_loop(
        &mut self,
        config: &ColorLoopConfig<'_>,
    ) -> Result<(), EffectError<S::Error>> {
        #[cfg(feature = "log")]
        debug!("[LedStrip.color_loop] {} colors", config.color_order.len());

        let outcome = self.color_loop_frames(config);
        self.recover(outcome)?;
        let cleared = self.fade_out(config.fade_speed, Pacing::Uninterruptible);
        self.settle(cleared)
    }

    fn color_loop_frames(
        &mut self,
        config: &ColorLoopConfig<'_>,
    ) -> Result<Infallible, EffectError<S::Error>> {
        if let Some(&first) = config.color_order.first() {
            self.turn_on(first, config.shine_speed)?;
        }
        self.transition_effect(config.color_order, config.effect_speed)
    }
}
