//! Flow effect
//!
//! Paints the strip pixel by pixel, one color after another.

use core::convert::Infallible;

#[cfg(feature = "log")]
use log::debug;

use super::DEFAULT_COLOR_ORDER;
use crate::{
    LedStrip, StripDriver, color::Rgb, error::EffectError, frame_driver::FrameClock,
};

/// Configuration for [`LedStrip::flow`]
#[derive(Debug, Clone, Copy)]
pub struct FlowConfig<'a> {
    /// Colors painted in order
    pub color_order: &'a [Rgb],
    /// Not used by the effect; frames are paced by
    /// [`LightConfig::delay_ms`](crate::LightConfig::delay_ms)
    pub effect_speed: u8,
}

impl Default for FlowConfig<'_> {
    fn default() -> Self {
        Self {
            color_order: &DEFAULT_COLOR_ORDER,
            effect_speed: 4,
        }
    }
}

impl<S: StripDriver, C: FrameClock> LedStrip<'_, S, C> {
    /// Paint pixels from first to last with each color in turn until
    /// cancelled, then clear them the same way
    ///
    /// Renders after every pixel.
    pub fn flow(&mut self, config: &FlowConfig<'_>) -> Result<(), EffectError<S::Error>> {
        #[cfg(feature = "log")]
        debug!("[LedStrip.flow] {} colors", config.color_order.len());

        let outcome = self.flow_frames(config);
        self.recover(outcome)?;
        let cleared = self.frames.wipe();
        self.settle(cleared)
    }

    fn flow_frames(
        &mut self,
        config: &FlowConfig<'_>,
    ) -> Result<Infallible, EffectError<S::Error>> {
        if config.color_order.is_empty() || self.frames.pixel_count() == 0 {
            return self.idle();
        }
        loop {
            for &color in config.color_order {
                for index in 0..self.frames.pixel_count() {
                    self.frames.set_pixel_rgb(index, color);
                    self.frames.render_and_wait()?;
                }
            }
        }
    }
}
