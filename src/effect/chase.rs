//! Chase effect
//!
//! Each color is repeated into a ring that rotates one slot per sweep.

use core::convert::Infallible;

#[cfg(feature = "log")]
use log::debug;

use super::DEFAULT_COLOR_ORDER;
use crate::{
    LedStrip, StripDriver, color::Rgb, error::EffectError, frame_driver::FrameClock,
};

/// Configuration for [`LedStrip::chase`]
#[derive(Debug, Clone, Copy)]
pub struct ChaseConfig<'a> {
    /// Colors of the ring
    pub color_order: &'a [Rgb],
    /// How many consecutive slots each color takes
    pub repeat: usize,
    /// Not used by the effect; frames are paced by
    /// [`LightConfig::delay_ms`](crate::LightConfig::delay_ms)
    pub effect_speed: u8,
}

impl Default for ChaseConfig<'_> {
    fn default() -> Self {
        Self {
            color_order: &DEFAULT_COLOR_ORDER,
            repeat: 3,
            effect_speed: 4,
        }
    }
}

/// Colors expanded by a repeat count, viewed as a ring
///
/// Slot `k` of the unrotated ring holds `colors[k / repeat]`. Rotating
/// only moves the start offset, nothing is copied.
#[derive(Debug, Clone)]
pub struct ChaseRing<'a> {
    colors: &'a [Rgb],
    repeat: usize,
    offset: usize,
}

impl<'a> ChaseRing<'a> {
    /// Create a ring with each color repeated `repeat` times
    pub const fn new(colors: &'a [Rgb], repeat: usize) -> Self {
        Self {
            colors,
            repeat,
            offset: 0,
        }
    }

    /// Number of slots in the ring
    pub const fn len(&self) -> usize {
        self.colors.len().saturating_mul(self.repeat)
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Color at a slot, `None` past the end
    pub fn get(&self, index: usize) -> Option<Rgb> {
        let len = self.len();
        if index >= len {
            return None;
        }
        // offset < len, so neither branch can overflow
        let source = if index >= self.offset {
            index - self.offset
        } else {
            index + (len - self.offset)
        };
        self.colors.get(source / self.repeat).copied()
    }

    /// Move every color one slot to the right, the last one wrapping to the front
    pub fn rotate_right(&mut self) {
        let len = self.len();
        if len > 1 {
            self.offset = (self.offset + 1) % len;
        }
    }

    /// Colors of all slots in order
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        (0..self.len()).filter_map(|index| self.get(index))
    }
}

impl<S: StripDriver, C: FrameClock> LedStrip<'_, S, C> {
    /// Sweep the ring over the strip until cancelled, then clear it
    ///
    /// For pixel `i` the sweep writes `ring[i % (j + 1)]` for every `j` in
    /// `0..ring.len()`, rendering after each write, so the pixel ends on
    /// `ring[i % len]`. The frame is held once per sweep and the ring
    /// rotates right by one.
    pub fn chase(&mut self, config: &ChaseConfig<'_>) -> Result<(), EffectError<S::Error>> {
        #[cfg(feature = "log")]
        debug!(
            "[LedStrip.chase] {} colors x {}",
            config.color_order.len(),
            config.repeat
        );

        let outcome = self.chase_frames(config);
        self.recover(outcome)?;
        let cleared = self.frames.wipe();
        self.settle(cleared)
    }

    fn chase_frames(
        &mut self,
        config: &ChaseConfig<'_>,
    ) -> Result<Infallible, EffectError<S::Error>> {
        let mut ring = ChaseRing::new(config.color_order, config.repeat);
        loop {
            for index in 0..self.frames.pixel_count() {
                for slot in 0..ring.len() {
                    let Some(color) = ring.get(index % (slot + 1)) else {
                        continue;
                    };
                    self.frames.set_pixel_rgb(index, color);
                    self.frames.render()?;
                }
            }
            self.frames.wait()?;
            ring.rotate_right();
        }
    }
}
