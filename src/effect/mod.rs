//! Effect catalog
//!
//! Effects are blocking control loops over the frame driver. Finite effects
//! (fades, transitions) and [`LedStrip::transition_effect`] hand a
//! cancellation back to the caller as [`EffectError::Interrupted`]. The
//! long-running effects catch it, lower the signal and clear the strip.

mod chase;
mod fade;
mod flow;
mod transition;

use core::convert::Infallible;

#[cfg(feature = "log")]
use log::debug;

pub use chase::{ChaseConfig, ChaseRing};
pub use fade::BreatheConfig;
pub use flow::FlowConfig;
pub use transition::ColorLoopConfig;

use crate::{
    LedStrip, StripDriver,
    color::{Color, Rgb},
    error::EffectError,
    frame_driver::FrameClock,
};

const EFFECT_NAME_COLOR_LOOP: &str = "color_loop";
const EFFECT_NAME_BREATHE: &str = "breathe";
const EFFECT_NAME_FLOW: &str = "flow";
const EFFECT_NAME_CHASE: &str = "chase";

const EFFECT_ID_COLOR_LOOP: u8 = 0;
const EFFECT_ID_BREATHE: u8 = 1;
const EFFECT_ID_FLOW: u8 = 2;
const EFFECT_ID_CHASE: u8 = 3;

/// Color order used by the long-running effects unless configured otherwise
pub static DEFAULT_COLOR_ORDER: [Rgb; 3] =
    [Color::Green.rgb(), Color::Blue.rgb(), Color::Red.rgb()];

/// Known long-running effects that can be requested by id or name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    ColorLoop = EFFECT_ID_COLOR_LOOP,
    Breathe = EFFECT_ID_BREATHE,
    Flow = EFFECT_ID_FLOW,
    Chase = EFFECT_ID_CHASE,
}

impl EffectId {
    pub const ALL: [Self; 4] = [Self::ColorLoop, Self::Breathe, Self::Flow, Self::Chase];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_COLOR_LOOP => Self::ColorLoop,
            EFFECT_ID_BREATHE => Self::Breathe,
            EFFECT_ID_FLOW => Self::Flow,
            EFFECT_ID_CHASE => Self::Chase,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ColorLoop => EFFECT_NAME_COLOR_LOOP,
            Self::Breathe => EFFECT_NAME_BREATHE,
            Self::Flow => EFFECT_NAME_FLOW,
            Self::Chase => EFFECT_NAME_CHASE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_COLOR_LOOP => Some(Self::ColorLoop),
            EFFECT_NAME_BREATHE => Some(Self::Breathe),
            EFFECT_NAME_FLOW => Some(Self::Flow),
            EFFECT_NAME_CHASE => Some(Self::Chase),
            _ => None,
        }
    }
}

impl<S: StripDriver, C: FrameClock> LedStrip<'_, S, C> {
    /// Swallow a cancellation and lower the signal
    ///
    /// Any other error is returned unchanged.
    fn recover(
        &self,
        outcome: Result<Infallible, EffectError<S::Error>>,
    ) -> Result<(), EffectError<S::Error>> {
        match outcome {
            Err(EffectError::Interrupted) => {
                self.frames.acknowledge_cancel();
                #[cfg(feature = "log")]
                debug!("[LedStrip.recover] effect cancelled, clearing strip");
                Ok(())
            }
            Err(error) => Err(error),
        }
    }

    /// Lower a cancel raised while the strip was being cleared
    fn settle(
        &self,
        cleanup: Result<(), EffectError<S::Error>>,
    ) -> Result<(), EffectError<S::Error>> {
        self.frames.acknowledge_cancel();
        cleanup
    }

    /// Hold frames until cancelled
    ///
    /// Used when an effect has nothing to draw, so cancellation is still
    /// observed.
    fn idle(&mut self) -> Result<Infallible, EffectError<S::Error>> {
        loop {
            self.frames.wait()?;
        }
    }
}
