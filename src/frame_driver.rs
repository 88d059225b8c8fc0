//! Frame pacing and pixel writes.
//!
//! Every effect is built from two primitives: write pixels, then render and
//! wait. The driver checks the cancel signal after each frame, never in the
//! middle of one.

use embassy_time::Duration;

use crate::StripDriver;
use crate::cancel::CancelSignal;
use crate::color::{Rgb, rgbw};
use crate::error::EffectError;
use crate::math::clamp;

/// Blocking sleep between frames
///
/// Implement this to pace frames on a platform without an `embassy-time`
/// driver, or to run effects against a simulated clock.
pub trait FrameClock {
    /// Block for `duration`
    fn wait(&mut self, duration: Duration);
}

impl FrameClock for embassy_time::Delay {
    fn wait(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}

/// Whether a frame observes the cancel signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Stop with [`EffectError::Interrupted`] once the signal is raised
    Cancellable,
    /// Always complete; used while clearing the strip after a cancellation
    Uninterruptible,
}

/// Owns the strip and paces frames.
///
/// The strip has exactly one writer: whoever holds this driver mutably.
/// Nothing here is reentrant.
pub struct FrameDriver<'a, S: StripDriver, C: FrameClock> {
    strip: S,
    clock: C,
    signal: &'a CancelSignal,
    pixel_count: usize,
    frame_duration: Duration,
}

impl<'a, S: StripDriver, C: FrameClock> FrameDriver<'a, S, C> {
    /// Create a new frame driver.
    ///
    /// The pixel count is read from the strip once and fixed from then on.
    pub fn new(strip: S, clock: C, signal: &'a CancelSignal, frame_duration: Duration) -> Self {
        let pixel_count = strip.num_pixels();
        Self {
            strip,
            clock,
            signal,
            pixel_count,
            frame_duration,
        }
    }

    /// Number of pixels in the strip
    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Time each rendered frame is held
    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Write one pixel, saturating every channel to 0-255.
    ///
    /// The strip is not flushed.
    pub fn set_pixel(&mut self, index: usize, r: i32, g: i32, b: i32, w: i32) {
        let color = rgbw(clamp(r), clamp(g), clamp(b), clamp(w));
        self.strip.set_pixel_color(index, color);
    }

    /// Write one pixel from an RGB color with the white channel off
    pub fn set_pixel_rgb(&mut self, index: usize, color: Rgb) {
        self.set_pixel(
            index,
            i32::from(color.r),
            i32::from(color.g),
            i32::from(color.b),
            0,
        );
    }

    /// Write every pixel with the same channels, white off
    pub fn fill(&mut self, r: i32, g: i32, b: i32) {
        for index in 0..self.pixel_count {
            self.set_pixel(index, r, g, b, 0);
        }
    }

    /// Write every pixel with the same RGB color, white off
    pub fn fill_rgb(&mut self, color: Rgb) {
        self.fill(i32::from(color.r), i32::from(color.g), i32::from(color.b));
    }

    /// Packed color the strip currently holds for a pixel
    pub fn pixel_color(&self, index: usize) -> u32 {
        self.strip.pixel_color(index)
    }

    /// Flush the buffer without waiting
    pub fn render(&mut self) -> Result<(), EffectError<S::Error>> {
        self.show()?;
        self.checkpoint()
    }

    /// Hold the current frame without flushing
    pub fn wait(&mut self) -> Result<(), EffectError<S::Error>> {
        self.clock.wait(self.frame_duration);
        self.checkpoint()
    }

    /// Flush the buffer and hold the frame
    pub fn render_and_wait(&mut self) -> Result<(), EffectError<S::Error>> {
        self.show()?;
        self.clock.wait(self.frame_duration);
        self.checkpoint()
    }

    /// Flush the buffer and hold the frame, ignoring the cancel signal
    pub fn render_and_hold(&mut self) -> Result<(), EffectError<S::Error>> {
        self.show()?;
        self.clock.wait(self.frame_duration);
        Ok(())
    }

    /// Render and wait with the given pacing
    pub fn present(&mut self, pacing: Pacing) -> Result<(), EffectError<S::Error>> {
        match pacing {
            Pacing::Cancellable => self.render_and_wait(),
            Pacing::Uninterruptible => self.render_and_hold(),
        }
    }

    /// Turn pixels off one at a time, rendering after each
    pub fn wipe(&mut self) -> Result<(), EffectError<S::Error>> {
        for index in 0..self.pixel_count {
            self.set_pixel(index, 0, 0, 0, 0);
            self.render_and_hold()?;
        }
        Ok(())
    }

    /// Lower the cancel signal, returning whether it was raised
    pub fn acknowledge_cancel(&self) -> bool {
        self.signal.acknowledge()
    }

    /// Get a reference to the strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Get a mutable reference to the strip.
    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    /// Get a reference to the frame clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn show(&mut self) -> Result<(), EffectError<S::Error>> {
        self.strip.show().map_err(EffectError::Driver)
    }

    fn checkpoint(&self) -> Result<(), EffectError<S::Error>> {
        if self.signal.is_raised() {
            return Err(EffectError::Interrupted);
        }
        Ok(())
    }
}
