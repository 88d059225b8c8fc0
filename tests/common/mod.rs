#![allow(dead_code)]

use ws_strip_effects::{
    CancelSignal, Duration, FrameClock, LedStrip, LightConfig, Rgb, Rgbw, StripConfig,
    StripDriver,
};

/// Pixel as (r, g, b, w)
pub type Pixel = (u8, u8, u8, u8);

pub const OFF: Pixel = (0, 0, 0, 0);
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

pub const fn pixel(color: Rgb) -> Pixel {
    (color.r, color.g, color.b, 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeError;

/// In-memory strip recording every flushed frame
pub struct FakeStrip<'a> {
    pub pixels: Vec<Pixel>,
    pub frames: Vec<Vec<Pixel>>,
    pub begun_on_pin: Option<u8>,
    pub fail_begin: bool,
    pub fail_show: bool,
    cancel: Option<(&'a CancelSignal, usize)>,
}

impl<'a> FakeStrip<'a> {
    pub fn new(count: usize) -> Self {
        Self {
            pixels: vec![OFF; count],
            frames: Vec::new(),
            begun_on_pin: None,
            fail_begin: false,
            fail_show: false,
            cancel: None,
        }
    }

    /// Raise `signal` right after the `shows`-th flush
    pub fn cancel_after_shows(mut self, signal: &'a CancelSignal, shows: usize) -> Self {
        self.cancel = Some((signal, shows));
        self
    }

    pub fn last_frame(&self) -> &[Pixel] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl StripDriver for FakeStrip<'_> {
    type Error = FakeError;

    fn begin(&mut self, config: &StripConfig) -> Result<(), FakeError> {
        if self.fail_begin {
            return Err(FakeError);
        }
        self.begun_on_pin = Some(config.led_pin);
        Ok(())
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgbw) {
        self.pixels[index] = (color.r, color.g, color.b, color.a.0);
    }

    fn pixel_color(&self, index: usize) -> u32 {
        let (r, g, b, w) = self.pixels[index];
        (u32::from(w) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    fn num_pixels(&self) -> usize {
        self.pixels.len()
    }

    fn show(&mut self) -> Result<(), FakeError> {
        if self.fail_show {
            return Err(FakeError);
        }
        self.frames.push(self.pixels.clone());
        if let Some((signal, shows)) = self.cancel {
            if self.frames.len() == shows {
                signal.raise();
            }
        }
        Ok(())
    }
}

/// Clock that never sleeps, optionally raising the signal after some waits
pub struct FakeClock<'a> {
    pub waits: usize,
    pub elapsed: Duration,
    cancel: Option<(&'a CancelSignal, usize)>,
}

impl<'a> FakeClock<'a> {
    pub fn new() -> Self {
        Self {
            waits: 0,
            elapsed: Duration::from_ticks(0),
            cancel: None,
        }
    }

    /// Raise `signal` during the `waits`-th wait
    pub fn cancel_after(signal: &'a CancelSignal, waits: usize) -> Self {
        Self {
            cancel: Some((signal, waits)),
            ..Self::new()
        }
    }
}

impl FrameClock for FakeClock<'_> {
    fn wait(&mut self, duration: Duration) {
        self.waits += 1;
        self.elapsed = self.elapsed + duration;
        if let Some((signal, waits)) = self.cancel {
            if self.waits == waits {
                signal.raise();
            }
        }
    }
}

pub fn light_config(brightness: u8) -> LightConfig {
    LightConfig {
        brightness,
        ..LightConfig::default()
    }
}

pub fn led_strip<'a>(
    strip: FakeStrip<'a>,
    clock: FakeClock<'a>,
    signal: &'a CancelSignal,
    brightness: u8,
) -> LedStrip<'a, FakeStrip<'a>, FakeClock<'a>> {
    let count = strip.pixels.len();
    match LedStrip::new(
        strip,
        clock,
        signal,
        &StripConfig::new(count, 18),
        &light_config(brightness),
    ) {
        Ok(strip) => strip,
        Err(error) => panic!("fake strip failed to start: {error:?}"),
    }
}
