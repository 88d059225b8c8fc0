use embassy_time::Duration;

/// Default signal frequency of WS281x strips
pub const DEFAULT_LED_FREQ_HZ: u32 = 800_000;
/// Default DMA channel used to generate the signal
pub const DEFAULT_LED_DMA: u8 = 10;
/// Default driver-level brightness
pub const DEFAULT_LED_BRIGHTNESS: u8 = 255;
/// Default number of animation steps for fades and transitions
pub const DEFAULT_BRIGHTNESS: u8 = 120;
/// Default frame pacing value
pub const DEFAULT_DELAY_MS: u16 = 4;

/// Microseconds in one tenth of a second
///
/// A frame lasts `1 / (delay_ms * 10)` seconds.
const FRAME_PACING_US: u64 = 100_000;

/// Hardware configuration handed to the strip driver
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// Number of pixels in the strip
    pub led_count: usize,
    /// GPIO pin connected to the data line (must be PWM capable)
    pub led_pin: u8,
    /// Signal frequency in hertz
    pub led_freq_hz: u32,
    /// DMA channel
    pub led_dma: u8,
    /// Invert the signal line
    pub led_invert: bool,
    /// Driver-level brightness (0-255)
    pub led_brightness: u8,
    /// PWM channel
    pub led_channel: u8,
}

impl StripConfig {
    /// Create a configuration with default timing for `led_count` pixels on `led_pin`
    pub const fn new(led_count: usize, led_pin: u8) -> Self {
        Self {
            led_count,
            led_pin,
            led_freq_hz: DEFAULT_LED_FREQ_HZ,
            led_dma: DEFAULT_LED_DMA,
            led_invert: false,
            led_brightness: DEFAULT_LED_BRIGHTNESS,
            led_channel: 0,
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Copy)]
pub struct LightConfig {
    /// Step count of fades and transitions.
    ///
    /// Recommended range is 100-200.
    pub brightness: u8,
    /// Frame pacing value: each frame sleeps `100 / delay_ms` milliseconds
    pub delay_ms: u16,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl LightConfig {
    /// Time one frame is held before the next one starts
    ///
    /// A zero `delay_ms` is treated as one.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(FRAME_PACING_US / u64::from(self.delay_ms.max(1)))
    }
}
