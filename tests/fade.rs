mod common;

mod tests {
    use ws_strip_effects::{
        BreatheConfig, CancelSignal, Duration, EffectError, EffectId, LedStrip, LightConfig,
        StripConfig,
    };

    use crate::common::{FakeClock, FakeError, FakeStrip, OFF, RED, led_strip};

    #[test]
    fn test_turn_on_ramps_to_color() {
        let signal = CancelSignal::new();
        let mut strip = led_strip(FakeStrip::new(3), FakeClock::new(), &signal, 10);

        assert_eq!(strip.turn_on(RED, 5), Ok(()));

        let frames = &strip.driver().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], vec![OFF; 3]);
        assert_eq!(frames[1], vec![(127, 0, 0, 0); 3]);
        assert_eq!(strip.frames().clock().waits, 2);
        assert_eq!(strip.frames().clock().elapsed, Duration::from_millis(50));
    }

    #[test]
    fn test_turn_on_then_turn_off_clears_strip() {
        let signal = CancelSignal::new();
        let mut strip = led_strip(FakeStrip::new(4), FakeClock::new(), &signal, 120);

        assert_eq!(strip.turn_on(RED, 5), Ok(()));
        assert_eq!(strip.driver().pixels, vec![(244, 0, 0, 0); 4]);

        assert_eq!(strip.turn_off(7), Ok(()));
        assert_eq!(strip.driver().pixels, vec![OFF; 4]);
        assert_eq!(strip.driver().frames.len(), 24 + 35);
    }

    #[test]
    fn test_turn_off_runs_while_any_channel_lit() {
        let signal = CancelSignal::new();
        let mut strip = led_strip(FakeStrip::new(3), FakeClock::new(), &signal, 10);
        for index in 0..3 {
            strip.frames_mut().set_pixel(index, 20, 3, 0, 0);
        }

        assert_eq!(strip.turn_off(5), Ok(()));

        let frames = &strip.driver().frames;
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0], vec![(15, 0, 0, 0); 3]);
        assert_eq!(frames[2], vec![(5, 0, 0, 0); 3]);
        assert_eq!(frames[3], vec![OFF; 3]);
    }

    #[test]
    fn test_turn_off_rejects_non_24_bit_color() {
        let signal = CancelSignal::new();
        let mut strip = led_strip(FakeStrip::new(2), FakeClock::new(), &signal, 10);
        strip.frames_mut().set_pixel(0, 10, 10, 10, 5);

        assert_eq!(
            strip.turn_off(7),
            Err(EffectError::InvalidColorEncoding(0x050A_0A0A))
        );
        assert!(strip.driver().frames.is_empty());
    }

    #[test]
    fn test_set_pixel_saturates_channels() {
        let signal = CancelSignal::new();
        let mut strip = led_strip(FakeStrip::new(1), FakeClock::new(), &signal, 10);
        strip.frames_mut().set_pixel(0, -40, 300, 128, 999);

        assert_eq!(strip.driver().pixels[0], (0, 255, 128, 255));
        assert!(strip.driver().frames.is_empty());
    }

    #[test]
    fn test_turn_on_propagates_cancellation() {
        let signal = CancelSignal::new();
        let clock = FakeClock::cancel_after(&signal, 2);
        let mut strip = led_strip(FakeStrip::new(2), clock, &signal, 10);

        assert_eq!(strip.turn_on(RED, 2), Err(EffectError::Interrupted));
        assert!(signal.is_raised());
        assert_eq!(strip.driver().frames.len(), 2);
        assert_eq!(strip.driver().pixels, vec![(51, 0, 0, 0); 2]);
    }

    #[test]
    fn test_breathe_cancelled_fades_out() {
        let signal = CancelSignal::new();
        let clock = FakeClock::cancel_after(&signal, 3);
        let mut strip = led_strip(FakeStrip::new(3), clock, &signal, 10);

        let config = BreatheConfig {
            shine_speed: 5,
            fade_speed: 7,
            color: RED,
        };
        assert_eq!(strip.breathe(&config), Ok(()));

        assert!(!signal.is_raised());
        assert_eq!(strip.driver().pixels, vec![OFF; 3]);
        // two fade-in frames, one fade-out frame, then 120 / 7 rounded up
        assert_eq!(strip.driver().frames.len(), 3 + 18);
    }

    #[test]
    fn test_breathe_cancelled_again_while_fading_out() {
        let signal = CancelSignal::new();
        let clock = FakeClock::cancel_after(&signal, 3);
        let driver = FakeStrip::new(3).cancel_after_shows(&signal, 10);
        let mut strip = led_strip(driver, clock, &signal, 10);

        assert_eq!(strip.breathe(&BreatheConfig::default()), Ok(()));

        assert!(!signal.is_raised());
        assert_eq!(strip.driver().pixels, vec![OFF; 3]);
        assert_eq!(strip.driver().frames.len(), 3 + 18);
    }

    #[test]
    fn test_breathe_repeats() {
        let signal = CancelSignal::new();
        let clock = FakeClock::cancel_after(&signal, 22);
        let mut strip = led_strip(FakeStrip::new(2), clock, &signal, 10);

        assert_eq!(strip.breathe(&BreatheConfig::default()), Ok(()));

        let frames = &strip.driver().frames;
        // 2 fade-in + 19 fade-out frames, then the next fade-in starts black
        assert_eq!(frames.len(), 22);
        assert_eq!(frames[1], vec![(127, 0, 0, 0); 2]);
        assert_eq!(frames[20], vec![OFF; 2]);
        assert_eq!(frames[21], vec![OFF; 2]);
    }

    #[test]
    fn test_run_breathe_with_defaults() {
        let signal = CancelSignal::new();
        let clock = FakeClock::cancel_after(&signal, 1);
        let mut strip = led_strip(FakeStrip::new(2), clock, &signal, 10);

        assert_eq!(strip.run(EffectId::Breathe), Ok(()));
        assert_eq!(strip.driver().frames.len(), 1);
        assert_eq!(strip.driver().pixels, vec![OFF; 2]);
    }

    #[test]
    fn test_driver_errors_propagate() {
        let signal = CancelSignal::new();
        let mut fake = FakeStrip::new(2);
        fake.fail_show = true;
        let mut strip = led_strip(fake, FakeClock::new(), &signal, 10);

        assert_eq!(strip.turn_on(RED, 5), Err(EffectError::Driver(FakeError)));
        assert_eq!(
            strip.breathe(&BreatheConfig::default()),
            Err(EffectError::Driver(FakeError))
        );
    }

    #[test]
    fn test_new_initializes_driver() {
        let signal = CancelSignal::new();
        let strip = led_strip(FakeStrip::new(2), FakeClock::new(), &signal, 10);
        assert_eq!(strip.driver().begun_on_pin, Some(18));
        assert_eq!(strip.frames().pixel_count(), 2);
        assert_eq!(strip.brightness(), 10);

        let mut fake = FakeStrip::new(2);
        fake.fail_begin = true;
        let result = LedStrip::new(
            fake,
            FakeClock::new(),
            &signal,
            &StripConfig::new(2, 18),
            &LightConfig::default(),
        );
        assert!(matches!(result, Err(FakeError)));
    }

    #[test]
    fn test_frame_duration() {
        let config = LightConfig::default();
        assert_eq!(config.brightness, 120);
        assert_eq!(config.frame_duration(), Duration::from_millis(25));

        let slow = LightConfig {
            delay_ms: 1,
            ..config
        };
        assert_eq!(slow.frame_duration(), Duration::from_millis(100));

        let zero = LightConfig {
            delay_ms: 0,
            ..config
        };
        assert_eq!(zero.frame_duration(), Duration::from_millis(100));
    }

    #[test]
    fn test_strip_config_defaults() {
        let config = StripConfig::new(29, 18);
        assert_eq!(config.led_freq_hz, 800_000);
        assert_eq!(config.led_dma, 10);
        assert!(!config.led_invert);
        assert_eq!(config.led_brightness, 255);
        assert_eq!(config.led_channel, 0);
    }

    #[test]
    fn test_cancel_signal() {
        let signal = CancelSignal::new();
        assert!(!signal.is_raised());
        signal.trigger().raise();
        assert!(signal.is_raised());
        assert!(signal.acknowledge());
        assert!(!signal.acknowledge());
    }
}
