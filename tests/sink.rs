mod tests {
    use smart_leds::SmartLedsWrite;
    use table_lights::color::{BLACK, rgbw};
    use table_lights::{NullSink, PixelSink, RecordingSink, Rgbw, SmartLedsSink, StripConfig};

    #[derive(Default)]
    struct FakeStrip {
        frames: Vec<Vec<Rgbw>>,
        fail: bool,
    }

    impl SmartLedsWrite for FakeStrip {
        type Error = &'static str;
        type Color = Rgbw;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err("bus error");
            }
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn test_smart_leds_sink_scales_and_flushes() {
        let config = StripConfig {
            led_count: 3,
            brightness: 128,
            ..StripConfig::default()
        };
        let mut sink = SmartLedsSink::new(FakeStrip::default(), &config);
        assert_eq!(sink.pixel_count(), 3);

        sink.set_pixel(1, rgbw(255, 128, 0, 255));
        sink.set_pixel(9, rgbw(255, 255, 255, 255));
        sink.flush();

        let strip = sink.into_inner();
        assert_eq!(strip.frames.len(), 1);
        assert_eq!(strip.frames[0], vec![BLACK, rgbw(128, 64, 0, 128), BLACK]);
    }

    #[test]
    fn test_smart_leds_sink_survives_driver_errors() {
        let strip = FakeStrip {
            fail: true,
            ..FakeStrip::default()
        };
        let mut sink = SmartLedsSink::new(strip, &StripConfig::default());
        assert_eq!(sink.pixel_count(), 300);
        sink.flush();
        assert!(sink.into_inner().frames.is_empty());
    }

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::new(2);
        sink.set_pixel(0, rgbw(1, 2, 3, 4));
        sink.set_pixel(2, rgbw(1, 2, 3, 4));
        assert_eq!(sink.writes(), 1);
        assert_eq!(sink.shown(), &[BLACK, BLACK]);

        sink.flush();
        assert_eq!(sink.shown(), &[rgbw(1, 2, 3, 4), BLACK]);
        assert_eq!(sink.flushes(), 1);
    }

    #[test]
    fn test_null_sink() {
        let mut sink = NullSink::new(12);
        sink.set_pixel(3, BLACK);
        sink.flush();
        assert_eq!(sink.pixel_count(), 12);
    }
}
