mod tests {
    use table_lights::color::{BLACK, rgbw};
    use table_lights::{Pattern, Pixel, PixelError, PixelState, RecordingSink, Segment, LedRange};

    const CYAN: table_lights::Rgbw = rgbw(0, 255, 255, 0);

    #[test]
    fn test_fresh_pixel_is_idle() {
        let pixel = Pixel::new(4);
        assert_eq!(pixel.index(), 4);
        assert_eq!(pixel.state(), PixelState::Idle);
        assert!(!pixel.is_active());
        assert!(pixel.queued_steps().is_empty());
        assert_eq!(pixel.current_color(), BLACK);
    }

    #[test]
    fn test_solid_lifecycle() {
        let mut sink = RecordingSink::new(8);
        let mut pixel = Pixel::new(2);

        pixel.add_pattern(&Pattern::solid(CYAN, 3), 1).unwrap();
        assert_eq!(pixel.state(), PixelState::Loaded);
        pixel.start();

        for _ in 0..3 {
            assert_eq!(pixel.advance(&mut sink), PixelState::Active);
            assert_eq!(sink.staged()[2], CYAN);
        }
        assert_eq!(sink.writes(), 3);

        assert_eq!(pixel.advance(&mut sink), PixelState::Idle);
        assert_eq!(sink.writes(), 3);
        assert!(!pixel.is_active());
        assert!(pixel.queued_steps().is_empty());
        assert_eq!(pixel.current_color(), CYAN);

        assert_eq!(pixel.advance(&mut sink), PixelState::Idle);
        assert_eq!(sink.writes(), 3);
    }

    #[test]
    fn test_loaded_pixel_waits_for_start() {
        let mut sink = RecordingSink::new(1);
        let mut pixel = Pixel::new(0);
        pixel.add_pattern(&Pattern::solid(CYAN, 2), 1).unwrap();

        assert_eq!(pixel.advance(&mut sink), PixelState::Loaded);
        assert_eq!(sink.writes(), 0);
    }

    #[test]
    fn test_add_pattern_while_active_is_rejected() {
        let mut pixel = Pixel::new(7);
        pixel.add_pattern(&Pattern::solid(CYAN, 2), 1).unwrap();
        pixel.start();

        let before = pixel.queued_steps().to_vec();
        assert_eq!(
            pixel.add_pattern(&Pattern::solid(BLACK, 5), 1),
            Err(PixelError::Active { index: 7 })
        );
        assert_eq!(pixel.queued_steps(), before.as_slice());
    }

    #[test]
    fn test_patterns_chain_from_last_queued_step() {
        let mut pixel = Pixel::new(0);
        pixel.add_pattern(&Pattern::solid(rgbw(200, 0, 0, 0), 1), 1).unwrap();
        pixel.add_pattern(&Pattern::fade(BLACK, 2), 1).unwrap();

        assert_eq!(
            pixel.queued_steps(),
            &[rgbw(200, 0, 0, 0), rgbw(100, 0, 0, 0), BLACK]
        );
    }

    #[test]
    fn test_stop_pauses_playback() {
        let mut sink = RecordingSink::new(1);
        let mut pixel = Pixel::new(0);
        pixel.add_pattern(&Pattern::solid(CYAN, 3), 1).unwrap();
        pixel.start();
        pixel.advance(&mut sink);
        pixel.stop();

        assert_eq!(pixel.state(), PixelState::Loaded);
        assert_eq!(pixel.advance(&mut sink), PixelState::Loaded);
        assert_eq!(sink.writes(), 1);
    }

    #[test]
    fn test_reset_turns_pixel_off() {
        let mut sink = RecordingSink::new(4);
        let mut pixel = Pixel::new(3);
        pixel.add_pattern(&Pattern::solid(CYAN, 3), 1).unwrap();
        pixel.start();
        pixel.advance(&mut sink);

        pixel.reset(&mut sink);
        assert_eq!(pixel.state(), PixelState::Idle);
        assert_eq!(pixel.current_color(), BLACK);
        assert_eq!(sink.staged()[3], BLACK);
    }

    #[test]
    fn test_segment_owns_pixels_in_strip_order() {
        let range = LedRange::new(10, 14).unwrap();
        let mut segment = Segment::new("seat", "north", range);
        let indices: Vec<usize> = segment.pixels().iter().map(Pixel::index).collect();
        assert_eq!(indices, vec![10, 11, 12, 13, 14]);
        assert!(segment.is_idle());

        for pixel in segment.pixels_mut() {
            pixel.add_pattern(&Pattern::solid(CYAN, 1), 1).unwrap();
            pixel.start();
        }
        assert_eq!(segment.active_pixels(), 5);

        let mut sink = RecordingSink::new(16);
        segment.animate(&mut sink);
        assert_eq!(&sink.staged()[10..15], &[CYAN; 5]);
        segment.animate(&mut sink);
        assert!(segment.is_idle());

        segment.clear(&mut sink);
        assert_eq!(&sink.staged()[10..15], &[BLACK; 5]);
    }

    #[test]
    fn test_led_range() {
        assert_eq!(LedRange::new(5, 4), None);
        let range = LedRange::new(3, 3).unwrap();
        assert_eq!(range.count(), 1);
        assert!(range.contains(3));
        assert!(!range.contains(4));
    }
}
