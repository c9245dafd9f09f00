mod tests {
    use table_lights::animation::{ChaseAnimation, FlareAnimation, MAX_FRAMES, RainbowAnimation};
    use table_lights::color::{BLACK, ColorName, rgbw};
    use table_lights::{
        Animation, AnimationError, AnimationId, AnimationParams, Direction, ParamValue, Pattern,
        Pixel, PixelState,
    };

    fn strip(count: usize) -> Vec<Pixel> {
        (0..count).map(Pixel::new).collect()
    }

    #[test]
    fn test_chase_staggers_pixels() {
        let params = AnimationParams::new()
            .with("direction", 1)
            .with("speed_delay", 2)
            .with("color", ColorName::Red);
        let animation = Animation::from_name("Chase", &params).unwrap();
        let Animation::Chase(chase) = animation else {
            panic!("expected chase");
        };
        assert_eq!(chase.delay(0, 3), 0);
        assert_eq!(chase.delay(1, 3), 2);
        assert_eq!(chase.delay(2, 3), 4);

        let mut pixels = strip(3);
        assert_eq!(animation.apply(&mut pixels), 3);
        for (position, pixel) in pixels.iter().enumerate() {
            let delay = position * 2;
            let steps = pixel.queued_steps();
            assert_eq!(steps.len(), delay + 2 + 5 * 2);
            assert!(steps[..delay].iter().all(|step| *step == BLACK));
            assert_eq!(steps[delay], rgbw(127, 0, 0, 0));
            assert_eq!(steps[delay + 1], rgbw(255, 0, 0, 0));
            assert_eq!(*steps.last().unwrap(), BLACK);
            assert_eq!(pixel.state(), PixelState::Active);
        }
    }

    #[test]
    fn test_chase_backward_starts_at_far_end() {
        let chase = ChaseAnimation {
            direction: Direction::Backward,
            speed_delay: 3,
            ..ChaseAnimation::default()
        };
        assert_eq!(chase.delay(0, 4), 9);
        assert_eq!(chase.delay(3, 4), 0);

        let params = AnimationParams::new().with("direction", "backward");
        let Animation::Chase(parsed) = Animation::from_name("Chase", &params).unwrap() else {
            panic!("expected chase");
        };
        assert_eq!(parsed.direction, Direction::Backward);
    }

    #[test]
    fn test_flare_spreads_from_middle() {
        let flare = FlareAnimation::default();
        let delays: Vec<usize> = (0..5).map(|position| flare.delay(position, 5)).collect();
        assert_eq!(delays, vec![4, 2, 0, 2, 4]);

        let mut pixels = strip(5);
        Animation::Flare(flare).apply(&mut pixels);
        assert_eq!(pixels[2].queued_steps().len(), 1 + 10);
        assert_eq!(pixels[0].queued_steps().len(), 1 + 4 + 10);
        assert_eq!(pixels[0].queued_steps()[4], flare.color1);
        assert_eq!(*pixels[0].queued_steps().last().unwrap(), flare.color2);
    }

    #[test]
    fn test_fade_in_out_returns_to_black() {
        let params = AnimationParams::new().with("duration", 4);
        let animation = Animation::from_name("FadeInOut", &params).unwrap();
        let mut pixels = strip(2);
        animation.apply(&mut pixels);

        let steps = pixels[1].queued_steps();
        assert_eq!(steps.len(), 8);
        assert_eq!(steps[3], ColorName::Blue.rgbw());
        assert_eq!(steps[7], BLACK);
    }

    #[test]
    fn test_blink_and_solid() {
        let params = AnimationParams::new().with("duration", 2).with("color", "white");
        let mut pixels = strip(1);
        Animation::from_name("Blink", &params).unwrap().apply(&mut pixels);
        let white = ColorName::White.rgbw();
        assert_eq!(pixels[0].queued_steps(), &[white, white, BLACK, BLACK]);

        let params = AnimationParams::new().with("color", 0x0A00_0000);
        let mut pixels = strip(1);
        Animation::from_name("Solid", &params).unwrap().apply(&mut pixels);
        assert_eq!(pixels[0].queued_steps(), &[rgbw(0, 0, 0, 10)]);
    }

    #[test]
    fn test_rainbow_is_synchronized() {
        let animation = Animation::Rainbow(RainbowAnimation::default());
        let mut pixels = strip(3);
        animation.apply(&mut pixels);
        assert_eq!(pixels[0].queued_steps().len(), 255);
        assert_eq!(pixels[0].queued_steps(), pixels[2].queued_steps());
    }

    #[test]
    fn test_apply_skips_active_pixels() {
        let mut pixels = strip(2);
        pixels[0].add_pattern(&Pattern::solid(BLACK, 1), 1).unwrap();
        pixels[0].start();

        let solid = Animation::from_name("Solid", &AnimationParams::new()).unwrap();

        assert_eq!(solid.apply(&mut pixels), 1);
        assert_eq!(pixels[0].queued_steps().len(), 1);
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(
            Animation::from_name("Sparkle", &AnimationParams::new()),
            Err(AnimationError::UnknownAnimation("Sparkle".to_owned()))
        );
        assert_eq!(
            Animation::from_name("Solid", &AnimationParams::new().with("color", "chartreuse")),
            Err(AnimationError::UnknownColor {
                key: "color".to_owned(),
                name: "chartreuse".to_owned(),
            })
        );
    }

    #[test]
    fn test_invalid_params() {
        let params = AnimationParams::new().with("speed_delay", -3);
        assert!(matches!(
            Animation::from_name("Chase", &params),
            Err(AnimationError::InvalidParam { ref key, .. }) if key == "speed_delay"
        ));

        let params = AnimationParams::new().with("direction", 0);
        assert!(Animation::from_name("Chase", &params).is_err());

        let params = AnimationParams::new().with("duration", "long");
        assert!(Animation::from_name("Blink", &params).is_err());
    }

    #[test]
    fn test_derived_delays_saturate() {
        let chase = ChaseAnimation {
            tail_length: usize::MAX,
            speed_delay: usize::MAX,
            ..ChaseAnimation::default()
        };
        assert_eq!(chase.delay(2, 3), MAX_FRAMES);
        assert_eq!(chase.tail_frames(), MAX_FRAMES);

        let flare = FlareAnimation {
            speed_delay: usize::MAX,
            ..FlareAnimation::default()
        };
        assert_eq!(flare.delay(0, 9), MAX_FRAMES);
    }

    #[test]
    fn test_frame_counts_are_bounded() {
        let params = AnimationParams::new().with("duration", 65_535);
        assert_eq!(params.frames("duration", 1), Ok(MAX_FRAMES));

        let params = AnimationParams::new().with("duration", 65_536);
        assert!(matches!(
            params.frames("duration", 1),
            Err(AnimationError::InvalidParam { ref key, .. }) if key == "duration"
        ));
        assert!(Animation::from_name("Blink", &params).is_err());
    }

    #[test]
    fn test_unknown_params_are_ignored() {
        let params = AnimationParams::new().with("sparkle", 3);
        let animation = Animation::from_name("Rainbow", &params).unwrap();
        assert_eq!(animation, Animation::Rainbow(RainbowAnimation::default()));
    }

    #[test]
    fn test_animation_ids() {
        for id in AnimationId::ALL {
            assert_eq!(AnimationId::parse_from_str(id.as_str()), Some(id));
            let animation = id.to_animation(&AnimationParams::new()).unwrap();
            assert_eq!(animation.id(), id);
        }
        assert_eq!(AnimationId::parse_from_str("chase"), None);
    }

    #[test]
    fn test_param_values() {
        assert_eq!(ParamValue::from(5), ParamValue::Number(5));
        assert_eq!(ParamValue::from(ColorName::Teal).to_string(), "TEAL");
        let params = AnimationParams::new().with("a", 1).with("b", "x");
        assert_eq!(params.len(), 2);
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
