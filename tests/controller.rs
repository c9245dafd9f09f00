mod tests {
    use table_lights::animation::MAX_FRAMES;
    use table_lights::color::{BLACK, ColorName, rgbw};
    use table_lights::{
        AnimationError, AnimationParams, CalculatedSegment, CommandRecord, Controller,
        RecordingSink,
    };

    fn segment(name: &str, start: usize, end: usize) -> CalculatedSegment {
        CalculatedSegment {
            name: name.to_owned(),
            start,
            end,
            side_name: "north".to_owned(),
        }
    }

    fn controller() -> Controller<RecordingSink> {
        Controller::from_segments(
            RecordingSink::new(6),
            &[segment("left", 0, 1), segment("right", 4, 5)],
        )
    }

    fn solid(color: &str) -> AnimationParams {
        AnimationParams::new().with("color", color)
    }

    #[test]
    fn test_segments_are_registered() {
        let controller = controller();
        assert!(controller.is_running());
        assert_eq!(controller.segment_names().collect::<Vec<_>>(), vec!["left", "right"]);
        assert_eq!(controller.segment("right").unwrap().pixels().len(), 2);
        assert_eq!(controller.queue_len("left"), Some(0));
        assert_eq!(controller.queue_len("middle"), None);
    }

    #[test]
    fn test_duplicate_segment_is_ignored() {
        let controller = Controller::from_segments(
            RecordingSink::new(6),
            &[segment("left", 0, 1), segment("left", 2, 3)],
        );
        assert_eq!(controller.segment("left").unwrap().range().begin, 0);
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut controller = controller();
        controller.handle_command(&CommandRecord::queue("left", "Solid", solid("RED")));
        controller.handle_command(&CommandRecord::queue("left", "Solid", solid("BLUE")));
        assert_eq!(controller.queue_len("left"), Some(2));

        controller.handle_command(&CommandRecord::trigger("left"));
        controller.tick();
        assert_eq!(controller.sink().shown()[0], ColorName::Red.rgbw());
        controller.tick();
        assert_eq!(controller.queue_len("left"), Some(1));

        controller.handle_command(&CommandRecord::trigger("left"));
        controller.tick();
        assert_eq!(controller.sink().shown()[1], ColorName::Blue.rgbw());
        assert_eq!(controller.queue_len("left"), Some(0));

        controller.handle_command(&CommandRecord::trigger("left"));
        assert_eq!(controller.queue_len("left"), Some(0));
    }

    #[test]
    fn test_unknown_target_is_a_no_op() {
        let mut controller = controller();
        for command in [
            CommandRecord::queue("middle", "Solid", solid("RED")),
            CommandRecord::immediate("middle", "Solid", solid("RED")),
            CommandRecord::clear("middle"),
            CommandRecord::trigger("middle"),
        ] {
            controller.handle_command(&command);
        }
        controller.tick();

        assert!(controller.is_running());
        assert_eq!(controller.queue_len("left"), Some(0));
        assert_eq!(controller.queue_len("right"), Some(0));
        assert_eq!(controller.sink().writes(), 0);
    }

    #[test]
    fn test_unknown_animation_or_color_is_dropped() {
        let mut controller = controller();
        controller.handle_command(&CommandRecord::queue("left", "Sparkle", AnimationParams::new()));
        controller.handle_command(&CommandRecord::immediate("left", "Solid", solid("chartreuse")));
        controller.tick();

        assert_eq!(controller.queue_len("left"), Some(0));
        assert_eq!(controller.sink().writes(), 0);
    }

    #[test]
    fn test_immediate_and_clear_all() {
        let mut controller = controller();
        controller.handle_command(&CommandRecord::immediate("ALL", "Solid", solid("GREEN")));
        controller.tick();
        let green = ColorName::Green.rgbw();
        assert_eq!(
            controller.sink().shown(),
            &[green, green, BLACK, BLACK, green, green]
        );

        controller.handle_command(&CommandRecord::clear("ALL"));
        controller.tick();
        assert_eq!(controller.sink().shown(), &[BLACK; 6]);
        assert!(controller.segment("left").unwrap().is_idle());
    }

    #[test]
    fn test_clear_one_segment() {
        let mut controller = controller();
        controller.handle_command(&CommandRecord::immediate("ALL", "Solid", solid("GREEN")));
        controller.tick();
        controller.clear_segment("right");
        controller.tick();

        let shown = controller.sink().shown();
        assert_eq!(shown[0], ColorName::Green.rgbw());
        assert_eq!(shown[4], BLACK);
    }

    #[test]
    fn test_trigger_all_pops_every_queue() {
        let mut controller = controller();
        controller.handle_command(&CommandRecord::queue("ALL", "Solid", solid("WHITE")));
        controller.handle_command(&CommandRecord::queue("right", "Solid", solid("PINK")));
        assert_eq!(controller.queue_len("left"), Some(1));
        assert_eq!(controller.queue_len("right"), Some(2));

        controller.handle_command(&CommandRecord::trigger_all());
        controller.tick();
        let white = ColorName::White.rgbw();
        assert_eq!(controller.sink().shown()[0], white);
        assert_eq!(controller.sink().shown()[5], white);
        assert_eq!(controller.queue_len("left"), Some(0));
        assert_eq!(controller.queue_len("right"), Some(1));

        controller.tick();
        controller.handle_command(&CommandRecord::trigger("ALL"));
        controller.tick();
        assert_eq!(controller.sink().shown()[5], ColorName::Pink.rgbw());
        assert_eq!(controller.queue_len("right"), Some(0));
    }

    #[test]
    fn test_full_queue_drops_animation() {
        let mut controller = controller();
        for _ in 0..20 {
            controller.handle_command(&CommandRecord::queue("left", "Solid", solid("RED")));
        }
        assert_eq!(controller.queue_len("left"), Some(16));
    }

    #[test]
    fn test_apply_animation() {
        let mut controller = controller();
        assert_eq!(controller.apply_animation("left", "Blink", &AnimationParams::new()), Ok(2));
        assert_eq!(controller.apply_animation("middle", "Blink", &AnimationParams::new()), Ok(0));
        assert_eq!(
            controller.apply_animation("ALL", "Glow", &AnimationParams::new()),
            Err(AnimationError::UnknownAnimation("Glow".to_owned()))
        );
        assert_eq!(controller.apply_animation("ALL", "Solid", &AnimationParams::new()), Ok(2));
    }

    #[test]
    fn test_set_color_range() {
        let mut controller = controller();
        let amber = rgbw(255, 120, 0, 30);
        assert_eq!(controller.set_color_range(1, 4, amber), 2);
        controller.tick();
        assert_eq!(
            controller.sink().shown(),
            &[BLACK, amber, BLACK, BLACK, amber, BLACK]
        );
        assert_eq!(controller.set_color_range(3, 2, amber), 0);
    }

    #[test]
    fn test_tick_flushes_once() {
        let mut controller = controller();
        controller.tick();
        controller.tick();
        assert_eq!(controller.sink().flushes(), 2);
    }

    #[test]
    fn test_quit_and_shutdown() {
        let mut controller = controller();
        controller.handle_command(&CommandRecord::immediate("ALL", "Solid", solid("RED")));
        controller.tick();
        controller.handle_command(&CommandRecord::quit());
        assert!(!controller.is_running());

        controller.shutdown();
        assert_eq!(controller.sink().shown(), &[BLACK; 6]);
    }

    #[test]
    fn test_oversized_frame_counts_are_dropped() {
        let mut controller = controller();
        for line in [
            "immediate left Chase tail_length=4294967296 speed_delay=4294967296",
            "immediate left Blink duration=9223372036854775807",
            "queue left FadeInOut duration=65536",
        ] {
            let command: CommandRecord = line.parse().unwrap();
            controller.handle_command(&command);
        }
        controller.tick();

        assert!(controller.is_running());
        assert_eq!(controller.queue_len("left"), Some(0));
        assert_eq!(controller.sink().writes(), 0);
        assert!(controller.segment("left").unwrap().is_idle());
    }

    #[test]
    fn test_longest_chase_is_clamped() {
        let mut controller = controller();
        let command: CommandRecord = "immediate left Chase tail_length=65535 speed_delay=65535"
            .parse()
            .unwrap();
        controller.handle_command(&command);

        let pixels = controller.segment("left").unwrap().pixels();
        assert_eq!(pixels[0].queued_steps().len(), 2 + MAX_FRAMES);
        assert_eq!(pixels[1].queued_steps().len(), MAX_FRAMES + 2 + MAX_FRAMES);
    }
}
