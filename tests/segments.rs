mod tests {
    use myrtio_strip_transform::{
        LedController, Rgb, SegmentScaling, StripController, scale_segments,
        transform::{self, scaled_len, source_len},
    };

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn sentinel(i: usize) -> Rgb {
        let i = i as u8;
        Rgb::new(i, 255 - i, i ^ 0x5A)
    }

    fn sentinels<const N: usize>() -> [Rgb; N] {
        core::array::from_fn(sentinel)
    }

    fn picked<const N: usize>(indices: [usize; N]) -> [Rgb; N] {
        indices.map(sentinel)
    }

    #[test]
    fn test_shrink_and_grow_without_contamination() {
        let segments = [SegmentScaling::new(10, 5), SegmentScaling::new(6, 12)];
        let mut leds = sentinels::<17>();
        leds[16] = BLACK;

        transform::scale_segments(&mut leds, &segments);

        assert_eq!(
            leds,
            picked([0, 2, 4, 6, 8, 10, 11, 11, 12, 12, 13, 13, 14, 14, 15, 15, 15])
        );
    }

    #[test]
    fn test_grow_then_shrink() {
        let segments = [SegmentScaling::new(4, 8), SegmentScaling::new(6, 2)];
        let mut leds = sentinels::<10>();

        transform::scale_segments(&mut leds, &segments);

        assert_eq!(leds, picked([0, 1, 1, 2, 2, 3, 3, 3, 4, 7]));
    }

    #[test]
    fn test_shrink_every_segment() {
        let segments = [SegmentScaling::new(6, 3), SegmentScaling::new(6, 3)];
        let mut leds = sentinels::<12>();

        transform::scale_segments(&mut leds, &segments);

        assert_eq!(leds[..6], picked([0, 2, 4, 6, 8, 10]));
    }

    #[test]
    fn test_grow_every_segment() {
        let segments = [SegmentScaling::new(2, 4), SegmentScaling::new(3, 3)];
        let mut leds = sentinels::<7>();

        transform::scale_segments(&mut leds, &segments);

        assert_eq!(leds, picked([0, 1, 1, 1, 2, 3, 4]));
    }

    #[test]
    fn test_empty_source_segment_goes_dark() {
        let segments = [
            SegmentScaling::new(2, 2),
            SegmentScaling::new(0, 3),
            SegmentScaling::new(2, 1),
        ];
        let mut leds = sentinels::<6>();

        transform::scale_segments(&mut leds, &segments);

        assert_eq!(
            leds,
            [sentinel(0), sentinel(1), BLACK, BLACK, BLACK, sentinel(2)]
        );
    }

    #[test]
    fn test_empty_target_segment_is_dropped() {
        let segments = [SegmentScaling::new(3, 0), SegmentScaling::new(3, 3)];
        let mut leds = sentinels::<6>();

        transform::scale_segments(&mut leds, &segments);

        assert_eq!(leds[..3], picked([3, 4, 5]));
    }

    #[test]
    fn test_no_segments_is_noop() {
        let mut leds = sentinels::<4>();

        transform::scale_segments(&mut leds, &[]);

        assert_eq!(leds, sentinels::<4>());
    }

    #[test]
    fn test_segment_lengths() {
        let segments = [SegmentScaling::new(10, 5), SegmentScaling::new(6, 12)];
        assert_eq!(source_len(&segments), 16);
        assert_eq!(scaled_len(&segments), 17);
    }

    #[test]
    fn test_scale_segments_channel() {
        let segments = [SegmentScaling::new(10, 5), SegmentScaling::new(6, 12)];
        let mut controller: StripController<1, 17> = StripController::new();
        controller.set_led_count(0, 16);
        for (i, led) in controller.leds_mut(0).iter_mut().take(16).enumerate() {
            *led = sentinel(i);
        }

        scale_segments(&mut controller, 0, &segments);

        assert_eq!(
            controller.buffer(0),
            &picked([0, 2, 4, 6, 8, 10, 11, 11, 12, 12, 13, 13, 14, 14, 15, 15, 15])
        );
    }

    #[test]
    #[should_panic(expected = "segments cover")]
    fn test_scale_segments_past_led_count_panics() {
        let mut controller: StripController<1, 32> = StripController::new();
        controller.set_led_count(0, 8);
        scale_segments(&mut controller, 0, &[SegmentScaling::new(10, 5)]);
    }
}
