mod tests {
    use motion_strip::color::Rgb;
    use motion_strip::{BrightnessRange, ColorState, Segment};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn state() -> ColorState {
        ColorState::new(0.0, 1.0, 0.5, BrightnessRange::default())
    }

    #[test]
    fn test_defaults() {
        let state = ColorState::default();
        assert!(approx(state.hue(), 25.0));
        assert!(approx(state.saturation(), 1.0));
        assert!(approx(state.brightness(), 125.0 / 255.0));
        assert_eq!(state.hue_offset(), 0.0);
        assert_eq!(state.brightness_offset(), 0.0);
        assert!(approx(state.range().min(), 0.05));
        assert!(approx(state.range().max(), 1.0));
    }

    #[test]
    fn test_set_hue_resets_offset() {
        let mut state = state();
        state.adjust_hue(30.0);
        state.set_hue(450.0);
        assert!(approx(state.hue(), 90.0));
        assert_eq!(state.hue_offset(), 0.0);
    }

    #[test]
    fn test_set_hue_then_zero_adjust() {
        let mut state = state();
        state.set_hue(-30.0);
        state.adjust_hue(0.0);
        assert!(approx(state.effective_hue(), 330.0));
    }

    #[test]
    fn test_adjust_hue_wraps_offset() {
        let mut state = state();
        state.set_hue(350.0);
        state.adjust_hue(20.0);
        assert!(approx(state.hue(), 350.0));
        assert!(approx(state.hue_offset(), 20.0));
        assert!(approx(state.effective_hue(), 10.0));

        state.adjust_hue(-50.0);
        assert!(approx(state.hue_offset(), 330.0));
        assert!(approx(state.effective_hue(), 320.0));
    }

    #[test]
    fn test_set_brightness_percent() {
        let mut state = state();
        state.set_brightness(50.0);
        assert!(approx(state.brightness(), 0.5));

        state.set_brightness(200.0);
        assert!(approx(state.brightness(), 1.0));

        state.set_brightness(1.0);
        assert!(approx(state.brightness(), 0.05));
    }

    #[test]
    fn test_set_brightness_resets_offset() {
        let mut state = state();
        state.adjust_brightness(0.2);
        state.set_brightness(40.0);
        assert_eq!(state.brightness_offset(), 0.0);
        assert!(approx(state.effective_brightness(), 0.4));
    }

    #[test]
    fn test_adjust_brightness_stays_in_range() {
        let mut state = state();
        for delta in [0.3, 0.5, 0.9, -2.0, -0.1, 1.5, -0.04, 0.02, -3.0, 0.7] {
            state.adjust_brightness(delta);
            let effective = state.effective_brightness();
            assert!(effective >= 0.05 - 1e-6, "{effective} below range");
            assert!(effective <= 1.0 + 1e-6, "{effective} above range");
        }
    }

    #[test]
    fn test_adjust_brightness_recovers_from_edge() {
        let mut state = state();
        state.adjust_brightness(0.9);
        assert!(approx(state.effective_brightness(), 1.0));
        assert!(approx(state.brightness_offset(), 0.5));

        state.adjust_brightness(-0.1);
        assert!(approx(state.effective_brightness(), 0.9));
        assert!(approx(state.brightness(), 0.5));
    }

    #[test]
    fn test_custom_range() {
        let range = BrightnessRange::new(0.2, 0.6);
        let mut state = ColorState::new(0.0, 1.0, 0.5, range);
        state.set_brightness(100.0);
        assert!(approx(state.effective_brightness(), 0.6));
        state.adjust_brightness(-1.0);
        assert!(approx(state.effective_brightness(), 0.2));
    }

    #[test]
    fn test_range_bounds_swap() {
        let range = BrightnessRange::new(0.9, 0.1);
        assert!(approx(range.min(), 0.1));
        assert!(approx(range.max(), 0.9));
    }

    #[test]
    fn test_render_over_segment() {
        let mut state = state();
        state.set_hue(0.0);
        state.set_brightness(100.0);
        assert_eq!(state.color(), Rgb::new(255, 0, 0));

        let mut leds = [Rgb::new(1, 2, 3); 4];
        state.render(&mut leds, Segment::new(1, 2, 4));
        assert_eq!(
            leds,
            [
                Rgb::default(),
                Rgb::new(255, 0, 0),
                Rgb::new(255, 0, 0),
                Rgb::default()
            ]
        );
    }
}
