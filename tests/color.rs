mod tests {
    use motion_strip::color::{Rgb, grb_word, hsv_to_rgb};
    use motion_strip::math::normalize_degrees;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), RED);
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), GREEN);
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), BLUE);
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), Rgb::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(30.0, 1.0, 1.0), Rgb::new(255, 127, 0));
    }

    #[test]
    fn test_hsv_hue_wraps() {
        assert_eq!(hsv_to_rgb(-120.0, 1.0, 1.0), BLUE);
        assert_eq!(hsv_to_rgb(480.0, 1.0, 1.0), GREEN);
        assert_eq!(hsv_to_rgb(720.0, 1.0, 1.0), RED);
    }

    #[test]
    fn test_hsv_zero_saturation_is_gray() {
        let gray = hsv_to_rgb(0.0, 0.0, 0.5);
        assert_eq!(gray, Rgb::new(127, 127, 127));
        for hue in [45.0, 90.0, 200.0, 359.9, -10.0] {
            assert_eq!(hsv_to_rgb(hue, 0.0, 0.5), gray);
        }
    }

    #[test]
    fn test_hsv_zero_value_is_black() {
        for hue in [0.0, 75.0, 180.0, 300.0] {
            assert_eq!(hsv_to_rgb(hue, 1.0, 0.0), BLACK);
            assert_eq!(hsv_to_rgb(hue, 0.3, 0.0), BLACK);
        }
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(450.0), 90.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert!(normalize_degrees(-1e-8) < 360.0);
    }

    #[test]
    fn test_grb_word() {
        assert_eq!(grb_word(Rgb::new(0x11, 0x22, 0x33)), 0x0022_1133);
        assert_eq!(grb_word(RED), 0x0000_FF00);
    }
}
