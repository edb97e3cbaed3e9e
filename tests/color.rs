mod tests {
    use strip_renderer::color::{BLACK, Color24, Rgb, blend, wheel};

    const RED: Color24 = Color24::pack(255, 0, 0);
    const GREEN: Color24 = Color24::pack(0, 255, 0);
    const BLUE: Color24 = Color24::pack(0, 0, 255);
    const WHITE: Color24 = Color24::pack(255, 255, 255);

    #[test]
    fn test_pack_layout() {
        assert_eq!(Color24::pack(0x12, 0x34, 0x56).raw(), 0x0012_3456);
        assert_eq!(Color24::pack(0x12, 0x34, 0x56).unpack(), (0x12, 0x34, 0x56));
        assert_eq!(BLACK.raw(), 0);
        assert!(BLACK.is_black());
        assert!(!RED.is_black());
    }

    #[test]
    fn test_from_raw_drops_upper_byte() {
        let color = Color24::from_raw(0xFF12_3456);
        assert_eq!(color.raw(), 0x0012_3456);
        assert_eq!(color.red(), 0x12);
        assert_eq!(color.green(), 0x34);
        assert_eq!(color.blue(), 0x56);
    }

    #[test]
    fn test_rgb_conversion() {
        let rgb: Rgb = Color24::pack(1, 2, 3).into();
        assert_eq!(rgb, Rgb { r: 1, g: 2, b: 3 });
        assert_eq!(Color24::from(Rgb { r: 4, g: 5, b: 6 }), Color24::pack(4, 5, 6));
    }

    #[test]
    fn test_wheel_band_boundaries() {
        assert_eq!(wheel(0), RED);
        assert_eq!(wheel(85), GREEN);
        assert_eq!(wheel(170), BLUE);
        assert_eq!(wheel(255), RED);
    }

    #[test]
    fn test_wheel_ramps() {
        // Halfway between red and green
        assert_eq!(wheel(42), Color24::pack(129, 126, 0));
        // Halfway between green and blue
        assert_eq!(wheel(127), Color24::pack(0, 129, 126));
        // Halfway between blue and red
        assert_eq!(wheel(212), Color24::pack(126, 0, 129));
    }

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(RED, BLUE, 0.0), RED);
        assert_eq!(blend(RED, BLUE, 1.0), BLUE);
        assert_eq!(blend(WHITE, BLACK, 1.0), BLACK);
        assert_eq!(blend(BLACK, WHITE, 0.0), BLACK);
    }

    #[test]
    fn test_blend_truncates() {
        // 127.5 in both directions
        assert_eq!(blend(BLACK, WHITE, 0.5), Color24::pack(127, 127, 127));
        assert_eq!(blend(WHITE, BLACK, 0.5), Color24::pack(127, 127, 127));
        assert_eq!(blend(RED, BLUE, 0.5), Color24::pack(127, 0, 127));
    }

    #[test]
    fn test_blend_channels_are_independent() {
        let from = Color24::pack(10, 200, 50);
        let to = Color24::pack(110, 0, 50);
        assert_eq!(blend(from, to, 0.25), Color24::pack(35, 150, 50));
    }
}
