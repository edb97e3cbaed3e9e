mod tests {
    use proptest::prelude::*;
    use strip_renderer::color::{Color24, blend, wheel};
    use strip_renderer::current::estimate_current;

    fn any_color() -> impl Strategy<Value = Color24> {
        any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color24::pack(r, g, b))
    }

    proptest! {
        #[test]
        fn pack_unpack_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            prop_assert_eq!(Color24::pack(r, g, b).unpack(), (r, g, b));
        }

        #[test]
        fn blend_with_itself_is_identity(color in any_color(), factor in 0.0f32..=1.0) {
            prop_assert_eq!(blend(color, color, factor), color);
        }

        #[test]
        fn blend_hits_both_endpoints(a in any_color(), b in any_color()) {
            prop_assert_eq!(blend(a, b, 0.0), a);
            prop_assert_eq!(blend(a, b, 1.0), b);
        }

        #[test]
        fn blend_stays_between_endpoints(a in any_color(), b in any_color(), factor in 0.0f32..=1.0) {
            let (r1, g1, b1) = a.unpack();
            let (r2, g2, b2) = b.unpack();
            let (r, g, bl) = blend(a, b, factor).unpack();
            prop_assert!(r >= r1.min(r2) && r <= r1.max(r2));
            prop_assert!(g >= g1.min(g2) && g <= g1.max(g2));
            prop_assert!(bl >= b1.min(b2) && bl <= b1.max(b2));
        }

        #[test]
        fn wheel_channels_sum_to_full(position in any::<u8>()) {
            let (r, g, b) = wheel(position).unpack();
            prop_assert_eq!(u16::from(r) + u16::from(g) + u16::from(b), 255);
        }

        #[test]
        fn estimate_never_exceeds_full_white(color in any_color(), brightness in any::<u8>()) {
            prop_assert!(estimate_current(color, brightness) <= 60);
        }

        #[test]
        fn black_draws_nothing(brightness in any::<u8>()) {
            prop_assert_eq!(estimate_current(Color24::pack(0, 0, 0), brightness), 0);
        }
    }
}
