use super::Color24;

/// Width of one band on the color wheel
const WHEEL_BAND: u8 = 85;

/// Map a cyclic position to a color on the red - green - blue - red wheel
///
/// `wheel(0)` is pure red, `wheel(85)` pure green and `wheel(170)` pure blue.
/// Positions in between ramp two channels in opposite directions while the
/// third stays off.
pub const fn wheel(position: u8) -> Color24 {
    let inverted = 255 - position;
    if inverted < WHEEL_BAND {
        return Color24::pack(255 - inverted * 3, 0, inverted * 3);
    }
    if inverted < WHEEL_BAND * 2 {
        let step = inverted - WHEEL_BAND;
        return Color24::pack(0, step * 3, 255 - step * 3);
    }
    let step = inverted - WHEEL_BAND * 2;
    Color24::pack(step * 3, 255 - step * 3, 0)
}

/// Linearly interpolate between two colors
///
/// Each channel is computed as `a + (b - a) * factor` and truncated, so a
/// fractional result always lands on the channel value closer to zero.
/// `factor` is expected in `[0.0, 1.0]`.
///
/// # Arguments
/// * `a` - Start color (returned for `factor == 0.0`)
/// * `b` - End color (returned for `factor == 1.0`)
/// * `factor` - Position on the path from `a` to `b`
#[inline]
pub fn blend(a: Color24, b: Color24, factor: f32) -> Color24 {
    let (r1, g1, b1) = a.unpack();
    let (r2, g2, b2) = b.unpack();
    Color24::pack(
        blend_channel(r1, r2, factor),
        blend_channel(g1, g2, factor),
        blend_channel(b1, b2, factor),
    )
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend_channel(from: u8, to: u8, factor: f32) -> u8 {
    let from = f32::from(from);
    (from + (f32::from(to) - from) * factor) as u8
}
