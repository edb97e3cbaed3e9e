//! Linear current model and brightness limiting
//!
//! Every pixel is estimated with the same model: each channel draws up to
//! [`MILLIAMPS_PER_CHANNEL`] at full intensity and full brightness. All math
//! is integer and truncating, in two steps (channel sum, then brightness), so
//! estimates match the values reported by deployed strips bit for bit.

use crate::color::Color24;

/// Current drawn by one fully lit channel at full brightness (mA)
pub const MILLIAMPS_PER_CHANNEL: u32 = 20;

/// Estimate the current (mA) of one pixel at the given brightness
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn estimate_current(color: Color24, brightness: u8) -> u16 {
    let (r, g, b) = color.unpack();
    let mut estimated = MILLIAMPS_PER_CHANNEL * r as u32
        + MILLIAMPS_PER_CHANNEL * g as u32
        + MILLIAMPS_PER_CHANNEL * b as u32;
    estimated /= 255;
    estimated = (estimated * brightness as u32) / 255;
    // At most 3 * 20 mA
    estimated as u16
}

/// Brightness to send to the strip for a frame drawing `total_current` mA
///
/// Returns `brightness` unchanged while the frame stays within `limit`,
/// otherwise scales it by `limit / total_current`, truncated.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn limit_brightness(brightness: u8, total_current: u32, limit: u16) -> u8 {
    if total_current <= u32::from(limit) {
        return brightness;
    }
    (f32::from(brightness) * f32::from(limit) / total_current as f32) as u8
}
