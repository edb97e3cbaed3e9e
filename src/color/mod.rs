mod utils;

use smart_leds::RGB8;

pub use utils::{blend, wheel};

pub type Rgb = RGB8;

/// Black (all channels off)
pub const BLACK: Color24 = Color24::pack(0, 0, 0);

/// 24-bit packed RGB color (`0xRRGGBB`)
///
/// The upper byte of the backing `u32` is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color24(u32);

impl Color24 {
    /// Pack three channels into a color
    #[allow(clippy::cast_lossless)]
    pub const fn pack(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Extract the `(r, g, b)` channels
    #[allow(clippy::cast_possible_truncation)]
    pub const fn unpack(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }

    /// Create a color from a raw `0xRRGGBB` value
    ///
    /// Bits above the low 24 are discarded.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw & 0x00FF_FFFF)
    }

    /// Raw `0xRRGGBB` value
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        self.unpack().0
    }

    pub const fn green(self) -> u8 {
        self.unpack().1
    }

    pub const fn blue(self) -> u8 {
        self.unpack().2
    }

    pub const fn is_black(self) -> bool {
        self.0 == 0
    }
}

impl From<Rgb> for Color24 {
    fn from(color: Rgb) -> Self {
        Self::pack(color.r, color.g, color.b)
    }
}

impl From<Color24> for Rgb {
    fn from(color: Color24) -> Self {
        let (r, g, b) = color.unpack();
        Rgb { r, g, b }
    }
}
