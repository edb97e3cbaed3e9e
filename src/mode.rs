//! Render modes
//!
//! A mode decides which color ends up in the target buffer when a pixel is
//! set. In [`RenderMode::RainbowSweep`] the caller's color is ignored and a
//! traveling rainbow sample is written instead.

use crate::color::{Color24, wheel};

/// Number of full hue cycles across the strip in rainbow sweep mode
pub const RAINBOW_CYCLES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Pixels take the color passed by the caller
    #[default]
    Fixed,
    /// Pixels take a rainbow sample shifted by the given phase
    RainbowSweep(u8),
}

impl RenderMode {
    /// Build a mode from an optional hue-shift phase
    pub const fn from_phase(phase: Option<u8>) -> Self {
        match phase {
            Some(phase) => Self::RainbowSweep(phase),
            None => Self::Fixed,
        }
    }

    /// Hue-shift phase, if the rainbow sweep is active
    pub const fn phase(self) -> Option<u8> {
        match self {
            Self::Fixed => None,
            Self::RainbowSweep(phase) => Some(phase),
        }
    }

    /// Color to store for pixel `index` of a `len` pixel strip
    ///
    /// An empty strip has no sweep, so `requested` is returned unchanged.
    pub fn resolve(self, index: usize, len: usize, requested: Color24) -> Color24 {
        match self {
            Self::RainbowSweep(phase) if len > 0 => wheel(sweep_position(index, len, phase)),
            _ => requested,
        }
    }
}

/// Wheel position of pixel `index` in the rainbow sweep; `len` is non-zero
#[allow(clippy::cast_possible_truncation)]
fn sweep_position(index: usize, len: usize, phase: u8) -> u8 {
    ((index * 256 * RAINBOW_CYCLES / len + usize::from(phase)) % 256) as u8
}
