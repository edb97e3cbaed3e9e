use core::fmt;

/// Errors reported by [`StripRenderer`](crate::StripRenderer)
///
/// None of them leave the renderer in a broken state; the failed call simply
/// has no effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderError {
    /// Pixel index is not on the strip
    PixelOutOfRange { index: usize, len: usize },
    /// Smoothing factor is outside `[0.0, 1.0]`
    InvalidFactor(f32),
    /// Requested strip is longer than the renderer buffers
    CapacityExceeded { requested: usize, capacity: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutOfRange { index, len } => {
                write!(f, "pixel out of range: {index} (strip has {len})")
            }
            Self::InvalidFactor(factor) => write!(f, "factor out of range: {factor}"),
            Self::CapacityExceeded {
                requested,
                capacity,
            } => write!(f, "strip too long: {requested} leds (capacity {capacity})"),
        }
    }
}

impl core::error::Error for RenderError {}
