//! Pixel sinks
//!
//! A [`PixelSink`] is the device (or simulation) the renderer hands its frames
//! to. [`SmartLedsSink`] adapts any `smart-leds` driver.

use smart_leds::{SmartLedsWrite, brightness};

use crate::color::{BLACK, Color24, Rgb};

/// Physical or virtual LED strip driver
///
/// Implement this trait to support different hardware platforms.
/// The renderer is generic over this trait.
pub trait PixelSink {
    /// Number of pixels the driver addresses
    fn num_pixels(&self) -> usize;

    /// Buffer the color of one pixel, shown on the next [`show`](Self::show)
    fn set_pixel_color(&mut self, index: usize, color: Color24);

    /// Set the global brightness applied when the frame is shown
    fn set_brightness(&mut self, brightness: u8);

    /// Present the buffered frame
    ///
    /// May block for the duration of the transmission.
    fn show(&mut self);

    /// Set every buffered pixel to black
    fn clear(&mut self);
}

/// Frame buffer in front of a `smart-leds` driver
///
/// Colors are buffered until [`PixelSink::show`], which writes the frame
/// scaled by the current brightness. Failed writes are counted and the frame
/// is dropped.
pub struct SmartLedsSink<W, const MAX_LEDS: usize> {
    writer: W,
    frame: [Rgb; MAX_LEDS],
    len: usize,
    brightness: u8,
    dropped_frames: u32,
}

impl<W, const MAX_LEDS: usize> SmartLedsSink<W, MAX_LEDS>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    /// Create a sink for a strip of `len` pixels
    ///
    /// `len` is capped to `MAX_LEDS`.
    pub fn new(writer: W, len: usize) -> Self {
        Self {
            writer,
            frame: [Rgb::default(); MAX_LEDS],
            len: len.min(MAX_LEDS),
            brightness: 255,
            dropped_frames: 0,
        }
    }

    /// Brightness applied on the next write
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Buffered frame
    pub fn frame(&self) -> &[Rgb] {
        &self.frame[..self.len]
    }

    /// Number of frames the driver failed to write
    pub const fn dropped_frames(&self) -> u32 {
        self.dropped_frames
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Release the wrapped driver
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const MAX_LEDS: usize> PixelSink for SmartLedsSink<W, MAX_LEDS>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn num_pixels(&self) -> usize {
        self.len
    }

    fn set_pixel_color(&mut self, index: usize, color: Color24) {
        if let Some(pixel) = self.frame[..self.len].get_mut(index) {
            *pixel = color.into();
        }
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn show(&mut self) {
        let pixels = self.frame[..self.len].iter().copied();
        if self.writer.write(brightness(pixels, self.brightness)).is_err() {
            self.dropped_frames = self.dropped_frames.wrapping_add(1);
        }
    }

    fn clear(&mut self) {
        self.frame.fill(BLACK.into());
    }
}
