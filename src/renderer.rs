use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Color24, blend};
use crate::current::{estimate_current, limit_brightness};
use crate::error::RenderError;
use crate::logger::{Logger, log_error};
use crate::mode::RenderMode;
use crate::sink::PixelSink;

/// Brightness of a freshly created renderer
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Current limit of a freshly created renderer (mA), high enough to never engage
pub const DEFAULT_CURRENT_LIMIT: u16 = 9999;

/// Strip length of the reference clock deployment
pub const REFERENCE_LED_COUNT: usize = 156;

/// Current limit used by the reference clock deployment (mA)
pub const REFERENCE_CURRENT_LIMIT: u16 = 2000;

/// Color of the pixel walking along the strip during the self test
pub const SELF_TEST_COLOR: Color24 = Color24::pack(128, 128, 128);

const SELF_TEST_STEP_MS: u32 = 10;
const SELF_TEST_HOLD_MS: u32 = 200;

/// Configuration for the strip renderer
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// Number of pixels on the strip, fixed for the renderer lifetime
    pub led_count: usize,
    /// Initial brightness
    pub brightness: u8,
    /// Initial current limit (mA)
    pub current_limit: u16,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            led_count: REFERENCE_LED_COUNT,
            brightness: DEFAULT_BRIGHTNESS,
            current_limit: DEFAULT_CURRENT_LIMIT,
        }
    }
}

/// Outcome of one drawn frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Estimated current of the frame at the stored brightness (mA)
    pub total_current: u32,
    /// Brightness sent to the sink for this frame
    pub brightness: u8,
    /// Whether the current limit lowered the brightness
    pub throttled: bool,
}

/// Current-limited strip renderer
///
/// Keeps the shown colors (`current`) and the desired colors (`target`) of
/// every pixel. Each draw moves `current` toward `target`, estimates the
/// current of the result and lowers the brightness of that frame if it would
/// exceed the configured limit. The stored brightness is never touched by the
/// limiter.
///
/// `MAX_LEDS` is the buffer capacity; the strip length is chosen at runtime
/// and may be shorter.
pub struct StripRenderer<S, L, const MAX_LEDS: usize> {
    // External dependencies
    sink: S,
    logger: L,

    // Configuration
    len: usize,
    brightness: u8,
    current_limit: u16,
    mode: RenderMode,

    // Frame state
    current: [Color24; MAX_LEDS],
    target: [Color24; MAX_LEDS],
    last_frame: Option<FrameReport>,
}

impl<S: PixelSink, L: Logger, const MAX_LEDS: usize> StripRenderer<S, L, MAX_LEDS> {
    /// Create a renderer with all pixels black
    ///
    /// Fails if `config.led_count` does not fit in `MAX_LEDS`.
    pub fn new(sink: S, logger: L, config: &StripConfig) -> Result<Self, RenderError> {
        if config.led_count > MAX_LEDS {
            return Err(RenderError::CapacityExceeded {
                requested: config.led_count,
                capacity: MAX_LEDS,
            });
        }
        Ok(Self {
            sink,
            logger,
            len: config.led_count,
            brightness: config.brightness,
            current_limit: config.current_limit,
            mode: RenderMode::Fixed,
            current: [BLACK; MAX_LEDS],
            target: [BLACK; MAX_LEDS],
            last_frame: None,
        })
    }

    /// Push the stored brightness to the sink
    pub fn init(&mut self) {
        self.sink.set_brightness(self.brightness);
    }

    /// Set the target color of a pixel
    ///
    /// Shown on the strip by the next draw. While a rainbow sweep is active
    /// `color` is ignored and the sweep color of the pixel is stored instead.
    /// An index outside the strip is logged and leaves the renderer untouched.
    pub fn set_pixel(&mut self, index: usize, color: Color24) -> Result<(), RenderError> {
        if index >= self.len {
            return Err(self.report(RenderError::PixelOutOfRange {
                index,
                len: self.len,
            }));
        }
        self.target[index] = self.mode.resolve(index, self.len, color);
        Ok(())
    }

    /// Set every target pixel to black
    pub fn flush(&mut self) {
        self.target.fill(BLACK);
    }

    /// Jump every pixel to its target and show the frame
    pub fn draw_instant(&mut self) -> FrameReport {
        self.draw(1.0)
    }

    /// Move every pixel `factor` of the way to its target and show the frame
    ///
    /// A factor outside `[0.0, 1.0]` is logged and nothing is drawn.
    pub fn draw_smooth(&mut self, factor: f32) -> Result<FrameReport, RenderError> {
        if !(0.0..=1.0).contains(&factor) {
            return Err(self.report(RenderError::InvalidFactor(factor)));
        }
        Ok(self.draw(factor))
    }

    /// Set the stored brightness and forward it to the sink right away
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
        self.sink.set_brightness(brightness);
    }

    /// Stored brightness, before any current limiting
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the current limit (mA), applied from the next draw
    pub fn set_current_limit(&mut self, limit: u16) {
        self.current_limit = limit;
    }

    pub const fn current_limit(&self) -> u16 {
        self.current_limit
    }

    /// Enable the rainbow sweep with the given phase, or disable it with `None`
    ///
    /// Only later [`set_pixel`](Self::set_pixel) calls are affected.
    pub fn set_dynamic_color_shift_phase(&mut self, phase: Option<u8>) {
        self.mode = RenderMode::from_phase(phase);
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    pub const fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Walk a single lit pixel along the strip, then show a blank frame
    ///
    /// Drives the sink directly: the color buffers are left alone.
    pub fn run_self_test<D: DelayNs>(&mut self, delay: &mut D) {
        let count = self.sink.num_pixels();
        for index in 0..count {
            if index > 0 {
                self.sink.set_pixel_color(index - 1, BLACK);
            }
            self.sink.set_pixel_color(index, SELF_TEST_COLOR);
            self.sink.show();
            delay.delay_ms(SELF_TEST_STEP_MS);
        }

        self.sink.clear();
        self.sink.show();
        delay.delay_ms(SELF_TEST_HOLD_MS);
    }

    /// Number of pixels on the strip
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Colors shown by the last draw
    pub fn current(&self) -> &[Color24] {
        &self.current[..self.len]
    }

    /// Colors the strip is moving toward
    pub fn target(&self) -> &[Color24] {
        &self.target[..self.len]
    }

    /// Report of the last drawn frame
    pub const fn last_frame(&self) -> Option<FrameReport> {
        self.last_frame
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Blend, estimate, limit and show one frame
    fn draw(&mut self, factor: f32) -> FrameReport {
        let mut total_current: u32 = 0;
        let pixels = self.current[..self.len]
            .iter_mut()
            .zip(&self.target[..self.len]);
        for (index, (current, target)) in pixels.enumerate() {
            let color = blend(*current, *target, factor);
            self.sink.set_pixel_color(index, color);
            *current = color;

            total_current += u32::from(estimate_current(color, self.brightness));
        }

        let throttled = total_current > u32::from(self.current_limit);
        let brightness = limit_brightness(self.brightness, total_current, self.current_limit);
        #[cfg(feature = "esp32-log")]
        if throttled {
            println!(
                "[StripRenderer.draw] current limit reached: {} mA > {} mA, brightness {} -> {}",
                total_current, self.current_limit, self.brightness, brightness
            );
        }
        self.sink.set_brightness(brightness);
        self.sink.show();

        let report = FrameReport {
            total_current,
            brightness,
            throttled,
        };
        self.last_frame = Some(report);
        report
    }

    /// Log an error and hand it back
    fn report(&mut self, error: RenderError) -> RenderError {
        log_error(&mut self.logger, &error);
        error
    }
}
