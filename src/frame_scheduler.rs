//! Frame pacing for the render loop
//!
//! Portable: no async and no platform timers. The caller supplies the current
//! time and sleeps for the returned duration between ticks.

use embassy_time::{Duration, Instant};

use crate::logger::Logger;
use crate::renderer::{FrameReport, StripRenderer};
use crate::sink::PixelSink;

/// Default interval between two draws
pub const DEFAULT_DRAW_PERIOD: Duration = Duration::from_millis(10);

/// Default share of the remaining distance covered in one frame
pub const DEFAULT_SMOOTHING_FACTOR: f32 = 0.2;

/// Result of a frame tick
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero when behind schedule)
    pub sleep_duration: Duration,
    /// Report of the drawn frame, `None` if the draw was rejected
    pub frame: Option<FrameReport>,
}

/// Drives a [`StripRenderer`] at a fixed cadence
///
/// Every tick draws one smoothed frame. Mutations made through
/// [`renderer_mut`](Self::renderer_mut) between ticks show up in the next
/// frame. When the caller falls more than two periods behind, the schedule
/// restarts from the current time instead of bursting to catch up.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer);
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()));
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<S, L, const MAX_LEDS: usize> {
    renderer: StripRenderer<S, L, MAX_LEDS>,
    smoothing_factor: f32,
    frame_duration: Duration,
    next_frame: Instant,
}

impl<S: PixelSink, L: Logger, const MAX_LEDS: usize> FrameScheduler<S, L, MAX_LEDS> {
    /// Create a scheduler with the default period and smoothing factor
    pub fn new(renderer: StripRenderer<S, L, MAX_LEDS>) -> Self {
        Self {
            renderer,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            frame_duration: DEFAULT_DRAW_PERIOD,
            next_frame: Instant::from_millis(0),
        }
    }

    #[must_use]
    pub fn with_frame_duration(mut self, frame_duration: Duration) -> Self {
        self.frame_duration = frame_duration;
        self
    }

    /// Set the smoothing factor passed to every draw
    ///
    /// Values outside `[0.0, 1.0]` make every draw fail and get logged.
    #[must_use]
    pub fn with_smoothing_factor(mut self, factor: f32) -> Self {
        self.smoothing_factor = factor;
        self
    }

    /// Process one frame and return timing information
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        let frame = self.renderer.draw_smooth(self.smoothing_factor).ok();

        self.next_frame += self.frame_duration;
        let sleep_duration = if self.next_frame > now {
            self.next_frame.duration_since(now)
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            frame,
        }
    }

    pub fn renderer(&self) -> &StripRenderer<S, L, MAX_LEDS> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut StripRenderer<S, L, MAX_LEDS> {
        &mut self.renderer
    }

    /// Release the renderer
    pub fn into_renderer(self) -> StripRenderer<S, L, MAX_LEDS> {
        self.renderer
    }
}
