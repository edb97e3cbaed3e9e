#![no_std]

pub mod color;
pub mod current;
pub mod error;
pub mod frame_scheduler;
pub mod logger;
pub mod mode;
pub mod renderer;
pub mod sink;

pub use color::{BLACK, Color24, Rgb, blend, wheel};
pub use current::{estimate_current, limit_brightness};
pub use error::RenderError;
pub use frame_scheduler::FrameScheduler;
pub use logger::{Logger, NoopLogger};
pub use mode::RenderMode;
pub use renderer::{FrameReport, StripConfig, StripRenderer};
pub use sink::{PixelSink, SmartLedsSink};

#[cfg(feature = "esp32-log")]
pub use logger::PrintlnLogger;

pub use embassy_time::{Duration, Instant};
