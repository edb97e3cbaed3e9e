#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use strip_renderer::{Color24, Logger, PixelSink, StripConfig, StripRenderer};

/// Calls received by [`MockSink`], in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkEvent {
    SetPixel(usize, Color24),
    Brightness(u8),
    Show,
    Clear,
}

/// Sink that records every call
#[derive(Debug, Default)]
pub struct MockSink {
    pub pixels: Vec<Color24>,
    pub brightness: u8,
    pub events: Vec<SinkEvent>,
}

impl MockSink {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![Color24::default(); len],
            brightness: 0,
            events: Vec::new(),
        }
    }

    pub fn shows(&self) -> usize {
        self.events
            .iter()
            .filter(|event| **event == SinkEvent::Show)
            .count()
    }
}

impl PixelSink for MockSink {
    fn num_pixels(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel_color(&mut self, index: usize, color: Color24) {
        self.pixels[index] = color;
        self.events.push(SinkEvent::SetPixel(index, color));
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
        self.events.push(SinkEvent::Brightness(brightness));
    }

    fn show(&mut self) {
        self.events.push(SinkEvent::Show);
    }

    fn clear(&mut self) {
        self.pixels.fill(Color24::default());
        self.events.push(SinkEvent::Clear);
    }
}

/// Logger that keeps every message
#[derive(Debug, Default)]
pub struct RecordingLogger {
    pub messages: Vec<String>,
}

impl Logger for RecordingLogger {
    fn log_string(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

/// Delay that only sums up the requested time
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

pub type TestRenderer = StripRenderer<MockSink, RecordingLogger, 16>;

/// Renderer over a recording sink with default brightness and limit
pub fn renderer(led_count: usize) -> TestRenderer {
    let config = StripConfig {
        led_count,
        ..StripConfig::default()
    };
    StripRenderer::new(MockSink::new(led_count), RecordingLogger::default(), &config)
        .expect("strip fits")
}
