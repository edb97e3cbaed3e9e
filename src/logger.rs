//! Diagnostic logging
//!
//! The renderer reports malformed input through a [`Logger`]. Logging never
//! fails the caller.

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Maximum length of a formatted diagnostic message
pub const MAX_MESSAGE_LEN: usize = 96;

/// Fire-and-forget diagnostic sink
pub trait Logger {
    /// Record a diagnostic message
    fn log_string(&mut self, message: &str);
}

impl<L: Logger + ?Sized> Logger for &mut L {
    fn log_string(&mut self, message: &str) {
        (**self).log_string(message);
    }
}

/// Logger that drops every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log_string(&mut self, _message: &str) {}
}

/// Logger that prints messages over the `esp-println` console
#[cfg(feature = "esp32-log")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintlnLogger;

#[cfg(feature = "esp32-log")]
impl Logger for PrintlnLogger {
    fn log_string(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Format `ERROR: <error>` and pass it to the logger
///
/// Messages longer than [`MAX_MESSAGE_LEN`] are cut short.
pub(crate) fn log_error<L: Logger, E: core::fmt::Display>(logger: &mut L, error: &E) {
    let mut message: String<MAX_MESSAGE_LEN> = String::new();
    // A full buffer keeps what was written so far
    let _ = write!(message, "ERROR: {}", error);
    logger.log_string(&message);
}
