//! Narrow capability views over a [`Logger`]
//!
//! Each view borrows a logger and exposes only part of its API, so a
//! component can be handed exactly the severity it is allowed to emit.

use super::{level::Level, logger::Logger};
use std::fmt;

macro_rules! severity_view {
    ($(#[$meta:meta])* $name:ident, $level:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            logger: &'a Logger,
        }

        impl<'a> $name<'a> {
            pub fn new(logger: &'a Logger) -> Self {
                Self { logger }
            }

            #[inline]
            pub fn log(&self, message: impl Into<String>, values: &[&str]) {
                self.logger.log($level, message, values);
            }

            #[inline]
            pub fn log_fmt(&self, args: fmt::Arguments<'_>) {
                self.logger.log_fmt($level, args);
            }
        }
    };
}

severity_view!(
    /// Debug-only view
    DebugLogger,
    Level::DEBUG
);
severity_view!(
    /// Info-only view
    InfoLogger,
    Level::INFO
);
severity_view!(
    /// Warning-only view
    WarningLogger,
    Level::WARNING
);
severity_view!(
    /// Error-only view
    ErrorLogger,
    Level::ERROR
);
severity_view!(
    /// Critical-only view; goes through the logger's critical hook
    CriticalLogger,
    Level::CRITICAL
);

impl Logger {
    pub fn debug_view(&self) -> DebugLogger<'_> {
        DebugLogger::new(self)
    }

    pub fn info_view(&self) -> InfoLogger<'_> {
        InfoLogger::new(self)
    }

    pub fn warning_view(&self) -> WarningLogger<'_> {
        WarningLogger::new(self)
    }

    pub fn error_view(&self) -> ErrorLogger<'_> {
        ErrorLogger::new(self)
    }

    pub fn critical_view(&self) -> CriticalLogger<'_> {
        CriticalLogger::new(self)
    }
}

/// Logs failed results at error or critical severity
///
/// Only `Err` values are logged; `Ok` values are ignored.
///
/// # Example
///
/// ```
/// use level_router_log::prelude::*;
/// use std::sync::Arc;
///
/// let buffer = Arc::new(InMemoryHandler::new(0));
/// let logger = Logger::new(Arc::clone(&buffer));
/// let reporter = ErrorWrappedLogger::new(&logger);
///
/// let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));
/// reporter.on_error_wrapped(&result, "saving report");
///
/// assert_eq!(buffer.pop().message, "saving report: disk full");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ErrorWrappedLogger<'a> {
    logger: &'a Logger,
}

impl<'a> ErrorWrappedLogger<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self { logger }
    }

    /// Log the error's message with `values` as data
    pub fn on_error<T, E: fmt::Display>(&self, result: &Result<T, E>, values: &[&str]) {
        self.on(Level::ERROR, result, values);
    }

    /// Log `"{context}: {error}"`
    pub fn on_error_wrapped<T, E: fmt::Display>(&self, result: &Result<T, E>, context: impl fmt::Display) {
        self.on_wrapped(Level::ERROR, result, context);
    }

    pub fn on_critical<T, E: fmt::Display>(&self, result: &Result<T, E>, values: &[&str]) {
        self.on(Level::CRITICAL, result, values);
    }

    pub fn on_critical_wrapped<T, E: fmt::Display>(
        &self,
        result: &Result<T, E>,
        context: impl fmt::Display,
    ) {
        self.on_wrapped(Level::CRITICAL, result, context);
    }

    fn on<T, E: fmt::Display>(&self, level: Level, result: &Result<T, E>, values: &[&str]) {
        if let Err(err) = result {
            self.logger.log(level, err.to_string(), values);
        }
    }

    fn on_wrapped<T, E: fmt::Display>(&self, level: Level, result: &Result<T, E>, context: impl fmt::Display) {
        if let Err(err) = result {
            self.logger.log_fmt(level, format_args!("{}: {}", context, err));
        }
    }
}
