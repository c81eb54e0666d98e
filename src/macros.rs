//! Logging macros for template-formatted messages.
//!
//! Each macro formats its arguments like `format!` and logs the result with
//! no data attached. Formatting only happens when the level passes the
//! logger's filter.
//!
//! # Examples
//!
//! ```
//! use level_router_log::prelude::*;
//! use level_router_log::info;
//!
//! let logger = Logger::new(InMemoryHandler::new(0));
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a formatted message at any level.
///
/// # Examples
///
/// ```
/// # use level_router_log::prelude::*;
/// # let logger = Logger::new(InMemoryHandler::new(0));
/// use level_router_log::log;
/// log!(logger, Level::INFO, "Simple message");
/// log!(logger, Level::new(1500), "Notice code: {}", 7);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use level_router_log::prelude::*;
/// # let logger = Logger::new(InMemoryHandler::new(0));
/// use level_router_log::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::DEBUG, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::INFO, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use level_router_log::prelude::*;
/// # let logger = Logger::new(InMemoryHandler::new(0));
/// use level_router_log::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::WARNING, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::ERROR, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// Runs the logger's critical hook when the record is dispatched.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::CRITICAL, $($arg)+)
    };
}
