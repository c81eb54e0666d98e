//! # Level Router Log
//!
//! A synchronous structured logging facade. Records are built by a
//! [`Logger`], filtered by a runtime-adjustable minimum level and passed to
//! pluggable handlers, optionally routed per level.
//!
//! ## Features
//!
//! - **Leveled Records**: Numeric severities with canonical names and
//!   key/value data for message templating
//! - **Level Routing**: Fan records out to per-level handlers with a fallback
//! - **Leaf Handlers**: Bounded in-memory buffer, lazily opened file,
//!   generic writer and console
//! - **Thread Safe**: Every handler guards its own state
//! - **Synchronous**: Every handler result is known before the call returns
//!
//! ## Example
//!
//! ```
//! use level_router_log::prelude::*;
//! use std::sync::Arc;
//!
//! let alerts = Arc::new(InMemoryHandler::new(100));
//! let router = LevelGroupedHandler::new(
//!     WriterHandler::new(std::io::sink()),
//!     vec![LevelGroup::new([Level::CRITICAL], Arc::clone(&alerts))],
//! );
//!
//! let logger = Logger::new(router).with_failure_handler(|record, err| {
//!     eprintln!("could not log '{}': {}", record.message, err);
//! });
//!
//! logger.info("request {id} served", &["id", "42"]);
//! level_router_log::critical!(logger, "database {} unreachable", "primary");
//!
//! assert_eq!(alerts.pop().message, "database primary unreachable");
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        BasicFormatter, Clock, Data, ErrorWrappedLogger, FixedClock, FormattedRecord, Formatter,
        Handler, Level, LevelName, Logger, LoggerBuilder, LoggerError, Record, Result,
        SystemClock, TimestampFormat,
    };
    #[cfg(feature = "console")]
    pub use crate::handlers::ConsoleHandler;
    pub use crate::handlers::{
        FileHandler, InMemoryHandler, LevelGroup, LevelGroupedHandler, WriterHandler,
    };
}

pub use core::{
    sort_levels, BasicFormatter, Clock, CriticalCallback, CriticalLogger, Data, DebugLogger,
    ErrorLogger, ErrorWrappedLogger, FailureCallback, Filesystem, FixedClock, FormattedRecord,
    Formatter, Handler, InfoLogger, Level, LevelName, LogFile, Logger, LoggerBuilder, LoggerError,
    OpenFlags, OsFilesystem, Record, Result, SystemClock, TimestampFormat, WarningLogger,
    DEFAULT_FILE_PERMISSIONS,
};
#[cfg(feature = "console")]
pub use handlers::ConsoleHandler;
pub use handlers::{FileHandler, InMemoryHandler, LevelGroup, LevelGroupedHandler, WriterHandler};
