//! Core logger types and traits

pub mod clock;
pub mod data;
pub mod error;
pub mod filesystem;
pub mod formatter;
pub mod handler;
pub mod level;
pub mod logger;
pub mod record;
pub mod timestamp;
pub mod views;

pub use clock::{Clock, FixedClock, SystemClock};
pub use data::Data;
pub use error::{LoggerError, Result};
pub use filesystem::{Filesystem, LogFile, OpenFlags, OsFilesystem, DEFAULT_FILE_PERMISSIONS};
pub use formatter::{BasicFormatter, Formatter};
pub use handler::Handler;
pub use level::{sort_levels, Level, LevelName};
pub use logger::{CriticalCallback, FailureCallback, Logger, LoggerBuilder};
pub use record::{FormattedRecord, Record};
pub use timestamp::TimestampFormat;
pub use views::{
    CriticalLogger, DebugLogger, ErrorLogger, ErrorWrappedLogger, InfoLogger, WarningLogger,
};
