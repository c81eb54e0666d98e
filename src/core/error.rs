//! Error types for the logger system

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Numeric level with no canonical name
    #[error("unknown level {0}")]
    UnknownLevel(u32),

    /// Level name outside the fixed enumeration
    #[error("unknown level name '{0}'")]
    UnknownLevelName(String),

    /// In-memory buffer is full
    #[error("InMemoryHandler - number of records exceeded buffer limit ({limit} records)")]
    BufferLimitExceeded { limit: usize },

    /// Log file could not be opened
    #[error("unable to open log file '{}': {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Log file was opened but writing to it failed
    #[error("unable to write log to file '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Closing the log file failed
    #[error("unable to close log file '{}': {source}", path.display())]
    FileClose {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Handler was closed and no longer accepts records
    #[error("file handler for '{}' is closed", path.display())]
    HandlerClosed { path: PathBuf },

    /// Fallback handler of a level router failed
    #[error("LevelGroupedHandler - fallback handler returned an error: {0}")]
    FallbackFailed(#[source] Box<LoggerError>),

    /// One of the handlers registered for a level failed
    #[error("LevelGroupedHandler - one of the handlers returned an error: {0}")]
    HandlerFailed(#[source] Box<LoggerError>),

    /// Generic writer sink failed
    #[error("WriterHandler - error occurred while handling log: {source}")]
    WriterError {
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a buffer overflow error naming the configured limit
    pub fn buffer_limit(limit: usize) -> Self {
        LoggerError::BufferLimitExceeded { limit }
    }

    /// Create a file open error
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a file write error
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoggerError::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a file close error
    pub fn file_close(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoggerError::FileClose {
            path: path.into(),
            source,
        }
    }

    /// Create a closed handler error
    pub fn handler_closed(path: impl Into<PathBuf>) -> Self {
        LoggerError::HandlerClosed { path: path.into() }
    }

    /// Wrap an error raised by a router's fallback handler
    pub fn fallback_failed(source: LoggerError) -> Self {
        LoggerError::FallbackFailed(Box::new(source))
    }

    /// Wrap an error raised by a handler registered in a router
    pub fn handler_failed(source: LoggerError) -> Self {
        LoggerError::HandlerFailed(Box::new(source))
    }

    /// Create a writer sink error
    pub fn writer(source: std::io::Error) -> Self {
        LoggerError::WriterError { source }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
