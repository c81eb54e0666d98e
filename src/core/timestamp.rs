//! Timestamp rendering for formatted log lines

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// How a formatter renders `Record::created_at`
///
/// # Examples
///
/// ```
/// use level_router_log::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// let timestamp = format.format(&Utc::now());
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Seconds since the epoch
    Unix,

    /// Milliseconds since the epoch
    UnixMillis,

    /// Any strftime-compatible format string
    ///
    /// An invalid string renders as [`TimestampFormat::Iso8601`]; use
    /// [`TimestampFormat::custom`] to reject it up front.
    Custom(String),
}

impl TimestampFormat {
    /// Create a custom format, rejecting unknown or malformed specifiers
    ///
    /// ```
    /// use level_router_log::{LoggerError, TimestampFormat};
    ///
    /// assert!(TimestampFormat::custom("%H:%M").is_ok());
    /// assert!(matches!(
    ///     TimestampFormat::custom("%Q"),
    ///     Err(LoggerError::InvalidConfiguration { .. })
    /// ));
    /// ```
    pub fn custom(format_str: impl Into<String>) -> Result<Self> {
        let format_str = format_str.into();
        if StrftimeItems::new(&format_str).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "TimestampFormat",
                format!("invalid strftime format '{}'", format_str),
            ));
        }
        Ok(TimestampFormat::Custom(format_str))
    }

    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                match write!(out, "{}", datetime.format(format_str)) {
                    Ok(()) => out,
                    Err(_) => TimestampFormat::Iso8601.format(datetime),
                }
            }
        }
    }
}

impl From<&str> for TimestampFormat {
    fn from(format_str: &str) -> Self {
        TimestampFormat::Custom(format_str.to_string())
    }
}
