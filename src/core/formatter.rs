//! Record formatting

use super::record::{FormattedRecord, Record};
use super::timestamp::TimestampFormat;

/// Produces the final text of a record
///
/// Handlers configured with a formatter write
/// [`FormattedRecord::formatted_message`] instead of the raw message.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &Record) -> FormattedRecord;
}

impl<F: Formatter + ?Sized> Formatter for std::sync::Arc<F> {
    fn format(&self, record: &Record) -> FormattedRecord {
        (**self).format(record)
    }
}

/// Message text a handler should write for `record`
pub(crate) fn render_message(formatter: Option<&dyn Formatter>, record: &Record) -> String {
    match formatter {
        Some(formatter) => formatter.format(record).formatted_message,
        None => record.message.clone(),
    }
}

/// Plain-text formatter
///
/// Renders `app | time | LEVEL | message`, with `{key}` placeholders in the
/// message replaced from the record data, followed by ` | k:v k:v` when the
/// record carries data.
///
/// # Example
///
/// ```
/// use level_router_log::prelude::*;
/// use chrono::{TimeZone, Utc};
///
/// let formatter = BasicFormatter::new("api", TimestampFormat::from("%H:%M"));
/// let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 0).unwrap();
/// let record = Record::new(Level::INFO, "hello {who}", at)
///     .with_data(Data::from_pairs(&["who", "bob"]));
///
/// assert_eq!(
///     formatter.format(&record).formatted_message,
///     "api | 09:15 | INFO | hello bob | who:bob"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct BasicFormatter {
    app_name: String,
    timestamp_format: TimestampFormat,
}

impl BasicFormatter {
    pub fn new(app_name: impl Into<String>, timestamp_format: TimestampFormat) -> Self {
        Self {
            app_name: app_name.into(),
            timestamp_format,
        }
    }

    fn create_formatted_message(&self, record: &Record) -> String {
        let level = record
            .level
            .name()
            .map(|name| name.as_str().to_uppercase())
            .unwrap_or_else(|_| "UNKNOWN".to_string());

        let mut out = format!(
            "{} | {} | {} | {}",
            self.app_name,
            self.timestamp_format.format(&record.created_at),
            level,
            record.data.interpolate(&record.message)
        );

        if !record.data.is_empty() {
            out.push_str(" | ");
            out.push_str(&record.data.render_sorted());
        }

        out
    }
}

impl Formatter for BasicFormatter {
    fn format(&self, record: &Record) -> FormattedRecord {
        FormattedRecord::new(record.clone(), self.create_formatted_message(record))
    }
}
