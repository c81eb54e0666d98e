//! Log record structure

use super::data::Data;
use super::level::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// One log event
///
/// Handlers only ever receive `&Record`, so a built record is never mutated
/// on its way through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub level: Level,
    pub message: String,
    pub data: Data,
    pub created_at: DateTime<Utc>,
}

impl Record {
    pub fn new(level: Level, message: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            level,
            message: message.into(),
            data: Data::new(),
            created_at,
        }
    }

    pub fn with_data(mut self, data: Data) -> Self {
        self.data = data;
        self
    }
}

/// A record together with the message produced for it by a formatter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedRecord {
    pub record: Record,
    pub formatted_message: String,
}

impl FormattedRecord {
    pub fn new(record: Record, formatted_message: impl Into<String>) -> Self {
        Self {
            record,
            formatted_message: formatted_message.into(),
        }
    }
}

impl Deref for FormattedRecord {
    type Target = Record;

    fn deref(&self) -> &Record {
        &self.record
    }
}
