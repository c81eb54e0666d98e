//! In-memory handler implementation

use crate::core::{Handler, LoggerError, Record, Result};
use parking_lot::Mutex;

/// Bounded stack of records
///
/// A limit of `0` means unbounded. Records come back out of [`pop`] in
/// reverse order of arrival.
///
/// [`pop`]: InMemoryHandler::pop
#[derive(Debug, Default)]
pub struct InMemoryHandler {
    records: Mutex<Vec<Record>>,
    limit: usize,
}

impl InMemoryHandler {
    pub fn new(limit: usize) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn push(&self, records: &mut Vec<Record>, record: &Record) -> Result<()> {
        if self.limit != 0 && records.len() >= self.limit {
            return Err(LoggerError::buffer_limit(self.limit));
        }

        records.push(record.clone());
        Ok(())
    }

    /// Remove and return the most recently handled record
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn pop(&self) -> Record {
        self.records
            .lock()
            .pop()
            .unwrap_or_else(|| panic!("no records in InMemoryHandler"))
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Copy of the buffered records, oldest first
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }
}

impl Handler for InMemoryHandler {
    fn handle(&self, record: &Record) -> Result<()> {
        let mut records = self.records.lock();
        self.push(&mut records, record)
    }

    fn handle_batch(&self, batch: &[Record]) -> Result<()> {
        let mut records = self.records.lock();
        batch
            .iter()
            .try_for_each(|record| self.push(&mut records, record))
    }
}
