//! Generic writer handler

use crate::core::formatter::render_message;
use crate::core::{Formatter, Handler, LoggerError, Record, Result};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Writes one line per record to any `Write` sink
///
/// Every call issues exactly one `write_all` on the sink: a single record
/// as `message\n`, a batch as all messages joined by newlines plus a
/// trailing newline.
pub struct WriterHandler<W: Write + Send> {
    writer: Mutex<W>,
    formatter: Option<Arc<dyn Formatter>>,
}

impl<W: Write + Send> WriterHandler<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            formatter: None,
        }
    }

    #[must_use]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write(&self, text: &str) -> Result<()> {
        self.writer
            .lock()
            .write_all(text.as_bytes())
            .map_err(LoggerError::writer)
    }
}

impl<W: Write + Send> Handler for WriterHandler<W> {
    fn handle(&self, record: &Record) -> Result<()> {
        let message = render_message(self.formatter.as_deref(), record);
        self.write(&format!("{}\n", message))
    }

    fn handle_batch(&self, records: &[Record]) -> Result<()> {
        let mut text = String::new();
        for record in records {
            text.push_str(&render_message(self.formatter.as_deref(), record));
            text.push('\n');
        }
        self.write(&text)
    }
}
