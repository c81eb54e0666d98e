//! File handler implementation

use crate::core::formatter::render_message;
use crate::core::{
    Filesystem, Formatter, Handler, LogFile, LoggerError, OpenFlags, OsFilesystem, Record, Result,
    DEFAULT_FILE_PERMISSIONS,
};
use parking_lot::Mutex;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Default)]
struct FileSink {
    file: Option<Box<dyn LogFile>>,
    closed: bool,
}

/// Appends one line per record to a file
///
/// The file is opened on first use and kept open until [`close`]; a closed
/// handler rejects further records instead of reopening the file. One lock
/// serializes opening, writing and closing.
///
/// # Examples
///
/// ```no_run
/// use level_router_log::prelude::*;
///
/// let handler = FileHandler::new("/var/log/app.log")
///     .with_formatter(BasicFormatter::new("app", TimestampFormat::Rfc3339));
/// let logger = Logger::new(handler);
/// logger.info("started", &[]);
/// ```
///
/// [`close`]: FileHandler::close
pub struct FileHandler {
    path: PathBuf,
    filesystem: Arc<dyn Filesystem>,
    formatter: Option<Arc<dyn Formatter>>,
    sink: Mutex<FileSink>,
}

impl FileHandler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            filesystem: Arc::new(OsFilesystem),
            formatter: None,
            sink: Mutex::new(FileSink::default()),
        }
    }

    /// Replace the filesystem used to open the log file
    #[must_use]
    pub fn with_filesystem<F: Filesystem + 'static>(mut self, filesystem: F) -> Self {
        self.filesystem = Arc::new(filesystem);
        self
    }

    /// Write formatted messages instead of raw ones
    #[must_use]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Release the log file
    ///
    /// Closing a handler that never opened its file succeeds without doing
    /// anything. Either way the handler accepts no more records.
    pub fn close(&self) -> Result<()> {
        let mut sink = self.sink.lock();
        sink.closed = true;

        match sink.file.take() {
            Some(mut file) => file
                .close()
                .map_err(|e| LoggerError::file_close(&self.path, e)),
            None => Ok(()),
        }
    }

    fn open<'a>(&self, sink: &'a mut FileSink) -> Result<&'a mut Box<dyn LogFile>> {
        if sink.closed {
            return Err(LoggerError::handler_closed(&self.path));
        }

        let file = match sink.file.take() {
            Some(file) => file,
            None => self
                .filesystem
                .open_file(&self.path, OpenFlags::APPEND_CREATE, DEFAULT_FILE_PERMISSIONS)
                .map_err(|e| LoggerError::file_open(&self.path, e))?,
        };

        Ok(sink.file.insert(file))
    }

    fn message(&self, record: &Record) -> String {
        render_message(self.formatter.as_deref(), record)
    }
}

impl Handler for FileHandler {
    fn handle(&self, record: &Record) -> Result<()> {
        let line = format!("{}\n", self.message(record));

        let mut sink = self.sink.lock();
        let file = self.open(&mut sink)?;

        file.write_string(&line)
            .map_err(|e| LoggerError::file_write(&self.path, e))
    }

    fn handle_batch(&self, records: &[Record]) -> Result<()> {
        let lines: Vec<String> = records
            .iter()
            .map(|record| format!("{}\n", self.message(record)))
            .collect();
        let total: usize = lines.iter().map(String::len).sum();

        let mut sink = self.sink.lock();
        let file = self.open(&mut sink)?;

        // Sized to hold the whole batch so the flush is a single write
        let mut writer = BufWriter::with_capacity(total.max(1), file);
        let result = lines
            .iter()
            .try_for_each(|line| writer.write_all(line.as_bytes()))
            .and_then(|()| writer.flush());

        // Drop whatever a failed flush left behind instead of writing it on drop
        let _ = writer.into_parts();

        result.map_err(|e| LoggerError::file_write(&self.path, e))
    }
}

impl Drop for FileHandler {
    fn drop(&mut self) {
        if let Some(file) = self.sink.get_mut().file.as_mut() {
            if let Err(e) = file.flush() {
                eprintln!(
                    "[LOGGER ERROR] Failed to flush '{}' during shutdown: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}

impl std::fmt::Debug for FileHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileHandler")
            .field("path", &self.path)
            .field("formatter", &self.formatter.is_some())
            .finish_non_exhaustive()
    }
}
