//! Console handler implementation

use crate::core::formatter::render_message;
use crate::core::{Formatter, Handler, Level, LoggerError, Record, Result};
use colored::{Color, Colorize};
use std::io::Write;
use std::sync::Arc;

/// Writes records to stdout, error and critical to stderr
///
/// Without a formatter each line is `LEVEL message`, with the level tag
/// colored when colors are enabled. With a formatter its output is written
/// as is.
pub struct ConsoleHandler {
    use_colors: bool,
    formatter: Option<Arc<dyn Formatter>>,
}

impl ConsoleHandler {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            formatter: None,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            formatter: None,
        }
    }

    /// Set the formatter for this handler
    ///
    /// # Example
    ///
    /// ```
    /// use level_router_log::prelude::*;
    ///
    /// let handler = ConsoleHandler::new()
    ///     .with_formatter(BasicFormatter::new("app", TimestampFormat::Iso8601));
    /// ```
    #[must_use]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    fn format_line(&self, record: &Record) -> String {
        if self.formatter.is_some() {
            return render_message(self.formatter.as_deref(), record);
        }

        let tag = format!("{:8}", level_tag(record.level));
        let tag = if self.use_colors {
            tag.color(level_color(record.level)).to_string()
        } else {
            tag
        };

        format!("{} {}", tag, record.data.interpolate(&record.message))
    }

    fn write_lines(&self, to_stderr: bool, text: &str) -> Result<()> {
        let result = if to_stderr {
            std::io::stderr().lock().write_all(text.as_bytes())
        } else {
            std::io::stdout().lock().write_all(text.as_bytes())
        };
        result.map_err(LoggerError::writer)
    }
}

fn level_tag(level: Level) -> String {
    level
        .name()
        .map(|name| name.as_str().to_uppercase())
        .unwrap_or_else(|_| level.as_u32().to_string())
}

fn level_color(level: Level) -> Color {
    match level {
        l if l.equal_or_greater_than(Level::CRITICAL) => Color::BrightRed,
        l if l.equal_or_greater_than(Level::ERROR) => Color::Red,
        l if l.equal_or_greater_than(Level::WARNING) => Color::Yellow,
        l if l.equal_or_greater_than(Level::INFO) => Color::Green,
        _ => Color::Blue,
    }
}

fn uses_stderr(level: Level) -> bool {
    level.equal_or_greater_than(Level::ERROR)
}

impl Default for ConsoleHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for ConsoleHandler {
    fn handle(&self, record: &Record) -> Result<()> {
        let line = format!("{}\n", self.format_line(record));
        self.write_lines(uses_stderr(record.level), &line)
    }

    fn handle_batch(&self, records: &[Record]) -> Result<()> {
        let (mut out, mut err) = (String::new(), String::new());
        for record in records {
            let target = if uses_stderr(record.level) { &mut err } else { &mut out };
            target.push_str(&self.format_line(record));
            target.push('\n');
        }

        if !out.is_empty() {
            self.write_lines(false, &out)?;
        }
        if !err.is_empty() {
            self.write_lines(true, &err)?;
        }
        Ok(())
    }
}
