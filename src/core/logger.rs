//! Main logger implementation

use super::{
    clock::{Clock, SystemClock},
    data::Data,
    error::LoggerError,
    handler::Handler,
    level::Level,
    record::Record,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Called with the final message and data of every dispatched critical record
pub type CriticalCallback = Arc<dyn Fn(&str, &Data) + Send + Sync>;

/// Called with the record and the error whenever the handler rejects a record
pub type FailureCallback = Arc<dyn Fn(&Record, &LoggerError) + Send + Sync>;

/// Builds records, filters them by level and passes them to one handler
///
/// Logging calls never return handler errors; install a failure hook with
/// [`Logger::with_failure_handler`] to observe them.
///
/// # Example
///
/// ```
/// use level_router_log::prelude::*;
/// use std::sync::Arc;
///
/// let buffer = Arc::new(InMemoryHandler::new(0));
/// let logger = Logger::new(Arc::clone(&buffer));
///
/// logger.info("user {name} signed in", &["name", "alice"]);
/// logger.set_level(Level::WARNING);
/// logger.info("dropped", &[]);
///
/// let record = buffer.pop();
/// assert_eq!(record.data.get("name"), Some("alice"));
/// assert!(buffer.is_empty());
/// ```
pub struct Logger {
    min_level: RwLock<Level>,
    handler: Arc<dyn Handler>,
    clock: Arc<dyn Clock>,
    on_critical: Option<CriticalCallback>,
    on_failure: Option<FailureCallback>,
}

impl Logger {
    /// Create a logger passing every level to `handler`
    #[must_use]
    pub fn new<H: Handler + 'static>(handler: H) -> Self {
        Self::from_shared(Arc::new(handler))
    }

    fn from_shared(handler: Arc<dyn Handler>) -> Self {
        Self {
            min_level: RwLock::new(Level::DEBUG),
            handler,
            clock: Arc::new(SystemClock),
            on_critical: None,
            on_failure: None,
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use level_router_log::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(Level::INFO)
    ///     .handler(InMemoryHandler::new(100))
    ///     .build();
    /// assert_eq!(logger.level(), Level::INFO);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Replace the time source
    #[must_use]
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Install a hook for dispatched critical records
    #[must_use]
    pub fn with_critical_handler<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &Data) + Send + Sync + 'static,
    {
        self.on_critical = Some(Arc::new(hook));
        self
    }

    /// Install a hook for handler failures
    #[must_use]
    pub fn with_failure_handler<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Record, &LoggerError) + Send + Sync + 'static,
    {
        self.on_failure = Some(Arc::new(hook));
        self
    }

    /// Change the minimum level a record needs to be handled
    pub fn set_level(&self, level: Level) {
        *self.min_level.write() = level;
    }

    pub fn level(&self) -> Level {
        *self.min_level.read()
    }

    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        level.equal_or_greater_than(*self.min_level.read())
    }

    /// Log `message` at `level` with alternating key/value `values` as data
    ///
    /// # Panics
    ///
    /// Panics if the record passes the level filter and `values` has odd
    /// length.
    pub fn log(&self, level: Level, message: impl Into<String>, values: &[&str]) {
        if let Some(record) = self.dispatch(level, || (message.into(), Data::from_pairs(values))) {
            if level == Level::CRITICAL {
                self.notify_critical(&record);
            }
        }
    }

    /// Log a pre-formatted message at `level` with no data
    pub fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) {
        if let Some(record) = self.dispatch(level, || (fmt::format(args), Data::new())) {
            if level == Level::CRITICAL {
                self.notify_critical(&record);
            }
        }
    }

    fn dispatch<F>(&self, level: Level, build: F) -> Option<Record>
    where
        F: FnOnce() -> (String, Data),
    {
        if !self.is_enabled(level) {
            return None;
        }

        let (message, data) = build();
        let record = Record::new(level, message, self.clock.now()).with_data(data);

        if let Err(err) = self.handler.handle(&record) {
            if let Some(ref hook) = self.on_failure {
                hook(&record, &err);
            }
        }

        Some(record)
    }

    fn notify_critical(&self, record: &Record) {
        if let Some(ref hook) = self.on_critical {
            hook(&record.message, &record.data);
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>, values: &[&str]) {
        self.log(Level::DEBUG, message, values);
    }

    #[inline]
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::DEBUG, args);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>, values: &[&str]) {
        self.log(Level::INFO, message, values);
    }

    #[inline]
    pub fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::INFO, args);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>, values: &[&str]) {
        self.log(Level::WARNING, message, values);
    }

    #[inline]
    pub fn warning_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::WARNING, args);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>, values: &[&str]) {
        self.log(Level::ERROR, message, values);
    }

    #[inline]
    pub fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::ERROR, args);
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>, values: &[&str]) {
        self.log(Level::CRITICAL, message, values);
    }

    #[inline]
    pub fn critical_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::CRITICAL, args);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.level())
            .field("on_critical", &self.on_critical.is_some())
            .field("on_failure", &self.on_failure.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use level_router_log::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(Level::DEBUG)
///     .handler(InMemoryHandler::new(0))
///     .clock(SystemClock)
///     .on_critical(|message, _data| eprintln!("ALERT: {}", message))
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: Level,
    handler: Option<Arc<dyn Handler>>,
    clock: Arc<dyn Clock>,
    on_critical: Option<CriticalCallback>,
    on_failure: Option<FailureCallback>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: Level::DEBUG,
            handler: None,
            clock: Arc::new(SystemClock),
            on_critical: None,
            on_failure: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Set the handler every record is passed to
    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Set the time source
    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Set the hook for dispatched critical records
    #[must_use = "builder methods return a new value"]
    pub fn on_critical<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &Data) + Send + Sync + 'static,
    {
        self.on_critical = Some(Arc::new(hook));
        self
    }

    /// Set the hook for handler failures
    #[must_use = "builder methods return a new value"]
    pub fn on_failure<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Record, &LoggerError) + Send + Sync + 'static,
    {
        self.on_failure = Some(Arc::new(hook));
        self
    }

    /// Build the Logger
    ///
    /// Without a handler the logger discards every record.
    pub fn build(self) -> Logger {
        let handler = self.handler.unwrap_or_else(|| Arc::new(NullHandler));
        let mut logger = Logger::from_shared(handler);

        logger.set_level(self.min_level);
        logger.clock = self.clock;
        logger.on_critical = self.on_critical;
        logger.on_failure = self.on_failure;

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

struct NullHandler;

impl Handler for NullHandler {
    fn handle(&self, _record: &Record) -> super::error::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::error::Result;
    use crate::handlers::InMemoryHandler;
    use chrono::{DateTime, TimeZone, Utc};
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 2, 2, 2, 2, 2).unwrap()
    }

    struct CountingClock {
        calls: Arc<AtomicUsize>,
    }

    impl Clock for CountingClock {
        fn now(&self) -> DateTime<Utc> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            at()
        }
    }

    struct FailingHandler;

    impl Handler for FailingHandler {
        fn handle(&self, _record: &Record) -> Result<()> {
            Err(LoggerError::other("Simulated failure"))
        }
    }

    #[test]
    fn test_records_carry_level_message_data_and_time() {
        let buffer = Arc::new(InMemoryHandler::new(0));
        let logger = Logger::new(Arc::clone(&buffer)).with_clock(FixedClock(at()));

        logger.warning("test {key}", &["key", "val", "x", "y"]);

        let record = buffer.pop();
        assert_eq!(record.level, Level::WARNING);
        assert_eq!(record.message, "test {key}");
        assert_eq!(record.data, Data::from_pairs(&["key", "val", "x", "y"]));
        assert_eq!(record.created_at, at());
    }

    #[test]
    fn test_fmt_variants_have_no_data() {
        let buffer = Arc::new(InMemoryHandler::new(0));
        let logger = Logger::new(Arc::clone(&buffer));

        logger.error_fmt(format_args!("code {} from {}", 500, "api"));

        let record = buffer.pop();
        assert_eq!(record.level, Level::ERROR);
        assert_eq!(record.message, "code 500 from api");
        assert!(record.data.is_empty());
    }

    #[test]
    fn test_each_severity_method_uses_its_level() {
        let buffer = Arc::new(InMemoryHandler::new(0));
        let logger = Logger::new(Arc::clone(&buffer));

        logger.debug("d", &[]);
        logger.info_fmt(format_args!("i"));
        logger.warning_fmt(format_args!("w"));
        logger.error("e", &[]);
        logger.critical_fmt(format_args!("c"));

        let levels: Vec<Level> = buffer.records().iter().map(|r| r.level).collect();
        assert_eq!(levels, Level::ALL.to_vec());
    }

    #[test]
    fn test_filtered_call_touches_neither_clock_nor_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let buffer = Arc::new(InMemoryHandler::new(0));
        let logger = Logger::new(Arc::clone(&buffer)).with_clock(CountingClock {
            calls: Arc::clone(&calls),
        });
        logger.set_level(Level::ERROR);

        logger.debug("no", &[]);
        logger.info("no", &[]);
        logger.warning_fmt(format_args!("no {}", 1));
        // odd values are never inspected for a filtered call
        logger.info("no", &["dangling"]);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(buffer.is_empty());

        logger.error("yes", &[]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    #[should_panic(expected = "must be even")]
    fn test_odd_values_panic() {
        let logger = Logger::new(InMemoryHandler::new(0));
        logger.info("broken", &["key"]);
    }

    #[test]
    fn test_failure_hook_receives_record_and_error() {
        let seen: Arc<Mutex<Vec<(String, String)>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);

        let logger = Logger::new(FailingHandler).with_failure_handler(move |record, err| {
            seen_clone
                .lock()
                .push((record.message.clone(), err.to_string()));
        });

        logger.info("lost", &[]);

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], ("lost".to_string(), "Simulated failure".to_string()));
    }

    #[test]
    fn test_failure_hook_not_called_on_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let logger = Logger::new(InMemoryHandler::new(0)).with_failure_handler(move |_, _| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        logger.info("fine", &[]);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_critical_hook_once_when_dispatched() {
        let seen: Arc<Mutex<Vec<(String, Data)>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);

        let logger = Logger::new(InMemoryHandler::new(0)).with_critical_handler(move |msg, data| {
            seen_clone.lock().push((msg.to_string(), data.clone()));
        });

        logger.critical("msg", &["k", "v"]);
        logger.error("not critical", &[]);

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "msg");
        assert_eq!(seen[0].1.get("k"), Some("v"));
    }

    #[test]
    fn test_critical_hook_fires_even_if_handler_fails() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let logger = Logger::new(FailingHandler).with_critical_handler(move |_, _| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        logger.critical_fmt(format_args!("boom"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_critical_hook_skipped_when_filtered() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let logger = Logger::new(InMemoryHandler::new(0)).with_critical_handler(move |_, _| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });
        logger.set_level(Level::new(10_000));

        logger.critical("msg", &[]);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_builder_defaults() {
        let logger = LoggerBuilder::default().build();
        assert_eq!(logger.level(), Level::DEBUG);
        // no handler configured: records are discarded without error
        logger.critical("nowhere", &[]);
    }

    #[test]
    fn test_builder_full_configuration() {
        let buffer = Arc::new(InMemoryHandler::new(0));
        let failures = Arc::new(AtomicUsize::new(0));
        let failures_clone = Arc::clone(&failures);

        let logger = Logger::builder()
            .min_level(Level::INFO)
            .handler(Arc::clone(&buffer))
            .clock(FixedClock(at()))
            .on_failure(move |_, _| {
                failures_clone.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        logger.debug("skipped", &[]);
        logger.info("kept", &[]);

        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.pop().created_at, at());
        assert_eq!(failures.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_set_level_concurrently_with_logging() {
        let buffer = Arc::new(InMemoryHandler::new(0));
        let logger = Arc::new(Logger::new(Arc::clone(&buffer)));

        let writer = {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for i in 0..200 {
                    let level = if i % 2 == 0 { Level::DEBUG } else { Level::ERROR };
                    logger.set_level(level);
                }
                logger.set_level(Level::DEBUG);
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        logger.error("always passes", &[]);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }

        assert_eq!(buffer.len(), 400);
        assert_eq!(logger.level(), Level::DEBUG);
    }
}
