//! Main logger implementation
//!
//! A [`Logger`] delivers lines either synchronously (rendered and written on
//! the calling thread) or asynchronously (queued and rendered by one
//! background writer). Both paths share the same rendering pipeline, so a
//! given sequence of calls produces the same lines in the same order.

use super::{
    appender::Appender,
    call_site::CallSite,
    color::{ColorChoice, ColorScheme, Palette},
    compose::LineComposer,
    config::{LoggerConfig, WriteErrorPolicy},
    dispatch::{ArgumentList, DispatchOptions, HexCase, LogValue},
    error::{panic_message, LoggerError, Result},
    log_level::LogLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    overflow_policy::OverflowPolicy,
    template::PlaceholderMode,
};
use crate::appenders::ConsoleAppender;
use crossbeam_channel::{bounded, unbounded, Receiver, SendTimeoutError, Sender, TrySendError};
use parking_lot::Mutex;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

/// Name of the background writer thread
pub const WRITER_THREAD_NAME: &str = "console-logger-writer";

/// Destination plus its bookkeeping, shared by callers and the writer
struct Output {
    slot: Mutex<Slot>,
    metrics: Arc<LoggerMetrics>,
    policy: WriteErrorPolicy,
}

struct Slot {
    appender: Box<dyn Appender>,
    prepared: bool,
}

impl Output {
    fn new(
        appender: Box<dyn Appender>,
        metrics: Arc<LoggerMetrics>,
        policy: WriteErrorPolicy,
    ) -> Self {
        Self {
            slot: Mutex::new(Slot {
                appender,
                prepared: false,
            }),
            metrics,
            policy,
        }
    }

    /// Write one line; `false` if the destination rejected it
    fn write_line(&self, line: &str) -> bool {
        let mut slot = self.slot.lock();
        self.append_locked(&mut slot, line)
    }

    /// Write lines in order under one lock, then flush
    fn write_batch(&self, lines: &[String]) {
        let mut slot = self.slot.lock();
        for line in lines {
            self.append_locked(&mut slot, line);
        }
        if let Err(e) = Self::guarded(&mut slot, |appender| appender.flush()) {
            self.report(&slot, "flush", &e);
        }
    }

    fn flush(&self) -> Result<()> {
        let mut slot = self.slot.lock();
        Self::guarded(&mut slot, |appender| appender.flush())
    }

    fn append_locked(&self, slot: &mut Slot, line: &str) -> bool {
        if !slot.prepared {
            slot.prepared = true;
            if let Err(e) = Self::guarded(slot, |appender| appender.prepare()) {
                self.report(slot, "prepare", &e);
            }
        }

        match Self::guarded(slot, |appender| appender.append(line.as_bytes())) {
            Ok(()) => {
                self.metrics.record_written();
                true
            }
            Err(e) => {
                self.metrics.record_write_failure();
                self.report(slot, "append", &e);
                false
            }
        }
    }

    /// Run an appender operation, turning a panic into an error
    fn guarded<F>(slot: &mut Slot, op: F) -> Result<()>
    where
        F: FnOnce(&mut dyn Appender) -> Result<()>,
    {
        let appender = slot.appender.as_mut();
        match catch_unwind(AssertUnwindSafe(|| op(appender))) {
            Ok(result) => result,
            Err(payload) => Err(LoggerError::writer(format!(
                "appender panicked: {}",
                panic_message(payload.as_ref())
            ))),
        }
    }

    fn report(&self, slot: &Slot, operation: &str, error: &LoggerError) {
        if let Some(message) = self.diagnostic(slot.appender.name(), operation, error) {
            eprintln!("{}", message);
        }
    }

    /// Stderr message for a failed appender operation, if the policy wants one
    fn diagnostic(&self, appender: &str, operation: &str, error: &LoggerError) -> Option<String> {
        match self.policy {
            WriteErrorPolicy::Ignore => None,
            WriteErrorPolicy::Report => Some(format!(
                "[LOGGER ERROR] Appender '{}' {} failed: {}",
                appender, operation, error
            )),
        }
    }
}

/// Rendering settings captured once at build time
#[derive(Clone, Copy)]
struct Renderer {
    composer: LineComposer,
    mode: PlaceholderMode,
}

impl Renderer {
    fn render(&self, record: &LogRecord) -> String {
        record.render(&self.composer, self.mode)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delivery {
    Sync,
    Async { capacity: Option<usize> },
}

pub struct Logger {
    config: Arc<LoggerConfig>,
    dispatch: DispatchOptions,
    renderer: Renderer,
    output: Arc<Output>,
    metrics: Arc<LoggerMetrics>,
    delivery: Delivery,
    sender: Option<Sender<LogRecord>>,
    async_handle: Option<thread::JoinHandle<()>>,
    overflow_policy: OverflowPolicy,
}

impl Logger {
    /// Synchronous logger writing to stdout with the default configuration
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Asynchronous logger writing to stdout through an unbounded queue
    #[must_use]
    pub fn with_async() -> Self {
        LoggerBuilder::new().async_mode().build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use console_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .placeholder_mode(PlaceholderMode::Indexed)
    ///     .hex_case(HexCase::Upper)
    ///     .async_mode()
    ///     .build();
    /// assert!(logger.is_async());
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn from_parts(
        config: LoggerConfig,
        appender: Box<dyn Appender>,
        delivery: Delivery,
        overflow_policy: OverflowPolicy,
    ) -> Self {
        let metrics = Arc::new(LoggerMetrics::new());
        let output = Arc::new(Output::new(
            appender,
            Arc::clone(&metrics),
            config.write_error_policy,
        ));
        let renderer = Renderer {
            composer: config.composer(),
            mode: config.placeholder_mode,
        };

        let mut logger = Self {
            dispatch: config.dispatch_options(),
            config: config.shared(),
            renderer,
            output,
            metrics,
            delivery,
            sender: None,
            async_handle: None,
            overflow_policy,
        };

        if let Delivery::Async { capacity } = delivery {
            let (sender, receiver) = match capacity {
                Some(size) => bounded(size),
                None => unbounded(),
            };
            match Self::spawn_writer(receiver, Arc::clone(&logger.output), renderer) {
                Ok(handle) => {
                    logger.sender = Some(sender);
                    logger.async_handle = Some(handle);
                }
                Err(e) => {
                    eprintln!(
                        "[LOGGER WARNING] Could not start background writer ({}); \
                         logging synchronously",
                        e
                    );
                    logger.delivery = Delivery::Sync;
                }
            }
        }

        logger
    }

    /// Start the single consumer
    ///
    /// The writer blocks until a record arrives, detaches everything queued
    /// behind it, and renders and writes that batch without holding up
    /// producers. `recv` keeps yielding queued records after every sender
    /// is gone, so the loop ends only once the queue is empty.
    fn spawn_writer(
        receiver: Receiver<LogRecord>,
        output: Arc<Output>,
        renderer: Renderer,
    ) -> std::io::Result<thread::JoinHandle<()>> {
        thread::Builder::new()
            .name(WRITER_THREAD_NAME.to_string())
            .spawn(move || {
                let mut lines = Vec::new();
                while let Ok(record) = receiver.recv() {
                    lines.push(renderer.render(&record));
                    lines.extend(receiver.try_iter().map(|record| renderer.render(&record)));
                    output.write_batch(&lines);
                    lines.clear();
                }
            })
    }

    /// Log a message built from `template` and `args`
    ///
    /// Arguments are converted to text before this returns; rendering and
    /// writing happen here (sync) or on the writer thread (async).
    pub fn log(
        &self,
        level: LogLevel,
        call_site: Option<CallSite>,
        template: &str,
        args: &[&dyn LogValue],
    ) {
        let record = LogRecord::new(
            level,
            self.config.palette.scheme(level),
            call_site,
            template,
            ArgumentList::dispatch(args, &self.dispatch),
        );
        self.submit(record);
    }

    fn submit(&self, record: LogRecord) {
        match &self.sender {
            Some(sender) => self.enqueue(sender, record),
            None => {
                if self.is_async() {
                    self.metrics.record_sync_fallback();
                }
                self.write_now(&record);
            }
        }
    }

    fn write_now(&self, record: &LogRecord) -> bool {
        self.output.write_line(&self.renderer.render(record))
    }

    /// Queue a record, applying the overflow policy when a bounded queue is full
    fn enqueue(&self, sender: &Sender<LogRecord>, record: LogRecord) {
        let record = match sender.try_send(record) {
            Ok(()) => return,
            Err(TrySendError::Disconnected(record)) => {
                self.fallback(record);
                return;
            }
            Err(TrySendError::Full(record)) => record,
        };

        self.metrics.record_queue_full();
        match self.overflow_policy {
            OverflowPolicy::Block => {
                self.metrics.record_block();
                if let Err(e) = sender.send(record) {
                    self.fallback(e.into_inner());
                }
            }
            OverflowPolicy::BlockWithTimeout(timeout) => {
                self.metrics.record_block();
                match sender.send_timeout(record, timeout) {
                    Ok(()) => {}
                    Err(SendTimeoutError::Timeout(_)) => self.drop_record(),
                    Err(SendTimeoutError::Disconnected(record)) => self.fallback(record),
                }
            }
            OverflowPolicy::DropNewest => self.drop_record(),
        }
    }

    /// The writer is gone; write on the calling thread instead of losing the record
    fn fallback(&self, record: LogRecord) {
        self.metrics.record_sync_fallback();
        self.write_now(&record);
    }

    fn drop_record(&self) {
        let previous = self.metrics.record_dropped();

        // Alert on first drop and periodically thereafter
        if self.config.write_error_policy == WriteErrorPolicy::Report
            && (previous == 0 || (previous + 1) % 1000 == 0)
        {
            let capacity = match self.delivery {
                Delivery::Async { capacity: Some(capacity) } => capacity,
                _ => 0,
            };
            eprintln!(
                "[LOGGER WARNING] {}; {} records dropped under {} policy",
                LoggerError::queue_full(capacity),
                previous + 1,
                self.overflow_policy
            );
        }
    }

    #[inline]
    pub fn debug(&self, template: &str, args: &[&dyn LogValue]) {
        self.log(LogLevel::Debug, None, template, args);
    }

    #[inline]
    pub fn info(&self, template: &str, args: &[&dyn LogValue]) {
        self.log(LogLevel::Info, None, template, args);
    }

    #[inline]
    pub fn warn(&self, template: &str, args: &[&dyn LogValue]) {
        self.log(LogLevel::Warn, None, template, args);
    }

    #[inline]
    pub fn error(&self, template: &str, args: &[&dyn LogValue]) {
        self.log(LogLevel::Error, None, template, args);
    }

    #[inline]
    pub fn debug_at(&self, call_site: CallSite, template: &str, args: &[&dyn LogValue]) {
        self.log(LogLevel::Debug, Some(call_site), template, args);
    }

    #[inline]
    pub fn info_at(&self, call_site: CallSite, template: &str, args: &[&dyn LogValue]) {
        self.log(LogLevel::Info, Some(call_site), template, args);
    }

    #[inline]
    pub fn warn_at(&self, call_site: CallSite, template: &str, args: &[&dyn LogValue]) {
        self.log(LogLevel::Warn, Some(call_site), template, args);
    }

    #[inline]
    pub fn error_at(&self, call_site: CallSite, template: &str, args: &[&dyn LogValue]) {
        self.log(LogLevel::Error, Some(call_site), template, args);
    }

    /// Whether this logger was built with a background writer
    pub fn is_async(&self) -> bool {
        matches!(self.delivery, Delivery::Async { .. })
    }

    /// Whether the background writer is still accepting records
    pub fn is_running(&self) -> bool {
        self.sender.is_some()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use console_logger::{Logger, MemoryAppender};
    ///
    /// let logger = Logger::builder().appender(MemoryAppender::new()).build();
    /// logger.info("ready", &[]);
    /// assert_eq!(logger.metrics().lines_written(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Flush the destination
    ///
    /// In async mode this does not wait for queued records; use
    /// [`shutdown`](Self::shutdown) for that.
    pub fn flush(&self) -> Result<()> {
        self.output.flush()
    }

    /// Stop the background writer after it has written every queued record
    ///
    /// Blocks until the writer exits. Records logged afterwards are written
    /// synchronously. Calling this on a synchronous logger only flushes.
    ///
    /// # Example
    ///
    /// ```
    /// use console_logger::{Logger, MemoryAppender};
    ///
    /// let memory = MemoryAppender::new();
    /// let buffer = memory.buffer();
    /// let mut logger = Logger::builder().appender(memory).async_mode().build();
    ///
    /// for i in 0..100 {
    ///     logger.info("line {}", &[&i]);
    /// }
    /// logger.shutdown().unwrap();
    /// assert_eq!(buffer.lines().len(), 100);
    /// ```
    pub fn shutdown(&mut self) -> Result<()> {
        // Disconnect the channel; the writer drains what is queued, then exits
        drop(self.sender.take());

        if let Some(handle) = self.async_handle.take() {
            handle
                .join()
                .map_err(|payload| LoggerError::from_panic(payload.as_ref()))?;
        }

        self.flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            eprintln!("[LOGGER ERROR] Shutdown failed: {}", e);
        }

        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} dropped records (loss rate: {:.2}%)",
                dropped,
                self.metrics.loss_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use console_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .scheme(
///         LogLevel::Info,
///         ColorScheme::new(TermColor::White, TermColor::Green, TermColor::White),
///     )
///     .write_error_policy(WriteErrorPolicy::Ignore)
///     .appender(MemoryAppender::new())
///     .async_bounded(1024)
///     .overflow_policy(OverflowPolicy::Block)
///     .build();
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    appender: Option<Box<dyn Appender>>,
    delivery: Delivery,
    overflow_policy: OverflowPolicy,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            appender: None,
            delivery: Delivery::Sync,
            overflow_policy: OverflowPolicy::default(),
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.config.palette = palette;
        self
    }

    /// Set the color scheme of one level
    #[must_use = "builder methods return a new value"]
    pub fn scheme(mut self, level: LogLevel, scheme: ColorScheme) -> Self {
        self.config.palette.set_scheme(level, scheme);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn hex_case(mut self, hex_case: HexCase) -> Self {
        self.config.hex_case = hex_case;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn placeholder_mode(mut self, mode: PlaceholderMode) -> Self {
        self.config.placeholder_mode = mode;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn write_error_policy(mut self, policy: WriteErrorPolicy) -> Self {
        self.config.write_error_policy = policy;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color_choice(mut self, choice: ColorChoice) -> Self {
        self.config.color_choice = choice;
        self
    }

    /// Set the destination; defaults to [`ConsoleAppender`]
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_appender(mut self, appender: Box<dyn Appender>) -> Self {
        self.appender = Some(appender);
        self
    }

    /// Deliver through a background writer with an unbounded queue
    ///
    /// If not called, the logger will use synchronous mode.
    #[must_use = "builder methods return a new value"]
    pub fn async_mode(mut self) -> Self {
        self.delivery = Delivery::Async { capacity: None };
        self
    }

    /// Deliver through a background writer with a queue of `capacity` records
    ///
    /// What happens when the queue is full is set by
    /// [`overflow_policy`](Self::overflow_policy); the default blocks.
    /// A capacity of 0 is treated as 1.
    #[must_use = "builder methods return a new value"]
    pub fn async_bounded(mut self, capacity: usize) -> Self {
        self.delivery = Delivery::Async {
            capacity: Some(capacity.max(1)),
        };
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let appender = self
            .appender
            .unwrap_or_else(|| Box::new(ConsoleAppender::new()));
        Logger::from_parts(self.config, appender, self.delivery, self.overflow_policy)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
