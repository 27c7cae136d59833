//! Plain-text logger for the `log` crate.
//!
//! The library itself only emits records through the `log` facade. Binaries
//! (and tests) that want to see them install a [`SwatchLogger`]:
//!
//! ```no_run
//! use hsl_swatch::logging::SwatchLogger;
//! use log::LevelFilter;
//!
//! SwatchLogger::new().level(LevelFilter::Debug).init().unwrap();
//! ```
//!
//! Optional tracing integration is available via `SwatchTracingLayer` when
//! the `tracing` feature is enabled.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::sync::{lock_recover, lock_recover_debug};

const DEFAULT_TIME_FORMAT: &str = "[hour]:[minute]:[second]";

/// Line-oriented logger writing to any `Write` sink.
///
/// Each record becomes one line:
///
/// ```text
/// 12:03:44 DEBUG    hsl_swatch::scanner scanned 120 bytes, found 2 hsl token(s)
/// ```
///
/// # Thread Safety
///
/// The sink is behind a mutex with poison recovery, so concurrent records
/// never interleave within a line.
pub struct SwatchLogger {
    level: LevelFilter,
    show_time: bool,
    show_level: bool,
    show_target: bool,
    time_format: OwnedFormatItem,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Default for SwatchLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl SwatchLogger {
    /// Create a logger writing to stderr with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a logger writing to `writer`.
    #[must_use]
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        let time_format = time::format_description::parse_owned::<2>(DEFAULT_TIME_FORMAT)
            .unwrap_or_else(|_| OwnedFormatItem::Literal(Vec::<u8>::new().into_boxed_slice()));
        Self {
            level: LevelFilter::Info,
            show_time: true,
            show_level: true,
            show_target: true,
            time_format,
            sink: Mutex::new(Box::new(writer)),
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Enable or disable log levels.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Enable or disable the record target (module path).
    #[must_use]
    pub fn show_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    /// Override time format. Invalid descriptions keep the current format.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Returns `SetLoggerError` if a global logger is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            line.push_str(&self.format_time());
            line.push(' ');
        }

        if self.show_level {
            let _ = write!(line, "{:<8} ", record.level());
        }

        if self.show_target && !record.target().is_empty() {
            line.push_str(record.target());
            line.push(' ');
        }

        let _ = write!(line, "{}", record.args());
        line
    }

    fn write_line(&self, line: &str) {
        let mut sink = lock_recover_debug(&self.sink, "SwatchLogger::write_line");
        // Logging must never fail the caller
        let _ = writeln!(sink, "{line}");
    }
}

impl Log for SwatchLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);
        self.write_line(&line);
        if record.level() == Level::Error {
            self.flush();
        }
    }

    fn flush(&self) {
        let _ = lock_recover(&self.sink).flush();
    }
}

#[cfg(feature = "tracing")]
mod tracing_integration {
    use super::SwatchLogger;
    use log::Level;
    use std::fmt::Debug;

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level as TracingLevel, Subscriber};
    use tracing_subscriber::{Layer, layer::Context};

    /// Tracing layer that formats events the same way as `SwatchLogger`.
    pub struct SwatchTracingLayer {
        logger: SwatchLogger,
    }

    impl Default for SwatchTracingLayer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SwatchTracingLayer {
        /// Create a tracing layer writing to stderr.
        #[must_use]
        pub fn new() -> Self {
            Self {
                logger: SwatchLogger::new(),
            }
        }

        /// Use an existing logger configuration.
        #[must_use]
        pub fn with_logger(logger: SwatchLogger) -> Self {
            Self { logger }
        }

        /// Install as the global tracing subscriber.
        ///
        /// # Errors
        ///
        /// Returns an error if a global subscriber is already set.
        pub fn init(self) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
            use tracing_subscriber::prelude::*;

            let subscriber = tracing_subscriber::registry().with(self);
            tracing::subscriber::set_global_default(subscriber)
        }
    }

    #[derive(Default)]
    struct EventVisitor {
        message: Option<String>,
        fields: Vec<(String, String)>,
    }

    impl Visit for EventVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
            let rendered = format!("{value:?}");
            let rendered = strip_quotes(&rendered).to_string();
            if field.name() == "message" {
                self.message = Some(rendered);
            } else {
                self.fields.push((field.name().to_string(), rendered));
            }
        }
    }

    impl<S> Layer<S> for SwatchTracingLayer
    where
        S: Subscriber,
    {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let metadata = event.metadata();
            let level = map_tracing_level(*metadata.level());
            if level > self.logger.level {
                return;
            }

            let mut visitor = EventVisitor::default();
            event.record(&mut visitor);

            let mut message = visitor.message.unwrap_or_default();
            if !visitor.fields.is_empty() {
                let extra = visitor
                    .fields
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                if message.is_empty() {
                    message = extra;
                } else {
                    message.push(' ');
                    message.push_str(&extra);
                }
            }

            let line = self.logger.format_record(
                &log::Record::builder()
                    .args(format_args!("{message}"))
                    .level(level)
                    .target(metadata.target())
                    .file(metadata.file())
                    .line(metadata.line())
                    .module_path(metadata.module_path())
                    .build(),
            );
            self.logger.write_line(&line);
        }
    }

    fn map_tracing_level(level: TracingLevel) -> Level {
        match level {
            TracingLevel::TRACE => Level::Trace,
            TracingLevel::DEBUG => Level::Debug,
            TracingLevel::INFO => Level::Info,
            TracingLevel::WARN => Level::Warn,
            TracingLevel::ERROR => Level::Error,
        }
    }

    fn strip_quotes(value: &str) -> &str {
        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            &value[1..value.len() - 1]
        } else {
            value
        }
    }

}

#[cfg(feature = "tracing")]
pub use tracing_integration::SwatchTracingLayer;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Cloneable in-memory sink for inspecting logger output.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn quiet_logger(buffer: &SharedBuffer) -> SwatchLogger {
        SwatchLogger::with_writer(buffer.clone())
            .show_time(false)
            .level(LevelFilter::Trace)
    }

    #[test]
    fn test_logger_new_default() {
        let logger = SwatchLogger::new();
        assert_eq!(logger.level, LevelFilter::Info);
        assert!(logger.show_time);
        assert!(logger.show_level);
        assert!(logger.show_target);
    }

    #[test]
    fn test_logger_builder_chain() {
        let logger = SwatchLogger::new()
            .level(LevelFilter::Debug)
            .show_time(false)
            .show_level(false)
            .show_target(false);

        assert_eq!(logger.level, LevelFilter::Debug);
        assert!(!logger.show_time);
        assert!(!logger.show_level);
        assert!(!logger.show_target);
    }

    #[test]
    fn test_logger_time_format_invalid_keeps_previous() {
        let logger = SwatchLogger::new().time_format("[not a component]");
        let time = logger.format_time();
        // Default format is "HH:MM:SS"
        assert_eq!(time.len(), 8, "unexpected time {time:?}");
        assert_eq!(time.matches(':').count(), 2);
    }

    #[test]
    fn test_logger_custom_time_format() {
        let logger = SwatchLogger::new().time_format("[year]");
        assert_eq!(logger.format_time().len(), 4);
    }

    #[test]
    fn test_log_enabled_info_level() {
        let logger = SwatchLogger::new().level(LevelFilter::Info);

        let info_meta = log::Metadata::builder().level(Level::Info).build();
        let error_meta = log::Metadata::builder().level(Level::Error).build();
        let debug_meta = log::Metadata::builder().level(Level::Debug).build();

        assert!(logger.enabled(&info_meta));
        assert!(logger.enabled(&error_meta));
        assert!(!logger.enabled(&debug_meta));
    }

    #[test]
    fn test_format_record_full() {
        let logger = SwatchLogger::new().show_time(false);
        let record = log::Record::builder()
            .args(format_args!("found 2 tokens"))
            .level(Level::Debug)
            .target("hsl_swatch::scanner")
            .build();

        assert_eq!(
            logger.format_record(&record),
            "DEBUG    hsl_swatch::scanner found 2 tokens"
        );
    }

    #[test]
    fn test_format_record_message_only() {
        let logger = SwatchLogger::new()
            .show_time(false)
            .show_level(false)
            .show_target(false);
        let record = log::Record::builder()
            .args(format_args!("bare"))
            .level(Level::Info)
            .target("x")
            .build();

        assert_eq!(logger.format_record(&record), "bare");
    }

    #[test]
    fn test_log_writes_lines_to_sink() {
        let buffer = SharedBuffer::default();
        let logger = quiet_logger(&buffer).show_target(false);

        logger.log(
            &log::Record::builder()
                .args(format_args!("one"))
                .level(Level::Info)
                .build(),
        );
        logger.log(
            &log::Record::builder()
                .args(format_args!("two"))
                .level(Level::Error)
                .build(),
        );

        assert_eq!(buffer.contents(), "INFO     one\nERROR    two\n");
    }

    #[test]
    fn test_log_filters_below_level() {
        let buffer = SharedBuffer::default();
        let logger = quiet_logger(&buffer).level(LevelFilter::Warn);

        logger.log(
            &log::Record::builder()
                .args(format_args!("hidden"))
                .level(Level::Debug)
                .build(),
        );

        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SwatchLogger>();
    }

    #[test]
    fn test_logger_multithreaded_lines_do_not_interleave() {
        let buffer = SharedBuffer::default();
        let logger = Arc::new(quiet_logger(&buffer).show_level(false).show_target(false));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    for j in 0..25 {
                        logger.log(
                            &log::Record::builder()
                                .args(format_args!("thread {i} line {j}"))
                                .level(Level::Info)
                                .build(),
                        );
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let contents = buffer.contents();
        assert_eq!(contents.lines().count(), 100);
        assert!(contents.lines().all(|line| line.starts_with("thread ")));
    }
}
