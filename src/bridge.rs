//! Backend for the [`log`] facade.
//!
//! Enabled with the `log` feature. Records from `log::info!` and friends are
//! written through a [`Logger`], so libraries using the facade end up in the
//! same logfmt stream as the application's own structured calls.
//!
//! | `log::Level`     | written as    |
//! |------------------|---------------|
//! | `Trace`, `Debug` | debug         |
//! | `Info`           | info          |
//! | `Warn`, `Error`  | error         |
//!
//! The record target is added as `target=<module path>` after any context
//! pairs of the wrapped logger.
//!
//! ```rust
//! use logfmt_kv::{LogBridge, Logger};
//!
//! let logger = Logger::new(std::io::stderr());
//! LogBridge::new(logger).init(log::LevelFilter::Info).ok();
//! log::info!("ready");
//! ```

use log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::{Kv, Level, Logger};

/// Adapts a [`Logger`] to [`log::Log`].
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    /// Wraps `logger`; its params and context apply to every record.
    pub fn new(logger: Logger) -> Self {
        LogBridge { logger }
    }

    /// Installs the bridge as the global `log` backend.
    ///
    /// Fails if another backend was installed first.
    pub fn init(self, max_level: LevelFilter) -> std::result::Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }

    /// The wrapped logger.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    fn level(level: log::Level) -> Level {
        match level {
            log::Level::Trace | log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn | log::Level::Error => Level::Error,
        }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.logger.enabled(Self::level(metadata.level()))
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = record.args().to_string();
        let target = [Kv::str("target", record.target())];
        let _ = self
            .logger
            .log(Self::level(record.level()), &msg, None, &target);
    }

    fn flush(&self) {}
}
