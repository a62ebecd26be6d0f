//! Leveled logger on top of [`Line`].
//!
//! Every call builds one [`Line`], writes the standard fields, then the
//! context pairs attached with [`Logger::with`], then the pairs given at the
//! call site, and hands the finished line to the sink in a single write.
//!
//! ```rust
//! use logfmt_kv::{Kv, Logger};
//!
//! let logger = Logger::new(std::io::sink()).with([Kv::str("service", "api")]);
//! logger.info("started", &[Kv::uint("port", 8080)]);
//! // lvl=info msg=started service=api port=8080
//! ```
//!
//! [`Logger::info`], [`Logger::debug`] and [`Logger::error`] swallow sink
//! errors so that logging never interrupts the caller. Use [`Logger::log`]
//! to get them back.

use std::fmt::{self, Display};
use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Kv, Levels, Line, Params, Result};

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Severity of a log call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Info,
    Error,
}

impl Level {
    /// The configured name for this level. May be empty.
    pub fn name(self, levels: &Levels) -> &str {
        match self {
            Level::Debug => &levels.debug,
            Level::Info => &levels.info,
            Level::Error => &levels.error,
        }
    }
}

/// Writes logfmt lines at one of three levels.
///
/// Cloning is cheap: clones share the sink, the params and the context pairs.
/// [`Logger::with`] never mutates `self`, so two loggers branched from the
/// same parent keep independent contexts.
///
/// The sink is locked for the duration of each line write, so one logger and
/// all loggers derived from it never interleave partial lines. Separate
/// loggers built over the same underlying file or stream get no such guarantee.
#[derive(Clone)]
pub struct Logger {
    output: Sink,
    params: Arc<Params>,
    kvs: Arc<[Kv]>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("params", &self.params)
            .field("kvs", &self.kvs)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Creates a logger with default [`Params`].
    pub fn new<W>(output: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::from_params(output, Params::default())
    }

    /// Creates a logger, letting `options` adjust the default [`Params`] once.
    ///
    /// ```rust
    /// use logfmt_kv::Logger;
    ///
    /// let logger = Logger::with_params(std::io::stderr(), |p| {
    ///     p.debug = false;
    ///     p.level_key = "level".into();
    /// });
    /// assert_eq!(logger.params().level_key, "level");
    /// ```
    pub fn with_params<W, F>(output: W, options: F) -> Self
    where
        W: Write + Send + 'static,
        F: FnOnce(&mut Params),
    {
        let mut params = Params::default();
        options(&mut params);
        Self::from_params(output, params)
    }

    /// Creates a logger from a ready-made [`Params`], e.g. one loaded from a config file.
    pub fn from_params<W>(output: W, params: Params) -> Self
    where
        W: Write + Send + 'static,
    {
        Logger {
            output: Arc::new(Mutex::new(Box::new(output))),
            params: Arc::new(params),
            kvs: Arc::from(Vec::new()),
        }
    }

    /// The params this logger was built with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Context pairs attached so far, oldest first.
    pub fn context(&self) -> &[Kv] {
        &self.kvs
    }

    /// Returns a new logger with `kvs` appended to the context.
    ///
    /// Use [`Kv::deferred`] for values that must be computed per line, such
    /// as a timestamp.
    #[must_use]
    pub fn with<I>(&self, kvs: I) -> Logger
    where
        I: IntoIterator<Item = Kv>,
    {
        let kvs: Vec<Kv> = self.kvs.iter().cloned().chain(kvs).collect();
        Logger {
            output: Arc::clone(&self.output),
            params: Arc::clone(&self.params),
            kvs: kvs.into(),
        }
    }

    /// Whether lines at `level` are written.
    pub fn enabled(&self, level: Level) -> bool {
        level != Level::Debug || self.params.debug
    }

    /// Logs at debug level. Does nothing when `params.debug` is off.
    pub fn debug(&self, msg: &str, kvs: &[Kv]) {
        let _ = self.log(Level::Debug, msg, None, kvs);
    }

    /// Logs at info level.
    pub fn info(&self, msg: &str, kvs: &[Kv]) {
        let _ = self.log(Level::Info, msg, None, kvs);
    }

    /// Logs at error level, writing `err` under the error key.
    pub fn error<E: Display>(&self, err: E, msg: &str, kvs: &[Kv]) {
        let _ = self.log(Level::Error, msg, Some(&err), kvs);
    }

    /// Writes one line and reports sink failures.
    ///
    /// Returns `Ok(())` without writing when `level` is disabled.
    pub fn log(
        &self,
        level: Level,
        msg: &str,
        err: Option<&dyn Display>,
        kvs: &[Kv],
    ) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        let line = self.format(level, msg, err, kvs);
        let mut output = self.output.lock();
        output.write_all(&line)?;
        output.flush()?;
        Ok(())
    }

    /// Builds the finished line without writing it.
    ///
    /// Deferred pairs are resolved here, once each.
    pub fn format(
        &self,
        level: Level,
        msg: &str,
        err: Option<&dyn Display>,
        kvs: &[Kv],
    ) -> Vec<u8> {
        let params = &*self.params;
        let mut line = Line::new();

        let level_name = level.name(&params.levels);
        if !params.level_key.is_empty() && !level_name.is_empty() {
            line.kv_str(&params.level_key, level_name);
        }
        if !params.msg_key.is_empty() {
            line.kv_str(&params.msg_key, msg);
        }
        if let Some(err) = err {
            if !params.error_key.is_empty() {
                line.kv_str(&params.error_key, &err.to_string());
            }
        }
        for kv in self.kvs.iter().chain(kvs) {
            kv.with_pair(|key, value| line.kv(key, value));
        }
        line.into_bytes()
    }
}
