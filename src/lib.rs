//! # logfmt_kv
//!
//! A minimal structured logger that writes key/value pairs in the
//! [logfmt](https://brandur.org/logfmt) text format:
//!
//! ```text
//! lvl=info msg="hello world" n=5
//! ```
//!
//! ## Layers
//!
//! - [`escape`]: escaping and quoting rules for keys and values
//! - [`Encoder`]: streams `key=value` tokens to any [`std::io::Write`]
//! - [`Line`]: buffers one record in memory and terminates it
//! - [`Kv`]: typed value adapters and deferred (log-time) values
//! - [`Logger`]: `debug`/`info`/`error` with inherited context via [`Logger::with`]
//!
//! ## Wire format
//!
//! ```text
//! line  := token (SP token)* LF
//! token := key "=" value
//! key   := escaped bytes, spaces replaced by "_"
//! value := escaped bytes | DQUOTE escaped bytes DQUOTE
//! ```
//!
//! Values are quoted only when escaping changed them or they contain a space.
//! Keys are never quoted. An empty key drops the whole token.
//!
//! ## Quick Start
//!
//! ```rust
//! use logfmt_kv::Kv;
//!
//! let logger = logfmt_kv::new(std::io::stdout()).with([Kv::timestamp("time")]);
//!
//! logger.info("listening", &[Kv::str("addr", "0.0.0.0:8080")]);
//! logger.debug("config loaded", &[Kv::uint("routes", 12)]);
//! logger.error("connection reset", "request failed", &[Kv::int("status", 502)]);
//! ```
//!
//! ### Encoding without a logger
//!
//! ```rust
//! use logfmt_kv::Line;
//!
//! let mut line = Line::new();
//! line.kv_str("path", "C:\\tmp");
//! line.kv_str("note", "");
//! assert_eq!(line.bytes(), b"path=\"C:\\\\tmp\" note=\n");
//! ```
//!
//! ## Features
//!
//! - **`log`**: [`LogBridge`], a backend for the `log` facade.
//!
//! ## Errors
//!
//! The only failure is the sink refusing a write. [`Encoder`] returns it as
//! [`Error::Io`]; [`Line`] cannot fail; the fire-and-forget [`Logger`]
//! methods drop it, while [`Logger::log`] returns it.

pub mod encoder;
pub mod error;
pub mod escape;
pub mod kv;
pub mod line;
pub mod logger;
pub mod macros;
pub mod options;

#[cfg(feature = "log")]
pub mod bridge;

pub use encoder::Encoder;
pub use error::{Error, Result};
pub use kv::Kv;
pub use line::Line;
pub use logger::{Level, Logger};
pub use options::{Levels, Params};

#[cfg(feature = "log")]
pub use bridge::LogBridge;

use std::io;

/// Creates a logger with default [`Params`].
///
/// # Examples
///
/// ```rust
/// let logger = logfmt_kv::new(std::io::stderr());
/// logger.info("hi", &[]);
/// ```
pub fn new<W>(output: W) -> Logger
where
    W: io::Write + Send + 'static,
{
    Logger::new(output)
}

/// Creates a logger, letting `options` override the default [`Params`].
///
/// # Examples
///
/// ```rust
/// let logger = logfmt_kv::new_with_params(std::io::stderr(), |p| {
///     p.msg_key = "message".into();
///     p.levels.error = "ERR".into();
/// });
/// assert_eq!(logger.params().levels.error, "ERR");
/// ```
pub fn new_with_params<W, F>(output: W, options: F) -> Logger
where
    W: io::Write + Send + 'static,
    F: FnOnce(&mut Params),
{
    Logger::with_params(output, options)
}
