//! Error types for logfmt encoding.
//!
//! The encoder has exactly one failure mode: the output sink rejected a write.
//! That error is carried unchanged so callers can inspect the original
//! [`std::io::Error`] (its kind, its message, its source).
//!
//! There is no validation error. Every byte sequence is a legal key or value,
//! and an empty key is dropped rather than rejected.
//!
//! ## Examples
//!
//! ```rust
//! use logfmt_kv::{Encoder, Error};
//! use std::io;
//!
//! struct Closed;
//!
//! impl io::Write for Closed {
//!     fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
//!         Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
//!     }
//!     fn flush(&mut self) -> io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut encoder = Encoder::new(Closed);
//! let err = encoder.write_kv_str("msg", "hi").unwrap_err();
//! assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
//! assert_eq!(err.to_string(), "closed");
//! ```

use std::io;
use thiserror::Error;

/// Represents all possible errors that can occur while writing logfmt output.
#[derive(Debug, Error)]
pub enum Error {
    /// The output sink failed to accept a write.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns the [`io::ErrorKind`] reported by the sink.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logfmt_kv::Error;
    /// use std::io;
    ///
    /// let err = Error::from(io::Error::new(io::ErrorKind::WriteZero, "full"));
    /// assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    /// ```
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::Io(err) => err.kind(),
        }
    }

    /// Consumes the error, returning the sink's original [`io::Error`].
    pub fn into_io(self) -> io::Error {
        match self {
            Error::Io(err) => err,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
