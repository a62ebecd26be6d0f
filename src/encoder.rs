//! Streaming logfmt encoder.
//!
//! [`Encoder`] writes `key=value` tokens straight to any [`io::Write`] sink.
//! It does no buffering of its own: every token is issued as a handful of
//! small writes, and a line ends only when [`Encoder::write_line`] is called.
//!
//! ## Usage
//!
//! ```rust
//! use logfmt_kv::Encoder;
//!
//! let mut encoder = Encoder::new(Vec::new());
//! encoder.write_kv_str("lvl", "info").unwrap();
//! encoder.write_kv_str("msg", "hello world").unwrap();
//! encoder.write_line().unwrap();
//!
//! assert_eq!(encoder.into_inner(), b"lvl=info msg=\"hello world\"\n");
//! ```
//!
//! An `Encoder` is not meant to be shared: it tracks whether the current line
//! already holds a token, and concurrent callers would interleave both that
//! flag and their writes. Give each producer its own encoder, and serialize
//! access to a shared sink outside of it.

use crate::escape::{format_key, format_value, SYM_EQUAL, SYM_NEWLINE, SYM_SPACE};
use crate::Result;
use std::io;

/// Encodes logfmt `key=value` pairs to a writer.
///
/// Needs an explicit [`write_line`](Encoder::write_line) to terminate each line.
#[derive(Debug)]
pub struct Encoder<W> {
    writer: W,
    line_has_kv: bool,
}

impl<W: io::Write> Encoder<W> {
    /// Creates an encoder that writes each `key=value` pair to `writer` directly.
    pub fn new(writer: W) -> Self {
        Encoder {
            writer,
            line_has_kv: false,
        }
    }

    /// Writes the line terminator and starts a new line.
    ///
    /// The "line has a token" flag is reset before the write, so a failed
    /// terminator still leaves the encoder at the start of a line.
    pub fn write_line(&mut self) -> Result<()> {
        self.line_has_kv = false;
        self.writer.write_all(&[SYM_NEWLINE])?;
        Ok(())
    }

    /// Writes a string `key=value` pair.
    ///
    /// A space is added between pairs implicitly.
    pub fn write_kv_str(&mut self, key: &str, value: &str) -> Result<()> {
        self.write_kv(key.as_bytes(), value.as_bytes())
    }

    /// Writes a raw bytes `key=value` pair.
    ///
    /// An empty key is the absent-key sentinel: nothing is written, no
    /// separator is emitted, and `Ok(())` is returned.
    ///
    /// The separator, key, `=` and value go out as separate writes. The first
    /// sink error is returned immediately and the remaining writes are skipped,
    /// so a prefix of the token may already have reached the sink.
    pub fn write_kv(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        if key.is_empty() {
            return Ok(());
        }
        let key = format_key(key);
        let value = format_value(value);
        let token: [&[u8]; 3] = [&key, &[SYM_EQUAL], &value];
        if self.line_has_kv {
            self.writer.write_all(&[SYM_SPACE])?;
        }
        self.line_has_kv = true;
        self.write_all(&token)
    }

    /// Returns `true` once a token has been written on the current line.
    pub fn line_has_kv(&self) -> bool {
        self.line_has_kv
    }

    /// Gets a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Gets a mutable reference to the underlying writer.
    ///
    /// Writing to it directly bypasses the separator bookkeeping.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Unwraps the encoder, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_all(&mut self, bufs: &[&[u8]]) -> Result<()> {
        for buf in bufs {
            self.writer.write_all(buf)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every write call and fails once `fail_at` calls have been made.
    struct FlakySink {
        writes: Vec<Vec<u8>>,
        fail_at: usize,
    }

    impl FlakySink {
        fn failing_on(call: usize) -> Self {
            FlakySink {
                writes: Vec::new(),
                fail_at: call,
            }
        }
    }

    impl io::Write for FlakySink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.writes.len() + 1 == self.fail_at {
                self.writes.push(Vec::new());
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "injected"));
            }
            self.writes.push(buf.to_vec());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn encoded(f: impl FnOnce(&mut Encoder<Vec<u8>>)) -> String {
        let mut encoder = Encoder::new(Vec::new());
        f(&mut encoder);
        String::from_utf8(encoder.into_inner()).unwrap()
    }

    #[test]
    fn test_single_pair() {
        let out = encoded(|e| e.write_kv_str("a", "b").unwrap());
        assert_eq!(out, "a=b");
    }

    #[test]
    fn test_space_between_pairs() {
        let out = encoded(|e| {
            e.write_kv_str("a", "1").unwrap();
            e.write_kv_str("b", "2").unwrap();
            e.write_kv_str("c", "3").unwrap();
        });
        assert_eq!(out, "a=1 b=2 c=3");
    }

    #[test]
    fn test_write_line_resets_separator() {
        let out = encoded(|e| {
            e.write_kv_str("a", "1").unwrap();
            e.write_line().unwrap();
            e.write_kv_str("b", "2").unwrap();
            e.write_line().unwrap();
        });
        assert_eq!(out, "a=1\nb=2\n");
    }

    #[test]
    fn test_empty_key_is_dropped() {
        let out = encoded(|e| {
            e.write_kv(b"", b"x").unwrap();
            assert!(!e.line_has_kv());
            e.write_kv(b"a", b"b").unwrap();
            e.write_line().unwrap();
        });
        assert_eq!(out, "a=b\n");
    }

    #[test]
    fn test_empty_value_is_bare() {
        let out = encoded(|e| e.write_kv_str("k", "").unwrap());
        assert_eq!(out, "k=");
    }

    #[test]
    fn test_each_piece_is_a_separate_write() {
        let mut encoder = Encoder::new(FlakySink::failing_on(usize::MAX));
        encoder.write_kv_str("a", "1").unwrap();
        encoder.write_kv_str("b", "2").unwrap();
        let writes = &encoder.get_ref().writes;
        assert_eq!(
            writes,
            &vec![
                b"a".to_vec(),
                b"=".to_vec(),
                b"1".to_vec(),
                b" ".to_vec(),
                b"b".to_vec(),
                b"=".to_vec(),
                b"2".to_vec(),
            ]
        );
    }

    #[test]
    fn test_error_stops_remaining_writes() {
        let mut encoder = Encoder::new(FlakySink::failing_on(2));
        let err = encoder.write_kv_str("key", "value").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(err.to_string(), "injected");
        // key written, '=' failed, value never attempted
        assert_eq!(encoder.get_ref().writes.len(), 2);
        assert_eq!(encoder.get_ref().writes[0], b"key");
    }

    #[test]
    fn test_write_line_error_still_resets() {
        let mut encoder = Encoder::new(FlakySink::failing_on(4));
        encoder.write_kv_str("a", "1").unwrap();
        assert!(encoder.write_line().is_err());
        assert!(!encoder.line_has_kv());
    }
}
