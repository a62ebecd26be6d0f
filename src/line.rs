//! In-memory buffering of a single logfmt record.
//!
//! [`Line`] binds an [`Encoder`] to a growable buffer so a whole record can be
//! assembled before it is handed to a sink in one write. Writes to the buffer
//! cannot fail, so none of the token methods return a `Result`.
//!
//! ```rust
//! use logfmt_kv::Line;
//!
//! let mut line = Line::new();
//! line.kv_str("lvl", "info");
//! line.kv_str("msg", "hello world");
//! line.kv_str("n", "5");
//!
//! assert_eq!(line.bytes(), b"lvl=info msg=\"hello world\" n=5\n");
//! ```

use crate::Encoder;

/// A single log line. The newline character is added by [`Line::bytes`].
#[derive(Debug)]
pub struct Line {
    encoder: Encoder<Vec<u8>>,
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}

impl Line {
    /// Creates a line with a new, empty buffer.
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    /// Creates a line whose buffer can hold `capacity` bytes without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Line {
            encoder: Encoder::new(Vec::with_capacity(capacity)),
        }
    }

    /// Writes a string `key=value` pair to the buffer.
    pub fn kv_str(&mut self, key: &str, value: &str) {
        self.kv(key.as_bytes(), value.as_bytes());
    }

    /// Writes a raw bytes `key=value` pair to the buffer.
    pub fn kv(&mut self, key: &[u8], value: &[u8]) {
        // Vec<u8> as io::Write never fails
        let _ = self.encoder.write_kv(key, value);
    }

    /// Terminates the line and returns everything written so far.
    ///
    /// Meant to be called once. A second call appends another bare newline.
    pub fn bytes(&mut self) -> &[u8] {
        let _ = self.encoder.write_line();
        self.encoder.get_ref()
    }

    /// Terminates the line and returns the owned buffer.
    pub fn into_bytes(mut self) -> Vec<u8> {
        let _ = self.encoder.write_line();
        self.encoder.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_is_just_newline() {
        let mut line = Line::new();
        assert_eq!(line.bytes(), b"\n");
    }

    #[test]
    fn test_separators_and_terminator() {
        let mut line = Line::new();
        for i in 0..4 {
            line.kv_str(&format!("k{}", i), &i.to_string());
        }
        assert_eq!(line.bytes(), b"k0=0 k1=1 k2=2 k3=3\n");
    }

    #[test]
    fn test_dropped_key_leaves_no_separator() {
        let mut line = Line::new();
        line.kv(b"", b"x");
        line.kv(b"a", b"b");
        assert_eq!(line.bytes(), b"a=b\n");
    }

    #[test]
    fn test_second_bytes_call_appends_newline() {
        let mut line = Line::new();
        line.kv_str("a", "b");
        assert_eq!(line.bytes(), b"a=b\n");
        assert_eq!(line.bytes(), b"a=b\n\n");
    }

    #[test]
    fn test_write_after_finalize_starts_without_separator() {
        let mut line = Line::new();
        line.kv_str("a", "1");
        let _ = line.bytes();
        line.kv_str("b", "2");
        assert_eq!(line.into_bytes(), b"a=1\nb=2\n");
    }
}
