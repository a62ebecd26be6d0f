//! Escaping and quoting rules for logfmt tokens.
//!
//! A token is `key=value`. Both halves go through [`escape`], which turns
//! control bytes, backslashes and double quotes into two-byte backslash
//! sequences. Then:
//!
//! - **Keys** are never quoted, so every space becomes an underscore.
//! - **Values** are wrapped in double quotes when escaping changed their
//!   length or when they contain a space. Everything else is written bare.
//!
//! ## Examples
//!
//! ```rust
//! use logfmt_kv::escape::{format_key, format_value};
//!
//! assert_eq!(&*format_key(b"user id"), b"user_id");
//! assert_eq!(&*format_value(b"plain"), b"plain");
//! assert_eq!(&*format_value(b"two words"), b"\"two words\"");
//! assert_eq!(&*format_value(b"a\nb"), b"\"a\\nb\"");
//! assert_eq!(&*format_value(b""), b"");
//! ```

use std::borrow::Cow;

pub(crate) const SYM_NEWLINE: u8 = b'\n';
pub(crate) const SYM_EQUAL: u8 = b'=';
pub(crate) const SYM_SPACE: u8 = b' ';
pub(crate) const SYM_QUOTE: u8 = b'"';
pub(crate) const SYM_BACKSLASH: u8 = b'\\';
pub(crate) const SYM_UNDERSCORE: u8 = b'_';

/// Bytes that must be escaped, paired with the letter written after the backslash.
///
/// The backslash entry comes first. Applied as sequential replace-all passes,
/// any other order would re-escape the backslashes inserted by earlier entries.
pub const ESCAPE_TABLE: [(u8, u8); 9] = [
    (b'\\', b'\\'),
    (b'\n', b'n'),
    (b'\r', b'r'),
    (b'\t', b't'),
    (0x08, b'b'), // backspace
    (0x0C, b'f'), // form feed
    (0x0B, b'v'), // vertical tab
    (0x00, b'0'),
    (b'"', b'"'),
];

#[inline]
fn replacement(byte: u8) -> Option<u8> {
    ESCAPE_TABLE
        .iter()
        .find(|(sym, _)| *sym == byte)
        .map(|(_, replace)| *replace)
}

/// Escapes every byte listed in [`ESCAPE_TABLE`] with a backslash sequence.
///
/// Returns the input borrowed when nothing needs escaping. The transform is
/// applied once per formatting step and is not idempotent: escaping the
/// output again doubles every backslash.
///
/// The single left-to-right pass here produces the same bytes as applying the
/// table entries as ordered replace-all passes, without the intermediate copies.
///
/// # Examples
///
/// ```rust
/// use logfmt_kv::escape::escape;
///
/// assert_eq!(&*escape(b"a\\\nb"), b"a\\\\\\nb");
/// assert_eq!(&*escape(b"no change"), b"no change");
/// ```
pub fn escape(raw: &[u8]) -> Cow<'_, [u8]> {
    let first = match raw.iter().position(|b| replacement(*b).is_some()) {
        Some(pos) => pos,
        None => return Cow::Borrowed(raw),
    };

    let mut out = Vec::with_capacity(raw.len() + 8);
    out.extend_from_slice(&raw[..first]);
    for &byte in &raw[first..] {
        match replacement(byte) {
            Some(replace) => {
                out.push(SYM_BACKSLASH);
                out.push(replace);
            }
            None => out.push(byte),
        }
    }
    Cow::Owned(out)
}

/// Formats a key: escaped, with every space replaced by `_`.
///
/// Keys are never quoted regardless of content.
pub fn format_key(key: &[u8]) -> Cow<'_, [u8]> {
    let escaped = escape(key);
    if !escaped.contains(&SYM_SPACE) {
        return escaped;
    }
    let replaced = escaped
        .iter()
        .map(|&b| if b == SYM_SPACE { SYM_UNDERSCORE } else { b })
        .collect();
    Cow::Owned(replaced)
}

/// Formats a value: escaped, then quoted if escaping changed its length or it
/// contains a space.
///
/// An empty value stays bare, so `key=` is emitted rather than `key=""`.
pub fn format_value(value: &[u8]) -> Cow<'_, [u8]> {
    let escaped = escape(value);
    if escaped.len() == value.len() && !escaped.contains(&SYM_SPACE) {
        return escaped;
    }
    let mut quoted = Vec::with_capacity(escaped.len() + 2);
    quoted.push(SYM_QUOTE);
    quoted.extend_from_slice(&escaped);
    quoted.push(SYM_QUOTE);
    Cow::Owned(quoted)
}
