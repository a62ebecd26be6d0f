//! Key/value tokens and typed value adapters.
//!
//! The encoder only sees bytes. [`Kv`] is where typed values get rendered:
//! integers in decimal, floats at full precision without exponent notation,
//! booleans as `true`/`false`, and anything else through [`Display`] or
//! [`Debug`].
//!
//! A [`Kv`] can also be *deferred*: it holds a closure that produces the real
//! pair when a line is written. This is how per-line values such as a
//! timestamp are attached once to a logger context and still reflect the
//! moment of each log call.
//!
//! ## Examples
//!
//! ```rust
//! use logfmt_kv::Kv;
//!
//! let kv = Kv::int("attempt", 3);
//! assert_eq!(kv.pair(), (b"attempt".to_vec(), b"3".to_vec()));
//!
//! let kv = Kv::float("ratio", 0.25);
//! assert_eq!(kv.pair().1, b"0.25");
//!
//! let kv = Kv::deferred(|| Kv::str("computed", "late"));
//! assert_eq!(kv.pair().0, b"computed");
//! ```

use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

type Thunk = Arc<dyn Fn() -> Kv + Send + Sync>;

/// A single `key=value` token, or a closure that produces one at log time.
///
/// A `Kv` with an empty key is dropped when written. [`Kv::default`] is such
/// an empty token.
#[derive(Clone)]
pub enum Kv {
    /// Key and value already rendered to bytes.
    Immediate { key: Vec<u8>, value: Vec<u8> },
    /// Resolved by calling the closure when the line is written.
    Deferred(Thunk),
}

impl Default for Kv {
    fn default() -> Self {
        Kv::Immediate {
            key: Vec::new(),
            value: Vec::new(),
        }
    }
}

impl Debug for Kv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kv::Immediate { key, value } => f
                .debug_struct("Immediate")
                .field("key", &String::from_utf8_lossy(key))
                .field("value", &String::from_utf8_lossy(value))
                .finish(),
            Kv::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl Kv {
    /// Logs raw bytes as is.
    pub fn bytes(key: &str, value: &[u8]) -> Self {
        Kv::Immediate {
            key: key.as_bytes().to_vec(),
            value: value.to_vec(),
        }
    }

    /// Logs a string value.
    pub fn str(key: &str, value: &str) -> Self {
        Self::bytes(key, value.as_bytes())
    }

    /// Logs a signed integer in decimal.
    pub fn int(key: &str, value: i64) -> Self {
        Self::str(key, &value.to_string())
    }

    /// Logs an unsigned integer in decimal.
    pub fn uint(key: &str, value: u64) -> Self {
        Self::str(key, &value.to_string())
    }

    /// Logs a float with no precision limit and no exponent notation.
    ///
    /// Non-finite values are written as `NaN`, `+Inf` and `-Inf`.
    pub fn float(key: &str, value: f64) -> Self {
        Self::str(key, &render_float(value))
    }

    /// Logs `true` or `false`.
    pub fn bool(key: &str, value: bool) -> Self {
        Self::str(key, if value { "true" } else { "false" })
    }

    /// Logs any value through its [`Display`] implementation.
    pub fn display<T: Display + ?Sized>(key: &str, value: &T) -> Self {
        Self::str(key, &value.to_string())
    }

    /// Logs `value` through [`Display`], or nothing at all when it is `None`.
    pub fn opt_display<T: Display>(key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => Self::display(key, &value),
            None => Kv::default(),
        }
    }

    /// Logs any value through its [`Debug`] implementation.
    pub fn debug<T: Debug + ?Sized>(key: &str, value: &T) -> Self {
        Self::str(key, &format!("{:?}", value))
    }

    /// Defers the whole pair to log time.
    ///
    /// `f` runs once per written line, never when the `Kv` is created or
    /// attached to a logger.
    pub fn deferred<F>(f: F) -> Self
    where
        F: Fn() -> Kv + Send + Sync + 'static,
    {
        Kv::Deferred(Arc::new(f))
    }

    /// A deferred RFC 3339 UTC timestamp, taken when the line is written.
    ///
    /// ```rust
    /// use logfmt_kv::Kv;
    ///
    /// let (key, value) = Kv::timestamp("time").pair();
    /// assert_eq!(key, b"time");
    /// assert!(value.ends_with(b"Z"));
    /// ```
    pub fn timestamp(key: &str) -> Self {
        let key = key.to_string();
        Self::deferred(move || {
            let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
            Kv::str(&key, &now)
        })
    }

    /// Returns `true` for a deferred pair.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Kv::Deferred(_))
    }

    /// Resolves the pair, calling the deferred closure if there is one.
    pub fn pair(&self) -> (Vec<u8>, Vec<u8>) {
        match self {
            Kv::Immediate { key, value } => (key.clone(), value.clone()),
            Kv::Deferred(f) => f().pair(),
        }
    }

    /// Like [`Kv::pair`], but hands borrowed bytes to `f` instead of cloning
    /// an immediate pair.
    pub(crate) fn with_pair<R>(&self, f: impl FnOnce(&[u8], &[u8]) -> R) -> R {
        match self {
            Kv::Immediate { key, value } => f(key, value),
            Kv::Deferred(thunk) => thunk().with_pair(f),
        }
    }
}

impl From<(&str, &str)> for Kv {
    fn from((key, value): (&str, &str)) -> Self {
        Kv::str(key, value)
    }
}

fn render_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value > 0.0 { "+" } else { "-" };
        return format!("{}Inf", sign);
    }
    // Display for f64 is the shortest round-trip form and never uses an exponent
    value.to_string()
}
