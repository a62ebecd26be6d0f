//! Configuration options for the leveled logger.
//!
//! This module provides:
//!
//! - [`Params`]: field names for the standard fields and the debug switch
//! - [`Levels`]: the value written for each level
//!
//! An empty string is a sentinel meaning "omit this field". Setting
//! `msg_key` to `""` drops the message from every line; setting
//! `levels.info` to `""` drops the level field from info lines only.
//!
//! ## Examples
//!
//! ```rust
//! use logfmt_kv::Params;
//!
//! let params = Params::new()
//!     .with_level_key("level")
//!     .with_error_key("err")
//!     .with_debug(false);
//! assert_eq!(params.msg_key, "msg");
//! assert_eq!(params.levels.error, "error");
//! ```
//!
//! Both types implement `serde::Deserialize` with defaults for missing
//! fields, so a partial config section is enough:
//!
//! ```rust
//! use logfmt_kv::Params;
//!
//! let params: Params = serde_json::from_str(r#"{"levels": {"debug": "dbg"}}"#).unwrap();
//! assert_eq!(params.levels.debug, "dbg");
//! assert_eq!(params.levels.info, "info");
//! assert_eq!(params.level_key, "lvl");
//! ```

use serde::{Deserialize, Serialize};

/// Values written under the level key for each level.
///
/// An empty value removes the level field from lines of that level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Levels {
    pub debug: String,
    pub info: String,
    pub error: String,
}

impl Default for Levels {
    fn default() -> Self {
        Levels {
            debug: "debug".to_string(),
            info: "info".to_string(),
            error: "error".to_string(),
        }
    }
}

/// Logger configuration.
///
/// Defaults: debug enabled, keys `lvl`/`msg`/`error`, levels
/// `debug`/`info`/`error`. An empty key removes that field from every line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Whether debug lines are written at all.
    pub debug: bool,
    pub level_key: String,
    pub msg_key: String,
    pub error_key: String,
    pub levels: Levels,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            debug: true,
            level_key: "lvl".to_string(),
            msg_key: "msg".to_string(),
            error_key: "error".to_string(),
            levels: Levels::default(),
        }
    }
}

impl Params {
    /// Creates default options (debug on, `lvl`/`msg`/`error` keys).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logfmt_kv::Params;
    ///
    /// let params = Params::new();
    /// assert!(params.debug);
    /// assert_eq!(params.level_key, "lvl");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns debug lines on or off.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logfmt_kv::Params;
    ///
    /// let params = Params::new().with_debug(false);
    /// assert!(!params.debug);
    /// ```
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the key of the level field. An empty key drops the field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logfmt_kv::Params;
    ///
    /// let params = Params::new().with_level_key("severity");
    /// assert_eq!(params.level_key, "severity");
    /// ```
    #[must_use]
    pub fn with_level_key(mut self, key: impl Into<String>) -> Self {
        self.level_key = key.into();
        self
    }

    /// Sets the key of the message field. An empty key drops the field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logfmt_kv::Params;
    ///
    /// let params = Params::new().with_msg_key("message");
    /// assert_eq!(params.msg_key, "message");
    /// ```
    #[must_use]
    pub fn with_msg_key(mut self, key: impl Into<String>) -> Self {
        self.msg_key = key.into();
        self
    }

    /// Sets the key of the error field. An empty key drops the field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logfmt_kv::Params;
    ///
    /// let params = Params::new().with_error_key("");
    /// assert!(params.error_key.is_empty());
    /// ```
    #[must_use]
    pub fn with_error_key(mut self, key: impl Into<String>) -> Self {
        self.error_key = key.into();
        self
    }

    /// Replaces all three level names at once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logfmt_kv::{Levels, Params};
    ///
    /// let params = Params::new().with_levels(Levels {
    ///     debug: "D".into(),
    ///     info: "I".into(),
    ///     error: "E".into(),
    /// });
    /// assert_eq!(params.levels.info, "I");
    /// ```
    #[must_use]
    pub fn with_levels(mut self, levels: Levels) -> Self {
        self.levels = levels;
        self
    }
}
