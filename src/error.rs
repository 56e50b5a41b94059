//! Configuration errors
//!
//! The simulation itself is total; the only fallible step is accepting a
//! configuration before the world is built.

use thiserror::Error;

/// Reasons a [`crate::GameConfig`] is refused at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A scalar option is outside its valid range.
    #[error("invalid value for `{field}`: {value} ({reason})")]
    InvalidValue {
        /// Option name as it appears in the config file.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable constraint.
        reason: &'static str,
    },

    /// A min/max pair is inverted.
    #[error("`{min_field}` ({min}) must not exceed `{max_field}` ({max})")]
    InvertedRange {
        min_field: &'static str,
        min: f64,
        max_field: &'static str,
        max: f64,
    },

    /// Config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for [`crate::GameConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
