//! Error types for jabbrev-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a word list.
///
/// Both variants are fail-fast: a load never yields a partially populated
/// store, since that would silently produce wrong abbreviations.
#[derive(Error, Debug)]
pub enum WordListError {
    /// The word list file is missing or unreadable.
    #[error("failed to read word list {path}")]
    Io {
        /// Path that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line did not split into exactly two semicolon-separated fields.
    #[error("malformed rule on line {line}: expected `long;short`, got {text:?}")]
    Format {
        /// 1-based line number of the offending rule.
        line: usize,
        /// The raw line content.
        text: String,
    },
}

/// Result type alias using [`WordListError`].
pub type WordListResult<T> = Result<T, WordListError>;
