//! Core library for jabbrev.
//!
//! This crate implements the journal title abbreviation engine used by the
//! `jabbrev` CLI and any downstream consumers: an LTWA-style word list is
//! parsed once into an immutable [`WordListStore`], and [`abbreviate`]
//! reduces a full title to its standardized abbreviated form against it.
//!
//! # Modules
//!
//! - [`word_list`] - Word list parsing and the immutable lookup store
//! - [`matcher`] - Per-word exact/prefix/suffix matching
//! - [`abbreviate`] - The title abbreviation pipeline
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use jabbrev_core::{WordListStore, abbreviate};
//!
//! let store = WordListStore::parse("journal;j.\nphysic-;phys.\n")
//!     .expect("valid word list");
//! assert_eq!(abbreviate("Journal of Physics", &store), "J. Phys.");
//! ```
//!
//! The store performs the only I/O (at load) and is never mutated
//! afterwards, so one store can serve any number of concurrent
//! [`abbreviate`] calls without locking.
#![deny(unsafe_code)]

pub mod abbreviate;

pub mod config;

pub mod error;

pub mod matcher;

pub mod word_list;

pub use abbreviate::abbreviate;

pub use config::{Config, ConfigLoader, LogLevel};

pub use error::{ConfigError, ConfigResult, WordListError, WordListResult};

pub use word_list::{StoreStats, WordListStore};

/// Default maximum input size for embedding applications (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
