//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use jabbrev_core::{Config, WordListStore};

pub mod abbreviate;
pub mod info;
pub mod stats;

/// Resolve the word list path from a command flag or the configuration.
///
/// The `--word-list` flag wins; otherwise the configured `word_list` is
/// used. Fails with a pointer at the config surface when neither is set,
/// since no abbreviation can be served without a store.
pub fn resolve_word_list(flag: Option<&Utf8Path>, config: &Config) -> anyhow::Result<Utf8PathBuf> {
    flag.map(Utf8Path::to_path_buf)
        .or_else(|| config.word_list.clone())
        .context("no word list configured: pass --word-list or set `word_list` in the config")
}

/// Load the word list store for a command.
pub fn load_store(flag: Option<&Utf8Path>, config: &Config) -> anyhow::Result<WordListStore> {
    let path = resolve_word_list(flag, config)?;
    let store = WordListStore::load(&path)
        .with_context(|| format!("failed to load word list {path}"))?;
    Ok(store)
}
