//! Word list parsing and the immutable lookup store.
//!
//! An LTWA-style word list is a line-oriented text file with one rule per
//! line, `<long-form>;<short-form>`. Four kinds of rule exist and are told
//! apart by sentinel characters in the raw fields:
//!
//! - `journal;j.` — exact abbreviation
//! - `international;n.a.` — word that must never be abbreviated
//! - `chemi-;chem.` — prefix rule (applies to words starting with `chemi`)
//! - `-ology;-ol.` — suffix rule (applies to words ending with `ology`)
//!
//! [`WordListStore::parse`] resolves that classification once, at parse time,
//! into [`RuleLine`] variants; lookup code never re-inspects raw line shape.
//! The store is immutable after construction and safe to share across
//! threads.

use std::collections::{HashMap, HashSet};

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::Serialize;

use crate::error::{WordListError, WordListResult};

/// Marker short-form for words that must never be abbreviated.
const NON_ABBREVIATION_MARKER: &str = "n.a.";

/// A single classified rule from the word list file.
///
/// All fields are already case-folded; sentinel characters (`-`, the `n.a.`
/// marker) have been stripped during classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleLine {
    /// Exact long-form → short-form abbreviation.
    Abbreviation {
        /// Case-folded long form.
        long: String,
        /// Short form, with acronym spaces collapsed.
        short: String,
    },
    /// A long-form word that is never abbreviated.
    NonAbbreviation {
        /// Case-folded long form.
        long: String,
    },
    /// Substring rule for words beginning with `key`.
    Prefix {
        /// Prefix substring (trailing `-` stripped).
        key: String,
        /// Replacement short form.
        short: String,
    },
    /// Substring rule for words ending with `key`.
    Suffix {
        /// Suffix substring (leading `-` stripped).
        key: String,
        /// Replacement short form (leading character stripped).
        short: String,
    },
}

/// Classify one raw line into a [`RuleLine`].
///
/// Fails if the line does not split into exactly two non-empty
/// semicolon-separated fields.
fn classify_line(raw: &str, line_no: usize) -> WordListResult<RuleLine> {
    let malformed = || WordListError::Format {
        line: line_no,
        text: raw.to_string(),
    };

    let mut fields = raw.trim().split(';');
    let (Some(long), Some(short), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(malformed());
    };
    if long.is_empty() || short.is_empty() {
        return Err(malformed());
    }

    let long = long.to_lowercase();
    let short = collapse_acronym_spaces(&short.to_lowercase());

    if short == NON_ABBREVIATION_MARKER {
        Ok(RuleLine::NonAbbreviation { long })
    } else if let Some(key) = long.strip_prefix('-') {
        // Suffix rule: the short form carries a matching leading `-`.
        Ok(RuleLine::Suffix {
            key: key.to_string(),
            short: short.chars().skip(1).collect(),
        })
    } else if let Some(key) = long.strip_suffix('-') {
        Ok(RuleLine::Prefix {
            key: key.to_string(),
            short,
        })
    } else {
        Ok(RuleLine::Abbreviation { long, short })
    }
}

/// Collapse a spaced multi-letter acronym form ("i. e." → "i.e.").
///
/// Only fires when the spaced string decomposes into period-terminated
/// letter-tokens: three characters per token including the period, minus one
/// space fewer than tokens, equals the total length.
fn collapse_acronym_spaces(short: &str) -> String {
    if !short.contains(' ') {
        return short.to_string();
    }
    let periods = short.chars().filter(|&c| c == '.').count();
    if 3 * periods == short.chars().count() + 1 {
        short.replace(' ', "")
    } else {
        short.to_string()
    }
}

/// Immutable lookup tables built once from a word list file.
///
/// Holds the four rule tables plus derived bounds that cap the substring
/// trimming loops in [`crate::matcher`] and the multiword join window in
/// [`crate::abbreviate`]. All keys are case-folded; nothing is mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct WordListStore {
    abbreviations: HashMap<String, String>,
    non_abbreviations: HashSet<String>,
    prefixes: HashMap<String, String>,
    suffixes: HashMap<String, String>,
    /// Shortest prefix key, in chars (0 when no prefix rules exist).
    prefix_min_len: usize,
    /// Shortest suffix key, in chars (0 when no suffix rules exist).
    suffix_min_len: usize,
    /// Largest space count among exact-match keys.
    abbrev_max_words: usize,
    /// Largest space count among non-abbreviation entries.
    non_abbrev_max_words: usize,
}

impl WordListStore {
    /// Read and parse a word list file.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn load(path: &Utf8Path) -> WordListResult<Self> {
        let raw = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
            WordListError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::parse(&raw)
    }

    /// Parse word list text into a store.
    ///
    /// Fail-fast: any malformed line aborts the whole parse. Duplicate keys
    /// within a table resolve last-write-wins.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn parse(text: &str) -> WordListResult<Self> {
        let mut abbreviations = HashMap::new();
        let mut non_abbreviations = HashSet::new();
        let mut prefixes = HashMap::new();
        let mut suffixes = HashMap::new();

        for (idx, raw) in text.lines().enumerate() {
            match classify_line(raw, idx + 1)? {
                RuleLine::Abbreviation { long, short } => {
                    abbreviations.insert(long, short);
                }
                RuleLine::NonAbbreviation { long } => {
                    non_abbreviations.insert(long);
                }
                RuleLine::Prefix { key, short } => {
                    prefixes.insert(key, short);
                }
                RuleLine::Suffix { key, short } => {
                    suffixes.insert(key, short);
                }
            }
        }

        let store = Self {
            prefix_min_len: min_key_len(prefixes.keys()),
            suffix_min_len: min_key_len(suffixes.keys()),
            abbrev_max_words: max_space_count(abbreviations.keys()),
            non_abbrev_max_words: max_space_count(non_abbreviations.iter()),
            abbreviations,
            non_abbreviations,
            prefixes,
            suffixes,
        };

        tracing::debug!(
            abbreviations = store.abbreviations.len(),
            non_abbreviations = store.non_abbreviations.len(),
            prefixes = store.prefixes.len(),
            suffixes = store.suffixes.len(),
            "word list parsed"
        );

        Ok(store)
    }

    /// Look up an exact abbreviation for a case-folded word or phrase.
    pub fn abbreviation(&self, key: &str) -> Option<&str> {
        self.abbreviations.get(key).map(String::as_str)
    }

    /// Whether a case-folded word or phrase must never be abbreviated.
    pub fn is_non_abbreviation(&self, key: &str) -> bool {
        self.non_abbreviations.contains(key)
    }

    /// Whether a case-folded phrase is a known table entry of either kind.
    ///
    /// Used by the multiword join: a joined phrase is kept when it is either
    /// an exact abbreviation or a non-abbreviation entry.
    pub fn is_known_phrase(&self, key: &str) -> bool {
        self.abbreviations.contains_key(key) || self.non_abbreviations.contains(key)
    }

    /// Look up the short form registered for a prefix key.
    pub fn prefix(&self, key: &str) -> Option<&str> {
        self.prefixes.get(key).map(String::as_str)
    }

    /// Look up the short form registered for a suffix key.
    pub fn suffix(&self, key: &str) -> Option<&str> {
        self.suffixes.get(key).map(String::as_str)
    }

    /// Whether any prefix rules are registered.
    pub fn has_prefixes(&self) -> bool {
        !self.prefixes.is_empty()
    }

    /// Whether any suffix rules are registered.
    pub fn has_suffixes(&self) -> bool {
        !self.suffixes.is_empty()
    }

    /// Shortest prefix key length, in chars.
    pub const fn prefix_min_len(&self) -> usize {
        self.prefix_min_len
    }

    /// Shortest suffix key length, in chars.
    pub const fn suffix_min_len(&self) -> usize {
        self.suffix_min_len
    }

    /// Largest space count among exact-match keys.
    pub const fn abbrev_max_words(&self) -> usize {
        self.abbrev_max_words
    }

    /// Largest space count among non-abbreviation entries.
    pub const fn non_abbrev_max_words(&self) -> usize {
        self.non_abbrev_max_words
    }

    /// Summarize table sizes and derived bounds.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            abbreviations: self.abbreviations.len(),
            non_abbreviations: self.non_abbreviations.len(),
            prefixes: self.prefixes.len(),
            suffixes: self.suffixes.len(),
            prefix_min_len: self.prefix_min_len,
            suffix_min_len: self.suffix_min_len,
            abbrev_max_words: self.abbrev_max_words,
            non_abbrev_max_words: self.non_abbrev_max_words,
        }
    }
}

/// Table sizes and derived bounds of a loaded [`WordListStore`].
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct StoreStats {
    /// Number of exact abbreviation entries.
    pub abbreviations: usize,
    /// Number of non-abbreviation entries.
    pub non_abbreviations: usize,
    /// Number of prefix rules.
    pub prefixes: usize,
    /// Number of suffix rules.
    pub suffixes: usize,
    /// Shortest prefix key length, in chars.
    pub prefix_min_len: usize,
    /// Shortest suffix key length, in chars.
    pub suffix_min_len: usize,
    /// Largest space count among exact-match keys.
    pub abbrev_max_words: usize,
    /// Largest space count among non-abbreviation entries.
    pub non_abbrev_max_words: usize,
}

fn min_key_len<'a>(keys: impl Iterator<Item = &'a String>) -> usize {
    keys.map(|k| k.chars().count()).min().unwrap_or(0)
}

fn max_space_count<'a>(keys: impl Iterator<Item = &'a String>) -> usize {
    keys.map(|k| k.chars().filter(|&c| c == ' ').count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
journal;j.
chemical-;chem.
-ology;-ol.
international;n.a.
new england journal;new engl. j.
";

    #[test]
    fn classifies_all_four_rule_kinds() {
        let store = WordListStore::parse(SAMPLE).unwrap();
        assert_eq!(store.abbreviation("journal"), Some("j."));
        assert!(store.is_non_abbreviation("international"));
        assert_eq!(store.prefix("chemical"), Some("chem."));
        assert_eq!(store.suffix("ology"), Some("ol."));
    }

    #[test]
    fn keys_are_case_folded() {
        let store = WordListStore::parse("Journal;J.\n").unwrap();
        assert_eq!(store.abbreviation("journal"), Some("j."));
        assert_eq!(store.abbreviation("Journal"), None);
    }

    #[test]
    fn malformed_line_aborts_load() {
        let err = WordListStore::parse("journal;j.\nno-semicolon-here\n").unwrap_err();
        match err {
            WordListError::Format { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "no-semicolon-here");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn three_fields_is_malformed() {
        assert!(WordListStore::parse("a;b;c\n").is_err());
    }

    #[test]
    fn empty_field_is_malformed() {
        assert!(WordListStore::parse(";j.\n").is_err());
        assert!(WordListStore::parse("journal;\n").is_err());
    }

    #[test]
    fn blank_interior_line_is_malformed() {
        assert!(WordListStore::parse("journal;j.\n\nreview;rev.\n").is_err());
    }

    #[test]
    fn trailing_newline_is_fine() {
        assert!(WordListStore::parse("journal;j.\n").is_ok());
    }

    #[test]
    fn acronym_spaces_collapsed() {
        // "i. e." decomposes into two period-terminated letter-tokens:
        // 3 chars per token minus one space = 5 = spaced length.
        let store = WordListStore::parse("id est;I. E.\n").unwrap();
        assert_eq!(store.abbreviation("id est"), Some("i.e."));
    }

    #[test]
    fn non_acronym_spaced_short_form_kept() {
        let store = WordListStore::parse("new england journal;new engl. j.\n").unwrap();
        assert_eq!(store.abbreviation("new england journal"), Some("new engl. j."));
    }

    #[test]
    fn duplicate_key_last_write_wins() {
        let store = WordListStore::parse("journal;j.\njournal;jour.\n").unwrap();
        assert_eq!(store.abbreviation("journal"), Some("jour."));
    }

    #[test]
    fn derived_bounds() {
        let store = WordListStore::parse(SAMPLE).unwrap();
        assert_eq!(store.prefix_min_len(), 8); // "chemical"
        assert_eq!(store.suffix_min_len(), 5); // "ology"
        assert_eq!(store.abbrev_max_words(), 2); // "new england journal"
        assert_eq!(store.non_abbrev_max_words(), 0);
    }

    #[test]
    fn empty_tables_have_zero_bounds() {
        let store = WordListStore::parse("journal;j.\n").unwrap();
        assert!(!store.has_prefixes());
        assert!(!store.has_suffixes());
        assert_eq!(store.prefix_min_len(), 0);
        assert_eq!(store.suffix_min_len(), 0);
    }

    #[test]
    fn known_phrase_covers_both_tables() {
        let store = WordListStore::parse(SAMPLE).unwrap();
        assert!(store.is_known_phrase("journal"));
        assert!(store.is_known_phrase("international"));
        assert!(!store.is_known_phrase("chemical"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = WordListStore::load(Utf8Path::new("/nonexistent/ltwa.csv")).unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
    }

    #[test]
    fn load_reads_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), SAMPLE).unwrap();
        let path = Utf8Path::from_path(tmp.path()).unwrap();
        let store = WordListStore::load(path).unwrap();
        assert_eq!(store.abbreviation("journal"), Some("j."));
    }
}
