//! Per-word classification and transformation.
//!
//! Pure functions of `(word, store)`: nothing here mutates the store or
//! carries state between calls. [`process_word`] applies the rule priority
//! from the abbreviation standard — acronym passthrough, non-abbreviation,
//! exact match, prefix, suffix, then plain capitalization.

use crate::word_list::WordListStore;

/// Find the longest registered prefix of `word` and return its short form.
///
/// Trims characters off the end of the word, one at a time, down to the
/// store's shortest prefix key; the first hit is the longest match. This
/// costs at most `len(word) - prefix_min_len` lookups instead of a substring
/// comparison against every rule.
pub fn match_prefix(word: &str, store: &WordListStore) -> Option<String> {
    if !store.has_prefixes() {
        return None;
    }
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    for trim_stop in (store.prefix_min_len()..=chars.len()).rev() {
        let candidate: String = chars[..trim_stop].iter().collect();
        if let Some(short) = store.prefix(&candidate) {
            return Some(short.to_string());
        }
    }
    None
}

/// Find the longest registered suffix of `word` and return the word with
/// that suffix substituted.
///
/// Mirror of [`match_prefix`]: trims characters off the front, keeping the
/// unmatched leading portion and appending the suffix's short form.
pub fn match_suffix(word: &str, store: &WordListStore) -> Option<String> {
    if !store.has_suffixes() {
        return None;
    }
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let last_start = chars.len().checked_sub(store.suffix_min_len())?;
    for trim_start in 1..=last_start {
        let candidate: String = chars[trim_start..].iter().collect();
        if let Some(short) = store.suffix(&candidate) {
            let head: String = chars[..trim_start].iter().collect();
            return Some(head + short);
        }
    }
    None
}

/// Transform a single title word according to the store's rules.
///
/// Priority order, first match wins:
///
/// 1. All-caps word (ignoring surrounding punctuation) — an existing
///    acronym, returned unchanged.
/// 2. Non-abbreviation entry — original word, title-cased.
/// 3. Exact abbreviation — stored short form, title-cased.
/// 4. Prefix rule match, title-cased.
/// 5. Suffix rule match, title-cased.
/// 6. No rule — the word with its first character uppercased and the rest
///    lowercased.
pub fn process_word(word: &str, store: &WordListStore) -> String {
    if is_existing_acronym(word) {
        return word.to_string();
    }

    let folded = word.to_lowercase();

    if store.is_non_abbreviation(&folded) {
        return capitalize_first(word);
    }
    if let Some(short) = store.abbreviation(&folded) {
        return capitalize_first(short);
    }
    if let Some(short) = match_prefix(&folded, store) {
        return capitalize_first(&short);
    }
    if let Some(short) = match_suffix(&folded, store) {
        return capitalize_first(&short);
    }

    capitalize_first(word)
}

/// Whether a word is entirely upper-case once surrounding punctuation is
/// stripped. Requires at least one cased character.
fn is_existing_acronym(word: &str) -> bool {
    let stripped = word.trim_matches(|c: char| c.is_ascii_punctuation());
    let mut has_cased = false;
    for c in stripped.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Title-case: first character upper, remaining characters lower.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> WordListStore {
        WordListStore::parse(
            "journal;j.\nchemi-;chem.\n-ology;-ol.\ninternational;n.a.\nreview;rev.\n",
        )
        .unwrap()
    }

    #[test]
    fn all_caps_word_unchanged() {
        let s = store();
        assert_eq!(process_word("IEEE", &s), "IEEE");
        assert_eq!(process_word("ACM,", &s), "ACM,");
        // punctuation-stripped form is what counts
        assert_eq!(process_word("(USA)", &s), "(USA)");
    }

    #[test]
    fn non_abbreviation_title_cased() {
        let s = store();
        assert_eq!(process_word("international", &s), "International");
        assert_eq!(process_word("iNtErNaTiOnAl", &s), "International");
    }

    #[test]
    fn exact_match_any_casing() {
        let s = store();
        assert_eq!(process_word("journal", &s), "J.");
        assert_eq!(process_word("Journal", &s), "J.");
        assert_eq!(process_word("JOURNAL", &s), "JOURNAL"); // acronym rule wins
    }

    #[test]
    fn prefix_match() {
        let s = store();
        assert_eq!(process_word("chemical", &s), "Chem.");
        assert_eq!(process_word("chemistry", &s), "Chem.");
    }

    #[test]
    fn suffix_match_keeps_leading_portion() {
        let s = store();
        assert_eq!(match_suffix("biology", &s), Some("biol.".to_string()));
        assert_eq!(process_word("biology", &s), "Biol.");
    }

    #[test]
    fn longest_prefix_wins() {
        let s = WordListStore::parse("chem-;ch.\nchemi-;chem.\n").unwrap();
        assert_eq!(match_prefix("chemical", &s), Some("chem.".to_string()));
    }

    #[test]
    fn no_rule_capitalizes() {
        let s = store();
        assert_eq!(process_word("physics", &s), "Physics");
        assert_eq!(process_word("pHySiCs", &s), "Physics");
    }

    #[test]
    fn empty_tables_no_match() {
        let s = WordListStore::parse("journal;j.\n").unwrap();
        assert_eq!(match_prefix("chemical", &s), None);
        assert_eq!(match_suffix("biology", &s), None);
    }

    #[test]
    fn short_word_no_suffix_underflow() {
        let s = store();
        // shorter than the shortest suffix key
        assert_eq!(match_suffix("ab", &s), None);
    }

    #[test]
    fn capitalize_first_semantics() {
        assert_eq!(capitalize_first("new engl. j."), "New engl. j.");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("x"), "X");
    }
}
