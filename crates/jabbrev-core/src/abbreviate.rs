//! Title abbreviation pipeline.
//!
//! [`abbreviate`] tokenizes a full title, merges multiword phrases that are
//! themselves table entries, transforms each word via [`crate::matcher`],
//! elides prepositions, and reassembles the short title. Each call is a pure
//! pipeline over the immutable store; no state survives between calls, so
//! concurrent calls need no locking.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::matcher::{capitalize_first, process_word};
use crate::word_list::WordListStore;

/// Prepositions elided from abbreviated titles (unless final token).
static PREPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["of", "the", "and", "for", "a", "in", "on"]
        .into_iter()
        .collect()
});

/// Abbreviate a full journal title.
///
/// Tokenization splits on the literal space character only; consecutive
/// spaces yield empty tokens by design. Single-token titles are returned
/// with only their first letter uppercased — no per-word rules and no
/// preposition elision apply to them. Never fails: degenerate input
/// (including the empty string) falls through the single-token path.
#[tracing::instrument(skip_all, fields(title_len = title.len()))]
pub fn abbreviate(title: &str, store: &WordListStore) -> String {
    let mut tokens: Vec<String> = title.split(' ').map(str::to_string).collect();

    join_multiwords(&mut tokens, store);

    if tokens.len() == 1 {
        return capitalize_first(&tokens[0]);
    }

    let mut short_words: Vec<String> = tokens
        .iter()
        .map(|w| process_word(w.trim_matches(','), store))
        .collect();

    // Omit prepositions unless they occur at the end.
    let last = short_words.len() - 1;
    for word in &mut short_words[..last] {
        if PREPOSITIONS.contains(word.to_lowercase().as_str()) {
            word.clear();
        }
    }

    short_words
        .iter()
        .filter(|w| !w.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Merge consecutive tokens whose joined, case-folded form is a known table
/// entry (exact abbreviation or non-abbreviation).
///
/// Window sizes run 4, 3, 2, largest first, scanning left to right. The
/// first match for a window size consumes its tokens and ends that size's
/// scan — no rescan, no backtracking. Window sizes larger than any key in
/// either table are skipped outright (the derived max-word bounds make the
/// check free).
fn join_multiwords(tokens: &mut Vec<String>, store: &WordListStore) {
    let max_spaces = store.abbrev_max_words().max(store.non_abbrev_max_words());
    for num_words in (2..=4usize).rev() {
        if num_words - 1 > max_spaces || tokens.len() < num_words {
            continue;
        }
        for start in 0..=(tokens.len() - num_words) {
            let trial = tokens[start..start + num_words].join(" ").to_lowercase();
            if store.is_known_phrase(&trial) {
                tokens[start] = trial;
                tokens.drain(start + 1..start + num_words);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> WordListStore {
        WordListStore::parse(
            "journal;j.\nchemi-;chem.\nphysic-;phys.\nresearch;res.\n\
             new england journal;new engl. j.\nnew england;n. engl.\n",
        )
        .unwrap()
    }

    #[test]
    fn end_to_end_example() {
        // "the" is a preposition (elided), "Chemical" hits the chemi- prefix,
        // "Journal" hits the exact table.
        assert_eq!(abbreviate("The Chemical Journal", &store()), "Chem. J.");
    }

    #[test]
    fn single_token_only_capitalized() {
        let s = store();
        // exact-match key, but single-token titles bypass all rules
        assert_eq!(abbreviate("journal", &s), "Journal");
        assert_eq!(abbreviate("PHYSICS", &s), "Physics");
    }

    #[test]
    fn empty_title_yields_empty_string() {
        assert_eq!(abbreviate("", &store()), "");
    }

    #[test]
    fn middle_preposition_elided() {
        assert_eq!(abbreviate("Journal of Physics", &store()), "J. Phys.");
    }

    #[test]
    fn trailing_preposition_kept() {
        assert_eq!(abbreviate("Research In", &store()), "Res. In");
    }

    #[test]
    fn larger_window_consumed_first() {
        // Both the 3-word and 2-word phrases match at index 0; the 3-word
        // phrase wins and the 2-word entry never fires there.
        let out = abbreviate("New England Journal Medicine", &store());
        assert_eq!(out, "New engl. j. Medicine");
    }

    #[test]
    fn two_word_window_matches_when_three_does_not() {
        let out = abbreviate("New England Review", &store());
        assert_eq!(out, "N. engl. Review");
    }

    #[test]
    fn commas_stripped_before_matching() {
        assert_eq!(abbreviate("Journal, of Physics", &store()), "J. Phys.");
    }

    #[test]
    fn consecutive_spaces_yield_empty_tokens() {
        // Empty tokens process to empty strings and drop out of the join.
        assert_eq!(abbreviate("Journal  of Physics", &store()), "J. Phys.");
    }

    #[test]
    fn determinism_across_loads() {
        let a = store();
        let b = store();
        for title in [
            "The Chemical Journal",
            "New England Journal Medicine",
            "Journal of Physics",
            "Unrelated Words Here",
        ] {
            assert_eq!(abbreviate(title, &a), abbreviate(title, &b));
        }
    }
}
