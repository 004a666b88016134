//! Dictionary membership and edit-distance candidate generation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use unic_ucd_category::GeneralCategory;

use self::suggestion::Suggestion;
use self::worker::SuggestionWorker;
use crate::constants::{MAX_EDIT_DISTANCE, MAX_SUGGESTIONS};
use crate::lexicon::Lexicon;
use crate::tokenizer::case::lower_case;

pub mod distance;
pub mod suggestion;
mod worker;

/// Bounds for the candidate search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpellerConfig {
    /// maximum edit distance for a dictionary word to qualify
    pub max_distance: usize,
    /// maximum number of ranked candidates returned
    pub n_best: usize,
}

impl SpellerConfig {
    /// The stock configuration: distance 2, three candidates.
    pub const fn default() -> SpellerConfig {
        SpellerConfig {
            max_distance: MAX_EDIT_DISTANCE,
            n_best: MAX_SUGGESTIONS,
        }
    }
}

/// Spell checking against a loaded word list.
pub trait Speller {
    /// Whether the word is acceptable as written.
    fn is_correct(&self, word: &str) -> bool;
    /// Ranked correction candidates with the stock configuration.
    fn suggest(&self, word: &str) -> Vec<Suggestion>;
    /// Ranked correction candidates. An empty result means nothing in the
    /// word list is within `max_distance`; that is a normal outcome.
    fn suggest_with_config(&self, word: &str, config: &SpellerConfig) -> Vec<Suggestion>;
}

/// [`Speller`] backed by a shared [`Lexicon`].
#[derive(Debug, Clone)]
pub struct LexiconSpeller {
    lexicon: Arc<Lexicon>,
}

impl LexiconSpeller {
    /// Creates a speller over the given lexicon.
    pub fn new(lexicon: Arc<Lexicon>) -> LexiconSpeller {
        LexiconSpeller { lexicon }
    }

    /// The backing lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl Speller for LexiconSpeller {
    fn is_correct(&self, word: &str) -> bool {
        if word.is_empty() {
            return true;
        }

        // A word with zero letters according to the Unicode letter
        // category is not spellable and passes as-is.
        if word.chars().all(|c| !GeneralCategory::of(c).is_letter()) {
            return true;
        }

        let normalized = lower_case(word);
        self.lexicon.is_exempt(&normalized) || self.lexicon.is_known(&normalized)
    }

    #[inline]
    fn suggest(&self, word: &str) -> Vec<Suggestion> {
        self.suggest_with_config(word, &SpellerConfig::default())
    }

    fn suggest_with_config(&self, word: &str, config: &SpellerConfig) -> Vec<Suggestion> {
        if word.is_empty() {
            return vec![];
        }

        let normalized = lower_case(word);
        SuggestionWorker::new(&self.lexicon, &normalized, config).suggest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speller(words: &[&str]) -> LexiconSpeller {
        LexiconSpeller::new(Arc::new(Lexicon::from_words(
            words.iter().copied(),
            ["telangana"],
        )))
    }

    #[test]
    fn membership() {
        let speller = speller(&["world", "hello"]);

        assert!(speller.is_correct("world"));
        assert!(speller.is_correct("Hello"));
        assert!(speller.is_correct("telangana"));
        assert!(!speller.is_correct("wrld"));
        assert!(speller.is_correct(""));
        assert!(speller.is_correct("1234!"));
    }

    #[test]
    fn suggests_within_distance() {
        let speller = speller(&["world", "word", "would", "apple"]);
        let suggestions = speller.suggest("wrld");

        let values: Vec<&str> = suggestions.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec!["world", "word", "would"]);
        assert_eq!(suggestions[0].weight(), 1);
    }

    #[test]
    fn empty_when_nothing_is_close() {
        let speller = speller(&["world"]);
        assert!(speller.suggest("xylophone").is_empty());
    }

    #[test]
    fn input_is_normalized() {
        let speller = speller(&["world"]);
        let suggestions = speller.suggest("WRLD");

        assert_eq!(suggestions[0].value(), "world");
    }

    #[test]
    fn n_best_truncates() {
        let speller = speller(&["cat", "bat", "rat", "mat", "hat"]);
        let suggestions = speller.suggest_with_config(
            "cart",
            &SpellerConfig {
                max_distance: 2,
                n_best: 2,
            },
        );

        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn exempt_words_are_not_candidates() {
        let speller = speller(&["world"]);
        // "telangana" is exempt, not in the word list; a near miss gets no
        // candidate from the exempt set.
        assert!(speller.suggest("telengana").is_empty());
    }
}
