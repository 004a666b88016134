//! Word membership oracle: the known-word set, a length-bucketed index
//! for the suggestion search, and the known-correct exempt set.

use hashbrown::{HashMap, HashSet};
use smol_str::SmolStr;

pub mod error;
pub mod loader;

pub use self::error::LexiconError;
pub use self::loader::{FileWordListSource, HttpWordListSource, WordListSource};

use self::loader::parse_word_list;
use crate::tokenizer::case::lower_case;

/// Embedded minimal word list used when no external source can be loaded.
/// Part of the build, not runtime data.
static EMBEDDED_WORDS: &str = include_str!("words.txt");

/// Proper nouns and place names that are never flagged, never rewritten,
/// and always win as canonical spelling in variant clustering.
pub static KNOWN_CORRECT_DEFAULTS: &[&str] = &[
    "telangana",
    "maharashtra",
    "karnataka",
    "tamilnadu",
    "kerala",
    "gujarat",
    "rajasthan",
    "punjab",
    "haryana",
    "uttarpradesh",
    "madhyapradesh",
    "andhrapradesh",
    "westbengal",
    "bihar",
    "odisha",
    "assam",
    "jharkhand",
    "india",
    "america",
    "england",
    "australia",
    "canada",
    "germany",
    "france",
    "china",
    "japan",
    "russia",
    "brazil",
    "mexico",
    "italy",
    "spain",
];

/// Immutable word-list oracle. Built once, shared by reference for the
/// lifetime of an engine instance; no mutation occurs during a check, so
/// concurrent checks against the same lexicon are safe.
#[derive(Debug)]
pub struct Lexicon {
    words: HashSet<SmolStr>,
    by_len: HashMap<usize, Vec<SmolStr>>,
    exempt: HashSet<SmolStr>,
    fallback: bool,
}

impl Lexicon {
    /// Builds a lexicon directly from in-memory word and exempt sets.
    /// Everything is normalized to lowercase; empty entries are dropped.
    pub fn from_words<W, E>(words: W, exempt: E) -> Lexicon
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| lower_case(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        Lexicon::build(words, Lexicon::normalize_exempt(exempt), false)
    }

    /// Attempts `source`, falling back silently to the embedded word list
    /// on any failure. The fallback is not an error condition for callers;
    /// it is recorded and logged only.
    pub fn load<S, E>(source: &S, exempt: E) -> Lexicon
    where
        S: WordListSource + ?Sized,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let exempt = Lexicon::normalize_exempt(exempt);

        match source.load().and_then(|payload| parse_word_list(&payload)) {
            Ok(words) => {
                log::debug!("loaded {} words from external source", words.len());
                Lexicon::build(words, exempt, false)
            }
            Err(err) => {
                log::warn!("word list load failed, using embedded fallback: {}", err);
                Lexicon::build(Lexicon::embedded_words(), exempt, true)
            }
        }
    }

    /// Builds the lexicon from the embedded word list only.
    pub fn embedded<E>(exempt: E) -> Lexicon
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Lexicon::build(
            Lexicon::embedded_words(),
            Lexicon::normalize_exempt(exempt),
            true,
        )
    }

    fn embedded_words() -> Vec<SmolStr> {
        EMBEDDED_WORDS
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(SmolStr::new)
            .collect()
    }

    fn normalize_exempt<E>(exempt: E) -> HashSet<SmolStr>
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        exempt
            .into_iter()
            .map(|w| lower_case(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect()
    }

    fn build(words: Vec<SmolStr>, exempt: HashSet<SmolStr>, fallback: bool) -> Lexicon {
        let mut set = HashSet::with_capacity(words.len());
        let mut by_len: HashMap<usize, Vec<SmolStr>> = HashMap::new();

        for word in words {
            if set.insert(word.clone()) {
                by_len.entry(word.chars().count()).or_default().push(word);
            }
        }

        Lexicon {
            words: set,
            by_len,
            exempt,
            fallback,
        }
    }

    /// Whether the normalized word is in the known-word set.
    #[inline]
    pub fn is_known(&self, normalized: &str) -> bool {
        self.words.contains(normalized)
    }

    /// Whether the normalized word is in the known-correct exempt set.
    #[inline]
    pub fn is_exempt(&self, normalized: &str) -> bool {
        self.exempt.contains(normalized)
    }

    /// Number of distinct known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the known-word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether this lexicon was built from the embedded fallback list.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Known words whose character count is exactly `len`.
    pub(crate) fn words_of_len(&self, len: usize) -> &[SmolStr] {
        self.by_len.get(&len).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl WordListSource for FailingSource {
        fn load(&self) -> Result<String, LexiconError> {
            Err(LexiconError::Malformed("boom"))
        }
    }

    struct StaticSource(&'static str);

    impl WordListSource for StaticSource {
        fn load(&self) -> Result<String, LexiconError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn membership_is_normalized() {
        let lexicon = Lexicon::from_words(["Hello", "WORLD"], ["Telangana"]);

        assert!(lexicon.is_known("hello"));
        assert!(lexicon.is_known("world"));
        assert!(!lexicon.is_known("Hello"));
        assert!(lexicon.is_exempt("telangana"));
        assert!(!lexicon.is_exempt("hello"));
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn load_uses_source() {
        let lexicon = Lexicon::load(&StaticSource("alpha\nbeta\n"), ["india"]);

        assert!(!lexicon.is_fallback());
        assert!(lexicon.is_known("alpha"));
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn load_failure_falls_back() {
        let lexicon = Lexicon::load(&FailingSource, KNOWN_CORRECT_DEFAULTS.iter().copied());

        assert!(lexicon.is_fallback());
        assert!(!lexicon.is_empty());
        assert!(lexicon.is_known("receive"));
        assert!(lexicon.is_known("world"));
        assert!(lexicon.is_exempt("telangana"));
    }

    #[test]
    fn embedded_list_is_well_formed() {
        assert!(super::loader::parse_word_list(EMBEDDED_WORDS).is_ok());

        let lexicon = Lexicon::embedded(["india"]);
        assert!(lexicon.is_fallback());
        assert!(lexicon.is_known("hello"));
        assert!(lexicon.is_exempt("india"));
    }

    #[test]
    fn length_buckets() {
        let lexicon = Lexicon::from_words(["cat", "dog", "horse"], std::iter::empty::<&str>());

        assert_eq!(lexicon.words_of_len(3).len(), 2);
        assert_eq!(lexicon.words_of_len(5), ["horse"]);
        assert!(lexicon.words_of_len(9).is_empty());
    }
}
