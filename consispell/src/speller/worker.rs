use super::distance::edit_distance_within;
use super::suggestion::Suggestion;
use super::SpellerConfig;
use crate::lexicon::Lexicon;
use crate::types::Weight;

/// Per-query search state. Only length buckets that can still be within
/// the configured distance are scanned; everything else in the lexicon is
/// skipped without computing a distance.
pub(crate) struct SuggestionWorker<'a> {
    lexicon: &'a Lexicon,
    word: &'a str,
    config: &'a SpellerConfig,
}

impl<'a> SuggestionWorker<'a> {
    #[inline(always)]
    pub(crate) fn new(
        lexicon: &'a Lexicon,
        word: &'a str,
        config: &'a SpellerConfig,
    ) -> SuggestionWorker<'a> {
        SuggestionWorker {
            lexicon,
            word,
            config,
        }
    }

    pub(crate) fn suggest(&self) -> Vec<Suggestion> {
        let word_len = self.word.chars().count();
        let min_len = word_len.saturating_sub(self.config.max_distance);
        let max_len = word_len + self.config.max_distance;

        let mut out: Vec<Suggestion> = Vec::new();

        for len in min_len..=max_len {
            for candidate in self.lexicon.words_of_len(len) {
                if let Some(distance) =
                    edit_distance_within(self.word, candidate, self.config.max_distance)
                {
                    out.push(Suggestion::new(candidate.clone(), distance as Weight));
                }
            }
        }

        out.sort();
        out.truncate(self.config.n_best);
        out
    }
}
