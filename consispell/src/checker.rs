//! The check pipeline: tokenize, cluster, then merge per-occurrence
//! suggestions in document order.

use std::sync::Arc;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::cluster::{ClusterConfig, VariantClusterer, VariantMap};
use crate::context::ContextConfig;
use crate::lexicon::Lexicon;
use crate::speller::{LexiconSpeller, Speller, SpellerConfig};
use crate::tokenizer::case::{apply_mutation, detect_mutation};
use crate::tokenizer::{Token, Tokenize};

/// Which rule produced a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rationale {
    /// the word is not in the word list and nothing is within reach;
    /// the record is a no-suggestion marker
    DictionaryMiss,
    /// the correction came from the edit-distance candidate search
    EditDistance,
    /// the word is a non-canonical spelling variant within this document
    ConsistencyVariant,
}

/// One flagged occurrence. A word misspelled three times yields three
/// records, one per occurrence, in document order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    /// the occurrence as written
    pub surface: SmolStr,
    /// the proposed replacement; `None` is the explicit no-suggestion
    /// marker
    pub correction: Option<SmolStr>,
    /// which rule produced this record
    pub rationale: Rationale,
    /// byte offset of the occurrence in the input text
    pub offset: usize,
}

/// Curated misspelling fixes consulted before the candidate search.
pub fn overrides_defaults() -> HashMap<SmolStr, SmolStr> {
    static PAIRS: &[(&str, &str)] = &[
        ("laptp", "laptop"),
        ("compter", "computer"),
        ("mobil", "mobile"),
        ("hellow", "hello"),
        ("wrold", "world"),
        ("teh", "the"),
        ("adn", "and"),
        ("recieve", "receive"),
        ("seperate", "separate"),
        ("definately", "definitely"),
        ("occured", "occurred"),
        ("begining", "beginning"),
        ("untill", "until"),
        ("wich", "which"),
        ("thier", "their"),
        ("freind", "friend"),
        ("beleive", "believe"),
        ("achive", "achieve"),
        ("wierd", "weird"),
        ("neccessary", "necessary"),
        ("programing", "programming"),
        ("sofware", "software"),
        ("hardwar", "hardware"),
        ("keyborad", "keyboard"),
        ("mous", "mouse"),
        ("scren", "screen"),
        ("moniter", "monitor"),
        ("telanagana", "telangana"),
        ("telagana", "telangana"),
        ("telengana", "telangana"),
    ];

    PAIRS
        .iter()
        .map(|(from, to)| (SmolStr::new(from), SmolStr::new(to)))
        .collect()
}

/// Pipeline configuration. The simpler historical behaviors are the same
/// pipeline with clustering, context suppression or overrides disabled.
#[derive(Clone, Debug)]
pub struct CheckerConfig {
    /// bounds for the candidate search
    pub speller: SpellerConfig,
    /// join threshold for variant clustering
    pub cluster: ClusterConfig,
    /// whether the clustering pass runs at all
    pub clustering: bool,
    /// whether name contexts suppress corrections
    pub context_suppression: bool,
    /// curated fixes applied ahead of the candidate search; empty
    /// disables the pass
    pub overrides: HashMap<SmolStr, SmolStr>,
}

impl Default for CheckerConfig {
    fn default() -> CheckerConfig {
        CheckerConfig {
            speller: SpellerConfig::default(),
            cluster: ClusterConfig::default(),
            clustering: true,
            context_suppression: true,
            overrides: overrides_defaults(),
        }
    }
}

/// The spelling and document-consistency engine.
///
/// Construction is cheap; the lexicon is shared by reference and read
/// only. All per-check state is local to [`check`](TextChecker::check),
/// so one checker may serve concurrent checks from multiple threads.
#[derive(Debug, Clone)]
pub struct TextChecker {
    lexicon: Arc<Lexicon>,
    speller: LexiconSpeller,
    context: ContextConfig,
    config: CheckerConfig,
}

impl TextChecker {
    /// Creates a checker with stock context data and configuration.
    pub fn new(lexicon: Arc<Lexicon>) -> TextChecker {
        TextChecker::with_config(lexicon, ContextConfig::default(), CheckerConfig::default())
    }

    /// Creates a checker with explicit context data and configuration.
    pub fn with_config(
        lexicon: Arc<Lexicon>,
        context: ContextConfig,
        config: CheckerConfig,
    ) -> TextChecker {
        TextChecker {
            speller: LexiconSpeller::new(lexicon.clone()),
            lexicon,
            context,
            config,
        }
    }

    /// The backing lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The resolved cluster canonicalization map for one document, for
    /// callers that want consistency data without full merging.
    pub fn variant_map(&self, text: &str) -> VariantMap {
        let tokens: Vec<Token> = text.word_tokens().collect();
        self.cluster(&tokens)
    }

    fn cluster(&self, tokens: &[Token]) -> VariantMap {
        VariantClusterer::new(&self.lexicon, self.config.cluster.clone()).cluster(tokens)
    }

    /// Checks a whole document and returns the flagged occurrences in
    /// document order. Never fails: empty input yields an empty list and
    /// word-list trouble has already been absorbed at load time.
    pub fn check(&self, text: &str) -> Vec<SuggestionRecord> {
        // Phase 1: the whole token sequence, then the cluster map. No
        // suggestion is final until every token has been seen.
        let tokens: Vec<Token> = text.word_tokens().collect();

        if tokens.is_empty() {
            return vec![];
        }

        let variants = if self.config.clustering {
            self.cluster(&tokens)
        } else {
            VariantMap::new()
        };

        // Phase 2: stream occurrences in order.
        let mut records = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            if self.lexicon.is_exempt(&token.normalized) {
                continue;
            }

            if self.config.context_suppression && self.context.is_likely_name(&tokens, index) {
                continue;
            }

            if let Some(canonical) = variants.get(&token.normalized) {
                records.push(SuggestionRecord {
                    surface: token.surface.clone(),
                    correction: Some(canonical.clone()),
                    rationale: Rationale::ConsistencyVariant,
                    offset: token.offset,
                });
                continue;
            }

            if self.lexicon.is_known(&token.normalized) {
                continue;
            }

            let mutation = detect_mutation(&token.surface);

            if let Some(fix) = self.config.overrides.get(&token.normalized) {
                records.push(SuggestionRecord {
                    surface: token.surface.clone(),
                    correction: Some(apply_mutation(mutation, fix)),
                    rationale: Rationale::EditDistance,
                    offset: token.offset,
                });
                continue;
            }

            let candidates = self
                .speller
                .suggest_with_config(&token.normalized, &self.config.speller);

            match candidates.first() {
                Some(best) => records.push(SuggestionRecord {
                    surface: token.surface.clone(),
                    correction: Some(apply_mutation(mutation, best.value())),
                    rationale: Rationale::EditDistance,
                    offset: token.offset,
                }),
                None => records.push(SuggestionRecord {
                    surface: token.surface.clone(),
                    correction: None,
                    rationale: Rationale::DictionaryMiss,
                    offset: token.offset,
                }),
            }
        }

        records
    }
}
