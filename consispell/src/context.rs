//! Context-window classification of proper names.
//!
//! A token that reads as a name in one place may be an ordinary word in
//! another, so classification runs per occurrence: the lowercase window
//! of the words immediately preceding the occurrence is scanned for
//! indicator phrases. Suppression is local to the occurrence and does
//! not affect clustering or other occurrences of the same word.

use hashbrown::HashSet;
use itertools::Itertools;
use smol_str::SmolStr;

use crate::constants::CONTEXT_WINDOW;
use crate::tokenizer::Token;

/// Phrases that introduce a personal name.
static NAME_INDICATORS: &[&str] = &[
    "my name is",
    "i am",
    "called",
    "name is",
    "hi i am",
    "hello i am",
    "this is",
];

/// Given names and city names recognized without any indicator phrase.
static NAME_DEFAULTS: &[&str] = &[
    "vishnu",
    "vishu",
    "ram",
    "krishna",
    "shiva",
    "lakshmi",
    "saraswati",
    "arjun",
    "bharat",
    "india",
    "telangana",
    "hyderabad",
    "bangalore",
    "mumbai",
    "delhi",
    "chennai",
    "kolkata",
    "pune",
    "ahmedabad",
    "john",
    "mary",
    "david",
    "sarah",
    "michael",
    "jennifer",
    "robert",
    "lisa",
    "william",
    "karen",
    "james",
    "susan",
    "christopher",
    "jessica",
    "agneyra",
];

/// The name list and indicator phrases, consolidated into one immutable
/// configuration structure loaded at construction.
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// normalized words treated as names wherever they occur
    pub names: HashSet<SmolStr>,
    /// lowercase phrases that mark the following word as a name
    pub indicators: Vec<SmolStr>,
}

impl Default for ContextConfig {
    fn default() -> ContextConfig {
        ContextConfig {
            names: NAME_DEFAULTS.iter().map(|s| SmolStr::new(s)).collect(),
            indicators: NAME_INDICATORS.iter().map(|s| SmolStr::new(s)).collect(),
        }
    }
}

impl ContextConfig {
    /// A configuration that never suppresses anything.
    pub fn empty() -> ContextConfig {
        ContextConfig {
            names: HashSet::new(),
            indicators: Vec::new(),
        }
    }

    /// Whether the occurrence at `index` reads as a proper name: either
    /// its normalized form is in the name list, or an indicator phrase
    /// occurs in the window of up to four words preceding it.
    pub fn is_likely_name(&self, tokens: &[Token], index: usize) -> bool {
        let token = &tokens[index];

        if self.names.contains(&token.normalized) {
            return true;
        }

        let start = index.saturating_sub(CONTEXT_WINDOW);
        let window: String = tokens[start..index]
            .iter()
            .map(|t| t.normalized.as_str())
            .join(" ");

        self.indicators
            .iter()
            .any(|phrase| window.contains(phrase.as_str()))
    }
}
