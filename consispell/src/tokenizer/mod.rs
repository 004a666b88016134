//! Word extraction over letter runs, with positions and original casing.

use smol_str::SmolStr;
use unic_ucd_category::GeneralCategory;

pub mod case;

use case::lower_case;

/// A word extracted from input text. The surface form keeps the casing as
/// written; the normalized form is the lowercase variant used for all
/// matching and lookup. The offset is the byte position of the surface in
/// the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// the word as written
    pub surface: SmolStr,
    /// the lowercase form
    pub normalized: SmolStr,
    /// byte offset of the surface in the input text
    pub offset: usize,
}

/// Extension methods for extracting word tokens from text.
pub trait Tokenize {
    /// Iterates over `(offset, word)` pairs for every letter run.
    fn word_indices(&self) -> WordIndices;
    /// Iterates over [`Token`]s for every letter run.
    fn word_tokens(&self) -> Tokens;
}

impl Tokenize for str {
    fn word_indices(&self) -> WordIndices {
        WordIndices {
            text: self,
            cursor: 0,
        }
    }

    fn word_tokens(&self) -> Tokens {
        Tokens(self.word_indices())
    }
}

#[inline(always)]
fn is_word_char(ch: char) -> bool {
    GeneralCategory::of(ch).is_letter()
}

/// Iterator over `(byte offset, word)` pairs. Non-letter characters are
/// separators and are discarded.
pub struct WordIndices<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> Iterator for WordIndices<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let mut start = None;

        for (i, ch) in self.text[self.cursor..].char_indices() {
            let at = self.cursor + i;

            match start {
                None if is_word_char(ch) => start = Some(at),
                Some(s) if !is_word_char(ch) => {
                    self.cursor = at;
                    return Some((s, &self.text[s..at]));
                }
                _ => {}
            }
        }

        let end = self.text.len();
        self.cursor = end;
        start.map(|s| (s, &self.text[s..end]))
    }
}

/// Iterator over [`Token`]s in document order.
pub struct Tokens<'a>(WordIndices<'a>);

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.0.next().map(|(offset, surface)| Token {
            surface: SmolStr::new(surface),
            normalized: lower_case(surface),
            offset,
        })
    }
}
