//! Pluggable word-list sources.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use smol_str::SmolStr;

use super::error::LexiconError;
use crate::constants::{FETCH_TIMEOUT_SECS, MAX_WORDLIST_BYTES};
use crate::tokenizer::case::lower_case;

/// Where a word list comes from. Implementations return the raw
/// newline-separated payload; parsing and validation happen in the
/// [`Lexicon`](crate::lexicon::Lexicon) loader.
pub trait WordListSource {
    /// Loads the raw word-list payload.
    fn load(&self) -> Result<String, LexiconError>;
}

/// Word list fetched over HTTP with a bounded timeout.
#[derive(Debug, Clone)]
pub struct HttpWordListSource {
    url: String,
    timeout: Duration,
}

impl HttpWordListSource {
    /// The word list the original deployment pulls at startup.
    pub const DEFAULT_URL: &'static str =
        "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt";

    /// Creates a source for `url` with the default timeout.
    pub fn new(url: impl Into<String>) -> HttpWordListSource {
        HttpWordListSource {
            url: url.into(),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
        }
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> HttpWordListSource {
        self.timeout = timeout;
        self
    }
}

impl Default for HttpWordListSource {
    fn default() -> HttpWordListSource {
        HttpWordListSource::new(HttpWordListSource::DEFAULT_URL)
    }
}

impl WordListSource for HttpWordListSource {
    fn load(&self) -> Result<String, LexiconError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let body = client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .text()?;

        Ok(body)
    }
}

/// Word list read from a local file, one word per line.
#[derive(Debug, Clone)]
pub struct FileWordListSource {
    path: PathBuf,
}

impl FileWordListSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> FileWordListSource {
        FileWordListSource { path: path.into() }
    }
}

impl WordListSource for FileWordListSource {
    fn load(&self) -> Result<String, LexiconError> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// Validates and normalizes a payload. Entries must be alphabetic; blank
/// lines are skipped.
pub(crate) fn parse_word_list(payload: &str) -> Result<Vec<SmolStr>, LexiconError> {
    let trimmed = payload.trim();

    if trimmed.is_empty() {
        return Err(LexiconError::Malformed("empty payload"));
    }

    if trimmed.len() > MAX_WORDLIST_BYTES {
        return Err(LexiconError::Malformed("payload too large"));
    }

    let mut words = Vec::new();

    for line in trimmed.lines() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if !line.chars().all(char::is_alphabetic) {
            return Err(LexiconError::Malformed("non-alphabetic entry"));
        }

        words.push(lower_case(line));
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parse_normalizes() {
        let words = parse_word_list("Hello\r\nWORLD\n\n  the \n").unwrap();
        assert_eq!(words, vec!["hello", "world", "the"]);
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(parse_word_list("").is_err());
        assert!(parse_word_list("  \n \n").is_err());
    }

    #[test]
    fn parse_rejects_markup() {
        assert!(parse_word_list("<html>not found</html>").is_err());
        assert!(parse_word_list("hello\nwor1d").is_err());
    }

    #[test]
    fn file_source_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha\nbeta").unwrap();

        let source = FileWordListSource::new(file.path());
        let words = parse_word_list(&source.load().unwrap()).unwrap();

        assert_eq!(words, vec!["alpha", "beta"]);
    }

    #[test]
    fn file_source_missing_is_io_error() {
        let source = FileWordListSource::new("/nonexistent/words.txt");
        assert!(matches!(source.load(), Err(LexiconError::Io(_))));
    }
}
