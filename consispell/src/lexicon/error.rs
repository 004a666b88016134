use thiserror::Error;

/// Failure while loading a word list from an external source. Callers of
/// [`Lexicon::load`](crate::lexicon::Lexicon::load) never see this; it is
/// converted into the embedded-fallback path at the boundary.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Fetching the word list over the network failed.
    #[error("word list fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Reading the word list from disk failed.
    #[error("word list read failed: {0}")]
    Io(#[from] std::io::Error),

    /// The payload did not look like a word list.
    #[error("malformed word list: {0}")]
    Malformed(&'static str),
}
