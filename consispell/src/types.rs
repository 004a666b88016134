/// Penalty weight of a suggestion. For the word-list speller this is the
/// plain edit distance to the input.
pub type Weight = u32;

/// Similarity ratio between two normalized words, in `[0, 1]`.
pub type Ratio = f64;
