pub const MAX_EDIT_DISTANCE: usize = 2;
pub const MAX_SUGGESTIONS: usize = 3;
// A join needs ratio strictly above the threshold. 0.7 keeps classic
// seven-letter transposition pairs (ratio 5/7) in one cluster.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;
pub const CONTEXT_WINDOW: usize = 4;
pub const FETCH_TIMEOUT_SECS: u64 = 5;
pub const MAX_WORDLIST_BYTES: usize = 4 * 1024 * 1024;
