//! Case helpers for normalization and for re-casing corrections.

use smol_str::SmolStr;

#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

#[inline(always)]
pub fn upper_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_uppercase().collect::<String>())
        .collect::<SmolStr>()
}

#[inline(always)]
pub fn upper_first(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_uppercase().collect::<String>() + c.as_str()),
    }
}

pub fn is_all_caps(word: &str) -> bool {
    upper_case(word) == word
}

pub fn is_first_caps(word: &str) -> bool {
    upper_first(word) == word
}

/// Casing shape of an input surface, reapplied to its corrections so a
/// miswritten `Wrld` is corrected to `World` rather than `world`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMutation {
    FirstCaps,
    AllCaps,
    None,
}

pub fn detect_mutation(word: &str) -> CaseMutation {
    if is_all_caps(word) {
        CaseMutation::AllCaps
    } else if is_first_caps(word) {
        CaseMutation::FirstCaps
    } else {
        CaseMutation::None
    }
}

pub fn apply_mutation(mutation: CaseMutation, value: &str) -> SmolStr {
    match mutation {
        CaseMutation::AllCaps => upper_case(value),
        CaseMutation::FirstCaps => upper_first(value),
        CaseMutation::None => SmolStr::new(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutations() {
        assert_eq!(detect_mutation("IDENTITETE"), CaseMutation::AllCaps);
        assert_eq!(detect_mutation("Identitete"), CaseMutation::FirstCaps);
        assert_eq!(detect_mutation("identitete"), CaseMutation::None);
        assert_eq!(detect_mutation("ideNtitete"), CaseMutation::None);
    }

    #[test]
    fn apply() {
        assert_eq!(apply_mutation(CaseMutation::AllCaps, "wrld"), "WRLD");
        assert_eq!(apply_mutation(CaseMutation::FirstCaps, "world"), "World");
        assert_eq!(apply_mutation(CaseMutation::None, "world"), "world");
        assert_eq!(apply_mutation(CaseMutation::FirstCaps, ""), "");
    }

    #[test]
    fn caps_checks() {
        assert!(is_all_caps("ABC"));
        assert!(!is_all_caps("Abc"));
        assert!(is_first_caps("Abc"));
        assert!(!is_first_caps("aBC"));
    }
}
