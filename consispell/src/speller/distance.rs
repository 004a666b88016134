//! Levenshtein distance, row-wise over the shorter string.

/// Edit distance between two strings, computed by dynamic programming
/// with a single row kept over the shorter input. Symmetric;
/// `edit_distance(a, a) == 0`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, sc) in short.iter().enumerate() {
            let substitution = diagonal + usize::from(lc != sc);
            let insertion = row[j] + 1;
            let deletion = row[j + 1] + 1;

            diagonal = row[j + 1];
            row[j + 1] = substitution.min(insertion).min(deletion);
        }
    }

    row[short.len()]
}

/// Edit distance bounded by `limit`: `Some(d)` when `d <= limit`, `None`
/// otherwise. Bails out as soon as a whole row exceeds the limit, which
/// is what makes the per-bucket dictionary scan tolerable.
pub fn edit_distance_within(a: &str, b: &str, limit: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if long.len() - short.len() > limit {
        return None;
    }

    if short.is_empty() {
        return Some(long.len());
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, sc) in short.iter().enumerate() {
            let substitution = diagonal + usize::from(lc != sc);
            let insertion = row[j] + 1;
            let deletion = row[j + 1] + 1;

            diagonal = row[j + 1];
            row[j + 1] = substitution.min(insertion).min(deletion);
        }

        if row.iter().all(|&cell| cell > limit) {
            return None;
        }
    }

    let distance = row[short.len()];
    (distance <= limit).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: &[&str] = &[
        "",
        "a",
        "world",
        "wrld",
        "receive",
        "recieve",
        "telangana",
        "telengana",
        "hyderabad",
        "kitten",
        "sitting",
    ];

    #[test]
    fn identity_is_zero() {
        for word in SAMPLE {
            assert_eq!(edit_distance(word, word), 0);
        }
    }

    #[test]
    fn symmetric() {
        for a in SAMPLE {
            for b in SAMPLE {
                assert_eq!(edit_distance(a, b), edit_distance(b, a));
            }
        }
    }

    #[test]
    fn known_distances() {
        assert_eq!(edit_distance("wrld", "world"), 1);
        assert_eq!(edit_distance("recieve", "receive"), 2);
        assert_eq!(edit_distance("telengana", "telangana"), 1);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn agrees_with_strsim() {
        for a in SAMPLE {
            for b in SAMPLE {
                assert_eq!(edit_distance(a, b), strsim::levenshtein(a, b));
            }
        }
    }

    #[test]
    fn bounded_matches_unbounded() {
        for a in SAMPLE {
            for b in SAMPLE {
                let d = edit_distance(a, b);
                for limit in 0..4 {
                    let expected = if d <= limit { Some(d) } else { None };
                    assert_eq!(edit_distance_within(a, b, limit), expected);
                }
            }
        }
    }

    #[test]
    fn unicode_counts_chars_not_bytes() {
        assert_eq!(edit_distance("naïve", "naive"), 1);
        assert_eq!(edit_distance("café", "cafe"), 1);
    }
}
