//! Bounded string similarity over normalized text.

use std::collections::HashSet;

/// Shingle length for the Jaccard metric, sized to the shortest part
/// numbers in the catalog.
const SHINGLE_LEN: usize = 3;

/// Similarity metric applied to every field comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// Character-shingle Jaccard; better at rejecting accidental matches.
    #[default]
    Jaccard,
    /// Normalized Levenshtein via `strsim`; simpler, more permissive.
    Levenshtein,
}

/// Score two optional normalized fields.
///
/// Returns `None` when either side is absent — "no data" is propagated,
/// not collapsed to 0.0, so the aggregator can exclude the field.
pub fn similarity(a: Option<&str>, b: Option<&str>, metric: Metric) -> Option<f64> {
    let (a, b) = (a?, b?);
    let score = match metric {
        Metric::Jaccard => shingle_jaccard(a, b),
        Metric::Levenshtein => strsim::normalized_levenshtein(a, b),
    };
    Some(score)
}

/// Jaccard similarity over the sets of contiguous `SHINGLE_LEN`-character
/// substrings.
///
/// Strings shorter than the shingle length degrade to a single
/// whole-string shingle. Empty-set convention: both empty → 1.0, exactly
/// one empty → 0.0.
pub fn shingle_jaccard(a: &str, b: &str) -> f64 {
    let sa = shingles(a, SHINGLE_LEN);
    let sb = shingles(b, SHINGLE_LEN);

    match (sa.is_empty(), sb.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let intersection = sa.intersection(&sb).count();
    let union = sa.len() + sb.len() - intersection;
    intersection as f64 / union as f64
}

fn shingles(text: &str, n: usize) -> HashSet<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return HashSet::new();
    }
    if chars.len() < n {
        return HashSet::from([text.to_string()]);
    }
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

#[cfg(test)]
#[path = "tests/similarity_tests.rs"]
mod tests;
