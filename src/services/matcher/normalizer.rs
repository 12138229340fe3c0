//! Text normalization for request and catalog fields.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for stripping non-alphanumeric characters.
static RE_NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("Invalid regex"));

/// Normalize free text into its comparable form.
///
/// Pipeline:
/// 1. Fold "ñ"/"Ñ" to "n"/"N" (literal substitution, no wider Unicode folding)
/// 2. Strip every character that is not an ASCII letter or digit
/// 3. Lowercase
///
/// Idempotent: normalizing already-normalized text is a no-op.
pub fn normalize(text: &str) -> String {
    let folded = text.replace('ñ', "n").replace('Ñ', "N");
    RE_NON_ALNUM.replace_all(&folded, "").to_lowercase()
}

/// Normalize an optional field, mapping missing or blank input to absent.
///
/// Absent is distinct from present-but-empty: input made of symbols only
/// (e.g. "---") stays present and normalizes to an empty string, while
/// `None` and whitespace-only input yield `None` so the aggregator can
/// skip the field entirely.
pub fn normalize_field(text: Option<&str>) -> Option<String> {
    let text = text?;
    if text.trim().is_empty() {
        return None;
    }
    Some(normalize(text))
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
