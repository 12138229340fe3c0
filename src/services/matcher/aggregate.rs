//! Weighted aggregation of per-field similarity scores.

/// Primary identity signals.
const WEIGHT_PART_NUMBER: f64 = 4.0;
const WEIGHT_PRODUCT: f64 = 4.0;
/// Disambiguating signals.
const WEIGHT_CATEGORY: f64 = 1.0;
const WEIGHT_BRAND: f64 = 1.0;

/// Per-field similarity scores for one (query, candidate) pair.
/// `None` means the field was absent on at least one side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldScores {
    pub part_number: Option<f64>,
    pub product: Option<f64>,
    pub category: Option<f64>,
    pub brand: Option<f64>,
}

impl FieldScores {
    /// Weighted mean over the present fields only; absent fields drop out
    /// of both numerator and denominator. Divisor floored at 1 so an
    /// all-absent row aggregates to 0.0.
    pub fn weighted_mean(&self) -> f64 {
        let mut sum = 0.0;
        let mut n = 0.0;

        for (score, weight) in [
            (self.part_number, WEIGHT_PART_NUMBER),
            (self.product, WEIGHT_PRODUCT),
            (self.category, WEIGHT_CATEGORY),
            (self.brand, WEIGHT_BRAND),
        ] {
            if let Some(score) = score {
                sum += weight * score;
                n += weight;
            }
        }

        sum / n.max(1.0)
    }
}

#[cfg(test)]
#[path = "tests/aggregate_tests.rs"]
mod tests;
