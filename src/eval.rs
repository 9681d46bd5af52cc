//! Token-level answer scoring.
//!
//! QASPER reference answers are short, often citation-like spans; token-set
//! F1 is the customary way to compare a generated answer against them.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("invalid token pattern"));

fn normalize(text: &str) -> HashSet<String> {
    NON_WORD
        .split(&text.to_lowercase())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Token-set F1 of `prediction` against `reference`: lowercase, split on
/// non-word runs, then the harmonic mean of precision and recall over the
/// two token sets. Returns 0.0 when either side has no tokens or the
/// overlap is empty.
pub fn token_f1(prediction: &str, reference: &str) -> f64 {
    let prediction = normalize(prediction);
    let reference = normalize(reference);

    if prediction.is_empty() || reference.is_empty() {
        return 0.0;
    }

    let common = prediction.intersection(&reference).count();
    if common == 0 {
        return 0.0;
    }

    let precision = common as f64 / prediction.len() as f64;
    let recall = common as f64 / reference.len() as f64;

    2.0 * (precision * recall) / (precision + recall)
}

/// Best F1 of `prediction` over a set of reference answers. Datasets carry
/// several references per question; a prediction is scored against the one
/// it matches best.
pub fn best_token_f1<'a>(prediction: &str, references: impl IntoIterator<Item = &'a str>) -> f64 {
    references
        .into_iter()
        .map(|reference| token_f1(prediction, reference))
        .fold(0.0, f64::max)
}
