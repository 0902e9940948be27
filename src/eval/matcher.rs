//! Set-based precision/recall/F1.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::flatten::FlatHeading;

/// Precision, recall and F1 for one comparison, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl MatchResult {
    /// Unweighted mean of each metric; `None` for an empty batch.
    pub fn average<'a, I>(results: I) -> Option<MatchResult>
    where
        I: IntoIterator<Item = &'a MatchResult>,
    {
        let mut total = MatchResult::default();
        let mut count = 0usize;
        for r in results {
            total.precision += r.precision;
            total.recall += r.recall;
            total.f1 += r.f1;
            count += 1;
        }

        if count == 0 {
            return None;
        }
        let n = count as f64;
        Some(MatchResult {
            precision: total.precision / n,
            recall: total.recall / n,
            f1: total.f1 / n,
        })
    }
}

/// Compare two flattened outlines as sets.
///
/// Order and duplicates are ignored, so two outlines with the same headings
/// but different nesting score identically.
pub fn match_headings(predicted: &[FlatHeading], reference: &[FlatHeading]) -> MatchResult {
    let predicted: HashSet<&FlatHeading> = predicted.iter().collect();
    let reference: HashSet<&FlatHeading> = reference.iter().collect();

    let tp = predicted.intersection(&reference).count();
    let fp = predicted.difference(&reference).count();
    let fn_ = reference.difference(&predicted).count();

    let precision = ratio(tp, tp + fp);
    let recall = ratio(tp, tp + fn_);
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    MatchResult {
        precision,
        recall,
        f1,
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}
