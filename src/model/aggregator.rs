use crate::model::{
    constants::{DECAY_BASE, WEIGHT_NORMALIZATION},
    structures::performance::{AggregateStats, PerformanceResult}
};
use std::cmp::Ordering;

/// Folds resolved results into the decay-weighted aggregate.
///
/// Results are stable-sorted descending by performance value, then the i-th
/// result contributes with weight `0.95^i`. Both sums are divided by the
/// normalization constant (the infinite-series sum of the weights); the
/// reported total is recovered by scaling back up in
/// [`AggregateStats::total_performance`].
///
/// The full sorted list participates in the sums; any display limit is a
/// reporting concern, not an aggregation window.
pub fn aggregate(mut results: Vec<PerformanceResult>, bonus_performance: f64) -> AggregateStats {
    // Stable sort: equal values keep their input order, which keeps the
    // output deterministic.
    results.sort_by(|a, b| {
        b.performance_value
            .partial_cmp(&a.performance_value)
            .unwrap_or(Ordering::Equal)
    });

    let (weighted_performance_total, weighted_accuracy_average) =
        results
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(pp_sum, acc_sum), (i, result)| {
                let weight = DECAY_BASE.powi(i as i32);
                (
                    pp_sum + result.performance_value * weight / WEIGHT_NORMALIZATION,
                    acc_sum + result.attempt.accuracy * weight / WEIGHT_NORMALIZATION
                )
            });

    AggregateStats {
        weighted_performance_total,
        weighted_accuracy_average,
        bonus_performance,
        eligible_count: results.len(),
        ranked_results: results
    }
}
