use crate::model::{constants::WEIGHT_NORMALIZATION, structures::attempt::Attempt};

/// The outcome of resolving one attempt against the performance calculator.
#[derive(Debug, Clone)]
pub struct PerformanceResult {
    pub attempt: Attempt,
    pub performance_value: f64
}

/// Decay-weighted aggregate over a player's best per-chart results.
/// Built once per run by the aggregator; read-only afterwards.
#[derive(Debug, Clone)]
pub struct AggregateStats {
    /// Σ pp_i * 0.95^i / 20 over the full sorted result list.
    pub weighted_performance_total: f64,
    /// Σ acc_i * 0.95^i / 20 over the full sorted result list.
    pub weighted_accuracy_average: f64,
    /// Flat participation bonus added to the reported total only.
    pub bonus_performance: f64,
    pub eligible_count: usize,
    /// Descending by `performance_value`, at most one entry per chart.
    pub ranked_results: Vec<PerformanceResult>
}

impl AggregateStats {
    /// The total pp figure for reporting: the weighted average scaled back up
    /// by the normalization constant, plus the flat bonus.
    pub fn total_performance(&self) -> f64 {
        self.weighted_performance_total * WEIGHT_NORMALIZATION + self.bonus_performance
    }
}
