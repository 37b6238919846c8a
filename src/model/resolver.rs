use crate::{
    beatmaps::loader::ChartError,
    model::structures::{attempt::Attempt, performance::PerformanceResult},
    utils::progress_utils::progress_bar
};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("performance calculation failed: {0}")]
    Calculation(String)
}

/// Produces the performance value for one attempt.
///
/// `Ok(None)` means the calculator declines to score the attempt (not an
/// error); `Err` means chart loading or calculation failed.
pub trait PerformanceCalculator: Send + Sync {
    fn performance(&self, attempt: &Attempt) -> Result<Option<f64>, ResolveError>;
}

pub struct Resolver<'a> {
    calculator: &'a dyn PerformanceCalculator
}

impl<'a> Resolver<'a> {
    pub fn new(calculator: &'a dyn PerformanceCalculator) -> Self {
        Resolver { calculator }
    }

    /// Resolves a batch of attempts, in parallel, with per-attempt fault
    /// isolation: a failed attempt is logged and dropped, the rest of the
    /// batch continues. Output order matches input order.
    pub fn resolve_batch(&self, attempts: &[Attempt]) -> Vec<PerformanceResult> {
        let bar = progress_bar(attempts.len() as u64, "resolving performance");

        let resolved: Vec<Option<PerformanceResult>> = attempts
            .par_iter()
            .map(|attempt| {
                let result = self.resolve_one(attempt);
                bar.inc(1);
                result
            })
            .collect();

        bar.finish();
        resolved.into_iter().flatten().collect()
    }

    fn resolve_one(&self, attempt: &Attempt) -> Option<PerformanceResult> {
        match self.calculator.performance(attempt) {
            Ok(Some(performance_value)) => Some(PerformanceResult {
                attempt: attempt.clone(),
                performance_value
            }),
            Ok(None) => {
                debug!(
                    chart = %attempt.chart_title,
                    "calculator declined to score attempt"
                );
                None
            }
            Err(e) => {
                warn!(
                    chart = %attempt.chart_title,
                    hash = %attempt.chart_hash,
                    accuracy = attempt.accuracy,
                    "failed to calculate pp: {e}"
                );
                None
            }
        }
    }
}
