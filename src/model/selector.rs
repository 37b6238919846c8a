use crate::model::structures::{attempt::Attempt, performance::PerformanceResult};
use clap::ValueEnum;
use std::collections::HashMap;

/// How one representative attempt per chart is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DedupPolicy {
    /// Keep the attempt with the greatest total score per chart, before any
    /// resolution. Cheap, but the game's scoring only approximates pp order.
    TotalScore,
    /// Resolve every eligible attempt, then keep the greatest performance
    /// value per chart. Strictly more accurate, so the default.
    ResolvedPerformance
}

/// One attempt per chart hash, keeping the greatest `total_score`.
/// First-seen order is preserved; exact ties keep the earliest attempt.
pub fn personal_bests_by_score(attempts: Vec<Attempt>) -> Vec<Attempt> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut bests: Vec<Attempt> = Vec::new();

    for attempt in attempts {
        match index.get(&attempt.chart_hash) {
            Some(&slot) => {
                if attempt.total_score > bests[slot].total_score {
                    bests[slot] = attempt;
                }
            }
            None => {
                index.insert(attempt.chart_hash.clone(), bests.len());
                bests.push(attempt);
            }
        }
    }

    bests
}

/// One result per chart hash, keeping the greatest `performance_value`.
/// First-seen order is preserved; exact ties keep the earliest result.
pub fn personal_bests_by_performance(results: Vec<PerformanceResult>) -> Vec<PerformanceResult> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut bests: Vec<PerformanceResult> = Vec::new();

    for result in results {
        match index.get(&result.attempt.chart_hash) {
            Some(&slot) => {
                if result.performance_value > bests[slot].performance_value {
                    bests[slot] = result;
                }
            }
            None => {
                index.insert(result.attempt.chart_hash.clone(), bests.len());
                bests.push(result);
            }
        }
    }

    bests
}
