use crate::model::{
    filter::FilterSettings,
    resolver::Resolver,
    selector::DedupPolicy,
    structures::{attempt::Attempt, performance::AggregateStats, ruleset::Ruleset}
};

pub mod aggregator;
pub mod constants;
pub mod filter;
pub mod resolver;
pub mod selector;
pub mod structures;

/// Everything the pipeline needs to know besides the attempts themselves.
#[derive(Debug, Clone)]
pub struct ProfileSettings {
    pub ruleset: Ruleset,
    pub filter: FilterSettings,
    pub dedup_policy: DedupPolicy,
    pub bonus_performance: f64
}

/// Runs the whole profile pipeline: filter, deduplicate, resolve, aggregate.
///
/// Under [`DedupPolicy::TotalScore`] one attempt per chart is picked before
/// resolution; under [`DedupPolicy::ResolvedPerformance`] every eligible
/// attempt is resolved and the best performance value per chart wins.
pub fn compute_profile(attempts: Vec<Attempt>, settings: &ProfileSettings, resolver: &Resolver) -> AggregateStats {
    let eligible = filter::filter_attempts(attempts, settings.ruleset, &settings.filter);

    let results = match settings.dedup_policy {
        DedupPolicy::TotalScore => {
            let bests = selector::personal_bests_by_score(eligible);
            resolver.resolve_batch(&bests)
        }
        DedupPolicy::ResolvedPerformance => {
            let resolved = resolver.resolve_batch(&eligible);
            selector::personal_bests_by_performance(resolved)
        }
    };

    aggregator::aggregate(results, settings.bonus_performance)
}
