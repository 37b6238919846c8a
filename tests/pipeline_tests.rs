use approx::assert_abs_diff_eq;
use pp_profiler::{
    model::{
        compute_profile,
        filter::FilterSettings,
        resolver::{PerformanceCalculator, ResolveError, Resolver},
        selector::DedupPolicy,
        structures::{attempt::Attempt, ruleset::Ruleset},
        ProfileSettings
    },
    utils::test_utils::generate_attempt
};

/// Derives pp from accuracy so that score order and pp order can diverge.
/// Charts whose hash starts with "bad" fail resolution.
struct AccuracyCalculator;

impl PerformanceCalculator for AccuracyCalculator {
    fn performance(&self, attempt: &Attempt) -> Result<Option<f64>, ResolveError> {
        if attempt.chart_hash.starts_with("bad") {
            return Err(ResolveError::Calculation("chart file missing".to_string()));
        }

        Ok(Some(attempt.accuracy * 1000.0))
    }
}

fn settings(dedup_policy: DedupPolicy) -> ProfileSettings {
    ProfileSettings {
        ruleset: Ruleset::Osu,
        filter: FilterSettings::default(),
        dedup_policy,
        bonus_performance: 0.0
    }
}

#[test]
fn full_pipeline_resolved_performance() {
    let attempts = vec![
        generate_attempt("a", 700_000, 0.90),
        generate_attempt("a", 500_000, 0.95), // same chart, lower score, better play
        generate_attempt("b", 600_000, 0.85),
        {
            let mut incomplete = generate_attempt("c", 900_000, 0.99);
            incomplete.completion_rank = -1;
            incomplete
        },
    ];

    let calculator = AccuracyCalculator;
    let resolver = Resolver::new(&calculator);
    let stats = compute_profile(attempts, &settings(DedupPolicy::ResolvedPerformance), &resolver);

    // One entry per chart, best pp kept, sorted descending
    assert_eq!(stats.eligible_count, 2);
    assert_eq!(stats.ranked_results[0].performance_value, 950.0);
    assert_eq!(stats.ranked_results[1].performance_value, 850.0);

    // (950 * 1 + 850 * 0.95) / 20
    assert_abs_diff_eq!(stats.weighted_performance_total, 87.875, epsilon = 1e-9);
    assert_abs_diff_eq!(stats.total_performance(), 1757.5, epsilon = 1e-9);
}

#[test]
fn policies_disagree_when_score_and_pp_diverge() {
    let attempts = || {
        vec![
            generate_attempt("a", 800_000, 0.90),
            generate_attempt("a", 500_000, 0.95),
        ]
    };

    let calculator = AccuracyCalculator;
    let resolver = Resolver::new(&calculator);

    let by_score = compute_profile(attempts(), &settings(DedupPolicy::TotalScore), &resolver);
    let by_pp = compute_profile(attempts(), &settings(DedupPolicy::ResolvedPerformance), &resolver);

    // The score policy keeps the 800k play (900pp); the performance policy
    // finds the 950pp play behind the lower score.
    assert_eq!(by_score.ranked_results[0].performance_value, 900.0);
    assert_eq!(by_pp.ranked_results[0].performance_value, 950.0);
}

#[test]
fn resolution_failure_drops_only_the_failing_chart() {
    let attempts = vec![
        generate_attempt("a", 1, 0.90),
        generate_attempt("bad-chart", 1, 0.99),
        generate_attempt("b", 1, 0.85),
    ];

    let calculator = AccuracyCalculator;
    let resolver = Resolver::new(&calculator);
    let stats = compute_profile(attempts, &settings(DedupPolicy::ResolvedPerformance), &resolver);

    assert_eq!(stats.eligible_count, 2);
    assert!(stats
        .ranked_results
        .iter()
        .all(|r| !r.attempt.chart_hash.starts_with("bad")));
}

#[test]
fn empty_history_yields_zeroed_stats() {
    let calculator = AccuracyCalculator;
    let resolver = Resolver::new(&calculator);
    let stats = compute_profile(vec![], &settings(DedupPolicy::ResolvedPerformance), &resolver);

    assert_eq!(stats.eligible_count, 0);
    assert_eq!(stats.weighted_performance_total, 0.0);
    assert_eq!(stats.weighted_accuracy_average, 0.0);
    assert_eq!(stats.total_performance(), 0.0);
}
