use crate::model::structures::{
    attempt::{Attempt, ChartStatus, GameMod, ModSet},
    performance::PerformanceResult
};
use chrono::Utc;

/// Generates an attempt that passes every eligibility predicate.
/// Tests flip individual fields to probe single predicates.
pub fn generate_attempt(chart_hash: &str, total_score: i64, accuracy: f64) -> Attempt {
    Attempt {
        chart_hash: chart_hash.to_string(),
        chart_title: format!("Artist - Title [{chart_hash}]"),
        chart_status: ChartStatus::Ranked,
        chart_star_rating: 5.0,
        completion_rank: 3,
        game_mode: "osu".to_string(),
        total_score,
        accuracy,
        mod_set: ModSet::default(),
        played_at: Utc::now().fixed_offset(),
        player_name: "peppy".to_string()
    }
}

pub fn generate_mod(acronym: &str, ranked: bool, classic: bool) -> GameMod {
    GameMod {
        acronym: acronym.to_string(),
        ranked,
        classic
    }
}

pub fn generate_result(chart_hash: &str, performance_value: f64, accuracy: f64) -> PerformanceResult {
    PerformanceResult {
        attempt: generate_attempt(chart_hash, 1_000_000, accuracy),
        performance_value
    }
}
