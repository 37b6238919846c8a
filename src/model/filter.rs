use crate::model::{
    constants::DEFAULT_EXCLUDED_PLAYER,
    structures::{
        attempt::{Attempt, ChartStatus},
        ruleset::Ruleset
    }
};

/// Configuration surface for attempt eligibility.
#[derive(Debug, Clone)]
pub struct FilterSettings {
    /// Reject attempts carrying any mod not flagged "ranked". This is the
    /// stricter of the two historical policies and the default. Classic-flagged
    /// mods are rejected regardless of this setting.
    pub only_ranked_mods: bool,
    /// Player names whose attempts are excluded (local/demo accounts).
    pub excluded_players: Vec<String>
}

impl Default for FilterSettings {
    fn default() -> Self {
        FilterSettings {
            only_ranked_mods: true,
            excluded_players: vec![DEFAULT_EXCLUDED_PLAYER.to_string()]
        }
    }
}

/// Keeps only the attempts eligible for profile calculation. Pure.
pub fn filter_attempts(attempts: Vec<Attempt>, ruleset: Ruleset, settings: &FilterSettings) -> Vec<Attempt> {
    attempts
        .into_iter()
        .filter(|a| is_eligible(a, ruleset, settings))
        .collect()
}

fn is_eligible(attempt: &Attempt, ruleset: Ruleset, settings: &FilterSettings) -> bool {
    attempt.completion_rank > -1
        && attempt.game_mode == ruleset.short_name()
        && attempt.chart_status == ChartStatus::Ranked
        && !attempt.mod_set.any_classic()
        && (!settings.only_ranked_mods || attempt.mod_set.all_ranked())
        && !settings.excluded_players.iter().any(|p| p == &attempt.player_name)
}
