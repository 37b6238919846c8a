use crate::model::structures::attempt::{Attempt, ChartStatus, ModSet};
use chrono::DateTime;
use sqlx::FromRow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score database query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("score on chart {hash} has an invalid mod set: {source}")]
    InvalidModSet {
        hash: String,
        #[source]
        source: serde_json::Error
    },

    #[error("score on chart {hash} has an invalid timestamp: {source}")]
    InvalidTimestamp {
        hash: String,
        #[source]
        source: chrono::ParseError
    },

    #[error("score on chart {hash} has an unknown chart status {value}")]
    InvalidStatus { hash: String, value: i64 }
}

/// Raw score row as stored. Mods are a JSON array of
/// `{acronym, ranked, classic}` objects; timestamps are RFC 3339 strings.
#[derive(Debug, Clone, FromRow)]
pub struct ScoreRow {
    pub chart_hash: String,
    pub chart_title: String,
    pub chart_status: i64,
    pub star_rating: f64,
    pub completion_rank: i64,
    pub ruleset: String,
    pub total_score: i64,
    pub accuracy: f64,
    pub mods: String,
    pub played_at: String,
    pub player_name: String
}

impl TryFrom<ScoreRow> for Attempt {
    type Error = StoreError;

    fn try_from(row: ScoreRow) -> Result<Self, Self::Error> {
        let chart_status = ChartStatus::try_from(row.chart_status).map_err(|_| StoreError::InvalidStatus {
            hash: row.chart_hash.clone(),
            value: row.chart_status
        })?;

        let mod_set: ModSet = serde_json::from_str(&row.mods).map_err(|source| StoreError::InvalidModSet {
            hash: row.chart_hash.clone(),
            source
        })?;

        let played_at = DateTime::parse_from_rfc3339(&row.played_at).map_err(|source| StoreError::InvalidTimestamp {
            hash: row.chart_hash.clone(),
            source
        })?;

        Ok(Attempt {
            chart_hash: row.chart_hash,
            chart_title: row.chart_title,
            chart_status,
            chart_star_rating: row.star_rating,
            completion_rank: row.completion_rank as i32,
            game_mode: row.ruleset,
            total_score: row.total_score,
            accuracy: row.accuracy,
            mod_set,
            played_at,
            player_name: row.player_name
        })
    }
}
