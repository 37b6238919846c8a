use chrono::{DateTime, FixedOffset};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;

/// Online status of the chart an attempt was played on.
/// Discriminants mirror the client's own status codes.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum ChartStatus {
    LocallyModified = -4,
    NotSubmitted = -3,
    Graveyard = -2,
    Wip = -1,
    Pending = 0,
    Ranked = 1,
    Approved = 2,
    Qualified = 3,
    Loved = 4
}

impl TryFrom<i64> for ChartStatus {
    type Error = ();

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        match v {
            -4 => Ok(ChartStatus::LocallyModified),
            -3 => Ok(ChartStatus::NotSubmitted),
            -2 => Ok(ChartStatus::Graveyard),
            -1 => Ok(ChartStatus::Wip),
            0 => Ok(ChartStatus::Pending),
            1 => Ok(ChartStatus::Ranked),
            2 => Ok(ChartStatus::Approved),
            3 => Ok(ChartStatus::Qualified),
            4 => Ok(ChartStatus::Loved),
            _ => Err(())
        }
    }
}

/// One gameplay modifier, with the two flags eligibility filtering cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMod {
    pub acronym: String,
    pub ranked: bool,
    pub classic: bool
}

/// The ordered set of modifiers active during an attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModSet(pub Vec<GameMod>);

impl ModSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn any_classic(&self) -> bool {
        self.0.iter().any(|m| m.classic)
    }

    pub fn all_ranked(&self) -> bool {
        self.0.iter().all(|m| m.ranked)
    }

    /// Comma-joined acronyms for display, e.g. "HD,DT".
    pub fn acronym_string(&self) -> String {
        self.0.iter().map(|m| m.acronym.as_str()).join(",")
    }

    /// Legacy mod bitflags for the difficulty calculator. Acronyms without a
    /// legacy bit (difficulty-neutral mods) contribute nothing.
    pub fn legacy_bits(&self) -> u32 {
        self.0
            .iter()
            .map(|m| match m.acronym.as_str() {
                "NF" => 1,
                "EZ" => 2,
                "TD" => 4,
                "HD" => 8,
                "HR" => 16,
                "SD" => 32,
                "DT" => 64,
                "RX" => 128,
                "HT" => 256,
                // NC and PF imply DT and SD respectively
                "NC" => 512 | 64,
                "FL" => 1024,
                "SO" => 4096,
                "PF" => 16384 | 32,
                _ => 0
            })
            .fold(0, |bits, b| bits | b)
    }
}

/// One historical play record as read from the score store.
/// Immutable once loaded; the whole pipeline treats it as read-only input.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub chart_hash: String,
    pub chart_title: String,
    pub chart_status: ChartStatus,
    pub chart_star_rating: f64,
    /// `-1` marks an incomplete/unfinished attempt; anything above is a grade.
    pub completion_rank: i32,
    /// Ruleset short name as stored ("osu", "taiko", "fruits", "mania").
    pub game_mode: String,
    pub total_score: i64,
    /// Accuracy in `[0, 1]`.
    pub accuracy: f64,
    pub mod_set: ModSet,
    pub played_at: DateTime<FixedOffset>,
    pub player_name: String
}
