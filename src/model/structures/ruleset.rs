use serde_repr::{Deserialize_repr, Serialize_repr};
use std::{convert::TryFrom, str::FromStr};
use strum_macros::EnumIter;
use thiserror::Error;

/// The four rulesets a local install can hold scores for. The discriminant
/// doubles as the `m` index of the osu!daily rank API.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[repr(u8)]
pub enum Ruleset {
    Osu = 0,
    Taiko = 1,
    Catch = 2,
    Mania = 3
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid ruleset `{0}` (must be one of osu/taiko/catch/mania)")]
pub struct InvalidRuleset(String);

impl Ruleset {
    /// The short name the score store uses for this ruleset.
    /// Note that catch is historically stored as "fruits".
    pub fn short_name(&self) -> &'static str {
        match self {
            Ruleset::Osu => "osu",
            Ruleset::Taiko => "taiko",
            Ruleset::Catch => "fruits",
            Ruleset::Mania => "mania"
        }
    }

    /// The ruleset index sent to the rank lookup API.
    pub fn api_index(&self) -> u8 {
        *self as u8
    }
}

impl FromStr for Ruleset {
    type Err = InvalidRuleset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "osu" => Ok(Ruleset::Osu),
            "taiko" => Ok(Ruleset::Taiko),
            "catch" => Ok(Ruleset::Catch),
            "mania" => Ok(Ruleset::Mania),
            other => Err(InvalidRuleset(other.to_string()))
        }
    }
}

impl TryFrom<i32> for Ruleset {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Ruleset::Osu),
            1 => Ok(Ruleset::Taiko),
            2 => Ok(Ruleset::Catch),
            3 => Ok(Ruleset::Mania),
            _ => Err(())
        }
    }
}
