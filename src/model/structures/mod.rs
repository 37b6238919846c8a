pub mod attempt;
pub mod performance;
pub mod ruleset;
