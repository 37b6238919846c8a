use crate::model::{
    constants::{DEFAULT_BONUS_PERFORMANCE, DEFAULT_DISPLAY_LIMIT, DEFAULT_EXCLUDED_PLAYER},
    selector::DedupPolicy
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(
    display_name = "pp-profiler",
    long_about = "Computes a decay-weighted pp profile from the scores of a local osu! install"
)]
pub struct Args {
    /// Base osu! data directory (must contain client.db and files/)
    pub osu_dir: PathBuf,

    /// Ruleset to profile (osu, taiko, catch or mania)
    pub ruleset: String,

    /// How the best attempt per chart is chosen
    #[arg(long, value_enum, default_value = "resolved-performance")]
    pub dedup_policy: DedupPolicy,

    /// Keep attempts that carry unranked (but non-classic) mods
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub allow_unranked_mods: bool,

    /// Player names whose attempts are ignored; repeat for multiple names
    #[arg(long = "exclude-player", value_name = "NAME", default_values_t = [DEFAULT_EXCLUDED_PLAYER.to_string()])]
    pub excluded_players: Vec<String>,

    /// Flat pp bonus added to the reported total (participation credit)
    #[arg(long, default_value_t = DEFAULT_BONUS_PERFORMANCE)]
    pub bonus_pp: f64,

    /// Number of top results to print
    #[arg(long, default_value_t = DEFAULT_DISPLAY_LIMIT)]
    pub display_limit: usize,

    /// File holding the osu!daily API key; rank estimation is skipped when
    /// the file is missing or empty
    #[arg(long, default_value = "./osu_daily_api_key.txt")]
    pub api_key_path: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
