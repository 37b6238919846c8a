use clap::Parser;
use pp_profiler::{
    api::RankClient,
    args::Args,
    beatmaps::{calculator::RosuCalculator, loader::ChartSource},
    database::{db::ScoreStore, db_structs::StoreError},
    model::{
        compute_profile,
        filter::FilterSettings,
        resolver::Resolver,
        structures::ruleset::{InvalidRuleset, Ruleset},
        ProfileSettings
    },
    reporter::{ConsoleReporter, Reporter}
};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Ruleset(#[from] InvalidRuleset),

    #[error("osu directory {0} is invalid (must contain a files/ subdirectory)")]
    InvalidBaseDirectory(String),

    #[error(transparent)]
    Store(#[from] StoreError)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let ruleset: Ruleset = args.ruleset.parse()?;

    if !args.osu_dir.is_dir() || !args.osu_dir.join("files").is_dir() {
        return Err(AppError::InvalidBaseDirectory(args.osu_dir.display().to_string()));
    }

    let store = ScoreStore::connect(&args.osu_dir.join("client.db")).await?;
    let attempts = store.completed_attempts().await?;
    info!("loaded {} completed attempts", attempts.len());

    let calculator = RosuCalculator::new(ChartSource::new(&args.osu_dir), ruleset);
    let resolver = Resolver::new(&calculator);

    let settings = ProfileSettings {
        ruleset,
        filter: FilterSettings {
            only_ranked_mods: !args.allow_unranked_mods,
            excluded_players: args.excluded_players.clone()
        },
        dedup_policy: args.dedup_policy,
        bonus_performance: args.bonus_pp
    };

    let stats = compute_profile(attempts, &settings, &resolver);

    let rank_estimate = RankClient::new(args.api_key_path.clone())
        .estimate_rank(stats.total_performance(), ruleset)
        .await;

    ConsoleReporter::new(args.display_limit).report(&stats, rank_estimate);

    Ok(())
}
