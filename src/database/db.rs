use crate::{
    database::db_structs::{ScoreRow, StoreError},
    model::structures::attempt::Attempt
};
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use std::path::Path;
use tracing::info;

// Store-side filter: only attempts that were actually finished and graded.
const COMPLETED_SCORES_QUERY: &str = "
    SELECT chart_hash, chart_title, chart_status, star_rating, completion_rank,
           ruleset, total_score, accuracy, mods, played_at, player_name
    FROM scores
    WHERE completion_rank > -1
    ORDER BY id";

/// Read-only client for the local score database. Opened once, read in a
/// single pass, never written.
#[derive(Clone)]
pub struct ScoreStore {
    pool: SqlitePool
}

impl ScoreStore {
    pub async fn connect(db_path: &Path) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new().filename(db_path).read_only(true);

        let pool = SqlitePool::connect_with(options).await?;
        info!("opened score database at {}", db_path.display());

        Ok(ScoreStore { pool })
    }

    /// All completed attempts, oldest first. Any malformed row is a store
    /// error; the store is trusted input and read before the core runs.
    pub async fn completed_attempts(&self) -> Result<Vec<Attempt>, StoreError> {
        let rows: Vec<ScoreRow> = sqlx::query_as(COMPLETED_SCORES_QUERY).fetch_all(&self.pool).await?;

        info!("fetched {} completed scores", rows.len());
        rows.into_iter().map(Attempt::try_from).collect()
    }
}
