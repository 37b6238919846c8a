pub mod api_structs;

use crate::{api::api_structs::RankResponse, model::structures::ruleset::Ruleset};
use reqwest::{Client, ClientBuilder};
use std::{path::PathBuf, time::Duration};
use tracing::debug;

pub const DEFAULT_API_ROOT: &str = "https://osudaily.net/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Best-effort rank lookup against the osu!daily API.
///
/// Advisory enrichment only: a missing or empty credential file, a network
/// failure, a timeout, or a malformed response all degrade to `None`. One
/// attempt per run, no retry, never fatal.
pub struct RankClient {
    http: Client,
    api_root: String,
    key_path: PathBuf
}

impl RankClient {
    pub fn new(key_path: PathBuf) -> Self {
        Self::with_api_root(DEFAULT_API_ROOT, key_path)
    }

    pub fn with_api_root(api_root: impl Into<String>, key_path: PathBuf) -> Self {
        RankClient {
            http: ClientBuilder::new()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Valid client configuration"),
            api_root: api_root.into(),
            key_path
        }
    }

    /// Translates an aggregate pp total into an estimated global rank.
    pub async fn estimate_rank(&self, total_performance: f64, ruleset: Ruleset) -> Option<f64> {
        let key = self.read_key()?;

        match self.fetch_rank(&key, total_performance, ruleset).await {
            Ok(rank) => rank,
            Err(e) => {
                debug!("rank lookup failed: {e}");
                None
            }
        }
    }

    fn read_key(&self) -> Option<String> {
        let key = std::fs::read_to_string(&self.key_path).ok()?;
        let key = key.trim();

        if key.is_empty() {
            None
        } else {
            Some(key.to_string())
        }
    }

    async fn fetch_rank(&self, key: &str, total_performance: f64, ruleset: Ruleset) -> Result<Option<f64>, reqwest::Error> {
        let params = [
            ("k", key.to_string()),
            ("t", "pp".to_string()),
            ("v", total_performance.to_string()),
            ("m", ruleset.api_index().to_string())
        ];

        let response: RankResponse = self
            .http
            .get(format!("{}/pp.php", self.api_root))
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.rank_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_key_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pp-profiler-test-{name}-{}", std::process::id()))
    }

    #[tokio::test]
    async fn test_missing_key_file_yields_none() {
        let client = RankClient::new(temp_key_path("missing"));

        assert_eq!(client.estimate_rank(5000.0, Ruleset::Osu).await, None);
    }

    #[tokio::test]
    async fn test_empty_key_file_yields_none() {
        let path = temp_key_path("empty");
        std::fs::File::create(&path).unwrap();

        let client = RankClient::new(path.clone());
        assert_eq!(client.estimate_rank(5000.0, Ruleset::Osu).await, None);

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_whitespace_key_file_yields_none() {
        let path = temp_key_path("whitespace");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "   ").unwrap();

        let client = RankClient::new(path.clone());
        assert_eq!(client.estimate_rank(5000.0, Ruleset::Osu).await, None);

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_api_yields_none() {
        let path = temp_key_path("unreachable");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "some-key").unwrap();

        // Reserved TEST-NET address, nothing listens there
        let client = RankClient::with_api_root("http://192.0.2.1:1/api", path.clone());
        assert_eq!(client.estimate_rank(5000.0, Ruleset::Osu).await, None);

        std::fs::remove_file(path).unwrap();
    }
}
