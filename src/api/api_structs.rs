use serde::Deserialize;
use serde_json::Value;

/// Response body of the osu!daily `pp.php` endpoint.
#[derive(Debug, Deserialize)]
pub struct RankResponse {
    #[serde(default)]
    pub rank: Option<Value>
}

impl RankResponse {
    /// The API is loose about the `rank` type; both a JSON number and a
    /// numeric string are accepted. Anything else is treated as no estimate.
    pub fn rank_value(&self) -> Option<f64> {
        match self.rank.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse().ok(),
            _ => None
        }
    }
}
