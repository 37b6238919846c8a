use rosu_pp::Beatmap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart hash `{0}` is malformed")]
    MalformedHash(String),

    #[error("failed to read chart file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error("failed to decode chart {hash}: {message}")]
    Decode { hash: String, message: String }
}

/// Content-addressed chart storage: a chart with hash `abcdef...` lives at
/// `files/a/ab/abcdef...` under the base directory.
pub struct ChartSource {
    files_dir: PathBuf
}

impl ChartSource {
    pub fn new(base_dir: &Path) -> Self {
        ChartSource {
            files_dir: base_dir.join("files")
        }
    }

    pub fn chart_path(&self, hash: &str) -> Result<PathBuf, ChartError> {
        if hash.len() < 2 || !hash.is_char_boundary(1) || !hash.is_char_boundary(2) {
            return Err(ChartError::MalformedHash(hash.to_string()));
        }

        Ok(self.files_dir.join(&hash[..1]).join(&hash[..2]).join(hash))
    }

    pub fn load(&self, hash: &str) -> Result<Beatmap, ChartError> {
        let path = self.chart_path(hash)?;
        let data = std::fs::read(&path).map_err(|source| ChartError::Io { path, source })?;

        Beatmap::from_bytes(&data).map_err(|e| ChartError::Decode {
            hash: hash.to_string(),
            message: e.to_string()
        })
    }
}
