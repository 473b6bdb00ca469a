//! Data types for best-score persistence.

use serde::{Deserialize, Serialize};

/// Current envelope version.
pub const CURRENT_SCORE_VERSION: u32 = 1;

/// The on-disk envelope around the best score.
#[derive(Debug, Serialize, Deserialize)]
pub struct BestScoreFile {
    pub version: u32,
    pub best: u32,
    /// Local wall-clock time the score was achieved. For people reading the
    /// file; never parsed back.
    pub achieved_at: String,
}

/// Error types for score store operations.
#[derive(Debug)]
pub enum ScoreError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreError::IoError(e) => write!(f, "IO error: {}", e),
            ScoreError::SerializationError(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for ScoreError {}

impl From<std::io::Error> for ScoreError {
    fn from(err: std::io::Error) -> Self {
        ScoreError::IoError(err)
    }
}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        ScoreError::SerializationError(err)
    }
}
