//! File-backed score store.

use std::fs;
use std::path::{Path, PathBuf};

use super::ScoreStore;
use super::types::{BestScoreFile, CURRENT_SCORE_VERSION, ScoreError};

const SCORE_FILENAME: &str = "best_score.json";

/// Keeps the best score as one JSON file inside a data directory.
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    /// Creates the data directory if it doesn't exist.
    pub fn new(data_directory: impl AsRef<Path>) -> Result<Self, ScoreError> {
        let dir = data_directory.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        Ok(FileScoreStore {
            path: dir.join(SCORE_FILENAME),
        })
    }

    fn try_read(&self) -> Result<BestScoreFile, ScoreError> {
        let json = fs::read_to_string(&self.path)?;
        let file: BestScoreFile = serde_json::from_str(&json)?;
        Ok(file)
    }
}

impl ScoreStore for FileScoreStore {
    /// Missing, unreadable, corrupt, and future-versioned files all read
    /// as 0 — a fresh best, not an error.
    fn read_best(&self) -> u32 {
        match self.try_read() {
            Ok(file) if file.version <= CURRENT_SCORE_VERSION => file.best,
            Ok(_) => 0,
            Err(_) => 0,
        }
    }

    fn write_best(&mut self, value: u32) -> Result<(), ScoreError> {
        let file = BestScoreFile {
            version: CURRENT_SCORE_VERSION,
            best: value,
            achieved_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        // Pretty format for readability/debugging.
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    /// A store in a unique, freshly-wiped temp directory.
    fn temp_store(name: &str) -> FileScoreStore {
        let dir = env::temp_dir().join(format!("flying-dog-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        FileScoreStore::new(&dir).expect("create score store")
    }

    #[test]
    fn missing_file_reads_zero() {
        let store = temp_store("missing");
        assert_eq!(store.read_best(), 0);
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut store = temp_store("round-trip");
        store.write_best(9).expect("write best");
        assert_eq!(store.read_best(), 9);
    }

    #[test]
    fn overwrite_keeps_only_the_latest_value() {
        let mut store = temp_store("overwrite");
        store.write_best(5).expect("write best");
        store.write_best(12).expect("write best");
        assert_eq!(store.read_best(), 12);
    }

    #[test]
    fn corrupt_file_reads_zero() {
        let store = temp_store("corrupt");
        fs::write(&store.path, "definitely not json").expect("write corrupt file");
        assert_eq!(store.read_best(), 0);
    }

    #[test]
    fn future_version_reads_zero() {
        let mut store = temp_store("future-version");
        store.write_best(3).expect("write best");

        let json = fs::read_to_string(&store.path)
            .expect("read back")
            .replace("\"version\": 1", "\"version\": 99");
        fs::write(&store.path, json).expect("rewrite");

        assert_eq!(store.read_best(), 0);
    }
}
