//! Highscore persistence.
//!
//! The simulation only needs one integer from durable storage. Stores report
//! I/O errors, and the game session decides to swallow them.

use crate::constants::HIGHSCORE_FILE;
use crate::utils::persistence;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Read/write access to the best score ever recorded.
pub trait HighscoreStore {
    /// Stored highscore. A store with nothing saved yet returns `Ok(0)`.
    fn load_highscore(&self) -> io::Result<u32>;

    fn save_highscore(&mut self, value: u32) -> io::Result<()>;
}

/// On-disk format of `highscore.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighscoreRecord {
    pub highscore: u32,
    /// RFC 3339 timestamp of when the score was set.
    pub achieved_at: String,
}

/// Highscore kept in a JSON file, by default ~/.flapterm/highscore.json.
#[derive(Debug, Clone)]
pub struct JsonHighscoreStore {
    path: Option<PathBuf>,
}

impl JsonHighscoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store in the user's data directory. If no home directory can be
    /// resolved the store has no backing file and every call errors.
    pub fn in_data_dir() -> Self {
        Self {
            path: persistence::save_path(HIGHSCORE_FILE).ok(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn require_path(&self) -> io::Result<&Path> {
        self.path().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no data directory for highscore")
        })
    }
}

impl HighscoreStore for JsonHighscoreStore {
    fn load_highscore(&self) -> io::Result<u32> {
        match persistence::read_json::<HighscoreRecord>(self.require_path()?) {
            Ok(record) => Ok(record.highscore),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e),
        }
    }

    fn save_highscore(&mut self, value: u32) -> io::Result<()> {
        let record = HighscoreRecord {
            highscore: value,
            achieved_at: Utc::now().to_rfc3339(),
        };
        persistence::save_json(self.require_path()?, &record)
    }
}

/// Volatile store for tests and headless runs. Can be told to fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighscoreStore {
    pub value: u32,
    /// Every value passed to `save_highscore`, in order.
    pub saves: Vec<u32>,
    pub fail_load: bool,
    pub fail_save: bool,
}

impl MemoryHighscoreStore {
    pub fn with_value(value: u32) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_load: true,
            fail_save: true,
            ..Self::default()
        }
    }
}

impl HighscoreStore for MemoryHighscoreStore {
    fn load_highscore(&self) -> io::Result<u32> {
        if self.fail_load {
            return Err(io::Error::new(io::ErrorKind::Other, "highscore unavailable"));
        }
        Ok(self.value)
    }

    fn save_highscore(&mut self, value: u32) -> io::Result<()> {
        self.saves.push(value);
        if self.fail_save {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "highscore read-only",
            ));
        }
        self.value = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_store(name: &str) -> JsonHighscoreStore {
        let path = std::env::temp_dir()
            .join(format!("flapterm-highscore-{}", std::process::id()))
            .join(name);
        fs::remove_file(&path).ok();
        JsonHighscoreStore::new(path)
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let store = scratch_store("missing.json");
        assert_eq!(store.load_highscore().unwrap(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = scratch_store("saved.json");
        store.save_highscore(42).unwrap();
        assert_eq!(store.load_highscore().unwrap(), 42);

        let record: HighscoreRecord = persistence::read_json(store.path().unwrap()).unwrap();
        assert_eq!(record.highscore, 42);
        assert!(chrono::DateTime::parse_from_rfc3339(&record.achieved_at).is_ok());

        fs::remove_file(store.path().unwrap()).ok();
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let store = scratch_store("corrupt.json");
        let path = store.path().unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "{{{{").unwrap();

        let err = store.load_highscore().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_legacy_record_without_timestamp() {
        let store = scratch_store("legacy.json");
        let path = store.path().unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, r#"{ "highscore": 7 }"#).unwrap();

        assert_eq!(store.load_highscore().unwrap(), 7);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_pathless_store_errors() {
        let mut store = JsonHighscoreStore { path: None };
        assert!(store.load_highscore().is_err());
        assert!(store.save_highscore(1).is_err());
    }

    #[test]
    fn test_memory_store_records_saves() {
        let mut store = MemoryHighscoreStore::with_value(3);
        assert_eq!(store.load_highscore().unwrap(), 3);
        store.save_highscore(9).unwrap();
        assert_eq!(store.value, 9);
        assert_eq!(store.saves, vec![9]);

        let mut failing = MemoryHighscoreStore::failing();
        assert!(failing.load_highscore().is_err());
        assert!(failing.save_highscore(5).is_err());
        assert_eq!(failing.value, 0);
        assert_eq!(failing.saves, vec![5]);
    }
}
