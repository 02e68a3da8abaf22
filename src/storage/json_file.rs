//! Store backed by two pretty-printed JSON files in a data directory.

use super::{DayStore, StorageError};
use crate::models::GameDay;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

const DAYS_FILE: &str = "days.json";
const HALL_FILE: &str = "player_hall.json";

#[derive(Clone, Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Missing file reads as empty; any other read or parse failure is an error.
    fn try_read_list<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StorageError> {
        let path = self.dir.join(file);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Lenient read for loads: a file that can't be read or parsed is logged and read
    /// as empty, so one bad file doesn't lock the app out.
    fn read_list<T: DeserializeOwned>(&self, file: &str) -> Vec<T> {
        self.try_read_list(file).unwrap_or_else(|e| {
            log::warn!("Could not load {}: {}", self.dir.join(file).display(), e);
            Vec::new()
        })
    }

    /// Write to a sibling temp file, then rename over the target.
    fn write_list<T: Serialize>(&self, file: &str, list: &[T]) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(list)?;
        let tmp = self.dir.join(format!("{}.tmp", file));
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, self.dir.join(file))?;
        Ok(())
    }
}

impl DayStore for JsonFileStore {
    fn load_all_days(&self) -> Result<Vec<GameDay>, StorageError> {
        Ok(self.read_list(DAYS_FILE))
    }

    fn save_day(&mut self, day: &GameDay) -> Result<(), StorageError> {
        // Strict read: rewriting from a failed read would drop every other day.
        let mut days: Vec<GameDay> = self.try_read_list(DAYS_FILE)?;
        days.retain(|d| d.date != day.date);
        days.push(day.clone());
        self.write_list(DAYS_FILE, &days)?;
        log::info!("Saved day {}", day.date);
        Ok(())
    }

    fn delete_day(&mut self, date: NaiveDate) -> Result<(), StorageError> {
        let mut days: Vec<GameDay> = self.try_read_list(DAYS_FILE)?;
        days.retain(|d| d.date != date);
        self.write_list(DAYS_FILE, &days)?;
        log::info!("Deleted day {}", date);
        Ok(())
    }

    fn load_player_hall(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.read_list(HALL_FILE))
    }

    fn save_player_hall(&mut self, names: &[String]) -> Result<(), StorageError> {
        self.write_list(HALL_FILE, names)
    }
}
