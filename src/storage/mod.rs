//! Persistence of days and of the frequent-player list ("player hall").

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::models::GameDay;
use chrono::NaiveDate;
use serde::Serialize;

/// Errors from a store backend.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "Storage I/O error: {}", e),
            StorageError::Json(e) => write!(f, "Storage format error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Json(e)
    }
}

/// Where days and the player hall live. Days are keyed by date.
pub trait DayStore {
    /// All saved days, in no particular order.
    fn load_all_days(&self) -> Result<Vec<GameDay>, StorageError>;

    /// Insert or replace the day with the same date.
    fn save_day(&mut self, day: &GameDay) -> Result<(), StorageError>;

    fn delete_day(&mut self, date: NaiveDate) -> Result<(), StorageError>;

    fn load_player_hall(&self) -> Result<Vec<String>, StorageError>;

    fn save_player_hall(&mut self, names: &[String]) -> Result<(), StorageError>;

    fn load_day(&self, date: NaiveDate) -> Result<Option<GameDay>, StorageError> {
        Ok(self.load_all_days()?.into_iter().find(|d| d.date == date))
    }

    /// Add a name to the hall unless already there (case-insensitive). Returns the updated list.
    fn add_to_player_hall(&mut self, name: &str) -> Result<Vec<String>, StorageError> {
        let mut hall = self.load_player_hall()?;
        let name = name.trim();
        if name.is_empty() {
            return Ok(hall);
        }
        let lower = name.to_lowercase();
        if !hall.iter().any(|n| n.to_lowercase() == lower) {
            hall.push(name.to_string());
            sort_hall(&mut hall);
            self.save_player_hall(&hall)?;
        }
        Ok(hall)
    }

    /// Remove a name from the hall (case-insensitive). Returns the updated list.
    fn remove_from_player_hall(&mut self, name: &str) -> Result<Vec<String>, StorageError> {
        let mut hall = self.load_player_hall()?;
        let lower = name.trim().to_lowercase();
        hall.retain(|n| n.to_lowercase() != lower);
        self.save_player_hall(&hall)?;
        Ok(hall)
    }

    fn clear_player_hall(&mut self) -> Result<(), StorageError> {
        self.save_player_hall(&[])
    }
}

/// Alphabetical, ignoring case.
fn sort_hall(hall: &mut [String]) {
    hall.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
}

/// Calendar entry for a saved day.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SavedDaySummary {
    pub date: NaiveDate,
    pub teams: usize,
    pub matches: usize,
    pub all_finished: bool,
}

/// Days that have teams, newest first.
pub fn saved_day_summaries(days: &[GameDay]) -> Vec<SavedDaySummary> {
    let mut summaries: Vec<SavedDaySummary> = days
        .iter()
        .filter(|d| !d.teams.is_empty())
        .map(|d| SavedDaySummary {
            date: d.date,
            teams: d.teams.len(),
            matches: d.matches.len(),
            all_finished: d.matches.iter().all(|m| m.finished),
        })
        .collect();
    summaries.sort_by(|a, b| b.date.cmp(&a.date));
    summaries
}
