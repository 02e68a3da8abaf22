//! In-process store.

use super::{DayStore, StorageError};
use crate::models::GameDay;
use chrono::NaiveDate;

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    days: Vec<GameDay>,
    hall: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DayStore for MemoryStore {
    fn load_all_days(&self) -> Result<Vec<GameDay>, StorageError> {
        Ok(self.days.clone())
    }

    fn save_day(&mut self, day: &GameDay) -> Result<(), StorageError> {
        self.days.retain(|d| d.date != day.date);
        self.days.push(day.clone());
        Ok(())
    }

    fn delete_day(&mut self, date: NaiveDate) -> Result<(), StorageError> {
        self.days.retain(|d| d.date != date);
        Ok(())
    }

    fn load_player_hall(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.hall.clone())
    }

    fn save_player_hall(&mut self, names: &[String]) -> Result<(), StorageError> {
        self.hall = names.to_vec();
        Ok(())
    }
}
