//! Team drawn (or built by hand) for a day.

use crate::models::participant::Participant;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team. Matches refer to teams by this id.
pub type TeamId = Uuid;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub players: Vec<Participant>,
}

impl Team {
    /// Create an empty team with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            players: Vec::new(),
        }
    }

    pub fn captain_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_captain).count()
    }

    /// Comma-separated roster, captains starred.
    pub fn roster_line(&self) -> String {
        self.players
            .iter()
            .map(|p| p.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
