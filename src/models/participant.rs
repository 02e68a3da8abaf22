//! Participant registered for a day.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant (used in teams and lookups).
pub type ParticipantId = Uuid;

/// A player on the day's roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Captains are spread one per team by the draft.
    pub is_captain: bool,
}

impl Participant {
    /// Create a new, non-captain participant with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_captain: false,
        }
    }

    /// Create a participant already flagged as captain.
    pub fn captain(name: impl Into<String>) -> Self {
        Self {
            is_captain: true,
            ..Self::new(name)
        }
    }

    pub fn toggle_captain(&mut self) {
        self.is_captain = !self.is_captain;
    }

    /// Name as shown in exports: captains get a star prefix.
    pub fn display_name(&self) -> String {
        if self.is_captain {
            format!("★{}", self.name)
        } else {
            self.name.clone()
        }
    }
}
