//! Derived views: per-team Standing for a day and per-player AnnualRankingEntry.
//! Neither is persisted; both are recomputed from teams and matches on every read.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// A team's record for the day.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub points_diff: i64,
    /// Rounded to the nearest integer; 0 when nothing has been played.
    pub win_percentage: u32,
}

impl Standing {
    pub fn new(team_id: TeamId, team_name: impl Into<String>) -> Self {
        Self {
            team_id,
            team_name: team_name.into(),
            played: 0,
            wins: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
            points_diff: 0,
            win_percentage: 0,
        }
    }

    /// Point differential with an explicit sign ("+9", "0", "-3").
    pub fn signed_diff(&self) -> String {
        if self.points_diff > 0 {
            format!("+{}", self.points_diff)
        } else {
            self.points_diff.to_string()
        }
    }
}

/// Season total for one player (keyed by display name).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AnnualRankingEntry {
    pub player_name: String,
    pub total_points: u32,
    pub days_played: u32,
}
