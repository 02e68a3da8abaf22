//! Day format (team size), round type and the fixed tables keyed by them.

use serde::{Deserialize, Serialize};

/// Fewest players a day can be drawn with.
pub const MIN_PLAYERS: usize = 6;

/// Roster cap for a single day.
pub const MAX_PLAYERS: usize = 16;

/// Highest score accepted for one side of a match.
pub const MAX_SCORE: u32 = 999;

/// Annual ranking points by final standing position (1st..4th). 5th and below earn nothing.
pub const RANKING_POINTS: [u32; 4] = [5, 3, 2, 1];

/// Ranking points for a 0-based standings position.
pub fn ranking_points_for(position: usize) -> u32 {
    RANKING_POINTS.get(position).copied().unwrap_or(0)
}

/// Team size for the day.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameFormat {
    #[default]
    Duplas,
    Trios,
    Quartetos,
}

impl GameFormat {
    pub const ALL: [GameFormat; 3] = [GameFormat::Duplas, GameFormat::Trios, GameFormat::Quartetos];

    pub fn team_size(self) -> usize {
        match self {
            GameFormat::Duplas => 2,
            GameFormat::Trios => 3,
            GameFormat::Quartetos => 4,
        }
    }

    /// Singular label, used for team names ("Dupla 1", "Trio 2", ...).
    pub fn label(self) -> &'static str {
        match self {
            GameFormat::Duplas => "Dupla",
            GameFormat::Trios => "Trio",
            GameFormat::Quartetos => "Quarteto",
        }
    }

    /// Serialized key ("duplas", "trios", "quartetos").
    pub fn key(self) -> &'static str {
        match self {
            GameFormat::Duplas => "duplas",
            GameFormat::Trios => "trios",
            GameFormat::Quartetos => "quartetos",
        }
    }
}

/// Single round-robin, or round-robin played twice with sides swapped.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum RoundType {
    #[default]
    #[serde(rename = "turno")]
    Turno,
    #[serde(rename = "turno-returno")]
    TurnoReturno,
}
