//! Match (game) between two teams, and Side.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Sequential match number within a day, starting at 1.
pub type MatchId = u32;

/// Which side of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    One,
    Two,
}

/// A single scheduled match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub team_1: TeamId,
    pub team_2: TeamId,
    /// None until entered.
    pub score_1: Option<u32>,
    pub score_2: Option<u32>,
    /// Elapsed match clock, recorded when the match is finished.
    pub timer_seconds: u32,
    pub finished: bool,
}

impl GameMatch {
    pub fn new(id: MatchId, team_1: TeamId, team_2: TeamId) -> Self {
        Self {
            id,
            team_1,
            team_2,
            score_1: None,
            score_2: None,
            timer_seconds: 0,
            finished: false,
        }
    }

    /// Final scores, only once the match is finished and both sides are set.
    pub fn result(&self) -> Option<(u32, u32)> {
        if !self.finished {
            return None;
        }
        Some((self.score_1?, self.score_2?))
    }

    /// Winning side of a finished match. None for unfinished matches and ties.
    pub fn winner(&self) -> Option<Side> {
        let (s1, s2) = self.result()?;
        match s1.cmp(&s2) {
            std::cmp::Ordering::Greater => Some(Side::One),
            std::cmp::Ordering::Less => Some(Side::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.team_1 == team || self.team_2 == team
    }

    pub fn has_scores(&self) -> bool {
        self.score_1.is_some() && self.score_2.is_some()
    }
}
