//! Data structures for a day of play: participants, teams, matches, standings.

mod day;
mod format;
mod game;
mod participant;
mod standing;
mod team;

pub use day::{DayError, DayPhase, GameDay};
pub use format::{ranking_points_for, GameFormat, RoundType, MAX_PLAYERS, MAX_SCORE, MIN_PLAYERS, RANKING_POINTS};
pub use game::{GameMatch, MatchId, Side};
pub use participant::{Participant, ParticipantId};
pub use standing::{AnnualRankingEntry, Standing};
pub use team::{Team, TeamId};
