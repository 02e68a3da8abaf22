//! GameDay aggregate and DayPhase.

use crate::logic::{build_manual_teams, compute_standings, draft_teams, draft_eligibility, generate_schedule};
use crate::models::format::{GameFormat, RoundType, MAX_PLAYERS, MAX_SCORE, MIN_PLAYERS};
use crate::models::game::{GameMatch, MatchId};
use crate::models::participant::{Participant, ParticipantId};
use crate::models::standing::Standing;
use crate::models::team::{Team, TeamId};
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Errors that can occur during day operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DayError {
    /// The day is not in a phase that allows this action.
    InvalidState,
    /// Player name is empty after trimming.
    EmptyName,
    /// Roster already holds the maximum number of players.
    RosterFull { max: usize },
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayerName,
    PlayerNotFound(ParticipantId),
    /// Roster below the minimum to draw.
    NotEnoughPlayers { missing: usize },
    /// Roster size is not a multiple of the team size.
    IndivisibleRoster { format: GameFormat, missing: usize },
    /// Manual assignment has the wrong number of teams.
    WrongTeamCount { expected: usize, selected: usize },
    /// Manual assignment has a team (1-based) of the wrong size.
    WrongTeamSize { team: usize, expected: usize, selected: usize },
    /// Manual assignment lists the same player twice.
    PlayerAssignedTwice(ParticipantId),
    MatchNotFound(MatchId),
    /// Finished matches can no longer be scored or finished again.
    MatchAlreadyFinished(MatchId),
    /// A match needs both scores before it can be finished.
    ScoreMissing(MatchId),
    /// A score above the accepted maximum.
    ScoreTooHigh { max: u32 },
}

impl std::fmt::Display for DayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayError::InvalidState => write!(f, "Invalid state for this action"),
            DayError::EmptyName => write!(f, "Player name cannot be empty"),
            DayError::RosterFull { max } => write!(f, "Roster is full ({} players max)", max),
            DayError::DuplicatePlayerName => write!(f, "A player with this name already exists"),
            DayError::PlayerNotFound(_) => write!(f, "Player not found"),
            DayError::NotEnoughPlayers { missing } => {
                write!(f, "At least {} players required ({} missing)", MIN_PLAYERS, missing)
            }
            DayError::IndivisibleRoster { format, missing } => {
                write!(f, "For {}, add {} more player(s)", format.key(), missing)
            }
            DayError::WrongTeamCount { expected, selected } => {
                write!(f, "Must build exactly {} teams (built {})", expected, selected)
            }
            DayError::WrongTeamSize { team, expected, selected } => {
                write!(f, "Team {} must have {} players (has {})", team, expected, selected)
            }
            DayError::PlayerAssignedTwice(_) => write!(f, "A player is assigned to more than one team"),
            DayError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            DayError::MatchAlreadyFinished(id) => write!(f, "Match {} is already finished", id),
            DayError::ScoreMissing(id) => write!(f, "Match {} needs both scores to finish", id),
            DayError::ScoreTooHigh { max } => write!(f, "Scores can't be higher than {}", max),
        }
    }
}

impl std::error::Error for DayError {}

/// Current phase of the day, derived from teams and matches.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPhase {
    /// Registering players; no teams yet.
    Setup,
    /// Teams drawn, at least one match still open.
    Playing,
    /// Every match finished.
    Finished,
}

/// One day of play: roster, format, teams and matches. Unit of persistence.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameDay {
    pub date: NaiveDate,
    pub players: Vec<Participant>,
    pub format: GameFormat,
    pub round_type: RoundType,
    pub teams: Vec<Team>,
    pub matches: Vec<GameMatch>,
}

impl GameDay {
    /// Fresh day in Setup: no players, `duplas`, `turno`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            players: Vec::new(),
            format: GameFormat::default(),
            round_type: RoundType::default(),
            teams: Vec::new(),
            matches: Vec::new(),
        }
    }

    pub fn phase(&self) -> DayPhase {
        if self.teams.is_empty() {
            DayPhase::Setup
        } else if !self.matches.is_empty() && self.matches.iter().all(|m| m.finished) {
            DayPhase::Finished
        } else {
            DayPhase::Playing
        }
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    fn ensure_setup(&self) -> Result<(), DayError> {
        if self.phase() != DayPhase::Setup {
            return Err(DayError::InvalidState);
        }
        Ok(())
    }

    /// Register a player (Setup only). Names are trimmed and unique (case-insensitive).
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<&Participant, DayError> {
        self.ensure_setup()?;
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(DayError::EmptyName);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(DayError::RosterFull { max: MAX_PLAYERS });
        }
        let lower = name_trimmed.to_lowercase();
        if self.players.iter().any(|p| p.name.to_lowercase() == lower) {
            return Err(DayError::DuplicatePlayerName);
        }
        self.players.push(Participant::new(name_trimmed));
        self.players.last().ok_or(DayError::InvalidState)
    }

    /// Remove a player by id (Setup only).
    pub fn remove_player(&mut self, player_id: ParticipantId) -> Result<(), DayError> {
        self.ensure_setup()?;
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(DayError::PlayerNotFound(player_id))?;
        self.players.remove(idx);
        Ok(())
    }

    /// Flip a player's captain flag (Setup only).
    pub fn toggle_captain(&mut self, player_id: ParticipantId) -> Result<(), DayError> {
        self.ensure_setup()?;
        self.players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(DayError::PlayerNotFound(player_id))?
            .toggle_captain();
        Ok(())
    }

    pub fn set_format(&mut self, format: GameFormat) -> Result<(), DayError> {
        self.ensure_setup()?;
        self.format = format;
        Ok(())
    }

    pub fn set_round_type(&mut self, round_type: RoundType) -> Result<(), DayError> {
        self.ensure_setup()?;
        self.round_type = round_type;
        Ok(())
    }

    /// Validation predicate for the draw: number of teams, or why the roster can't be drawn.
    pub fn draft_eligibility(&self) -> Result<usize, DayError> {
        draft_eligibility(self.players.len(), self.format)
    }

    pub fn can_draw(&self) -> bool {
        self.draft_eligibility().is_ok()
    }

    /// Human-readable reason the roster can't be drawn yet, if any.
    pub fn validation_message(&self) -> Option<String> {
        self.draft_eligibility().err().map(|e| e.to_string())
    }

    /// Teams may be (re)built in Setup, or while playing as long as no match is finished.
    fn ensure_can_build_teams(&self) -> Result<(), DayError> {
        match self.phase() {
            DayPhase::Setup => Ok(()),
            DayPhase::Playing if !self.matches.iter().any(|m| m.finished) => Ok(()),
            _ => Err(DayError::InvalidState),
        }
    }

    fn install_teams(&mut self, teams: Vec<Team>) {
        self.matches = generate_schedule(&teams, self.round_type);
        self.teams = teams;
        log::info!(
            "Day {}: {} teams, {} matches",
            self.date,
            self.teams.len(),
            self.matches.len()
        );
    }

    /// Draw teams at random and generate the schedule. Leaves the day untouched on error.
    pub fn draw_teams<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DayError> {
        self.ensure_can_build_teams()?;
        let teams = draft_teams(&self.players, self.format, rng)?;
        self.install_teams(teams);
        Ok(())
    }

    /// Use hand-picked teams (groups of participant ids) and generate the schedule.
    pub fn assign_teams_manually(&mut self, assignments: &[Vec<ParticipantId>]) -> Result<(), DayError> {
        self.ensure_can_build_teams()?;
        let teams = build_manual_teams(&self.players, assignments, self.format)?;
        self.install_teams(teams);
        Ok(())
    }

    /// Set or clear the scores of an unfinished match. Each score is at most `MAX_SCORE`.
    pub fn update_score(
        &mut self,
        match_id: MatchId,
        score_1: Option<u32>,
        score_2: Option<u32>,
    ) -> Result<(), DayError> {
        if [score_1, score_2].iter().flatten().any(|&s| s > MAX_SCORE) {
            return Err(DayError::ScoreTooHigh { max: MAX_SCORE });
        }
        let m = self
            .get_match_mut(match_id)
            .ok_or(DayError::MatchNotFound(match_id))?;
        if m.finished {
            return Err(DayError::MatchAlreadyFinished(match_id));
        }
        m.score_1 = score_1;
        m.score_2 = score_2;
        Ok(())
    }

    /// Close a match and record its clock. One-way: a finished match stays finished.
    pub fn finish_match(&mut self, match_id: MatchId, timer_seconds: u32) -> Result<(), DayError> {
        let m = self
            .get_match_mut(match_id)
            .ok_or(DayError::MatchNotFound(match_id))?;
        if m.finished {
            return Err(DayError::MatchAlreadyFinished(match_id));
        }
        if !m.has_scores() {
            return Err(DayError::ScoreMissing(match_id));
        }
        m.finished = true;
        m.timer_seconds = timer_seconds;
        Ok(())
    }

    pub fn standings(&self) -> Vec<Standing> {
        compute_standings(&self.teams, &self.matches)
    }

    /// Team on top of the standings once every match is finished.
    pub fn winner(&self) -> Option<&Team> {
        if self.phase() != DayPhase::Finished {
            return None;
        }
        let top = self.standings().into_iter().next()?;
        self.team(top.team_id)
    }

    /// Back to a fresh Setup day for the same date.
    pub fn reset(&mut self) {
        *self = Self::new(self.date);
    }
}
