//! Beach volley day organizer: library with models, business logic, storage and export.

pub mod export;
pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    aggregate_ranking, all_pairings, annual_ranking, annual_ranking_for_current_year,
    build_manual_teams, compute_standings, dense_positions, draft_eligibility, draft_teams,
    expand_pairings, generate_schedule, is_day_complete, optimize_order, round_robin_rounds,
    Pairing,
};
pub use models::{
    ranking_points_for, AnnualRankingEntry, DayError, DayPhase, GameDay, GameFormat, GameMatch,
    MatchId, Participant, ParticipantId, RoundType, Side, Standing, Team, TeamId, MAX_PLAYERS,
    MAX_SCORE, MIN_PLAYERS, RANKING_POINTS,
};
pub use storage::{DayStore, JsonFileStore, MemoryStore, StorageError};
