//! Day logic: round-robin pairing, schedule ordering, team draw, standings, annual ranking.

mod annual_ranking;
mod draft;
mod pairing;
mod schedule;
mod standings;

pub use annual_ranking::{
    aggregate_ranking, annual_ranking, annual_ranking_for_current_year, dense_positions,
    is_day_complete,
};
pub use draft::{build_manual_teams, draft_eligibility, draft_teams};
pub use pairing::{all_pairings, round_robin_rounds, Pairing};
pub use schedule::{expand_pairings, generate_schedule, optimize_order};
pub use standings::compute_standings;
