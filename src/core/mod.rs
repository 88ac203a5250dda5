pub mod engine;
pub mod pipeline;
pub mod schedule;
pub mod seeding;
pub mod standings;

pub use crate::domain::model::{LeagueData, LeagueReport};
pub use crate::domain::ports::{ConfigProvider, DataSource, Pipeline, Storage};
pub use crate::utils::error::Result;

use crate::domain::model::{Game, Team};

/// Builds the full report from the two input lists. Pure.
pub fn build_report(teams: &[Team], games: &[Game]) -> LeagueReport {
    let standings = standings::compute_standings(teams, games);
    let seeds = seeding::seed_from_standings(&standings);
    let bracket = seeding::project_bracket(&seeds);
    let schedule = schedule::build_schedule(teams, games);

    LeagueReport {
        standings,
        seeds,
        schedule,
        bracket,
    }
}
