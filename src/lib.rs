pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use crate::core::{build_report, engine::LeagueEngine, pipeline::LeaguePipeline};
pub use domain::model::{Game, LeagueReport, Seed, Team, TeamId, TeamRecord};
pub use utils::error::{LeagueError, Result};
