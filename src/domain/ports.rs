use crate::domain::model::{LeagueData, LeagueReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Output target for rendered files. Inputs come through [`DataSource`].
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where the teams and games documents come from.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider: Send + Sync {
    fn league_name(&self) -> &str;
    fn teams_source(&self) -> &str;
    fn games_source(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[OutputFormat];
    fn bundle_output(&self) -> bool;
    fn request_timeout(&self) -> Duration;
    fn playoff_labels(&self) -> &PlayoffLabels;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<LeagueData>;
    async fn transform(&self, data: LeagueData) -> Result<LeagueReport>;
    async fn load(&self, report: LeagueReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    Csv,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Html, OutputFormat::Csv, OutputFormat::Json];
}

/// Text shown in the playoffs section of the rendered report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayoffLabels {
    pub dates: String,
    pub play_in: String,
    pub semifinals: String,
    pub championship: String,
    /// Championship line; the finalists are not known ahead of time.
    pub final_matchup: String,
}

impl Default for PlayoffLabels {
    fn default() -> Self {
        Self {
            dates: "Friday 5/1/26 (Play-in Games) • Saturday 5/2/26 — Semifinals 10:30 AM • Championship 12:00 PM"
                .to_string(),
            play_in: "Friday 5/1/26 — Play-in".to_string(),
            semifinals: "Saturday 5/2/26 — Semifinals (10:30 AM)".to_string(),
            championship: "Saturday 5/2/26 — Championship (12:00 PM)".to_string(),
            final_matchup: "Winners of the 10:30 AM semifinals".to_string(),
        }
    }
}
