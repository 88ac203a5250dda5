pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::core::ConfigProvider;
    use crate::domain::ports::{OutputFormat, PlayoffLabels};
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "league-standings")]
    #[command(about = "Standings, schedule and playoff bracket for a small league")]
    pub struct CliConfig {
        /// Teams document: local path or http(s) URL
        #[arg(long, default_value = "teams.json")]
        pub teams: String,

        /// Games document: local path or http(s) URL
        #[arg(long, default_value = "games.json")]
        pub games: String,

        #[arg(long, default_value = "./output")]
        pub output_path: String,

        #[arg(long, value_enum, value_delimiter = ',', default_values = ["html", "csv", "json"])]
        pub formats: Vec<OutputFormat>,

        /// Also pack every rendered file into one zip archive
        #[arg(long)]
        pub bundle: bool,

        #[arg(long, default_value = "League Standings")]
        pub league_name: String,

        #[arg(long, default_value = "10")]
        pub timeout_seconds: u64,

        /// TOML configuration file; replaces the source/output arguments above
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub log_json: bool,

        #[arg(long, help = "Log CPU and memory usage per phase")]
        pub monitor: bool,

        /// Show what would be processed without writing anything
        #[arg(long)]
        pub dry_run: bool,

        #[arg(skip)]
        pub playoffs: PlayoffLabels,
    }

    impl ConfigProvider for CliConfig {
        fn league_name(&self) -> &str {
            &self.league_name
        }

        fn teams_source(&self) -> &str {
            &self.teams
        }

        fn games_source(&self) -> &str {
            &self.games
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_formats(&self) -> &[OutputFormat] {
            &self.formats
        }

        fn bundle_output(&self) -> bool {
            self.bundle
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_secs(self.timeout_seconds)
        }

        fn playoff_labels(&self) -> &PlayoffLabels {
            &self.playoffs
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_source("teams", &self.teams)?;
            validation::validate_source("games", &self.games)?;
            validation::validate_path("output_path", &self.output_path)?;
            validation::validate_formats("formats", &self.formats)?;
            validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
            Ok(())
        }
    }

}
