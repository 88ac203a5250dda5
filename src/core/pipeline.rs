use crate::adapters::render::{renderer_for, RenderContext};
use crate::adapters::source::{parse_records, DocumentSource};
use crate::core::{build_report, ConfigProvider, DataSource, LeagueData, LeagueReport, Pipeline, Storage};
use crate::domain::model::{Game, Team};
use crate::utils::error::Result;
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const BUNDLE_FILE_NAME: &str = "league_report.zip";

/// Loads teams and games, builds the report and writes the rendered files.
pub struct LeaguePipeline<S: Storage, C: ConfigProvider, D: DataSource = DocumentSource> {
    storage: S,
    config: C,
    source: D,
}

impl<S: Storage, C: ConfigProvider> LeaguePipeline<S, C, DocumentSource> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let source = DocumentSource::new(config.request_timeout())?;
        Ok(Self::with_source(storage, config, source))
    }
}

impl<S: Storage, C: ConfigProvider, D: DataSource> LeaguePipeline<S, C, D> {
    pub fn with_source(storage: S, config: C, source: D) -> Self {
        Self {
            storage,
            config,
            source,
        }
    }

    fn render_context(&self) -> RenderContext {
        RenderContext {
            league_name: self.config.league_name().to_string(),
            playoffs: self.config.playoff_labels().clone(),
        }
    }

    fn bundle(files: &[(&'static str, String)]) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        for (name, content) in files {
            zip.start_file(*name, SimpleFileOptions::default())?;
            zip.write_all(content.as_bytes())?;
        }
        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, D: DataSource> Pipeline for LeaguePipeline<S, C, D> {
    async fn extract(&self) -> Result<LeagueData> {
        let teams_location = self.config.teams_source();
        let games_location = self.config.games_source();

        // 兩份文件互不相依，同時抓取
        let (teams_bytes, games_bytes) = tokio::try_join!(
            self.source.fetch(teams_location),
            self.source.fetch(games_location)
        )?;

        let teams: Vec<Team> = parse_records("teams", teams_location, &teams_bytes)?;
        let games: Vec<Game> = parse_records("games", games_location, &games_bytes)?;

        Ok(LeagueData { teams, games })
    }

    async fn transform(&self, data: LeagueData) -> Result<LeagueReport> {
        let played = data.games.iter().filter(|g| g.is_played()).count();
        tracing::debug!(
            "{} of {} games have final scores",
            played,
            data.games.len()
        );

        Ok(build_report(&data.teams, &data.games))
    }

    async fn load(&self, report: LeagueReport) -> Result<String> {
        let context = self.render_context();
        let mut files = Vec::new();

        for format in self.config.output_formats() {
            let renderer = renderer_for(*format);
            let content = renderer.render(&report, &context)?;
            tracing::debug!(
                "Rendered {} ({} bytes)",
                renderer.file_name(),
                content.len()
            );
            files.push((renderer.file_name(), content));
        }

        for (name, content) in &files {
            self.storage.write_file(name, content.as_bytes()).await?;
        }

        if !self.config.bundle_output() {
            return Ok(self.config.output_path().to_string());
        }

        let zip_data = Self::bundle(&files)?;
        tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
        self.storage.write_file(BUNDLE_FILE_NAME, &zip_data).await?;

        Ok(format!("{}/{}", self.config.output_path(), BUNDLE_FILE_NAME))
    }
}
