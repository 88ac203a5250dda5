use super::{RenderContext, Renderer};
use crate::domain::model::LeagueReport;
use crate::utils::error::{LeagueError, Result};

/// Standings table as CSV, one row per seed.
pub struct CsvRenderer;

impl Renderer for CsvRenderer {
    fn file_name(&self) -> &'static str {
        "standings.csv"
    }

    fn render(&self, report: &LeagueReport, _context: &RenderContext) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            "rank",
            "team_id",
            "name",
            "wins",
            "losses",
            "points_for",
            "points_against",
            "diff",
        ])?;

        for seed in &report.seeds {
            writer.write_record([
                seed.seed.to_string(),
                seed.record.team_id.to_string(),
                seed.record.name.clone(),
                seed.record.wins.to_string(),
                seed.record.losses.to_string(),
                seed.record.points_for.to_string(),
                seed.record.points_against.to_string(),
                seed.diff.to_string(),
            ])?;
        }

        let bytes = writer.into_inner().map_err(|e| LeagueError::RenderError {
            renderer: "csv".to_string(),
            message: e.to_string(),
        })?;
        String::from_utf8(bytes).map_err(|e| LeagueError::RenderError {
            renderer: "csv".to_string(),
            message: e.to_string(),
        })
    }
}
