use super::{RenderContext, Renderer};
use crate::domain::model::LeagueReport;
use crate::utils::error::Result;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn file_name(&self) -> &'static str {
        "league.json"
    }

    fn render(&self, report: &LeagueReport, context: &RenderContext) -> Result<String> {
        let document = serde_json::json!({
            "league": context.league_name,
            "standings": report.standings,
            "seeds": report.seeds,
            "schedule": report.schedule,
            "bracket": report.bracket,
        });
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
