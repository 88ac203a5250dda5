// Presentation: turns a computed LeagueReport into files.

mod html;
mod json;
mod table;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use table::CsvRenderer;

use crate::domain::model::LeagueReport;
use crate::domain::ports::{OutputFormat, PlayoffLabels};
use crate::utils::error::Result;

/// Display settings shared by every renderer.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub league_name: String,
    pub playoffs: PlayoffLabels,
}

pub trait Renderer: Send + Sync {
    fn file_name(&self) -> &'static str;
    fn render(&self, report: &LeagueReport, context: &RenderContext) -> Result<String>;
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Html => Box::new(HtmlRenderer),
        OutputFormat::Csv => Box::new(CsvRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
