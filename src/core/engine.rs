use crate::core::{LeagueReport, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct LeagueEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> LeagueEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Extract, build the report, render it. Returns where the output went.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting league report...");
        self.monitor.log_stats("Start");

        let data = self.pipeline.extract().await?;
        tracing::info!(
            "📥 Loaded {} teams and {} games",
            data.teams.len(),
            data.games.len()
        );
        self.monitor.log_stats("Extract");

        let report = self.pipeline.transform(data).await?;
        tracing::info!(
            "📊 Ranked {} teams across {} schedule weeks (bracket ready: {})",
            report.standings.len(),
            report.schedule.len(),
            report.bracket.is_ready()
        );
        self.monitor.log_stats("Transform");

        let output_path = self.pipeline.load(report).await?;
        tracing::info!("📁 Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(output_path)
    }

    /// Extract and transform only; nothing is written.
    pub async fn dry_run(&self) -> Result<LeagueReport> {
        tracing::info!("🔍 Dry run: rendering is skipped");
        let data = self.pipeline.extract().await?;
        let report = self.pipeline.transform(data).await?;
        self.monitor.log_final_stats();
        Ok(report)
    }
}
