use clap::Parser;
use league_standings::core::ConfigProvider;
use league_standings::utils::error::ErrorSeverity;
use league_standings::utils::{logger, validation::Validate};
use league_standings::{CliConfig, LeagueEngine, LeaguePipeline, LocalStorage, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.log_json);

    tracing::info!("🚀 Starting league-standings");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            let monitor = cli.monitor || config.monitoring_enabled();
            run(config, monitor, cli.dry_run).await
        }
        None => {
            let (monitor, dry_run) = (cli.monitor, cli.dry_run);
            run(cli, monitor, dry_run).await
        }
    }
}

async fn run<C>(config: C, monitor: bool, dry_run: bool) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate + 'static,
{
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = LeaguePipeline::new(storage, config)?;
    let engine = LeagueEngine::new_with_monitoring(pipeline, monitor);

    if dry_run {
        let report = engine.dry_run().await?;
        println!("🔍 Dry run: {} teams ranked", report.standings.len());
        for seed in &report.seeds {
            println!(
                "  #{} {} ({}-{}, diff {})",
                seed.seed, seed.record.name, seed.record.wins, seed.record.losses, seed.diff
            );
        }
        println!(
            "  {} schedule weeks, bracket ready: {}",
            report.schedule.len(),
            report.bracket.is_ready()
        );
        return Ok(());
    }

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ League report completed successfully!");
            println!("✅ League report completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ League report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
