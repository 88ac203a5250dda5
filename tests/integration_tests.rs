use httpmock::prelude::*;
use league_standings::domain::ports::OutputFormat;
use league_standings::{
    CliConfig, LeagueEngine, LeagueError, LeaguePipeline, LocalStorage, TomlConfig,
};
use std::path::Path;
use tempfile::TempDir;

fn cli_config(teams: String, games: String, output_path: String) -> CliConfig {
    CliConfig {
        teams,
        games,
        output_path,
        formats: OutputFormat::ALL.to_vec(),
        bundle: false,
        league_name: "Spring League".to_string(),
        timeout_seconds: 5,
        config: None,
        verbose: false,
        log_json: false,
        monitor: false,
        dry_run: false,
        playoffs: Default::default(),
    }
}

fn six_teams() -> serde_json::Value {
    serde_json::json!([
        {"id": 1, "name": "Owls"},
        {"id": 2, "name": "Hawks"},
        {"id": 3, "name": "Crows"},
        {"id": 4, "name": "Ravens"},
        {"id": 5, "name": "Finches"},
        {"id": 6, "name": "Wrens"}
    ])
}

fn season_games() -> serde_json::Value {
    serde_json::json!([
        {"homeTeamId": 1, "awayTeamId": 2, "homeScore": 21, "awayScore": 14, "date": "2026-04-04", "time": "9:00 AM", "location": "Lincoln Park"},
        {"homeTeamId": 3, "awayTeamId": 4, "homeScore": 10, "awayScore": 17, "date": "2026-04-04", "time": "10:30 AM", "location": "Lincoln Park"},
        {"homeTeamId": 5, "awayTeamId": 6, "homeScore": 7, "awayScore": 7, "date": "2026-04-04", "time": "12:00 PM", "location": "Lincoln Park"},
        {"homeTeamId": 2, "awayTeamId": 3, "homeScore": 28, "awayScore": 3, "date": "2026-04-11", "time": "9:00 AM", "location": "Lincoln Park"},
        {"homeTeamId": 4, "awayTeamId": 99, "homeScore": 50, "awayScore": 0, "date": "2026-04-11", "time": "10:30 AM"},
        {"homeTeamId": 6, "awayTeamId": 1, "date": "2026-04-18", "time": "9:00 AM", "location": "Grant Field"}
    ])
}

#[tokio::test]
async fn test_end_to_end_with_http_sources() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start_async().await;
    let teams_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/teams.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(six_teams());
        })
        .await;
    let games_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/games.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(season_games());
        })
        .await;

    let config = cli_config(
        server.url("/teams.json"),
        server.url("/games.json"),
        output_path.clone(),
    );
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = LeaguePipeline::new(storage, config).unwrap();
    let engine = LeagueEngine::new_with_monitoring(pipeline, false);

    let result = engine.run().await;

    assert!(result.is_ok());
    teams_mock.assert_async().await;
    games_mock.assert_async().await;
    assert_eq!(result.unwrap(), output_path);

    for name in ["standings.html", "standings.csv", "league.json"] {
        assert!(Path::new(&output_path).join(name).exists(), "missing {}", name);
    }

    let csv = std::fs::read_to_string(Path::new(&output_path).join("standings.csv")).unwrap();
    let names: Vec<&str> = csv
        .lines()
        .skip(1)
        .map(|line| line.split(',').nth(2).unwrap())
        .collect();
    // 勝場相同時比分差：Hawks +18，Owls +7 (PF 21)，Ravens +7 (PF 17)
    // 對 99 號隊伍的比賽不計入
    assert_eq!(names, vec!["Hawks", "Owls", "Ravens", "Finches", "Wrens", "Crows"]);

    let html = std::fs::read_to_string(Path::new(&output_path).join("standings.html")).unwrap();
    assert!(html.contains("<h3>Week 1 – 2026-04-04</h3>"));
    assert!(html.contains("<strong>Lincoln Park</strong>"));
    assert!(html.contains("Game A: #3 Ravens vs #6 Crows"));
    assert!(html.contains("Game B: #4 Finches vs #5 Wrens"));
}

#[tokio::test]
async fn test_end_to_end_with_local_files_and_bundle() {
    let data_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let teams_path = data_dir.path().join("teams.json");
    let games_path = data_dir.path().join("games.json");
    std::fs::write(&teams_path, six_teams().to_string()).unwrap();
    std::fs::write(&games_path, season_games().to_string()).unwrap();

    let toml = format!(
        r#"
[league]
name = "Local League"

[source]
teams = "{}"
games = "{}"

[output]
path = "{}"
formats = ["json"]
bundle = true
"#,
        teams_path.display(),
        games_path.display(),
        out_dir.path().display()
    );
    let config = TomlConfig::from_toml_str(&toml).unwrap();
    let output_path = config.output.path.clone();

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = LeaguePipeline::new(storage, config).unwrap();
    let engine = LeagueEngine::new(pipeline);

    let result = engine.run().await.unwrap();
    assert!(result.ends_with("league_report.zip"));

    let json = std::fs::read_to_string(out_dir.path().join("league.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(report["league"], "Local League");
    assert_eq!(report["bracket"]["state"], "ready");
    assert_eq!(report["schedule"].as_array().unwrap().len(), 3);
    assert!(!out_dir.path().join("standings.html").exists());

    let zip_data = std::fs::read(out_dir.path().join("league_report.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
    assert_eq!(archive.len(), 1);
    assert!(archive.by_name("league.json").is_ok());
}

#[tokio::test]
async fn test_source_failure_aborts_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out").to_str().unwrap().to_string();

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/teams.json");
            then.status(200).json_body(six_teams());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/games.json");
            then.status(500);
        })
        .await;

    let config = cli_config(
        server.url("/teams.json"),
        server.url("/games.json"),
        output_path.clone(),
    );
    let pipeline = LeaguePipeline::new(LocalStorage::new(output_path.clone()), config).unwrap();
    let engine = LeagueEngine::new(pipeline);

    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, LeagueError::SourceStatusError { status: 500, .. }));
    assert!(!Path::new(&output_path).exists());
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let data_dir = TempDir::new().unwrap();
    let teams_path = data_dir.path().join("teams.json");
    let games_path = data_dir.path().join("games.json");
    std::fs::write(&teams_path, r#"[{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]"#).unwrap();
    std::fs::write(
        &games_path,
        r#"[{"homeTeamId": 2, "awayTeamId": 1, "homeScore": 3, "awayScore": 1, "date": "2026-04-04"}]"#,
    )
    .unwrap();
    let output_path = data_dir.path().join("out").to_str().unwrap().to_string();

    let config = cli_config(
        teams_path.to_str().unwrap().to_string(),
        games_path.to_str().unwrap().to_string(),
        output_path.clone(),
    );
    let pipeline = LeaguePipeline::new(LocalStorage::new(output_path.clone()), config).unwrap();
    let engine = LeagueEngine::new(pipeline);

    let report = engine.dry_run().await.unwrap();

    assert_eq!(report.standings[0].name, "B");
    assert!(!report.bracket.is_ready());
    assert!(!Path::new(&output_path).exists());
}
