use super::{RenderContext, Renderer};
use crate::domain::model::{
    Bracket, BracketProjection, BracketSlot, LeagueReport, Matchup, ScheduleDay, ScheduledGame,
    Seed, TeamId,
};
use crate::domain::ports::PlayoffLabels;
use crate::utils::error::Result;
use maud::{html, Markup, DOCTYPE};

const PLAYOFFS_PENDING: &str = "Playoffs will appear once 6 teams are loaded.";

/// Single static page with standings, schedule and playoffs sections.
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn file_name(&self) -> &'static str {
        "standings.html"
    }

    fn render(&self, report: &LeagueReport, context: &RenderContext) -> Result<String> {
        let page = html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (context.league_name) }
                }
                body {
                    h1 { (context.league_name) }
                    (standings_section(report))
                    (schedule_section(&report.schedule))
                    (playoffs_section(report, &context.playoffs))
                }
            }
        };
        Ok(page.into_string())
    }
}

fn standings_section(report: &LeagueReport) -> Markup {
    html! {
        section id="standings" {
            h2 { "Standings" }
            table id="standingsTable" {
                thead {
                    tr { th { "Team" } th { "W" } th { "L" } th { "PF" } th { "PA" } th { "Diff" } }
                }
                tbody {
                    @for row in &report.standings {
                        tr {
                            td { (team_badge(Some(&row.team_id), &row.name)) }
                            td { (row.wins) }
                            td { (row.losses) }
                            td { (row.points_for) }
                            td { (row.points_against) }
                            td { (row.differential()) }
                        }
                    }
                }
            }
        }
    }
}

fn schedule_section(schedule: &[ScheduleDay]) -> Markup {
    html! {
        section id="schedule" {
            h2 { "Schedule" }
            @for day in schedule {
                h3 { "Week " (day.week) " – " (day.date) }
                @if let Some(site) = &day.site {
                    div.site { strong { (site) } }
                }
                @for game in &day.games {
                    (game_block(game))
                }
            }
        }
    }
}

fn game_block(scheduled: &ScheduledGame) -> Markup {
    let game = &scheduled.game;
    let away = team_badge(game.away_team_id.as_ref(), &scheduled.away_name);
    let home = team_badge(game.home_team_id.as_ref(), &scheduled.home_name);

    html! {
        div.game {
            div.meta { (game.time.as_deref().unwrap_or_default()) }
            div.score {
                @match game.final_score() {
                    Some((home_score, away_score)) => {
                        (away) " " (away_score) " — " (home) " " (home_score)
                    }
                    None => { (away) " @ " (home) }
                }
            }
            @if !scheduled.played {
                div.pending { "Not played yet" }
            }
        }
    }
}

fn playoffs_section(report: &LeagueReport, labels: &PlayoffLabels) -> Markup {
    html! {
        section id="playoffs" {
            h2 { "Playoffs" }
            div id="playoffDates" { (labels.dates) }
            @match &report.bracket {
                BracketProjection::NotReady { .. } => {
                    div.game { div.pending { (PLAYOFFS_PENDING) } }
                }
                BracketProjection::Ready(bracket) => {
                    (bracket_blocks(&report.seeds, bracket, labels))
                }
            }
        }
    }
}

fn bracket_blocks(seeds: &[Seed], bracket: &Bracket, labels: &PlayoffLabels) -> Markup {
    html! {
        div.game {
            div.meta { "Seeding (based on current standings)" }
            div.score {
                @for (idx, seed) in seeds.iter().enumerate() {
                    @if idx > 0 { br; }
                    "#" (seed.seed) " " (seed.record.name)
                }
            }
        }
        (round_block(&labels.play_in, &bracket.play_in))
        (round_block(&labels.semifinals, &bracket.semifinals))
        div.game {
            div.meta { (labels.championship) }
            div.score { (bracket.championship.label) ": " (labels.final_matchup) }
        }
    }
}

fn round_block(label: &str, matchups: &[Matchup]) -> Markup {
    html! {
        div.game {
            div.meta { (label) }
            @for matchup in matchups {
                div.score {
                    (matchup.label) ": " (slot_text(&matchup.first)) " vs " (slot_text(&matchup.second))
                }
            }
        }
    }
}

/// `#3 Ravens`, or `Winner of #4/#5` for a slot fed by an earlier game.
fn slot_text(slot: &BracketSlot) -> String {
    match slot {
        BracketSlot::Seed(seed) => format!("#{} {}", seed.seed, seed.name),
        BracketSlot::WinnerOf { seeds, .. } => {
            let feeding: Vec<String> = seeds.iter().map(|seed| format!("#{}", seed)).collect();
            format!("Winner of {}", feeding.join("/"))
        }
    }
}

fn team_badge(team_id: Option<&TeamId>, name: &str) -> Markup {
    let class_id = team_id
        .map(|id| css_class_fragment(&id.to_string()))
        .unwrap_or_else(|| "tbd".to_string());
    html! {
        span class={ "team-badge team-" (class_id) } { (name) }
    }
}

fn css_class_fragment(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect()
}
