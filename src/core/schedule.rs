use crate::domain::model::{Game, ScheduleDay, ScheduledGame, Team, TeamId};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

const DATE_FORMAT: &str = "%Y-%m-%d";
const UNKNOWN_TEAM: &str = "TBD";

/// Games ordered by calendar date, then by time of day as written.
///
/// Dates that do not parse as `YYYY-MM-DD` go last, ordered by their text.
pub fn sort_schedule(games: &[Game]) -> Vec<Game> {
    let mut sorted = games.to_vec();
    sorted.sort_by(schedule_order);
    sorted
}

fn schedule_order(a: &Game, b: &Game) -> Ordering {
    let parsed = |g: &Game| NaiveDate::parse_from_str(g.date.trim(), DATE_FORMAT).ok();
    let date_order = match (parsed(a), parsed(b)) {
        (Some(da), Some(db)) => da.cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.date.cmp(&b.date),
    };
    date_order.then_with(|| {
        a.time
            .as_deref()
            .unwrap_or_default()
            .cmp(b.time.as_deref().unwrap_or_default())
    })
}

/// Sorted games grouped into weeks, one per distinct date in first-seen order.
pub fn build_schedule(teams: &[Team], games: &[Game]) -> Vec<ScheduleDay> {
    let names: HashMap<&TeamId, &str> = teams.iter().map(|t| (&t.id, t.name.as_str())).collect();
    let display_name = |id: &Option<TeamId>| match id {
        Some(id) => names
            .get(id)
            .map(|name| name.to_string())
            .unwrap_or_else(|| id.to_string()),
        None => UNKNOWN_TEAM.to_string(),
    };

    let mut days: Vec<ScheduleDay> = Vec::new();
    for game in sort_schedule(games) {
        let scheduled = ScheduledGame {
            home_name: display_name(&game.home_team_id),
            away_name: display_name(&game.away_team_id),
            played: game.is_played(),
            game,
        };

        match days.iter_mut().find(|day| day.date == scheduled.game.date) {
            Some(day) => day.games.push(scheduled),
            None => days.push(ScheduleDay {
                week: days.len() + 1,
                date: scheduled.game.date.clone(),
                site: None,
                games: vec![scheduled],
            }),
        }
    }

    for day in &mut days {
        day.site = single_site(&day.games);
    }
    days
}

fn single_site(games: &[ScheduledGame]) -> Option<String> {
    let sites: BTreeSet<&str> = games
        .iter()
        .filter_map(|g| g.game.location.as_deref())
        .filter(|site| !site.is_empty())
        .collect();
    if sites.len() == 1 {
        sites.into_iter().next().map(str::to_string)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn teams() -> Vec<Team> {
        vec![Team::new(1, "Owls"), Team::new(2, "Hawks"), Team::new(3, "Crows")]
    }

    #[test]
    fn test_sort_by_date_then_time() {
        let games = vec![
            Game::new(1, 2).on("2026-04-11", "9:00 AM"),
            Game::new(2, 3).on("2026-04-04", "11:00 AM"),
            Game::new(3, 1).on("2026-04-04", "10:00 AM"),
        ];

        let sorted = sort_schedule(&games);

        assert_eq!(sorted[0], games[2]);
        assert_eq!(sorted[1], games[1]);
        assert_eq!(sorted[2], games[0]);
    }

    #[test]
    fn test_unparseable_dates_go_last() {
        let games = vec![
            Game::new(1, 2).on("TBD", "9:00"),
            Game::new(2, 3).on("2026-05-01", "9:00"),
        ];
        let sorted = sort_schedule(&games);
        assert_eq!(sorted[0].date, "2026-05-01");
        assert_eq!(sorted[1].date, "TBD");
    }

    #[test]
    fn test_group_by_week_with_single_site() {
        let games = vec![
            Game::new(1, 2).on("2026-04-04", "9:00").at("North Field").with_score(3.0, 1.0),
            Game::new(3, 1).on("2026-04-04", "10:00").at("North Field"),
            Game::new(2, 3).on("2026-04-11", "9:00").at("North Field"),
            Game::new(1, 3).on("2026-04-11", "10:00").at("South Field"),
        ];

        let days = build_schedule(&teams(), &games);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].week, 1);
        assert_eq!(days[0].date, "2026-04-04");
        assert_eq!(days[0].site.as_deref(), Some("North Field"));
        assert_eq!(days[0].games.len(), 2);
        assert!(days[0].games[0].played);
        assert!(!days[0].games[1].played);

        assert_eq!(days[1].week, 2);
        assert_eq!(days[1].site, None);
    }

    #[test]
    fn test_display_names_fall_back_to_id_then_tbd() {
        let mut game = Game::new(1, 42).on("2026-04-04", "9:00");
        let mut open = Game::new(2, 3).on("2026-04-04", "10:00");
        open.home_team_id = None;
        game.location = Some(String::new());

        let days = build_schedule(&teams(), &[game, open]);

        assert_eq!(days[0].games[0].home_name, "Owls");
        assert_eq!(days[0].games[0].away_name, "42");
        assert_eq!(days[0].games[1].home_name, "TBD");
        assert_eq!(days[0].site, None);
    }

    proptest! {
        #[test]
        fn prop_weeks_are_sequential_and_sorted(
            slots in proptest::collection::vec((1u32..28, 0u32..4), 0..30)
        ) {
            let games: Vec<Game> = slots
                .iter()
                .map(|(day, hour)| Game::new(1, 2).on(&format!("2026-04-{:02}", day), &format!("{:02}:00", hour + 8)))
                .collect();

            let days = build_schedule(&teams(), &games);

            for (idx, day) in days.iter().enumerate() {
                prop_assert_eq!(day.week, idx + 1);
            }
            let flat: Vec<&Game> = days.iter().flat_map(|d| d.games.iter().map(|g| &g.game)).collect();
            prop_assert_eq!(flat.len(), games.len());
            for pair in flat.windows(2) {
                prop_assert_ne!(schedule_order(pair[0], pair[1]), Ordering::Greater);
            }
        }
    }
}
