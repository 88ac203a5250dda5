use crate::domain::model::{Game, Team, TeamId, TeamRecord};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Folds played games into one record per team and returns them ranked.
///
/// Ranking: wins, then point differential, then points for (all descending),
/// then name. Games that are unplayed or reference a team outside `teams`
/// are ignored.
pub fn compute_standings(teams: &[Team], games: &[Game]) -> Vec<TeamRecord> {
    let mut records: Vec<TeamRecord> = Vec::with_capacity(teams.len());
    let mut index: HashMap<&TeamId, usize> = HashMap::with_capacity(teams.len());

    for team in teams {
        match index.get(&team.id) {
            // 重複的 id 以後者為準，但保留原本的位置
            Some(&slot) => records[slot] = TeamRecord::new(team),
            None => {
                index.insert(&team.id, records.len());
                records.push(TeamRecord::new(team));
            }
        }
    }

    for game in games {
        let Some((home_score, away_score)) = game.final_score() else {
            continue;
        };
        let (Some(home), Some(away)) = (
            game.home_team_id.as_ref().and_then(|id| index.get(id).copied()),
            game.away_team_id.as_ref().and_then(|id| index.get(id).copied()),
        ) else {
            continue;
        };

        records[home].points_for += home_score;
        records[home].points_against += away_score;
        records[away].points_for += away_score;
        records[away].points_against += home_score;

        // -0 與 0 視為平手
        if home_score > away_score {
            records[home].wins += 1;
            records[away].losses += 1;
        } else if away_score > home_score {
            records[away].wins += 1;
            records[home].losses += 1;
        }
    }

    records.sort_by(rank_order);
    records
}

/// Total order used to rank standings rows.
pub fn rank_order(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then(b.differential().total_cmp(&a.differential()))
        .then(b.points_for.total_cmp(&a.points_for))
        .then_with(|| collate_names(&a.name, &b.name))
}

/// Case-insensitive name comparison, falling back to the exact text.
pub fn collate_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
