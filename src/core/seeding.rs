use crate::domain::model::{
    Bracket, BracketProjection, BracketSlot, Matchup, Seed, SeedRef, TeamRecord,
};

/// Number of seeds the playoff bracket is built from.
pub const BRACKET_SIZE: usize = 6;

/// Assigns seeds 1..=N in the order given. Callers pass ranked standings.
pub fn seed_from_standings(records: &[TeamRecord]) -> Vec<Seed> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| Seed {
            seed: idx + 1,
            record: record.clone(),
            diff: record.differential(),
        })
        .collect()
}

/// Fixed six-team bracket: play-in 3v6 and 4v5, byes for seeds 1 and 2.
///
/// Only matchups are described; results never advance anyone.
pub fn project_bracket(seeds: &[Seed]) -> BracketProjection {
    if seeds.len() < BRACKET_SIZE {
        return BracketProjection::NotReady {
            required: BRACKET_SIZE,
            available: seeds.len(),
        };
    }

    let slot = |n: usize| BracketSlot::Seed(SeedRef::from(&seeds[n - 1]));
    let winner = |game: &str, feeding: &[usize]| BracketSlot::WinnerOf {
        game: game.to_string(),
        seeds: feeding.to_vec(),
    };
    let matchup = |label: &str, first: BracketSlot, second: BracketSlot| Matchup {
        label: label.to_string(),
        first,
        second,
    };

    BracketProjection::Ready(Bracket {
        play_in: [
            matchup("Game A", slot(3), slot(6)),
            matchup("Game B", slot(4), slot(5)),
        ],
        semifinals: [
            matchup("Semi 1", winner("Game B", &[4, 5]), slot(1)),
            matchup("Semi 2", winner("Game A", &[3, 6]), slot(2)),
        ],
        championship: matchup(
            "Championship",
            winner("Semi 1", &[1, 4, 5]),
            winner("Semi 2", &[2, 3, 6]),
        ),
    })
}
