use crate::config::{EntryConfig, TournamentConfig};
use crate::core::PieceState;
use crate::game::{Game, MatchResult};
use crate::logging;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;

/// 1局分の組み合わせ (entries の添字)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub round: usize,
    pub black: usize,
    pub white: usize,
}

/// 総当たりの対局表。各組は `games_per_pairing` 局、先後を交互にする
pub fn schedule(num_entries: usize, games_per_pairing: usize) -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    for game in 0..games_per_pairing {
        for i in 0..num_entries {
            for j in (i + 1)..num_entries {
                let (black, white) = if game % 2 == 0 { (i, j) } else { (j, i) };
                fixtures.push(Fixture {
                    round: game,
                    black,
                    white,
                });
            }
        }
    }
    fixtures
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub strategy: String,
    pub played: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub forfeits: usize,
    pub disc_diff: i64,
}

impl Standing {
    pub fn points(&self) -> f64 {
        self.wins as f64 + 0.5 * self.draws as f64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentReport {
    pub standings: Vec<Standing>,
    pub games: Vec<MatchResult>,
    pub total_time_ms: u128,
}

impl TournamentReport {
    pub fn leader(&self) -> Option<&Standing> {
        self.standings.first()
    }
}

fn play_fixture(config: &TournamentConfig, fixture: Fixture) -> anyhow::Result<MatchResult> {
    let black_entry = &config.entries[fixture.black];
    let white_entry = &config.entries[fixture.white];
    let black = black_entry
        .strategy
        .build(&black_entry.name, PieceState::Black);
    let white = white_entry
        .strategy
        .build(&white_entry.name, PieceState::White);

    let mut game = Game::new(black, white, config.match_options())?;
    let result = game.play(|_, _| {});
    logging::debug(
        "tournament",
        format!(
            "round {}: {} (B) {} - {} {} (W) -> {}",
            fixture.round + 1,
            result.black_name,
            result.black,
            result.white,
            result.white_name,
            result.winner_name().unwrap_or("draw")
        ),
    );
    Ok(result)
}

/// 対局結果から順位表を作る (勝点、石差、名前の順)
pub fn standings(entries: &[EntryConfig], games: &[MatchResult]) -> Vec<Standing> {
    let mut table: HashMap<&str, Standing> = entries
        .iter()
        .map(|e| {
            (
                e.name.as_str(),
                Standing {
                    name: e.name.clone(),
                    strategy: e.strategy.to_string(),
                    ..Standing::default()
                },
            )
        })
        .collect();

    for game in games {
        let diff = game.black as i64 - game.white as i64;
        let sides = [
            (game.black_name.as_str(), PieceState::Black, diff),
            (game.white_name.as_str(), PieceState::White, -diff),
        ];
        for (name, color, diff) in sides {
            let Some(row) = table.get_mut(name) else {
                continue;
            };
            row.played += 1;
            row.disc_diff += diff;
            if game.winner == color {
                row.wins += 1;
            } else if game.winner == PieceState::Empty {
                row.draws += 1;
            } else {
                row.losses += 1;
            }
            if game.forfeit.as_ref().map(|f| f.color) == Some(color) {
                row.forfeits += 1;
            }
        }
    }

    let mut rows: Vec<Standing> = table.into_values().collect();
    rows.sort_by(|a, b| {
        b.points()
            .total_cmp(&a.points())
            .then(b.disc_diff.cmp(&a.disc_diff))
            .then(a.name.cmp(&b.name))
    });
    rows
}

/// 総当たり戦を行う。`parallel` なら対局ごとに rayon で並列実行する
pub fn run_tournament(config: &TournamentConfig) -> anyhow::Result<TournamentReport> {
    config.validate()?;
    logging::set_verbose(config.verbose);

    let fixtures = schedule(config.entries.len(), config.games_per_pairing);
    logging::log(
        "tournament",
        format!(
            "{} entries, {} games{}",
            config.entries.len(),
            fixtures.len(),
            if config.parallel { " (parallel)" } else { "" }
        ),
    );

    let start_time = Instant::now();
    let games: Vec<MatchResult> = if config.parallel {
        fixtures
            .par_iter()
            .map(|&f| play_fixture(config, f))
            .collect::<anyhow::Result<_>>()?
    } else {
        fixtures
            .iter()
            .map(|&f| play_fixture(config, f))
            .collect::<anyhow::Result<_>>()?
    };

    let report = TournamentReport {
        standings: standings(&config.entries, &games),
        games,
        total_time_ms: start_time.elapsed().as_millis(),
    };
    if let Some(leader) = report.leader() {
        logging::log(
            "tournament",
            format!(
                "finished in {:.1}s, leader: {} ({} pts)",
                report.total_time_ms as f64 / 1000.0,
                leader.name,
                leader.points()
            ),
        );
    }
    Ok(report)
}
