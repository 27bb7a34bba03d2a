//! Othello round-robin runner
//!
//! Usage: othello-tournament [config.json] [--watch] [--json]

use othello_tournament::config::TournamentConfig;
use othello_tournament::core::PieceState;
use othello_tournament::display::{print_board, DisplayState};
use othello_tournament::game::Game;
use othello_tournament::tournament::{run_tournament, TournamentReport};
use std::env;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let watch = args.iter().any(|a| a == "--watch");
    let json = args.iter().any(|a| a == "--json");

    let config = match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => TournamentConfig::load(path)?,
        None => TournamentConfig::load_or_default(),
    };

    if watch {
        return watch_match(&config);
    }

    let report = run_tournament(&config)?;
    if json {
        serde_json::to_writer_pretty(std::io::stdout(), &report)?;
        println!();
    } else {
        print_standings(&mut std::io::stdout().lock(), &report)?;
    }
    Ok(())
}

/// 最初の2エントリの対局を1手ずつ描画する
fn watch_match(config: &TournamentConfig) -> anyhow::Result<()> {
    config.validate()?;
    othello_tournament::logging::set_verbose(config.verbose);

    let (b, w) = (&config.entries[0], &config.entries[1]);
    let black = b.strategy.build(&b.name, PieceState::Black);
    let white = w.strategy.build(&w.name, PieceState::White);
    let mut game = Game::new(black, white, config.match_options())?;

    print_board(
        game.board(),
        &DisplayState {
            to_move: Some(PieceState::Black),
            status_msg: Some(format!("{} (Black) vs {} (White)", b.name, w.name)),
            ..DisplayState::default()
        },
    );

    let result = game.play(|board, ply| {
        let msg = match ply.coord.and_then(|c| c.notation()) {
            Some(n) => format!("{} plays {} (flipped {})", ply.color, n, ply.flipped),
            None => format!("{} passes", ply.color),
        };
        println!();
        print_board(
            board,
            &DisplayState {
                to_move: Some(ply.color.opponent()),
                last_move: ply.coord,
                status_msg: Some(msg),
                ..DisplayState::default()
            },
        );
    });

    println!();
    match result.winner_name() {
        Some(name) => println!("Winner: {} ({} - {})", name, result.black, result.white),
        None => println!("Draw ({} - {})", result.black, result.white),
    }
    if let Some(f) = &result.forfeit {
        println!("{} forfeited: {}", f.color, f.reason);
    }
    Ok(())
}

fn print_standings(out: &mut impl Write, report: &TournamentReport) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<4} {:<16} {:<18} {:>3} {:>3} {:>3} {:>3} {:>6} {:>6}",
        "#", "Name", "Strategy", "W", "D", "L", "F", "Pts", "Discs"
    )?;
    for (i, s) in report.standings.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<16} {:<18} {:>3} {:>3} {:>3} {:>3} {:>6.1} {:>+6}",
            i + 1,
            s.name,
            s.strategy,
            s.wins,
            s.draws,
            s.losses,
            s.forfeits,
            s.points(),
            s.disc_diff
        )?;
    }
    writeln!(
        out,
        "\n{} games in {:.1}s",
        report.games.len(),
        report.total_time_ms as f64 / 1000.0
    )
}
