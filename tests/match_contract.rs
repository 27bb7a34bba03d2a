use othello_tournament::config::{EntryConfig, TournamentConfig};
use othello_tournament::core::{Board, Coordinate, PieceState};
use othello_tournament::game::{ForfeitPolicy, Game, MatchOptions};
use othello_tournament::player::{Player, Strategy};
use othello_tournament::tournament::run_tournament;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// 受け取った盤面を記録し、最後の合法手を返す
struct Recorder {
    color: PieceState,
    calls: AtomicUsize,
    seen: Mutex<Vec<Board>>,
}

impl Recorder {
    fn new(color: PieceState) -> Self {
        Recorder {
            color,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl Player for Recorder {
    fn name(&self) -> &str {
        "recorder"
    }

    fn color(&self) -> PieceState {
        self.color
    }

    fn make_move(&self, board: &Board) -> Option<Coordinate> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(board.clone());
        board.valid_moves(self.color).last().copied()
    }
}

#[test]
fn players_are_only_asked_when_they_have_a_move() {
    let black = Arc::new(Recorder::new(PieceState::Black));
    let white = Arc::new(Recorder::new(PieceState::White));
    let mut game = Game::new(black.clone(), white.clone(), MatchOptions::default()).unwrap();
    let result = game.play(|_, _| {});

    assert!(result.forfeit.is_none());
    let calls = black.calls.load(Ordering::SeqCst) + white.calls.load(Ordering::SeqCst);
    assert_eq!(calls, result.plies);
    assert_eq!(result.plies + result.passes, result.moves.len());

    for (player, color) in [(&black, PieceState::Black), (&white, PieceState::White)] {
        for snapshot in player.seen.lock().unwrap().iter() {
            assert!(snapshot.count_valid_moves(color) > 0);
            assert!(!snapshot.is_game_over());
        }
    }
}

#[test]
fn replaying_the_move_list_reproduces_the_final_board() {
    let black = Strategy::Greedy.build("g", PieceState::Black);
    let white = Strategy::Random.build("r", PieceState::White);
    let mut game = Game::new(black, white, MatchOptions::default()).unwrap();
    let result = game.play(|_, _| {});

    let mut board = Board::standard();
    for ply in &result.moves {
        if let Some(coord) = ply.coord {
            let flipped = board.apply_move(ply.color, coord).unwrap();
            assert_eq!(flipped, ply.flipped);
        } else {
            assert_eq!(board.count_valid_moves(ply.color), 0);
        }
    }
    assert_eq!(board, *game.board());
    assert_eq!(board.winner(), result.winner);
}

#[test]
fn small_board_tournament_runs_sequentially() {
    let config = TournamentConfig {
        board_width: 6,
        games_per_pairing: 1,
        parallel: false,
        forfeit_policy: ForfeitPolicy::Ply,
        entries: vec![
            EntryConfig {
                name: "greedy".to_string(),
                strategy: Strategy::Greedy,
            },
            EntryConfig {
                name: "minimax".to_string(),
                strategy: Strategy::Minimax { depth: 2 },
            },
        ],
        ..TournamentConfig::default()
    };
    let report = run_tournament(&config).unwrap();

    assert_eq!(report.games.len(), 1);
    let game = &report.games[0];
    assert_eq!(game.black_name, "greedy");
    assert!(game.black + game.white <= 36);
    assert_eq!(game.plies + 4, game.black + game.white);
}
