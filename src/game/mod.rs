use crate::core::{Board, BoardError, Coordinate, PieceState, STANDARD_WIDTH};
use crate::logging;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

/// 不正な応答 (不正着手・盤外・打てるのにパス) への対応
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForfeitPolicy {
    /// その手番だけ既定手に差し替える
    Ply,
    /// 対局を負けにする
    #[default]
    Match,
}

#[derive(Debug, Clone)]
pub struct MatchOptions {
    pub board_width: usize,
    /// 1手あたりの制限時間。超過したら既定手を打つ
    pub move_time_limit: Option<Duration>,
    pub forfeit_policy: ForfeitPolicy,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions {
            board_width: STANDARD_WIDTH,
            move_time_limit: None,
            forfeit_policy: ForfeitPolicy::Match,
        }
    }
}

/// 1手の記録。`coord` が None ならパス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyRecord {
    pub color: PieceState,
    pub coord: Option<Coordinate>,
    pub flipped: usize,
    /// 時間切れ・反則で既定手に差し替えられた
    pub substituted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forfeit {
    pub color: PieceState,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub black_name: String,
    pub white_name: String,
    pub winner: PieceState,
    pub black: usize,
    pub white: usize,
    pub plies: usize,
    pub passes: usize,
    pub timeouts: usize,
    pub forfeit: Option<Forfeit>,
    pub moves: Vec<PlyRecord>,
    pub time_ms: u128,
}

impl MatchResult {
    pub fn winner_name(&self) -> Option<&str> {
        match self.winner {
            PieceState::Black => Some(&self.black_name),
            PieceState::White => Some(&self.white_name),
            PieceState::Empty => None,
        }
    }
}

enum Decision {
    Move(Option<Coordinate>),
    TimedOut,
    Crashed,
}

enum Violation {
    Timeout,
    Foul(String),
}

/// 対局進行役。盤面を所有し、手番ごとにコピーを打ち手に渡す
pub struct Game {
    board: Board,
    current_player: PieceState,
    black: Arc<dyn Player>,
    white: Arc<dyn Player>,
    options: MatchOptions,
}

impl Game {
    pub fn new(
        black: Arc<dyn Player>,
        white: Arc<dyn Player>,
        options: MatchOptions,
    ) -> anyhow::Result<Self> {
        let mut board = Board::new(options.board_width)?;
        board.initialize();
        Self::with_position(black, white, options, board, PieceState::Black)
    }

    /// 任意の局面・手番から始める。`options.board_width` は使わない
    pub fn with_position(
        black: Arc<dyn Player>,
        white: Arc<dyn Player>,
        options: MatchOptions,
        board: Board,
        to_move: PieceState,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(
            black.color() == PieceState::Black,
            "{} is assigned {} but seated as Black",
            black.name(),
            black.color()
        );
        anyhow::ensure!(
            white.color() == PieceState::White,
            "{} is assigned {} but seated as White",
            white.name(),
            white.color()
        );
        anyhow::ensure!(to_move.is_color(), "side to move must be Black or White");
        Ok(Game {
            board,
            current_player: to_move,
            black,
            white,
            options,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> PieceState {
        self.current_player
    }

    fn controller(&self, color: PieceState) -> &Arc<dyn Player> {
        match color {
            PieceState::White => &self.white,
            _ => &self.black,
        }
    }

    fn request_move(&self, player: &Arc<dyn Player>) -> Decision {
        let Some(limit) = self.options.move_time_limit else {
            let snapshot = self.board.clone();
            return match panic::catch_unwind(AssertUnwindSafe(|| player.make_move(&snapshot))) {
                Ok(mv) => Decision::Move(mv),
                Err(_) => Decision::Crashed,
            };
        };

        let (tx, rx) = mpsc::channel();
        let player = Arc::clone(player);
        let snapshot = self.board.clone();
        thread::spawn(move || {
            let _ = tx.send(player.make_move(&snapshot));
        });

        match rx.recv_timeout(limit) {
            Ok(mv) => Decision::Move(mv),
            Err(mpsc::RecvTimeoutError::Timeout) => Decision::TimedOut,
            Err(mpsc::RecvTimeoutError::Disconnected) => Decision::Crashed,
        }
    }

    /// 既定手: row-major で最初の合法手
    fn default_move(&self, color: PieceState) -> Option<Coordinate> {
        self.board.valid_moves(color).first().copied()
    }

    /// 終局まで対局する。`on_ply` は各手 (パス含む) の適用後に呼ばれる
    pub fn play<F>(&mut self, mut on_ply: F) -> MatchResult
    where
        F: FnMut(&Board, &PlyRecord),
    {
        let start_time = Instant::now();
        let mut moves = Vec::new();
        let mut passes = 0;
        let mut timeouts = 0;
        let mut forfeit = None;

        while !self.board.is_game_over() {
            let color = self.current_player;

            if self.board.count_valid_moves(color) == 0 {
                passes += 1;
                let record = PlyRecord {
                    color,
                    coord: None,
                    flipped: 0,
                    substituted: false,
                };
                logging::debug("match", format!("{} passes", color));
                on_ply(&self.board, &record);
                moves.push(record);
                self.current_player = color.opponent();
                continue;
            }

            let player = Arc::clone(self.controller(color));
            let applied = match self.request_move(&player) {
                Decision::Move(Some(c)) if !c.is_pass() => self
                    .board
                    .apply_move(color, c)
                    .map(|flipped| (c, flipped))
                    .map_err(|e| Violation::Foul(e.to_string())),
                Decision::Move(_) => Err(Violation::Foul(
                    "passed with legal moves available".to_string(),
                )),
                Decision::TimedOut => Err(Violation::Timeout),
                Decision::Crashed => Err(Violation::Foul("decision-maker panicked".to_string())),
            };

            let (coord, flipped, substituted) = match applied {
                Ok((coord, flipped)) => (coord, flipped, false),
                Err(violation) => {
                    match violation {
                        Violation::Timeout => {
                            timeouts += 1;
                            logging::log(
                                "match",
                                format!("{} ({}) ran out of time", player.name(), color),
                            );
                        }
                        Violation::Foul(reason) => {
                            if self.options.forfeit_policy == ForfeitPolicy::Match {
                                logging::log(
                                    "match",
                                    format!("{} ({}) forfeits: {}", player.name(), color, reason),
                                );
                                forfeit = Some(Forfeit { color, reason });
                                break;
                            }
                            logging::log(
                                "match",
                                format!("{} ({}) substituted: {}", player.name(), color, reason),
                            );
                        }
                    }
                    match self.apply_default_move(color) {
                        Ok((coord, flipped)) => (coord, flipped, true),
                        Err(e) => {
                            forfeit = Some(Forfeit {
                                color,
                                reason: e.to_string(),
                            });
                            break;
                        }
                    }
                }
            };

            let record = PlyRecord {
                color,
                coord: Some(coord),
                flipped,
                substituted,
            };
            logging::debug(
                "match",
                format!(
                    "{} ({}) plays {} (flipped {})",
                    player.name(),
                    color,
                    coord.notation().unwrap_or_else(|| coord.to_string()),
                    flipped
                ),
            );
            on_ply(&self.board, &record);
            moves.push(record);
            self.current_player = color.opponent();
        }

        let (black, white) = crate::logic::score(&self.board);
        let winner = match &forfeit {
            Some(f) => f.color.opponent(),
            None => self.board.winner(),
        };

        MatchResult {
            black_name: self.black.name().to_string(),
            white_name: self.white.name().to_string(),
            winner,
            black,
            white,
            plies: moves.iter().filter(|m| m.coord.is_some()).count(),
            passes,
            timeouts,
            forfeit,
            moves,
            time_ms: start_time.elapsed().as_millis(),
        }
    }

    fn apply_default_move(&mut self, color: PieceState) -> Result<(Coordinate, usize), BoardError> {
        let coord = self.default_move(color).ok_or(BoardError::IllegalMove {
            color,
            coord: Coordinate::PASS,
        })?;
        let flipped = self.board.apply_move(color, coord)?;
        Ok((coord, flipped))
    }
}
