use crate::core::{Board, Coordinate, PieceState};
use crate::player::Player;
use rand::seq::SliceRandom;

/// 合法手から一様ランダムに選ぶ
pub struct RandomPlayer {
    pub name: String,
    pub color: PieceState,
}

impl RandomPlayer {
    pub fn new(name: &str, color: PieceState) -> Self {
        RandomPlayer {
            name: name.to_string(),
            color,
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> PieceState {
        self.color
    }

    fn make_move(&self, board: &Board) -> Option<Coordinate> {
        let mut rng = rand::thread_rng();
        board.valid_moves(self.color).choose(&mut rng).copied()
    }
}
