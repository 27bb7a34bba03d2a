use crate::core::{Board, Coordinate, PieceState};
use crate::player::Player;

/// その場で最も多く返せる手を選ぶ。同数なら row-major で先の手
pub struct GreedyPlayer {
    pub name: String,
    pub color: PieceState,
}

impl GreedyPlayer {
    pub fn new(name: &str, color: PieceState) -> Self {
        GreedyPlayer {
            name: name.to_string(),
            color,
        }
    }
}

impl Player for GreedyPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> PieceState {
        self.color
    }

    fn make_move(&self, board: &Board) -> Option<Coordinate> {
        let mut best: Option<(Coordinate, usize)> = None;
        for mv in board.valid_moves(self.color) {
            let flips = board.captures(self.color, mv).len();
            if best.map_or(true, |(_, n)| flips > n) {
                best = Some((mv, flips));
            }
        }
        best.map(|(mv, _)| mv)
    }
}
