use crate::core::{Board, Coordinate, PieceState};

pub const WIN_SCORE: i32 = 100_000;

/// 8x8 用の位置評価表
const STANDARD_WEIGHTS: [[i32; 8]; 8] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// マスの重み。8x8 以外では隅・辺・隅の隣だけで近似する
pub fn square_weight(width: usize, coord: Coordinate) -> i32 {
    let (r, c) = (coord.row() as usize, coord.col() as usize);
    if width == 8 {
        return STANDARD_WEIGHTS[r][c];
    }
    let last = width - 1;
    let edge_r = r == 0 || r == last;
    let edge_c = c == 0 || c == last;
    let near_r = r == 1 || r == last - 1;
    let near_c = c == 1 || c == last - 1;
    match (edge_r, edge_c) {
        (true, true) => 100,
        _ if near_r && near_c => -50,
        (true, false) if near_c => -20,
        (false, true) if near_r => -20,
        (true, _) | (_, true) => 10,
        _ => -1,
    }
}

/// `color` から見た評価値
pub fn evaluate(board: &Board, color: PieceState) -> i32 {
    let opponent = color.opponent();

    if board.is_game_over() {
        let diff = board.count_pieces(color) as i32 - board.count_pieces(opponent) as i32;
        return match diff.signum() {
            1 => WIN_SCORE + diff,
            -1 => -WIN_SCORE + diff,
            _ => 0,
        };
    }

    let width = board.width();
    let positional: i32 = board
        .cells()
        .map(|(coord, state)| {
            if state == color {
                square_weight(width, coord)
            } else if state == opponent {
                -square_weight(width, coord)
            } else {
                0
            }
        })
        .sum();

    let mobility =
        board.count_valid_moves(color) as i32 - board.count_valid_moves(opponent) as i32;

    positional + 5 * mobility
}
