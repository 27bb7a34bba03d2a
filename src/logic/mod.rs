use crate::core::{Board, BoardError, Coordinate, PieceState};

/// 8方向 (row, col)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 一方向の挟み判定。返せる石の座標列を返す (挟めなければ空)
fn capture_line(
    board: &Board,
    color: PieceState,
    from: Coordinate,
    (dr, dc): (i32, i32),
) -> Vec<Coordinate> {
    let opponent = color.opponent();
    let mut line = Vec::new();
    let mut curr = from.offset(dr, dc);

    while let Ok(state) = board.get(curr) {
        if state == opponent {
            line.push(curr);
            curr = curr.offset(dr, dc);
        } else if state == color {
            return line;
        } else {
            break;
        }
    }

    line.clear();
    line
}

/// `color` が `coord` に打ったときに返る石 (全方向)
///
/// 空きマスでない、盤外、あるいは `color` が Empty のときは空。
pub fn captures(board: &Board, color: PieceState, coord: Coordinate) -> Vec<Coordinate> {
    if !color.is_color() || board.get(coord) != Ok(PieceState::Empty) {
        return Vec::new();
    }
    DIRECTIONS
        .iter()
        .flat_map(|&dir| capture_line(board, color, coord, dir))
        .collect()
}

/// 合法手判定: どれか一方向でも挟めれば合法
pub fn is_legal_move(board: &Board, color: PieceState, coord: Coordinate) -> bool {
    if !color.is_color() || board.get(coord) != Ok(PieceState::Empty) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| !capture_line(board, color, coord, dir).is_empty())
}

/// 合法手一覧 (row-major 順、重複なし)
pub fn valid_moves(board: &Board, color: PieceState) -> Vec<Coordinate> {
    board
        .cells()
        .filter(|&(coord, _)| is_legal_move(board, color, coord))
        .map(|(coord, _)| coord)
        .collect()
}

/// 合法手の数 (`valid_moves` と同じ判定を使う)
pub fn count_valid_moves(board: &Board, color: PieceState) -> usize {
    board
        .cells()
        .filter(|&(coord, _)| is_legal_move(board, color, coord))
        .count()
}

/// 着手を適用し、返した石の数を返す
///
/// 不正な着手では盤面を一切変更せずにエラーを返す。
pub fn apply_move(
    board: &mut Board,
    color: PieceState,
    coord: Coordinate,
) -> Result<usize, BoardError> {
    match board.get(coord)? {
        PieceState::Empty => {}
        _ => return Err(BoardError::OccupiedCell(coord)),
    }

    let flips = captures(board, color, coord);
    if flips.is_empty() {
        return Err(BoardError::IllegalMove { color, coord });
    }

    board.set(color, coord)?;
    for &pos in &flips {
        board.put(pos, color);
    }
    Ok(flips.len())
}

/// 終局判定: 盤が埋まったか、両者とも打てない
pub fn is_game_over(board: &Board) -> bool {
    board.is_full()
        || (count_valid_moves(board, PieceState::Black) == 0
            && count_valid_moves(board, PieceState::White) == 0)
}

/// 勝者。終局前、または同数なら Empty
pub fn winner(board: &Board) -> PieceState {
    if !is_game_over(board) {
        return PieceState::Empty;
    }
    let (black, white) = score(board);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => PieceState::Black,
        std::cmp::Ordering::Less => PieceState::White,
        std::cmp::Ordering::Equal => PieceState::Empty,
    }
}

/// (黒石数, 白石数)
pub fn score(board: &Board) -> (usize, usize) {
    (
        board.count_pieces(PieceState::Black),
        board.count_pieces(PieceState::White),
    )
}

impl Board {
    pub fn captures(&self, color: PieceState, coord: Coordinate) -> Vec<Coordinate> {
        captures(self, color, coord)
    }

    pub fn is_legal_move(&self, color: PieceState, coord: Coordinate) -> bool {
        is_legal_move(self, color, coord)
    }

    pub fn valid_moves(&self, color: PieceState) -> Vec<Coordinate> {
        valid_moves(self, color)
    }

    pub fn count_valid_moves(&self, color: PieceState) -> usize {
        count_valid_moves(self, color)
    }

    pub fn apply_move(&mut self, color: PieceState, coord: Coordinate) -> Result<usize, BoardError> {
        apply_move(self, color, coord)
    }

    pub fn is_game_over(&self) -> bool {
        is_game_over(self)
    }

    pub fn winner(&self) -> PieceState {
        winner(self)
    }
}
