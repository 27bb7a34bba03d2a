use serde::{Deserialize, Serialize};
use std::fmt;

/// マスの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceState {
    Black,
    White,
    Empty,
}

impl Default for PieceState {
    fn default() -> Self {
        PieceState::Empty
    }
}

impl PieceState {
    pub fn opponent(self) -> PieceState {
        match self {
            PieceState::Black => PieceState::White,
            PieceState::White => PieceState::Black,
            PieceState::Empty => PieceState::Empty,
        }
    }

    /// 石の色 (Black / White) かどうか
    pub fn is_color(self) -> bool {
        self != PieceState::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            PieceState::Black => 'B',
            PieceState::White => 'W',
            PieceState::Empty => '.',
        }
    }

    pub fn from_symbol(ch: char) -> Option<PieceState> {
        match ch {
            'B' | 'b' | 'X' | 'x' => Some(PieceState::Black),
            'W' | 'w' | 'O' | 'o' => Some(PieceState::White),
            '.' | '-' => Some(PieceState::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for PieceState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PieceState::Black => "Black",
            PieceState::White => "White",
            PieceState::Empty => "Empty",
        };
        f.write_str(name)
    }
}

/// 盤面座標 (0-indexed, row-major で順序付け)
///
/// 負の値も表現できるので、範囲外の入力は `get`/`set` 側で弾く。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coordinate {
    row: i32,
    col: i32,
}

impl Coordinate {
    /// 旧来のパス表現 (-1, -1)
    pub const PASS: Coordinate = Coordinate { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Self {
        Coordinate { row, col }
    }

    pub fn row(self) -> i32 {
        self.row
    }

    pub fn col(self) -> i32 {
        self.col
    }

    pub fn is_pass(self) -> bool {
        self == Coordinate::PASS
    }

    pub fn offset(self, dr: i32, dc: i32) -> Coordinate {
        Coordinate::new(self.row + dr, self.col + dc)
    }

    /// "d3" 形式の棋譜表記。列が a-z に収まらない場合は None
    pub fn notation(self) -> Option<String> {
        if self.row < 0 || !(0..26).contains(&self.col) {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        Some(format!("{}{}", file, self.row + 1))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
