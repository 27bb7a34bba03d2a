use super::types::{Coordinate, PieceState};
use std::fmt;

/// 盤面操作のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// 盤外の座標
    OutOfBounds(Coordinate),
    /// 既に石があるマスへの着手
    OccupiedCell(Coordinate),
    /// 一つも石を返せない着手 (または Empty による着手)
    IllegalMove { color: PieceState, coord: Coordinate },
    /// 初期配置が置けない盤サイズ
    UnsupportedWidth(usize),
    /// 盤面文字列の解釈できない記号
    InvalidSymbol { coord: Coordinate, symbol: char },
    /// マス数が width² と一致しない
    CellCount { expected: usize, found: usize },
}

impl BoardError {
    /// OccupiedCell も不正着手の一種として扱う
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            BoardError::IllegalMove { .. } | BoardError::OccupiedCell(_)
        )
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => write!(f, "coordinate {} is out of bounds", c),
            BoardError::OccupiedCell(c) => write!(f, "cell {} is already occupied", c),
            BoardError::IllegalMove { color, coord } => {
                write!(f, "illegal move for {} at {}", color, coord)
            }
            BoardError::UnsupportedWidth(w) => {
                write!(f, "unsupported board width {} (must be even and >= 4)", w)
            }
            BoardError::InvalidSymbol { coord, symbol } => {
                write!(f, "invalid symbol {:?} at {}", symbol, coord)
            }
            BoardError::CellCount { expected, found } => {
                write!(f, "expected {} cells, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for BoardError {}
