use super::error::BoardError;
use super::types::{Coordinate, PieceState};
use serde::{Deserialize, Serialize};

/// 標準のオセロ盤の一辺
pub const STANDARD_WIDTH: usize = 8;

/// 盤面 (width × width の row-major 配列)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    width: usize,
    cells: Vec<PieceState>,
}

/// 検証前のデシリアライズ結果
#[derive(Deserialize)]
struct RawBoard {
    width: usize,
    cells: Vec<PieceState>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut board = Board::new(raw.width)?;
        if raw.cells.len() != board.size() {
            return Err(BoardError::CellCount {
                expected: board.size(),
                found: raw.cells.len(),
            });
        }
        board.cells = raw.cells;
        Ok(board)
    }
}

impl Board {
    /// 空の盤を作る。初期配置を置くには `initialize` を呼ぶ
    pub fn new(width: usize) -> Result<Self, BoardError> {
        if width < 4 || width % 2 != 0 {
            return Err(BoardError::UnsupportedWidth(width));
        }
        Ok(Board {
            width,
            cells: vec![PieceState::Empty; width * width],
        })
    }

    /// 初期配置済みの 8x8 盤
    pub fn standard() -> Self {
        let mut board = Board {
            width: STANDARD_WIDTH,
            cells: vec![PieceState::Empty; STANDARD_WIDTH * STANDARD_WIDTH],
        };
        board.initialize();
        board
    }

    /// 文字列から盤面を作る ('B', 'W', '.'、空白は無視)
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let width = rows.len();
        let mut board = Board::new(width)?;
        for (r, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != width {
                return Err(BoardError::UnsupportedWidth(symbols.len()));
            }
            for (c, ch) in symbols.into_iter().enumerate() {
                let coord = Coordinate::new(r as i32, c as i32);
                let state = PieceState::from_symbol(ch)
                    .ok_or(BoardError::InvalidSymbol { coord, symbol: ch })?;
                board.cells[r * width + c] = state;
            }
        }
        Ok(board)
    }

    /// 盤を空にして中央 2x2 に初期配置を置く
    pub fn initialize(&mut self) {
        self.cells.fill(PieceState::Empty);
        let lo = (self.width / 2 - 1) as i32;
        let hi = (self.width / 2) as i32;
        self.put(Coordinate::new(lo, lo), PieceState::White);
        self.put(Coordinate::new(hi, hi), PieceState::White);
        self.put(Coordinate::new(lo, hi), PieceState::Black);
        self.put(Coordinate::new(hi, lo), PieceState::Black);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn size(&self) -> usize {
        self.width * self.width
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        let w = self.width as i32;
        (0..w).contains(&coord.row()) && (0..w).contains(&coord.col())
    }

    fn index(&self, coord: Coordinate) -> Result<usize, BoardError> {
        if self.contains(coord) {
            Ok(coord.row() as usize * self.width + coord.col() as usize)
        } else {
            Err(BoardError::OutOfBounds(coord))
        }
    }

    pub fn get(&self, coord: Coordinate) -> Result<PieceState, BoardError> {
        let idx = self.index(coord)?;
        Ok(self.cells[idx])
    }

    /// 空きマスへの低レベル書き込み。オセロの合法性は見ない
    pub fn set(&mut self, color: PieceState, coord: Coordinate) -> Result<(), BoardError> {
        let idx = self.index(coord)?;
        if self.cells[idx] != PieceState::Empty {
            return Err(BoardError::OccupiedCell(coord));
        }
        if !color.is_color() {
            return Err(BoardError::IllegalMove { color, coord });
        }
        self.cells[idx] = color;
        Ok(())
    }

    /// 範囲チェック済みの座標に対する上書き (石の反転用)
    pub(crate) fn put(&mut self, coord: Coordinate, state: PieceState) {
        let idx = coord.row() as usize * self.width + coord.col() as usize;
        self.cells[idx] = state;
    }

    pub fn count_pieces(&self, state: PieceState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&PieceState::Empty)
    }

    /// 全マスを row-major 順に列挙
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, PieceState)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &s)| (Coordinate::new((i / w) as i32, (i % w) as i32), s))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_places_four_center_discs() {
        let board = Board::standard();
        assert_eq!(board.count_pieces(PieceState::Black), 2);
        assert_eq!(board.count_pieces(PieceState::White), 2);
        assert_eq!(board.count_pieces(PieceState::Empty), 60);
        assert_eq!(board.get(Coordinate::new(3, 3)), Ok(PieceState::White));
        assert_eq!(board.get(Coordinate::new(4, 4)), Ok(PieceState::White));
        assert_eq!(board.get(Coordinate::new(3, 4)), Ok(PieceState::Black));
        assert_eq!(board.get(Coordinate::new(4, 3)), Ok(PieceState::Black));
    }

    #[test]
    fn initialize_resets_a_played_board() {
        let mut board = Board::standard();
        board.set(PieceState::Black, Coordinate::new(0, 0)).unwrap();
        board.initialize();
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn get_and_set_reject_out_of_bounds() {
        let mut board = Board::standard();
        for coord in [
            Coordinate::new(8, 0),
            Coordinate::new(0, 8),
            Coordinate::new(-1, 3),
            Coordinate::new(3, -1),
        ] {
            assert_eq!(board.get(coord), Err(BoardError::OutOfBounds(coord)));
            assert_eq!(
                board.set(PieceState::Black, coord),
                Err(BoardError::OutOfBounds(coord))
            );
        }
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn set_rejects_occupied_cells() {
        let mut board = Board::standard();
        let center = Coordinate::new(3, 3);
        let err = board.set(PieceState::Black, center).unwrap_err();
        assert_eq!(err, BoardError::OccupiedCell(center));
        assert!(err.is_illegal_move());
        assert_eq!(board.get(center), Ok(PieceState::White));
    }

    #[test]
    fn set_rejects_empty_as_a_color() {
        let mut board = Board::standard();
        let coord = Coordinate::new(0, 0);
        assert!(board.set(PieceState::Empty, coord).is_err());
    }

    #[test]
    fn unsupported_widths_are_rejected() {
        assert_eq!(Board::new(3), Err(BoardError::UnsupportedWidth(3)));
        assert_eq!(Board::new(7), Err(BoardError::UnsupportedWidth(7)));
        let mut small = Board::new(4).unwrap();
        small.initialize();
        assert_eq!(small.size(), 16);
        assert_eq!(small.get(Coordinate::new(1, 1)), Ok(PieceState::White));
        assert_eq!(small.get(Coordinate::new(1, 2)), Ok(PieceState::Black));
    }

    #[test]
    fn clone_is_independent() {
        let original = Board::standard();
        let mut copy = original.clone();
        copy.set(PieceState::Black, Coordinate::new(0, 0)).unwrap();
        assert_eq!(original.get(Coordinate::new(0, 0)), Ok(PieceState::Empty));
        assert_ne!(original, copy);
    }

    #[test]
    fn deserialize_checks_width_and_cell_count() {
        let json = serde_json::to_string(&Board::standard()).unwrap();
        let board: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, Board::standard());

        assert!(serde_json::from_str::<Board>(r#"{"width":8,"cells":[]}"#).is_err());
        assert!(serde_json::from_str::<Board>(r#"{"width":3,"cells":[]}"#).is_err());

        let raw = RawBoard {
            width: 4,
            cells: vec![PieceState::Empty; 15],
        };
        assert_eq!(
            Board::try_from(raw),
            Err(BoardError::CellCount {
                expected: 16,
                found: 15
            })
        );
    }

    #[test]
    fn from_rows_parses_symbols() {
        let board = Board::from_rows(&["B W . .", ". . . .", ". . . .", ". . . W"]).unwrap();
        assert_eq!(board.get(Coordinate::new(0, 0)), Ok(PieceState::Black));
        assert_eq!(board.get(Coordinate::new(0, 1)), Ok(PieceState::White));
        assert_eq!(board.get(Coordinate::new(3, 3)), Ok(PieceState::White));
        assert!(Board::from_rows(&["B W .", "...", "..."]).is_err());
        assert!(Board::from_rows(&["B W . ?", "....", "....", "...."]).is_err());
    }
}
