use crate::core::{Board, Coordinate, PieceState};
use crossterm::style::Stylize;
use std::fmt;

/// 合法手マーカー
pub const MOVE_MARKER: char = '*';

/// 盤面のテキスト表現
///
/// `highlight` に色を渡すと、その色の合法手のマスを `*` で示す。
pub fn render(board: &Board, highlight: Option<PieceState>) -> String {
    let moves = highlight
        .map(|color| board.valid_moves(color))
        .unwrap_or_default();
    let mut out = String::new();

    // 列ラベル
    out.push_str("   ");
    for c in 0..board.width() {
        out.push(' ');
        out.push(column_label(c));
    }
    out.push('\n');

    for r in 0..board.width() {
        out.push_str(&format!("{:2} ", r + 1));
        for c in 0..board.width() {
            let coord = Coordinate::new(r as i32, c as i32);
            let symbol = match board.get(coord) {
                Ok(PieceState::Empty) if moves.contains(&coord) => MOVE_MARKER,
                Ok(state) => state.symbol(),
                Err(_) => '?',
            };
            out.push(' ');
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

fn column_label(c: usize) -> char {
    if c < 26 {
        (b'a' + c as u8) as char
    } else {
        '#'
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render(self, None))
    }
}

pub struct DisplayState {
    pub to_move: Option<PieceState>,
    pub last_move: Option<Coordinate>,
    pub status_msg: Option<String>,
    pub show_moves: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            to_move: None,
            last_move: None,
            status_msg: None,
            show_moves: true,
        }
    }
}

/// 端末向けの色付き描画 (観戦モード用)
pub fn print_board(board: &Board, state: &DisplayState) {
    if let Some(msg) = &state.status_msg {
        println!("{}", msg.clone().bold().yellow());
    }

    let moves = match (state.show_moves, state.to_move) {
        (true, Some(color)) => board.valid_moves(color),
        _ => Vec::new(),
    };

    print!("   ");
    for c in 0..board.width() {
        print!(" {}", column_label(c));
    }
    println!();

    for r in 0..board.width() {
        print!("{:2} ", r + 1);
        for c in 0..board.width() {
            let coord = Coordinate::new(r as i32, c as i32);
            let state_at = board.get(coord).unwrap_or(PieceState::Empty);
            let is_last = state.last_move == Some(coord);
            let cell = format!(" {}", state_at.symbol());
            match state_at {
                PieceState::Black if is_last => print!("{}", cell.red().bold()),
                PieceState::White if is_last => print!("{}", cell.red()),
                PieceState::Black => print!("{}", cell.cyan().bold()),
                PieceState::White => print!("{}", cell.magenta()),
                PieceState::Empty if moves.contains(&coord) => {
                    print!("{}", format!(" {}", MOVE_MARKER).green())
                }
                PieceState::Empty => print!("{}", cell.dark_grey()),
            }
        }
        println!();
    }

    let (black, white) = crate::logic::score(board);
    println!("Black: {}  White: {}", black, white);
}
