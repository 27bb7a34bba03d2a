pub mod board;
pub mod error;
pub mod types;

pub use board::{Board, STANDARD_WIDTH};
pub use error::BoardError;
pub use types::{Coordinate, PieceState};
