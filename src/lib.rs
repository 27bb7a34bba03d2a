pub mod config;
pub mod core;
pub mod display;
pub mod game;
pub mod logging;
pub mod logic;
pub mod player;
pub mod tournament;

#[cfg(test)]
mod logic_tests;

pub use crate::core::{Board, BoardError, Coordinate, PieceState};
pub use crate::game::{Game, MatchOptions, MatchResult};
pub use crate::player::{Player, Strategy};
