pub mod ai;
pub mod controller;

pub use ai::{GreedyPlayer, MinimaxPlayer, RandomPlayer, SearchResult, Strategy};
pub use controller::Player;
