pub mod eval;
pub mod greedy;
pub mod minimax;
pub mod random;

pub use greedy::GreedyPlayer;
pub use minimax::{MinimaxPlayer, SearchResult};
pub use random::RandomPlayer;

use crate::core::PieceState;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// 設定ファイルから選べる打ち手の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    Random,
    Greedy,
    Minimax { depth: usize },
}

impl Strategy {
    pub fn build(self, name: &str, color: PieceState) -> Arc<dyn Player> {
        match self {
            Strategy::Random => Arc::new(RandomPlayer::new(name, color)),
            Strategy::Greedy => Arc::new(GreedyPlayer::new(name, color)),
            Strategy::Minimax { depth } => Arc::new(MinimaxPlayer::new(name, color, depth)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::Random => write!(f, "random"),
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::Minimax { depth } => write!(f, "minimax(depth {})", depth),
        }
    }
}
