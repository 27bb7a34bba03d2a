use super::eval::{evaluate, WIN_SCORE};
use crate::core::{Board, Coordinate, PieceState};
use crate::player::Player;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

const INF: i32 = WIN_SCORE * 2;

/// 1回の探索結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Option<Coordinate>,
    /// この探索で評価した局面数
    pub nodes: usize,
}

/// 固定深さの αβ 探索。ルートの各手は rayon で並列に読む
pub struct MinimaxPlayer {
    pub name: String,
    pub color: PieceState,
    pub depth: usize,
}

impl MinimaxPlayer {
    pub fn new(name: &str, color: PieceState, depth: usize) -> Self {
        Self {
            name: name.to_string(),
            color,
            depth: depth.max(1),
        }
    }

    /// 局面数のカウンタは探索ごとに持つので、同じ打ち手を複数の対局で共有してよい
    pub fn search(&self, board: &Board) -> SearchResult {
        let nodes = AtomicUsize::new(0);
        let moves = board.valid_moves(self.color);
        if moves.len() <= 1 {
            return SearchResult {
                best: moves.first().copied(),
                nodes: 0,
            };
        }

        let scored: Vec<(Coordinate, i32)> = moves
            .par_iter()
            .filter_map(|&mv| {
                let mut next = board.clone();
                next.apply_move(self.color, mv).ok()?;
                let score = -self.negamax(
                    &nodes,
                    &next,
                    self.depth - 1,
                    -INF,
                    INF,
                    self.color.opponent(),
                );
                Some((mv, score))
            })
            .collect();

        // 同点なら row-major で先の手 (par_iter の collect は順序を保つ)
        let best = scored
            .into_iter()
            .fold(None, |best: Option<(Coordinate, i32)>, (mv, score)| match best {
                Some((_, s)) if s >= score => best,
                _ => Some((mv, score)),
            })
            .map(|(mv, _)| mv);

        SearchResult {
            best,
            nodes: nodes.into_inner(),
        }
    }

    // --- Negamax + Alpha-Beta ---
    fn negamax(
        &self,
        nodes: &AtomicUsize,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        beta: i32,
        to_move: PieceState,
    ) -> i32 {
        nodes.fetch_add(1, Ordering::Relaxed);

        if depth == 0 || board.is_game_over() {
            return evaluate(board, to_move);
        }

        let moves = board.valid_moves(to_move);
        if moves.is_empty() {
            // パス
            return -self.negamax(nodes, board, depth - 1, -beta, -alpha, to_move.opponent());
        }

        let mut best = -INF;
        for mv in moves {
            let mut next = board.clone();
            if next.apply_move(to_move, mv).is_err() {
                continue;
            }
            let score = -self.negamax(nodes, &next, depth - 1, -beta, -alpha, to_move.opponent());
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}

impl Player for MinimaxPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> PieceState {
        self.color
    }

    fn make_move(&self, board: &Board) -> Option<Coordinate> {
        self.search(board).best
    }
}
