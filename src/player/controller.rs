use crate::core::{Board, Coordinate, PieceState};

/// 打ち手の trait
///
/// 手番が来るたびに盤面のコピーを受け取り、打つ座標を返す。
/// 盤面は読み取り専用で、探索で書き換える場合は `clone()` した盤を使うこと。
/// 打てる手がないときは `None` (パス) を返す。
pub trait Player: Send + Sync {
    fn name(&self) -> &str;
    fn color(&self) -> PieceState;
    fn make_move(&self, board: &Board) -> Option<Coordinate>;
}
