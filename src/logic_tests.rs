#[cfg(test)]
mod tests {
    use crate::core::{Board, BoardError, Coordinate, PieceState};
    use crate::logic::{apply_move, count_valid_moves, is_game_over, valid_moves, winner};
    use proptest::prelude::*;

    #[test]
    fn test_standard_opening_moves() {
        let board = Board::standard();
        let moves = valid_moves(&board, PieceState::Black);
        assert_eq!(
            moves,
            vec![
                Coordinate::new(2, 3),
                Coordinate::new(3, 2),
                Coordinate::new(4, 5),
                Coordinate::new(5, 4),
            ]
        );
        for mv in moves {
            let mut next = board.clone();
            assert_eq!(apply_move(&mut next, PieceState::Black, mv), Ok(1));
            assert_eq!(next.count_pieces(PieceState::Black), 4);
            assert_eq!(next.count_pieces(PieceState::White), 1);
        }

        let white_moves = valid_moves(&board, PieceState::White);
        assert_eq!(white_moves.len(), 4);
        assert_eq!(count_valid_moves(&board, PieceState::White), 4);
    }

    #[test]
    fn test_full_board_draw() {
        // 上半分が黒、下半分が白
        let mut rows = vec!["B B B B B B B B"; 4];
        rows.extend(vec!["W W W W W W W W"; 4]);
        let board = Board::from_rows(&rows).unwrap();

        assert_eq!(board.count_pieces(PieceState::Black), 32);
        assert_eq!(board.count_pieces(PieceState::White), 32);
        assert_eq!(count_valid_moves(&board, PieceState::Black), 0);
        assert_eq!(count_valid_moves(&board, PieceState::White), 0);
        assert!(is_game_over(&board));
        assert_eq!(winner(&board), PieceState::Empty);
        // 再問い合わせでも変わらない
        assert_eq!(winner(&board), PieceState::Empty);
    }

    #[test]
    fn test_full_board_majority_wins() {
        let mut rows = vec!["W W W W W W W W"; 5];
        rows.extend(vec!["B B B B B B B B"; 3]);
        let board = Board::from_rows(&rows).unwrap();
        assert!(is_game_over(&board));
        assert_eq!(winner(&board), PieceState::White);
    }

    #[test]
    fn test_boundary_access() {
        let mut board = Board::standard();
        let w = board.width() as i32;
        for coord in [Coordinate::new(w, 0), Coordinate::new(0, w), Coordinate::new(-1, -1)] {
            assert_eq!(board.get(coord), Err(BoardError::OutOfBounds(coord)));
            assert_eq!(
                board.set(PieceState::White, coord),
                Err(BoardError::OutOfBounds(coord))
            );
        }
    }

    /// 合法手をランダムに選びながら進めた局面を作る
    fn random_playout(choices: &[usize]) -> (Board, PieceState) {
        let mut board = Board::standard();
        let mut to_move = PieceState::Black;
        for &choice in choices {
            if is_game_over(&board) {
                break;
            }
            let moves = valid_moves(&board, to_move);
            if !moves.is_empty() {
                let mv = moves[choice % moves.len()];
                apply_move(&mut board, to_move, mv).unwrap();
            }
            to_move = to_move.opponent();
        }
        (board, to_move)
    }

    proptest! {
        #[test]
        fn prop_piece_counts_cover_the_board(choices in prop::collection::vec(0usize..64, 0..70)) {
            let (board, _) = random_playout(&choices);
            let total = board.count_pieces(PieceState::Black)
                + board.count_pieces(PieceState::White)
                + board.count_pieces(PieceState::Empty);
            prop_assert_eq!(total, board.size());
        }

        #[test]
        fn prop_valid_move_count_matches_list(choices in prop::collection::vec(0usize..64, 0..70)) {
            let (board, _) = random_playout(&choices);
            for color in [PieceState::Black, PieceState::White] {
                let moves = valid_moves(&board, color);
                prop_assert_eq!(moves.len(), count_valid_moves(&board, color));
                let mut sorted = moves.clone();
                sorted.dedup();
                prop_assert_eq!(sorted.len(), moves.len());
            }
        }

        #[test]
        fn prop_legal_moves_always_flip(choices in prop::collection::vec(0usize..64, 0..70)) {
            let (board, to_move) = random_playout(&choices);
            for mv in valid_moves(&board, to_move) {
                let mut next = board.clone();
                let flipped = apply_move(&mut next, to_move, mv).unwrap();
                prop_assert!(flipped >= 1);
                prop_assert_eq!(
                    next.count_pieces(to_move),
                    board.count_pieces(to_move) + flipped + 1
                );
                prop_assert_eq!(
                    next.count_pieces(to_move.opponent()),
                    board.count_pieces(to_move.opponent()) - flipped
                );
            }
        }

        #[test]
        fn prop_illegal_moves_do_not_mutate(
            choices in prop::collection::vec(0usize..64, 0..70),
            row in -1i32..9,
            col in -1i32..9,
        ) {
            let (board, to_move) = random_playout(&choices);
            let coord = Coordinate::new(row, col);
            prop_assume!(!board.is_legal_move(to_move, coord));
            let mut next = board.clone();
            let err = apply_move(&mut next, to_move, coord).unwrap_err();
            prop_assert!(err.is_illegal_move() || err == BoardError::OutOfBounds(coord));
            prop_assert_eq!(next, board);
        }

        #[test]
        fn prop_winner_is_stable_once_over(choices in prop::collection::vec(0usize..64, 60..120)) {
            let (board, _) = random_playout(&choices);
            if is_game_over(&board) {
                let first = winner(&board);
                prop_assert_eq!(first, winner(&board));
                prop_assert!(
                    board.is_full()
                        || (count_valid_moves(&board, PieceState::Black) == 0
                            && count_valid_moves(&board, PieceState::White) == 0)
                );
            } else {
                prop_assert_eq!(winner(&board), PieceState::Empty);
            }
        }
    }
}
