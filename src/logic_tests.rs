#[cfg(test)]
mod tests {
    use crate::core::{Board, GameOutcome, Mark, Position};
    use crate::logic::{legal_moves, outcome, winner};

    fn board_from(rows: [[char; 3]; 3]) -> Board {
        let mut board = Board::new();
        for (row, chars) in rows.iter().enumerate() {
            for (col, ch) in chars.iter().enumerate() {
                board.cells[row][col] = match ch {
                    'X' => Some(Mark::X),
                    'O' => Some(Mark::O),
                    _ => None,
                };
            }
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!board.is_full());
        assert_eq!(outcome(&board), GameOutcome::InProgress);
    }

    #[test]
    fn detects_each_row() {
        for row in 0..3 {
            let mut board = Board::new();
            for col in 0..3 {
                board.place(Position::new(row, col), Mark::X);
            }
            assert_eq!(winner(&board), Some(Mark::X), "row {}", row);
        }
    }

    #[test]
    fn detects_each_column() {
        for col in 0..3 {
            let mut board = Board::new();
            for row in 0..3 {
                board.place(Position::new(row, col), Mark::O);
            }
            assert_eq!(winner(&board), Some(Mark::O), "column {}", col);
        }
    }

    #[test]
    fn detects_both_diagonals() {
        let board = board_from([['X', ' ', ' '], [' ', 'X', ' '], [' ', ' ', 'X']]);
        assert_eq!(winner(&board), Some(Mark::X));

        let board = board_from([[' ', ' ', 'O'], [' ', 'O', ' '], ['O', ' ', ' ']]);
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn two_in_a_row_is_not_a_win() {
        let board = board_from([['X', 'X', ' '], ['O', 'O', ' '], [' ', ' ', ' ']]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn winner_and_is_full_are_independent() {
        // Won but not full.
        let board = board_from([['X', 'X', 'X'], ['O', 'O', ' '], [' ', ' ', ' ']]);
        assert_eq!(winner(&board), Some(Mark::X));
        assert!(!board.is_full());
        assert_eq!(outcome(&board), GameOutcome::Won(Mark::X));

        // Full but not won.
        let board = board_from([['X', 'O', 'X'], ['X', 'O', 'O'], ['O', 'X', 'X']]);
        assert_eq!(winner(&board), None);
        assert!(board.is_full());
        assert_eq!(outcome(&board), GameOutcome::Draw);
    }

    #[test]
    fn legal_moves_come_back_in_row_major_order() {
        let board = board_from([['X', ' ', ' '], [' ', 'O', ' '], [' ', ' ', ' ']]);
        let moves = legal_moves(&board);
        let expected = vec![
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 0),
            Position::new(1, 2),
            Position::new(2, 0),
            Position::new(2, 1),
            Position::new(2, 2),
        ];
        assert_eq!(moves, expected);
    }

    #[test]
    fn legal_moves_on_full_board_is_empty() {
        let board = board_from([['X', 'O', 'X'], ['X', 'O', 'O'], ['O', 'X', 'X']]);
        assert!(legal_moves(&board).is_empty());
    }

    #[test]
    fn place_and_clear_round_trip() {
        let mut board = Board::new();
        let pos = Position::new(1, 2);
        board.place(pos, Mark::O);
        assert_eq!(board.get(pos), Some(Mark::O));
        board.clear(pos);
        assert_eq!(board.get(pos), None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn queries_do_not_change_their_answers() {
        let board = board_from([['X', 'O', ' '], [' ', 'X', ' '], ['O', ' ', ' ']]);
        let first = (winner(&board), board.is_full(), outcome(&board));
        let second = (winner(&board), board.is_full(), outcome(&board));
        assert_eq!(first, second);
    }
}
