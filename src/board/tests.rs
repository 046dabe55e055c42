use super::*;
use crate::GameError;

#[test]
fn test_cell_opponent() {
    assert_eq!(Cell::X.opponent(), Cell::O);
    assert_eq!(Cell::O.opponent(), Cell::X);
    assert_eq!(Cell::Empty.opponent(), Cell::Empty);
}

#[test]
fn test_parse_starter() {
    assert_eq!(Cell::parse_starter("x"), Cell::X);
    assert_eq!(Cell::parse_starter("O"), Cell::O);
    assert_eq!(Cell::parse_starter("  oh"), Cell::O);
    // Unknown input falls back to X
    assert_eq!(Cell::parse_starter("z"), Cell::X);
    assert_eq!(Cell::parse_starter(""), Cell::X);
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 2);
    assert_eq!(pos.offset(1, -1, 3), Some(Pos::new(1, 1)));
    assert_eq!(pos.offset(-1, 0, 3), None);
    assert_eq!(pos.offset(0, 1, 3), None);
    assert_eq!(pos.offset(2, 0, 3), Some(Pos::new(2, 2)));
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.to_index(5), 13);
    assert_eq!(Pos::from_index(13, 5), pos);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(4);
    assert_eq!(board.size(), 4);
    assert_eq!(board.empty_count(), 16);
    assert!(!board.is_full());
    assert!(board.rows().all(|row| row.iter().all(|c| c.is_empty())));
}

#[test]
fn test_set_and_clear() {
    let mut board = Board::new(3);
    board.set(Pos::new(1, 2), Cell::O);
    assert_eq!(board.get(Pos::new(1, 2)), Cell::O);
    assert!(!board.is_empty(Pos::new(1, 2)));

    board.clear(Pos::new(1, 2));
    assert!(board.is_empty(Pos::new(1, 2)));
}

#[test]
fn test_cell_bounds_checked() {
    let board = Board::new(3);
    assert_eq!(board.cell(2, 2), Some(Cell::Empty));
    assert_eq!(board.cell(3, 0), None);
    assert_eq!(board.cell(0, 3), None);
}

#[test]
fn test_from_rows_and_display() {
    let board = Board::from_rows(&["X X .", "O O .", ". . ."]).unwrap();
    assert_eq!(board.get(Pos::new(0, 1)), Cell::X);
    assert_eq!(board.get(Pos::new(1, 0)), Cell::O);
    assert_eq!(board.to_string(), "X X .\nO O .\n. . .");
}

#[test]
fn test_from_rows_rejects_ragged_input() {
    assert_eq!(
        Board::from_rows(&["XX", "O"]),
        Err(GameError::BoardParse {
            row: 1,
            reason: "expected 2 cells, found 1".to_string(),
        })
    );
}

#[test]
fn test_from_rows_rejects_unknown_character() {
    let err = Board::from_rows(&["X?", ".."]).unwrap_err();
    assert!(matches!(err, GameError::BoardParse { row: 0, .. }));
    assert_eq!(err.to_string(), "cannot parse board row 0: unrecognised cell '?' in column 1");
}

#[test]
fn test_positions_in_row_major_order() {
    let board = Board::from_rows(&["O..", "..O", "O.."]).unwrap();
    assert_eq!(
        board.positions_of(Cell::O),
        vec![Pos::new(0, 0), Pos::new(1, 2), Pos::new(2, 0)]
    );
    assert_eq!(board.empty_positions().len(), 6);
}

#[test]
fn test_full_board() {
    let board = Board::from_rows(&["XOX", "XOO", "OXX"]).unwrap();
    assert!(board.is_full());
    assert_eq!(board.empty_count(), 0);
}
