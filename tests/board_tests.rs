//! Board tests

use teeko::core::Board;
use teeko::types::{CellState, Player, Position, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_in_bounds(x, y), "Cell ({}, {}) should be valid", x, y);
            assert_eq!(board.cell_at(x, y), CellState::Empty);
        }
    }
}

#[test]
fn test_board_out_of_bounds_reads_empty() {
    let mut board = Board::new();
    assert!(!board.is_in_bounds(-1, 0));
    assert!(!board.is_in_bounds(0, BOARD_HEIGHT as i8));
    assert_eq!(board.cell_at(-1, 0), CellState::Empty);
    assert_eq!(board.cell_at(BOARD_WIDTH as i8, 0), CellState::Empty);

    assert!(!board.set_cell(5, 0, CellState::PlayerA));
    assert_eq!(board.count(Player::A), 0);
}

#[test]
fn test_board_set_and_count() {
    let mut board = Board::new();
    assert!(board.set(Position::new(1, 3), CellState::PlayerA));
    assert!(board.set(Position::new(4, 4), CellState::PlayerB));
    assert!(board.set(Position::new(0, 0), CellState::PlayerA));

    assert_eq!(board.at(Position::new(1, 3)), CellState::PlayerA);
    assert_eq!(board.count(Player::A), 2);
    assert_eq!(board.count(Player::B), 1);
    assert!(!board.is_empty_at(Position::new(4, 4)));

    board.clear();
    assert!(board.cells().iter().all(|c| c.is_empty()));
}

#[test]
fn test_board_iter_is_row_major_from_bottom() {
    let board = Board::new();
    let positions: Vec<Position> = board.iter().map(|(p, _)| p).take(6).collect();
    assert_eq!(positions[0], Position::new(0, 0));
    assert_eq!(positions[4], Position::new(4, 0));
    assert_eq!(positions[5], Position::new(0, 1));
}

#[test]
fn test_board_grid_copy_is_indexed_y_then_x() {
    let mut board = Board::new();
    board.set(Position::new(3, 1), CellState::PlayerB);
    let mut grid = [[CellState::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_grid(&mut grid);
    assert_eq!(grid[1][3], CellState::PlayerB);
    assert_eq!(grid[3][1], CellState::Empty);
}
