//! Win detection
//!
//! A player wins with four pieces in a straight line (row, column or either
//! diagonal) or in a solid 2x2 square. Every winning pattern on the fixed
//! board is enumerated once at compile time, so evaluation is a scan over a
//! small constant table.

use crate::board::Board;
use crate::types::{Player, Position, BOARD_HEIGHT, BOARD_WIDTH};

const W: u8 = BOARD_WIDTH;
const H: u8 = BOARD_HEIGHT;

/// Cells in a winning pattern
pub const PATTERN_LEN: usize = 4;

/// Number of distinct winning patterns on the board
pub const PATTERN_COUNT: usize = (H as usize) * (W as usize - 3) // rows
    + (W as usize) * (H as usize - 3) // columns
    + 2 * (W as usize - 3) * (H as usize - 3) // diagonals
    + (W as usize - 1) * (H as usize - 1); // squares

pub type Pattern = [Position; PATTERN_LEN];

static PATTERNS: [Pattern; PATTERN_COUNT] = build_patterns();

const fn p(x: u8, y: u8) -> Position {
    Position::new(x, y)
}

const fn build_patterns() -> [Pattern; PATTERN_COUNT] {
    let mut out = [[p(0, 0); PATTERN_LEN]; PATTERN_COUNT];
    let mut n = 0;

    let mut y = 0;
    while y < H {
        let mut x = 0;
        while x + 3 < W {
            out[n] = [p(x, y), p(x + 1, y), p(x + 2, y), p(x + 3, y)];
            n += 1;
            x += 1;
        }
        y += 1;
    }

    let mut x = 0;
    while x < W {
        let mut y = 0;
        while y + 3 < H {
            out[n] = [p(x, y), p(x, y + 1), p(x, y + 2), p(x, y + 3)];
            n += 1;
            y += 1;
        }
        x += 1;
    }

    let mut y = 0;
    while y + 3 < H {
        let mut x = 0;
        while x + 3 < W {
            out[n] = [p(x, y), p(x + 1, y + 1), p(x + 2, y + 2), p(x + 3, y + 3)];
            n += 1;
            out[n] = [p(x, y + 3), p(x + 1, y + 2), p(x + 2, y + 1), p(x + 3, y)];
            n += 1;
            x += 1;
        }
        y += 1;
    }

    let mut y = 0;
    while y + 1 < H {
        let mut x = 0;
        while x + 1 < W {
            out[n] = [p(x, y), p(x + 1, y), p(x, y + 1), p(x + 1, y + 1)];
            n += 1;
            x += 1;
        }
        y += 1;
    }

    out
}

/// Stateless win checker
#[derive(Debug, Clone, Copy, Default)]
pub struct WinDetector;

impl WinDetector {
    /// All winning patterns on the board
    pub fn patterns() -> &'static [Pattern] {
        &PATTERNS
    }

    /// Does `player` hold every cell of some winning pattern?
    pub fn evaluate(board: &Board, player: Player) -> bool {
        Self::winning_pattern(board, player).is_some()
    }

    /// The first completed pattern for `player`, if any
    pub fn winning_pattern(board: &Board, player: Player) -> Option<&'static Pattern> {
        let target = player.cell();
        PATTERNS
            .iter()
            .find(|pattern| pattern.iter().all(|&pos| board.at(pos) == target))
    }

    /// Whichever player has completed a pattern (A is checked first)
    pub fn winner(board: &Board) -> Option<Player> {
        [Player::A, Player::B]
            .into_iter()
            .find(|&player| Self::evaluate(board, player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellState;

    fn board_with(cells: &[(i8, i8)], state: CellState) -> Board {
        let mut board = Board::new();
        for &(x, y) in cells {
            board.set_cell(x, y, state);
        }
        board
    }

    #[test]
    fn test_pattern_count() {
        // 10 rows + 10 columns + 8 diagonals + 16 squares
        assert_eq!(PATTERN_COUNT, 44);
        assert_eq!(WinDetector::patterns().len(), 44);
    }

    #[test]
    fn test_patterns_are_in_bounds_and_distinct() {
        for pattern in WinDetector::patterns() {
            for pos in pattern {
                assert!(pos.x < BOARD_WIDTH && pos.y < BOARD_HEIGHT);
            }
            for i in 0..PATTERN_LEN {
                for j in i + 1..PATTERN_LEN {
                    assert_ne!(pattern[i], pattern[j]);
                }
            }
        }
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(WinDetector::winner(&Board::new()), None);
    }

    #[test]
    fn test_row_wins() {
        let board = board_with(&[(1, 4), (2, 4), (3, 4), (4, 4)], CellState::PlayerB);
        assert!(WinDetector::evaluate(&board, Player::B));
        assert!(!WinDetector::evaluate(&board, Player::A));
    }

    #[test]
    fn test_column_wins() {
        let board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3)], CellState::PlayerA);
        assert_eq!(WinDetector::winner(&board), Some(Player::A));
    }

    #[test]
    fn test_both_diagonals_win() {
        let rising = board_with(&[(1, 0), (2, 1), (3, 2), (4, 3)], CellState::PlayerA);
        assert!(WinDetector::evaluate(&rising, Player::A));

        let falling = board_with(&[(0, 4), (1, 3), (2, 2), (3, 1)], CellState::PlayerA);
        assert!(WinDetector::evaluate(&falling, Player::A));
    }

    #[test]
    fn test_square_wins() {
        let board = board_with(&[(3, 3), (4, 3), (3, 4), (4, 4)], CellState::PlayerB);
        assert!(WinDetector::evaluate(&board, Player::B));
    }

    #[test]
    fn test_bent_and_gapped_shapes_do_not_win() {
        let gapped = board_with(&[(0, 2), (1, 2), (2, 2), (4, 2)], CellState::PlayerA);
        assert!(!WinDetector::evaluate(&gapped, Player::A));

        let ell = board_with(&[(0, 0), (1, 0), (2, 0), (2, 1)], CellState::PlayerA);
        assert!(!WinDetector::evaluate(&ell, Player::A));

        let wide_square = board_with(&[(0, 0), (2, 0), (0, 2), (2, 2)], CellState::PlayerA);
        assert!(!WinDetector::evaluate(&wide_square, Player::A));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = board_with(&[(0, 0), (1, 0), (2, 0)], CellState::PlayerA);
        board.set_cell(3, 0, CellState::PlayerB);
        assert_eq!(WinDetector::winner(&board), None);
    }
}
