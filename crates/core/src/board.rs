//! Board module - the 5x5 Teeko grid
//!
//! Cells are stored in a flat row-major array (`y * WIDTH + x`).
//! Coordinates are signed so callers can probe outside the grid: any
//! out-of-bounds read is defined as `Empty`.

use crate::types::{CellState, Player, Position, BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [CellState; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [CellState::Empty; BOARD_CELLS],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell content at `(x, y)`, `Empty` when out of bounds
    pub fn cell_at(&self, x: i8, y: i8) -> CellState {
        Self::index(x, y)
            .map(|idx| self.cells[idx])
            .unwrap_or(CellState::Empty)
    }

    /// Cell content at an in-bounds position
    pub fn at(&self, pos: Position) -> CellState {
        self.cell_at(pos.x as i8, pos.y as i8)
    }

    /// Overwrite the cell at `(x, y)`
    ///
    /// Returns false (and writes nothing) if out of bounds.
    pub fn set_cell(&mut self, x: i8, y: i8, state: CellState) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = state;
                true
            }
            None => false,
        }
    }

    pub fn set(&mut self, pos: Position, state: CellState) -> bool {
        self.set_cell(pos.x as i8, pos.y as i8, state)
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.at(pos).is_empty()
    }

    pub fn is_in_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_some()
    }

    /// Number of pieces `player` has on the board
    pub fn count(&self, player: Player) -> u8 {
        let target = player.cell();
        self.cells.iter().filter(|&&cell| cell == target).count() as u8
    }

    /// Iterate every cell with its position, row by row from `y = 0`
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells.iter().enumerate().map(|(idx, &cell)| {
            let x = (idx % BOARD_WIDTH as usize) as u8;
            let y = (idx / BOARD_WIDTH as usize) as u8;
            (Position::new(x, y), cell)
        })
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Copy the board into a `[y][x]` grid
    pub fn write_grid(&self, out: &mut [[CellState; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (pos, cell) in self.iter() {
            out[pos.y as usize][pos.x as usize] = cell;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
