//! Square grid of cells

use super::{Cell, Pos};
use crate::error::{GameError, Result};

/// Game board of side `size`.
///
/// Dimensions are fixed at construction; every cell always holds one of the
/// three [`Cell`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Cells in row-major order
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build a board from text rows, one string per row.
    ///
    /// `X`/`x` and `O`/`o` are players; `.`, `_` and `-` are empty. Whitespace
    /// is ignored so rows may be written as `"X . O"`.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let size = rows.len();
        let mut board = Board::new(size);
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != size {
                return Err(GameError::BoardParse {
                    row,
                    reason: format!("expected {size} cells, found {}", cells.len()),
                });
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let cell = match ch {
                    'X' | 'x' => Cell::X,
                    'O' | 'o' => Cell::O,
                    '.' | '_' | '-' => Cell::Empty,
                    other => {
                        return Err(GameError::BoardParse {
                            row,
                            reason: format!("unrecognised cell {other:?} in column {col}"),
                        })
                    }
                };
                board.set(Pos::new(row, col), cell);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check that a coordinate pair lies on the board
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        debug_assert!(self.contains(pos.row, pos.col));
        self.cells[pos.to_index(self.size)]
    }

    /// Bounds-checked lookup
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col)
            .then(|| self.cells[Pos::new(row, col).to_index(self.size)])
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        debug_assert!(self.contains(pos.row, pos.col));
        let idx = pos.to_index(self.size);
        self.cells[idx] = cell;
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.set(pos, Cell::Empty);
    }

    /// Reset every cell to empty
    pub fn clear_all(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Positions holding `cell`, in row-major order
    pub fn positions_of(&self, cell: Cell) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == cell)
            .map(|(idx, _)| Pos::from_index(idx, self.size))
            .collect()
    }

    pub fn empty_positions(&self) -> Vec<Pos> {
        self.positions_of(Cell::Empty)
    }

    /// Read-only view of the grid, one slice per row
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics; a zero-sized board has no rows anyway
        self.cells.chunks(self.size.max(1))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
