//! Board representation for N-in-a-row

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Smallest board side accepted by configuration
pub const MIN_BOARD_SIZE: usize = 3;
/// Largest board side accepted by configuration
pub const MAX_BOARD_SIZE: usize = 14;

/// Cell states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Get the opposing player value
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single character used by text rendering
    pub fn symbol(self) -> char {
        match self {
            Cell::X => 'X',
            Cell::O => 'O',
            Cell::Empty => '.',
        }
    }

    /// Parse a starting player from user input.
    ///
    /// Only the first character matters and case is ignored. Anything that is
    /// not `x` or `o` falls back to X.
    pub fn parse_starter(input: &str) -> Cell {
        match input.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('o') => Cell::O,
            _ => Cell::X,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed offset, returning `None` when the result leaves a
    /// board of side `size`.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize, size: usize) -> Option<Pos> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Pos { row, col })
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
