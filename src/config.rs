//! Game configuration and its validation

use crate::board::{Cell, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{GameError, Result};

/// Immutable per-game settings: board side, connections to win and the
/// starting player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    size: usize,
    connections: usize,
    starter: Cell,
}

impl GameConfig {
    /// Validate and build a configuration.
    ///
    /// An empty `starter` is treated as X, matching [`Cell::parse_starter`].
    pub fn new(size: usize, connections: usize, starter: Cell) -> Result<Self> {
        validate(size, connections)?;
        let starter = if starter.is_empty() { Cell::X } else { starter };
        Ok(Self {
            size,
            connections,
            starter,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn connections(&self) -> usize {
        self.connections
    }

    #[inline]
    pub fn starter(&self) -> Cell {
        self.starter
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 3,
            connections: 3,
            starter: Cell::X,
        }
    }
}

/// Smallest legal connections-to-win for a board of side `size`
#[inline]
pub fn min_connections(size: usize) -> usize {
    3.min(size)
}

/// Check board size and win length without building anything.
///
/// Size must satisfy `2 < size < 15`; connections must satisfy
/// `min(3, size) <= connections <= size`.
pub fn validate(size: usize, connections: usize) -> Result<()> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(GameError::InvalidBoardSize { size });
    }
    let min = min_connections(size);
    if connections < min || connections > size {
        return Err(GameError::InvalidConnections {
            connections,
            min,
            max: size,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(3, 3 ; "smallest board")]
    #[test_case(14, 14 ; "largest board full row")]
    #[test_case(14, 3 ; "largest board short run")]
    #[test_case(7, 5 ; "mid board")]
    fn test_valid_configs(size: usize, connections: usize) {
        assert!(validate(size, connections).is_ok());
    }

    #[test_case(2 ; "too small")]
    #[test_case(15 ; "too large")]
    #[test_case(0 ; "zero")]
    fn test_invalid_size(size: usize) {
        assert_eq!(
            validate(size, 3),
            Err(GameError::InvalidBoardSize { size })
        );
    }

    #[test]
    fn test_connections_above_size() {
        assert_eq!(
            validate(4, 5),
            Err(GameError::InvalidConnections {
                connections: 5,
                min: 3,
                max: 4
            })
        );
    }

    #[test]
    fn test_connections_below_minimum() {
        assert!(matches!(
            validate(5, 2),
            Err(GameError::InvalidConnections { min: 3, .. })
        ));
    }

    #[test]
    fn test_new_keeps_values() {
        let config = GameConfig::new(5, 4, Cell::O).unwrap();
        assert_eq!(config.size(), 5);
        assert_eq!(config.connections(), 4);
        assert_eq!(config.starter(), Cell::O);
    }

    #[test]
    fn test_empty_starter_defaults_to_x() {
        let config = GameConfig::new(3, 3, Cell::Empty).unwrap();
        assert_eq!(config.starter(), Cell::X);
    }

    #[test]
    fn test_default_is_classic() {
        let config = GameConfig::default();
        assert_eq!((config.size(), config.connections()), (3, 3));
        assert_eq!(config.starter(), Cell::X);
    }
}
