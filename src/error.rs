//! Typed errors surfaced by the game and its configuration

use crate::board::Side;
use crate::WIDTH;

/// A column that cannot be played right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid move, column {column} out of range. Columns must be between 0 and {}", WIDTH - 1)]
    OutOfRange { column: usize },

    #[error("Invalid move, column {column} full")]
    ColumnFull { column: usize },

    #[error("Invalid move, the game is already over")]
    GameOver,

    #[error("Invalid move, it is not the {0:?}'s turn")]
    NotYourTurn(Side),
}

/// Errors raised while driving the computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no legal moves remain for the computer")]
    NoLegalMoves,
}

/// Errors raised when validating a search configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_error_display() {
        assert_eq!(
            MoveError::OutOfRange { column: 9 }.to_string(),
            "Invalid move, column 9 out of range. Columns must be between 0 and 6"
        );
        assert_eq!(
            MoveError::ColumnFull { column: 2 }.to_string(),
            "Invalid move, column 2 full"
        );
        assert_eq!(
            MoveError::NotYourTurn(Side::Player).to_string(),
            "Invalid move, it is not the Player's turn"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Validation("depth must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: depth must be > 0");
    }
}
