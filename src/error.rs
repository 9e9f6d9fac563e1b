use std::path::PathBuf;

use crate::game::Player;

/// Errors that can occur when applying a move to a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of range")]
    InvalidColumn { column: usize },

    #[error("the game is over")]
    GameOver,

    #[error("it is {}'s turn", .0.name())]
    OutOfTurn(Player),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::ColumnFull { column: 4 }.to_string(),
            "column 4 is full"
        );
        assert_eq!(
            MoveError::InvalidColumn { column: 9 }.to_string(),
            "column 9 is out of range"
        );
        assert_eq!(MoveError::GameOver.to_string(), "the game is over");
        assert_eq!(
            MoveError::OutOfTurn(Player::Red).to_string(),
            "it is Red's turn"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search.depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.depth must be >= 1"
        );
    }
}
