use super::Token;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("invalid coordinate ({row}, {col}), expected row and column in 0-2")]
    InvalidCoordinate { row: usize, col: usize },
    #[error("can't make turn on a finished game")]
    GameAlreadyOver,
    #[error("both players use the same token ({0})")]
    DuplicateToken(Token),
    #[error("failed to switch players in the pool")]
    PlayerPoolCorrupted,
}

impl GameError {
    pub fn invalid_coordinate(row: usize, col: usize) -> Self {
        Self::InvalidCoordinate { row, col }
    }
}
