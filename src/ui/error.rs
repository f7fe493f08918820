use std::num::ParseIntError;

#[derive(thiserror::Error, Debug)]
pub enum UiError {
    #[error("expected a move as `row col`, found: {0:?}")]
    InvalidInput(String),
    #[error("invalid number: {0}")]
    InvalidNumber(#[from] ParseIntError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl UiError {
    pub fn invalid_input(line: &str) -> Self {
        Self::InvalidInput(line.to_string())
    }
}
