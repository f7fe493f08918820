mod board;
mod controller;
mod error;
mod grid;
mod player_pool;
mod win;

use std::fmt::{Display, Formatter};
use std::ops::Deref;

pub use board::{Board, BoardSize, BOARD_SIZE};
pub use controller::Controller;
pub use error::GameError;
pub use grid::{Grid, GridIndex};
pub use win::is_winning_move;

pub type GameResult<T> = Result<T, GameError>;

pub const DEFAULT_PLAYER_ONE: &str = "Player One";
pub const DEFAULT_PLAYER_TWO: &str = "Player Two";

/// Mark a player puts on the board. The discriminant is the value stored in a [`Tile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    One = 1,
    Two = 2,
}

impl From<Token> for u8 {
    fn from(value: Token) -> Self {
        value as u8
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::One => f.write_str("X"),
            Token::Two => f.write_str("O"),
        }
    }
}

/// One square of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile(Option<Token>);

impl Tile {
    /// 0 for an empty tile, otherwise the numeric value of the owner's token.
    pub fn value(&self) -> u8 {
        self.0.map_or(0, u8::from)
    }

    pub fn token(&self) -> Option<Token> {
        self.0
    }

    /// Only the first token sticks, returns `false` if the tile was taken already.
    fn add_token(&mut self, token: Token) -> bool {
        if self.0.is_some() {
            return false;
        }
        self.0 = Some(token);
        true
    }
}

impl Deref for Tile {
    type Target = Option<Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Token> for Tile {
    fn from(value: Token) -> Self {
        Self(Some(value))
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(token) => write!(f, "[{}]", token),
            None => f.write_str("[ ]"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    token: Token,
}

impl Player {
    pub fn new(name: impl Into<String>, token: Token) -> Self {
        Self {
            name: name.into(),
            token,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> Token {
        self.token
    }
}

impl player_pool::Player for Player {
    type Id = Token;

    fn id(&self) -> Self::Id {
        self.token
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.token)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FinishedState {
    Won(Player),
    Draw,
}

impl Display for FinishedState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FinishedState::Won(player) => write!(f, "{} wins!", player.name()),
            FinishedState::Draw => f.write_str("It's a draw!"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Finished(FinishedState),
}

/// Pushed to every [`Controller::subscribe`] receiver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    GameEnded(FinishedState),
}
