use std::fmt::{Display, Formatter};

use generic_array::typenum::{self, Unsigned};

use super::grid::{Grid, GridIndex};
use super::{GameError, GameResult, Tile, Token};

pub type BoardSize = typenum::U3;

pub const BOARD_SIZE: usize = BoardSize::USIZE;

/// Fixed 3x3 playing field, row 0 is the top row and column 0 is the left column.
#[derive(Clone, Debug, Default)]
pub struct Board {
    tiles: Grid<Tile, BoardSize, BoardSize>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &Grid<Tile, BoardSize, BoardSize> {
        &self.tiles
    }

    pub fn tile(&self, row: usize, col: usize) -> GameResult<Tile> {
        self.tiles
            .get(GridIndex::new(row, col))
            .copied()
            .ok_or(GameError::invalid_coordinate(row, col))
    }

    /// Puts `token` on an empty tile.
    /// Returns `Ok(false)` without touching the board if the tile is occupied.
    pub fn mark(&mut self, row: usize, col: usize, token: Token) -> GameResult<bool> {
        let tile = self
            .tiles
            .get_mut(GridIndex::new(row, col))
            .ok_or(GameError::invalid_coordinate(row, col))?;
        Ok(tile.add_token(token))
    }

    /// Snapshot of tile values, see [`Tile::value`].
    pub fn values(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        let mut values = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (idx, tile) in self.tiles.all_indexed() {
            values[idx.row()][idx.col()] = tile.value();
        }
        values
    }

    pub fn filled_count(&self) -> usize {
        self.tiles.iter().flatten().filter(|tile| tile.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.filled_count() == BOARD_SIZE * BOARD_SIZE
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.tiles, f)
    }
}
