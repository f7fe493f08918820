use super::grid::GridIndex;
use super::{Board, Player, Tile, BOARD_SIZE};

/// Checks the lines passing through `(row, col)` after `player` has put a token there.
///
/// Only the row, the column and the diagonals the cell actually lies on are inspected.
/// Out-of-range cells never win.
pub fn is_winning_move(row: usize, col: usize, board: &Board, player: &Player) -> bool {
    let grid = board.get();
    if !grid.contains(GridIndex::new(row, col)) {
        return false;
    }
    let owned = |tile: &Tile| tile.token() == Some(player.token());

    let full_row = grid.right_iter((row, 0).into()).all(owned);
    let full_col = grid.bottom_iter((0, col).into()).all(owned);
    let full_main_diagonal = row == col && grid.bottom_right_iter((0, 0).into()).all(owned);
    let full_anti_diagonal = row + col == BOARD_SIZE - 1
        && grid.bottom_left_iter((0, BOARD_SIZE - 1).into()).all(owned);

    full_row || full_col || full_main_diagonal || full_anti_diagonal
}
