use std::fmt::Debug;

use crate::board::{Board, Cell, Coord};
use crate::error::BoardDone;

pub mod minimax;
pub mod simple;

pub trait Bot: Debug {
    /// Pick a move for `mark` to play. Returns `Err(BoardDone)` if the board is done.
    ///
    /// `self` is mutable to allow for random state, this method is not supposed to
    /// modify `self` in any other significant way.
    fn select_move(&mut self, board: &Board, mark: Cell) -> Result<Coord, BoardDone>;
}
