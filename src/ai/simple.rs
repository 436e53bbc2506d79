//! A simple baseline bot: `RandomBot`.
use std::fmt::{Debug, Formatter};

use rand::Rng;

use crate::ai::Bot;
use crate::board::{Board, Cell, Coord};
use crate::error::BoardDone;

/// Bot that chooses moves randomly uniformly among the empty cells.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, board: &Board, _: Cell) -> Result<Coord, BoardDone> {
        board.random_empty_cell(&mut self.rng)
    }
}
