//! Candidate move ordering for the search.
//!
//! The search keeps the first of several equally good moves, so the order in which
//! candidates are visited decides which one is played. Shuffling gives a uniformly random
//! choice among ties; the deterministic orders make search results reproducible.
use std::fmt::{Debug, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Coord;

pub trait MoveOrder {
    /// Reorder `moves` in place.
    fn permute(&mut self, moves: &mut [Coord]);
}

impl<F: FnMut(&mut [Coord])> MoveOrder for F {
    fn permute(&mut self, moves: &mut [Coord]) {
        self(moves)
    }
}

/// Uniform random permutation (Fisher-Yates), every ordering is equally likely.
pub struct ShuffleOrder<R: Rng> {
    rng: R,
}

impl<R: Rng> ShuffleOrder<R> {
    pub fn new(rng: R) -> Self {
        ShuffleOrder { rng }
    }
}

impl<R: Rng> Debug for ShuffleOrder<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ShuffleOrder")
    }
}

impl<R: Rng> MoveOrder for ShuffleOrder<R> {
    fn permute(&mut self, moves: &mut [Coord]) {
        moves.shuffle(&mut self.rng);
    }
}

/// Keep the row-major order.
#[derive(Debug, Copy, Clone, Default)]
pub struct IdentityOrder;

impl MoveOrder for IdentityOrder {
    fn permute(&mut self, _: &mut [Coord]) {}
}
