//! Game results seen from one side, and running win/draw/loss tallies for bot matches.
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use num_traits::{One, Zero};

use crate::board::{Cell, Outcome};

/// How a finished game went for one mark, see [Outcome::pov].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OutcomeWDL {
    Win,
    Draw,
    Loss,
}

/// Counts (or weights) of wins, draws and losses.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WDL<V> {
    pub win: V,
    pub draw: V,
    pub loss: V,
}

impl Outcome {
    /// The result for `mark`.
    pub fn pov(self, mark: Cell) -> OutcomeWDL {
        match self {
            Outcome::WonBy(winner) if winner == mark => OutcomeWDL::Win,
            Outcome::WonBy(_) => OutcomeWDL::Loss,
            Outcome::Draw => OutcomeWDL::Draw,
        }
    }
}

impl OutcomeWDL {
    /// A tally holding this single result.
    pub fn to_wdl<V: One + Zero>(self) -> WDL<V> {
        let pick = |hit: bool| if hit { V::one() } else { V::zero() };
        WDL::new(
            pick(self == OutcomeWDL::Win),
            pick(self == OutcomeWDL::Draw),
            pick(self == OutcomeWDL::Loss),
        )
    }
}

impl<V> WDL<V> {
    pub fn new(win: V, draw: V, loss: V) -> Self {
        WDL { win, draw, loss }
    }
}

impl<V: Add<Output = V>> WDL<V> {
    /// The total number of games.
    pub fn sum(self) -> V {
        self.win + self.draw + self.loss
    }
}

impl<V: Add<Output = V>> Add for WDL<V> {
    type Output = WDL<V>;

    fn add(self, rhs: WDL<V>) -> WDL<V> {
        WDL::new(self.win + rhs.win, self.draw + rhs.draw, self.loss + rhs.loss)
    }
}

impl<V: Copy + Add<Output = V>> AddAssign for WDL<V> {
    fn add_assign(&mut self, rhs: WDL<V>) {
        *self = *self + rhs;
    }
}

impl<V: Default + Add<Output = V>> Sum for WDL<V> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(WDL::default(), Add::add)
    }
}
