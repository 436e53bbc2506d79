//! Utilities to generate a `Board` in a random state.
use rand::Rng;

use crate::board::{Board, Cell, Coord, Outcome};

/// Play the given moves with alternating marks, starting from `start` with `first`.
pub fn board_with_moves(start: Board, first: Cell, moves: &[Coord]) -> Board {
    let mut curr = start;
    let mut mark = first;
    for &mv in moves {
        assert!(!curr.is_done(), "Board already done, playing {} on\n{}", mv, curr);
        curr.play(mv, mark)
            .unwrap_or_else(|e| panic!("Move not available, playing {} on\n{}: {}", mv, curr, e));
        mark = mark.other();
    }
    curr
}

/// The number of random games tried before giving up on a target that may be unreachable.
pub const MAX_TRIES: u32 = 10_000;

/// Generate a `Board` by playing `n` random moves on `start`, retrying until no game ends early.
///
/// Panics after [MAX_TRIES] attempts, for example when every line is short enough that
/// the game always ends before `n` moves.
pub fn random_board_with_moves(start: &Board, first: Cell, n: u32, rng: &mut impl Rng) -> Board {
    assert!(
        n as usize <= start.count(Cell::Empty),
        "Cannot play {} moves on a board with {} empty cells",
        n,
        start.count(Cell::Empty)
    );

    'new_try: for _ in 0..MAX_TRIES {
        let mut board = start.clone();
        for _ in 0..n {
            let mark = board.next_mark(first);
            match board.random_empty_cell(rng) {
                Ok(mv) => board.set(mv, mark),
                Err(_) => continue 'new_try,
            }
        }
        return board;
    }

    panic!(
        "No game lasted {} moves in {} tries, starting from\n{}",
        n, MAX_TRIES, start
    )
}

/// Generate a random `Board` with a specific `Outcome`.
///
/// Panics after [MAX_TRIES] random games without reaching `outcome`.
pub fn random_board_with_outcome(start: &Board, first: Cell, outcome: Outcome, rng: &mut impl Rng) -> Board {
    for _ in 0..MAX_TRIES {
        let mut board = start.clone();
        let actual = loop {
            if let Some(actual) = board.outcome() {
                break actual;
            }
            let mark = board.next_mark(first);
            match board.random_empty_cell(rng) {
                Ok(mv) => board.set(mv, mark),
                Err(_) => unreachable!("a board without outcome has an empty cell"),
            }
        };
        if actual == outcome {
            return board;
        }
    }

    panic!(
        "No random game ended in {:?} in {} tries, starting from\n{}",
        outcome, MAX_TRIES, start
    )
}
