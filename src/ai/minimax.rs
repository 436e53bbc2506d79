//! Terminal detection, utility and depth-bounded minimax with alpha-beta pruning.
//!
//! The score is always from the POV of [Cell::Opponent], the automated side:
//! it maximizes while [Cell::Player] minimizes.
use std::fmt::{Debug, Formatter};

use internal_iterator::InternalIterator;
use tracing::{debug, trace};

use crate::ai::Bot;
use crate::board::{Board, Cell, Coord, Outcome};
use crate::error::BoardDone;
use crate::order::MoveOrder;

/// Lower bound below any real utility, the initial alpha.
pub const SCORE_MIN: i32 = -2;
/// Upper bound above any real utility, the initial beta.
pub const SCORE_MAX: i32 = 2;

/// The result of [terminal_state].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TerminalState {
    /// The mark of the first complete line, `None` for a draw or an unfinished game.
    pub winner: Option<Cell>,
    pub is_terminal: bool,
}

impl TerminalState {
    pub fn outcome(self) -> Option<Outcome> {
        match (self.winner, self.is_terminal) {
            (Some(winner), _) => Some(Outcome::WonBy(winner)),
            (None, true) => Some(Outcome::Draw),
            (None, false) => None,
        }
    }
}

/// Classify `board`.
///
/// Lines are scanned in the order rows, columns, descending diagonals, ascending diagonals
/// and the first complete line decides the winner. Without a complete line the board is
/// terminal (a draw) exactly when it is full.
pub fn terminal_state(board: &Board) -> TerminalState {
    match board.lines().find_map(|line| line.winner()) {
        Some(winner) => TerminalState {
            winner: Some(winner),
            is_terminal: true,
        },
        None => TerminalState {
            winner: None,
            is_terminal: board.is_full(),
        },
    }
}

/// `1` if `pov` won, `-1` if the other side won, `0` for draws and unfinished boards.
pub fn utility(board: &Board, pov: Cell) -> i32 {
    match terminal_state(board).winner {
        Some(winner) => winner.sign(pov),
        None => 0,
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SearchResult {
    /// The best move to play, `None` if the board is done or the depth was 0.
    pub best_move: Option<Coord>,
    /// The value of the board from the POV of [Cell::Opponent].
    pub score: i32,
    /// The number of boards visited, including the root.
    pub nodes: u64,
}

/// Minimax with alpha-beta pruning.
///
/// `maximizing` is true when [Cell::Opponent] is to move. Candidates are visited in the order
/// produced by `order`, and only a strictly better score replaces the current best move,
/// so among equally good moves the first one visited is returned.
pub fn search(
    board: &Board,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    order: &mut impl MoveOrder,
) -> SearchResult {
    let mut nodes = 0;
    let (best_move, score) = search_recurse(board, depth, alpha, beta, maximizing, order, &mut nodes);
    SearchResult {
        best_move,
        score,
        nodes,
    }
}

fn search_recurse(
    board: &Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    order: &mut impl MoveOrder,
    nodes: &mut u64,
) -> (Option<Coord>, i32) {
    *nodes += 1;

    if depth == 0 || terminal_state(board).is_terminal {
        return (None, utility(board, Cell::Opponent));
    }

    let mark = if maximizing { Cell::Opponent } else { Cell::Player };
    let mut best_move = None;
    let mut best_score = if maximizing { SCORE_MIN } else { SCORE_MAX };

    for mv in board.empty_cells(order) {
        let mut child = board.clone();
        child.set(mv, mark);

        let (_, score) = search_recurse(&child, depth - 1, alpha, beta, !maximizing, order, nodes);

        if (maximizing && score > best_score) || (!maximizing && score < best_score) {
            best_move = Some(mv);
            best_score = score;
        }

        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }

        if beta <= alpha {
            break;
        }
    }

    (best_move, best_score)
}

/// Plain minimax without pruning, visiting every child in row-major order.
/// Always returns the same score as [search] started with the full `SCORE_MIN..SCORE_MAX` window.
pub fn search_exhaustive(board: &Board, depth: u32, maximizing: bool) -> SearchResult {
    let mut nodes = 0;
    let (best_move, score) = exhaustive_recurse(board, depth, maximizing, &mut nodes);
    SearchResult {
        best_move,
        score,
        nodes,
    }
}

fn exhaustive_recurse(board: &Board, depth: u32, maximizing: bool, nodes: &mut u64) -> (Option<Coord>, i32) {
    *nodes += 1;

    if depth == 0 || terminal_state(board).is_terminal {
        return (None, utility(board, Cell::Opponent));
    }

    let mark = if maximizing { Cell::Opponent } else { Cell::Player };
    let mut best_move = None;
    let mut best_score = if maximizing { SCORE_MIN } else { SCORE_MAX };

    for mv in board.empty_coords() {
        let mut child = board.clone();
        child.set(mv, mark);

        let (_, score) = exhaustive_recurse(&child, depth - 1, !maximizing, nodes);
        if (maximizing && score > best_score) || (!maximizing && score < best_score) {
            best_move = Some(mv);
            best_score = score;
        }
    }

    (best_move, best_score)
}

/// The move [Cell::Opponent] should play, searching `depth` plies deep.
/// Panics if the board is done or `depth` is 0, since then there is no move to return.
pub fn best_move(board: &Board, depth: u32, order: &mut impl MoveOrder) -> Coord {
    assert!(depth > 0, "requires depth>0 to find the best move");
    assert!(!board.is_done(), "Cannot pick a move on a done board:\n{}", board);

    let result = search(board, depth, SCORE_MIN, SCORE_MAX, true, order);
    debug!(
        board = %board.compact(),
        depth,
        score = result.score,
        nodes = result.nodes,
        best_move = ?result.best_move,
        "minimax search finished"
    );

    // SAFETY: unwrap is safe because:
    // * depth > 0 and the board is not done (see asserts), so the root expands its children
    // * the root has at least one empty cell, and the first child always strictly improves
    //     on the sentinel score, so a move is recorded
    result.best_move.unwrap()
}

/// Bot that plays [best_move] for whichever mark is to move.
///
/// When the bot plays [Cell::Player] the board is searched with the marks swapped,
/// so the search always maximizes for the side of the bot.
pub struct MinimaxBot<O: MoveOrder> {
    depth: u32,
    order: O,
}

impl<O: MoveOrder> Debug for MinimaxBot<O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MinimaxBot {{ depth: {} }}", self.depth)
    }
}

impl<O: MoveOrder> MinimaxBot<O> {
    pub fn new(depth: u32, order: O) -> Self {
        assert!(depth > 0, "requires depth>0 to find the best move");
        MinimaxBot { depth, order }
    }
}

impl<O: MoveOrder> Bot for MinimaxBot<O> {
    fn select_move(&mut self, board: &Board, mark: Cell) -> Result<Coord, BoardDone> {
        if board.is_done() {
            return Err(BoardDone);
        }

        let mv = match mark {
            Cell::Opponent => best_move(board, self.depth, &mut self.order),
            _ => best_move(&swap_marks(board), self.depth, &mut self.order),
        };
        trace!(?mark, %mv, "minimax bot selected move");
        Ok(mv)
    }
}

fn swap_marks(board: &Board) -> Board {
    let mut swapped = board.clone();
    for coord in board.coords() {
        let cell = board.get(coord);
        if !cell.is_empty() {
            swapped.set(coord, cell.other());
        }
    }
    swapped
}
