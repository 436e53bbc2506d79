//! Utilities for collecting game statistics and testing board and bot implementations.
use std::collections::{HashMap, HashSet};

use crate::ai::Bot;
use crate::board::{Board, Cell};

/// The number of legal positions reachable after `depth` moves, including duplicates.
/// `first` is the mark that opened the game, used to decide who is to move.
/// See <https://www.chessprogramming.org/Perft>.
pub fn perft(board: &Board, first: Cell, depth: u32) -> u64 {
    let mut map = HashMap::default();
    perft_recurse(&mut map, board.clone(), first, depth)
}

fn perft_recurse(map: &mut HashMap<(Board, u32), u64>, board: Board, first: Cell, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.is_done() {
        return 0;
    }

    // we need keys (B, depth) because otherwise we risk miscounting if the same board is encountered at different depths
    let key = (board, depth);
    let board = &key.0;

    if let Some(&p) = map.get(&key) {
        return p;
    }

    let mark = board.next_mark(first);
    let mut p = 0;
    for mv in board.empty_coords() {
        let mut child = board.clone();
        child.set(mv, mark);
        p += perft_recurse(map, child, first, depth - 1);
    }

    map.insert(key, p);
    p
}

/// Structure returned by [`average_game_stats`].
#[derive(Debug)]
pub struct GameStats {
    pub game_length: f32,
    pub available_moves: f32,
}

/// Return `GameStats` estimated from `n` games starting from `start` where `bot` plays both sides.
pub fn average_game_stats(start: &Board, first: Cell, mut bot: impl Bot, n: u64) -> GameStats {
    let mut total_moves = 0;
    let mut total_positions = 0;

    for _ in 0..n {
        let mut board = start.clone();
        while !board.is_done() {
            total_moves += board.empty_coords().count();
            total_positions += 1;

            let mark = board.next_mark(first);
            let mv = match bot.select_move(&board, mark) {
                Ok(mv) => mv,
                Err(_) => break,
            };
            board.set(mv, mark);
        }
    }

    GameStats {
        game_length: total_positions as f32 / n as f32,
        available_moves: total_moves as f32 / total_positions as f32,
    }
}

/// Generate the set of all possible board positions reachable from the given board.
/// This function can easily take a long time to terminate for boards larger than 3x3.
pub fn all_possible_boards(start: &Board, first: Cell, include_done: bool) -> Vec<Board> {
    let mut set = HashSet::new();
    let mut result = vec![];
    all_possible_boards_impl(start, first, include_done, &mut result, &mut set);
    result
}

fn all_possible_boards_impl(
    start: &Board,
    first: Cell,
    include_done: bool,
    result: &mut Vec<Board>,
    set: &mut HashSet<Board>,
) {
    if !include_done && start.is_done() {
        return;
    }
    if !set.insert(start.clone()) {
        return;
    }
    result.push(start.clone());
    if start.is_done() {
        return;
    }

    let mark = start.next_mark(first);
    for mv in start.empty_coords() {
        let mut child = start.clone();
        child.set(mv, mark);
        all_possible_boards_impl(&child, first, include_done, result, set);
    }
}
