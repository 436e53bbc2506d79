use std::collections::HashSet;

use internal_iterator::InternalIterator;
use itertools::Itertools;

use mnk_game::board::{Board, Cell, Coord};
use mnk_game::error::{BoardDone, PlayError};
use mnk_game::lines::Diagonal;
use mnk_game::order::{IdentityOrder, ShuffleOrder};
use mnk_game::util::tiny::consistent_rng;

use crate::util::test_sampler_uniform;

mod lines;
mod mnk;

pub fn board_test_main(board: &Board) {
    println!("Currently testing board\n{:?}\n{}", board, board);

    test_lines_cover_board(board);
    test_text_form(board);

    if board.is_done() {
        test_done_board_errors(board);
    } else {
        test_empty_cells_match(board);
        test_random_empty_uniform(board);
        test_shuffle_first_uniform(board);
    }
}

fn test_done_board_errors(board: &Board) {
    assert!(board.is_done(), "bug in test implementation, expected done board");
    assert!(board.outcome().is_some());

    assert_eq!(board.random_empty_cell(&mut consistent_rng()), Err(BoardDone));

    for coord in board.coords() {
        assert_eq!(board.is_available_move(coord), Err(BoardDone));
        assert_eq!(board.clone().play(coord, Cell::Player), Err(PlayError::BoardDone));
        assert_eq!(board.clone_and_play(coord, Cell::Opponent), Err(PlayError::BoardDone));
    }
}

fn test_empty_cells_match(board: &Board) {
    println!("empty_cells and is_available_move match:");

    let all = board.coords().collect_vec();
    let empty = board.empty_cells(&mut IdentityOrder);

    assert_eq!(all.len(), board.row_count() * board.col_count());
    assert_eq!(empty.len(), board.count(Cell::Empty));
    assert!(!empty.is_empty(), "must have at least one empty cell on a non-done board");

    // identity order is row-major
    assert!(empty.windows(2).all(|w| w[0] < w[1]), "not row-major: {:?}", empty);

    for &coord in &all {
        let available = board.is_available_move(coord).unwrap();
        assert_eq!(available, board.get(coord) == Cell::Empty);
        assert_eq!(available, empty.contains(&coord), "mismatch for {}", coord);
    }

    // a shuffled order is a permutation of the same cells
    let shuffled = board.empty_cells(&mut ShuffleOrder::new(consistent_rng()));
    assert_eq!(shuffled.iter().copied().sorted().collect_vec(), empty);
    assert_eq!(HashSet::<Coord>::from_iter(shuffled.iter().copied()).len(), shuffled.len());

    // try playing each empty cell
    for &coord in &empty {
        let next = board.clone_and_play(coord, Cell::Opponent).unwrap();
        assert_eq!(next.get(coord), Cell::Opponent);
        assert_eq!(next.count(Cell::Empty), board.count(Cell::Empty) - 1);
    }
}

fn test_random_empty_uniform(board: &Board) {
    println!("random_empty_cell uniform:");

    let expected = board.empty_coords().collect_vec();
    let mut rng = consistent_rng();
    test_sampler_uniform(&expected, || board.random_empty_cell(&mut rng).unwrap());
}

fn test_shuffle_first_uniform(board: &Board) {
    println!("shuffled first cell uniform:");

    let expected = board.empty_coords().collect_vec();
    let mut order = ShuffleOrder::new(consistent_rng());
    test_sampler_uniform(&expected, || board.empty_cells(&mut order)[0]);
}

fn test_lines_cover_board(board: &Board) {
    let (rows, cols) = (board.row_count(), board.col_count());

    let row_lines = board.rows();
    assert_eq!(row_lines.len(), rows);
    assert!(row_lines.iter().all(|l| l.len() == cols));

    let col_lines = board.columns();
    assert_eq!(col_lines.len(), cols);
    assert!(col_lines.iter().all(|l| l.len() == rows));

    let mut diagonal_count = 0;
    for direction in Diagonal::BOTH {
        let diagonals = board.all_diagonals(direction);
        assert_eq!(diagonals.len(), rows + cols - 1);

        // every cell is on exactly one diagonal per direction
        assert_eq!(diagonals.iter().map(|l| l.len()).sum::<usize>(), rows * cols);
        let coords = (0..rows + cols - 1)
            .flat_map(|s| board.diagonal_coords(direction, s))
            .collect_vec();
        assert_eq!(coords.iter().sorted().copied().collect_vec(), board.coords().collect_vec());

        diagonal_count += diagonals.iter().filter(|l| l.len() >= board.win_length()).count();
    }

    assert_eq!(board.lines().count(), rows + cols + diagonal_count);
}

fn test_text_form(board: &Board) {
    let compact = board.compact();
    assert_eq!(Board::parse_with_win_length(&compact, board.win_length()).as_ref(), Ok(board));

    let multiline = board.to_string();
    assert_eq!(multiline.lines().collect_vec().join("/"), compact);
    assert_eq!(
        Board::parse_with_win_length(&multiline, board.win_length()).as_ref(),
        Ok(board)
    );
}
