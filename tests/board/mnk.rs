use mnk_game::board::{Board, Cell, Coord, Outcome};
use mnk_game::util::board_gen::random_board_with_moves;
use mnk_game::util::tiny::consistent_rng;

use crate::board::board_test_main;

fn parse(s: &str) -> Board {
    s.parse().unwrap()
}

#[test]
fn empty() {
    board_test_main(&Board::new(3, 3))
}

#[test]
fn one_move() {
    let mut board = Board::new(3, 3);
    board.play(Coord::new(1, 0), Cell::Player).unwrap();

    board_test_main(&board)
}

#[test]
fn done() {
    let moves = [(0, 0), (1, 2), (0, 1), (1, 1), (0, 2)];

    let mut board = Board::new(3, 3);
    let mut mark = Cell::Player;
    for &(row, col) in &moves {
        board.play(Coord::new(row, col), mark).unwrap();
        mark = mark.other();
    }

    board_test_main(&board);
    assert_eq!(board.outcome(), Some(Outcome::WonBy(Cell::Player)));
}

#[test]
fn draw() {
    let board = parse("XOX/XOO/OXX");
    board_test_main(&board);
    assert_eq!(board.outcome(), Some(Outcome::Draw));
}

#[test]
fn single_cell() {
    let board = Board::new(1, 1);
    board_test_main(&board);

    let won = board.clone_and_play(Coord::new(0, 0), Cell::Opponent).unwrap();
    board_test_main(&won);
    assert_eq!(won.outcome(), Some(Outcome::WonBy(Cell::Opponent)));
}

#[test]
fn single_row() {
    let board = Board::with_win_length(1, 5, 3).unwrap();
    board_test_main(&board);

    // every column is a single cell, so the first mark placed wins
    let won = Board::parse_with_win_length("XO.O.", 3).unwrap();
    board_test_main(&won);
    assert_eq!(won.outcome(), Some(Outcome::WonBy(Cell::Player)));
}

#[test]
fn rectangular() {
    board_test_main(&Board::with_win_length(3, 4, 3).unwrap());
    board_test_main(&Board::parse_with_win_length("X.../..O./X..O", 3).unwrap());
    board_test_main(&Board::new(5, 2));
}

#[test]
fn rectangular_diagonal_win() {
    let board = Board::parse_with_win_length("...O/..O./.O..", 3).unwrap();
    board_test_main(&board);
    assert_eq!(board.outcome(), Some(Outcome::WonBy(Cell::Opponent)));
}

#[test]
fn random_positions() {
    let mut rng = consistent_rng();
    for (rows, cols) in [(3, 3), (4, 4), (3, 5)] {
        let start = Board::new(rows, cols);
        for n in 0..6 {
            let board = random_board_with_moves(&start, Cell::Opponent, n, &mut rng);
            board_test_main(&board);
        }
    }
}
