#![warn(missing_debug_implementations)]

//! A [Board](crate::board::Board) abstraction and adversarial search for m,n,k-games:
//! tic-tac-toe generalized to any rectangular grid.
//!
//! # Features
//!
//! * [Board](crate::board::Board) is a plain value holding the grid and the win length,
//!     with derived [line views](crate::lines) for rows, columns and both diagonal families.
//! * [terminal_state](crate::ai::minimax::terminal_state) and [utility](crate::ai::minimax::utility)
//!     classify and score boards.
//! * [search](crate::ai::minimax::search) is a depth-bounded minimax with alpha-beta pruning,
//!     maximizing for [Cell::Opponent](crate::board::Cell::Opponent).
//!     Candidates are visited in the order given by a [MoveOrder](crate::order::MoveOrder),
//!     a uniform shuffle by default so ties between equally good moves are broken randomly.
//! * [Game](crate::game::Game) bundles a caller-owned board with its
//!     [GameConfig](crate::game::GameConfig) and exposes the calls a game loop needs.
//! * Bots ([MinimaxBot](crate::ai::minimax::MinimaxBot), [RandomBot](crate::ai::simple::RandomBot))
//!     and a [bot vs bot runner](crate::util::bot_game) to compare them.
//!
//! The library performs no I/O besides [GameConfig::load](crate::game::GameConfig::load)
//! and logs through [tracing](https://docs.rs/tracing) without installing a subscriber.
//!
//! # Examples
//!
//! ## Block a threat
//!
//! ```
//! # use mnk_game::board::{Board, Coord};
//! # use mnk_game::ai::minimax::best_move;
//! # use mnk_game::order::IdentityOrder;
//! // the player threatens to complete the top row
//! let board: Board = "XX./.O./...".parse().unwrap();
//! let mv = best_move(&board, 9, &mut IdentityOrder);
//! assert_eq!(mv, Coord::new(0, 2));
//! ```
//!
//! ## Play a game against the engine
//!
//! ```
//! # use mnk_game::game::{FirstMover, Game, GameConfig};
//! # use rand::thread_rng;
//! let mut rng = thread_rng();
//! let mut game = Game::new(GameConfig::default()).unwrap();
//! game.start(FirstMover::Random, &mut rng);
//!
//! while game.outcome().is_none() {
//!     let mv = game.board().random_empty_cell(&mut rng).unwrap();
//!     if game.play_player(mv).unwrap().is_none() {
//!         game.play_opponent(&mut rng);
//!     }
//! }
//! println!("{}{:?}", game.board(), game.outcome());
//! ```

pub mod board;
pub mod error;
pub mod lines;
pub mod order;

pub mod wdl;

pub mod ai;

pub mod game;

pub mod util;
