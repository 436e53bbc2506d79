//! The surface used by a game loop: a caller-owned board plus its configuration.
//!
//! Rendering, input handling and turn timing live in the caller. This module only turns
//! a configuration into a board, applies moves and asks the search for the next one.
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::ai::minimax;
use crate::board::{Board, Cell, Coord, Outcome};
use crate::error::{ConfigError, PlayError};
use crate::order::{MoveOrder, ShuffleOrder};

/// Board size, winning line length and search depth, loadable from TOML.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
    pub depth: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 3,
            cols: 3,
            win_length: 3,
            depth: 6,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let max = self.rows.max(self.cols);
        if self.win_length == 0 || self.win_length > max {
            return Err(ConfigError::InvalidWinLength {
                length: self.win_length,
                max,
            });
        }
        if self.depth == 0 {
            return Err(ConfigError::InvalidDepth);
        }
        Ok(())
    }

    /// An empty board with the configured size and win length.
    pub fn board(&self) -> Result<Board, ConfigError> {
        self.validate()?;
        Board::with_win_length(self.rows, self.cols, self.win_length)
    }
}

/// Who opens the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FirstMover {
    Player,
    Opponent,
    /// Either side with equal probability.
    Random,
}

impl FirstMover {
    /// Resolve to the mark that moves first.
    pub fn resolve(self, rng: &mut impl Rng) -> Cell {
        match self {
            FirstMover::Player => Cell::Player,
            FirstMover::Opponent => Cell::Opponent,
            FirstMover::Random => {
                if rng.gen::<bool>() {
                    Cell::Player
                } else {
                    Cell::Opponent
                }
            }
        }
    }
}

/// The move the engine plays for [Cell::Opponent]: [minimax::best_move] with a uniformly shuffled candidate order.
pub fn best_move(board: &Board, depth: u32, rng: &mut impl Rng) -> Coord {
    minimax::best_move(board, depth, &mut ShuffleOrder::new(rng))
}

/// Place `mark` on `coord`. Fails if the cell is not one of the empty cells or the game is over.
pub fn apply_move(board: &mut Board, coord: Coord, mark: Cell) -> Result<(), PlayError> {
    board.play(coord, mark)
}

/// The outcome if the game is over, `None` otherwise.
pub fn is_game_over(board: &Board) -> Option<Outcome> {
    minimax::terminal_state(board).outcome()
}

/// A single game: the live board and its configuration, owned by the caller.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let board = config.board()?;
        Ok(Game { config, board })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Clear the board and resolve `first`. If the opponent opens, its first move is already played.
    /// Returns the mark that moved first.
    pub fn start(&mut self, first: FirstMover, rng: &mut impl Rng) -> Cell {
        self.board.clear();

        let first = first.resolve(rng);
        info!(
            rows = self.config.rows,
            cols = self.config.cols,
            win_length = self.config.win_length,
            ?first,
            "starting game"
        );
        if first == Cell::Opponent {
            self.play_opponent(rng);
        }
        first
    }

    /// Apply a move of the human side.
    pub fn play_player(&mut self, coord: Coord) -> Result<Option<Outcome>, PlayError> {
        apply_move(&mut self.board, coord, Cell::Player)?;
        debug!(%coord, "player moved");
        Ok(is_game_over(&self.board))
    }

    /// Let the engine pick and apply the opponent move.
    /// Returns `None` without moving if the game is already over.
    pub fn play_opponent(&mut self, rng: &mut impl Rng) -> Option<Coord> {
        self.play_opponent_with(&mut ShuffleOrder::new(rng))
    }

    /// Same as [Game::play_opponent] with an explicit candidate order.
    pub fn play_opponent_with(&mut self, order: &mut impl MoveOrder) -> Option<Coord> {
        if self.board.is_done() {
            return None;
        }
        let coord = minimax::best_move(&self.board, self.config.depth, order);
        self.board.set(coord, Cell::Opponent);
        debug!(%coord, "opponent moved");
        Some(coord)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        is_game_over(&self.board)
    }
}
