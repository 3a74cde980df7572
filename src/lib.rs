//! Tic-tac-toe against a perfect computer opponent
//!
//! A small game engine with a rewindable move history:
//! - 3x3 board, human (X) moves first, computer (O) replies
//! - Computer plays perfectly: it never loses
//! - Every position is kept, so moves can be undone or any earlier position
//!   revisited; playing from an earlier position discards the later ones
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board, cells, players
//! - [`rules`]: Win and draw detection
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Opening book plus search, the computer's move choice
//! - [`game`]: History store and turn controller
//! - [`ui`]: eframe/egui front end
//!
//! # Quick Start
//!
//! ```
//! use std::time::{Duration, Instant};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictactoe::{GameConfig, GameController, TurnState};
//!
//! let mut game = GameController::with_config(GameConfig::default(), StdRng::seed_from_u64(1));
//!
//! // Human takes the center
//! assert!(game.submit_human_move(4));
//! assert!(game.is_thinking());
//!
//! // The host loop polls; the reply lands once the thinking delay is over
//! let reply = game.poll_at(Instant::now() + Duration::from_secs(2));
//! assert!(reply.is_some());
//! assert_eq!(game.turn_state(), TurnState::HumanTurn);
//!
//! // Take both moves back
//! game.undo();
//! assert_eq!(game.move_count(), 0);
//! ```
//!
//! # Search
//!
//! The computer follows this order:
//! 1. Empty board: center
//! 2. Human opened: a random corner if the human took the center, else the center
//! 3. Full alpha-beta search to the end of the game

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE, CENTER, CORNERS, TOTAL_CELLS};
pub use config::GameConfig;
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{GameError, HistoryError, MoveError};
pub use game::{Command, GameController, History, Snapshot, TurnState};
pub use rules::{evaluate, Outcome};
