//! Main AI engine: opening book in front of a full alpha-beta search
//!
//! The engine answers the first two plies from a tiny opening book and
//! searches everything else to the end of the game:
//!
//! 1. **Empty board**: take the center
//! 2. **One human mark**: center taken means a random corner, otherwise the center
//! 3. **Alpha-Beta**: exhaustive minimax with alpha-beta pruning
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictactoe::{AIEngine, Board, Player, CORNERS};
//!
//! let mut engine = AIEngine::with_rng(StdRng::seed_from_u64(7));
//! let board = Board::new().with_mark(4, Player::Human);
//!
//! let reply = engine.get_move(&board).unwrap();
//! assert!(CORNERS.contains(&reply));
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::board::{Board, CENTER, CORNERS, TOTAL_CELLS};
use crate::search::Searcher;

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Answered from the opening book without searching
    Opening,
    /// Full alpha-beta search result
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<usize>,
    /// Score of the position after the move (0 for book moves)
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn opening(idx: usize, time_ms: u64) -> Self {
        Self {
            best_move: Some(idx),
            score: 0,
            search_type: SearchType::Opening,
            time_ms,
            nodes: 1,
        }
    }
}

/// AI engine for the computer side.
///
/// Generic over its random source, which is only consulted for the corner
/// reply to a center opening. Tests pin it with a seeded generator.
pub struct AIEngine<R = StdRng> {
    searcher: Searcher,
    rng: R,
}

impl AIEngine<StdRng> {
    /// Engine with an entropy-seeded random source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for AIEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AIEngine<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            searcher: Searcher::new(),
            rng,
        }
    }

    /// The engine's random source, shared with the caller for other draws
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Get the best move for the computer on `board`.
    ///
    /// Returns `None` when the game is already decided.
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<usize> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();

        // Opening book only for the first two plies
        let result = if let Some(opening_move) = self.get_opening_move(board) {
            MoveResult::opening(opening_move, start.elapsed().as_millis() as u64)
        } else {
            let result = self.searcher.search(board);
            MoveResult {
                best_move: result.best_move,
                score: result.score,
                search_type: SearchType::AlphaBeta,
                time_ms: start.elapsed().as_millis() as u64,
                nodes: result.nodes,
            }
        };

        debug!(
            best_move = ?result.best_move,
            score = result.score,
            search_type = ?result.search_type,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "computer move chosen"
        );
        result
    }

    /// Book reply for 9 or 8 empty cells, `None` everywhere else.
    fn get_opening_move(&mut self, board: &Board) -> Option<usize> {
        match board.empty_count() {
            TOTAL_CELLS => Some(CENTER),
            n if n == TOTAL_CELLS - 1 => {
                if board.is_empty(CENTER) {
                    Some(CENTER)
                } else {
                    CORNERS.choose(&mut self.rng).copied()
                }
            }
            _ => None,
        }
    }
}
