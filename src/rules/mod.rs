//! Game rules for tic-tac-toe
//!
//! This module implements the rule set:
//! - Win conditions (three in a row on one of 8 fixed lines)
//! - Draw detection (full board, no line)
//! - Move legality

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, evaluate, find_winning_line, is_draw, Outcome, WINNING_LINES};

use crate::board::Board;

/// A move is legal when the cell is on the board, empty, and the game is
/// still undecided.
pub fn is_valid_move(board: &Board, idx: usize) -> bool {
    board.is_empty(idx) && !evaluate(board).is_over()
}
