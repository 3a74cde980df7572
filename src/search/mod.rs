//! Search module for the tic-tac-toe AI
//!
//! Contains:
//! - Exhaustive minimax with alpha-beta pruning over the remaining game tree

pub mod alphabeta;

pub use alphabeta::{SearchResult, Searcher, WIN_SCORE};
