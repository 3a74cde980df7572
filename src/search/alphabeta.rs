//! Minimax search with alpha-beta pruning
//!
//! The 3x3 game tree is small enough to search to the end from any
//! position, so there is no depth limit, no evaluation heuristic and no
//! transposition table. Scores are always from the computer's point of view:
//!
//! - computer win: `WIN_SCORE - depth`
//! - human win: `depth - WIN_SCORE`
//! - draw: `0`
//!
//! `depth` counts plies below the position being scored, so a quicker win
//! scores higher and a slower loss scores less badly.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::Board;
//! use tictactoe::search::Searcher;
//!
//! // Computer (O) to move, human threatens the top row
//! let board: Board = "XX. .O. ...".parse().unwrap();
//! let mut searcher = Searcher::new();
//!
//! let result = searcher.search(&board);
//! assert_eq!(result.best_move, Some(2));
//! ```

use crate::board::{Board, Player};
use crate::rules::evaluate;

/// Score of an immediate computer win
pub const WIN_SCORE: i32 = 10;

/// Infinity score for alpha-beta bounds
const INF: i32 = WIN_SCORE + 1;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` on a finished board
    pub best_move: Option<usize>,
    /// Value of the position after the best move
    pub score: i32,
    /// Total nodes searched
    pub nodes: u64,
}

/// Alpha-beta searcher.
///
/// Moves are tried in ascending cell order and a later move only replaces
/// the current best when it scores strictly higher, so results are
/// deterministic.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Find the computer's best move on `board`.
    #[must_use]
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;

        let outcome = evaluate(board);
        if outcome.is_over() {
            return SearchResult {
                best_move: None,
                score: terminal_score(outcome.winner, 0),
                nodes: 0,
            };
        }

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for mov in board.empty_cells() {
            let child = board.with_mark(mov, Player::Computer);
            let score = self.alpha_beta(&child, 0, Player::Human, alpha, INF);

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(score);
        }

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }

    /// Minimax value of `board` with `to_move` on turn.
    #[must_use]
    pub fn score_position(&mut self, board: &Board, to_move: Player) -> i32 {
        self.nodes = 0;
        self.alpha_beta(board, 0, to_move, -INF, INF)
    }

    /// Recursive alpha-beta. Computer layers maximize, human layers minimize.
    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: i32,
        to_move: Player,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        let outcome = evaluate(board);
        if outcome.is_over() {
            return terminal_score(outcome.winner, depth);
        }

        match to_move {
            Player::Computer => {
                let mut max_eval = -INF;
                for mov in board.empty_cells() {
                    let child = board.with_mark(mov, Player::Computer);
                    let eval = self.alpha_beta(&child, depth + 1, Player::Human, alpha, beta);
                    max_eval = max_eval.max(eval);
                    alpha = alpha.max(eval);
                    if beta <= alpha {
                        break;
                    }
                }
                max_eval
            }
            Player::Human => {
                let mut min_eval = INF;
                for mov in board.empty_cells() {
                    let child = board.with_mark(mov, Player::Human);
                    let eval = self.alpha_beta(&child, depth + 1, Player::Computer, alpha, beta);
                    min_eval = min_eval.min(eval);
                    beta = beta.min(eval);
                    if beta <= alpha {
                        break;
                    }
                }
                min_eval
            }
        }
    }
}

/// Score of a finished game `depth` plies below the searched position
#[inline]
pub fn terminal_score(winner: Option<Player>, depth: i32) -> i32 {
    match winner {
        Some(Player::Computer) => WIN_SCORE - depth,
        Some(Player::Human) => depth - WIN_SCORE,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut searcher = Searcher::new();
        // O can complete the middle row at 5
        let b = board("XX. OO. X..");
        let result = searcher.search(&b);
        assert_eq!(result.best_move, Some(5));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        let mut searcher = Searcher::new();
        let b = board("XX. .O. ...");
        let result = searcher.search(&b);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn test_win_preferred_over_block() {
        let mut searcher = Searcher::new();
        // Both sides threaten; O wins at 5 instead of blocking at 2
        let b = board("XX. OO. ..X");
        let result = searcher.search(&b);
        assert_eq!(result.best_move, Some(5));
    }

    #[test]
    fn test_search_finished_board() {
        let mut searcher = Searcher::new();
        let won = board("XXX OO. ...");
        let result = searcher.search(&won);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -WIN_SCORE);

        let drawn = board("XOX XOO OXX");
        let result = searcher.search(&drawn);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut searcher = Searcher::new();
        assert_eq!(searcher.score_position(&Board::new(), Player::Human), 0);
        assert!(searcher.nodes() > 0);
    }

    #[test]
    fn test_losing_position_scores_by_distance() {
        let mut searcher = Searcher::new();
        // X forks the top row and left column; every O reply loses next ply
        let b = board("XX. XO. ..O");
        let result = searcher.search(&b);
        assert_eq!(result.score, 1 - WIN_SCORE);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn test_ties_keep_lowest_index() {
        let mut searcher = Searcher::new();
        // O wins at 2 (top row) or 7 (middle column)
        let b = board("OO. XOX X.X");
        let result = searcher.search(&b);
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_terminal_score() {
        assert_eq!(terminal_score(Some(Player::Computer), 0), 10);
        assert_eq!(terminal_score(Some(Player::Computer), 3), 7);
        assert_eq!(terminal_score(Some(Player::Human), 2), -8);
        assert_eq!(terminal_score(None, 5), 0);
    }
}
