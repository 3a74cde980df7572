//! Outcome evaluation: three in a row or a full board
//!
//! Outcomes are always derived from a board, never stored next to it.

use crate::board::{Board, Cell, Player};

/// The 8 winning lines, in evaluation order: rows, columns, diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // Rows
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6], // Columns
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8], // Diagonals
    [2, 4, 6],
];

/// Result of evaluating a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    pub winner: Option<Player>,
    pub winning_line: Option<[usize; 3]>,
    pub is_draw: bool,
}

impl Outcome {
    /// Winner present or board drawn
    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }
}

/// Evaluate a board: the first complete line wins, otherwise a full board draws.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = find_winning_line(board) {
        return Outcome {
            winner: Some(player),
            winning_line: Some(line),
            is_draw: false,
        };
    }

    Outcome {
        winner: None,
        winning_line: None,
        is_draw: board.is_full(),
    }
}

/// First line (in [`WINNING_LINES`] order) held entirely by one player
#[inline]
pub fn find_winning_line(board: &Board) -> Option<(Player, [usize; 3])> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Cell::Mark(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Winner of the board, if any
#[inline]
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|(player, _)| player)
}

/// Full board with no winner
#[inline]
pub fn is_draw(board: &Board) -> bool {
    evaluate(board).is_draw
}
