//! Alpha-beta agrees with plain minimax on every reachable position.

use std::collections::HashSet;

use tictactoe::search::{Searcher, WIN_SCORE};
use tictactoe::{evaluate, Board, Player};

/// Unpruned minimax with the same scoring as the engine
fn minimax(board: &Board, depth: i32, to_move: Player) -> i32 {
    let outcome = evaluate(board);
    if outcome.is_over() {
        return match outcome.winner {
            Some(Player::Computer) => WIN_SCORE - depth,
            Some(Player::Human) => depth - WIN_SCORE,
            None => 0,
        };
    }

    let scores = board
        .empty_cells()
        .map(|mov| minimax(&board.with_mark(mov, to_move), depth + 1, to_move.opponent()));
    match to_move {
        Player::Computer => scores.max().unwrap_or(0),
        Player::Human => scores.min().unwrap_or(0),
    }
}

/// First cell (ascending) with the best unpruned score
fn reference_best(board: &Board) -> (usize, i32) {
    let mut best = None;
    for mov in board.empty_cells() {
        let score = minimax(&board.with_mark(mov, Player::Computer), 0, Player::Human);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mov, score)),
        }
    }
    best.unwrap()
}

/// Every position reachable with the human moving first, and whose turn it is
fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut stack = vec![(Board::new(), Player::Human)];

    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        out.push((board, to_move));
        if evaluate(&board).is_over() {
            continue;
        }
        for mov in board.empty_cells() {
            stack.push((board.with_mark(mov, to_move), to_move.opponent()));
        }
    }
    out
}

#[test]
fn test_reachable_position_count() {
    // Well-known count of legal tic-tac-toe positions
    assert_eq!(reachable_positions().len(), 5478);
}

#[test]
fn test_alphabeta_matches_minimax_on_computer_turns() {
    let mut searcher = Searcher::new();
    let mut checked = 0;

    for (board, to_move) in reachable_positions() {
        if to_move != Player::Computer || evaluate(&board).is_over() {
            continue;
        }
        let (best_move, best_score) = reference_best(&board);
        let result = searcher.search(&board);

        assert_eq!(result.score, best_score, "score differs on\n{board}");
        assert_eq!(result.best_move, Some(best_move), "move differs on\n{board}");
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn test_position_values_match_minimax() {
    let mut searcher = Searcher::new();
    for (board, to_move) in reachable_positions() {
        assert_eq!(
            searcher.score_position(&board, to_move),
            minimax(&board, 0, to_move),
            "value differs on\n{board}"
        );
    }
}
