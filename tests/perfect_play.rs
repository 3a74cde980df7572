//! The computer never loses.
//!
//! Walks every line of play the human can choose, with the computer
//! answering through the engine. Where the opening book picks a random
//! corner, every corner is followed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe::search::Searcher;
use tictactoe::{evaluate, AIEngine, Board, Player, CENTER, CORNERS, TOTAL_CELLS};

#[derive(Default)]
struct Tally {
    games: u32,
    computer_wins: u32,
    draws: u32,
}

/// Replies the engine may give on `board`
fn computer_replies(engine: &mut AIEngine<ChaCha8Rng>, board: &Board) -> Vec<usize> {
    if board.empty_count() == TOTAL_CELLS - 1 && !board.is_empty(CENTER) {
        return CORNERS.to_vec();
    }
    engine.get_move(board).into_iter().collect()
}

fn explore(engine: &mut AIEngine<ChaCha8Rng>, board: Board, to_move: Player, tally: &mut Tally) {
    let outcome = evaluate(&board);
    if outcome.is_over() {
        tally.games += 1;
        assert_ne!(
            outcome.winner,
            Some(Player::Human),
            "computer lost:\n{board}"
        );
        if outcome.winner == Some(Player::Computer) {
            tally.computer_wins += 1;
        } else {
            tally.draws += 1;
        }
        return;
    }

    match to_move {
        Player::Human => {
            let moves: Vec<usize> = board.empty_cells().collect();
            for mov in moves {
                explore(engine, board.with_mark(mov, Player::Human), Player::Computer, tally);
            }
        }
        Player::Computer => {
            let replies = computer_replies(engine, &board);
            assert!(!replies.is_empty(), "no reply on open board:\n{board}");
            for mov in replies {
                assert!(board.is_empty(mov));
                explore(engine, board.with_mark(mov, Player::Computer), Player::Human, tally);
            }
        }
    }
}

#[test]
fn test_engine_never_loses_against_any_human_line() {
    let mut engine = AIEngine::with_rng(ChaCha8Rng::seed_from_u64(0));
    let mut tally = Tally::default();
    explore(&mut engine, Board::new(), Player::Human, &mut tally);

    assert!(tally.games > 0);
    assert!(tally.computer_wins > 0, "computer never punished a mistake");
    assert!(tally.draws > 0);
}

/// Search alone, no opening book, from every human first move
#[test]
fn test_search_never_loses_without_book() {
    fn play_out(searcher: &mut Searcher, board: Board) {
        let outcome = evaluate(&board);
        if outcome.is_over() {
            assert_ne!(outcome.winner, Some(Player::Human), "search lost:\n{board}");
            return;
        }
        let reply = searcher.search(&board).best_move.unwrap();
        let after = board.with_mark(reply, Player::Computer);
        if evaluate(&after).is_over() {
            assert_ne!(evaluate(&after).winner, Some(Player::Human));
            return;
        }
        let moves: Vec<usize> = after.empty_cells().collect();
        for mov in moves {
            play_out(searcher, after.with_mark(mov, Player::Human));
        }
    }

    let mut searcher = Searcher::new();
    for first in 0..TOTAL_CELLS {
        play_out(&mut searcher, Board::new().with_mark(first, Player::Human));
    }
}

/// A forced win is always taken: against a blunder the computer wins
#[test]
fn test_engine_wins_when_win_is_forced() {
    let mut engine = AIEngine::with_rng(ChaCha8Rng::seed_from_u64(0));
    // X 0 1 3, O 4 2: O completes the anti-diagonal at 6
    let board: Board = "XXO XO. ...".parse().unwrap();
    assert_eq!(engine.get_move(&board), Some(6));
}
