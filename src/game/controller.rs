//! Turn controller: validates human moves and drives the computer's replies
//!
//! The controller never stores whose turn it is. Every query re-derives the
//! state from the snapshot at the history cursor, so undo and jumps can land
//! anywhere and the next poll does the right thing.
//!
//! The computer reply goes through a [`MoveScheduler`]: the host loop calls
//! [`GameController::poll`] every frame, the controller schedules a move once
//! it is the computer's turn at the tail of an unfinished game, and applies
//! it when the simulated thinking delay has elapsed. Any command cancels the
//! outstanding move first, so a reply computed for an old board is never
//! applied to a new one.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use super::history::{History, Snapshot};
use super::schedule::MoveScheduler;
use crate::board::{Board, Player, TOTAL_CELLS};
use crate::config::GameConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::{HistoryError, MoveError};
use crate::rules::Outcome;

/// Where the game at the cursor stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the human
    HumanTurn,
    /// Computer to move at the tail; a reply is scheduled or about to be
    ComputerPending,
    /// Computer to move on an older snapshot; nothing is scheduled
    Reviewing,
    /// Won or drawn. Only reset or navigation leaves it.
    Terminal,
}

/// User intents forwarded by a front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(usize),
    Undo,
    Reset,
    JumpTo(usize),
}

/// Game session: history, computer opponent and its thinking timer
pub struct GameController<R = StdRng> {
    history: History,
    engine: AIEngine<R>,
    scheduler: MoveScheduler,
    config: GameConfig,
    last_result: Option<MoveResult>,
}

impl GameController<StdRng> {
    /// Default timings and an entropy-seeded random source
    pub fn new() -> Self {
        Self::with_config(GameConfig::default(), StdRng::from_entropy())
    }
}

impl Default for GameController<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameController<R> {
    /// `rng` drives both the thinking delay and the opening corner choice
    pub fn with_config(config: GameConfig, rng: R) -> Self {
        Self {
            history: History::new(),
            engine: AIEngine::with_rng(rng),
            scheduler: MoveScheduler::new(),
            config,
            last_result: None,
        }
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    /// Play `idx` for the human.
    #[instrument(skip(self))]
    pub fn try_submit_human_move(&mut self, idx: usize) -> Result<(), MoveError> {
        if let Err(err) = self.check_human_move(idx) {
            debug!(%err, "human move rejected");
            return Err(err);
        }

        // Nothing can be outstanding on the human's turn; cancel regardless
        self.scheduler.cancel();
        self.history.append_move(idx).map_err(|err| match err {
            HistoryError::Occupied(idx) => MoveError::Occupied(idx),
            HistoryError::GameOver => MoveError::GameOver,
            HistoryError::InvalidPosition(idx) | HistoryError::OutOfRange { target: idx, .. } => {
                MoveError::OutOfRange(idx)
            }
        })?;

        self.sync_turn(Instant::now());
        Ok(())
    }

    /// Boolean form of [`Self::try_submit_human_move`]
    pub fn submit_human_move(&mut self, idx: usize) -> bool {
        self.try_submit_human_move(idx).is_ok()
    }

    /// Start a new game
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.scheduler.cancel();
        self.history.reset();
        self.last_result = None;
        self.sync_turn(Instant::now());
    }

    /// Take back the last move, or the last computer reply together with the
    /// human move that provoked it
    #[instrument(skip(self))]
    pub fn undo(&mut self) {
        self.scheduler.cancel();
        let cursor = self.history.undo();
        info!(cursor, "undo");
        self.sync_turn(Instant::now());
    }

    /// Move the cursor to history entry `index`
    #[instrument(skip(self))]
    pub fn try_jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if let Err(err) = self.history.jump_to(index) {
            debug!(%err, "jump rejected");
            return Err(err);
        }
        self.scheduler.cancel();
        info!(cursor = index, "jumped");
        self.sync_turn(Instant::now());
        Ok(())
    }

    /// Boolean form of [`Self::try_jump_to`]
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.try_jump_to(index).is_ok()
    }

    /// Dispatch a front-end command
    pub fn execute(&mut self, command: Command) -> crate::error::Result<()> {
        match command {
            Command::Move(idx) => self.try_submit_human_move(idx)?,
            Command::Undo => self.undo(),
            Command::Reset => self.reset(),
            Command::JumpTo(index) => self.try_jump_to(index)?,
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Computer turn
    // ---------------------------------------------------------------------

    /// Advance the computer's turn at the current time. See [`Self::poll_at`].
    pub fn poll(&mut self) -> Option<usize> {
        self.poll_at(Instant::now())
    }

    /// Schedule a computer reply if one is due and apply it once its delay
    /// has elapsed at `now`. Returns the cell the computer played.
    pub fn poll_at(&mut self, now: Instant) -> Option<usize> {
        self.sync_turn(now);

        let handle = self.scheduler.take_due(now)?;
        if !self.scheduler.is_current(handle) || !self.computer_should_move() {
            debug!("dropping stale computer move");
            return None;
        }

        let board = self.history.current().board;
        let result = self.engine.get_move_with_stats(&board);
        self.last_result = Some(result);

        let idx = result.best_move?;
        match self.history.append_move(idx) {
            Ok(_) => {
                info!(position = idx, "computer moved");
                self.sync_turn(now);
                Some(idx)
            }
            Err(err) => {
                warn!(%err, position = idx, "computer move refused");
                None
            }
        }
    }

    /// Time left before the scheduled computer move fires
    pub fn thinking_remaining(&self, now: Instant) -> Option<Duration> {
        self.scheduler.remaining(now)
    }

    /// Time since the computer started thinking
    pub fn thinking_elapsed(&self, now: Instant) -> Option<Duration> {
        self.scheduler.elapsed(now)
    }

    /// Schedule a reply when the computer should move and none is outstanding
    fn sync_turn(&mut self, now: Instant) {
        if !self.computer_should_move() {
            if self.scheduler.cancel() {
                debug!("cancelled computer move");
            }
            return;
        }
        if self.scheduler.is_pending() {
            return;
        }

        let delay = self.engine.rng_mut().gen_range(
            self.config.think_delay_min..=self.config.think_delay_max,
        );
        self.scheduler.schedule(now, delay);
        debug!(delay_ms = delay.as_millis() as u64, "computer thinking");
    }

    /// Computer to move, cursor at the tail, game undecided
    fn computer_should_move(&self) -> bool {
        let current = self.history.current();
        current.next_player == Player::Computer
            && self.history.is_at_tail()
            && !current.outcome().is_over()
    }

    fn check_human_move(&self, idx: usize) -> Result<(), MoveError> {
        let current = self.history.current();
        if idx >= TOTAL_CELLS {
            return Err(MoveError::OutOfRange(idx));
        }
        if !current.board.is_empty(idx) {
            return Err(MoveError::Occupied(idx));
        }
        if current.outcome().is_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_thinking() {
            return Err(MoveError::ComputerThinking);
        }
        if current.next_player != Player::Human {
            return Err(MoveError::NotHumanTurn);
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Read model
    // ---------------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.history.current().board
    }

    pub fn current(&self) -> &Snapshot {
        self.history.current()
    }

    /// Side to move at the cursor
    pub fn current_player(&self) -> Player {
        self.history.current().next_player
    }

    pub fn outcome(&self) -> Outcome {
        self.history.current().outcome()
    }

    pub fn winner(&self) -> Option<Player> {
        self.outcome().winner
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.outcome().winning_line
    }

    pub fn is_draw(&self) -> bool {
        self.outcome().is_draw
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_over()
    }

    /// Moves played up to the cursor
    pub fn move_count(&self) -> usize {
        self.history.cursor()
    }

    /// A computer reply is outstanding
    pub fn is_thinking(&self) -> bool {
        self.scheduler.is_pending()
    }

    pub fn history(&self) -> &[Snapshot] {
        self.history.all()
    }

    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn turn_state(&self) -> TurnState {
        let current = self.history.current();
        if current.outcome().is_over() {
            TurnState::Terminal
        } else if current.next_player == Player::Human {
            TurnState::HumanTurn
        } else if self.history.is_at_tail() {
            TurnState::ComputerPending
        } else {
            TurnState::Reviewing
        }
    }

    /// Search statistics of the latest computer move
    pub fn last_move_result(&self) -> Option<&MoveResult> {
        self.last_result.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, CORNERS};
    use crate::engine::SearchType;
    use crate::error::GameError;
    use rand_chacha::ChaCha8Rng;

    fn controller() -> GameController<ChaCha8Rng> {
        GameController::with_config(GameConfig::default(), ChaCha8Rng::seed_from_u64(3))
    }

    fn instant_controller() -> GameController<ChaCha8Rng> {
        GameController::with_config(GameConfig::instant(), ChaCha8Rng::seed_from_u64(3))
    }

    /// Well past the longest thinking delay
    fn later() -> Instant {
        Instant::now() + Duration::from_secs(2)
    }

    #[test]
    fn test_new_game_is_human_turn() {
        let game = controller();
        assert_eq!(game.turn_state(), TurnState::HumanTurn);
        assert_eq!(game.current_player(), Player::Human);
        assert_eq!(game.move_count(), 0);
        assert!(!game.is_thinking());
        assert!(!game.can_undo());
    }

    #[test]
    fn test_human_move_starts_thinking() {
        let mut game = controller();
        assert!(game.submit_human_move(4));

        assert!(game.is_thinking());
        assert_eq!(game.turn_state(), TurnState::ComputerPending);
        let remaining = game.thinking_remaining(Instant::now()).unwrap();
        assert!(remaining <= Duration::from_millis(1500));
    }

    #[test]
    fn test_thinking_delay_within_configured_range() {
        for seed in 0..20 {
            let mut game = GameController::with_config(
                GameConfig::default(),
                ChaCha8Rng::seed_from_u64(seed),
            );
            let before = Instant::now();
            game.submit_human_move(0);
            // Nothing fires before the minimum delay
            assert_eq!(game.poll_at(before + Duration::from_millis(499)), None);
            assert!(game.is_thinking());
            assert!(game.poll_at(before + Duration::from_millis(1600)).is_some());
        }
    }

    #[test]
    fn test_center_opening_answered_with_corner() {
        let mut game = controller();
        assert!(game.submit_human_move(4));
        let reply = game.poll_at(later()).unwrap();

        assert!(CORNERS.contains(&reply));
        assert!(!game.is_thinking());
        assert_eq!(game.turn_state(), TurnState::HumanTurn);
        assert!(game.current().was_computer_move);
        assert_eq!(
            game.last_move_result().map(|r| r.search_type),
            Some(SearchType::Opening)
        );
    }

    #[test]
    fn test_moves_rejected_while_thinking() {
        let mut game = controller();
        game.submit_human_move(4);
        assert_eq!(
            game.try_submit_human_move(0),
            Err(MoveError::ComputerThinking)
        );
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_occupied_and_off_board_rejected() {
        let mut game = instant_controller();
        game.submit_human_move(4);
        game.poll_at(later());

        assert_eq!(game.try_submit_human_move(4), Err(MoveError::Occupied(4)));
        assert_eq!(game.try_submit_human_move(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_reset_cancels_pending_move() {
        let mut game = controller();
        game.submit_human_move(4);
        game.reset();

        assert!(!game.is_thinking());
        assert_eq!(game.poll_at(later()), None);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.cursor(), 0);
        assert_eq!(*game.board(), Board::new());
        assert_eq!(game.current_player(), Player::Human);
    }

    #[test]
    fn test_undo_cancels_pending_move() {
        let mut game = controller();
        game.submit_human_move(4);
        game.undo();

        assert!(!game.is_thinking());
        assert_eq!(game.poll_at(later()), None);
        assert_eq!(game.cursor(), 0);
        // The human move is still stored but not on the board
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.board().get(4), Cell::Empty);
    }

    #[test]
    fn test_jump_back_to_tail_reschedules() {
        let mut game = controller();
        game.submit_human_move(4);
        assert!(game.jump_to(0));
        assert!(!game.is_thinking());
        assert_eq!(game.poll_at(later()), None);

        // Return to the human move: computer to move at the tail again
        assert!(game.jump_to(1));
        assert!(game.is_thinking());
        assert!(game.poll_at(later()).is_some());
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_reviewing_old_snapshot_schedules_nothing() {
        let mut game = instant_controller();
        game.submit_human_move(4);
        game.poll_at(later());
        game.submit_human_move(1);
        game.poll_at(later());
        assert_eq!(game.history().len(), 5);

        assert!(game.jump_to(1));
        assert_eq!(game.turn_state(), TurnState::Reviewing);
        assert!(!game.is_thinking());
        assert_eq!(game.poll_at(later()), None);
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_human_move_while_reviewing_branches() {
        let mut game = instant_controller();
        game.submit_human_move(4);
        game.poll_at(later());
        game.submit_human_move(1);
        game.poll_at(later());

        // Back to the computer's first reply, human plays elsewhere
        assert!(game.jump_to(2));
        assert_eq!(game.turn_state(), TurnState::HumanTurn);
        let free = game.board().empty_cells().next().unwrap();
        assert!(game.submit_human_move(free));
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.cursor(), 3);
        assert!(game.is_thinking());
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut game = controller();
        assert_eq!(
            game.try_jump_to(3),
            Err(HistoryError::OutOfRange { target: 3, len: 1 })
        );
        assert!(!game.jump_to(1));
        assert_eq!(game.cursor(), 0);
    }

    #[test]
    fn test_undo_after_computer_reply_returns_to_human_turn() {
        let mut game = instant_controller();
        game.submit_human_move(4);
        game.poll_at(later());
        assert_eq!(game.cursor(), 2);

        game.undo();
        assert_eq!(game.cursor(), 0);
        assert_eq!(game.turn_state(), TurnState::HumanTurn);
    }

    #[test]
    fn test_execute_dispatches_commands() {
        let mut game = controller();
        assert!(game.execute(Command::Move(4)).is_ok());
        assert_eq!(
            game.execute(Command::Move(0)),
            Err(GameError::InvalidMove(MoveError::ComputerThinking))
        );
        assert!(game.execute(Command::Undo).is_ok());
        assert_eq!(
            game.execute(Command::JumpTo(7)),
            Err(GameError::InvalidNavigation(HistoryError::OutOfRange {
                target: 7,
                len: 2
            }))
        );
        assert!(game.execute(Command::Reset).is_ok());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_computer_never_loses_full_game() {
        // Human plays the lowest free cell every turn
        let mut game = instant_controller();
        while !game.is_game_over() {
            let idx = game.board().empty_cells().next().unwrap();
            assert!(game.submit_human_move(idx));
            game.poll_at(later());
        }
        assert_ne!(game.winner(), Some(Player::Human));
        assert!(!game.submit_human_move(0));
        assert_eq!(game.turn_state(), TurnState::Terminal);
    }
}
