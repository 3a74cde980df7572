//! History store: the sequence of board snapshots and the cursor into it
//!
//! Snapshot 0 is always the empty root. Each later snapshot differs from its
//! predecessor by exactly one mark, placed by the predecessor's `next_player`.
//! Navigation only moves the cursor; a move made while the cursor is behind
//! the tail discards everything after the cursor first (branch-and-truncate).
//!
//! Every operation either succeeds completely or returns an error and leaves
//! the store untouched.

use tracing::{debug, info};

use crate::board::{Board, Player, Pos};
use crate::error::HistoryError;
use crate::rules::{evaluate, Outcome};

/// One immutable board state plus whose turn is next and how it was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub next_player: Player,
    pub last_move: Option<usize>,
    pub was_computer_move: bool,
}

impl Snapshot {
    /// Empty board, human to move
    pub const fn root() -> Self {
        Self {
            board: Board::new(),
            next_player: Player::Human,
            last_move: None,
            was_computer_move: false,
        }
    }

    /// Outcome derived from the board
    #[inline]
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Player who made `last_move`
    pub fn mover(&self) -> Option<Player> {
        self.last_move.map(|_| self.next_player.opponent())
    }

    /// Move-list label: `Game Start` or e.g. `X → (2,3)`
    pub fn describe(&self) -> String {
        match (self.last_move, self.mover()) {
            (Some(idx), Some(player)) => format!("{} → {}", player, Pos::from_index(idx)),
            _ => "Game Start".to_string(),
        }
    }

    /// Successor snapshot with `next_player`'s mark at `idx`
    fn play(&self, idx: usize) -> Self {
        let player = self.next_player;
        Self {
            board: self.board.with_mark(idx, player),
            next_player: player.opponent(),
            last_move: Some(idx),
            was_computer_move: player == Player::Computer,
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::root()
    }
}

/// Ordered snapshots and a cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::root()],
            cursor: 0,
        }
    }

    /// Back to a single root snapshot
    pub fn reset(&mut self) {
        self.snapshots.clear();
        self.snapshots.push(Snapshot::root());
        self.cursor = 0;
        info!("history reset");
    }

    /// Play `idx` for the side to move at the cursor.
    ///
    /// Snapshots after the cursor are discarded, the new snapshot is appended
    /// and the cursor moves to it. Fails if `idx` is off the board or taken,
    /// or the game at the cursor is already decided.
    pub fn append_move(&mut self, idx: usize) -> Result<&Snapshot, HistoryError> {
        let current = self.current();
        if idx >= current.board.cells().len() {
            return Err(HistoryError::InvalidPosition(idx));
        }
        if !current.board.is_empty(idx) {
            return Err(HistoryError::Occupied(idx));
        }
        if current.outcome().is_over() {
            return Err(HistoryError::GameOver);
        }

        let player = current.next_player;
        let next = current.play(idx);
        let discarded = self.snapshots.len() - self.cursor - 1;
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor += 1;

        if discarded > 0 {
            debug!(discarded, "branched history");
        }
        info!(
            position = idx,
            player = %player,
            cursor = self.cursor,
            "move appended"
        );
        Ok(&self.snapshots[self.cursor])
    }

    /// Step back one snapshot, or two when the current one is a computer
    /// reply. Returns the new cursor; a no-op at the root.
    pub fn undo(&mut self) -> usize {
        if self.cursor == 0 {
            return 0;
        }

        let steps = if self.current().was_computer_move { 2 } else { 1 };
        self.cursor = self.cursor.saturating_sub(steps);
        debug!(cursor = self.cursor, steps, "undo");
        self.cursor
    }

    /// Move the cursor to `index`
    pub fn jump_to(&mut self, index: usize) -> Result<&Snapshot, HistoryError> {
        if index >= self.snapshots.len() {
            return Err(HistoryError::OutOfRange {
                target: index,
                len: self.snapshots.len(),
            });
        }
        self.cursor = index;
        debug!(cursor = index, "jumped");
        Ok(&self.snapshots[index])
    }

    /// Snapshot at the cursor
    #[inline]
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// All snapshots, root first
    #[inline]
    pub fn all(&self) -> &[Snapshot] {
        &self.snapshots
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the root snapshot is never removed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Cursor on the newest snapshot
    #[inline]
    pub fn is_at_tail(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
