//! Board structure: nine cells, row-major

use std::fmt;
use std::str::FromStr;

use super::{Cell, Player, Pos, TOTAL_CELLS};
use crate::error::ParseBoardError;

/// Game board
///
/// Boards are small `Copy` values. A stored board is never edited in place;
/// [`Board::with_mark`] produces the successor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    pub const fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    /// Get cell at index. Out-of-range indices read as empty.
    #[inline]
    pub fn get(&self, idx: usize) -> Cell {
        self.cells.get(idx).copied().unwrap_or(Cell::Empty)
    }

    #[inline]
    pub fn get_pos(&self, pos: Pos) -> Cell {
        self.get(pos.to_index())
    }

    /// Check if index is on the board and empty
    #[inline]
    pub fn is_empty(&self, idx: usize) -> bool {
        idx < TOTAL_CELLS && self.cells[idx].is_empty()
    }

    /// Copy of this board with `player`'s mark at `idx`
    ///
    /// Callers check emptiness first; an occupied cell is overwritten.
    #[inline]
    #[must_use]
    pub fn with_mark(&self, idx: usize, player: Player) -> Board {
        debug_assert!(idx < TOTAL_CELLS);
        let mut next = *self;
        next.cells[idx] = Cell::Mark(player);
        next
    }

    /// Empty cell indices in ascending order
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| idx)
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        TOTAL_CELLS - self.empty_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }
}

/// Parses nine cells: `X`/`x` human, `O`/`o` computer, `.`, `-` or `_` empty.
/// Whitespace is ignored so boards can be written as three rows.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; TOTAL_CELLS];
        let mut count = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch {
                'X' | 'x' => Cell::Mark(Player::Human),
                'O' | 'o' => Cell::Mark(Player::Computer),
                '.' | '-' | '_' => Cell::Empty,
                other => return Err(ParseBoardError::InvalidChar(other)),
            };
            if count < TOTAL_CELLS {
                cells[count] = cell;
            }
            count += 1;
        }

        if count != TOTAL_CELLS {
            return Err(ParseBoardError::WrongLength(count));
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, cell) in self.cells.iter().enumerate() {
            let ch = match cell {
                Cell::Empty => '.',
                Cell::Mark(player) => player.symbol(),
            };
            write!(f, "{ch}")?;
            if idx % 3 == 2 && idx + 1 < TOTAL_CELLS {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
