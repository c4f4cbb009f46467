use std::fmt;
use std::str::FromStr;

use crate::error::{ReversiError, ReversiResult};
use crate::types::*;

/// An 8x8 Reversi board stored row-major.
///
/// Boards are plain `Copy` values: the rules engine always returns a new
/// board, so search branches never share mutable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub cells: [Cell; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position: White on (3,3) and (4,4), Black on (3,4) and (4,3).
    pub fn new() -> Self {
        let mut b = Board::empty();
        b.set(Move::new(3, 3), Cell::White);
        b.set(Move::new(4, 4), Cell::White);
        b.set(Move::new(3, 4), Cell::Black);
        b.set(Move::new(4, 3), Cell::Black);
        b
    }

    pub fn empty() -> Self {
        Board {
            cells: [Cell::Empty; 64],
        }
    }

    /// Builds a board from a nested grid, rejecting anything that is not 8x8.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> ReversiResult<Self> {
        Self::from_grid(&rows)
    }

    pub fn from_grid(rows: &[Vec<Cell>]) -> ReversiResult<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(ReversiError::MalformedBoard {
                reason: format!("expected {BOARD_SIZE} rows, got {}", rows.len()),
            });
        }
        let mut b = Board::empty();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(ReversiError::MalformedBoard {
                    reason: format!("row {r} has {} cells, expected {BOARD_SIZE}", row.len()),
                });
            }
            for (c, &cell) in row.iter().enumerate() {
                b.cells[r * BOARD_SIZE + c] = cell;
            }
        }
        Ok(b)
    }

    /// Bounds-checked cell access.
    pub fn cell_at(&self, row: usize, col: usize) -> ReversiResult<Cell> {
        Move::try_new(row, col)
            .map(|m| self.get(m))
            .ok_or(ReversiError::OutOfRange { row, col })
    }

    #[inline]
    pub fn get(&self, m: Move) -> Cell {
        self.cells[m.index()]
    }

    #[inline]
    pub fn set(&mut self, m: Move, cell: Cell) {
        self.cells[m.index()] = cell;
    }

    /// Every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        Move::all().map(move |m| (m, self.get(m)))
    }

    pub fn count(&self, cell: Cell) -> u32 {
        self.cells.iter().filter(|&&c| c == cell).count() as u32
    }

    pub fn counts(&self) -> DiscCounts {
        let mut counts = DiscCounts::default();
        for &cell in &self.cells {
            match cell {
                Cell::Black => counts.black += 1,
                Cell::White => counts.white += 1,
                Cell::Empty => {}
            }
        }
        counts
    }

    /// Total number of discs of either colour.
    pub fn disc_count(&self) -> u32 {
        64 - self.empty_count()
    }

    pub fn empty_count(&self) -> u32 {
        self.count(Cell::Empty)
    }

    /// Rows as nested vectors, the shape UI layers usually render from.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(BOARD_SIZE).map(|r| r.to_vec()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            let line: String = row.iter().map(|c| c.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parses 64 cell characters (`.` empty, `B`/`X` black, `W`/`O` white).
/// Whitespace is ignored so boards can be written one row per line.
impl FromStr for Board {
    type Err = ReversiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut b = Board::empty();
        let mut n = 0usize;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = Cell::from_char(ch).ok_or_else(|| ReversiError::MalformedBoard {
                reason: format!("unknown cell character '{ch}'"),
            })?;
            if n >= 64 {
                return Err(ReversiError::MalformedBoard {
                    reason: "more than 64 cells".to_string(),
                });
            }
            b.cells[n] = cell;
            n += 1;
        }
        if n != 64 {
            return Err(ReversiError::MalformedBoard {
                reason: format!("expected 64 cells, got {n}"),
            });
        }
        Ok(b)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
