//! Static board evaluation, always from White's perspective.
//!
//! The score is a weighted sum of independent heuristics. Each term is a
//! record in [`TERMS`] holding the raw scoring function and the factor its
//! weight is multiplied by once the board reaches the endgame threshold.

use reversi_core::{legal_moves, Board, Cell, Direction, Move, Player};
use tracing::warn;

use crate::config::EvalConfig;

/// Positional value of each cell, row-major.
pub const POSITION_WEIGHTS: [[i32; 8]; 8] = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];

pub const CORNERS: [Move; 4] = [
    Move::new(0, 0),
    Move::new(0, 7),
    Move::new(7, 0),
    Move::new(7, 7),
];

/// Value of one corner disc in [`corner_score`].
pub const CORNER_VALUE: f64 = 25.0;

/// The heuristics the evaluator can combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalTerm {
    Position,
    Mobility,
    Stability,
    Frontier,
    Parity,
    Corner,
    DiscCount,
}

impl EvalTerm {
    pub const ALL: [EvalTerm; 7] = [
        EvalTerm::Position,
        EvalTerm::Mobility,
        EvalTerm::Stability,
        EvalTerm::Frontier,
        EvalTerm::Parity,
        EvalTerm::Corner,
        EvalTerm::DiscCount,
    ];
}

/// One row of the evaluation table.
pub struct TermSpec {
    pub term: EvalTerm,
    pub score: fn(&Board) -> f64,
    /// Weight multiplier once the disc count reaches the endgame threshold
    pub endgame_factor: f64,
}

/// Evaluation order is fixed; scores are summed in this order.
pub const TERMS: [TermSpec; 7] = [
    TermSpec {
        term: EvalTerm::Position,
        score: position_score,
        endgame_factor: 2.0,
    },
    TermSpec {
        term: EvalTerm::Mobility,
        score: mobility_score,
        endgame_factor: 0.5,
    },
    TermSpec {
        term: EvalTerm::Stability,
        score: stability_score,
        endgame_factor: 1.0,
    },
    TermSpec {
        term: EvalTerm::Frontier,
        score: frontier_score,
        endgame_factor: 1.0,
    },
    TermSpec {
        term: EvalTerm::Parity,
        score: parity_score,
        endgame_factor: 1.0,
    },
    TermSpec {
        term: EvalTerm::Corner,
        score: corner_score,
        endgame_factor: 1.5,
    },
    TermSpec {
        term: EvalTerm::DiscCount,
        score: disc_score,
        endgame_factor: 1.0,
    },
];

/// Evaluates the board from White's perspective.
///
/// Returns a heuristic score:
/// - Positive = good for White
/// - Negative = good for Black
pub fn evaluate(board: &Board, config: &EvalConfig) -> f64 {
    let endgame = is_endgame(board, config);
    let mut score = 0.0;

    for spec in &TERMS {
        let term = config.term(spec.term);
        if !term.enabled {
            continue;
        }
        let weight = if endgame {
            term.weight * spec.endgame_factor
        } else {
            term.weight
        };
        score += (spec.score)(board) * weight;
    }

    score
}

/// Evaluates an untyped grid. Anything that is not 8x8 scores a neutral 0.
pub fn evaluate_grid(rows: &[Vec<Cell>], config: &EvalConfig) -> f64 {
    match Board::from_grid(rows) {
        Ok(board) => evaluate(&board, config),
        Err(err) => {
            warn!(%err, "scoring malformed board as neutral");
            0.0
        }
    }
}

pub fn is_endgame(board: &Board, config: &EvalConfig) -> bool {
    board.disc_count() >= config.endgame_threshold
}

#[inline]
fn sign(cell: Cell) -> f64 {
    match cell {
        Cell::White => 1.0,
        Cell::Black => -1.0,
        Cell::Empty => 0.0,
    }
}

/// Positional table value of White discs minus that of Black discs.
pub fn position_score(board: &Board) -> f64 {
    board
        .iter()
        .map(|(m, cell)| sign(cell) * POSITION_WEIGHTS[m.row as usize][m.col as usize] as f64)
        .sum()
}

/// White's legal move count minus Black's.
pub fn mobility_score(board: &Board) -> f64 {
    let white = legal_moves(board, Player::White).len() as f64;
    let black = legal_moves(board, Player::Black).len() as f64;
    white - black
}

/// Stable White discs minus stable Black discs.
pub fn stability_score(board: &Board) -> f64 {
    board
        .iter()
        .filter(|&(m, cell)| !cell.is_empty() && is_stable(board, m))
        .map(|(_, cell)| sign(cell))
        .sum()
}

/// A disc counts as stable when at least 6 of its 8 neighbours are off the
/// board or hold a disc of the same colour.
pub fn is_stable(board: &Board, m: Move) -> bool {
    let Ok(own) = board.cell_at(m.row as usize, m.col as usize) else {
        return false;
    };
    let anchored = Direction::ALL
        .iter()
        .filter(|&&dir| match m.step(dir) {
            None => true,
            Some(n) => board.get(n) == own,
        })
        .count();
    anchored >= 6
}

/// Black's frontier total minus White's: fewer exposed White discs is better for White.
pub fn frontier_score(board: &Board) -> f64 {
    let mut white = 0u32;
    let mut black = 0u32;
    for (m, cell) in board.iter() {
        match cell {
            Cell::White => white += frontier_count(board, m),
            Cell::Black => black += frontier_count(board, m),
            Cell::Empty => {}
        }
    }
    black as f64 - white as f64
}

/// Number of empty cells around `m`.
pub fn frontier_count(board: &Board, m: Move) -> u32 {
    Direction::ALL
        .iter()
        .filter_map(|&dir| m.step(dir))
        .filter(|&n| board.get(n).is_empty())
        .count() as u32
}

/// +1 when an even number of cells is left, -1 otherwise.
pub fn parity_score(board: &Board) -> f64 {
    if board.empty_count() % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// +25 per White corner, -25 per Black corner.
pub fn corner_score(board: &Board) -> f64 {
    CORNERS
        .iter()
        .map(|&m| sign(board.get(m)) * CORNER_VALUE)
        .sum()
}

/// White discs minus Black discs.
pub fn disc_score(board: &Board) -> f64 {
    let counts = board.counts();
    counts.white as f64 - counts.black as f64
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
