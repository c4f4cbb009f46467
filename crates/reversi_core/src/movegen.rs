use crate::{
    board::Board,
    error::{ReversiError, ReversiResult},
    types::*,
};

/// Generate all legal moves for `player`, returning a freshly allocated vector.
/// Moves come out row-major, ascending.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, player, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(board: &Board, player: Player, out: &mut Vec<Move>) {
    out.clear();
    out.extend(Move::all().filter(|&m| is_legal(board, m, player)));
}

/// True if `player` has at least one legal move.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Move::all().any(|m| is_legal(board, m, player))
}

/// A move is legal when the target is empty and at least one direction captures.
pub fn is_legal(board: &Board, mv: Move, player: Player) -> bool {
    if mv.row as usize >= BOARD_SIZE || mv.col as usize >= BOARD_SIZE {
        return false;
    }
    if !board.get(mv).is_empty() {
        return false;
    }
    Direction::ALL
        .iter()
        .any(|&dir| run_length(board, mv, dir, player) > 0)
}

/// Length of the opponent run starting next to `from` in `dir` that would be
/// flipped by `player`. Zero if the run is empty, hits an empty cell, or runs
/// off the board before reaching one of `player`'s discs.
pub(crate) fn run_length(board: &Board, from: Move, dir: Direction, player: Player) -> usize {
    let own = player.cell();
    let opp = player.opponent().cell();

    let mut len = 0;
    let mut cur = from;
    while let Some(next) = cur.step(dir) {
        match board.get(next) {
            c if c == opp => {
                len += 1;
                cur = next;
            }
            c if c == own => return len,
            _ => return 0,
        }
    }
    0
}

/// The discs `player` would flip by playing `mv`, grouped by direction in scan order.
pub fn captures(board: &Board, mv: Move, player: Player) -> Vec<Move> {
    let mut out = Vec::new();
    if !is_legal(board, mv, player) {
        return out;
    }
    for dir in Direction::ALL {
        let len = run_length(board, mv, dir, player);
        let mut cur = mv;
        for _ in 0..len {
            // run_length already walked these cells, so the step cannot leave the board
            if let Some(next) = cur.step(dir) {
                out.push(next);
                cur = next;
            }
        }
    }
    out
}

/// Plays `mv` for `player` and returns the resulting board.
///
/// The input board is never touched; an illegal move yields `InvalidMove`.
pub fn apply_move(board: &Board, mv: Move, player: Player) -> ReversiResult<Board> {
    if !is_legal(board, mv, player) {
        return Err(ReversiError::InvalidMove { mv, player });
    }

    let mut next = *board;
    next.set(mv, player.cell());
    for sq in captures(board, mv, player) {
        next.set(sq, player.cell());
    }
    Ok(next)
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
