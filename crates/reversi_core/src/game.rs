//! Turn sequencing: passes, end-of-game detection and the winner.
//!
//! The controller owns the current board and the side to move. Rendering,
//! notices and delays belong to whoever drives it.

use tracing::trace;

use crate::{
    Engine,
    board::Board,
    error::{ReversiError, ReversiResult},
    movegen::{apply_move, has_legal_move, legal_moves},
    types::{DiscCounts, Move, Player},
};

/// Winner of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Black,
    White,
    Draw,
}

/// Terminal result with the final disc counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Winner,
    pub counts: DiscCounts,
}

impl GameResult {
    /// The side with strictly more discs wins; equal counts are a draw.
    pub fn from_board(board: &Board) -> Self {
        let counts = board.counts();
        let winner = if counts.black > counts.white {
            Winner::Black
        } else if counts.white > counts.black {
            Winner::White
        } else {
            Winner::Draw
        };
        Self { winner, counts }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished(GameResult),
}

/// What happened after a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The opponent is now to move.
    Next(Player),
    /// `passed` had no legal move; the side that just moved keeps the turn.
    Pass { passed: Player },
    /// Neither side can move.
    Finished(GameResult),
}

/// A single game session.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard start: initial board, Black (the human) to move.
    pub fn new() -> Self {
        Self::from_position(Board::new(), Player::Black)
    }

    /// Resumes from an arbitrary position. If `to_move` has no legal move the
    /// turn is handed over immediately, and a dead position is finished.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let mut game = Self {
            board,
            to_move,
            status: GameStatus::InProgress,
        };
        if !has_legal_move(&board, to_move) {
            if has_legal_move(&board, to_move.opponent()) {
                game.to_move = to_move.opponent();
            } else {
                game.status = GameStatus::Finished(GameResult::from_board(&board));
            }
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Finished(_))
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::Finished(r) => Some(r),
            GameStatus::InProgress => None,
        }
    }

    /// Legal moves for the side to move, empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        legal_moves(&self.board, self.to_move)
    }

    /// Plays `mv` for the side to move and advances the turn.
    ///
    /// Illegal cells are rejected with `InvalidMove` and leave the game untouched.
    pub fn play(&mut self, mv: Move) -> ReversiResult<TurnOutcome> {
        if self.is_over() {
            return Err(ReversiError::GameOver);
        }

        let mover = self.to_move;
        self.board = apply_move(&self.board, mv, mover)?;
        trace!(%mover, %mv, "move applied");

        let next = mover.opponent();
        if has_legal_move(&self.board, next) {
            self.to_move = next;
            return Ok(TurnOutcome::Next(next));
        }

        if has_legal_move(&self.board, mover) {
            trace!(passed = %next, "pass");
            return Ok(TurnOutcome::Pass { passed: next });
        }

        let result = GameResult::from_board(&self.board);
        self.status = GameStatus::Finished(result);
        trace!(?result, "game over");
        Ok(TurnOutcome::Finished(result))
    }

    /// Asks `engine` for the side to move and plays its answer.
    ///
    /// Callers are expected to check `legal_moves()` first; a side without
    /// moves yields `EmptyMoveSet` instead of calling the engine.
    pub fn play_engine(&mut self, engine: &mut dyn Engine) -> ReversiResult<(Move, TurnOutcome)> {
        if self.is_over() {
            return Err(ReversiError::GameOver);
        }
        let player = self.to_move;
        if !has_legal_move(&self.board, player) {
            return Err(ReversiError::EmptyMoveSet { player });
        }

        let result = engine.search(&self.board, player);
        let mv = result
            .best_move
            .ok_or(ReversiError::EmptyMoveSet { player })?;
        let outcome = self.play(mv)?;
        Ok((mv, outcome))
    }

    /// Back to the initial position with Black to move.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
