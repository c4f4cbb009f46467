//! Minimax and alpha-beta search over copy-on-write boards.
//!
//! White is always the maximising side and Black the minimising side, matching
//! the evaluator's point of view. Every node owns its board, so sibling
//! branches never observe each other's speculative moves.

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use rayon::prelude::*;
use reversi_core::{apply_move, legal_moves, Board, Move, Player};
use tracing::{debug, warn};

use crate::config::{Algorithm, EvalConfig, SearchConfig};
use crate::eval::evaluate;

/// Result from a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// Chosen move and its backed-up score (None if no legal moves were given)
    pub best_move: Option<(Move, f64)>,
    /// Nodes visited below the root
    pub nodes: u64,
}

/// Picks the computer's (White's) move from `legal_moves`.
///
/// Returns `None` when `legal_moves` is empty; callers should check for a
/// pass before asking.
pub fn choose_move(board: &Board, legal_moves: &[Move], config: &SearchConfig) -> Option<Move> {
    choose_move_for(board, Player::White, legal_moves, config, &mut thread_rng())
}

/// Picks a move for `player`. White maximises the evaluation, Black minimises it.
pub fn choose_move_for<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    legal_moves: &[Move],
    config: &SearchConfig,
    rng: &mut R,
) -> Option<Move> {
    search_moves(board, player, legal_moves, config, rng)
        .best_move
        .map(|(mv, _)| mv)
}

/// Runs the configured search and reports the score and node count as well.
///
/// Difficulty 1 skips the search and draws uniformly from `legal_moves`.
pub fn search_moves<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    legal_moves: &[Move],
    config: &SearchConfig,
    rng: &mut R,
) -> SearchOutcome {
    if legal_moves.is_empty() {
        warn!(%player, "search called without legal moves");
        return SearchOutcome {
            best_move: None,
            nodes: 0,
        };
    }

    if config.difficulty == 1 {
        let best_move = legal_moves.choose(rng).map(|&mv| (mv, 0.0));
        if let Some((mv, _)) = best_move {
            debug!(%player, %mv, "random move selected");
        }
        return SearchOutcome {
            best_move,
            nodes: 0,
        };
    }

    let depth = config.max_depth();
    let outcome = if config.parallel_root {
        pick_best_move_parallel(board, player, legal_moves, depth, config.algorithm, &config.eval)
    } else {
        pick_best_move(board, player, legal_moves, depth, config.algorithm, &config.eval)
    };

    if let Some((mv, score)) = outcome.best_move {
        debug!(
            %player,
            %mv,
            score,
            depth,
            nodes = outcome.nodes,
            algorithm = config.algorithm.label(),
            "search finished"
        );
    }
    outcome
}

#[inline]
fn improves(maximizing: bool, score: f64, best: Option<(Move, f64)>) -> bool {
    match best {
        None => true,
        Some((_, best_score)) if maximizing => score > best_score,
        Some((_, best_score)) => score < best_score,
    }
}

/// Searches each root move in the given order and keeps the first best one.
///
/// Later moves only replace the current choice when strictly better, so ties
/// resolve to the earliest move.
pub fn pick_best_move(
    board: &Board,
    player: Player,
    legal_moves: &[Move],
    depth: u8,
    algorithm: Algorithm,
    eval: &EvalConfig,
) -> SearchOutcome {
    let maximizing = player == Player::White;
    let mut nodes = 0u64;
    let mut best: Option<(Move, f64)> = None;
    let mut alpha = f64::NEG_INFINITY;
    let mut beta = f64::INFINITY;

    for &mv in legal_moves {
        let child = match apply_move(board, mv, player) {
            Ok(child) => child,
            Err(err) => {
                warn!(%err, "skipping illegal root move");
                continue;
            }
        };

        let score = match algorithm {
            Algorithm::Minimax => minimax(&child, depth.saturating_sub(1), !maximizing, eval, &mut nodes),
            Algorithm::AlphaBeta => alpha_beta(
                &child,
                depth.saturating_sub(1),
                alpha,
                beta,
                !maximizing,
                eval,
                &mut nodes,
            ),
        };

        if improves(maximizing, score, best) {
            best = Some((mv, score));
        }
        if let Some((_, best_score)) = best {
            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
        }
    }

    SearchOutcome {
        best_move: best,
        nodes,
    }
}

/// Like [`pick_best_move`], but scores the root moves on the rayon pool.
///
/// Every child gets a full window so its score is exact, and the choice is
/// made afterwards in the given order. The chosen move is the same one the
/// sequential search returns.
pub fn pick_best_move_parallel(
    board: &Board,
    player: Player,
    legal_moves: &[Move],
    depth: u8,
    algorithm: Algorithm,
    eval: &EvalConfig,
) -> SearchOutcome {
    let maximizing = player == Player::White;

    let scored: Vec<Option<(Move, f64, u64)>> = legal_moves
        .par_iter()
        .map(|&mv| {
            let child = apply_move(board, mv, player).ok()?;
            let mut nodes = 0u64;
            let score = match algorithm {
                Algorithm::Minimax => {
                    minimax(&child, depth.saturating_sub(1), !maximizing, eval, &mut nodes)
                }
                Algorithm::AlphaBeta => alpha_beta(
                    &child,
                    depth.saturating_sub(1),
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    !maximizing,
                    eval,
                    &mut nodes,
                ),
            };
            Some((mv, score, nodes))
        })
        .collect();

    let mut best: Option<(Move, f64)> = None;
    let mut nodes = 0u64;
    for (mv, score, n) in scored.into_iter().flatten() {
        nodes += n;
        if improves(maximizing, score, best) {
            best = Some((mv, score));
        }
    }

    SearchOutcome {
        best_move: best,
        nodes,
    }
}

#[inline]
fn side(maximizing: bool) -> Player {
    if maximizing {
        Player::White
    } else {
        Player::Black
    }
}

/// Plain minimax. White maximises, Black minimises.
///
/// Leaves are depth 0 or a side with no legal move; both return the static evaluation.
pub fn minimax(board: &Board, depth: u8, maximizing: bool, eval: &EvalConfig, nodes: &mut u64) -> f64 {
    *nodes += 1;

    if depth == 0 {
        return evaluate(board, eval);
    }

    let player = side(maximizing);
    let moves = legal_moves(board, player);
    if moves.is_empty() {
        return evaluate(board, eval);
    }

    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for mv in moves {
        let Ok(child) = apply_move(board, mv, player) else {
            continue;
        };
        let score = minimax(&child, depth - 1, !maximizing, eval, nodes);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Minimax with alpha-beta pruning (fail-soft).
///
/// Siblings stop being searched once `beta <= alpha`.
pub fn alpha_beta(
    board: &Board,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    eval: &EvalConfig,
    nodes: &mut u64,
) -> f64 {
    *nodes += 1;

    if depth == 0 {
        return evaluate(board, eval);
    }

    let player = side(maximizing);
    let moves = legal_moves(board, player);
    if moves.is_empty() {
        return evaluate(board, eval);
    }

    if maximizing {
        let mut max_score = f64::NEG_INFINITY;
        for mv in moves {
            let Ok(child) = apply_move(board, mv, player) else {
                continue;
            };
            let score = alpha_beta(&child, depth - 1, alpha, beta, false, eval, nodes);
            max_score = max_score.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        max_score
    } else {
        let mut min_score = f64::INFINITY;
        for mv in moves {
            let Ok(child) = apply_move(board, mv, player) else {
                continue;
            };
            let score = alpha_beta(&child, depth - 1, alpha, beta, true, eval, nodes);
            min_score = min_score.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        min_score
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
