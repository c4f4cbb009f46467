//! Classical Reversi Engine
//!
//! Depth-limited minimax or alpha-beta search over a weighted, multi-term
//! heuristic evaluation. This is the computer opponent of the game.

mod config;
mod eval;
mod search;

use rand::rngs::StdRng;
use rand::SeedableRng;
use reversi_core::{legal_moves, Board, Engine, Player, SearchResult};

/// Classical Reversi engine.
///
/// This engine uses:
/// - Minimax or alpha-beta search, depth from the configured difficulty
/// - Position, mobility, stability, frontier, parity and corner heuristics
/// - A uniformly random move at difficulty 1
#[derive(Debug, Clone)]
pub struct ClassicalEngine {
    config: SearchConfig,
    name: String,
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for ClassicalEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl ClassicalEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with a fixed random seed, so difficulty-1 games are reproducible.
    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SearchConfig, rng: StdRng) -> Self {
        let name = format!("{} d{}", config.algorithm.label(), config.difficulty);
        Self {
            config,
            name,
            rng,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        self.nodes = 0;
        let moves = legal_moves(board, player);
        let outcome = search::search_moves(board, player, &moves, &self.config, &mut self.rng);
        self.nodes = outcome.nodes;

        let depth = if self.config.difficulty == 1 {
            0
        } else {
            self.config.max_depth()
        };

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0.0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use config::{
    Algorithm, ConfigError, EvalConfig, SearchConfig, TermConfig, MAX_DIFFICULTY, MIN_DIFFICULTY,
};
pub use eval::{
    corner_score, disc_score, evaluate, evaluate_grid, frontier_count, frontier_score,
    is_endgame, is_stable, mobility_score, parity_score, position_score, stability_score,
    EvalTerm, TermSpec, CORNERS, CORNER_VALUE, POSITION_WEIGHTS, TERMS,
};
pub use search::{
    alpha_beta, choose_move, choose_move_for, minimax, pick_best_move, pick_best_move_parallel,
    search_moves, SearchOutcome,
};
