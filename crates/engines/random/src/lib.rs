//! Random Move Reversi Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (any searching engine should easily beat this)
//! - Fast self-play when exercising the game controller and match runner

use rand::seq::SliceRandom;
use rand::thread_rng;
use reversi_core::{legal_moves_into, Board, Engine, Player, SearchResult};


/// A Reversi engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        let mut moves = Vec::with_capacity(32);
        legal_moves_into(board, player, &mut moves);

        self.nodes = 1;

        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0.0,
            depth: 0,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
