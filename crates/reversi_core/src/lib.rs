pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every computer opponent (search, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move (None if the side to move has no legal moves)
    pub best_move: Option<Move>,
    /// Heuristic score from White's perspective
    pub score: f64,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Trait that all Reversi engines must implement.
///
/// This allows the game controller and the match runner to swap between the
/// heuristic search engine and baselines such as random play.
pub trait Engine: Send {
    /// Pick a move for `player` on `board`.
    ///
    /// # Returns
    /// SearchResult containing the chosen move, score, and statistics
    fn search(&mut self, board: &Board, player: Player) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "reversi-ai"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
