use classical_engine::ConfigError;
use reversi_core::ReversiError;
use thiserror::Error;

use crate::results::ResultsError;

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("unknown engine `{0}` (expected random, classical, minimax or alphabeta)")]
    UnknownEngine(String),

    #[error("invalid difficulty in engine spec `{0}`")]
    BadDifficulty(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{engine} failed to move: {source}")]
    Engine {
        engine: String,
        #[source]
        source: ReversiError,
    },

    #[error(transparent)]
    Results(#[from] ResultsError),
}
