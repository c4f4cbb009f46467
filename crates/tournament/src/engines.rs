//! Engine construction from command-line specs.

use classical_engine::{Algorithm, ClassicalEngine, SearchConfig};
use random_engine::RandomEngine;
use reversi_core::Engine;

use crate::error::TournamentError;

/// Builds an engine from `kind[:difficulty]`.
///
/// `classical` keeps the algorithm of `base`; `minimax` and `alphabeta`
/// override it. Every other setting (weights, parallel root) comes from
/// `base`.
pub fn create_engine(spec: &str, base: &SearchConfig) -> Result<Box<dyn Engine>, TournamentError> {
    let (kind, difficulty) = match spec.split_once(':') {
        Some((kind, level)) => {
            let level = level
                .trim()
                .parse::<u8>()
                .map_err(|_| TournamentError::BadDifficulty(spec.to_string()))?;
            (kind, Some(level))
        }
        None => (spec, None),
    };

    let mut config = *base;
    match kind.trim().to_lowercase().as_str() {
        "random" => return Ok(Box::new(RandomEngine::new())),
        "classical" | "classic" => {}
        "minimax" => config.algorithm = Algorithm::Minimax,
        "alphabeta" | "alpha-beta" | "ab" => config.algorithm = Algorithm::AlphaBeta,
        _ => return Err(TournamentError::UnknownEngine(spec.to_string())),
    }
    if let Some(level) = difficulty {
        config.difficulty = level;
    }
    config.validate()?;

    Ok(Box::new(ClassicalEngine::new(config)))
}

#[cfg(test)]
#[path = "engines_tests.rs"]
mod engines_tests;
