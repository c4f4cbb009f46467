//! Search and evaluation settings.
//!
//! A [`SearchConfig`] is built once per session (defaults, or a TOML file)
//! and passed by reference into the search and the evaluator.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eval::EvalTerm;

/// Lowest and highest supported difficulty.
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Errors raised while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Difficulty {0} out of range (must be 1-5)")]
    Difficulty(u8),

    #[error("Endgame threshold {0} out of range (must be 1-64)")]
    EndgameThreshold(u32),

    #[error("Weight for {term:?} must be finite, got {weight}")]
    Weight { term: EvalTerm, weight: f64 },
}

/// Tree search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Full minimax, every branch visited
    Minimax,
    /// Minimax with alpha-beta pruning; same choice, fewer nodes
    #[default]
    AlphaBeta,
}

impl Algorithm {
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Minimax => "Minimax",
            Algorithm::AlphaBeta => "Alpha-Beta",
        }
    }
}

/// Toggle and weight of one evaluation term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TermConfig {
    pub enabled: bool,
    pub weight: f64,
}

/// A term table as written in TOML; missing keys keep the default term's value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TermOverride {
    enabled: Option<bool>,
    weight: Option<f64>,
}

impl TermOverride {
    fn apply(self, term: &mut TermConfig) {
        if let Some(enabled) = self.enabled {
            term.enabled = enabled;
        }
        if let Some(weight) = self.weight {
            term.weight = weight;
        }
    }
}

impl TermConfig {
    pub const fn on(weight: f64) -> Self {
        Self {
            enabled: true,
            weight,
        }
    }

    pub const fn off(weight: f64) -> Self {
        Self {
            enabled: false,
            weight,
        }
    }
}

/// Which evaluation terms count, and how much.
///
/// Deserialization starts from [`EvalConfig::default`], so a TOML table only
/// needs the keys it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "EvalOverride")]
pub struct EvalConfig {
    /// Disc count at which endgame reweighting kicks in
    pub endgame_threshold: u32,
    pub position: TermConfig,
    pub mobility: TermConfig,
    pub stability: TermConfig,
    pub frontier: TermConfig,
    pub parity: TermConfig,
    pub corner: TermConfig,
    pub disc_count: TermConfig,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            endgame_threshold: 50,
            position: TermConfig::on(1.0),
            mobility: TermConfig::on(0.5),
            stability: TermConfig::on(0.8),
            frontier: TermConfig::on(0.4),
            parity: TermConfig::on(0.6),
            corner: TermConfig::on(2.0),
            disc_count: TermConfig::off(0.3),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EvalOverride {
    endgame_threshold: Option<u32>,
    position: TermOverride,
    mobility: TermOverride,
    stability: TermOverride,
    frontier: TermOverride,
    parity: TermOverride,
    corner: TermOverride,
    disc_count: TermOverride,
}

impl From<EvalOverride> for EvalConfig {
    fn from(raw: EvalOverride) -> Self {
        let mut cfg = EvalConfig::default();
        if let Some(threshold) = raw.endgame_threshold {
            cfg.endgame_threshold = threshold;
        }
        raw.position.apply(&mut cfg.position);
        raw.mobility.apply(&mut cfg.mobility);
        raw.stability.apply(&mut cfg.stability);
        raw.frontier.apply(&mut cfg.frontier);
        raw.parity.apply(&mut cfg.parity);
        raw.corner.apply(&mut cfg.corner);
        raw.disc_count.apply(&mut cfg.disc_count);
        cfg
    }
}

impl EvalConfig {
    pub fn term(&self, term: EvalTerm) -> TermConfig {
        match term {
            EvalTerm::Position => self.position,
            EvalTerm::Mobility => self.mobility,
            EvalTerm::Stability => self.stability,
            EvalTerm::Frontier => self.frontier,
            EvalTerm::Parity => self.parity,
            EvalTerm::Corner => self.corner,
            EvalTerm::DiscCount => self.disc_count,
        }
    }

    pub fn term_mut(&mut self, term: EvalTerm) -> &mut TermConfig {
        match term {
            EvalTerm::Position => &mut self.position,
            EvalTerm::Mobility => &mut self.mobility,
            EvalTerm::Stability => &mut self.stability,
            EvalTerm::Frontier => &mut self.frontier,
            EvalTerm::Parity => &mut self.parity,
            EvalTerm::Corner => &mut self.corner,
            EvalTerm::DiscCount => &mut self.disc_count,
        }
    }

    /// Only `term` enabled, with its current weight. Handy for isolating one heuristic.
    pub fn only(term: EvalTerm) -> Self {
        let mut cfg = Self::default();
        for t in EvalTerm::ALL {
            cfg.term_mut(t).enabled = t == term;
        }
        cfg
    }
}

/// Everything the computer player needs to pick a move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 1 plays randomly, 2-5 search
    pub difficulty: u8,
    pub algorithm: Algorithm,
    /// Score root moves on the rayon pool; the chosen move is unchanged
    pub parallel_root: bool,
    pub eval: EvalConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            difficulty: 3,
            algorithm: Algorithm::AlphaBeta,
            parallel_root: false,
            eval: EvalConfig::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_parallel_root(mut self, parallel_root: bool) -> Self {
        self.parallel_root = parallel_root;
        self
    }

    /// Search depth in plies: `min(difficulty + 5, 5)`.
    ///
    /// Note that this is 5 for every difficulty, including out-of-range ones.
    pub fn max_depth(&self) -> u8 {
        self.difficulty.saturating_add(5).min(5)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
            return Err(ConfigError::Difficulty(self.difficulty));
        }
        if !(1..=64).contains(&self.eval.endgame_threshold) {
            return Err(ConfigError::EndgameThreshold(self.eval.endgame_threshold));
        }
        for term in EvalTerm::ALL {
            let weight = self.eval.term(term).weight;
            if !weight.is_finite() {
                return Err(ConfigError::Weight { term, weight });
            }
        }
        Ok(())
    }

    /// Parses and validates a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: SearchConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
