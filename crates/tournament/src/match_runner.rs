//! Match runner for playing games between engines

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use reversi_core::{Engine, Game, GameResult, Player};
use tracing::{debug, trace, warn};

use crate::error::TournamentError;
use crate::results::{GameOutcome, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Random plies played before the engines take over
    pub opening_plies: u32,
    /// Seed for the random openings
    pub seed: u64,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            alternate_colors: true,
            opening_plies: 0,
            seed: 0,
            verbose: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective. Engine1 takes Black
    /// (the first mover) in even-numbered games.
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchResult, TournamentError> {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_black = !self.config.alternate_colors || game_num % 2 == 0;
            // With alternating colors both games of a pair share an opening.
            let opening_index = if self.config.alternate_colors {
                game_num / 2
            } else {
                game_num
            };
            let start = self.opening(opening_index);

            let final_result = if engine1_black {
                self.play_game(engine1, engine2, start)?
            } else {
                self.play_game(engine2, engine1, start)?
            };

            let side = if engine1_black { Player::Black } else { Player::White };
            let outcome = GameOutcome::for_side(final_result.winner, side);
            let discs_for = final_result.counts.of(side);
            let discs_against = final_result.counts.of(side.opponent());
            result.record(outcome, discs_for, discs_against);

            debug!(game = game_num + 1, ?outcome, discs_for, discs_against, "game finished");
            if self.config.verbose {
                let color = if engine1_black { "B" } else { "W" };
                println!(
                    "Game {}/{}: {} ({}) {}-{} - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome.label(),
                    color,
                    discs_for,
                    discs_against,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        Ok(result)
    }

    /// Play a single game from `start` until neither side can move.
    pub fn play_game(
        &self,
        black: &mut dyn Engine,
        white: &mut dyn Engine,
        start: Game,
    ) -> Result<GameResult, TournamentError> {
        let mut game = start;
        black.new_game();
        white.new_game();

        loop {
            if let Some(result) = game.result() {
                return Ok(result);
            }

            let engine: &mut dyn Engine = match game.to_move() {
                Player::Black => &mut *black,
                Player::White => &mut *white,
            };
            let (mv, outcome) = match game.play_engine(engine) {
                Ok(played) => played,
                Err(source) => {
                    return Err(TournamentError::Engine {
                        engine: engine.name().to_string(),
                        source,
                    });
                }
            };
            trace!(%mv, ?outcome, "engine move");
        }
    }

    /// Starting position for game `index`: the initial board followed by
    /// `opening_plies` seeded random moves.
    fn opening(&self, index: u32) -> Game {
        let mut game = Game::new();
        if self.config.opening_plies == 0 {
            return game;
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed.wrapping_add(u64::from(index)));
        for _ in 0..self.config.opening_plies {
            let moves = game.legal_moves();
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            if let Err(err) = game.play(mv) {
                warn!(%mv, %err, "opening move rejected");
                break;
            }
        }
        game
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
) -> Result<MatchResult, TournamentError> {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
