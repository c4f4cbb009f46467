//! Alpha-beta pruning must never change the chosen move.
//!
//! Random mid-game positions come from seeded playouts; each is searched with
//! plain minimax, alpha-beta and the parallel root at depths 1-4.

use classical_engine::{pick_best_move, pick_best_move_parallel, Algorithm, EvalConfig};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use reversi_core::{apply_move, has_legal_move, legal_moves, Board, Move, Player};

fn random_position(seed: u64, plies: usize) -> (Board, Player) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut player = Player::Black;
    for _ in 0..plies {
        let moves = legal_moves(&board, player);
        match moves.choose(&mut rng) {
            Some(&mv) => {
                board = apply_move(&board, mv, player).unwrap();
                player = player.opponent();
            }
            None if has_legal_move(&board, player.opponent()) => player = player.opponent(),
            None => break,
        }
    }
    (board, player)
}

fn chosen(outcome: classical_engine::SearchOutcome) -> Option<Move> {
    outcome.best_move.map(|(mv, _)| mv)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_alpha_beta_matches_minimax(seed in any::<u64>(), plies in 6usize..50, depth in 1u8..=4) {
        let (board, player) = random_position(seed, plies);
        let moves = legal_moves(&board, player);
        prop_assume!(!moves.is_empty());
        let eval = EvalConfig::default();

        let mm = pick_best_move(&board, player, &moves, depth, Algorithm::Minimax, &eval);
        let ab = pick_best_move(&board, player, &moves, depth, Algorithm::AlphaBeta, &eval);

        prop_assert_eq!(chosen(mm), chosen(ab));
        prop_assert!(ab.nodes <= mm.nodes);
    }

    #[test]
    fn prop_parallel_root_matches_sequential(seed in any::<u64>(), plies in 6usize..50, depth in 1u8..=3) {
        let (board, player) = random_position(seed, plies);
        let moves = legal_moves(&board, player);
        prop_assume!(!moves.is_empty());
        let eval = EvalConfig::default();

        let seq = pick_best_move(&board, player, &moves, depth, Algorithm::AlphaBeta, &eval);
        let par = pick_best_move_parallel(&board, player, &moves, depth, Algorithm::AlphaBeta, &eval);

        prop_assert_eq!(chosen(seq), chosen(par));
    }
}

#[test]
fn full_window_scores_agree_for_every_root_move() {
    // Scoring each root move on its own must give minimax and alpha-beta the same value.
    let (board, player) = random_position(2024, 20);
    let eval = EvalConfig::default();
    for mv in legal_moves(&board, player) {
        let single = [mv];
        let mm = pick_best_move(&board, player, &single, 3, Algorithm::Minimax, &eval);
        let ab = pick_best_move(&board, player, &single, 3, Algorithm::AlphaBeta, &eval);
        assert_eq!(mm.best_move, ab.best_move);
    }
}
