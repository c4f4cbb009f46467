use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

/// White can take a1 (0,0) or play c5 (4,2).
fn white_corner_board() -> Board {
    board(
        "\
        .BW.....
        ........
        ........
        ........
        ...BW...
        ........
        ........
        ........",
    )
}

#[test]
fn test_empty_move_list_returns_none() {
    let cfg = SearchConfig::default();
    assert_eq!(choose_move(&Board::new(), &[], &cfg), None);
    let outcome = search_moves(&Board::new(), Player::White, &[], &cfg, &mut StdRng::seed_from_u64(1));
    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.nodes, 0);
}

#[test]
fn test_takes_corner_at_depth_one() {
    let b = white_corner_board();
    let moves = legal_moves(&b, Player::White);
    assert_eq!(moves, vec![Move::new(0, 0), Move::new(4, 2)]);

    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let outcome = pick_best_move(&b, Player::White, &moves, 1, algorithm, &EvalConfig::default());
        assert_eq!(outcome.best_move.map(|(m, _)| m), Some(Move::new(0, 0)));
    }
}

#[test]
fn test_black_minimises() {
    let b = board(
        "\
        .WB.....
        ........
        ........
        ........
        ...WB...
        ........
        ........
        ........",
    );
    let moves = legal_moves(&b, Player::Black);
    let outcome = pick_best_move(&b, Player::Black, &moves, 1, Algorithm::AlphaBeta, &EvalConfig::default());
    let (mv, score) = outcome.best_move.unwrap();
    assert_eq!(mv, Move::new(0, 0));
    assert!(score < 0.0);
}

#[test]
fn test_ties_keep_first_move() {
    let mut flat = EvalConfig::default();
    for term in crate::eval::EvalTerm::ALL {
        flat.term_mut(term).enabled = false;
    }
    let b = Board::new();
    for player in [Player::White, Player::Black] {
        let moves = legal_moves(&b, player);
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
            let outcome = pick_best_move(&b, player, &moves, 3, algorithm, &flat);
            assert_eq!(outcome.best_move, Some((moves[0], 0.0)));
        }
        let reversed: Vec<Move> = moves.iter().rev().copied().collect();
        let outcome = pick_best_move(&b, player, &reversed, 2, Algorithm::AlphaBeta, &flat);
        assert_eq!(outcome.best_move.map(|(m, _)| m), Some(reversed[0]));
    }
}

#[test]
fn test_alpha_beta_matches_minimax_from_start() {
    let b = Board::new();
    let eval = EvalConfig::default();
    for depth in 1..=4 {
        let moves = legal_moves(&b, Player::White);
        let mm = pick_best_move(&b, Player::White, &moves, depth, Algorithm::Minimax, &eval);
        let ab = pick_best_move(&b, Player::White, &moves, depth, Algorithm::AlphaBeta, &eval);
        assert_eq!(mm.best_move.map(|(m, _)| m), ab.best_move.map(|(m, _)| m));
        assert!(ab.nodes <= mm.nodes, "depth {depth}: {} > {}", ab.nodes, mm.nodes);
    }
}

#[test]
fn test_minimax_leaf_when_side_cannot_move() {
    // White has no disc that can capture: the node is a leaf at any depth.
    let b = board(&format!("B{}", ".".repeat(63)));
    let eval = EvalConfig::default();
    let mut nodes = 0;
    assert_eq!(minimax(&b, 4, true, &eval, &mut nodes), evaluate(&b, &eval));
    assert_eq!(nodes, 1);
    let mut nodes = 0;
    assert_eq!(
        alpha_beta(&b, 4, f64::NEG_INFINITY, f64::INFINITY, false, &eval, &mut nodes),
        evaluate(&b, &eval)
    );
}

#[test]
fn test_depth_zero_is_static_eval() {
    let b = white_corner_board();
    let eval = EvalConfig::default();
    let mut nodes = 0;
    assert_eq!(minimax(&b, 0, true, &eval, &mut nodes), evaluate(&b, &eval));
}

#[test]
fn test_searched_choice_is_deterministic() {
    let b = reversi_core::apply_move(&Board::new(), Move::new(2, 3), Player::Black).unwrap();
    let moves = legal_moves(&b, Player::White);
    let cfg = SearchConfig::default().with_difficulty(2);
    let first = choose_move(&b, &moves, &cfg);
    assert!(first.is_some());
    for _ in 0..3 {
        assert_eq!(choose_move(&b, &moves, &cfg), first);
    }
}

#[test]
fn test_difficulty_one_draws_from_legal_moves() {
    let b = Board::new();
    let moves = legal_moves(&b, Player::White);
    let cfg = SearchConfig::default().with_difficulty(1);
    let mut rng = StdRng::seed_from_u64(7);

    let mut seen = HashSet::new();
    for _ in 0..200 {
        let outcome = search_moves(&b, Player::White, &moves, &cfg, &mut rng);
        let (mv, _) = outcome.best_move.unwrap();
        assert!(moves.contains(&mv));
        assert_eq!(outcome.nodes, 0);
        seen.insert(mv);
    }
    assert_eq!(seen.len(), moves.len());
}

#[test]
fn test_parallel_root_matches_sequential() {
    let b = reversi_core::apply_move(&Board::new(), Move::new(2, 3), Player::Black).unwrap();
    let moves = legal_moves(&b, Player::White);
    let eval = EvalConfig::default();
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let seq = pick_best_move(&b, Player::White, &moves, 3, algorithm, &eval);
        let par = pick_best_move_parallel(&b, Player::White, &moves, 3, algorithm, &eval);
        assert_eq!(seq.best_move.map(|(m, _)| m), par.best_move.map(|(m, _)| m));
    }
}

#[test]
fn test_illegal_root_moves_are_skipped() {
    let b = Board::new();
    let moves = vec![Move::new(0, 0), Move::new(2, 4)];
    let outcome = pick_best_move(&b, Player::White, &moves, 1, Algorithm::AlphaBeta, &EvalConfig::default());
    assert_eq!(outcome.best_move.map(|(m, _)| m), Some(Move::new(2, 4)));
}
