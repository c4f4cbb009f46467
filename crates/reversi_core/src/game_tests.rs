use super::*;
use crate::SearchResult;

/// Plays the first legal move it is offered.
struct FirstMove;

impl Engine for FirstMove {
    fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        SearchResult {
            best_move: legal_moves(board, player).first().copied(),
            score: 0.0,
            depth: 0,
            nodes: 0,
        }
    }

    fn name(&self) -> &str {
        "first"
    }
}

/// Never finds a move.
struct Resigner;

impl Engine for Resigner {
    fn search(&mut self, _board: &Board, _player: Player) -> SearchResult {
        SearchResult {
            best_move: None,
            score: 0.0,
            depth: 0,
            nodes: 0,
        }
    }

    fn name(&self) -> &str {
        "resigner"
    }
}

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

#[test]
fn test_new_game_black_to_move() {
    let game = Game::new();
    assert_eq!(game.to_move(), Player::Black);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.legal_moves().len(), 4);
}

#[test]
fn test_play_hands_turn_to_opponent() {
    let mut game = Game::new();
    let outcome = game.play(Move::new(2, 3)).unwrap();
    assert_eq!(outcome, TurnOutcome::Next(Player::White));
    assert_eq!(game.to_move(), Player::White);
    assert_eq!(game.board().counts(), DiscCounts { black: 4, white: 1 });
}

#[test]
fn test_illegal_click_leaves_game_untouched() {
    let mut game = Game::new();
    let before = *game.board();
    assert!(matches!(
        game.play(Move::new(0, 0)),
        Err(ReversiError::InvalidMove { .. })
    ));
    assert_eq!(*game.board(), before);
    assert_eq!(game.to_move(), Player::Black);
}

#[test]
fn test_white_without_moves_passes_back_to_black() {
    // After b1 takes a2, White's only disc on the bottom row is pinned
    // against the edge and cannot capture anything.
    let mut game = Game::from_position(
        board(
            "\
            BW......
            ........
            ........
            ........
            ........
            ........
            ........
            .WBBBBBB",
        ),
        Player::Black,
    );
    let outcome = game.play(Move::new(0, 2)).unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::Pass {
            passed: Player::White
        }
    );
    assert_eq!(game.to_move(), Player::Black);
    assert!(!game.is_over());
    assert_eq!(game.legal_moves(), vec![Move::new(7, 0)]);
}

#[test]
fn test_game_ends_when_nobody_can_move() {
    let mut game = Game::from_position(
        board(
            "\
            BW......
            ........
            ........
            ........
            ........
            ........
            ........
            ........",
        ),
        Player::Black,
    );
    let outcome = game.play(Move::new(0, 2)).unwrap();
    let expected = GameResult {
        winner: Winner::Black,
        counts: DiscCounts { black: 3, white: 0 },
    };
    assert_eq!(outcome, TurnOutcome::Finished(expected));
    assert_eq!(game.result(), Some(expected));
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.play(Move::new(0, 3)), Err(ReversiError::GameOver));
}

#[test]
fn test_dead_position_with_equal_counts_is_draw() {
    let game = Game::from_position(
        board(
            "\
            B.......
            ........
            ........
            ........
            ........
            ........
            ........
            .......W",
        ),
        Player::White,
    );
    assert_eq!(
        game.result(),
        Some(GameResult {
            winner: Winner::Draw,
            counts: DiscCounts { black: 1, white: 1 },
        })
    );
}

#[test]
fn test_winner_needs_strictly_more_discs() {
    let full_white_majority: Board = format!("{}{}", "W".repeat(33), "B".repeat(31))
        .parse()
        .unwrap();
    assert_eq!(
        GameResult::from_board(&full_white_majority).winner,
        Winner::White
    );

    let even: Board = format!("{}{}", "W".repeat(32), "B".repeat(32))
        .parse()
        .unwrap();
    assert_eq!(GameResult::from_board(&even).winner, Winner::Draw);
}

#[test]
fn test_from_position_hands_over_stuck_side() {
    // White cannot move at the start, Black can.
    let game = Game::from_position(
        board(
            "\
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            .WBBBBBB",
        ),
        Player::White,
    );
    assert_eq!(game.to_move(), Player::Black);
    assert!(!game.is_over());
}

#[test]
fn test_engine_turn_applies_engine_move() {
    let mut game = Game::new();
    game.play(Move::new(2, 3)).unwrap();
    let (mv, outcome) = game.play_engine(&mut FirstMove).unwrap();
    assert_eq!(mv, Move::new(2, 2));
    assert_eq!(outcome, TurnOutcome::Next(Player::Black));
}

#[test]
fn test_engine_without_answer_is_empty_move_set() {
    let mut game = Game::new();
    let before = *game.board();
    assert_eq!(
        game.play_engine(&mut Resigner).unwrap_err(),
        ReversiError::EmptyMoveSet {
            player: Player::Black
        }
    );
    assert_eq!(*game.board(), before);
}

#[test]
fn test_full_game_with_engines_terminates() {
    let mut game = Game::new();
    let mut engine = FirstMove;
    let mut plies = 0;
    while !game.is_over() {
        game.play_engine(&mut engine).unwrap();
        plies += 1;
        assert!(plies <= 60);
    }
    let result = game.result().unwrap();
    assert!(result.counts.total() <= 64);
}

#[test]
fn test_restart_resets_state() {
    let mut game = Game::new();
    game.play(Move::new(2, 3)).unwrap();
    game.restart();
    assert_eq!(*game.board(), Board::new());
    assert_eq!(game.to_move(), Player::Black);
}
