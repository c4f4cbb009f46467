use super::*;

#[test]
fn test_defaults() {
    let cfg = SearchConfig::default();
    assert_eq!(cfg.difficulty, 3);
    assert_eq!(cfg.algorithm, Algorithm::AlphaBeta);
    assert!(!cfg.parallel_root);
    assert_eq!(cfg.eval.endgame_threshold, 50);
    assert_eq!(cfg.eval.position, TermConfig::on(1.0));
    assert_eq!(cfg.eval.mobility, TermConfig::on(0.5));
    assert_eq!(cfg.eval.stability, TermConfig::on(0.8));
    assert_eq!(cfg.eval.frontier, TermConfig::on(0.4));
    assert_eq!(cfg.eval.parity, TermConfig::on(0.6));
    assert_eq!(cfg.eval.corner, TermConfig::on(2.0));
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_max_depth_formula_is_capped_at_five() {
    for difficulty in 0..=5 {
        assert_eq!(SearchConfig::default().with_difficulty(difficulty).max_depth(), 5);
    }
    assert_eq!(SearchConfig::default().with_difficulty(u8::MAX).max_depth(), 5);
}

#[test]
fn test_validate_rejects_out_of_range() {
    assert!(matches!(
        SearchConfig::default().with_difficulty(0).validate(),
        Err(ConfigError::Difficulty(0))
    ));
    assert!(matches!(
        SearchConfig::default().with_difficulty(6).validate(),
        Err(ConfigError::Difficulty(6))
    ));

    let mut cfg = SearchConfig::default();
    cfg.eval.endgame_threshold = 65;
    assert!(matches!(cfg.validate(), Err(ConfigError::EndgameThreshold(65))));

    cfg.eval.endgame_threshold = 0;
    assert!(matches!(cfg.validate(), Err(ConfigError::EndgameThreshold(0))));
    assert!(SearchConfig::from_toml_str("[eval]\nendgame_threshold = 0\n").is_err());

    let mut cfg = SearchConfig::default();
    cfg.eval.corner.weight = f64::NAN;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::Weight {
            term: EvalTerm::Corner,
            ..
        })
    ));
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let cfg = SearchConfig::from_toml_str(
        r#"
difficulty = 5
algorithm = "minimax"

[eval]
endgame_threshold = 40

[eval.mobility]
weight = 1.5

[eval.parity]
enabled = false
weight = 0.6
"#,
    )
    .unwrap();

    assert_eq!(cfg.difficulty, 5);
    assert_eq!(cfg.algorithm, Algorithm::Minimax);
    assert_eq!(cfg.eval.endgame_threshold, 40);
    assert_eq!(cfg.eval.mobility, TermConfig::on(1.5));
    assert!(!cfg.eval.parity.enabled);
    assert_eq!(cfg.eval.corner, TermConfig::on(2.0));
}

#[test]
fn test_toml_rejects_bad_values() {
    assert!(matches!(
        SearchConfig::from_toml_str("difficulty = 9"),
        Err(ConfigError::Difficulty(9))
    ));
    assert!(matches!(
        SearchConfig::from_toml_str("algorithm = \"negascout\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_toml_round_trip() {
    let cfg = SearchConfig::default()
        .with_difficulty(4)
        .with_parallel_root(true);
    let text = cfg.to_toml_string().unwrap();
    assert!(text.contains("alphabeta"));
    assert_eq!(SearchConfig::from_toml_str(&text).unwrap(), cfg);
}

#[test]
fn test_load_missing_file() {
    let err = SearchConfig::load("/nonexistent/reversi.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("reversi.toml"));
}

#[test]
fn test_only_enables_single_term() {
    let cfg = EvalConfig::only(EvalTerm::Corner);
    for term in EvalTerm::ALL {
        assert_eq!(cfg.term(term).enabled, term == EvalTerm::Corner);
    }
}

#[test]
fn test_term_table_with_only_toggle() {
    let cfg = SearchConfig::from_toml_str("[eval.parity]\nenabled = false\n").unwrap();

    assert_eq!(cfg.eval.parity, TermConfig::off(0.6));
    assert_eq!(cfg.eval.mobility, TermConfig::on(0.5));
    assert_eq!(cfg.difficulty, 3);
}

#[test]
fn test_term_table_with_only_weight() {
    let cfg = SearchConfig::from_toml_str(
        r#"
[eval.disc_count]
weight = 1.25

[eval.corner]
weight = 0.0
"#,
    )
    .unwrap();

    assert_eq!(cfg.eval.disc_count, TermConfig::off(1.25));
    assert_eq!(cfg.eval.corner, TermConfig::on(0.0));
    assert_eq!(cfg.eval.endgame_threshold, 50);
}
