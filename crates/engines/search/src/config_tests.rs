use super::*;

#[test]
fn test_default_config() {
    let config = SearchConfig::default();
    assert_eq!(config.mode, SearchMode::Iterative);
    assert_eq!(config.method, SearchMethod::Minimax);
    assert_eq!(config.search_depth, 3);
    assert_eq!(config.timer_threshold, Duration::from_millis(10));
    assert_eq!(config.max_depth, None);
    assert_eq!(config.heuristic, Heuristic::Custom);
    assert!(config.validate().is_ok());
}

#[test]
fn test_method_names() {
    assert_eq!("minimax".parse::<SearchMethod>().unwrap(), SearchMethod::Minimax);
    assert_eq!("AlphaBeta".parse::<SearchMethod>().unwrap(), SearchMethod::AlphaBeta);
    assert_eq!("alpha-beta".parse::<SearchMethod>().unwrap(), SearchMethod::AlphaBeta);
    assert_eq!(SearchMethod::AlphaBeta.to_string(), "alphabeta");
}

#[test]
fn test_unknown_method_fails_loudly() {
    let err = "negascout".parse::<SearchMethod>().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownMethod(ref name) if name == "negascout"));
    assert!(err.to_string().contains("negascout"));
}

#[test]
fn test_zero_fixed_depth_is_rejected() {
    let config = SearchConfig::fixed(SearchMethod::AlphaBeta, 0);
    assert!(matches!(config.validate(), Err(ConfigError::ZeroDepth)));

    let config = SearchConfig::iterative(SearchMethod::AlphaBeta).with_max_depth(0);
    assert!(matches!(config.validate(), Err(ConfigError::ZeroDepth)));

    // Depth is irrelevant when deepening
    let mut config = SearchConfig::iterative(SearchMethod::Minimax);
    config.search_depth = 0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_toml() {
    let config = SearchConfig::from_toml_str(
        r#"
        mode = "fixed"
        method = "alphabeta"
        search_depth = 5
        timer_threshold_ms = 25
        heuristic = "improved"
        "#,
    )
    .unwrap();
    assert_eq!(config.mode, SearchMode::Fixed);
    assert_eq!(config.method, SearchMethod::AlphaBeta);
    assert_eq!(config.search_depth, 5);
    assert_eq!(config.timer_threshold, Duration::from_millis(25));
    assert_eq!(config.heuristic, Heuristic::Improved);
}

#[test]
fn test_from_toml_fills_defaults() {
    let config = SearchConfig::from_toml_str("method = \"minimax\"").unwrap();
    assert_eq!(config, SearchConfig::iterative(SearchMethod::Minimax));
}

#[test]
fn test_from_toml_rejects_unknown_method() {
    let err = SearchConfig::from_toml_str("method = \"expectimax\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
    assert!(err.to_string().contains("expectimax"));
}

#[test]
fn test_from_toml_rejects_zero_depth() {
    let err = SearchConfig::from_toml_str("mode = \"fixed\"\nsearch_depth = 0").unwrap_err();
    assert!(matches!(err, ConfigError::ZeroDepth));
}

#[test]
fn test_toml_round_trip_keeps_milliseconds() {
    let config = SearchConfig::fixed(SearchMethod::AlphaBeta, 4)
        .with_threshold(Duration::from_millis(40))
        .with_heuristic(Heuristic::Chase);
    let text = toml::to_string(&config).unwrap();
    assert!(text.contains("timer_threshold_ms = 40"));
    assert_eq!(SearchConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_load_missing_file() {
    let err = SearchConfig::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
