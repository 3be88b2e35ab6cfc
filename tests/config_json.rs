// JSON config parsing; needs `--features serde_json` (or `--all-features`).

use composite_blocks::config::DEFAULT_MAX_BLOCK_NUMBER;
use composite_blocks::{DemoConfig, DemoError, MotionMode};

#[test]
fn partial_json_keeps_defaults() {
    let cfg = DemoConfig::from_json(r#"{"block_length": 20, "motion": "swap"}"#).unwrap();
    assert_eq!(cfg.block_length, 20);
    assert_eq!(cfg.motion, MotionMode::Swap);
    assert_eq!(cfg.max_block_number, DEFAULT_MAX_BLOCK_NUMBER);
    assert_eq!(cfg.seed, None);
}

#[test]
fn invalid_json_values_rejected() {
    assert!(matches!(
        DemoConfig::from_json(r#"{"block_length": 0}"#),
        Err(DemoError::InvalidConfiguration(_))
    ));
    assert!(DemoConfig::from_json("not json").is_err());
}

#[test]
fn huge_max_block_number_parses() {
    let cfg = DemoConfig::from_json(r#"{"max_block_number": 4000000000}"#).unwrap();
    assert_eq!(cfg.max_block_number, 4_000_000_000);
}
