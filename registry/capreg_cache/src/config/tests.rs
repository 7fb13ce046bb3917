use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_is_exclusive() {
    assert_eq!(CacheConfig::default().populate, PopulateStrategy::Exclusive);
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("racy".parse::<PopulateStrategy>(), Ok(PopulateStrategy::Racy));
    assert_eq!(" RACY ".parse::<PopulateStrategy>(), Ok(PopulateStrategy::Racy));
    assert_eq!("Exclusive".parse::<PopulateStrategy>(), Ok(PopulateStrategy::Exclusive));
}

#[test]
fn parse_rejects_unknown_strategy() {
    let err = "lazy".parse::<PopulateStrategy>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown populate strategy `lazy` (expected `exclusive` or `racy`)"
    );
}

#[test]
fn display_matches_parse() {
    for strategy in [PopulateStrategy::Exclusive, PopulateStrategy::Racy] {
        assert_eq!(strategy.to_string().parse::<PopulateStrategy>(), Ok(strategy));
    }
}

#[test]
fn env_value_selects_strategy() {
    assert_eq!(
        CacheConfig::from_env_value(Some("racy")),
        CacheConfig::with_populate(PopulateStrategy::Racy)
    );
    assert_eq!(CacheConfig::from_env_value(None), CacheConfig::default());
}

#[test]
fn bad_env_value_falls_back_to_default() {
    assert_eq!(
        CacheConfig::from_env_value(Some("sometimes")),
        CacheConfig::default()
    );
}
