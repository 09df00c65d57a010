//! Configuration defaults and JSON parsing.

use pretty_assertions::assert_eq;

use pipesim_core::config::Config;

#[test]
fn defaults_describe_the_stock_cache() {
    let config = Config::default();

    assert!(config.cache.enabled);
    assert_eq!(config.cache.sets, 16);
    assert_eq!(config.cache.ways, 4);
    assert_eq!(config.cache.words_per_line, 4);
    assert_eq!(config.cache.miss_penalty, 9);
}

#[test]
fn empty_json_keeps_every_default() {
    let config = Config::from_json("{}").unwrap();

    assert_eq!(config.cache.sets, 16);
    assert_eq!(config.cache.miss_penalty, 9);
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let config = Config::from_json(r#"{"cache": {"ways": 2, "miss_penalty": 20}}"#).unwrap();

    assert_eq!(config.cache.ways, 2);
    assert_eq!(config.cache.miss_penalty, 20);
    assert_eq!(config.cache.sets, 16);
    assert_eq!(config.cache.words_per_line, 4);
    assert!(config.cache.enabled);
}

#[test]
fn cache_can_be_disabled() {
    let config = Config::from_json(r#"{"cache": {"enabled": false}}"#).unwrap();
    assert!(!config.cache.enabled);
}

#[test]
fn malformed_json_is_rejected() {
    assert!(Config::from_json("{\"cache\":").is_err());
}
