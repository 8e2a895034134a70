//! Config file loading, saving and fallbacks

use semicell::config::AppConfig;
use semicell::grid::SortStrategy;
use semicell::locale::Locale;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.delimiter, ';');
    assert_eq!(config.language, Locale::Ru);
    assert_eq!(config.theme, "default-light");
    assert_eq!(config.sort.strategy, SortStrategy::Stable);
    assert!(config.edit.escape_cancels);
    assert_eq!(config.delimiter_byte(), b';');
}

#[test]
fn test_partial_yaml_fills_in_defaults() {
    let config = AppConfig::from_yaml("language: en\nsort:\n  strategy: collapse-duplicates\n").unwrap();
    assert_eq!(config.language, Locale::En);
    assert_eq!(config.sort.strategy, SortStrategy::CollapseDuplicates);
    assert_eq!(config.delimiter, ';');
    assert_eq!(config.column_width, 100);
}

#[test]
fn test_empty_yaml_is_default() {
    assert_eq!(AppConfig::from_yaml("  \n").unwrap(), AppConfig::default());
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = AppConfig {
        delimiter: '\t',
        theme: "default-dark".into(),
        font_size: 18.0,
        ..AppConfig::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(AppConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_broken_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "delimiter: [not, a, char]\n").unwrap();
    assert_eq!(AppConfig::load_from(&path), AppConfig::default());
}

#[test]
fn test_unusable_delimiter_falls_back_to_semicolon() {
    for delimiter in ['"', '\n', 'ж'] {
        let config = AppConfig {
            delimiter,
            ..AppConfig::default()
        };
        assert_eq!(config.delimiter_byte(), b';', "delimiter {:?}", delimiter);
    }

    let comma = AppConfig {
        delimiter: ',',
        ..AppConfig::default()
    };
    assert_eq!(comma.delimiter_byte(), b',');
}
