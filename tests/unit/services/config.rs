use super::*;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = GreeterConfig::default();
    assert_eq!(config.message, "world");
    assert_eq!(config.log_filter, "foo_context=info");
    assert_eq!((config.width, config.height), (40, 3));
}

#[test]
fn partial_json_keeps_defaults() {
    let config = parse_config(r#"{ "message": "there" }"#).unwrap();
    assert_eq!(config.message, "there");
    assert_eq!(config.width, GreeterConfig::default().width);
}

#[test]
fn invalid_json_is_an_error() {
    assert!(parse_config("{ message: ").is_err());
    assert!(parse_config(r#"{ "width": "wide" }"#).is_err());
}

#[test]
fn load_from_missing_file_is_none() {
    let dir = tempdir().unwrap();
    assert!(load_config_from(&dir.path().join("absent.json"))
        .unwrap()
        .is_none());
}

#[test]
fn ensure_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    ensure_config_file_at(&path).unwrap();
    assert_eq!(
        load_config_from(&path).unwrap(),
        Some(GreeterConfig::default())
    );

    std::fs::write(&path, r#"{ "message": "kept" }"#).unwrap();
    ensure_config_file_at(&path).unwrap();
    assert_eq!(load_config_from(&path).unwrap().unwrap().message, "kept");
}

#[test]
fn load_from_invalid_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().starts_with("Invalid config"));
}
