use super::*;
use foo_context::services::config::load_config_from;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use tracing_subscriber::fmt::MakeWriter;

fn args(list: &[&str]) -> Args {
    parse_args(list.iter().map(|s| s.to_string()))
}

#[test]
fn no_args_uses_config_message() {
    assert_eq!(args(&[]), Args::default());
}

#[test]
fn first_positional_is_the_message() {
    let parsed = args(&["there", "ignored"]);
    assert_eq!(parsed.message.as_deref(), Some("there"));
    assert!(!parsed.standalone);
}

#[test]
fn standalone_flag_anywhere() {
    let parsed = args(&["--standalone", "x"]);
    assert!(parsed.standalone);
    assert_eq!(parsed.message.as_deref(), Some("x"));
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn invalid_config_warns_and_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();
    let loaded = load_config_from(&path).map(Option::unwrap_or_default);

    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let config = tracing::subscriber::with_default(subscriber, || config_or_default(loaded));

    assert_eq!(config, GreeterConfig::default());
    let text = logs.text();
    assert!(text.contains("WARN"));
    assert!(text.contains("invalid config, using defaults"));
    assert!(text.contains("config.json"));
}

#[test]
fn valid_config_is_kept_without_warning() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "message": "there" }"#).unwrap();
    let loaded = load_config_from(&path).map(Option::unwrap_or_default);

    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt().with_writer(logs.clone()).finish();
    let config = tracing::subscriber::with_default(subscriber, || config_or_default(loaded));

    assert_eq!(config.message, "there");
    assert!(logs.text().is_empty());
}
