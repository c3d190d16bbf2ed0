//! Installs the global subscriber once, so this file holds a single test.

use formcheck_log::{Config, DisplayConfig, Format, LogError, WriterConfig};
use pretty_assertions::assert_eq;

#[test]
fn json_events_land_in_the_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("formcheck.log");

    let config = Config {
        level: "debug".to_string(),
        format: Format::Json,
        writer: WriterConfig::File { path: path.clone() },
        display: DisplayConfig {
            time: false,
            ..DisplayConfig::default()
        },
    };
    formcheck_log::init_with(config.clone()).unwrap();

    tracing::info!(broken = 2, "password checked");

    let contents = std::fs::read_to_string(&path).unwrap();
    let event = contents
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .find(|v| v["fields"]["message"] == "password checked")
        .expect("event written");
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["broken"], 2);

    let again = formcheck_log::init_with(config);
    assert!(matches!(again, Err(LogError::Init(_))));
}
