//! Headless mode and config integration tests.
//!
//! These tests cover what `folio exec` prints and how the config file
//! shapes it.

use folio::headless::{render_plain, run_script};
use folio::shell::Outcome;
use folio::Error;

use crate::fixtures::TestConfig;

#[test]
fn test_transcript_from_config_file() {
    let config = TestConfig::new(
        r#"
user = "ada"
host = "engine"
resume = "https://cv.example/ada.pdf"
"#,
    )
    .load()
    .unwrap();

    let entries = run_script(&config, ["cd resume", "cd projects"]);
    let text = render_plain(&entries, true);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "ada@engine:~$ cd resume");
    assert_eq!(lines[1], "Opening resume...");
    assert_eq!(lines[2], "open: https://cv.example/ada.pdf");
    assert_eq!(lines[3], "ada@engine:~$ cd projects");
}

#[test]
fn test_invalid_config_is_rejected() {
    let err = TestConfig::new("user = \"two words\"\n").load().unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = TestConfig::new("user = [1, 2]\n").load().unwrap_err();
    assert!(matches!(err, Error::TomlParse(_)));
}

#[test]
fn test_each_exec_starts_fresh() {
    let config = TestConfig::new("").load().unwrap();
    run_script(&config, ["cd projects"]);
    let entries = run_script(&config, ["ls"]);
    assert_eq!(entries[0].location, "~");
}

#[test]
fn test_json_transcript_round_trips_through_serde_json() {
    let config = TestConfig::new("").load().unwrap();
    let entries = run_script(&config, ["cd projects", "cd weather_bot", "./link"]);
    let json = serde_json::to_string_pretty(&entries).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value.as_array().map(Vec::len), Some(3));
    assert_eq!(value[2]["location"], "~/projects/weather_bot");
    assert_eq!(value[2]["urls"][0], "https://github.com/folio-dev/weather_bot");
    assert!(matches!(entries[2].outcome, Some(Outcome::Success(_))));
}
