use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn inkboard_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("inkboard").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

const TWO_FINGER_SCRIPT: &str = r#"[
  {"action": "down", "pointer_id": 1, "pointers": [{"id": 1, "samples": [{"x": 10, "y": 10}]}]},
  {"action": "pointer_down", "pointer_id": 2, "pointers": [{"id": 2, "samples": [{"x": 60, "y": 10}]}]},
  {"action": "move", "pointer_id": 1, "pointers": [
    {"id": 1, "samples": [{"x": 20, "y": 20}]},
    {"id": 2, "samples": [{"x": 70, "y": 20}]}
  ]},
  {"action": "pointer_up", "pointer_id": 2, "pointers": [{"id": 2, "samples": [{"x": 70, "y": 20}]}]},
  {"action": "move", "pointer_id": 9, "pointers": [{"id": 9, "samples": [{"x": 1, "y": 1}]}]},
  {"action": "up", "pointer_id": 1, "pointers": [{"id": 1, "samples": [{"x": 20, "y": 20}]}]}
]"#;

#[test]
fn inkboard_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    inkboard_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Multi-touch ink capture and stroke replay",
        ));
}

#[test]
fn no_flags_prints_usage() {
    let temp = TempDir::new().unwrap();
    inkboard_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("inkboard --replay events.json"));
}

#[test]
fn output_requires_replay_flag() {
    let temp = TempDir::new().unwrap();
    inkboard_cmd(&temp)
        .args(["--output", "ink.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replay_reports_finished_strokes() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("events.json");
    std::fs::write(&script, TWO_FINGER_SCRIPT).unwrap();

    inkboard_cmd(&temp)
        .arg("--replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Replayed 6 event(s)"))
        .stdout(predicate::str::contains("Finished strokes: 2"))
        .stdout(predicate::str::contains("Redraws: 6"));
}

#[test]
fn gesture_cancel_scope_discards_all_strokes() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("events.json");
    std::fs::write(
        &script,
        r#"[
  {"action": "down", "pointer_id": 1, "pointers": [{"id": 1, "samples": [{"x": 0, "y": 0}]}]},
  {"action": "pointer_down", "pointer_id": 2, "pointers": [{"id": 2, "samples": [{"x": 5, "y": 5}]}]},
  {"action": "cancel", "pointer_id": 1}
]"#,
    )
    .unwrap();

    inkboard_cmd(&temp)
        .arg("--replay")
        .arg(&script)
        .args(["--cancel-scope", "gesture"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Finished strokes: 0"))
        .stdout(predicate::str::contains("Unfinished pointers").not());
}

#[test]
fn replay_writes_png() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("events.json");
    let png = temp.path().join("ink.png");
    std::fs::write(&script, TWO_FINGER_SCRIPT).unwrap();

    inkboard_cmd(&temp)
        .arg("--replay")
        .arg(&script)
        .arg("--output")
        .arg(&png)
        .args(["--width", "100", "--height", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let bytes = std::fs::read(&png).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("bad.toml");
    let script = temp.path().join("events.json");
    std::fs::write(&config, "[brush\n").unwrap();
    std::fs::write(&script, "[]").unwrap();

    inkboard_cmd(&temp)
        .arg("--replay")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
