//! Integration tests for the `dayclock` subcommands
//!
//! Each test runs the real binary against a throwaway HOME so no user config
//! leaks in.

use std::process::{Command, Output};

fn dayclock(home: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dayclock"))
        .args(args)
        .env("HOME", home)
        .env_remove("DAY_CLOCK_DEBUG")
        .output()
        .expect("Failed to run dayclock")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_list_shows_seeded_tasks_and_countdown() {
    let home = tempfile::TempDir::new().unwrap();
    let output = dayclock(home.path(), &["list", "--at", "08:40"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Morning Coffee"));
    assert!(out.contains("Team Standup"));
    assert!(out.contains("Read a Chapter: 60% remaining, 15 min left"));
}

#[test]
fn test_list_empty_schedule() {
    let home = tempfile::TempDir::new().unwrap();
    let output = dayclock(home.path(), &["list", "--no-seed", "--at", "08:40"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No tasks scheduled yet."));
}

#[test]
fn test_config_can_turn_off_example_tasks() {
    let home = tempfile::TempDir::new().unwrap();
    let config_dir = home.path().join(".config/day-clock");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "seed_example_tasks = false\n").unwrap();

    let output = dayclock(home.path(), &["list", "--at", "08:40"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("No tasks scheduled yet."));
    assert!(!out.contains("Morning Coffee"));

    let output = dayclock(home.path(), &["svg", "--at", "08:40"]);
    assert!(output.status.success());
    let svg = stdout(&output);
    assert!(!svg.contains("Read a Chapter"));
    assert!(svg.contains("Free Time!"));
}

#[test]
fn test_list_json_newest_first() {
    let home = tempfile::TempDir::new().unwrap();
    let output = dayclock(
        home.path(),
        &["list", "--at", "10:05", "--task", "Lunch,10:00,10:30,Utensils", "--json"],
    );
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let tasks = json["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 4);
    assert_eq!(tasks[0]["name"], "Lunch");
    assert_eq!(tasks[0]["id"], 4);
    assert_eq!(tasks[0]["icon"], "Utensils");
    assert_eq!(json["active"]["name"], "Lunch");
}

#[test]
fn test_rejected_task_fails_with_reason() {
    let home = tempfile::TempDir::new().unwrap();
    let output = dayclock(home.path(), &["list", "--task", "Clash,08:05,08:20"]);
    assert!(!output.status.success());

    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Cannot add 'Clash'"));
    assert!(err.contains("This task overlaps with an existing one."));
}

#[test]
fn test_svg_to_file_uses_config_palette() {
    let home = tempfile::TempDir::new().unwrap();
    let config_dir = home.path().join(".config/day-clock");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[clock]\npalette = [\"#abcdef\"]\n",
    )
    .unwrap();

    let target = home.path().join("face.svg");
    let output = dayclock(
        home.path(),
        &["svg", "--at", "08:40", "-o", target.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    let svg = std::fs::read_to_string(target).unwrap();
    assert!(svg.contains("#abcdef"));
    assert!(svg.contains("Read a Chapter"));
}

#[test]
fn test_completion_generates_script() {
    let home = tempfile::TempDir::new().unwrap();
    let output = dayclock(home.path(), &["completion", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("dayclock"));
}
