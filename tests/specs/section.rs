// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `section-start`, `section-end` and wrapped `section` runs.

use crate::prelude::*;

#[test]
fn section_start_emits_a_paired_line() {
    let ran = cli()
        .args(&["section-start", "--name", "test-section"])
        .passes()
        .stdout_has("section-start: 'test-section'")
        .stdout_has(" MRL:");

    let record = ran.mrl_record("section-start");
    assert_eq!(record["type"], "section-start");
    assert_eq!(record["name"], "test-section");

    // Timestamp is current wall-clock time, RFC 3339 encoded.
    let time = chrono::DateTime::parse_from_rfc3339(record["time"].as_str().unwrap()).unwrap();
    let age = chrono::Utc::now().signed_duration_since(time);
    assert!(age.num_seconds().abs() < 5, "timestamp too far from now: {time}");
}

#[test]
fn section_start_writes_exactly_one_line() {
    let ran = cli().args(&["section-start", "--name", "install"]).passes();
    assert_eq!(ran.stdout().lines().count(), 1);
}

#[test]
fn section_end_reports_the_given_result() {
    let ran = cli()
        .args(&["section-end", "--name", "test-section", "--result", "1"])
        .passes()
        .stdout_has("section-end: 'test-section' result: 1");

    let record = ran.mrl_record("section-end");
    assert_eq!(record["type"], "section-end");
    assert_eq!(record["name"], "test-section");
    assert_eq!(record["result"], 1);
}

#[test]
fn section_end_with_zero_result_omits_it_from_the_record() {
    let ran = cli()
        .args(&["section-end", "--name", "test-section", "--result", "0"])
        .passes()
        .stdout_has("section-end: 'test-section' result: 0");
    assert!(ran.mrl_record("section-end").get("result").is_none());
}

#[test]
fn missing_name_fails_without_output() {
    cli()
        .args(&["section-start"])
        .exits_with(1)
        .stdout_empty()
        .stderr_has("missing section name");
}

#[test]
fn wrapped_section_success_exits_zero() {
    let ran = cli()
        .args(&["section", "--name", "build", "--", "true"])
        .passes()
        .stdout_has("section-start: 'build'")
        .stdout_has("section-end: 'build' result: 0");

    let stdout = ran.stdout();
    assert_eq!(stdout.lines().count(), 2);
    let start = stdout.find("section-start").unwrap();
    let end = stdout.find("section-end").unwrap();
    assert!(start < end);
}

#[test]
fn wrapped_section_failure_propagates_the_exit_code() {
    cli()
        .args(&["section", "--name", "build", "--", "false"])
        .exits_with(1)
        .stdout_has("section-end: 'build' result: 1");
}

#[test]
fn wrapped_section_propagates_uncommon_exit_codes() {
    cli()
        .args(&["section", "--name", "build", "--", "sh", "-c", "exit 7"])
        .exits_with(7)
        .stdout_has("section-end: 'build' result: 7");
}

#[test]
fn wrapped_command_output_lands_between_the_records() {
    let ran = cli()
        .args(&["section", "--name", "build", "--", "echo", "hello-from-build"])
        .passes();

    let stdout = ran.stdout();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("section-start: 'build'"));
    assert_eq!(lines[1], "hello-from-build");
    assert!(lines[2].starts_with("section-end: 'build' result: 0"));
}

#[test]
fn wrapped_command_really_runs() {
    let temp = tempfile::tempdir().unwrap();
    let marker = temp.path().join("ran");
    cli()
        .args(&["section", "--name", "touch", "--", "touch", marker.to_str().unwrap()])
        .passes();
    assert!(marker.exists());
}

#[test]
fn unrunnable_command_reports_the_sentinel_result() {
    let ran = cli()
        .args(&["section", "--name", "build", "--", "/nonexistent/not-a-real-binary"])
        // -1 exit status wraps to 255 on unix.
        .exits_with(255)
        .stdout_has("section-end: 'build' result: -1");

    // A diagnostic naming the failure appears before the end record.
    let stdout = ran.stdout();
    let diagnostic = stdout.find("failed to spawn `/nonexistent/not-a-real-binary`").unwrap();
    let end = stdout.find("section-end").unwrap();
    assert!(diagnostic < end);
    assert_eq!(ran.mrl_record("section-end")["result"], -1);
}

#[test]
fn on_success_message_is_attached_only_on_success() {
    let ran = cli()
        .args(&[
            "section",
            "--name",
            "deploy",
            "--on-success",
            "deploy complete",
            "--on-failure",
            "deploy failed",
            "--",
            "true",
        ])
        .passes()
        .stdout_has("section-end: 'deploy' result: 0 message: 'deploy complete'");
    assert_eq!(ran.mrl_record("section-end")["message"], "deploy complete");
}

#[test]
fn on_failure_message_is_attached_only_on_failure() {
    let ran = cli()
        .args(&[
            "section",
            "--name",
            "deploy",
            "--on-success",
            "deploy complete",
            "--on-failure",
            "deploy failed",
            "--",
            "false",
        ])
        .exits_with(1)
        .stdout_has("section-end: 'deploy' result: 1 message: 'deploy failed'");
    let record = ran.mrl_record("section-end");
    assert_eq!(record["message"], "deploy failed");
    assert_eq!(record["result"], 1);
}

#[test]
fn wrapped_section_without_command_fails_without_output() {
    cli()
        .args(&["section", "--name", "build"])
        .exits_with(1)
        .stdout_empty()
        .stderr_has("requires a command parameter");
}
