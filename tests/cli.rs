use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use std::process::Command;

fn room() -> Command {
    Command::cargo_bin("furnished-room").expect("binary exists")
}

#[test]
fn summary_lists_the_room_without_a_window() {
    room()
        .arg("--summary-only")
        .assert()
        .success()
        .stdout(contains(
            "Furnished room: 39 draw calls from one cube (24 vertices, 36 indices)",
        ))
        .stdout(contains(" - bed: 3 instance(s)"))
        .stdout(contains(" - almirah: 8 instance(s)"))
        .stdout(contains(" - walls and floor: 10 instance(s)"))
        .stdout(contains(" - ceiling fan: 4 part(s)"))
        .stdout(contains(
            " - bed / bed frame pos=(0.50, -0.85, -1.00) scale=(2.00, 3.00, 0.50) color=(0.60, 0.20, 0.40)",
        ));
}

#[test]
fn help_lists_controls() {
    room()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Usage: furnished-room"))
        .stdout(contains("cycle fan speed"));
}

#[test]
fn unknown_argument_exits_with_failure() {
    room()
        .arg("--bogus")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Unknown argument: --bogus"))
        .stdout(predicate::str::is_empty());
}
