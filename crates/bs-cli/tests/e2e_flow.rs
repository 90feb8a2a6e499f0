//! End-to-end tests driving the `bikeshare` binary over piped stdin.
//!
//! Tests the full pipeline: prompt → load → enrich → filter → stats → rows.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const NEW_YORK: &str = concat!(
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n",
    "5688089,2017-06-11 14:55:05,2017-06-11 15:08:21,795,Suffolk St & Stanton St,W Broadway & Spring St,Subscriber,Male,1998.0\n",
    "4096714,2017-05-11 15:30:11,2017-05-11 15:41:43,692,Lexington Ave & E 63 St,1 Ave & E 78 St,Subscriber,Male,1981.0\n",
    "2173887,2017-03-29 13:26:26,2017-03-29 13:48:31,1325,1 Pl & Clinton St,Henry St & Degraw St,Subscriber,Male,1987.0\n",
    "3945638,2017-05-08 19:10:00,2017-05-08 19:20:00,600,Suffolk St & Stanton St,W Broadway & Spring St,Customer,,\n",
    "6208972,2017-06-21 06:46:00,2017-06-21 06:50:00,240,E 17 St & Broadway,W 21 St & 6 Ave,Subscriber,Female,1992.0\n",
);

fn bikeshare_binary() -> String {
    env!("CARGO_BIN_EXE_bikeshare").to_string()
}

/// Runs the binary in `dir` with `input` on stdin.
fn run(dir: &Path, input: &str) -> Output {
    let mut child = Command::new(bikeshare_binary())
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("BIKESHARE_DATA_DIR")
        .env_remove("BIKESHARE_PAGE_SIZE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn bikeshare");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().expect("failed to wait for bikeshare")
}

fn with_new_york() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("new_york_city.csv"), NEW_YORK).unwrap();
    temp
}

/// Test a full round with stats and one page of rows.
#[test]
fn test_explore_round() {
    let temp = with_new_york();
    let output = run(temp.path(), "new york city\nall\nall\nyes\nno\nno\n");

    assert!(
        output.status.success(),
        "bikeshare should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("Your filters are city: New York City, month: All, day: All"));
    assert!(stdout.contains("Trips matching the filters: 5"));
    assert!(stdout.contains("  Most common month:          June"));
    assert!(stdout.contains("  Most common start station:  Suffolk St & Stanton St"));
    assert!(stdout.contains(
        "  Most common trip:           Suffolk St & Stanton St -> W Broadway & Spring St"
    ));
    assert!(stdout.contains("  Users without gender:       1"));
    assert!(stdout.contains("  Users without birth year:   1"));

    // One window of four rows, then "no"
    assert_eq!(stdout.matches("\nRow ").count(), 4);
    assert!(stdout.contains("Row 0\n"));
    assert!(!stdout.contains("Row 4\n"));
}

/// Test month and day filters narrow the trips.
#[test]
fn test_filtered_round() {
    let temp = with_new_york();
    let output = run(temp.path(), "NEW YORK CITY\nmay\nthursday\nno\nno\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    // May 11, 2017 (a Thursday) is the only matching trip
    assert!(stdout.contains("Your filters are city: New York City, month: May, day: Thursday"));
    assert!(stdout.contains("Trips matching the filters: 1"));
    assert!(stdout.contains("  Most common start hour:     15"));
    assert!(stdout.contains("  Total duration:             11.53 minutes"));
}

/// Test a missing dataset terminates with a message naming the file.
#[test]
fn test_missing_dataset_exits_with_error() {
    let temp = TempDir::new().unwrap();
    let output = run(temp.path(), "chicago\nall\nall\n");

    assert!(!output.status.success(), "missing dataset should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("We can't find chicago.csv"),
        "stderr should name the file: {stderr}"
    );
}

/// Test closing stdin at the first prompt exits cleanly.
#[test]
fn test_closed_stdin_exits_cleanly() {
    let temp = TempDir::new().unwrap();
    let output = run(temp.path(), "");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Hello! Let's explore some US bikeshare data!"));
}
