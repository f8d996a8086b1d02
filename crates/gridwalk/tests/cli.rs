//! Integration test: the `gridwalk` binary's arguments, output, and exit
//! codes.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

const DAY17: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

fn gridwalk(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gridwalk"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn temp_input(tag: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("gridwalk-cli-{tag}-{}.txt", std::process::id()));
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn prints_both_parts() {
    let path = temp_input("day17", DAY17);
    let out = gridwalk(&["day17", path.to_str().unwrap()]);
    fs::remove_file(&path).unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "part 1: 102\npart 2: 94\n");
}

#[test]
fn unknown_puzzle_fails() {
    let out = gridwalk(&["day42", "whatever.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown puzzle 'day42'"));
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_file_fails() {
    let out = gridwalk(&["day14", "/no/such/gridwalk/input.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot read"));
}

#[test]
fn wrong_argument_count_prints_usage() {
    let out = gridwalk(&["day17"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("usage:"));
}
