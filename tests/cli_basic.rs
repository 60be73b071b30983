//! Integration tests for basic CLI behavior.
//!
//! Tests that the binary exists, accepts standard flags, and that the
//! offline-capable subcommands produce their expected output. Nothing here
//! touches the network.

#![allow(deprecated)] // cargo_bin deprecation — replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: get a Command for the `threadlink` binary.
fn threadlink() -> Command {
    Command::cargo_bin("threadlink").expect("binary 'threadlink' should be built")
}

// ─── Top-level flags ─────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    threadlink()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: threadlink"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("queries"))
        .stdout(predicate::str::contains("manifest"));
}

#[test]
fn version_flag_shows_semver() {
    threadlink()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^threadlink \d+\.\d+\.\d+\n$").unwrap());
}

#[test]
fn no_args_shows_error_and_usage() {
    threadlink()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: threadlink"));
}

#[test]
fn invalid_subcommand_fails() {
    threadlink()
        .arg("this-is-not-a-real-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ─── Subcommand help ─────────────────────────────────────────────────────────

#[test]
fn resolve_help() {
    threadlink()
        .args(["resolve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolve an episode identifier"))
        .stdout(predicate::str::contains("<ID>"));
}

#[test]
fn queries_help() {
    threadlink()
        .args(["queries", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("search query fan-out"))
        .stdout(predicate::str::contains("--offline"));
}

// ─── Subcommand argument validation ──────────────────────────────────────────

#[test]
fn resolve_missing_id_fails() {
    threadlink()
        .arg("resolve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<ID>"));
}

#[test]
fn show_missing_id_fails() {
    threadlink()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<ID>"));
}

#[test]
fn queries_missing_id_fails() {
    threadlink()
        .arg("queries")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<ID>"));
}

// ─── Offline subcommands ─────────────────────────────────────────────────────

#[test]
fn manifest_prints_addon_description() {
    threadlink()
        .arg("manifest")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"idPrefixes\""))
        .stdout(predicate::str::contains("\"series\""))
        .stdout(predicate::str::contains("\"stream\""));
}

#[test]
fn offline_queries_generate_three_phrasings() {
    threadlink()
        .args(["queries", "--offline", "tt0903747:2:5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 queries"))
        .stdout(predicate::str::contains(r#""Season 2" "Episode 5" "Discussion""#))
        .stdout(predicate::str::contains("\"S02E05\""))
        .stdout(predicate::str::contains("search.json?q="));
}

#[test]
fn offline_queries_reject_bad_identifier() {
    threadlink()
        .args(["queries", "--offline", "not-an-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid episode identifier"));
}
