//! End-to-end tests driving the `pig` binary over stdin/stdout.

#![allow(deprecated)] // Command::cargo_bin, macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn pig() -> Command {
    Command::cargo_bin("pig").unwrap()
}

/// Stdin script: two player names, then enough rolls to finish any
/// low-target game.
fn names_then_rolls(rolls: usize) -> String {
    let mut input = String::from("Ada\nBen\n");
    input.push_str(&"r\n".repeat(rolls));
    input
}

// ---------------------------------------------------------------------------
// configuration
// ---------------------------------------------------------------------------

#[test]
fn rejects_a_single_player() {
    pig().args(["--players", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least two players are required"));
}

#[test]
fn rejects_zero_players() {
    pig().args(["--players", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("got 0"));
}

// ---------------------------------------------------------------------------
// a full game
// ---------------------------------------------------------------------------

#[test]
fn plays_to_a_win_and_prints_the_leaderboard() {
    pig().args(["--target", "1"])
        .write_stdin(names_then_rolls(60))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("wins")
                .and(predicate::str::contains("Ada"))
                .and(predicate::str::contains("Ben"))
                .and(predicate::str::contains("Player"))
                .and(predicate::str::contains("Score"))
                .and(predicate::str::contains("Rolls")),
        );
}

#[test]
fn seeded_games_produce_identical_transcripts() {
    let mut input = String::from("Ada\nBen\n");
    for _ in 0..400 {
        input.push_str("r\nr\nh\n");
    }

    let transcript = |input: String| {
        pig().args(["--target", "30", "--seed", "7"])
            .write_stdin(input)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    assert_eq!(transcript(input.clone()), transcript(input));
}

// ---------------------------------------------------------------------------
// prompting
// ---------------------------------------------------------------------------

#[test]
fn reprompts_on_invalid_action() {
    let mut input = String::from("Ada\nBen\nx\n");
    input.push_str(&"r\n".repeat(60));

    pig().args(["--target", "1"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("unrecognized action 'x'"));
}

#[test]
fn blank_decision_lines_are_ignored() {
    let mut input = String::from("Ada\nBen\n\n\n");
    input.push_str(&"r\n".repeat(60));

    pig().args(["--target", "1"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("unrecognized action").not());
}

#[test]
fn reprompts_on_empty_player_name() {
    let mut input = String::from("\n   \nAda\nBen\n");
    input.push_str(&"r\n".repeat(60));

    pig().args(["--target", "1"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("player name must not be empty"));
}

// ---------------------------------------------------------------------------
// end of input
// ---------------------------------------------------------------------------

#[test]
fn eof_during_name_collection_is_fatal() {
    pig().write_stdin("Ada\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed unexpectedly"));
}

#[test]
fn eof_before_the_game_ends_is_fatal() {
    pig().write_stdin("Ada\nBen\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed unexpectedly"));
}
