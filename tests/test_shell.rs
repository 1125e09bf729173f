//! Integration tests for the line-oriented session loop.

mod common;

use std::io::Cursor;

use rand::SeedableRng;
use rand::rngs::StdRng;
use visitmap::shell;

use common::*;

fn run_script(tracker: &mut Tracker<FlakyStore>, script: &str) -> anyhow::Result<String> {
    let mut session = Session::new();
    let mut rng = StdRng::seed_from_u64(3);
    let mut output = Vec::new();
    shell::run(
        tracker,
        &mut session,
        &mut rng,
        Cursor::new(script.as_bytes()),
        &mut output,
    )?;
    Ok(String::from_utf8(output)?)
}

#[test]
fn test_actions_require_entering_first() -> anyhow::Result<()> {
    let mut tracker = Tracker::open(sample_catalog(), FlakyStore::default())?;

    let output = run_script(&mut tracker, "pick\nvisited\n")?;

    assert!(output.contains("type `enter` first"));
    assert_eq!(tracker.progress().visited, 0);

    Ok(())
}

#[test]
fn test_pick_and_mark_session() -> anyhow::Result<()> {
    let mut tracker = Tracker::open(sample_catalog(), FlakyStore::default())?;

    let output = run_script(&mut tracker, "enter\npick\nvisited\nstatus\nquit\nprogress\n")?;

    assert!(output.contains("Welcome! 0 / 3 countries"));
    assert!(output.contains("Selected: "));
    assert!(output.contains("Progress: 1 / 3 countries"));
    assert!(output.contains("(visited)"));
    assert_eq!(tracker.progress().visited, 1);
    // Nothing after `quit` runs
    assert_eq!(output.matches("Progress:").count(), 1);

    Ok(())
}

#[test]
fn test_mark_without_pick_reports_error() -> anyhow::Result<()> {
    let mut tracker = Tracker::open(sample_catalog(), FlakyStore::default())?;

    let output = run_script(&mut tracker, "enter\nnot-visited\n")?;

    assert!(output.contains("Error: No country selected"));

    Ok(())
}

#[test]
fn test_unknown_command_is_reported() -> anyhow::Result<()> {
    let mut tracker = Tracker::open(sample_catalog(), FlakyStore::default())?;

    let output = run_script(&mut tracker, "dance\n\nback\n")?;

    assert!(output.contains("Unknown command: dance"));

    Ok(())
}

#[test]
fn test_store_failure_keeps_session_going() -> anyhow::Result<()> {
    let mut tracker = Tracker::open(sample_catalog(), FlakyStore::default())?;
    tracker.store().fail_writes.set(true);

    let output = run_script(&mut tracker, "enter\npick\nvisited\nstatus\n")?;

    assert!(output.contains("Error: Failed to write status file"));
    assert!(output.contains("(not visited)"));
    assert_eq!(tracker.progress().visited, 0);

    Ok(())
}
