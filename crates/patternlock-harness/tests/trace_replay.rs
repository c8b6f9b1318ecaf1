//! Replays the reference fixtures and checks the reported outcome.

use std::path::PathBuf;

use patternlock_harness::{ReplayError, Trace, replay};
use patternlock_widgets::CellState;

fn fixture(name: &str) -> Trace {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name);
    Trace::load(&path).expect("fixture loads")
}

#[test]
fn top_row_success() {
    let outcome = replay(&fixture("top_row_success.json"), None).expect("replay");
    let summary = &outcome.summary;
    assert_eq!(summary.preset, "default");
    assert_eq!(summary.attempts, vec![vec![1, 2, 3]]);
    assert_eq!(summary.verdict, Some("success"));
    assert_eq!(summary.phase, "finished");
    assert_eq!(summary.auto_resets, 0);
    assert_eq!(
        &summary.cell_states[..4],
        &[
            CellState::Success,
            CellState::Success,
            CellState::Success,
            CellState::Regular
        ]
    );
    // Nine dots plus two connecting lines.
    assert_eq!(summary.frame_ops, 11);
    assert_eq!(outcome.svg.matches("<line ").count(), 2);
}

#[test]
fn command_line_pattern_overrides_trace() {
    let outcome = replay(&fixture("top_row_success.json"), Some(&[3, 2, 1][..])).expect("replay");
    assert_eq!(outcome.summary.verdict, Some("error"));
}

#[test]
fn indicator_retry_after_auto_reset() {
    let outcome = replay(&fixture("indicator_retry.json"), None).expect("replay");
    let summary = &outcome.summary;
    assert_eq!(summary.attempts, vec![vec![1, 2, 5], vec![1, 5, 9]]);
    assert_eq!(summary.verdict, Some("success"));
    assert_eq!(summary.selected_ids, vec![1, 5, 9]);
    // Error reset fired before the second attempt, success reset while settling.
    assert_eq!(summary.auto_resets, 2);
    assert_eq!(summary.phase, "idle");
    assert_eq!(outcome.frame.triangles().count(), 0);
    assert_eq!(outcome.frame.lines().count(), 2);
}

#[test]
fn secure_mode_hides_pattern() {
    let outcome = replay(&fixture("secure_mode.json"), None).expect("replay");
    let summary = &outcome.summary;
    assert_eq!(summary.verdict, Some("success"));
    assert_eq!(summary.selected_ids, vec![7, 4, 1, 2]);
    assert!(summary.cell_states.iter().all(|s| *s == CellState::Regular));
    assert_eq!(summary.frame_ops, 9);
    assert!(!outcome.svg.contains("<line "));
}

#[test]
fn cancelled_gesture_never_validates() {
    let outcome = replay(&fixture("cancelled.json"), None).expect("replay");
    let summary = &outcome.summary;
    assert!(summary.attempts.is_empty());
    assert_eq!(summary.verdict, None);
    assert!(summary.selected_ids.is_empty());
    assert_eq!(summary.phase, "idle");
    // jd-style paints a disc behind every dot.
    assert_eq!(summary.frame_ops, 18);
}

#[test]
fn replay_is_deterministic() {
    let a = replay(&fixture("indicator_retry.json"), None).expect("replay");
    let b = replay(&fixture("indicator_retry.json"), None).expect("replay");
    assert_eq!(a.summary, b.summary);
    assert!(a.summary.frame_checksum.starts_with("blake3:"));
}

#[test]
fn summary_serializes_as_json() {
    let outcome = replay(&fixture("secure_mode.json"), None).expect("replay");
    let value = serde_json::to_value(&outcome.summary).expect("serializes");
    assert_eq!(value["verdict"], "success");
    assert_eq!(value["cell_states"][0], "regular");
    assert_eq!(value["selected_ids"], serde_json::json!([7, 4, 1, 2]));
}

#[test]
fn missing_fixture_is_io_error() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/nope.json");
    assert!(matches!(Trace::load(&path), Err(ReplayError::Io(_))));
}
