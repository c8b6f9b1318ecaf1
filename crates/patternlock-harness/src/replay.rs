#![forbid(unsafe_code)]

//! Drive a tracker through a trace with a synthetic clock.
//!
//! Before each event the tracker is ticked at the event's timestamp, so an
//! auto-reset scheduled by an earlier attempt fires exactly when a host's
//! frame loop would have fired it. The final frame is rendered right after
//! the last event, before `settle_ms` is applied.

use std::cell::RefCell;
use std::rc::Rc;

use patternlock_core::geometry::Rect;
use patternlock_widgets::{
    Cell, CellState, DrawList, PatternCallbacks, PatternLock, PatternLockState, PatternVerdict,
    SessionPhase, StatefulWidget,
};
use serde::Serialize;
use web_time::{Duration, Instant};

use crate::error::ReplayError;
use crate::svg;
use crate::trace::Trace;

/// Machine-readable result of a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub preset: String,
    /// Ids handed to the validator, one entry per finished attempt.
    pub attempts: Vec<Vec<usize>>,
    /// Selection on screen after the last event.
    pub selected_ids: Vec<usize>,
    /// Verdict of the last finished attempt.
    pub verdict: Option<&'static str>,
    /// Cell states after the last event.
    pub cell_states: Vec<CellState>,
    /// Phase after settling.
    pub phase: &'static str,
    /// Auto-resets that fired during the replay, settling included.
    pub auto_resets: usize,
    pub frame_ops: usize,
    pub frame_checksum: String,
}

/// Everything a replay produced.
#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    pub summary: ReplaySummary,
    pub frame: DrawList,
    pub svg: String,
}

/// Replay `trace`, validating attempts against `pattern` when given, else
/// against the trace's own pattern.
pub fn replay(trace: &Trace, pattern: Option<&[usize]>) -> Result<ReplayOutcome, ReplayError> {
    let preset = trace.preset()?;
    let config = trace.effective_config()?;
    config.validate()?;
    let style = trace.effective_style()?;
    let expected: Option<Vec<usize>> = pattern
        .map(<[usize]>::to_vec)
        .or_else(|| trace.pattern.clone());

    tracing::info!(
        message = "patternlock.replay_start",
        preset = preset.name(),
        events = trace.events.len(),
        rows = config.rows,
        columns = config.columns
    );

    let attempts = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&attempts);
    let callbacks = PatternCallbacks::new().on_complete(move |ids| {
        sink.borrow_mut().push(ids.to_vec());
        expected.as_deref() == Some(ids)
    });
    let mut state =
        PatternLockState::new(config, trace.width, trace.height).with_callbacks(callbacks);

    let start = Instant::now();
    let at = |t_ms: u64| {
        start
            .checked_add(Duration::from_millis(t_ms))
            .ok_or_else(|| ReplayError::Usage(format!("timestamp out of range: {t_ms} ms")))
    };
    let mut auto_resets = 0usize;
    for timed in &trace.events {
        let now = at(timed.t_ms)?;
        if state.tick(now) {
            auto_resets += 1;
        }
        state.handle_event(&timed.event, now);
    }

    let selected_ids = state.selected_ids();
    let verdict = state.last_verdict().map(verdict_name);
    let cell_states = state.cells().iter().map(Cell::state).collect();
    let mut frame = DrawList::new();
    PatternLock::new(&style).render(
        Rect::from_size(trace.width, trace.height),
        &mut frame,
        &state,
    );

    if let Some(settle_ms) = trace.settle_ms {
        let last = trace.events.last().map_or(0, |timed| timed.t_ms);
        if state.tick(at(last.saturating_add(settle_ms))?) {
            auto_resets += 1;
        }
    }

    let svg = svg::to_svg(&frame, trace.width, trace.height);
    let attempts = attempts.borrow().clone();
    tracing::info!(
        message = "patternlock.replay_done",
        attempts = attempts.len(),
        verdict = verdict.unwrap_or("none"),
        auto_resets
    );

    let summary = ReplaySummary {
        preset: preset.name().to_string(),
        attempts,
        selected_ids,
        verdict,
        cell_states,
        phase: phase_name(state.phase()),
        auto_resets,
        frame_ops: frame.len(),
        frame_checksum: svg::checksum(&svg),
    };
    Ok(ReplayOutcome {
        summary,
        frame,
        svg,
    })
}

fn verdict_name(verdict: PatternVerdict) -> &'static str {
    match verdict {
        PatternVerdict::Success => "success",
        PatternVerdict::Error => "error",
    }
}

fn phase_name(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Idle => "idle",
        SessionPhase::Tracking => "tracking",
        SessionPhase::Finished => "finished",
    }
}
