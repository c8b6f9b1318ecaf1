#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use patternlock_core::event::{PointerEvent, PointerEventKind};
use patternlock_core::geometry::Rect;
use patternlock_widgets::{
    CellState, DrawList, LineStyle, PatternCallbacks, PatternLock, PatternLockConfig,
    PatternLockState, PatternStyle, SessionPhase, StatefulWidget,
};
use web_time::{Duration, Instant};

#[derive(Debug, Arbitrary)]
struct Input {
    rows: u8,
    columns: u8,
    width: u16,
    indicator: bool,
    secure: bool,
    steps: Vec<Step>,
}

#[derive(Debug, Arbitrary)]
struct Step {
    kind: u8,
    x: i16,
    y: i16,
    advance_ms: u16,
}

fuzz_target!(|input: Input| {
    // Grid dimensions 1..=9 x 1..=9, container 0..=1023 px.
    let rows = usize::from(input.rows % 9) + 1;
    let columns = usize::from(input.columns % 9) + 1;
    let width = i32::from(input.width % 1024);
    let style = if input.indicator {
        LineStyle::Indicator
    } else {
        LineStyle::Common
    };
    let config = PatternLockConfig::default()
        .grid(rows, columns)
        .line_style(style)
        .secure_mode(input.secure);

    let callbacks = PatternCallbacks::new().on_complete(|ids| ids.len() % 2 == 0);
    let mut state = PatternLockState::new(config, width, width).with_callbacks(callbacks);
    let pattern_style = PatternStyle::default();
    let mut now = Instant::now();

    for step in input.steps.iter().take(256) {
        now += Duration::from_millis(u64::from(step.advance_ms));
        state.tick(now);
        let kind = match step.kind % 4 {
            0 => PointerEventKind::Down,
            1 => PointerEventKind::Move,
            2 => PointerEventKind::Up,
            _ => PointerEventKind::Cancel,
        };
        let event = PointerEvent::new(kind, f32::from(step.x), f32::from(step.y));
        state.handle_event(&event, now);

        // Post-conditions that must always hold:
        let selected = state.selected_indices();
        for (i, index) in selected.iter().enumerate() {
            assert!(*index < rows * columns, "selected index OOB");
            assert!(!selected[..i].contains(index), "duplicate selection");
        }
        if input.secure {
            assert!(
                state.cells().iter().all(|c| c.state() == CellState::Regular),
                "secure mode leaked a cell state"
            );
            assert!(state.line_path().is_empty(), "secure mode recorded a line");
        }
        if state.phase() == SessionPhase::Idle {
            assert!(state.next_deadline().is_none(), "idle with pending reset");
        }

        let mut frame = DrawList::new();
        PatternLock::new(&pattern_style).render(Rect::from_size(width, width), &mut frame, &state);
    }
});
