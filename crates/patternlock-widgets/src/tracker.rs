#![forbid(unsafe_code)]

//! Gesture tracking: turns pointer events into an ordered cell selection.
//!
//! [`PatternLockState`] owns the laid-out [`Grid`], the in-progress session
//! and the auto-reset timer. Feed it pointer events through
//! [`handle_event`](PatternLockState::handle_event) (or the individual
//! `pointer_*` methods) and call [`tick`](PatternLockState::tick) periodically
//! so a scheduled auto-reset can fire.
//!
//! # State Machine
//!
//! Session phases: `Idle → Tracking → Finished → Idle`.
//! Cell states: `Regular → Selected → {Success | Error} → Regular`.
//!
//! - **Down** resets any previous session, then starts tracking if a cell is
//!   hit. A miss leaves the tracker idle.
//! - **Move** (tracking only) appends each newly hit cell and remembers the
//!   pointer for the live rubber-band segment.
//! - **Up** asks the validator and moves to `Finished` with every selected
//!   cell in `Success` or `Error`, scheduling an auto-reset if enabled.
//! - **Cancel** resets immediately.
//!
//! # Invariants
//!
//! 1. A cell appears at most once in the selection.
//! 2. In secure mode no cell leaves `Regular`, no segment is recorded and no
//!    indicator angle is stored, yet ids are still reported.
//! 3. Every transition back to `Idle` cancels the pending timer, so a stale
//!    firing never resets a newer session.
//! 4. Only an explicit `true` from the validator counts as success.

use patternlock_core::event::{PointerEvent, PointerEventKind};
use patternlock_core::geometry::{Point, Segment, angle_degrees, clip_point_toward};
use web_time::Instant;

use crate::callbacks::{PatternCallbacks, ValidatorOutcome};
use crate::cell::{Cell, CellState};
use crate::config::{LineStyle, PatternLockConfig};
use crate::grid::Grid;
use crate::path::{LinePath, LineTone};
use crate::timer::{ResetTimer, TimerToken};

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    /// No pattern on screen.
    #[default]
    Idle,
    /// Pointer is down and cells are being collected.
    Tracking,
    /// Pointer was released; the outcome is on screen.
    Finished,
}

/// Outcome of a finished pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternVerdict {
    /// The validator accepted the pattern.
    Success,
    /// The validator rejected it, was missing, or failed.
    Error,
}

/// Gesture tracker state for a pattern lock widget.
#[derive(Debug)]
pub struct PatternLockState {
    config: PatternLockConfig,
    grid: Grid,
    phase: SessionPhase,
    /// Selected cell indices in touch order.
    selected: Vec<usize>,
    path: LinePath,
    last_pointer: Option<Point>,
    secure: bool,
    auto_reset: bool,
    enabled: bool,
    timer: ResetTimer,
    callbacks: PatternCallbacks,
    last_verdict: Option<PatternVerdict>,
}

impl PatternLockState {
    /// Create a tracker and lay out its grid in a `width × height` container.
    #[must_use]
    pub fn new(config: PatternLockConfig, width: i32, height: i32) -> Self {
        let grid = Grid::layout(width, height, config.rows, config.columns, config.spacing);
        Self {
            secure: config.secure_mode,
            auto_reset: config.auto_reset,
            selected: Vec::with_capacity(config.cell_count()),
            config,
            grid,
            phase: SessionPhase::Idle,
            path: LinePath::default(),
            last_pointer: None,
            enabled: true,
            timer: ResetTimer::new(),
            callbacks: PatternCallbacks::new(),
            last_verdict: None,
        }
    }

    /// Install host hooks.
    #[must_use]
    pub fn with_callbacks(mut self, callbacks: PatternCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Replace host hooks.
    pub fn set_callbacks(&mut self, callbacks: PatternCallbacks) {
        self.callbacks = callbacks;
    }

    /// Lay the grid out again for a new container size.
    ///
    /// The selection survives; cell states, indicator angles and the line
    /// path are rebuilt from the new cell positions.
    pub fn set_container_size(&mut self, width: i32, height: i32) {
        self.grid = Grid::layout(
            width,
            height,
            self.config.rows,
            self.config.columns,
            self.config.spacing,
        );
        self.repaint();
    }

    // --- Event handling ---

    /// Handle a pointer event.
    ///
    /// Returns `false` only for a down event that missed every cell (the
    /// host may stop routing the rest of that gesture here). Everything else
    /// is consumed, including all events while disabled.
    pub fn handle_event(&mut self, event: &PointerEvent, now: Instant) -> bool {
        if !self.enabled {
            return true;
        }
        match event.kind {
            PointerEventKind::Down => self.pointer_down(event.position()),
            PointerEventKind::Move => {
                self.pointer_move(event.position());
                true
            }
            PointerEventKind::Up => {
                self.pointer_up(now);
                true
            }
            PointerEventKind::Cancel => {
                self.pointer_cancel();
                true
            }
        }
    }

    /// Start a session at `point`. Returns whether a cell was hit.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        if !self.enabled {
            return false;
        }
        if self.phase != SessionPhase::Idle || !self.selected.is_empty() {
            self.reset();
        }
        let Some(index) = self.grid.hit_index(point, self.config.hit_area_padding_ratio) else {
            return false;
        };
        self.phase = SessionPhase::Tracking;
        self.last_verdict = None;
        patternlock_core::debug!(
            message = "patternlock.session_start",
            cell = index,
            secure = self.secure
        );
        self.callbacks.started();
        self.select(index);
        true
    }

    /// Track the pointer. Returns the index of a newly selected cell.
    pub fn pointer_move(&mut self, point: Point) -> Option<usize> {
        if !self.enabled || self.phase != SessionPhase::Tracking {
            return None;
        }
        let added = self
            .grid
            .hit_index(point, self.config.hit_area_padding_ratio)
            .filter(|index| !self.selected.contains(index));
        if let Some(index) = added {
            self.select(index);
        }
        self.last_pointer = Some(point);
        added
    }

    /// Finish the session and validate it.
    ///
    /// Returns `None` when no session was being tracked.
    pub fn pointer_up(&mut self, now: Instant) -> Option<PatternVerdict> {
        if !self.enabled || self.phase != SessionPhase::Tracking {
            return None;
        }
        self.last_pointer = None;
        if self.selected.is_empty() {
            self.phase = SessionPhase::Idle;
            return None;
        }
        self.phase = SessionPhase::Finished;

        let ids = self.selected_ids();
        let outcome = self.callbacks.complete(&ids);
        if matches!(outcome, ValidatorOutcome::Panicked(_)) {
            patternlock_core::warn!(message = "patternlock.validator_panicked", outcome = ?outcome);
        }
        let verdict = if outcome.is_accepted() {
            self.on_success(now);
            PatternVerdict::Success
        } else {
            self.on_error(now);
            PatternVerdict::Error
        };
        patternlock_core::debug!(
            message = "patternlock.complete",
            cells = ids.len(),
            verdict = ?verdict
        );
        self.last_verdict = Some(verdict);
        Some(verdict)
    }

    /// Abandon the session without validation.
    pub fn pointer_cancel(&mut self) {
        if self.enabled {
            self.reset();
        }
    }

    /// Return every selected cell to `Regular` and clear the session.
    ///
    /// Cancels a pending auto-reset.
    pub fn reset(&mut self) {
        self.timer.cancel();
        for &index in &self.selected {
            if let Some(cell) = self.grid.cell_mut(index) {
                cell.reset();
            }
        }
        patternlock_core::debug!(message = "patternlock.reset", cells = self.selected.len());
        self.selected.clear();
        self.path.clear();
        self.last_pointer = None;
        self.phase = SessionPhase::Idle;
    }

    // --- Timer ---

    /// Fire a due auto-reset. Returns `true` if the session was reset.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.poll(now).is_none() {
            return false;
        }
        patternlock_core::debug!(message = "patternlock.timer_fired");
        self.reset();
        true
    }

    /// Fire the auto-reset identified by `token`, ignoring its deadline.
    ///
    /// Tokens from a cancelled or superseded schedule are ignored.
    pub fn fire_timer(&mut self, token: TimerToken) -> bool {
        if !self.timer.take(token) {
            return false;
        }
        patternlock_core::debug!(message = "patternlock.timer_fired");
        self.reset();
        true
    }

    /// When the pending auto-reset is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Token of the pending auto-reset.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.timer.pending_token()
    }

    // --- Controls ---

    /// Hide every visual trace of selections, including one already on
    /// screen. The selection itself is kept.
    pub fn enable_secure_mode(&mut self) {
        self.secure = true;
        self.repaint();
    }

    /// Show selections again, repainting the current one for its phase.
    pub fn disable_secure_mode(&mut self) {
        self.secure = false;
        self.repaint();
    }

    /// Whether secure mode is on.
    #[inline]
    #[must_use]
    pub const fn is_secure(&self) -> bool {
        self.secure
    }

    /// Enable or disable auto-reset for future finished sessions.
    pub fn set_auto_reset_enabled(&mut self, enabled: bool) {
        self.auto_reset = enabled;
    }

    /// Whether auto-reset is on.
    #[inline]
    #[must_use]
    pub const fn is_auto_reset_enabled(&self) -> bool {
        self.auto_reset
    }

    /// Enable or disable input. Disabled trackers consume and ignore pointer
    /// events; timers and [`reset`](Self::reset) keep working.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether input is accepted.
    #[inline]
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    // --- Queries ---

    /// Configuration the tracker was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &PatternLockConfig {
        &self.config
    }

    /// The laid-out grid.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All cells in index order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    /// Current session phase.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Verdict of the most recent finished session, until the next one starts.
    #[inline]
    #[must_use]
    pub const fn last_verdict(&self) -> Option<PatternVerdict> {
        self.last_verdict
    }

    /// Selected 0-based indices in touch order.
    #[inline]
    #[must_use]
    pub fn selected_indices(&self) -> &[usize] {
        &self.selected
    }

    /// Selected 1-based ids in touch order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<usize> {
        self.selected.iter().map(|index| index + 1).collect()
    }

    /// The recorded connecting line.
    #[inline]
    #[must_use]
    pub const fn line_path(&self) -> &LinePath {
        &self.path
    }

    /// Most recent pointer position while tracking.
    #[inline]
    #[must_use]
    pub const fn last_pointer(&self) -> Option<Point> {
        self.last_pointer
    }

    /// Live segment from the last selected cell to the pointer.
    ///
    /// In indicator style the segment starts on the cell circle and is
    /// omitted while the pointer is still inside that circle.
    #[must_use]
    pub fn rubber_band(&self) -> Option<Segment> {
        if self.secure || self.phase != SessionPhase::Tracking {
            return None;
        }
        let pointer = self.last_pointer?;
        let last = self.grid.cell(*self.selected.last()?)?;
        let center = last.center();
        match self.config.line_style {
            LineStyle::Common => Some(Segment::new(center, pointer)),
            LineStyle::Indicator => {
                let radius = last.radius();
                if center.distance_to(pointer) <= radius {
                    return None;
                }
                Some(Segment::new(
                    clip_point_toward(center, radius, pointer),
                    pointer,
                ))
            }
        }
    }

    // --- Internals ---

    fn select(&mut self, index: usize) {
        self.selected.push(index);
        patternlock_core::debug!(
            message = "patternlock.cell_selected",
            cell = index,
            count = self.selected.len()
        );
        let ids = self.selected_ids();
        self.callbacks.progress(&ids);
        if self.secure {
            return;
        }
        if let Some(cell) = self.grid.cell_mut(index) {
            cell.set_state(CellState::Selected);
        }
        let Some(&previous) = self.selected.iter().rev().nth(1) else {
            return;
        };
        if let Some(segment) = self.segment_between(previous, index) {
            self.path.push(segment);
        }
        if self.config.line_style == LineStyle::Indicator {
            self.point_indicator(previous, index);
        }
    }

    /// Rebuild cell states, indicator angles and the line path from the
    /// selection, the phase and the secure flag.
    fn repaint(&mut self) {
        for cell in self.grid.cells_mut() {
            cell.reset();
        }
        self.path.clear();
        if self.secure {
            return;
        }
        let (state, tone) = match (self.phase, self.last_verdict) {
            (SessionPhase::Finished, Some(PatternVerdict::Success)) => {
                (CellState::Success, LineTone::Success)
            }
            (SessionPhase::Finished, Some(PatternVerdict::Error)) => {
                (CellState::Error, LineTone::Error)
            }
            _ => (CellState::Selected, LineTone::Regular),
        };
        self.paint_selection(state);
        self.path.set_tone(tone);
        for i in 1..self.selected.len() {
            let (from, to) = (self.selected[i - 1], self.selected[i]);
            if let Some(segment) = self.segment_between(from, to) {
                self.path.push(segment);
            }
            if self.config.line_style == LineStyle::Indicator {
                self.point_indicator(from, to);
            }
        }
    }

    fn point_indicator(&mut self, from: usize, to: usize) {
        let (Some(a), Some(b)) = (self.grid.cell(from), self.grid.cell(to)) else {
            return;
        };
        let (a, b) = (a.center(), b.center());
        let degree = angle_degrees(b.x - a.x, b.y - a.y);
        if let Some(cell) = self.grid.cell_mut(from) {
            cell.set_indicator_degree(degree);
        }
    }

    fn segment_between(&self, from: usize, to: usize) -> Option<Segment> {
        let from = self.grid.cell(from)?;
        let to = self.grid.cell(to)?;
        Some(match self.config.line_style {
            LineStyle::Common => Segment::new(from.center(), to.center()),
            LineStyle::Indicator => Segment::between_circles(from.center(), to.center(), to.radius()),
        })
    }

    fn on_success(&mut self, now: Instant) {
        if !self.secure {
            self.paint_selection(CellState::Success);
            self.path.set_tone(LineTone::Success);
        }
        if self.auto_reset {
            self.timer.schedule(now, self.config.success_duration);
        }
    }

    fn on_error(&mut self, now: Instant) {
        if self.secure {
            self.reset();
            return;
        }
        self.paint_selection(CellState::Error);
        self.path.set_tone(LineTone::Error);
        if self.auto_reset {
            self.timer.schedule(now, self.config.error_duration);
        }
    }

    fn paint_selection(&mut self, state: CellState) {
        for &index in &self.selected {
            if let Some(cell) = self.grid.cell_mut(index) {
                cell.set_state(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use web_time::Duration;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_400: Duration = Duration::from_millis(400);

    // 300px wide, default 3x3: cells are 100px, centers at 50/150/250.
    fn center(index: usize) -> Point {
        let col = (index % 3) as f32;
        let row = (index / 3) as f32;
        Point::new(50.0 + col * 100.0, 50.0 + row * 100.0)
    }

    fn accepting(expected: &'static [usize]) -> PatternCallbacks {
        PatternCallbacks::new().on_complete(move |ids| ids == expected)
    }

    fn tracker(config: PatternLockConfig) -> PatternLockState {
        PatternLockState::new(config, 300, 300)
    }

    fn draw(state: &mut PatternLockState, cells: &[usize], now: Instant) -> Option<PatternVerdict> {
        let (first, rest) = cells.split_first()?;
        state.pointer_down(center(*first));
        for &index in rest {
            state.pointer_move(center(index));
        }
        state.pointer_up(now)
    }

    fn states(state: &PatternLockState) -> Vec<CellState> {
        state.cells().iter().map(Cell::state).collect()
    }

    #[test]
    fn down_on_cell_starts_tracking() {
        let mut state = tracker(PatternLockConfig::default());
        assert!(state.pointer_down(center(4)));
        assert_eq!(state.phase(), SessionPhase::Tracking);
        assert_eq!(state.selected_ids(), vec![5]);
        assert_eq!(state.cells()[4].state(), CellState::Selected);
    }

    #[test]
    fn down_outside_cells_stays_idle() {
        let mut state = tracker(PatternLockConfig::default());
        // Gap between cell 0 and cell 1 hit areas.
        assert!(!state.pointer_down(Point::new(100.0, 50.0)));
        assert_eq!(state.phase(), SessionPhase::Idle);
        assert!(state.selected_ids().is_empty());
        assert_eq!(state.pointer_move(center(0)), None);
    }

    #[test]
    fn traversal_order_is_reported_one_based() {
        let mut state = tracker(PatternLockConfig::default()).with_callbacks(accepting(&[1, 2, 3]));
        let verdict = draw(&mut state, &[0, 1, 2], Instant::now());
        assert_eq!(verdict, Some(PatternVerdict::Success));
        assert_eq!(state.selected_ids(), vec![1, 2, 3]);
        assert_eq!(state.phase(), SessionPhase::Finished);
    }

    #[test]
    fn replaying_moves_never_duplicates() {
        let mut state = tracker(PatternLockConfig::default());
        state.pointer_down(center(0));
        assert_eq!(state.pointer_move(center(1)), Some(1));
        assert_eq!(state.pointer_move(center(0)), None);
        assert_eq!(state.pointer_move(center(1)), None);
        assert_eq!(state.pointer_move(center(2)), Some(2));
        assert_eq!(state.selected_indices(), &[0, 1, 2]);
        assert_eq!(state.line_path().segments().len(), 2);
    }

    #[test]
    fn move_over_selected_cell_still_updates_pointer() {
        let mut state = tracker(PatternLockConfig::default());
        state.pointer_down(center(0));
        let inside = Point::new(55.0, 45.0);
        state.pointer_move(inside);
        assert_eq!(state.last_pointer(), Some(inside));
    }

    #[test]
    fn rejection_marks_every_cell_error() {
        let mut state = tracker(PatternLockConfig::default())
            .with_callbacks(PatternCallbacks::new().on_complete(|_| false));
        let verdict = draw(&mut state, &[0, 1, 2], Instant::now());
        assert_eq!(verdict, Some(PatternVerdict::Error));
        let cells = states(&state);
        assert!(cells[..3].iter().all(|s| *s == CellState::Error));
        assert_eq!(cells.iter().filter(|s| **s == CellState::Success).count(), 0);
        assert_eq!(state.line_path().tone(), LineTone::Error);
    }

    #[test]
    fn acceptance_marks_every_cell_success() {
        let mut state = tracker(PatternLockConfig::default()).with_callbacks(accepting(&[1, 5, 9]));
        draw(&mut state, &[0, 4, 8], Instant::now());
        let cells = states(&state);
        assert_eq!(cells[0], CellState::Success);
        assert_eq!(cells[4], CellState::Success);
        assert_eq!(cells[8], CellState::Success);
        assert_eq!(cells[1], CellState::Regular);
        assert_eq!(state.line_path().tone(), LineTone::Success);
    }

    #[test]
    fn missing_validator_fails_closed() {
        let mut state = tracker(PatternLockConfig::default());
        assert_eq!(draw(&mut state, &[0, 1], Instant::now()), Some(PatternVerdict::Error));
    }

    #[test]
    fn panicking_validator_fails_closed() {
        let callbacks = PatternCallbacks::new().on_complete(|_| panic!("validator exploded"));
        let mut state = tracker(PatternLockConfig::default()).with_callbacks(callbacks);
        assert_eq!(draw(&mut state, &[0, 1], Instant::now()), Some(PatternVerdict::Error));
        assert_eq!(state.cells()[0].state(), CellState::Error);
    }

    #[test]
    fn secure_mode_keeps_cells_regular_but_reports_ids() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let callbacks = PatternCallbacks::new().on_complete(move |ids| {
            sink.borrow_mut().extend_from_slice(ids);
            true
        });
        let mut state =
            tracker(PatternLockConfig::default().secure_mode(true)).with_callbacks(callbacks);
        let now = Instant::now();

        state.pointer_down(center(0));
        assert!(states(&state).iter().all(|s| *s == CellState::Regular));
        state.pointer_move(center(1));
        state.pointer_move(center(2));
        assert!(states(&state).iter().all(|s| *s == CellState::Regular));
        assert!(state.rubber_band().is_none());
        state.pointer_up(now);

        assert!(states(&state).iter().all(|s| *s == CellState::Regular));
        assert!(state.line_path().is_empty());
        assert!(state.cells().iter().all(|c| c.indicator_degree().is_none()));
        assert_eq!(state.selected_ids(), vec![1, 2, 3]);
        assert_eq!(*received.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn secure_mode_error_resets_immediately() {
        let mut state = tracker(PatternLockConfig::default().secure_mode(true));
        let verdict = draw(&mut state, &[0, 1, 2], Instant::now());
        assert_eq!(verdict, Some(PatternVerdict::Error));
        assert_eq!(state.phase(), SessionPhase::Idle);
        assert!(state.selected_ids().is_empty());
        assert_eq!(state.line_path().tone(), LineTone::Regular);
        assert!(state.next_deadline().is_none());
    }

    #[test]
    fn secure_mode_toggles_at_runtime() {
        let mut state = tracker(PatternLockConfig::default());
        state.enable_secure_mode();
        assert!(state.is_secure());
        state.pointer_down(center(0));
        assert_eq!(state.cells()[0].state(), CellState::Regular);
        state.disable_secure_mode();
        state.pointer_down(center(0));
        assert_eq!(state.cells()[0].state(), CellState::Selected);
    }

    #[test]
    fn reset_clears_every_session_state() {
        let t = Instant::now();

        let mut tracking = tracker(PatternLockConfig::default().line_style(LineStyle::Indicator));
        tracking.pointer_down(center(0));
        tracking.pointer_move(center(1));

        let mut success = tracker(PatternLockConfig::default().line_style(LineStyle::Indicator))
            .with_callbacks(accepting(&[1, 2]));
        draw(&mut success, &[0, 1], t);

        let mut error = tracker(PatternLockConfig::default().line_style(LineStyle::Indicator));
        draw(&mut error, &[0, 1], t);

        for mut state in [tracking, success, error] {
            assert!(state.cells()[0].indicator_degree().is_some());
            state.reset();
            assert_eq!(state.phase(), SessionPhase::Idle);
            assert!(state.selected_ids().is_empty());
            assert!(state.line_path().is_empty());
            assert!(states(&state).iter().all(|s| *s == CellState::Regular));
            assert!(state.cells().iter().all(|c| c.indicator_degree().is_none()));
        }
    }

    #[test]
    fn auto_reset_fires_after_delay() {
        let mut state = tracker(PatternLockConfig::default()).with_callbacks(accepting(&[1, 2]));
        let t = Instant::now();
        draw(&mut state, &[0, 1], t);
        assert_eq!(state.next_deadline(), Some(t + MS_400));

        assert!(!state.tick(t + MS_100));
        assert_eq!(state.phase(), SessionPhase::Finished);

        assert!(state.tick(t + MS_400));
        assert_eq!(state.phase(), SessionPhase::Idle);
        assert!(states(&state).iter().all(|s| *s == CellState::Regular));
        assert!(state.next_deadline().is_none());
    }

    #[test]
    fn auto_reset_uses_error_duration_for_errors() {
        let config = PatternLockConfig::default().error_duration(Duration::from_millis(900));
        let mut state = tracker(config);
        let t = Instant::now();
        draw(&mut state, &[0, 1], t);
        assert!(!state.tick(t + MS_400));
        assert!(state.tick(t + Duration::from_millis(900)));
    }

    #[test]
    fn new_session_invalidates_pending_reset() {
        let mut state = tracker(PatternLockConfig::default()).with_callbacks(accepting(&[1, 2]));
        let t = Instant::now();
        draw(&mut state, &[0, 1], t);
        let stale = state.pending_timer().expect("reset scheduled");

        state.pointer_down(center(4));
        assert!(state.next_deadline().is_none());
        assert!(!state.tick(t + MS_400 + MS_400));
        assert!(!state.fire_timer(stale));
        assert_eq!(state.phase(), SessionPhase::Tracking);
        assert_eq!(state.selected_ids(), vec![5]);
        assert_eq!(state.cells()[4].state(), CellState::Selected);
    }

    #[test]
    fn fire_timer_with_current_token_resets() {
        let mut state = tracker(PatternLockConfig::default());
        draw(&mut state, &[0, 1], Instant::now());
        let token = state.pending_timer().expect("reset scheduled");
        assert!(state.fire_timer(token));
        assert_eq!(state.phase(), SessionPhase::Idle);
        assert!(!state.fire_timer(token));
    }

    #[test]
    fn auto_reset_disabled_keeps_outcome() {
        let mut state = tracker(PatternLockConfig::default());
        state.set_auto_reset_enabled(false);
        let t = Instant::now();
        draw(&mut state, &[0, 1], t);
        assert!(state.next_deadline().is_none());
        assert!(!state.tick(t + Duration::from_secs(10)));
        assert_eq!(state.cells()[0].state(), CellState::Error);
    }

    #[test]
    fn cancel_resets_without_validation() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let callbacks = PatternCallbacks::new().on_complete(move |_| {
            *counter.borrow_mut() += 1;
            true
        });
        let mut state = tracker(PatternLockConfig::default()).with_callbacks(callbacks);
        let now = Instant::now();
        state.handle_event(&PointerEvent::down(center(0).x, center(0).y), now);
        state.handle_event(&PointerEvent::moved(center(1).x, center(1).y), now);
        state.handle_event(&PointerEvent::cancel(), now);
        assert_eq!(state.phase(), SessionPhase::Idle);
        assert!(state.selected_ids().is_empty());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn started_and_progress_callbacks_fire() {
        let log = Rc::new(RefCell::new(Vec::<String>::new()));
        let started = Rc::clone(&log);
        let progress = Rc::clone(&log);
        let callbacks = PatternCallbacks::new()
            .on_started(move || started.borrow_mut().push("started".into()))
            .on_progress(move |ids| progress.borrow_mut().push(format!("{ids:?}")));
        let mut state = tracker(PatternLockConfig::default()).with_callbacks(callbacks);
        state.pointer_down(center(0));
        state.pointer_move(center(0));
        state.pointer_move(center(3));
        assert_eq!(*log.borrow(), vec!["started", "[1]", "[1, 4]"]);
    }

    #[test]
    fn disabled_tracker_ignores_events() {
        let mut state = tracker(PatternLockConfig::default());
        state.set_enabled(false);
        assert!(state.handle_event(&PointerEvent::down(50.0, 50.0), Instant::now()));
        assert_eq!(state.phase(), SessionPhase::Idle);
        assert!(state.selected_ids().is_empty());
    }

    #[test]
    fn indicator_style_clips_segments_and_sets_degree() {
        let config = PatternLockConfig::default().line_style(LineStyle::Indicator);
        let mut state = tracker(config);
        state.pointer_down(center(0));
        state.pointer_move(center(1));
        state.pointer_move(center(4));

        let segments = state.line_path().segments();
        assert_eq!(segments.len(), 2);
        // radius = (100 - 24) / 2 = 38
        assert_eq!(segments[0].start, Point::new(88.0, 50.0));
        assert_eq!(segments[0].end, Point::new(112.0, 50.0));

        assert_eq!(state.cells()[0].indicator_degree(), Some(90.0));
        let down = state.cells()[1].indicator_degree().expect("degree set");
        assert!((down - 180.0).abs() < 1e-3);
        assert_eq!(state.cells()[4].indicator_degree(), None);
    }

    #[test]
    fn common_style_connects_centers() {
        let mut state = tracker(PatternLockConfig::default());
        state.pointer_down(center(0));
        state.pointer_move(center(1));
        let segment = state.line_path().segments()[0];
        assert_eq!(segment, Segment::new(center(0), center(1)));
        assert!(state.cells()[0].indicator_degree().is_none());
    }

    #[test]
    fn rubber_band_follows_pointer() {
        let mut state = tracker(PatternLockConfig::default());
        state.pointer_down(center(0));
        assert!(state.rubber_band().is_none());
        let pointer = Point::new(70.0, 50.0);
        state.pointer_move(pointer);
        assert_eq!(state.rubber_band(), Some(Segment::new(center(0), pointer)));
    }

    #[test]
    fn indicator_rubber_band_hidden_inside_last_circle() {
        let config = PatternLockConfig::default().line_style(LineStyle::Indicator);
        let mut state = tracker(config);
        state.pointer_down(center(0));
        state.pointer_move(Point::new(80.0, 50.0));
        assert!(state.rubber_band().is_none());

        state.pointer_move(Point::new(95.0, 50.0));
        let band = state.rubber_band().expect("pointer outside circle");
        assert_eq!(band.start, Point::new(88.0, 50.0));
        assert_eq!(band.end, Point::new(95.0, 50.0));
    }

    #[test]
    fn rubber_band_gone_after_release() {
        let mut state = tracker(PatternLockConfig::default());
        state.pointer_down(center(0));
        state.pointer_move(Point::new(120.0, 120.0));
        state.pointer_up(Instant::now());
        assert!(state.rubber_band().is_none());
        assert!(state.last_pointer().is_none());
    }

    #[test]
    fn pointer_up_without_session_is_ignored() {
        let mut state = tracker(PatternLockConfig::default());
        assert_eq!(state.pointer_up(Instant::now()), None);
        assert_eq!(state.last_verdict(), None);
    }

    #[test]
    fn enabling_secure_mode_mid_session_hides_selection() {
        let mut state = tracker(PatternLockConfig::default().line_style(LineStyle::Indicator))
            .with_callbacks(accepting(&[1, 2]));
        state.pointer_down(center(0));
        state.pointer_move(center(1));
        assert_eq!(state.cells()[1].state(), CellState::Selected);
        assert!(state.cells()[0].indicator_degree().is_some());

        state.enable_secure_mode();
        assert!(states(&state).iter().all(|s| *s == CellState::Regular));
        assert!(state.cells().iter().all(|c| c.indicator_degree().is_none()));
        assert!(state.line_path().is_empty());
        assert!(state.rubber_band().is_none());
        assert_eq!(state.selected_ids(), vec![1, 2]);

        assert_eq!(state.pointer_up(Instant::now()), Some(PatternVerdict::Success));
        assert!(states(&state).iter().all(|s| *s == CellState::Regular));
        assert_eq!(state.line_path().tone(), LineTone::Regular);
    }

    #[test]
    fn disabling_secure_mode_after_finish_shows_outcome() {
        let mut state = tracker(PatternLockConfig::default().secure_mode(true))
            .with_callbacks(accepting(&[1, 2, 3]));
        assert_eq!(draw(&mut state, &[0, 1, 2], Instant::now()), Some(PatternVerdict::Success));
        assert!(states(&state).iter().all(|s| *s == CellState::Regular));

        state.disable_secure_mode();
        let shown = states(&state);
        assert!(shown[..3].iter().all(|s| *s == CellState::Success));
        assert!(shown[3..].iter().all(|s| *s == CellState::Regular));
        assert_eq!(state.line_path().segments().len(), 2);
        assert_eq!(state.line_path().tone(), LineTone::Success);
    }

    #[test]
    fn relayout_keeps_outcome_and_indicator_angles() {
        let mut state = tracker(PatternLockConfig::default().line_style(LineStyle::Indicator));
        assert_eq!(draw(&mut state, &[0, 1], Instant::now()), Some(PatternVerdict::Error));
        state.set_container_size(600, 600);
        assert_eq!(state.cells()[0].state(), CellState::Error);
        assert_eq!(state.cells()[1].state(), CellState::Error);
        assert_eq!(state.line_path().tone(), LineTone::Error);
        let degree = state.cells()[0].indicator_degree().expect("degree kept");
        assert!((degree - 90.0).abs() < 1e-3);
        assert!(state.cells()[1].indicator_degree().is_none());
    }

    #[test]
    fn relayout_keeps_selection_and_rebuilds_path() {
        let mut state = tracker(PatternLockConfig::default());
        state.pointer_down(center(0));
        state.pointer_move(center(1));
        state.set_container_size(600, 600);
        assert_eq!(state.grid().cell_size(), 200);
        assert_eq!(state.cells()[1].state(), CellState::Selected);
        assert_eq!(
            state.line_path().segments()[0],
            Segment::new(Point::new(100.0, 100.0), Point::new(300.0, 100.0))
        );
    }
}
