//! Property-based invariant tests for grid layout, hit-testing, and
//! selection tracking.
//!
//! 1. A cell's exact center always hits that cell, for every R, C in 1..=8.
//! 2. A hit always lies inside the hit cell's padded area.
//! 3. Points past the laid-out grid never hit.
//! 4. Replaying moves never duplicates a selected cell.
//! 5. Selection order is first-visit order.

use patternlock_core::geometry::Point;
use patternlock_widgets::{Grid, PatternLockConfig, PatternLockState};
use proptest::prelude::*;

const RATIO: f32 = 0.2;

// ── Helpers ─────────────────────────────────────────────────────────────

fn grid_shape() -> impl Strategy<Value = (usize, usize, i32, i32)> {
    (1usize..=8, 1usize..=8, 0i32..=40).prop_flat_map(|(rows, columns, spacing)| {
        let min_width = columns as i32 * 10;
        (Just(rows), Just(columns), min_width..=1200, Just(spacing))
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Hit-testing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn center_hits_own_cell((rows, columns, width, spacing) in grid_shape()) {
        let grid = Grid::layout(width, width, rows, columns, spacing);
        prop_assert_eq!(grid.cells().len(), rows * columns);
        for cell in grid.cells() {
            prop_assert_eq!(grid.hit_index(cell.center(), RATIO), Some(cell.index()));
        }
    }

    #[test]
    fn hit_lies_inside_padded_area(
        (rows, columns, width, spacing) in grid_shape(),
        fx in 0.0f32..1.0,
        fy in 0.0f32..1.0,
    ) {
        let grid = Grid::layout(width, width, rows, columns, spacing);
        let point = Point::new(fx * width as f32, fy * grid.measured_height() as f32);
        if let Some(cell) = grid.hit_test(point, RATIO) {
            let bounds = cell.bounds();
            let inset = bounds.width as f32 * RATIO;
            prop_assert!(point.x >= bounds.left() as f32 + inset);
            prop_assert!(point.x <= bounds.right() as f32 - inset);
            prop_assert!(point.y >= bounds.top() as f32 + inset);
            prop_assert!(point.y <= bounds.bottom() as f32 - inset);
        }
    }

    #[test]
    fn points_past_grid_never_hit(
        (rows, columns, width, spacing) in grid_shape(),
        beyond in 0.0f32..500.0,
        along in 0.0f32..1.0,
    ) {
        let grid = Grid::layout(width, width, rows, columns, spacing);
        let grid_width = (grid.cell_size() * columns as i32) as f32;
        let grid_height = grid.measured_height() as f32;
        let right = Point::new(grid_width + beyond, along * grid_height);
        let below = Point::new(along * grid_width, grid_height + beyond);
        let left = Point::new(-beyond - 0.1, along * grid_height);
        prop_assert_eq!(grid.hit_index(right, RATIO), None);
        prop_assert_eq!(grid.hit_index(below, RATIO), None);
        prop_assert_eq!(grid.hit_index(left, RATIO), None);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. Selection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn replayed_moves_never_duplicate(visits in proptest::collection::vec(0usize..9, 1..40)) {
        let mut state = PatternLockState::new(PatternLockConfig::default(), 300, 300);
        let centers: Vec<Point> = state.cells().iter().map(|c| c.center()).collect();

        state.pointer_down(centers[visits[0]]);
        for &index in &visits[1..] {
            state.pointer_move(centers[index]);
        }

        let mut expected: Vec<usize> = Vec::new();
        for &index in &visits {
            if !expected.contains(&index) {
                expected.push(index);
            }
        }
        prop_assert_eq!(state.selected_indices(), expected.as_slice());
        let ids: Vec<usize> = expected.iter().map(|i| i + 1).collect();
        prop_assert_eq!(state.selected_ids(), ids);
        prop_assert_eq!(
            state.line_path().segments().len(),
            expected.len().saturating_sub(1)
        );
    }
}
