#![forbid(unsafe_code)]

//! Grid layout and hit-testing.
//!
//! Cells are square and take an equal share of the container width:
//! `side = container_width / columns` (integer division, excess width is left
//! unused). Rows stack below each other with the same side, so the grid's
//! natural height is `rows * side` regardless of the container height. Each
//! cell is padded by `spacing / 2` on every side, which is what separates
//! neighbouring dots.
//!
//! # Invariants
//!
//! 1. `cells.len() == rows * columns` and `cells[i].index() == i`.
//! 2. Cell bounds never overlap; adjacent cells share an edge.
//! 3. Hit-testing at any cell center returns that cell (for hit-area padding
//!    ratios below one half).

use patternlock_core::geometry::{Point, Rect, Sides};

use crate::cell::Cell;

/// The laid-out cell grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cell_size: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Lay out `rows × columns` square cells in a container.
    ///
    /// `rows` and `columns` must be positive; a zero-width container yields
    /// zero-size cells that never match a hit test.
    #[must_use]
    pub fn layout(
        container_width: i32,
        _container_height: i32,
        rows: usize,
        columns: usize,
        spacing: i32,
    ) -> Self {
        // Height does not influence sizing; hosts read `measured_height`.
        let cell_size = match i32::try_from(columns) {
            Ok(cols) if cols > 0 => container_width.max(0) / cols,
            _ => 0,
        };
        // Every cell edge, including `rows * cell_size`, must fit in i32.
        let span = i32::try_from(rows.max(columns)).unwrap_or(i32::MAX).max(1);
        let cell_size = cell_size.min(i32::MAX / span);
        let padding = Sides::all(spacing / 2);

        let mut cells = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for col in 0..columns {
                let bounds = Rect::new(
                    (col as i32).saturating_mul(cell_size),
                    (row as i32).saturating_mul(cell_size),
                    cell_size,
                    cell_size,
                );
                cells.push(Cell::new(row * columns + col, bounds, padding));
            }
        }

        Self {
            rows,
            columns,
            cell_size,
            cells,
        }
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Side length of every cell.
    #[inline]
    #[must_use]
    pub const fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Height the grid occupies (`rows * cell_size`).
    #[inline]
    #[must_use]
    pub const fn measured_height(&self) -> i32 {
        (self.rows as i32).saturating_mul(self.cell_size)
    }

    /// All cells in index order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at a 0-based index.
    #[inline]
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Index of the first cell whose hit area contains `point`.
    ///
    /// The hit area is the cell bounds shrunk by
    /// `hit_area_padding_ratio × cell width` on every side, edges inclusive.
    #[must_use]
    pub fn hit_index(&self, point: Point, hit_area_padding_ratio: f32) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| {
                let inset = cell.bounds().width as f32 * hit_area_padding_ratio;
                !cell.bounds().is_empty() && cell.bounds().contains_inset(point, inset)
            })
    }

    /// The first cell whose hit area contains `point`.
    #[must_use]
    pub fn hit_test(&self, point: Point, hit_area_padding_ratio: f32) -> Option<&Cell> {
        self.hit_index(point, hit_area_padding_ratio)
            .and_then(|index| self.cells.get(index))
    }
}
