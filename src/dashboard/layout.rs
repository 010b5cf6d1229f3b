//! Subplot grid geometry.
//!
//! Cells are laid out on the unit "paper" square with the same default
//! spacing plotly's subplot helper uses: `0.2 / cols` between columns and
//! `0.3 / rows` between rows. Row 1 is at the top.

/// Horizontal gap shared out between the columns
const HORIZONTAL_SPACING: f64 = 0.2;
/// Vertical gap shared out between the rows
const VERTICAL_SPACING: f64 = 0.3;

/// A span of the paper axis, `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Lower edge
    pub start: f64,
    /// Upper edge
    pub end: f64,
}

impl Domain {
    /// Midpoint of the span
    #[must_use]
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// `[start, end]`, the form plotly expects
    #[must_use]
    pub const fn as_array(&self) -> [f64; 2] {
        [self.start, self.end]
    }
}

/// Placement of one cell of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// 1-based row, counted from the top
    pub row: usize,
    /// 1-based column, counted from the left
    pub col: usize,
    /// Horizontal span
    pub x: Domain,
    /// Vertical span
    pub y: Domain,
    /// Axis number shared by the cell's x and y axes (1 for the first cell)
    pub axis: usize,
}

impl Cell {
    /// Trace reference to the cell's x axis: `x`, `x2`, ...
    #[must_use]
    pub fn x_ref(&self) -> String {
        axis_ref("x", self.axis)
    }

    /// Trace reference to the cell's y axis: `y`, `y2`, ...
    #[must_use]
    pub fn y_ref(&self) -> String {
        axis_ref("y", self.axis)
    }

    /// Layout key of the cell's x axis: `xaxis`, `xaxis2`, ...
    #[must_use]
    pub fn x_axis_key(&self) -> String {
        axis_ref("xaxis", self.axis)
    }

    /// Layout key of the cell's y axis: `yaxis`, `yaxis2`, ...
    #[must_use]
    pub fn y_axis_key(&self) -> String {
        axis_ref("yaxis", self.axis)
    }
}

/// Plotly leaves the number off the first axis
fn axis_ref(prefix: &str, axis: usize) -> String {
    if axis == 1 {
        prefix.to_string()
    } else {
        format!("{prefix}{axis}")
    }
}

/// A `rows` x `cols` subplot grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Grid {
    /// Creates a grid; both dimensions must be at least 1
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether `(row, col)` is a cell of this grid
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= 1 && row <= self.rows && col >= 1 && col <= self.cols
    }

    /// Geometry of the cell at `(row, col)`, if it exists
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if !self.contains(row, col) {
            return None;
        }

        let (rows, cols) = (self.rows as f64, self.cols as f64);
        let h_gap = HORIZONTAL_SPACING / cols;
        let v_gap = VERTICAL_SPACING / rows;
        let width = (1.0 - h_gap * (cols - 1.0)) / cols;
        let height = (1.0 - v_gap * (rows - 1.0)) / rows;

        let x_start = (col - 1) as f64 * (width + h_gap);
        let y_end = 1.0 - (row - 1) as f64 * (height + v_gap);

        Some(Cell {
            row,
            col,
            x: Domain {
                start: x_start,
                end: (x_start + width).min(1.0),
            },
            y: Domain {
                start: (y_end - height).max(0.0),
                end: y_end,
            },
            axis: (row - 1) * self.cols + col,
        })
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (1..=self.rows).flat_map(move |row| (1..=self.cols).filter_map(move |col| self.cell(row, col)))
    }
}
