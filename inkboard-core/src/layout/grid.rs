use crate::foundation::core::{Canvas, Rect};

/// Grid dimensions and spacing for partitioning a canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
    /// Outer margin in pixels on every canvas edge.
    pub margin: f64,
    /// Gap in pixels between adjacent cells.
    pub gap: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: 12,
            cols: 8,
            margin: 10.0,
            gap: 5.0,
        }
    }
}

/// Cell reference of a component placement: origin cell plus spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPosition {
    /// Zero-based row index.
    pub row: u32,
    /// Zero-based column index.
    pub col: u32,
    /// Number of rows covered, at least 1.
    #[serde(default = "default_span")]
    pub row_span: u32,
    /// Number of columns covered, at least 1.
    #[serde(default = "default_span")]
    pub col_span: u32,
}

fn default_span() -> u32 {
    1
}

impl GridPosition {
    /// Single-cell position at `(row, col)`.
    pub fn cell(row: u32, col: u32) -> Self {
        Self {
            row,
            col,
            row_span: 1,
            col_span: 1,
        }
    }

    /// Position spanning `row_span` rows and `col_span` columns.
    pub fn span(row: u32, col: u32, row_span: u32, col_span: u32) -> Self {
        Self {
            row,
            col,
            row_span,
            col_span,
        }
    }
}

/// Uniform partition of a canvas into grid cells.
///
/// Cell sizing is uniform; there is no support for variable-width tracks.
/// [`GridSystem::cell_to_pixels`] is a pure coordinate transform with no
/// error path; callers are responsible for passing in-range indices.
#[derive(Clone, Copy, Debug)]
pub struct GridSystem {
    width: f64,
    height: f64,
    spec: GridSpec,
    cell_width: f64,
    cell_height: f64,
}

impl GridSystem {
    /// Partition `canvas` according to `spec`.
    pub fn new(canvas: Canvas, spec: GridSpec) -> Self {
        let width = f64::from(canvas.width);
        let height = f64::from(canvas.height);
        let cols = f64::from(spec.cols.max(1));
        let rows = f64::from(spec.rows.max(1));
        let cell_width = (width - 2.0 * spec.margin - (cols - 1.0) * spec.gap) / cols;
        let cell_height = (height - 2.0 * spec.margin - (rows - 1.0) * spec.gap) / rows;
        Self {
            width,
            height,
            spec,
            cell_width,
            cell_height,
        }
    }

    /// Derived width of one cell in pixels.
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Derived height of one cell in pixels.
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Grid spec this system was constructed with.
    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    /// Resolve a cell reference into an absolute pixel rectangle.
    pub fn cell_to_pixels(&self, pos: GridPosition) -> Rect {
        let col_span = f64::from(pos.col_span.max(1));
        let row_span = f64::from(pos.row_span.max(1));
        let x = self.spec.margin + f64::from(pos.col) * (self.cell_width + self.spec.gap);
        let y = self.spec.margin + f64::from(pos.row) * (self.cell_height + self.spec.gap);
        let w = col_span * self.cell_width + (col_span - 1.0) * self.spec.gap;
        let h = row_span * self.cell_height + (row_span - 1.0) * self.spec.gap;
        Rect::new(x, y, x + w, y + h)
    }

    /// Whether `bounds` lies inside the canvas the grid was built for.
    pub fn contains(&self, bounds: Rect) -> bool {
        bounds.x0 >= 0.0 && bounds.y0 >= 0.0 && bounds.x1 <= self.width && bounds.y1 <= self.height
    }

    /// Hairline rules along every cell edge, for visual calibration of
    /// layouts. Purely a debug aid; does not affect layout correctness.
    pub fn overlay_rules(&self) -> Vec<Rect> {
        let mut rules = Vec::new();
        let inner_x1 = self.width - self.spec.margin;
        let inner_y1 = self.height - self.spec.margin;

        for col in 0..=self.spec.cols {
            let x = if col == self.spec.cols {
                inner_x1 - 1.0
            } else {
                self.spec.margin + f64::from(col) * (self.cell_width + self.spec.gap)
            };
            rules.push(Rect::new(x, self.spec.margin, x + 1.0, inner_y1));
        }
        for row in 0..=self.spec.rows {
            let y = if row == self.spec.rows {
                inner_y1 - 1.0
            } else {
                self.spec.margin + f64::from(row) * (self.cell_height + self.spec.gap)
            };
            rules.push(Rect::new(self.spec.margin, y, inner_x1, y + 1.0));
        }
        rules
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
