//! Fixed-size ASCII chart canvas for terminal presentation.
//!
//! This is intentionally "dumb" (fixed grid, no color), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)

/// A character grid with data-space coordinates mapped onto it.
///
/// Row 0 is the top of the chart; y grows upward in data space.
pub struct Canvas {
    width: usize,
    height: usize,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    grid: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        let width = width.max(10);
        let height = height.max(4);
        let (x_min, x_max) = widen_if_flat(x_range);
        let (y_min, y_max) = widen_if_flat(y_range);

        Self {
            width,
            height,
            x_min,
            x_max,
            y_min,
            y_max,
            grid: vec![vec![' '; width]; height],
        }
    }

    /// Place a marker, overwriting whatever is in the cell.
    pub fn point(&mut self, x: f64, y: f64, ch: char) {
        let (col, row) = self.cell(x, y);
        self.grid[row][col] = ch;
    }

    /// Draw a straight segment between two data points. Only blank cells
    /// are filled, so markers drawn afterwards stay visible and segments
    /// do not erase each other.
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), ch: char) {
        let (x0, y0) = self.cell(from.0, from.1);
        let (x1, y1) = self.cell(to.0, to.1);
        self.segment(x0 as isize, y0 as isize, x1 as isize, y1 as isize, ch);
    }

    /// Draw a vertical bar from the bottom of the chart up to `y`.
    pub fn bar(&mut self, x: f64, y: f64, ch: char) {
        let (col, top_row) = self.cell(x, y);
        for row in top_row..self.height {
            self.grid[row][col] = ch;
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in &self.grid {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

    fn cell(&self, x: f64, y: f64) -> (usize, usize) {
        let u = ((x - self.x_min) / (self.x_max - self.x_min)).clamp(0.0, 1.0);
        let v = ((y - self.y_min) / (self.y_max - self.y_min)).clamp(0.0, 1.0);

        let col = (u * (self.width as f64 - 1.0)).round() as usize;
        // v=1.0 is the top of the chart, which is row 0.
        let row = ((1.0 - v) * (self.height as f64 - 1.0)).round() as usize;
        (col, row)
    }

    /// Integer segment drawing (Bresenham).
    fn segment(&mut self, mut x0: isize, mut y0: isize, x1: isize, y1: isize, ch: char) {
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            let row = y0 as usize;
            let col = x0 as usize;
            if row < self.height && col < self.width && self.grid[row][col] == ' ' {
                self.grid[row][col] = ch;
            }

            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

/// Pad a value range by a fraction of its span so extremes do not sit on
/// the chart border.
pub fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-9);
    (min - pad, max + pad)
}

fn widen_if_flat((min, max): (f64, f64)) -> (f64, f64) {
    if (max - min).abs() < 1e-9 {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}
