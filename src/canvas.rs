use image::RgbImage;

use crate::foundation::core::{PaperSize, Rgb8};
use crate::foundation::error::{WaveprintError, WaveprintResult};

/// Allocate a white canvas sized to `paper` at `dpi`.
pub fn create_canvas(paper: PaperSize, dpi: u32) -> WaveprintResult<RgbImage> {
    let (width, height) = paper.pixels(dpi)?;
    let canvas = RgbImage::from_pixel(width, height, Rgb8::WHITE.to_pixel());
    tracing::info!(width, height, dpi, "created canvas");
    Ok(canvas)
}

/// Regular rows x cols layout over a canvas.
///
/// Cells use integer division, so the right and bottom edges may keep a remainder strip that
/// belongs to no cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGrid {
    pub rows: u32,
    pub cols: u32,
    pub cell_w: u32,
    pub cell_h: u32,
}

impl CellGrid {
    pub fn new(width: u32, height: u32, rows: u32, cols: u32) -> WaveprintResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(WaveprintError::validation("grid rows and cols must be > 0"));
        }
        let cell_w = width / cols;
        let cell_h = height / rows;
        if cell_w == 0 || cell_h == 0 {
            return Err(WaveprintError::validation(format!(
                "grid {rows}x{cols} is too fine for a {width}x{height} canvas"
            )));
        }
        tracing::debug!(rows, cols, cell_w, cell_h, "created cell grid");
        Ok(Self {
            rows,
            cols,
            cell_w,
            cell_h,
        })
    }

    /// Pixel center of a cell. Indices past the grid extrapolate rather than fail.
    pub fn cell_center(&self, row: u32, col: u32) -> (f64, f64) {
        let x = (f64::from(col) * f64::from(self.cell_w) + f64::from(self.cell_w) / 2.0).trunc();
        let y = (f64::from(row) * f64::from(self.cell_h) + f64::from(self.cell_h) / 2.0).trunc();
        (x, y)
    }
}

/// Paint a single grid cell with `color`.
pub fn fill_cell(
    canvas: &mut RgbImage,
    grid: &CellGrid,
    row: u32,
    col: u32,
    color: Rgb8,
) -> WaveprintResult<()> {
    if row >= grid.rows || col >= grid.cols {
        return Err(WaveprintError::validation(format!(
            "cell ({row}, {col}) is outside the {}x{} grid",
            grid.rows, grid.cols
        )));
    }

    let x0 = col * grid.cell_w;
    let y0 = row * grid.cell_h;
    let x1 = (x0 + grid.cell_w).min(canvas.width());
    let y1 = (y0 + grid.cell_h).min(canvas.height());
    let px = color.to_pixel();
    for y in y0..y1 {
        for x in x0..x1 {
            canvas.put_pixel(x, y, px);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/canvas.rs"]
mod tests;
