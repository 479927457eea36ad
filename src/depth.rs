use image::RgbImage;
use rayon::prelude::*;

use crate::blur_cpu::{CHANNELS, blur_rgb8, gaussian_kernel, radius_for_sigma};
use crate::canvas::CellGrid;
use crate::foundation::error::{WaveprintError, WaveprintResult};

/// Rows whose sigma does not exceed this are left sharp.
const SHARP_SIGMA: f64 = 0.5;

/// Depth-of-field strategy applied after the waves are drawn.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DepthBlur {
    /// Leave the canvas sharp.
    None,
    /// Horizontal focal plane; blur grows with vertical distance from it.
    Rows(RowDepthBlur),
    /// Point focus; blur grows radially, quantized into pre-blurred layers.
    Lens(LensBlur),
}

impl Default for DepthBlur {
    fn default() -> Self {
        Self::Rows(RowDepthBlur::default())
    }
}

impl DepthBlur {
    pub fn validate(&self) -> WaveprintResult<()> {
        match self {
            Self::None => Ok(()),
            Self::Rows(p) => p.validate(),
            Self::Lens(p) => p.validate(),
        }
    }

    pub fn apply(&self, canvas: RgbImage, grid: Option<&CellGrid>) -> WaveprintResult<RgbImage> {
        match self {
            Self::None => Ok(canvas),
            Self::Rows(p) => apply_row_depth_blur(&canvas, p),
            Self::Lens(p) => apply_lens_blur(&canvas, p, grid),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RowDepthBlur {
    /// Focal plane as a fraction of canvas height.
    pub focal_y: f64,
    /// Sigma grows by `2 * max_blur_radius` per canvas height of distance from the plane.
    pub max_blur_radius: f64,
}

impl Default for RowDepthBlur {
    fn default() -> Self {
        Self {
            focal_y: 0.85,
            max_blur_radius: 36.0,
        }
    }
}

impl RowDepthBlur {
    pub fn validate(&self) -> WaveprintResult<()> {
        if !self.focal_y.is_finite() {
            return Err(WaveprintError::validation("rows.focal_y must be finite"));
        }
        if !self.max_blur_radius.is_finite() || self.max_blur_radius < 0.0 {
            return Err(WaveprintError::validation(
                "rows.max_blur_radius must be finite and >= 0",
            ));
        }
        Ok(())
    }

    pub fn sigma_for_row(&self, y: u32, height: u32) -> f64 {
        let h = f64::from(height);
        (f64::from(y) - self.focal_y * h).abs() / h * self.max_blur_radius * 2.0
    }
}

/// Blur each row by its distance from the focal plane.
///
/// Rows are blurred top to bottom in place: the window around row `y` already holds the blurred
/// rows above it, so blur accumulates down the page. Values stay `f32` until the final clamp and
/// truncation to `u8`.
#[tracing::instrument(skip_all, fields(focal_y = params.focal_y, max_blur_radius = params.max_blur_radius))]
pub fn apply_row_depth_blur(src: &RgbImage, params: &RowDepthBlur) -> WaveprintResult<RgbImage> {
    params.validate()?;
    let (width, height) = src.dimensions();
    let row_len = width as usize * CHANNELS;
    let mut work: Vec<f32> = src.as_raw().iter().map(|&v| f32::from(v)).collect();

    if row_len > 0 {
        for y in 0..height as usize {
            let sigma = params.sigma_for_row(y as u32, height);
            if sigma <= SHARP_SIGMA {
                continue;
            }
            let row = blur_row(&work, width, height, y, sigma)?;
            work[y * row_len..(y + 1) * row_len].copy_from_slice(&row);
        }
    }

    tracing::info!(
        "applied depth blur (focal plane at {:.1}%)",
        params.focal_y * 100.0
    );
    let out = work.iter().map(|&v| v.clamp(0.0, 255.0) as u8).collect();
    RgbImage::from_raw(width, height, out)
        .ok_or_else(|| WaveprintError::render("row blur output size mismatch"))
}

/// Row `y` of a 2-D Gaussian over the rows within `int(3 sigma)` of it, mirrored at that
/// window's edges and at the left and right borders.
fn blur_row(
    work: &[f32],
    width: u32,
    height: u32,
    y: usize,
    sigma: f64,
) -> WaveprintResult<Vec<f32>> {
    let row_len = width as usize * CHANNELS;
    let reach = (sigma * 3.0) as usize;
    let win_start = y.saturating_sub(reach);
    let win_end = (y + reach + 1).min(height as usize);
    let win_len = win_end - win_start;
    let local = (y - win_start) as i64;

    let kernel = gaussian_kernel(radius_for_sigma(sigma), sigma)?;

    let column: Vec<f32> = (0..row_len)
        .into_par_iter()
        .map(|i| {
            correlate(&kernel, |j| {
                let sy = win_start + reflect(local + j, win_len);
                f64::from(work[sy * row_len + i])
            })
        })
        .collect();

    let w = width as usize;
    let row = (0..row_len)
        .into_par_iter()
        .map(|i| {
            let (x, c) = ((i / CHANNELS) as i64, i % CHANNELS);
            correlate(&kernel, |j| f64::from(column[reflect(x + j, w) * CHANNELS + c]))
        })
        .collect();
    Ok(row)
}

/// One output sample of a symmetric kernel, summed from the outermost tap pair inwards.
fn correlate(kernel: &[f64], sample: impl Fn(i64) -> f64) -> f32 {
    let r = kernel.len() / 2;
    let mut acc = kernel[r] * sample(0);
    for j in (1..=r).rev() {
        let j = j as i64;
        acc += (sample(-j) + sample(j)) * kernel[r + j as usize];
    }
    acc as f32
}

/// Half-sample symmetric index folding (`d c b a | a b c d | d c b a`).
fn reflect(i: i64, len: usize) -> usize {
    let n = len as i64;
    let period = 2 * n;
    let m = i.rem_euclid(period);
    (if m >= n { period - 1 - m } else { m }) as usize
}

/// Where the lens is focused.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LensFocus {
    Pixel { x: f64, y: f64 },
    /// Center of a grid cell; requires a grid on the canvas.
    Cell { row: u32, col: u32 },
}

impl LensFocus {
    pub fn resolve(&self, grid: Option<&CellGrid>) -> WaveprintResult<(f64, f64)> {
        match *self {
            Self::Pixel { x, y } => {
                if !(x.is_finite() && y.is_finite()) {
                    return Err(WaveprintError::validation("lens focus must be finite"));
                }
                Ok((x, y))
            }
            Self::Cell { row, col } => {
                let grid = grid.ok_or_else(|| {
                    WaveprintError::validation("cell lens focus requires a canvas grid")
                })?;
                Ok(grid.cell_center(row, col))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LensBlur {
    pub focus: LensFocus,
    /// Sigma of the most blurred layer.
    pub max_radius: f64,
    /// Distance (px) scale; `distance * falloff >= 1` is fully blurred.
    pub falloff: f64,
    /// Number of pre-blurred layers, including the sharp one.
    pub levels: u32,
    /// Vertical distance multiplier; `1.0` keeps the falloff circular.
    pub aspect_ratio: f64,
}

impl Default for LensBlur {
    fn default() -> Self {
        Self {
            focus: LensFocus::Pixel { x: 0.0, y: 0.0 },
            max_radius: 15.0,
            falloff: 0.002,
            levels: 5,
            aspect_ratio: 1.0,
        }
    }
}

impl LensBlur {
    pub fn validate(&self) -> WaveprintResult<()> {
        if self.levels < 2 {
            return Err(WaveprintError::validation("lens.levels must be >= 2"));
        }
        if !self.max_radius.is_finite() || self.max_radius < 0.0 {
            return Err(WaveprintError::validation(
                "lens.max_radius must be finite and >= 0",
            ));
        }
        if !self.falloff.is_finite() || self.falloff < 0.0 {
            return Err(WaveprintError::validation(
                "lens.falloff must be finite and >= 0",
            ));
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(WaveprintError::validation(
                "lens.aspect_ratio must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Index of the blur layer used at `(x, y)` given the resolved focus.
    pub fn layer_at(&self, x: u32, y: u32, focus: (f64, f64)) -> usize {
        let dx = f64::from(x) - focus.0;
        let dy = (f64::from(y) - focus.1) * self.aspect_ratio;
        let distance = (dx * dx + dy * dy).sqrt();
        let strength = (distance * self.falloff).clamp(0.0, 1.0).powi(2);
        let top = (self.levels - 1) as usize;
        ((strength * top as f64) as usize).min(top)
    }
}

/// Lens-style depth of field: pick each pixel from one of `levels` uniformly blurred copies.
#[tracing::instrument(skip_all, fields(levels = params.levels, max_radius = params.max_radius))]
pub fn apply_lens_blur(
    src: &RgbImage,
    params: &LensBlur,
    grid: Option<&CellGrid>,
) -> WaveprintResult<RgbImage> {
    params.validate()?;
    let focus = params.focus.resolve(grid)?;
    let (width, height) = src.dimensions();

    let top = f64::from(params.levels - 1);
    let layers = (0..params.levels)
        .map(|i| {
            let sigma = params.max_radius * f64::from(i) / top;
            blur_rgb8(src.as_raw(), width, height, radius_for_sigma(sigma), sigma as f32)
        })
        .collect::<WaveprintResult<Vec<_>>>()?;

    let row_len = width as usize * CHANNELS;
    let mut out = vec![0u8; src.as_raw().len()];
    if row_len > 0 {
        out.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, dst_row)| {
                for x in 0..width {
                    let layer = &layers[params.layer_at(x, y as u32, focus)];
                    let idx = y * row_len + x as usize * CHANNELS;
                    let o = x as usize * CHANNELS;
                    dst_row[o..o + CHANNELS].copy_from_slice(&layer[idx..idx + CHANNELS]);
                }
            });
    }

    tracing::info!(
        "applied lens-style blur centered at ({:.0}, {:.0})",
        focus.0,
        focus.1
    );
    RgbImage::from_raw(width, height, out)
        .ok_or_else(|| WaveprintError::render("lens blur output size mismatch"))
}

#[cfg(test)]
#[path = "../tests/unit/effects/depth.rs"]
mod tests;
