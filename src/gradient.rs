use image::RgbImage;

use crate::colormap::Colormap;
use crate::foundation::core::Rgb8;

/// Axis a colormap gradient runs along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// Background fill applied before any wave is drawn.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gradient {
    /// Vertical two-color blend.
    Linear { start: Rgb8, end: Rgb8 },
    /// Colormap ramp along `direction`.
    Colormap {
        colormap: Colormap,
        #[serde(default)]
        direction: Direction,
    },
}

impl Default for Gradient {
    fn default() -> Self {
        Self::Linear {
            start: Rgb8::new(20, 20, 20),
            end: Rgb8::new(255, 255, 195),
        }
    }
}

impl Gradient {
    pub fn apply(&self, canvas: &mut RgbImage) {
        match *self {
            Self::Linear { start, end } => fill_linear_gradient(canvas, start, end),
            Self::Colormap {
                colormap,
                direction,
            } => fill_colormap_gradient(canvas, colormap, direction),
        }
        tracing::debug!(gradient = ?self, "filled background");
    }
}

/// `linspace(0, 1, n)[i]`.
fn linspace_at(i: u32, n: u32) -> f64 {
    if n <= 1 {
        0.0
    } else {
        f64::from(i) / f64::from(n - 1)
    }
}

pub fn fill_linear_gradient(canvas: &mut RgbImage, start: Rgb8, end: Rgb8) {
    let height = canvas.height();
    for (y, row) in canvas.rows_mut().enumerate() {
        let px = Rgb8::lerp(start, end, linspace_at(y as u32, height)).to_pixel();
        for p in row {
            *p = px;
        }
    }
}

pub fn fill_colormap_gradient(canvas: &mut RgbImage, colormap: Colormap, direction: Direction) {
    let (width, height) = canvas.dimensions();
    match direction {
        Direction::Vertical => {
            for (y, row) in canvas.rows_mut().enumerate() {
                let px = colormap.sample(linspace_at(y as u32, height)).to_pixel();
                for p in row {
                    *p = px;
                }
            }
        }
        Direction::Horizontal => {
            let lut: Vec<_> = (0..width)
                .map(|x| colormap.sample(linspace_at(x, width)).to_pixel())
                .collect();
            for row in canvas.rows_mut() {
                for (p, &c) in row.zip(&lut) {
                    *p = c;
                }
            }
        }
    }
    tracing::info!(%colormap, ?direction, "filled colormap gradient");
}

#[cfg(test)]
#[path = "../tests/unit/gradient.rs"]
mod tests;
