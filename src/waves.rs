use std::f64::consts::TAU;

use image::RgbImage;

use crate::colormap::Colormap;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{WaveprintError, WaveprintResult};

/// How curve coordinates are snapped to whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveRounding {
    /// Truncate the finished y once.
    #[default]
    Final,
    /// Truncate the center, the amplitude in pixels and the sine offset separately.
    PerTerm,
}

/// A single sine stroke across the full canvas width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SineWave {
    /// Phase shift as a fraction of the canvas width.
    pub x_offset: f64,
    /// Vertical center as a fraction of canvas height.
    pub y_pos: f64,
    /// Fraction of half the canvas height.
    pub amplitude: f64,
    /// Cycles across the canvas width.
    pub frequency: f64,
    pub color: Rgb8,
    /// Stroke width in pixels.
    pub thickness: u32,
    pub rounding: CurveRounding,
}

impl SineWave {
    /// Curve y for every column, truncated toward zero.
    pub fn sample(&self, width: u32, height: u32) -> Vec<i32> {
        let w = f64::from(width);
        let h = f64::from(height);
        let center = self.y_pos * h;
        let amp_px = self.amplitude * h / 2.0;
        (0..width)
            .map(|x| {
                let phase = TAU * self.frequency * (f64::from(x) / w - self.x_offset);
                match self.rounding {
                    CurveRounding::Final => (center - amp_px * phase.sin()) as i32,
                    CurveRounding::PerTerm => {
                        let offset = phase.sin() * f64::from(amp_px as i32);
                        center as i32 - offset as i32
                    }
                }
            })
            .collect()
    }
}

pub fn draw_sine_wave(canvas: &mut RgbImage, wave: &SineWave) {
    let ys = wave.sample(canvas.width(), canvas.height());
    stroke_curve(canvas, &ys, wave.thickness, wave.color);
}

/// Stroke a curve given as one y per column with a round brush of `thickness` pixels.
///
/// Each column is filled as a single vertical span: the union of the brush discs centered on
/// nearby samples, widened to meet the midpoints to its neighbours so steep segments stay
/// connected.
fn stroke_curve(canvas: &mut RgbImage, ys: &[i32], thickness: u32, color: Rgb8) {
    if thickness == 0 || ys.is_empty() {
        return;
    }
    let (width, height) = canvas.dimensions();
    let half = f64::from(thickness) / 2.0;
    let reach = half.floor() as usize;
    let px = color.to_pixel();
    let n = ys.len().min(width as usize);

    for x in 0..n {
        let yx = f64::from(ys[x]);
        let mut lo = yx - half;
        let mut hi = yx + half;

        for k in x.saturating_sub(reach)..(x + reach + 1).min(n) {
            let dx = k.abs_diff(x) as f64;
            let ext = (half * half - dx * dx).max(0.0).sqrt();
            let yk = f64::from(ys[k]);
            lo = lo.min(yk - ext);
            hi = hi.max(yk + ext);
        }
        for nb in [x.checked_sub(1), Some(x + 1).filter(|&i| i < n)]
            .into_iter()
            .flatten()
        {
            let mid = (yx + f64::from(ys[nb])) / 2.0;
            lo = lo.min(mid);
            hi = hi.max(mid);
        }

        let y0 = (lo + 0.5).floor().max(0.0);
        let y1 = (hi + 0.5).floor().min(f64::from(height));
        if y0 >= y1 {
            continue;
        }
        for y in y0 as u32..y1 as u32 {
            canvas.put_pixel(x as u32, y, px);
        }
    }
}

/// A family of waves sweeping down the canvas, colored by position in the sweep.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaveField {
    /// Increment of the sweep parameter `i` over `[0, 1)`.
    pub step: f64,
    pub y_start: f64,
    pub y_span: f64,
    pub amplitude: f64,
    pub frequency: f64,
    pub thickness: u32,
    pub colormap: Colormap,
    pub phase_offset: f64,
    pub rounding: CurveRounding,
}

impl Default for WaveField {
    fn default() -> Self {
        Self {
            step: 0.0025,
            y_start: 0.1,
            y_span: 0.75,
            amplitude: 0.3,
            frequency: 3.5,
            thickness: 40,
            colormap: Colormap::Magma,
            phase_offset: 0.0,
            rounding: CurveRounding::Final,
        }
    }
}

impl WaveField {
    pub fn validate(&self) -> WaveprintResult<()> {
        if !self.step.is_finite() || self.step <= 0.0 || self.step > 1.0 {
            return Err(WaveprintError::validation("waves.step must be in (0, 1]"));
        }
        let finite = [
            ("y_start", self.y_start),
            ("y_span", self.y_span),
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("phase_offset", self.phase_offset),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(WaveprintError::validation(format!(
                    "waves.{name} must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Number of waves, `ceil(1 / step)`.
    pub fn len(&self) -> usize {
        (1.0 / self.step).ceil() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Waves in paint order.
    pub fn waves(&self) -> impl Iterator<Item = SineWave> + '_ {
        (0..self.len()).map(move |k| {
            let i = k as f64 * self.step;
            SineWave {
                x_offset: self.phase_offset + i,
                y_pos: self.y_start + i * self.y_span,
                amplitude: self.amplitude,
                frequency: self.frequency,
                color: self.colormap.sample(i),
                thickness: self.thickness,
                rounding: self.rounding,
            }
        })
    }
}

#[tracing::instrument(skip_all, fields(step = field.step, colormap = %field.colormap))]
pub fn draw_wave_field(canvas: &mut RgbImage, field: &WaveField) -> WaveprintResult<()> {
    field.validate()?;
    let mut count = 0usize;
    for wave in field.waves() {
        draw_sine_wave(canvas, &wave);
        count += 1;
    }
    tracing::info!(count, "drew waves");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/waves.rs"]
mod tests;
