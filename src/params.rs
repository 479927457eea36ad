use rand::Rng;

use crate::colormap::Colormap;
use crate::waves::{CurveRounding, WaveField};

/// Vertical drift of each successive wave in a randomized field.
const RANDOM_Y_SPAN: f64 = 0.3;

/// A randomized but visually reasonable wave field.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RandomWaveParams {
    pub step: f64,
    pub frequency: f64,
    pub amplitude: f64,
    pub thickness: u32,
    pub x_offset: f64,
    pub y_pos: f64,
}

impl RandomWaveParams {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let step = (rng.gen_range(0.02..=0.1f64) * 1000.0).round() / 1000.0;
        let params = Self {
            step,
            frequency: rng.gen_range(1.0..=6.0),
            amplitude: rng.gen_range(0.1..=0.5),
            thickness: rng.gen_range(5..=20),
            x_offset: rng.gen_range(-0.5..=0.5),
            y_pos: rng.gen_range(0.1..=0.9),
        };
        tracing::info!(
            "randomized parameters: step={}, freq={:.2}, amp={:.2}, thickness={}, x_offset={:.2}, y_pos={:.2}",
            params.step,
            params.frequency,
            params.amplitude,
            params.thickness,
            params.x_offset,
            params.y_pos
        );
        params
    }

    pub fn wave_field(&self, colormap: Colormap) -> WaveField {
        WaveField {
            step: self.step,
            y_start: self.y_pos,
            y_span: RANDOM_Y_SPAN,
            amplitude: self.amplitude,
            frequency: self.frequency,
            thickness: self.thickness,
            colormap,
            phase_offset: self.x_offset,
            rounding: CurveRounding::PerTerm,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/params.rs"]
mod tests;
