use std::str::FromStr;

use crate::foundation::core::Rgb8;
use crate::foundation::error::WaveprintError;

/// Named sequential colormaps.
///
/// Sampling goes through a 256-entry lookup: `t` selects entry `min(floor(256 t), 255)`. The
/// perceptual maps are stored as nine evenly spaced anchors and interpolated linearly between
/// them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Magma,
    Inferno,
    Plasma,
    Viridis,
    #[serde(alias = "grey")]
    Gray,
}

const MAGMA: [u32; 9] = [
    0x000004, 0x1c1044, 0x4f127b, 0x812581, 0xb5367a, 0xe55064, 0xfb8761, 0xfec287, 0xfcfdbf,
];
const INFERNO: [u32; 9] = [
    0x000004, 0x1b0c42, 0x4b0c6b, 0x781c6d, 0xa52c60, 0xcf4446, 0xed6925, 0xfb9a06, 0xfcffa4,
];
const PLASMA: [u32; 9] = [
    0x0d0887, 0x4c02a1, 0x7e03a8, 0xa92395, 0xcc4678, 0xe56b5d, 0xf89441, 0xfdc328, 0xf0f921,
];
const VIRIDIS: [u32; 9] = [
    0x440154, 0x472d7b, 0x3b528b, 0x2c728e, 0x21908c, 0x27ad81, 0x5dc863, 0xaadc32, 0xfde725,
];
const GRAY: [u32; 2] = [0x000000, 0xffffff];

const LUT_SIZE: usize = 256;

impl Colormap {
    pub const ALL: [Self; 5] = [
        Self::Magma,
        Self::Inferno,
        Self::Plasma,
        Self::Viridis,
        Self::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Magma => "magma",
            Self::Inferno => "inferno",
            Self::Plasma => "plasma",
            Self::Viridis => "viridis",
            Self::Gray => "gray",
        }
    }

    fn anchors(self) -> &'static [u32] {
        match self {
            Self::Magma => &MAGMA,
            Self::Inferno => &INFERNO,
            Self::Plasma => &PLASMA,
            Self::Viridis => &VIRIDIS,
            Self::Gray => &GRAY,
        }
    }

    /// Color at `t`, clamped into `[0, 1]`. NaN samples the low end.
    pub fn sample(self, t: f64) -> Rgb8 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let entry = ((t * LUT_SIZE as f64) as usize).min(LUT_SIZE - 1);
        // entry k sits at k * (1 / 255) along the map
        let pos = entry as f64 * (1.0 / (LUT_SIZE - 1) as f64);

        let anchors = self.anchors();
        let scaled = pos * (anchors.len() - 1) as f64;
        let lo = (scaled.floor() as usize).min(anchors.len() - 2);
        let frac = scaled - lo as f64;

        let [r0, g0, b0] = channels(anchors[lo]);
        let [r1, g1, b1] = channels(anchors[lo + 1]);
        Rgb8::new(
            mix(r0, r1, frac),
            mix(g0, g1, frac),
            mix(b0, b1, frac),
        )
    }
}

fn channels(hex: u32) -> [f64; 3] {
    [
        f64::from((hex >> 16) & 0xff),
        f64::from((hex >> 8) & 0xff),
        f64::from(hex & 0xff),
    ]
}

// Truncates like `int(255 * c)` on unit-range channels.
fn mix(a: f64, b: f64, t: f64) -> u8 {
    (a + (b - a) * t).clamp(0.0, 255.0) as u8
}

impl FromStr for Colormap {
    type Err = WaveprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "magma" => Ok(Self::Magma),
            "inferno" => Ok(Self::Inferno),
            "plasma" => Ok(Self::Plasma),
            "viridis" => Ok(Self::Viridis),
            "gray" | "grey" => Ok(Self::Gray),
            _ => Err(WaveprintError::validation(format!(
                "unknown colormap '{name}'"
            ))),
        }
    }
}

impl std::fmt::Display for Colormap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../tests/unit/colormap.rs"]
mod tests;
