use crate::foundation::error::{WaveprintError, WaveprintResult};

const MM_PER_INCH: f64 = 25.4;

/// Opaque 8-bit RGB color.
///
/// Serialized as a `[r, g, b]` array so configs stay short.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation `a * (1 - t) + b * t` per channel.
    ///
    /// Channels are truncated, not rounded, so a gradient reaches `b` only at `t == 1`.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        fn mix(a: u8, b: u8, t: f64) -> u8 {
            let v = f64::from(a) * (1.0 - t) + f64::from(b) * t;
            v.clamp(0.0, 255.0) as u8
        }

        let t = t.clamp(0.0, 1.0);
        Self {
            r: mix(a.r, b.r, t),
            g: mix(a.g, b.g, t),
            b: mix(a.b, b.b, t),
        }
    }

    pub fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(v: [u8; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(c: Rgb8) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Physical paper dimensions in millimetres.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaperSize {
    /// Width in millimetres.
    pub width_mm: f64,
    /// Height in millimetres.
    pub height_mm: f64,
}

impl PaperSize {
    /// ISO 216 A4, portrait.
    pub const A4: Self = Self {
        width_mm: 210.0,
        height_mm: 297.0,
    };

    /// Pixel dimensions at `dpi`, truncated per axis.
    pub fn pixels(self, dpi: u32) -> WaveprintResult<(u32, u32)> {
        if dpi == 0 {
            return Err(WaveprintError::validation("dpi must be > 0"));
        }
        if !(self.width_mm.is_finite() && self.height_mm.is_finite())
            || self.width_mm <= 0.0
            || self.height_mm <= 0.0
        {
            return Err(WaveprintError::validation(
                "paper dimensions must be finite and > 0",
            ));
        }

        let dpi = f64::from(dpi);
        let w = (self.width_mm / MM_PER_INCH * dpi).floor();
        let h = (self.height_mm / MM_PER_INCH * dpi).floor();
        if w < 1.0 || h < 1.0 {
            return Err(WaveprintError::validation(
                "paper is smaller than one pixel at this dpi",
            ));
        }
        if w > f64::from(u32::MAX) || h > f64::from(u32::MAX) {
            return Err(WaveprintError::validation("canvas size overflow"));
        }
        Ok((w as u32, h as u32))
    }
}

impl Default for PaperSize {
    fn default() -> Self {
        Self::A4
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
