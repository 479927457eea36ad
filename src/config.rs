use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::canvas::CellGrid;
use crate::colormap::Colormap;
use crate::depth::{DepthBlur, LensBlur, LensFocus, RowDepthBlur};
use crate::foundation::core::{PaperSize, Rgb8};
use crate::foundation::error::{WaveprintError, WaveprintResult};
use crate::gradient::{Direction, Gradient};
use crate::output::{OutputConfig, UniqueSuffix};
use crate::waves::{CurveRounding, WaveField};

/// Grid dimensions; cell sizes are derived from the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridDef {
    pub rows: u32,
    pub cols: u32,
}

/// Everything needed to produce one artwork.
///
/// This is the JSON-facing representation. Every field is optional in JSON and falls back to
/// the [`ArtworkConfig::bokeh`] preset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtworkConfig {
    pub paper: PaperSize,
    pub dpi: u32,
    pub grid: Option<GridDef>,
    pub background: Gradient,
    pub waves: WaveField,
    pub blur: DepthBlur,
    pub output: OutputConfig,
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self::bokeh()
    }
}

impl ArtworkConfig {
    /// Dark-to-cream background, magma waves, blur growing away from a low focal plane.
    ///
    /// The blur radius is in pixels, so it is tuned for 600 dpi.
    pub fn bokeh() -> Self {
        Self {
            paper: PaperSize::A4,
            dpi: 600,
            grid: None,
            background: Gradient::Linear {
                start: Rgb8::new(20, 20, 20),
                end: Rgb8::new(255, 255, 195),
            },
            waves: WaveField::default(),
            blur: DepthBlur::Rows(RowDepthBlur {
                focal_y: 0.85,
                max_blur_radius: 36.0,
            }),
            output: OutputConfig {
                directory: PathBuf::from("figures"),
                prefix: "sine_wave_bokeh".to_string(),
                suffix: UniqueSuffix::Hash,
            },
        }
    }

    /// Gray background on a 20x10 grid, lower-amplitude waves, elliptical lens blur.
    pub fn lens() -> Self {
        Self {
            paper: PaperSize::A4,
            dpi: 200,
            grid: Some(GridDef { rows: 20, cols: 10 }),
            background: Gradient::Colormap {
                colormap: Colormap::Gray,
                direction: Direction::Vertical,
            },
            waves: WaveField {
                amplitude: 0.15,
                rounding: CurveRounding::PerTerm,
                ..WaveField::default()
            },
            blur: DepthBlur::Lens(LensBlur {
                // Row 319 lies far below the page: every pixel lands on the most blurred layer.
                focus: LensFocus::Cell { row: 319, col: 5 },
                max_radius: 10.0,
                falloff: 0.0015,
                levels: 7,
                aspect_ratio: 1.3,
            }),
            output: OutputConfig {
                directory: PathBuf::from("figures"),
                prefix: "a4_sine_wave".to_string(),
                suffix: UniqueSuffix::Hash,
            },
        }
    }

    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> WaveprintResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| WaveprintError::validation(format!("parse artwork config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> WaveprintResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            WaveprintError::validation(format!("open artwork config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> WaveprintResult<()> {
        self.paper.pixels(self.dpi)?;
        if let Some(g) = self.grid
            && (g.rows == 0 || g.cols == 0)
        {
            return Err(WaveprintError::validation("grid rows and cols must be > 0"));
        }
        if let DepthBlur::Lens(LensBlur {
            focus: LensFocus::Cell { .. },
            ..
        }) = self.blur
            && self.grid.is_none()
        {
            return Err(WaveprintError::validation(
                "lens blur focused on a cell requires `grid`",
            ));
        }
        self.waves.validate()?;
        self.blur.validate()?;
        self.output.validate()?;
        Ok(())
    }

    /// Resolve the configured grid against the actual canvas size.
    pub fn cell_grid(&self, width: u32, height: u32) -> WaveprintResult<Option<CellGrid>> {
        self.grid
            .map(|g| CellGrid::new(width, height, g.rows, g.cols))
            .transpose()
    }
}

/// Built-in configurations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    #[default]
    Bokeh,
    Lens,
}

impl Preset {
    pub fn config(self) -> ArtworkConfig {
        match self {
            Self::Bokeh => ArtworkConfig::bokeh(),
            Self::Lens => ArtworkConfig::lens(),
        }
    }
}

impl FromStr for Preset {
    type Err = WaveprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bokeh" => Ok(Self::Bokeh),
            "lens" => Ok(Self::Lens),
            other => Err(WaveprintError::validation(format!(
                "unknown preset '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
