//! Procedural sine-wave artwork for print.
//!
//! Rendering is a straight pipeline over an RGB8 [`image::RgbImage`]:
//!
//! - [`create_canvas`] allocates a white A4 sheet at the requested dpi
//! - a [`Gradient`] fills the background
//! - [`draw_wave_field`] strokes a sweep of colormapped sine waves
//! - a [`DepthBlur`] fakes depth of field
//! - [`save_png`] writes a uniquely named PNG
//!
//! [`ArtworkConfig`] bundles all stage parameters and is what the `waveprint` binary loads.
#![forbid(unsafe_code)]

mod foundation;

pub mod blur_cpu;
pub mod canvas;
pub mod colormap;
pub mod config;
pub mod depth;
pub mod gradient;
pub mod output;
pub mod params;
pub mod pipeline;
pub mod waves;

pub use crate::foundation::core::{PaperSize, Rgb8};
pub use crate::foundation::error::{WaveprintError, WaveprintResult};

pub use crate::canvas::{CellGrid, create_canvas, fill_cell};
pub use crate::colormap::Colormap;
pub use crate::config::{ArtworkConfig, GridDef, Preset};
pub use crate::depth::{
    DepthBlur, LensBlur, LensFocus, RowDepthBlur, apply_lens_blur, apply_row_depth_blur,
};
pub use crate::gradient::{Direction, Gradient, fill_colormap_gradient, fill_linear_gradient};
pub use crate::output::{OutputConfig, UniqueSuffix, artwork_file_name, save_png, write_png};
pub use crate::params::RandomWaveParams;
pub use crate::pipeline::{
    RANDOM_DPI, RANDOM_SUBDIR, render_and_save, render_artwork, render_random_batch,
};
pub use crate::waves::{CurveRounding, SineWave, WaveField, draw_sine_wave, draw_wave_field};
