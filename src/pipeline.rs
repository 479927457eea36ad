use std::path::PathBuf;

use image::RgbImage;
use rand::Rng;

use crate::canvas::create_canvas;
use crate::config::ArtworkConfig;
use crate::foundation::error::WaveprintResult;
use crate::output::{OutputConfig, UniqueSuffix, save_png};
use crate::params::RandomWaveParams;
use crate::waves::draw_wave_field;

/// Subdirectory of the output directory that receives randomized batches.
pub const RANDOM_SUBDIR: &str = "random_figures";

/// Resolution used for randomized batches unless the caller picks one.
pub const RANDOM_DPI: u32 = 300;

/// Run every stage except saving: canvas, background, waves, depth blur.
#[tracing::instrument(skip_all, fields(dpi = config.dpi))]
pub fn render_artwork(config: &ArtworkConfig) -> WaveprintResult<RgbImage> {
    config.validate()?;

    let mut canvas = create_canvas(config.paper, config.dpi)?;
    let grid = config.cell_grid(canvas.width(), canvas.height())?;
    config.background.apply(&mut canvas);
    draw_wave_field(&mut canvas, &config.waves)?;
    config.blur.apply(canvas, grid.as_ref())
}

pub fn render_and_save<R: Rng>(config: &ArtworkConfig, rng: &mut R) -> WaveprintResult<PathBuf> {
    let canvas = render_artwork(config)?;
    save_png(&canvas, &config.output, rng)
}

/// Render `count` sharp images on a white canvas, each from freshly drawn [`RandomWaveParams`].
///
/// Only the paper, dpi, wave colormap and output location are taken from `config`. Files always
/// get a hash suffix so a batch never overwrites itself within one second.
#[tracing::instrument(skip(config, rng))]
pub fn render_random_batch<R: Rng>(
    config: &ArtworkConfig,
    count: usize,
    rng: &mut R,
) -> WaveprintResult<Vec<PathBuf>> {
    config.validate()?;
    let output = OutputConfig {
        directory: config.output.directory.join(RANDOM_SUBDIR),
        prefix: config.output.prefix.clone(),
        suffix: UniqueSuffix::Hash,
    };

    let mut written = Vec::with_capacity(count);
    for index in 0..count {
        let _span = tracing::info_span!("random_artwork", index).entered();
        let params = RandomWaveParams::sample(rng);
        let mut canvas = create_canvas(config.paper, config.dpi)?;
        draw_wave_field(&mut canvas, &params.wave_field(config.waves.colormap))?;
        written.push(save_png(&canvas, &output, rng)?);
    }
    Ok(written)
}
