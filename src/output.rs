use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use image::RgbImage;
use rand::Rng;
use sha2::Digest as _;

use crate::foundation::error::{WaveprintError, WaveprintResult};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const HASH_LEN: usize = 6;

/// How saved files are made unique.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniqueSuffix {
    /// Local wall-clock time, second resolution.
    Timestamp,
    /// Short hash of a random draw and the timestamp.
    #[default]
    Hash,
}

/// Where and under what name artwork is written.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub prefix: String,
    pub suffix: UniqueSuffix,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("figures"),
            prefix: "sine_wave_bokeh".to_string(),
            suffix: UniqueSuffix::Hash,
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> WaveprintResult<()> {
        if self.prefix.is_empty() {
            return Err(WaveprintError::validation("output.prefix must be non-empty"));
        }
        if self.prefix.contains(['/', '\\']) {
            return Err(WaveprintError::validation(
                "output.prefix must not contain path separators",
            ));
        }
        Ok(())
    }
}

/// `"{prefix}_{id}.png"` where `id` depends on `suffix`.
pub fn artwork_file_name<R: Rng>(
    prefix: &str,
    suffix: UniqueSuffix,
    now: NaiveDateTime,
    rng: &mut R,
) -> String {
    let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
    let id = match suffix {
        UniqueSuffix::Timestamp => timestamp,
        UniqueSuffix::Hash => {
            let seed = format!("{}_{timestamp}", rng.gen_range(0.0..1.0f64));
            let mut hex = sha256_hex(seed.as_bytes());
            hex.truncate(HASH_LEN);
            hex
        }
    };
    format!("{prefix}_{id}.png")
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

/// Write `canvas` as a PNG into `output.directory`, creating it if needed.
pub fn save_png<R: Rng>(
    canvas: &RgbImage,
    output: &OutputConfig,
    rng: &mut R,
) -> WaveprintResult<PathBuf> {
    let now = chrono::Local::now().naive_local();
    let name = artwork_file_name(&output.prefix, output.suffix, now, rng);
    let path = output.directory.join(name);
    write_png(canvas, &path)?;
    tracing::info!(path = %path.display(), "saved artwork");
    Ok(path)
}

pub fn write_png(canvas: &RgbImage, path: &Path) -> WaveprintResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            WaveprintError::output(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    image::save_buffer_with_format(
        path,
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .map_err(|e| WaveprintError::output(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../tests/unit/output.rs"]
mod tests;
