use rayon::prelude::*;

use crate::{WaveprintError, WaveprintResult};

pub const CHANNELS: usize = 3;

/// Kernel half-width for `sigma`, truncated at four standard deviations.
pub fn radius_for_sigma(sigma: f64) -> u32 {
    if !sigma.is_finite() || sigma <= 0.0 {
        return 0;
    }
    (4.0 * sigma + 0.5).floor() as u32
}

/// Normalized 1-D Gaussian weights over `-radius..=radius`.
pub fn gaussian_kernel(radius: u32, sigma: f64) -> WaveprintResult<Vec<f64>> {
    if radius == 0 {
        return Ok(vec![1.0]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(WaveprintError::validation("blur sigma must be > 0"));
    }

    let r = radius as i64;
    let scale = -0.5 / (sigma * sigma);
    let mut weights = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    for i in -r..=r {
        let x = i as f64;
        let w = (scale * (x * x)).exp();
        weights.push(w);
        sum += w;
    }
    if sum <= 0.0 {
        return Err(WaveprintError::render("gaussian kernel sum is zero"));
    }
    for w in &mut weights {
        *w /= sum;
    }
    Ok(weights)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> WaveprintResult<Vec<u32>> {
    let weights_f = gaussian_kernel(radius, f64::from(sigma))?;

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = (wf * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let target: i64 = 65536;
    let delta = target - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let mid_val = i64::from(weights[mid]);
        let new_mid = (mid_val + delta).clamp(0, 65536);
        weights[mid] = new_mid as u32;
    }

    Ok(weights)
}

/// Separable Gaussian blur of a tightly packed RGB8 buffer with edge-clamped sampling.
pub fn blur_rgb8(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> WaveprintResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or_else(|| WaveprintError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(WaveprintError::render(
            "blur_rgb8 expects src matching width*height*3",
        ));
    }
    if radius == 0 || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    horizontal_pass(src, &mut tmp, width, &kernel);
    vertical_pass(&tmp, &mut out, width, height, &kernel);
    Ok(out)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i64;
    let w = i64::from(width);
    let row_len = width as usize * CHANNELS;
    dst.par_chunks_mut(row_len)
        .zip(src.par_chunks(row_len))
        .for_each(|(dst_row, src_row)| {
            for x in 0..w {
                let mut acc = [0u64; CHANNELS];
                for (ki, &kw) in k.iter().enumerate() {
                    let sx = (x + ki as i64 - radius).clamp(0, w - 1);
                    let idx = sx as usize * CHANNELS;
                    for c in 0..CHANNELS {
                        acc[c] += u64::from(kw) * u64::from(src_row[idx + c]);
                    }
                }
                let out_idx = x as usize * CHANNELS;
                for c in 0..CHANNELS {
                    dst_row[out_idx + c] = q16_to_u8(acc[c]);
                }
            }
        });
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i64;
    let h = i64::from(height);
    let row_len = width as usize * CHANNELS;
    dst.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let mut acc = vec![0u64; row_len];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y as i64 + ki as i64 - radius).clamp(0, h - 1) as usize;
                let src_row = &src[sy * row_len..(sy + 1) * row_len];
                for (a, &s) in acc.iter_mut().zip(src_row) {
                    *a += u64::from(kw) * u64::from(s);
                }
            }
            for (d, a) in dst_row.iter_mut().zip(acc) {
                *d = q16_to_u8(a);
            }
        });
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}

#[cfg(test)]
#[path = "../tests/unit/effects/blur.rs"]
mod tests;
