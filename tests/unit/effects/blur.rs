use super::*;

#[test]
fn blur_radius_0_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6];
    let out = blur_rgb8(&src, 1, 2, 0, 1.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_constant_image_is_identity() {
    let (w, h) = (4u32, 3u32);
    let px = [10u8, 20u8, 30u8];
    let src = px.repeat((w * h) as usize);
    let out = blur_rgb8(&src, w, h, 3, 2.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let (w, h) = (5u32, 5u32);
    let mut src = vec![0u8; (w * h * 3) as usize];
    let center = ((2 * w + 2) * 3) as usize;
    src[center..center + 3].copy_from_slice(&[255, 255, 255]);

    let out = blur_rgb8(&src, w, h, 2, 1.2).unwrap();

    let nonzero = out.chunks_exact(3).filter(|px| px[0] != 0).count();
    assert!(nonzero > 1);

    let sum_r: u32 = out.chunks_exact(3).map(|px| u32::from(px[0])).sum();
    assert!((sum_r as i32 - 255).abs() <= 4);
}

#[test]
fn blur_rejects_mismatched_buffer() {
    let src = vec![0u8; 10];
    assert!(blur_rgb8(&src, 2, 2, 1, 1.0).is_err());
}

#[test]
fn blur_rejects_bad_sigma() {
    let src = vec![0u8; 12];
    assert!(blur_rgb8(&src, 2, 2, 1, 0.0).is_err());
    assert!(blur_rgb8(&src, 2, 2, 1, f32::NAN).is_err());
}

#[test]
fn kernel_is_normalized_and_symmetric() {
    let k = gaussian_kernel(6, 2.5).unwrap();
    assert_eq!(k.len(), 13);
    let sum: f64 = k.iter().sum();
    assert!((sum - 1.0).abs() < 1e-12);
    for i in 0..6 {
        assert_eq!(k[i], k[12 - i]);
    }
    assert!(k[6] > k[5]);
}

#[test]
fn radius_follows_four_sigma_truncation() {
    assert_eq!(radius_for_sigma(1.0), 4);
    assert_eq!(radius_for_sigma(2.5), 10);
    assert_eq!(radius_for_sigma(0.6), 2);
    assert_eq!(radius_for_sigma(0.0), 0);
    assert_eq!(radius_for_sigma(-1.0), 0);
}
