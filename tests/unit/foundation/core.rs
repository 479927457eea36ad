use super::*;

#[test]
fn a4_pixels_match_truncated_mm_conversion() {
    assert_eq!(PaperSize::A4.pixels(200).unwrap(), (1653, 2338));
    assert_eq!(PaperSize::A4.pixels(300).unwrap(), (2480, 3507));
    assert_eq!(PaperSize::A4.pixels(600).unwrap(), (4960, 7015));
}

#[test]
fn zero_dpi_is_rejected() {
    assert!(PaperSize::A4.pixels(0).is_err());
}

#[test]
fn degenerate_paper_is_rejected() {
    let p = PaperSize {
        width_mm: 0.0,
        height_mm: 10.0,
    };
    assert!(p.pixels(300).is_err());

    let tiny = PaperSize {
        width_mm: 1.0,
        height_mm: 1.0,
    };
    assert!(tiny.pixels(10).is_err());
}

#[test]
fn lerp_endpoints_and_truncation() {
    let a = Rgb8::new(20, 20, 20);
    let b = Rgb8::new(255, 255, 195);
    assert_eq!(Rgb8::lerp(a, b, 0.0), a);
    assert_eq!(Rgb8::lerp(a, b, 1.0), b);
    // 20 * 0.5 + 255 * 0.5 = 137.5 -> 137
    assert_eq!(Rgb8::lerp(a, b, 0.5).r, 137);
}

#[test]
fn serde_uses_array_form() {
    let c = Rgb8::new(1, 2, 3);
    let s = serde_json::to_string(&c).unwrap();
    assert_eq!(s, "[1,2,3]");
    let back: Rgb8 = serde_json::from_str(&s).unwrap();
    assert_eq!(back, c);
}
