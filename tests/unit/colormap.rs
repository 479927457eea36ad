use super::*;

#[test]
fn endpoints_hit_first_and_last_anchor() {
    assert_eq!(Colormap::Magma.sample(0.0), Rgb8::new(0x00, 0x00, 0x04));
    assert_eq!(Colormap::Magma.sample(1.0), Rgb8::new(0xfc, 0xfd, 0xbf));
    assert_eq!(Colormap::Viridis.sample(0.0), Rgb8::new(0x44, 0x01, 0x54));
    assert_eq!(Colormap::Viridis.sample(1.0), Rgb8::new(0xfd, 0xe7, 0x25));
}

#[test]
fn lookup_is_quantized_into_256_entries() {
    for cmap in Colormap::ALL {
        // [k/256, (k+1)/256) all select entry k
        assert_eq!(cmap.sample(100.0 / 256.0), cmap.sample(100.9 / 256.0));
        assert_ne!(cmap.sample(0.0), cmap.sample(1.0));
    }
}

#[test]
fn gray_selects_lookup_entry() {
    assert_eq!(Colormap::Gray.sample(0.0), Rgb8::BLACK);
    assert_eq!(Colormap::Gray.sample(1.0), Rgb8::WHITE);
    // floor(256 * 0.5) = 128, where a plain 255 ramp would give 127
    assert_eq!(Colormap::Gray.sample(0.5), Rgb8::new(128, 128, 128));
    assert_eq!(Colormap::Gray.sample(0.25), Rgb8::new(64, 64, 64));
    assert_eq!(Colormap::Gray.sample(255.5 / 256.0), Rgb8::WHITE);
}

#[test]
fn out_of_range_and_nan_clamp() {
    for cmap in Colormap::ALL {
        assert_eq!(cmap.sample(-3.0), cmap.sample(0.0));
        assert_eq!(cmap.sample(7.0), cmap.sample(1.0));
        assert_eq!(cmap.sample(f64::NAN), cmap.sample(0.0));
    }
}

#[test]
fn magma_brightens_monotonically() {
    let mut prev = 0u32;
    for i in 0..=100 {
        let c = Colormap::Magma.sample(f64::from(i) / 100.0);
        let lum = u32::from(c.r) + u32::from(c.g) + u32::from(c.b);
        assert!(lum + 2 >= prev, "luminance dropped at step {i}");
        prev = lum;
    }
}

#[test]
fn parse_is_case_insensitive_with_grey_alias() {
    assert_eq!("Magma".parse::<Colormap>().unwrap(), Colormap::Magma);
    assert_eq!(" grey ".parse::<Colormap>().unwrap(), Colormap::Gray);
    assert!("turbo".parse::<Colormap>().is_err());
}

#[test]
fn serde_names_match_display() {
    for cmap in Colormap::ALL {
        let s = serde_json::to_string(&cmap).unwrap();
        assert_eq!(s, format!("\"{cmap}\""));
    }
    let g: Colormap = serde_json::from_str("\"grey\"").unwrap();
    assert_eq!(g, Colormap::Gray);
}
