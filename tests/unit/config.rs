use super::*;

#[test]
fn presets_validate() {
    assert!(ArtworkConfig::bokeh().validate().is_ok());
    assert!(ArtworkConfig::lens().validate().is_ok());
    assert_eq!(ArtworkConfig::default(), ArtworkConfig::bokeh());
}

#[test]
fn presets_render_at_their_tuned_resolution() {
    let bokeh = ArtworkConfig::bokeh();
    assert_eq!(bokeh.dpi, 600);
    assert_eq!(bokeh.paper.pixels(bokeh.dpi).unwrap(), (4960, 7015));
    assert_eq!(bokeh.waves.rounding, CurveRounding::Final);

    let lens = ArtworkConfig::lens();
    assert_eq!(lens.dpi, 200);
    assert_eq!(lens.waves.rounding, CurveRounding::PerTerm);
}

#[test]
fn partial_json_falls_back_to_bokeh() {
    let cfg = ArtworkConfig::from_reader(r#"{ "dpi": 50 }"#.as_bytes()).unwrap();
    assert_eq!(cfg.dpi, 50);
    assert_eq!(cfg.waves, ArtworkConfig::bokeh().waves);
    assert_eq!(cfg.output.prefix, "sine_wave_bokeh");
}

#[test]
fn nested_json_overrides_selected_fields() {
    let json = r#"{
        "grid": { "rows": 4, "cols": 2 },
        "background": { "kind": "colormap", "colormap": "viridis", "direction": "horizontal" },
        "waves": { "step": 0.1, "colormap": "plasma" },
        "blur": { "kind": "none" },
        "output": { "directory": "out", "suffix": "timestamp" }
    }"#;
    let cfg = ArtworkConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.grid, Some(GridDef { rows: 4, cols: 2 }));
    assert_eq!(
        cfg.background,
        Gradient::Colormap {
            colormap: Colormap::Viridis,
            direction: Direction::Horizontal,
        }
    );
    assert_eq!(cfg.waves.step, 0.1);
    assert_eq!(cfg.waves.colormap, Colormap::Plasma);
    assert_eq!(cfg.waves.thickness, 40);
    assert_eq!(cfg.blur, DepthBlur::None);
    assert_eq!(cfg.output.directory, PathBuf::from("out"));
    assert_eq!(cfg.output.suffix, UniqueSuffix::Timestamp);
    assert!(cfg.validate().is_ok());
}

#[test]
fn unknown_top_level_field_is_rejected() {
    let err = ArtworkConfig::from_reader(r#"{ "dpii": 50 }"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("parse artwork config JSON"));
}

#[test]
fn presets_survive_json() {
    for preset in [Preset::Bokeh, Preset::Lens] {
        let cfg = preset.config();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let back = ArtworkConfig::from_reader(json.as_bytes()).unwrap();
        assert_eq!(back, cfg);
    }
}

#[test]
fn cell_focus_without_grid_is_rejected() {
    let mut cfg = ArtworkConfig::lens();
    cfg.grid = None;
    assert!(cfg.validate().is_err());
}

#[test]
fn zero_dpi_is_rejected() {
    let cfg = ArtworkConfig {
        dpi: 0,
        ..ArtworkConfig::bokeh()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn missing_file_reports_path() {
    let err = ArtworkConfig::from_path("definitely/not/here.json").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("open artwork config"));
    assert!(msg.contains("here.json"));
}

#[test]
fn cell_grid_resolves_against_canvas() {
    let cfg = ArtworkConfig::lens();
    let grid = cfg.cell_grid(1653, 2338).unwrap().unwrap();
    assert_eq!((grid.cell_w, grid.cell_h), (165, 116));
    assert_eq!(ArtworkConfig::bokeh().cell_grid(10, 10).unwrap(), None);
}

#[test]
fn preset_names_parse() {
    assert_eq!("Bokeh".parse::<Preset>().unwrap(), Preset::Bokeh);
    assert_eq!("lens".parse::<Preset>().unwrap(), Preset::Lens);
    assert!("blurry".parse::<Preset>().is_err());
}
