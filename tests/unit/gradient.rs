use super::*;

#[test]
fn linear_gradient_spans_first_to_last_row() {
    let mut c = RgbImage::new(3, 5);
    let start = Rgb8::new(20, 20, 20);
    let end = Rgb8::new(255, 255, 195);
    fill_linear_gradient(&mut c, start, end);

    assert_eq!(c.get_pixel(0, 0).0, [20, 20, 20]);
    assert_eq!(c.get_pixel(2, 4).0, [255, 255, 195]);
    // row 2 of 5 is t = 0.5
    assert_eq!(c.get_pixel(1, 2).0, [137, 137, 107]);
}

#[test]
fn linear_gradient_rows_are_uniform() {
    let mut c = RgbImage::new(7, 9);
    fill_linear_gradient(&mut c, Rgb8::BLACK, Rgb8::WHITE);
    for row in c.rows() {
        let px: Vec<_> = row.collect();
        assert!(px.windows(2).all(|w| w[0] == w[1]));
    }
}

#[test]
fn single_row_canvas_uses_start_color() {
    let mut c = RgbImage::new(4, 1);
    fill_linear_gradient(&mut c, Rgb8::new(9, 8, 7), Rgb8::WHITE);
    assert!(c.pixels().all(|p| p.0 == [9, 8, 7]));
}

#[test]
fn colormap_vertical_matches_samples() {
    let mut c = RgbImage::new(2, 3);
    fill_colormap_gradient(&mut c, Colormap::Gray, Direction::Vertical);
    assert_eq!(c.get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(c.get_pixel(1, 1).0, [128, 128, 128]);
    assert_eq!(c.get_pixel(0, 2).0, [255, 255, 255]);
}

#[test]
fn colormap_horizontal_varies_along_x_only() {
    let mut c = RgbImage::new(5, 4);
    fill_colormap_gradient(&mut c, Colormap::Viridis, Direction::Horizontal);
    for x in 0..5 {
        let expected = Colormap::Viridis.sample(f64::from(x) / 4.0).to_pixel();
        for y in 0..4 {
            assert_eq!(*c.get_pixel(x, y), expected);
        }
    }
}

#[test]
fn gradient_config_round_trips_through_json() {
    let g: Gradient =
        serde_json::from_str(r#"{ "kind": "colormap", "colormap": "gray" }"#).unwrap();
    assert_eq!(
        g,
        Gradient::Colormap {
            colormap: Colormap::Gray,
            direction: Direction::Vertical,
        }
    );

    let lin: Gradient =
        serde_json::from_str(r#"{ "kind": "linear", "start": [0, 0, 0], "end": [1, 2, 3] }"#)
            .unwrap();
    assert_eq!(
        lin,
        Gradient::Linear {
            start: Rgb8::BLACK,
            end: Rgb8::new(1, 2, 3),
        }
    );
}
