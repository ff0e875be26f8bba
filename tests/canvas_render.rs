// tests/canvas_render.rs
use lsystem_plant::render::{self, Palette};
use lsystem_plant::{Canvas, PlantConfig, PlantError, StartPosition, Stream};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lsystem-plant-{}-{name}", std::process::id()))
}

#[test]
fn test_new_canvas_is_blank() {
    let canvas = Canvas::new(4, 3);
    assert_eq!((canvas.width(), canvas.height()), (4, 3));
    assert_eq!(canvas.marked_count(), 0);
    assert!(!canvas.is_marked(0, 0));
}

#[test]
fn test_mark_in_bounds() {
    let mut canvas = Canvas::new(4, 3);
    assert!(canvas.mark(3, 2));
    assert!(canvas.mark(0, 0));
    assert!(canvas.is_marked(3, 2));
    assert!(!canvas.is_marked(2, 3));
    assert_eq!(canvas.marked_cells().collect::<Vec<_>>(), vec![(0, 0), (3, 2)]);
}

#[test]
fn test_out_of_range_marks_are_dropped() {
    let mut canvas = Canvas::new(3, 3);
    canvas.mark(1, 1);
    let before = canvas.clone();

    for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (3, 3), (i64::MAX, i64::MIN), (i64::MIN, 1)] {
        assert!(!canvas.mark(x, y), "({x}, {y}) should be clipped");
        assert!(!canvas.is_marked(x, y));
    }

    assert_eq!(canvas, before);
}

#[test]
fn test_ascii_dump() {
    let mut canvas = Canvas::new(3, 2);
    canvas.mark(0, 0);
    canvas.mark(2, 1);

    assert_eq!(render::to_ascii(&canvas, '*'), "*  \n  *\n");
    assert_eq!(render::to_ascii(&canvas, '#'), "#  \n  #\n");

    let mut out = Vec::new();
    render::write_ascii(&canvas, '*', &mut out).unwrap();
    assert_eq!(out, b"*  \n  *\n");
}

#[test]
fn test_image_uses_palette() {
    let mut canvas = Canvas::new(2, 2);
    canvas.mark(1, 0);
    let palette = Palette::default();

    let img = render::to_image(&canvas, &palette);

    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(1, 0).0, [255, 170, 0, 255]);
    assert_eq!(img.get_pixel(0, 0).0, [16, 16, 16, 255]);
    assert_eq!(img.get_pixel(1, 1).0, palette.background);
}

#[test]
fn test_save_png() {
    let path = temp_path("save.png");
    let mut canvas = Canvas::new(5, 4);
    canvas.mark(2, 3);

    render::save_png(&canvas, &Palette::default(), &path).unwrap();
    let img = image::open(&path).unwrap().to_rgba8();
    std::fs::remove_file(&path).ok();

    assert_eq!(img.dimensions(), (5, 4));
    assert_eq!(img.get_pixel(2, 3).0, [255, 170, 0, 255]);
    assert_eq!(img.get_pixel(0, 0).0, [16, 16, 16, 255]);
}

#[test]
fn test_save_png_reports_io_failure() {
    let path = temp_path("missing-dir").join("nested").join("out.png");
    let err = render::save_png(&Canvas::new(1, 1), &Palette::default(), &path).unwrap_err();
    assert!(matches!(err, PlantError::Image(_) | PlantError::Io(_)));
}

#[test]
fn test_start_presets() {
    assert_eq!(StartPosition::Bottom.origin(80, 60), (40, 59));
    assert_eq!(StartPosition::Middle.origin(80, 60), (40, 30));
    assert_eq!(StartPosition::Top.origin(80, 60), (40, 1));
    assert_eq!(StartPosition::Bottom.origin(7, 5), (3, 4));
}

#[test]
fn test_default_config() {
    let config = PlantConfig::default();
    assert_eq!(config.axiom, "F");
    assert_eq!(config.rules, "F=F");
    assert_eq!(config.angle, 25.0);
    assert_eq!(config.iterations, 4);
    assert_eq!((config.cols, config.rows), (80, 80));
    assert_eq!(config.stream, Stream::Both);
    assert_eq!(config.start, StartPosition::Bottom);

    let start = config.start_state();
    assert_eq!(start.position.x, 40.0);
    assert_eq!(start.position.y, 79.0);
    assert_eq!(start.angle, 90.0);

    // Axiom "F" with identity rules draws one cell straight above the start.
    let canvas = config.grow();
    assert_eq!(canvas.marked_cells().collect::<Vec<_>>(), vec![(40, 78)]);
}

#[test]
fn test_config_file_fills_missing_fields() {
    let path = temp_path("settings.json");
    std::fs::write(
        &path,
        r#"{ "axiom": "X", "rules": "X=F[+X]F[-X]+X;F=FF", "stream": "ascii", "start": "middle", "cols": 40 }"#,
    )
    .unwrap();

    let config = PlantConfig::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.axiom, "X");
    assert_eq!(config.stream, Stream::Ascii);
    assert_eq!(config.start, StartPosition::Middle);
    assert_eq!(config.cols, 40);
    assert_eq!(config.rows, 80);
    assert_eq!(config.glyph, '*');
    assert!(config.stream.wants_ascii());
    assert!(!config.stream.wants_image());
}

#[test]
fn test_bad_config_file() {
    let path = temp_path("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = PlantConfig::from_json_file(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, PlantError::Config { .. }));
    assert!(err.to_string().contains("broken.json"));

    let missing = PlantConfig::from_json_file(temp_path("does-not-exist.json")).unwrap_err();
    assert!(matches!(missing, PlantError::Io(_)));
}
