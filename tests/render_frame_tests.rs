use dashchart::core::{Canvas, Path, Rect};
use dashchart::error::ChartError;
use dashchart::render::{
    Color, NullRenderer, Palette, PathPrimitive, RectPrimitive, RenderFrame, Renderer, ViewBox,
};

fn sample_path() -> Path {
    let mut path = Path::new();
    path.move_to(0.0, 100.0).line_to(50.0, 50.0);
    path
}

#[test]
fn null_renderer_counts_validated_primitives() {
    let canvas = Canvas::default();
    let frame = RenderFrame::new(canvas, ViewBox::top_left(canvas))
        .with_path(PathPrimitive::stroked(
            sample_path(),
            Color::rgb(1.0, 0.0, 0.0),
            1.0,
        ))
        .with_rect(RectPrimitive::new(
            Rect::new(0.0, 80.0, 25.0, 20.0),
            Color::rgb(0.0, 0.0, 1.0),
            Color::rgb(0.0, 0.0, 1.0),
        ));

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.last_path_count, 1);
    assert_eq!(renderer.last_rect_count, 1);
    assert_eq!(renderer.frames_rendered, 1);
}

#[test]
fn frame_with_non_finite_path_fails_validation() {
    let canvas = Canvas::default();
    let mut path = Path::new();
    path.move_to(f64::NAN, 0.0);
    let frame = RenderFrame::new(canvas, ViewBox::top_left(canvas)).with_path(
        PathPrimitive::stroked(path, Color::rgb(1.0, 0.0, 0.0), 1.0),
    );

    assert!(matches!(frame.validate(), Err(ChartError::InvalidInput(_))));
}

#[test]
fn zero_stroke_width_fails_validation() {
    let primitive = PathPrimitive::stroked(sample_path(), Color::rgb(1.0, 0.0, 0.0), 0.0);
    assert!(matches!(
        primitive.validate(),
        Err(ChartError::InvalidInput(_))
    ));
}

#[test]
fn out_of_range_color_channel_fails_validation() {
    let color = Color::rgb(1.5, 0.0, 0.0);
    assert!(matches!(color.validate(), Err(ChartError::InvalidInput(_))));
}

#[test]
fn centered_view_box_straddles_the_origin() {
    let view_box = ViewBox::centered(Canvas::new(100.0, 100.0));
    assert_eq!(view_box.min_x, -50.0);
    assert_eq!(view_box.min_y, -50.0);
    assert_eq!(view_box.width, 100.0);
    assert_eq!(view_box.height, 100.0);
}

#[test]
fn palette_caps_sector_count() {
    let palette = Palette::default();
    assert_eq!(palette.len(), 3);
    assert!(palette.ensure_capacity(3).is_ok());
    assert!(matches!(
        palette.ensure_capacity(4),
        Err(ChartError::PaletteExhausted {
            sectors: 4,
            colors: 3
        })
    ));
}

#[test]
fn empty_palette_is_rejected() {
    assert!(matches!(
        Palette::new(Vec::new()),
        Err(ChartError::InvalidInput(_))
    ));
}
