use sparkline::theme::{BLACK, WHITE};
use sparkline::{
    CellRendererSparkline, DrawContext, Point, Recorder, Rect, Renderer, SparklineView,
    SparklineWidget, Style, WidgetRegistry,
};
use serde_json::json;

fn canvas(width: u32, height: u32) -> Renderer {
    let mut r = Renderer::new(width, height).unwrap();
    r.clear(WHITE);
    r
}

#[test]
fn filled_cell_covers_area_under_line() {
    let mut cell = CellRendererSparkline::new();
    cell.set_data_array(&[0.5, 0.5, 0.5]);

    let mut r = canvas(20, 20);
    cell.paint(&mut r, Rect::from_size(20.0, 20.0));

    // Line at y = 10: below is filled, above is untouched.
    assert_eq!(r.pixel(10, 15), Some(BLACK));
    assert_eq!(r.pixel(10, 4), Some(WHITE));
}

#[test]
fn cell_drawing_stays_inside_cell() {
    let mut cell = CellRendererSparkline::new();
    cell.set_data_array(&[2.0, 2.0]);

    let mut r = canvas(30, 30);
    let area = Rect::new(10.0, 10.0, 10.0, 10.0);
    cell.paint(&mut r, area);

    // Values above 1.0 overshoot the cell but the clip keeps them inside.
    assert_eq!(r.pixel(15, 15), Some(BLACK));
    assert_eq!(r.pixel(15, 5), Some(WHITE));
    assert_eq!(r.pixel(5, 15), Some(WHITE));
    assert_eq!(r.pixel(25, 15), Some(WHITE));
}

#[test]
fn widget_background_and_border() {
    let mut widget = SparklineWidget::new();
    widget.set_filled(false);
    widget.set_data_array(&[0.0, 0.0]);

    let style = Style::default();
    let mut r = canvas(40, 20);
    widget.paint(&mut r, Rect::from_size(40.0, 20.0));

    assert_eq!(r.pixel(0, 0), Some(style.fg));
    assert_eq!(r.pixel(39, 10), Some(style.fg));
    assert_eq!(r.pixel(20, 2), Some(style.mid));
}

#[test]
fn replayed_recording_matches_direct_paint() {
    let mut widget = SparklineWidget::new();
    widget.set_data_array(&[0.1, 0.8, 0.3, 0.0, 0.6, 0.9]);
    widget.set_num_sets(2).unwrap();
    let area = Rect::from_size(32.0, 20.0);

    let mut direct = canvas(32, 20);
    widget.paint(&mut direct, area);

    let mut rec = Recorder::new();
    widget.paint(&mut rec, area);
    let mut replayed = canvas(32, 20);
    rec.replay(&mut replayed);

    assert_eq!(direct.pixmap.data(), replayed.pixmap.data());
}

#[test]
fn scripted_host_flow() {
    let registry = WidgetRegistry::with_builtin();
    let mut view = registry.create("Sparkline").unwrap();

    view.set_property("data_array", &json!([0.0, 0.5, 1.0])).unwrap();
    view.set_property("filled", &json!(false)).unwrap();
    assert!(view.take_redraw_request());

    let size = view.preferred_size();
    assert_eq!((size.width, size.height), (3, 20));

    let mut rec = Recorder::new();
    view.paint(&mut rec, Rect::from_size(10.0, 20.0));
    let lines: Vec<&[Point]> = rec.polylines().collect();
    assert_eq!(
        lines,
        vec![&[
            Point::new(0.0, 20.0),
            Point::new(5.0, 10.0),
            Point::new(10.0, 0.0)
        ][..]]
    );
}

#[test]
fn views_are_interchangeable_behind_the_trait() {
    let mut views: Vec<Box<dyn SparklineView>> = vec![
        Box::new(SparklineWidget::new()),
        Box::new(CellRendererSparkline::new()),
    ];
    for view in &mut views {
        view.set_property("data_array", &json!([0.2, 0.4, 0.6, 0.8])).unwrap();
        assert_eq!(view.preferred_size().width, 4);
        let mut rec = Recorder::new();
        view.paint(&mut rec, Rect::from_size(12.0, 20.0));
        assert_eq!(rec.polygons().count(), 1);
    }
}

#[test]
fn draw_context_is_object_safe() {
    let mut r = canvas(4, 4);
    let ctx: &mut dyn DrawContext = &mut r;
    ctx.fill_rect(Rect::from_size(4.0, 4.0), BLACK);
    assert_eq!(r.pixel(3, 3), Some(BLACK));
}
