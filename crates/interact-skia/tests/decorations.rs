// File: crates/interact-skia/tests/decorations.rs
// Purpose: Rendered pixels reflect hover/selection state and the crosshair toggles.

use interact_core::{
    Candle, CandleHistory, ChartController, ChartHost, ChartView, InteractionState, PlotGeometry,
    Point, PointerEvent, Rgba,
};
use interact_skia::{ChartRenderer, Theme};

const GUIDE: Rgba = Rgba::opaque(255, 230, 70);

fn view() -> ChartView {
    let candles = (0..100)
        .map(|i| {
            let o = 10.0 + (i % 7) as f64;
            Candle { t: i as f64, o, h: o + 2.0, l: o - 2.0, c: o + 1.0, v: 5.0 }
        })
        .collect::<CandleHistory>();
    ChartView::new(candles, PlotGeometry::new(400, 300, 20), 8)
}

fn renderer() -> ChartRenderer {
    ChartRenderer { theme: Theme::dark(), draw_labels: false }
}

fn pixel(px: &[u8], stride: usize, x: i32, y: i32) -> Rgba {
    let i = y as usize * stride + x as usize * 4;
    Rgba::new(px[i], px[i + 1], px[i + 2], px[i + 3])
}

fn hovered_state(view: &ChartView, at: Point) -> InteractionState {
    let mut state = InteractionState::new();
    assert!(state.handle(view, PointerEvent::Moved(at)).is_needed());
    state
}

#[test]
fn crosshair_follows_hovered_candle() {
    let view = view();
    let state = hovered_state(&view, Point::new(204, 100));
    let hover = state.hover().expect("hover");
    assert_eq!(hover.index(), 75);
    let at = view.candle_location(hover).expect("on screen");
    assert_eq!(at.x, 204);

    let controller = ChartController { selection_line_color: GUIDE, ..ChartController::default() };
    let (px, w, h, stride) = renderer().render_to_rgba8(&view, &state, &controller).expect("rgba render");
    assert_eq!((w, h), (400, 300));
    assert_eq!(px.len(), stride * h as usize);

    assert_eq!(pixel(&px, stride, at.x, 5), GUIDE, "vertical guide at top of hovered column");
    assert_eq!(pixel(&px, stride, at.x, 295), GUIDE, "vertical guide crosses the scrollbar strip");
    assert_eq!(pixel(&px, stride, 3, at.y), GUIDE, "horizontal guide at hovered close");
}

#[test]
fn guide_toggles_are_independent() {
    let view = view();
    let state = hovered_state(&view, Point::new(204, 100));
    let at = view.candle_location(state.hover().unwrap()).unwrap();

    let controller = ChartController {
        vertical_selection_line: false,
        horizontal_selection_line: true,
        selection_line_color: GUIDE,
        ..ChartController::default()
    };
    let (px, _, _, stride) = renderer().render_to_rgba8(&view, &state, &controller).unwrap();
    assert_ne!(pixel(&px, stride, at.x, 5), GUIDE);
    assert_eq!(pixel(&px, stride, 3, at.y), GUIDE);
}

#[test]
fn no_hover_draws_no_guides() {
    let view = view();
    let state = InteractionState::new();
    let controller = ChartController { selection_line_color: GUIDE, ..ChartController::default() };
    let (px, w, h, stride) = renderer().render_to_rgba8(&view, &state, &controller).unwrap();
    let any_guide = (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .any(|(x, y)| pixel(&px, stride, x, y) == GUIDE);
    assert!(!any_guide);
}

#[test]
fn png_bytes_decode_to_view_size() {
    let view = view();
    let mut state = hovered_state(&view, Point::new(204, 100));
    let _ = state.handle(&view, PointerEvent::Clicked);
    assert!(state.selection().is_some());

    let bytes = renderer()
        .render_to_png_bytes(&view, &state, &ChartController::default())
        .expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (400, 300));

    let out = std::path::PathBuf::from("target/test_out/selected.png");
    renderer()
        .render_to_png(&view, &state, &ChartController::default(), &out)
        .expect("render to file");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}

#[test]
fn theme_lookup_falls_back_to_dark() {
    assert_eq!(interact_skia::theme::find("LIGHT").name, "light");
    assert_eq!(interact_skia::theme::find("no-such-theme").name, "dark");
}
