// File: crates/interact-skia/src/painter.rs
// Summary: Skia implementation of the decoration hooks: guide lines, selection box, hover dot + OHLC label.

use interact_core::{CandleRef, ChartView, DecorationPainter, Point, Rgba};
use skia_safe as skia;

use crate::theme::Theme;

const LABEL_SIZE: f32 = 13.0;
const LABEL_ORIGIN: (f32, f32) = (8.0, 18.0);

pub(crate) fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub struct SkiaPainter<'a> {
    canvas: &'a skia::Canvas,
    view: &'a ChartView,
    theme: &'a Theme,
    line_width: f32,
    draw_labels: bool,
}

impl<'a> SkiaPainter<'a> {
    pub fn new(canvas: &'a skia::Canvas, view: &'a ChartView, theme: &'a Theme) -> Self {
        Self { canvas, view, theme, line_width: 1.0, draw_labels: true }
    }

    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = width.max(1.0);
        self
    }

    pub fn draw_labels(mut self, on: bool) -> Self {
        self.draw_labels = on;
        self
    }

    fn hover_label(&self, candle: CandleRef) -> Option<String> {
        let c = self.view.candle(candle)?;
        let when = match c.open_time() {
            Some(t) => t.format("%Y-%m-%d %H:%M").to_string(),
            None => format!("#{}", candle.index()),
        };
        Some(format!(
            "{when}  O {:.4}  H {:.4}  L {:.4}  C {:.4}  V {:.2}",
            c.o, c.h, c.l, c.c, c.v
        ))
    }
}

impl DecorationPainter for SkiaPainter<'_> {
    fn draw_guide_line(&mut self, from: Point, to: Point, c: Rgba) {
        let mut paint = skia::Paint::default();
        // crisp single-pixel lines: no AA, sample at pixel centres
        paint.set_anti_alias(false);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.line_width);
        paint.set_color(color(c));
        self.canvas.draw_line(
            (from.x as f32 + 0.5, from.y as f32 + 0.5),
            (to.x as f32 + 0.5, to.y as f32 + 0.5),
            &paint,
        );
    }

    fn draw_selected(&mut self, candle: CandleRef, at: Point) {
        let Some(c) = self.view.candle(candle) else { return };
        let half = (self.view.time.bar_width as f32 * 0.5).max(2.0);
        let top = self.view.values.to_px(c.h) as f32 - 3.0;
        let bottom = self.view.values.to_px(c.l) as f32 + 3.0;
        let x = at.x as f32;

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.5);
        paint.set_color(self.theme.selection);
        self.canvas.draw_rect(skia::Rect::from_ltrb(x - half, top, x + half, bottom), &paint);
    }

    fn draw_hovered(&mut self, candle: CandleRef, at: Point) {
        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_style(skia::paint::Style::Fill);
        dot.set_color(self.theme.hover);
        self.canvas.draw_circle((at.x as f32, at.y as f32), 3.0, &dot);

        if !self.draw_labels {
            return;
        }
        if let Some(text) = self.hover_label(candle) {
            let mut paint = skia::Paint::default();
            paint.set_color(self.theme.label);
            let mut font = skia::Font::default();
            font.set_size(LABEL_SIZE);
            self.canvas.draw_str(&text, LABEL_ORIGIN, &font, &paint);
        }
    }
}
