// File: crates/interact-skia/src/render.rs
// Summary: Headless rendering of a chart view plus interaction decorations using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use interact_core::{paint_decorations, ChartController, ChartView, InteractionState};
use skia_safe as skia;

use crate::painter::SkiaPainter;
use crate::theme::Theme;

/// Horizontal grid lines across the plot area.
const PRICE_GRID_LINES: i32 = 6;
/// One vertical grid line every this many candles.
const TIME_GRID_EVERY: usize = 20;

pub struct ChartRenderer {
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self { theme: Theme::dark(), draw_labels: true }
    }
}

impl ChartRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    /// Render into a fresh raster surface sized to the view.
    pub fn render_surface(
        &self,
        view: &ChartView,
        state: &InteractionState,
        controller: &ChartController,
    ) -> Result<skia::Surface> {
        let g = view.geometry();
        let mut surface = skia::surfaces::raster_n32_premul((g.width.max(1), g.height.max(1)))
            .context("failed to create raster surface")?;
        self.draw(surface.canvas(), view, state, controller);
        Ok(surface)
    }

    /// Draw the full frame onto an existing canvas.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        view: &ChartView,
        state: &InteractionState,
        controller: &ChartController,
    ) {
        canvas.clear(self.theme.background);
        draw_grid(canvas, view, &self.theme);
        draw_candles(canvas, view, &self.theme);
        draw_scrollbar(canvas, view, &self.theme);

        let mut painter = SkiaPainter::new(canvas, view, &self.theme)
            .line_width(controller.line_width)
            .draw_labels(self.draw_labels);
        paint_decorations(state, view, controller, &mut painter);
    }

    pub fn render_to_png_bytes(
        &self,
        view: &ChartView,
        state: &InteractionState,
        controller: &ChartController,
    ) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(view, state, controller)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .context("encode PNG failed")?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render and write a PNG, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        view: &ChartView,
        state: &InteractionState,
        controller: &ChartController,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(view, state, controller)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote chart png");
        Ok(())
    }

    /// Render to unpremultiplied RGBA8 pixels: (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(
        &self,
        view: &ChartView,
        state: &InteractionState,
        controller: &ChartController,
    ) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(view, state, controller)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} surface failed");
        }
        Ok((pixels, w, h, stride))
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, view: &ChartView, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(false);
    paint.set_stroke_width(1.0);

    let plot = view.geometry().plot_rect();
    let width = plot.width() as f32;
    let bottom = plot.bottom;
    for k in 1..PRICE_GRID_LINES {
        let y = (bottom * k / PRICE_GRID_LINES) as f32 + 0.5;
        canvas.draw_line((0.0, y), (width, y), &paint);
    }
    for i in view.visible_range().filter(|i| i % TIME_GRID_EVERY == 0) {
        let x = view.time.left_px(i) as f32 + 0.5;
        canvas.draw_line((x, 0.0), (x, bottom as f32), &paint);
    }
}

fn draw_candles(canvas: &skia::Canvas, view: &ChartView, theme: &Theme) {
    let mut wick = skia::Paint::default();
    wick.set_anti_alias(true);
    wick.set_style(skia::paint::Style::Stroke);
    wick.set_stroke_width(1.0);

    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    // body takes ~70% of the slot, never thinner than a pixel
    let half = (view.time.bar_width as f32 * 0.35).max(0.5);
    let ys = &view.values;

    let plot = view.geometry().plot_rect();
    canvas.save();
    canvas.clip_rect(
        skia::Rect::from_ltrb(plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32),
        None,
        None,
    );
    for i in view.visible_range() {
        let Some(c) = view.history.as_slice().get(i) else { continue };
        let x = view.time.center_px(i) as f32;
        let color = if c.is_bullish() { theme.candle_up } else { theme.candle_down };
        wick.set_color(color);
        body.set_color(color);

        canvas.draw_line((x, ys.to_px(c.h) as f32), (x, ys.to_px(c.l) as f32), &wick);

        let y_o = ys.to_px(c.o) as f32;
        let y_c = ys.to_px(c.c) as f32;
        let top = y_o.min(y_c);
        let bot = y_o.max(y_c);
        canvas.draw_rect(skia::Rect::from_ltrb(x - half, top, x + half, bot.max(top + 1.0)), &body);
    }
    canvas.restore();
}

fn draw_scrollbar(canvas: &skia::Canvas, view: &ChartView, theme: &Theme) {
    let strip = view.geometry().scrollbar_rect();
    if strip.height() <= 0 {
        return;
    }
    let mut paint = skia::Paint::default();
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(theme.scrollbar_track);
    let track = skia::Rect::from_ltrb(
        strip.left as f32,
        strip.top as f32,
        strip.right as f32,
        strip.bottom as f32,
    );
    canvas.draw_rect(track, &paint);

    let content = view.history.len() as f32 * view.time.bar_width as f32;
    if content <= 0.0 {
        return;
    }
    let width = strip.width() as f32;
    let visible = (width / content).min(1.0);
    let thumb_w = (visible * width).max(8.0);
    let thumb_x = view.time.scroll_offset as f32 / content * width;
    paint.set_color(theme.scrollbar_thumb);
    canvas.draw_rect(
        skia::Rect::from_ltrb(thumb_x, track.top + 2.0, (thumb_x + thumb_w).min(width), track.bottom - 2.0),
        &paint,
    );
}
