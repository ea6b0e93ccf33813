// File: crates/interact-skia/src/lib.rs
// Summary: Skia renderer for the interactive candlestick chart; draws candles and the core's decoration hooks.

pub mod painter;
pub mod render;
pub mod theme;

pub use painter::SkiaPainter;
pub use render::ChartRenderer;
pub use theme::Theme;
