// File: crates/interact-skia/src/theme.rs
// Summary: Light/Dark theming for candles, the scrollbar strip and interaction markers.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub candle_up: skia::Color,
    pub candle_down: skia::Color,
    pub scrollbar_track: skia::Color,
    pub scrollbar_thumb: skia::Color,
    /// Outline drawn around the selected candle.
    pub selection: skia::Color,
    /// Dot drawn on the hovered candle's close.
    pub hover: skia::Color,
    pub label: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            candle_up: skia::Color::from_argb(255, 40, 200, 120),
            candle_down: skia::Color::from_argb(255, 220, 80, 80),
            scrollbar_track: skia::Color::from_argb(255, 30, 30, 34),
            scrollbar_thumb: skia::Color::from_argb(255, 90, 90, 100),
            selection: skia::Color::from_argb(255, 120, 180, 255),
            hover: skia::Color::from_argb(255, 255, 255, 255),
            label: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            candle_up: skia::Color::from_argb(255, 20, 160, 90),
            candle_down: skia::Color::from_argb(255, 200, 60, 60),
            scrollbar_track: skia::Color::from_argb(255, 236, 236, 240),
            scrollbar_thumb: skia::Color::from_argb(255, 170, 170, 180),
            selection: skia::Color::from_argb(255, 30, 120, 240),
            hover: skia::Color::from_argb(255, 20, 20, 30),
            label: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            candle_up: skia::Color::from_argb(255, 0x2a, 0xa1, 0x98),
            candle_down: skia::Color::from_argb(255, 0xdc, 0x32, 0x2f),
            scrollbar_track: skia::Color::from_argb(255, 0x07, 0x36, 0x42),
            scrollbar_thumb: skia::Color::from_argb(255, 0x58, 0x6e, 0x75), // base01
            selection: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),       // blue
            hover: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),           // base2
            label: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            candle_up: skia::Color::from_argb(255, 0x00, 0xff, 0x00),
            candle_down: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
            scrollbar_track: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            scrollbar_thumb: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            selection: skia::Color::from_argb(255, 0x00, 0xaa, 0xff),
            hover: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
