// File: crates/interact-core/src/lib.rs
// Summary: Core library entry point; candle store, scales, pointer resolution and the interaction state machine.

pub mod controller;
pub mod decoration;
pub mod error;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod history;
pub mod host;
pub mod interaction;
pub mod resolver;
pub mod scale;
pub mod view;

pub use controller::{ChartController, Rgba};
pub use decoration::{paint_decorations, DecorationPainter};
pub use error::{CandleError, ConfigError};
pub use event::PointerEvent;
pub use geometry::{PlotGeometry, Point, RectI32};
pub use gesture::GestureTracker;
pub use history::{Candle, CandleHistory, CandleRef};
pub use host::ChartHost;
pub use interaction::{InteractionState, Repaint};
pub use resolver::{is_in_disabled_region, resolve_candle_at, Resolved};
pub use scale::{TimeScale, ValueScale};
pub use view::ChartView;
