// File: crates/window-demo/src/main.rs
// Summary: Windowed demo: winit cursor/button events drive hover, selection and chart panning; frames blit via softbuffer.

use std::num::NonZeroU32;

use anyhow::{Context, Result};
use interact_core::{ChartController, ChartView, PlotGeometry};
use interact_demo::data::{load_ohlc_csv, resolve_path, synthetic_history};
use interact_demo::session::{RawInput, Session};
use interact_skia::{theme, ChartRenderer};
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    interact_demo::init_tracing();

    // Args: [csv] [controller.toml]
    let mut args = std::env::args().skip(1);
    let history = match args.next() {
        Some(raw) => load_ohlc_csv(&resolve_path(&raw)?)?,
        None => synthetic_history(2_000),
    };
    if history.is_empty() {
        anyhow::bail!("no candles loaded");
    }
    let controller = match args.next() {
        Some(p) => ChartController::load(p)?,
        None => ChartController::default(),
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Interactive Candles")
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e:?}"))?;

    let size = window.inner_size();
    let geometry = PlotGeometry::new(size.width as i32, size.height as i32, controller.scroll_height);
    let mut session = Session::new(ChartView::new(history, geometry, controller.bar_width), &controller);
    let renderer = ChartRenderer::new(theme::find("dark"));

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        let redraw = match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                    false
                }
                WindowEvent::Resized(new_size) => {
                    session.resize(new_size.width as i32, new_size.height as i32);
                    true
                }
                WindowEvent::CursorMoved { position, .. } => {
                    session.input(RawInput::CursorMoved(position.x as i32, position.y as i32))
                }
                WindowEvent::CursorLeft { .. } => session.input(RawInput::CursorLeft),
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => match state {
                    ElementState::Pressed => session.input(RawInput::ButtonDown),
                    ElementState::Released => session.input(RawInput::ButtonUp),
                },
                WindowEvent::MouseWheel { delta, .. } => {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y * 0.1,
                        MouseScrollDelta::PixelDelta(p) => p.y as f32 / 240.0,
                    };
                    session.zoom((1.0 + scroll).clamp(0.5, 2.0))
                }
                _ => false,
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&mut surface, &renderer, &session, &controller) {
                    tracing::error!(error = %e, "frame failed");
                }
                false
            }
            _ => false,
        };
        if redraw {
            window.request_redraw();
        }
    });
}

fn present(
    surface: &mut softbuffer::Surface,
    renderer: &ChartRenderer,
    session: &Session,
    controller: &ChartController,
) -> Result<()> {
    let (rgba, w, h, _) = renderer.render_to_rgba8(&session.view, &session.state, controller)?;
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w as u32), NonZeroU32::new(h as u32)) else {
        return Ok(());
    };
    surface
        .resize(nw, nh)
        .map_err(|e| anyhow::anyhow!("resize surface: {e:?}"))?;
    let mut frame = surface
        .buffer_mut()
        .map_err(|e| anyhow::anyhow!("frame buffer: {e:?}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        // softbuffer wants 0RGB
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e:?}"))?;
    Ok(())
}
