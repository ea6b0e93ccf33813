// File: crates/demo/src/main.rs
// Summary: Loads OHLC CSV (or a synthetic history), replays a scripted pointer session, writes a PNG per repaint.

use std::path::PathBuf;

use anyhow::{Context, Result};
use interact_core::{ChartController, ChartView, PlotGeometry};
use interact_demo::data::{load_ohlc_csv, resolve_path, synthetic_history};
use interact_demo::session::{demo_script, replay, Session};
use interact_skia::{theme, ChartRenderer};

const WIDTH: i32 = 1024;
const HEIGHT: i32 = 640;

struct Args {
    csv: Option<String>,
    controller: Option<PathBuf>,
    out: PathBuf,
    theme: String,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { csv: None, controller: None, out: PathBuf::from("target/out"), theme: "dark".into() };
    let mut it = std::env::args().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--controller" => args.controller = Some(it.next().context("--controller needs a path")?.into()),
            "--out" => args.out = it.next().context("--out needs a directory")?.into(),
            "--theme" => args.theme = it.next().context("--theme needs a name")?,
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag {flag}"),
            _ => args.csv = Some(a),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    interact_demo::init_tracing();
    let args = parse_args()?;

    let controller = match &args.controller {
        Some(p) => ChartController::load(p)?,
        None => ChartController::default(),
    };

    let history = match &args.csv {
        Some(raw) => {
            let path = resolve_path(raw)?;
            load_ohlc_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            tracing::info!("no CSV given; using a synthetic history");
            synthetic_history(600)
        }
    };
    if history.is_empty() {
        anyhow::bail!("no candles loaded; check headers/delimiter.");
    }

    let geometry = PlotGeometry::new(WIDTH, HEIGHT, controller.scroll_height);
    let view = ChartView::new(history, geometry, controller.bar_width);
    let renderer = ChartRenderer::new(theme::find(&args.theme));
    let mut session = Session::new(view, &controller);

    let script = demo_script(WIDTH, HEIGHT, controller.scroll_height);
    let out_dir = args.out;
    let frames = replay(&mut session, &script, |step, s| {
        let out = out_dir.join(format!("interaction_{step:02}.png"));
        renderer.render_to_png(&s.view, &s.state, &controller, &out)?;
        println!("Wrote {}", out.display());
        Ok(())
    })?;

    println!(
        "Replayed {} inputs, {} repaints; final selection: {:?}",
        script.len(),
        frames,
        session.state.selection().map(|c| c.index())
    );
    Ok(())
}
