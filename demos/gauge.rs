//! Draw a 0–100 gauge to `gauge.svg` (or the path given as the first argument).
//!
//! Run with `RUST_LOG=debug cargo run --example gauge --features tracing` to
//! see the geometry being built.

use gaugeface::{GaugeGeometry, RenderOptions, draw_gauge};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let output = std::env::args().nth(1).unwrap_or_else(|| "gauge.svg".to_string());
    let geometry = GaugeGeometry::new(&[0.0, 20.0, 40.0, 60.0, 80.0, 100.0], None, 3)?;
    draw_gauge(&geometry, &RenderOptions::default(), output.as_str())?;
    tracing::info!(%output, "wrote gauge");
    Ok(())
}
