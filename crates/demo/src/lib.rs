// File: crates/demo/src/lib.rs
// Summary: Shared host plumbing for the demos: CSV loading, logging setup and scripted pointer sessions.

pub mod data;
pub mod session;

/// Install a `tracing` subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
