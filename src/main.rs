//! MCQ Practice Backend
//!
//! - Axum HTTP + WebSocket API over an in-memory MCQ generator
//! - Built-in content catalog, optionally extended from TOML
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT             : u16 (default 3000)
//!   MCQ_CONFIG_PATH  : path to TOML config (generator settings + extra chapters)
//!   LOG_LEVEL        : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT       : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod catalog;
mod seeds;
mod templates;
mod random;
mod generator;
mod stats;
mod session;
mod error;
mod config;
mod state;
mod protocol;
mod logic;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Catalog, generator and session store.
  let state = Arc::new(AppState::new());

  let app = build_router(state.clone());

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "mcq_practice_backend", %addr, chapters = state.catalog.len(), "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
