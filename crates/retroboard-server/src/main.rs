//! RetroBoard server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, seeds the settings table from the defaults file,
//! and serves the JSON API under `/api` plus the client bundle as a
//! single-page app everywhere else.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::Router;
use clap::Parser;
use retroboard_core::{setting::SettingDefault, store::RetroStore as _};
use retroboard_store_sqlite::SqliteStore;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::{
  services::{ServeDir, ServeFile},
  trace::TraceLayer,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "RetroBoard server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

/// Runtime server configuration, deserialised from `config.toml` with
/// `RETROBOARD_*` environment overrides. Every field has a default so the
/// server starts with no config file at all.
#[derive(Deserialize, Clone)]
struct ServerConfig {
  #[serde(default = "defaults::host")]
  host:          String,
  #[serde(default = "defaults::port")]
  port:          u16,
  /// SQLite database file; created on first start.
  #[serde(default = "defaults::db_path")]
  db_path:       PathBuf,
  /// Directory holding the built client bundle.
  #[serde(default = "defaults::static_dir")]
  static_dir:    PathBuf,
  /// JSON file with the settings seed records.
  #[serde(default = "defaults::settings_path")]
  settings_path: PathBuf,
}

mod defaults {
  use std::path::PathBuf;

  pub fn host() -> String { "127.0.0.1".into() }
  pub fn port() -> u16 { 8000 }
  pub fn db_path() -> PathBuf { "data.sqlite".into() }
  pub fn static_dir() -> PathBuf { "static".into() }
  pub fn settings_path() -> PathBuf { "default_settings.json".into() }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // RETROBOARD_ENV=development raises the default log level to debug;
  // RUST_LOG still wins when set.
  let environment =
    std::env::var("RETROBOARD_ENV").unwrap_or_else(|_| "production".into());
  let default_level = if environment.eq_ignore_ascii_case("development") {
    LevelFilter::DEBUG
  } else {
    LevelFilter::INFO
  };
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("RETROBOARD"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Open the store; this also runs the idempotent schema DDL.
  let store = SqliteStore::open(&server_cfg.db_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", server_cfg.db_path))?;

  // Seed settings. Names already present keep their current values.
  let seed = load_setting_defaults(&server_cfg.settings_path)?;
  store
    .sync_settings(&seed)
    .await
    .context("failed to seed settings")?;
  tracing::debug!(count = seed.len(), "settings synced");

  let store = Arc::new(store);

  // `/api/*` is the JSON API; everything else serves the client bundle with
  // an index.html fallback. Unmatched `/api` paths 404 inside the API
  // router and never reach the SPA fallback.
  let spa = ServeDir::new(&server_cfg.static_dir).fallback(ServeFile::new(
    server_cfg.static_dir.join("index.html"),
  ));
  let app = Router::new()
    .nest("/api", retroboard_api::api_router(store))
    .fallback_service(spa)
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Read the ordered settings seed list from `path`.
fn load_setting_defaults(path: &Path) -> anyhow::Result<Vec<SettingDefault>> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read settings defaults at {path:?}"))?;
  serde_json::from_str(&raw)
    .with_context(|| format!("malformed settings defaults in {path:?}"))
}
