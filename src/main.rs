//! Entry point for the page-flip reader.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Open the document and any cached bookmark.
//! - Launch the GUI application.

mod app;
mod cache;
mod config;
mod document;
mod goals;
mod theme;

use crate::app::{page_area_size, run_app};
use crate::cache::load_bookmark;
use crate::config::{AppConfig, load_config, serialize_config};
use crate::document::load_document;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

enum Command {
    Open(PathBuf),
    PrintDefaultConfig,
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let doc_path = match parse_args()? {
        Command::Open(path) => path,
        Command::PrintDefaultConfig => {
            print!("{}", serialize_config(&AppConfig::default())?);
            return Ok(());
        }
    };
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        path = %doc_path.display(),
        level = %config.log_level,
        "Starting reader"
    );
    info!(
        duration_ms = config.page_flip.duration_ms,
        easing = %config.page_flip.easing,
        threshold = config.page_flip.accept_threshold,
        "Active page flip configuration"
    );

    let bookmark = load_bookmark(&doc_path);
    if let Some(bm) = &bookmark {
        info!(position = bm.position, zoom = bm.zoom, "Resuming from cached bookmark");
    }
    let zoom = bookmark.map(|bm| bm.zoom).unwrap_or(config.zoom);
    let (width, height) = page_area_size(config.window_width, config.window_height);
    let document = load_document(&doc_path, width, height, zoom)?;
    run_app(document, config, doc_path, bookmark).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<Command> {
    let mut args = env::args().skip(1);
    let arg = args.next().ok_or_else(|| {
        anyhow!("Usage: folio-reader <page-directory-or-image> | --print-default-config")
    })?;
    if arg == "--print-default-config" {
        return Ok(Command::PrintDefaultConfig);
    }

    let path = PathBuf::from(arg);
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.as_path().display()));
    }
    Ok(Command::Open(path))
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
