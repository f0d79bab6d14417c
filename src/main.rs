#![allow(non_snake_case)]

mod app;
mod components;
mod content;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;
use valentine_core::Mode;

/// Global assets directory, set from command line
static ASSETS_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Mode the session starts in, set from command line
static START_MODE: OnceLock<Mode> = OnceLock::new();

/// Get the assets directory (set from command line or default)
pub fn get_assets_dir() -> PathBuf {
    ASSETS_DIR
        .get()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("assets"))
}

/// Get the starting mode (set from command line or default)
pub fn get_start_mode() -> Mode {
    START_MODE.get().copied().unwrap_or_default()
}

/// Valentine card - desktop edition
#[derive(Parser, Debug)]
#[command(name = "valentine-desktop")]
#[command(about = "A personalized valentine card with confetti, heart rain and your own photos")]
struct Args {
    /// Directory holding hero, story and gallery images and the reward gifs
    #[arg(short, long, default_value = "assets")]
    assets_dir: PathBuf,

    /// Start in the alternate mode
    #[arg(long)]
    alternate: bool,

    /// Tracing filter directive (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 1000.0)]
    height: f64,
}

fn main() {
    let args = Args::parse();

    let filter = match args.log.as_deref() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Absolute so the webview resolves images regardless of its base url
    let assets_dir = std::fs::canonicalize(&args.assets_dir).unwrap_or(args.assets_dir);
    let start_mode = if args.alternate {
        Mode::Alternate
    } else {
        Mode::Primary
    };

    let _ = ASSETS_DIR.set(assets_dir.clone());
    let _ = START_MODE.set(start_mode);

    tracing::info!("Starting in {} mode with assets from {:?}", start_mode, assets_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Be My Valentine")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
