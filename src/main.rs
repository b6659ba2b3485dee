#![allow(non_snake_case)]

mod app;
mod audio;
mod components;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Default music track, relative to the working directory.
const DEFAULT_TRACK: &str = "assets/lover.mp3";

/// Launch options, resolved once at startup.
#[derive(Debug)]
pub struct AppConfig {
    /// Path to the looping music track.
    pub track: PathBuf,
    /// Whether the mute toggle starts engaged.
    pub start_muted: bool,
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the launch configuration (set from command line or defaults).
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(|| AppConfig {
        track: PathBuf::from(DEFAULT_TRACK),
        start_muted: false,
    })
}

/// Lovenote - an animated Valentine greeting card
#[derive(Parser, Debug)]
#[command(name = "lovenote-desktop")]
#[command(about = "Lovenote - an animated Valentine greeting card")]
struct Args {
    /// Music track to loop (default: assets/lover.mp3)
    #[arg(short, long)]
    track: Option<PathBuf>,

    /// Start with the music muted
    #[arg(long)]
    muted: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let _ = CONFIG.set(AppConfig {
        track: args.track.unwrap_or_else(|| PathBuf::from(DEFAULT_TRACK)),
        start_muted: args.muted,
    });

    tracing::info!("Starting Lovenote with track: {:?}", config().track);

    // A tall, card-shaped window
    let window_width = 520.0;
    let window_height = 860.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Le de fleur")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
