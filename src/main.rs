//! SKYFIRE: a tiny vertical arcade shooter
//!
//! Fly left and right along the bottom of the field and shoot down the
//! enemies raining from the top. 200 points wins, three hits loses.
//!
//! The rules live in `game` and run at a fixed tick rate; everything else
//! (input, audio, rendering) sits around them and only reads the session.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod audio;
mod config;
mod game;
mod input;
mod render;
mod ui;

use macroquad::prelude::*;
use app::AppState;
use config::{GameConfig, DEFAULT_CONFIG_PATH};
use std::path::PathBuf;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("SKYFIRE v{}", VERSION),
        window_width: 600,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional first argument overrides the config path
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = GameConfig::load_or_default(&config_path);

    let seed = (miniquad::date::now() * 1000.0) as u64;
    let mut app = AppState::new(config, seed).await;

    log::info!("=== SKYFIRE v{} ===", VERSION);

    loop {
        app.frame();
        next_frame().await;
    }
}
