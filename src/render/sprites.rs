//! Sprite textures
//!
//! Loaded once at startup. A texture that fails to load is logged and left
//! out; the renderer draws a flat rectangle in its place.

use macroquad::prelude::*;

pub const PLAYER_PATH: &str = "assets/player.png";
pub const LASER_PATH: &str = "assets/laser.png";
pub const ENEMY_PATH: &str = "assets/enemy.png";

#[derive(Default)]
pub struct Sprites {
    pub player: Option<Texture2D>,
    pub laser: Option<Texture2D>,
    pub enemy: Option<Texture2D>,
}

impl Sprites {
    pub async fn load() -> Self {
        Self {
            player: load_sprite(PLAYER_PATH).await,
            laser: load_sprite(LASER_PATH).await,
            enemy: load_sprite(ENEMY_PATH).await,
        }
    }
}

async fn load_sprite(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Nearest);
            log::info!("Loaded sprite {}", path);
            Some(tex)
        }
        Err(e) => {
            log::warn!("Failed to load sprite {}: {}, drawing placeholder", path, e);
            None
        }
    }
}
