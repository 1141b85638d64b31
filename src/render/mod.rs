//! Frame rendering
//!
//! Everything is drawn at the logical play-field resolution into an
//! offscreen target, which is then scaled onto the window with letterbox
//! bars. The rules layer never sees window pixels.

mod sprites;
mod viewport;

pub use sprites::Sprites;
pub use viewport::Viewport;

use macroquad::prelude::*;
use crate::game::{Body, GameSession, ParticlePool};
use crate::ui::{self, Anchor, Hud, HudText};

pub struct Renderer {
    target: RenderTarget,
    camera: Camera2D,
    logical: Vec2,
}

impl Renderer {
    pub fn new(width: f32, height: f32) -> Self {
        let target = render_target(width as u32, height as u32);
        target.texture.set_filter(FilterMode::Linear);

        let mut camera = Camera2D::from_display_rect(macroquad::math::Rect::new(0.0, 0.0, width, height));
        camera.render_target = Some(target.clone());

        Self { target, camera, logical: Vec2::new(width, height) }
    }

    /// Viewport for the current window size
    pub fn viewport(&self) -> Viewport {
        Viewport::fit(self.logical, Vec2::new(screen_width(), screen_height()))
    }

    pub fn draw(&self, session: &GameSession, particles: &ParticlePool, sprites: &Sprites, hud: &Hud) {
        // Offscreen pass at logical resolution
        set_camera(&self.camera);
        clear_background(ui::BG_COLOR);

        for enemy in session.enemies().iter() {
            draw_body(enemy, sprites.enemy.as_ref(), ui::ENEMY_COLOR);
        }
        for laser in session.lasers().iter() {
            draw_body(laser, sprites.laser.as_ref(), ui::LASER_COLOR);
        }
        draw_body(session.player(), sprites.player.as_ref(), ui::PLAYER_COLOR);

        for p in particles.alive() {
            let [r, g, b] = p.color;
            let color = Color::from_rgba(r, g, b, (p.opacity() * 255.0) as u8);
            let half = p.size * 0.5;
            draw_rectangle(p.position.x - half, p.position.y - half, p.size, p.size, color);
        }

        if let Some(rect) = hud.play_again {
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, ui::BUTTON_BORDER);
        }
        for text in &hud.texts {
            draw_hud_text(text);
        }

        // Present with letterbox
        set_default_camera();
        clear_background(ui::LETTERBOX_COLOR);
        let vp = self.viewport();
        draw_texture_ex(
            &self.target.texture,
            vp.offset.x,
            vp.offset.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vp.size()),
                // Render targets come out upside down
                flip_y: true,
                ..Default::default()
            },
        );
    }
}

fn draw_body(body: &Body, texture: Option<&Texture2D>, fallback: Color) {
    if !body.visible {
        return;
    }
    let min = body.min();
    let size = body.half_size * 2.0;
    match texture {
        Some(tex) => draw_texture_ex(
            tex,
            min.x,
            min.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(size),
                ..Default::default()
            },
        ),
        None => draw_rectangle(min.x, min.y, size.x, size.y, fallback),
    }
}

fn draw_hud_text(text: &HudText) {
    let font_size = text.font_size as u16;
    let dims = measure_text(&text.text, None, font_size, 1.0);
    // draw_text takes the baseline, offset_y is top-to-baseline
    let (x, y) = match text.anchor {
        Anchor::TopLeft => (text.position.x, text.position.y + dims.offset_y),
        Anchor::Center => (
            text.position.x - dims.width * 0.5,
            text.position.y - dims.height * 0.5 + dims.offset_y,
        ),
    };
    draw_text(&text.text, x, y, text.font_size, text.color);
}
