//! HUD layout
//!
//! Builds the overlay for the current round as plain data (text, position,
//! size, color). The renderer draws it; click handling hit-tests the same
//! button rectangle, so what you see is what you click.

use macroquad::prelude::{Color, Vec2};
use crate::config::FieldConfig;
use crate::game::{GameSession, Phase};
use super::{Rect, theme};

/// Size of the "Play Again" button
const BUTTON_SIZE: (f32, f32) = (220.0, 48.0);

/// Where a text item is pinned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Position is the top-left corner of the text box
    TopLeft,
    /// Position is the middle of the text box
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub text: String,
    pub position: Vec2,
    pub font_size: f32,
    pub color: Color,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub texts: Vec<HudText>,
    /// Button rectangle, present once the restart delay has passed
    pub play_again: Option<Rect>,
}

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn lives_label(lives: u32) -> String {
    format!("Lives: {}", lives)
}

/// "Play Again" button, centered 100px below the middle of the field
pub fn play_again_rect(field: &FieldConfig) -> Rect {
    Rect::centered(field.width * 0.5, field.height * 0.5 + 100.0, BUTTON_SIZE.0, BUTTON_SIZE.1)
}

/// Lay out the HUD for a session
pub fn build_hud(session: &GameSession) -> Hud {
    let round = session.round();
    let field = &session.config().field;

    let mut texts = vec![
        HudText {
            text: score_label(round.score),
            position: Vec2::new(16.0, 16.0),
            font_size: theme::FONT_SIZE_HUD,
            color: theme::TEXT_COLOR,
            anchor: Anchor::TopLeft,
        },
        HudText {
            text: lives_label(round.lives),
            position: Vec2::new(16.0, 50.0),
            font_size: theme::FONT_SIZE_HUD,
            color: theme::TEXT_COLOR,
            anchor: Anchor::TopLeft,
        },
    ];

    let banner = match round.phase {
        Phase::Playing => None,
        Phase::Won => Some(("You Win!", theme::WIN_COLOR)),
        Phase::Lost => Some(("Game Over", theme::LOSE_COLOR)),
    };
    if let Some((text, color)) = banner {
        texts.push(HudText {
            text: text.to_string(),
            position: Vec2::new(field.width * 0.5, field.height * 0.5),
            font_size: theme::FONT_SIZE_BANNER,
            color,
            anchor: Anchor::Center,
        });
    }

    let play_again = session.play_again_visible().then(|| play_again_rect(field));
    if let Some(rect) = play_again {
        texts.push(HudText {
            text: "Play Again".to_string(),
            position: Vec2::new(rect.center_x(), rect.center_y()),
            font_size: theme::FONT_SIZE_HUD,
            color: theme::TEXT_COLOR,
            anchor: Anchor::Center,
        });
    }

    Hud { texts, play_again }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::TickInput;

    /// A narrow field where every enemy sits in the player's firing column,
    /// so the first laser is guaranteed a kill
    fn won_session() -> GameSession {
        let mut config = GameConfig::default();
        config.field.width = 40.0;
        config.player.spawn = (20.0, 700.0);
        config.player.half_size = (10.0, 10.0);
        config.enemies.max_speed_x = 0.0;
        config.enemies.max_speed_y = 0.0;
        config.round.win_score = 10;
        let mut session = GameSession::new(config, 9);

        session.tick(&TickInput { fire_pressed: true, ..TickInput::default() });
        for _ in 0..100 {
            if session.round().score > 0 {
                break;
            }
            session.tick(&TickInput::default());
        }
        assert_eq!(session.round().score, 10);
        session
    }

    #[test]
    fn test_labels() {
        assert_eq!(score_label(0), "Score: 0");
        assert_eq!(score_label(190), "Score: 190");
        assert_eq!(lives_label(3), "Lives: 3");
    }

    #[test]
    fn test_playing_hud_has_score_and_lives() {
        let session = GameSession::new(GameConfig::default(), 1);
        let hud = build_hud(&session);
        assert_eq!(hud.texts.len(), 2);
        assert_eq!(hud.texts[0].text, "Score: 0");
        assert_eq!(hud.texts[0].position, Vec2::new(16.0, 16.0));
        assert_eq!(hud.texts[1].text, "Lives: 3");
        assert_eq!(hud.texts[1].position, Vec2::new(16.0, 50.0));
        assert!(hud.play_again.is_none());
    }

    #[test]
    fn test_play_again_button_position() {
        let rect = play_again_rect(&FieldConfig::default());
        assert_eq!((rect.center_x(), rect.center_y()), (300.0, 500.0));
        assert!(rect.contains(300.0, 500.0));
        assert!(!rect.contains(300.0, 400.0));
    }

    #[test]
    fn test_banner_then_button() {
        let mut session = won_session();
        let score = session.round().score;
        let lives = session.round().lives;

        // The win is noticed on the tick after the kill
        session.tick(&TickInput::default());
        assert_eq!(session.phase(), Phase::Won);

        let hud = build_hud(&session);
        assert_eq!(hud.texts[0].text, score_label(score));
        assert_eq!(hud.texts[1].text, lives_label(lives));
        let banner = &hud.texts[2];
        assert_eq!(banner.text, "You Win!");
        assert_eq!(banner.color, theme::WIN_COLOR);
        assert_eq!(banner.position, Vec2::new(20.0, 400.0));
        assert!(hud.play_again.is_none());

        for _ in 0..120 {
            session.tick(&TickInput::default());
        }
        let hud = build_hud(&session);
        assert_eq!(hud.play_again, Some(play_again_rect(&session.config().field)));
        assert_eq!(hud.texts.last().unwrap().text, "Play Again");
    }
}
