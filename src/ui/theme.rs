//! UI Theme - Shared colors and styling constants

use macroquad::prelude::Color;

// =============================================================================
// Play-field Colors
// =============================================================================

/// Space background
pub const BG_COLOR: Color = Color::new(0.02, 0.02, 0.06, 1.0);

/// Letterbox bars around the play-field
pub const LETTERBOX_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Fallback sprite colors (used when textures fail to load)
pub const PLAYER_COLOR: Color = Color::new(0.35, 0.75, 1.0, 1.0);
pub const LASER_COLOR: Color = Color::new(1.0, 0.95, 0.4, 1.0);
pub const ENEMY_COLOR: Color = Color::new(0.9, 0.3, 0.35, 1.0);

// =============================================================================
// HUD Text
// =============================================================================

/// Score/lives text
pub const TEXT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// "Game Over" banner (#FF0000)
pub const LOSE_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// "You Win!" banner (#00FF00)
pub const WIN_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// "Play Again" button outline
pub const BUTTON_BORDER: Color = Color::new(1.0, 1.0, 1.0, 0.6);

// =============================================================================
// Font Sizes
// =============================================================================

/// Score/lives and button text size
pub const FONT_SIZE_HUD: f32 = 32.0;

/// End-of-round banner size
pub const FONT_SIZE_BANNER: f32 = 48.0;
