//! Game configuration
//!
//! Uses RON (Rusty Object Notation) for a human-editable config file.
//! Every field has a default, so a file only needs the values it changes:
//!
//! ```ron
//! (
//!     round: (win_score: 300),
//!     enemies: (count: 30, respawn_on_kill: false),
//! )
//! ```

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Default config location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "assets/config.ron";

/// Error type for config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Validation error: {0}")]
    Invalid(String),
}

/// Play-field dimensions in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self { width: 600.0, height: 800.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Spawn point (also where the player returns after losing a life)
    pub spawn: (f32, f32),
    /// Horizontal speed in pixels per second
    pub speed: f32,
    /// Fraction of velocity kept (and reversed) when hitting the field edge
    pub bounce: f32,
    pub lives: u32,
    /// Hitbox half-extents
    pub half_size: (f32, f32),
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn: (300.0, 700.0),
            speed: 200.0,
            bounce: 0.2,
            lives: 3,
            half_size: (24.0, 20.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Fixed pool size
    pub count: usize,
    /// Horizontal speed is random in [0, max_speed_x) with a random sign
    pub max_speed_x: f32,
    /// Downward speed is random in [0, max_speed_y)
    pub max_speed_y: f32,
    pub half_size: (f32, f32),
    /// Score awarded per destroyed enemy
    pub points: u32,
    /// false = destroyed enemies stay down until the next field reset
    pub respawn_on_kill: bool,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            count: 20,
            max_speed_x: 200.0,
            max_speed_y: 200.0,
            half_size: (20.0, 20.0),
            points: 10,
            respawn_on_kill: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaserConfig {
    /// Fixed pool size
    pub capacity: usize,
    /// Upward speed in pixels per second
    pub speed: f32,
    pub half_size: (f32, f32),
}

impl Default for LaserConfig {
    fn default() -> Self {
        Self {
            capacity: 30,
            speed: 900.0,
            half_size: (3.0, 12.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub win_score: u32,
    /// Delay before "Play Again" appears after the round ends
    pub restart_delay_ms: u32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Upper bound on catch-up ticks after a slow frame
    pub max_ticks_per_frame: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            win_score: 200,
            restart_delay_ms: 2000,
            tick_rate: 60,
            max_ticks_per_frame: 5,
        }
    }
}

impl RoundConfig {
    /// Fixed simulation step in seconds
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Number of ticks the "Play Again" reveal waits for (rounded up,
    /// saturating at `u32::MAX`)
    pub fn reveal_ticks(&self) -> u32 {
        let ticks = self.restart_delay_ms as u64 * self.tick_rate as u64;
        u32::try_from(ticks.div_ceil(1000)).unwrap_or(u32::MAX)
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub player: PlayerConfig,
    pub enemies: EnemyConfig,
    pub lasers: LaserConfig,
    pub round: RoundConfig,
}

/// Check that a value is a finite, strictly positive number
fn check_positive(value: f32, name: &str) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{} must be a positive number (got {})", name, value));
    }
    Ok(())
}

/// Check that a value is a finite, non-negative number
fn check_non_negative(value: f32, name: &str) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{} must be zero or positive (got {})", name, value));
    }
    Ok(())
}

impl GameConfig {
    /// Parse a config from RON text and validate it
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a RON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load from `path`, falling back to defaults.
    ///
    /// A missing file is normal (no config shipped); anything else is
    /// reported before falling back.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to load config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Serialize to pretty RON
    #[cfg(test)]
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check().map_err(ConfigError::Invalid)
    }

    fn check(&self) -> Result<(), String> {
        check_positive(self.field.width, "field.width")?;
        check_positive(self.field.height, "field.height")?;

        let p = &self.player;
        check_non_negative(p.spawn.0, "player.spawn.x")?;
        check_non_negative(p.spawn.1, "player.spawn.y")?;
        if p.spawn.0 > self.field.width || p.spawn.1 > self.field.height {
            return Err(format!(
                "player.spawn ({}, {}) is outside the {}x{} field",
                p.spawn.0, p.spawn.1, self.field.width, self.field.height
            ));
        }
        check_non_negative(p.speed, "player.speed")?;
        check_non_negative(p.bounce, "player.bounce")?;
        check_positive(p.half_size.0, "player.half_size.x")?;
        check_positive(p.half_size.1, "player.half_size.y")?;
        if p.lives == 0 {
            return Err("player.lives must be at least 1".to_string());
        }

        let e = &self.enemies;
        if e.count == 0 {
            return Err("enemies.count must be at least 1".to_string());
        }
        check_non_negative(e.max_speed_x, "enemies.max_speed_x")?;
        check_non_negative(e.max_speed_y, "enemies.max_speed_y")?;
        check_positive(e.half_size.0, "enemies.half_size.x")?;
        check_positive(e.half_size.1, "enemies.half_size.y")?;

        let l = &self.lasers;
        if l.capacity == 0 {
            return Err("lasers.capacity must be at least 1".to_string());
        }
        check_positive(l.speed, "lasers.speed")?;
        check_positive(l.half_size.0, "lasers.half_size.x")?;
        check_positive(l.half_size.1, "lasers.half_size.y")?;

        let r = &self.round;
        if r.win_score == 0 {
            return Err("round.win_score must be at least 1".to_string());
        }
        if r.tick_rate == 0 {
            return Err("round.tick_rate must be at least 1".to_string());
        }
        if r.max_ticks_per_frame == 0 {
            return Err("round.max_ticks_per_frame must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.field.width, 600.0);
        assert_eq!(config.field.height, 800.0);
        assert_eq!(config.enemies.count, 20);
        assert_eq!(config.player.lives, 3);
        assert_eq!(config.round.win_score, 200);
    }

    #[test]
    fn test_reveal_ticks_rounds_up() {
        let mut round = RoundConfig::default();
        assert_eq!(round.reveal_ticks(), 120);

        round.restart_delay_ms = 1001;
        assert_eq!(round.reveal_ticks(), 61);

        round.restart_delay_ms = 0;
        assert_eq!(round.reveal_ticks(), 0);
    }

    #[test]
    fn test_reveal_ticks_saturates() {
        let mut config = GameConfig::default();
        config.round.restart_delay_ms = u32::MAX;
        config.round.tick_rate = 2000;
        assert!(config.validate().is_ok());
        // 8_589_934_590 ticks does not fit in a u32
        assert_eq!(config.round.reveal_ticks(), u32::MAX);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = GameConfig::from_ron("(round: (win_score: 300), enemies: (respawn_on_kill: false))")
            .unwrap();
        assert_eq!(config.round.win_score, 300);
        assert_eq!(config.round.tick_rate, 60);
        assert!(!config.enemies.respawn_on_kill);
        assert_eq!(config.enemies.count, 20);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = GameConfig::from_ron("(enemies: (count: 0))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_ron("(field: (width: -1.0))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_ron("(player: (spawn: (900.0, 10.0)))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_ron() {
        let err = GameConfig::from_ron("(field: (width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut config = GameConfig::default();
        config.lasers.capacity = 8;
        let text = config.to_ron().unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let loaded = GameConfig::load(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(&dir.path().join("nope.ron"));
        assert_eq!(config, GameConfig::default());
    }
}
