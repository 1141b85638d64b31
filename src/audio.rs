//! Sound effects
//!
//! Three one-shot cues. A sound that fails to load is logged and stays
//! silent; the game runs the same without it.

use macroquad::audio::{load_sound, play_sound_once, Sound};

/// A sound cue raised by the rules layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Fire,
    EnemyDestroyed,
    PlayerDestroyed,
}

impl Cue {
    pub const ALL: [Cue; 3] = [Cue::Fire, Cue::EnemyDestroyed, Cue::PlayerDestroyed];

    pub fn path(self) -> &'static str {
        match self {
            Cue::Fire => "assets/sounds/laser_player.ogg",
            Cue::EnemyDestroyed => "assets/sounds/enemy_destroyed.ogg",
            Cue::PlayerDestroyed => "assets/sounds/player_destroyed.ogg",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Default)]
pub struct Sfx {
    sounds: [Option<Sound>; 3],
}

impl Sfx {
    pub async fn load() -> Self {
        let mut sfx = Self::default();
        for cue in Cue::ALL {
            match load_sound(cue.path()).await {
                Ok(sound) => {
                    log::info!("Loaded sound {}", cue.path());
                    sfx.sounds[cue.index()] = Some(sound);
                }
                Err(e) => log::warn!("Failed to load sound {}: {}", cue.path(), e),
            }
        }
        sfx
    }

    pub fn play(&self, cue: Cue) {
        if let Some(sound) = &self.sounds[cue.index()] {
            play_sound_once(sound);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_slots_are_distinct() {
        let mut seen = [false; 3];
        for cue in Cue::ALL {
            assert!(!seen[cue.index()]);
            seen[cue.index()] = true;
            assert!(cue.path().starts_with("assets/sounds/"));
            assert!(cue.path().ends_with(".ogg"));
        }
    }
}
