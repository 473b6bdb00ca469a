use sdl2::mixer::{Channel, Chunk, MAX_VOLUME};

use crate::session::Cue;

/// The game's sound effects, played fire-and-forget on any free mixer
/// channel. Muting drops the channel volume to zero instead of skipping
/// playback, so toggling back on never misses a cue mid-frame.
pub struct Audio {
    jump: Chunk,
    death: Chunk,
    enabled: bool,
}

impl Audio {
    pub fn load() -> Result<Self, String> {
        Ok(Audio {
            jump: Chunk::from_file("assets/sounds/sfx_breath.wav")?,
            death: Chunk::from_file("assets/sounds/sfx_bonk.wav")?,
            enabled: true,
        })
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        Channel::all().set_volume(if enabled { MAX_VOLUME } else { 0 });
    }

    /// Best-effort playback; a failure to play is not worth surfacing.
    pub fn play(&self, cue: Cue) {
        let chunk = match cue {
            Cue::Jump => &self.jump,
            Cue::Death => &self.death,
        };
        let _ = Channel::all().play(chunk, 0);
    }
}
