use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;

/// Loads a texture from the given path with consistent error handling.
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Result<Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))
}

/// Every texture the game draws, acquired once at startup and handed to the
/// renderer by reference. A missing or unreadable asset is fatal before the
/// main loop starts.
pub struct Assets<'a> {
    pub background: Texture<'a>,
    pub ground: Texture<'a>,
    pub dog: Texture<'a>,
    pub pipe: Texture<'a>,
    pub get_ready: Texture<'a>,
    pub game_over: Texture<'a>,
    pub pause_icon: Texture<'a>,
    pub resume_icon: Texture<'a>,
    pub pause_tab: Texture<'a>,
    pub sound_icon: Texture<'a>,
    pub replay_icon: Texture<'a>,
    /// One texture per decimal digit, indexed 0-9.
    pub digits: Vec<Texture<'a>>,
}

impl<'a> Assets<'a> {
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>) -> Result<Self, String> {
        let mut digits = Vec::with_capacity(10);
        for i in 0..10 {
            digits.push(load_texture(
                texture_creator,
                &format!("assets/numbers/{}.png", i),
            )?);
        }

        Ok(Assets {
            background: load_texture(texture_creator, "assets/images/background.png")?,
            ground: load_texture(texture_creator, "assets/images/land.png")?,
            dog: load_texture(texture_creator, "assets/images/shiba.png")?,
            pipe: load_texture(texture_creator, "assets/images/pipe.png")?,
            get_ready: load_texture(texture_creator, "assets/images/message.png")?,
            game_over: load_texture(texture_creator, "assets/images/game_over.png")?,
            pause_icon: load_texture(texture_creator, "assets/images/pause.png")?,
            resume_icon: load_texture(texture_creator, "assets/images/resume.png")?,
            pause_tab: load_texture(texture_creator, "assets/images/pause_tab.png")?,
            sound_icon: load_texture(texture_creator, "assets/images/sound.png")?,
            replay_icon: load_texture(texture_creator, "assets/images/replay.png")?,
            digits,
        })
    }
}
