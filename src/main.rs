use std::time::{Duration, SystemTime, UNIX_EPOCH};

mod actor;
mod assets;
mod audio;
mod collision;
mod config;
mod input_system;
mod obstacle;
mod render;
mod score;
mod session;

use assets::Assets;
use audio::Audio;
use config::{FRAME_DELAY_MS, SCREEN_HEIGHT, SCREEN_WIDTH};
use score::FileScoreStore;
use session::{GameIntent, GameSession};

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _audio_subsystem = sdl_context.audio()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;
    sdl2::mixer::open_audio(
        44_100,
        sdl2::mixer::DEFAULT_FORMAT,
        sdl2::mixer::DEFAULT_CHANNELS,
        2_048,
    )?;

    let window = video_subsystem
        .window("Flying Dog", SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();

    let assets = Assets::load(&texture_creator)?;
    let mut audio = Audio::load()?;
    let mut event_pump = sdl_context.event_pump()?;

    let data_dir = dirs::home_dir()
        .map(|p| p.join(".flying-dog"))
        .unwrap_or_else(|| std::path::PathBuf::from("./data"));
    let store = FileScoreStore::new(&data_dir)
        .map_err(|e| format!("Failed to open score store in {}: {}", data_dir.display(), e))?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| e.to_string())?
        .as_secs();
    let mut session = GameSession::new(Box::new(store), seed);

    println!("Best score: {}", session.best_score());
    println!("Controls: SPACE to start and jump, P or ESC to pause");

    let mut running = true;
    while running {
        for intent in input_system::poll_intents(&mut event_pump, session.mode()) {
            match intent {
                // Quit lets the current frame finish cleanly first.
                GameIntent::Quit => running = false,
                other => session.apply(other),
            }
        }

        session.advance();

        if audio.enabled() != session.sound_enabled() {
            audio.set_enabled(session.sound_enabled());
        }
        for cue in session.take_cues() {
            audio.play(cue);
        }

        render::draw_frame(&mut canvas, &assets, &session)?;

        std::thread::sleep(Duration::from_millis(FRAME_DELAY_MS));
    }

    Ok(())
}
