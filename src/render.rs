//! Frame renderer: translates read-only session state into draw calls.
//!
//! Draw order matters: background, get-ready card, pipes, dog, ground,
//! then whichever overlay the current mode calls for. The frame is cleared
//! at the top and presented exactly once at the bottom.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

use crate::assets::Assets;
use crate::config::{
    ACTOR_DRAW_HEIGHT, ACTOR_DRAW_WIDTH, FLOOR_Y, GROUND_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::input_system::region_rect;
use crate::session::{GameSession, Mode};

pub fn draw_frame(
    canvas: &mut Canvas<Window>,
    assets: &Assets,
    session: &GameSession,
) -> Result<(), String> {
    canvas.set_draw_color(Color::RGB(0, 0, 0));
    canvas.clear();
    canvas.copy(&assets.background, None, None)?;

    if session.mode() == Mode::NotStarted {
        let card = Rect::new((SCREEN_WIDTH - 225) / 2, (SCREEN_HEIGHT - 204) / 2, 225, 204);
        canvas.copy(&assets.get_ready, None, Some(card))?;
    }

    for obstacle in session.obstacles() {
        canvas.copy(&assets.pipe, None, Some(obstacle.top_rect()))?;
        // The lower pipe is the same texture flipped vertically.
        canvas.copy_ex(
            &assets.pipe,
            None,
            Some(obstacle.bottom_rect()),
            0.0,
            None,
            false,
            true,
        )?;
    }

    let actor = session.actor();
    let dog = Rect::new(actor.x, actor.y, ACTOR_DRAW_WIDTH, ACTOR_DRAW_HEIGHT);
    canvas.copy(&assets.dog, None, Some(dog))?;

    // Two ground segments so the scroll wraps without a visible seam.
    let scroll = session.ground_scroll();
    for offset in [0, SCREEN_WIDTH] {
        let segment = Rect::new(
            scroll + offset,
            FLOOR_Y,
            SCREEN_WIDTH as u32,
            GROUND_HEIGHT as u32,
        );
        canvas.copy(&assets.ground, None, Some(segment))?;
    }

    match session.mode() {
        Mode::NotStarted => {}
        Mode::Playing => draw_playing_overlay(canvas, assets, session)?,
        Mode::Paused => draw_pause_overlay(canvas, assets, session)?,
        Mode::GameOver => draw_game_over_overlay(canvas, assets, session)?,
    }

    canvas.present();
    Ok(())
}

/// In-run HUD: the score up top and the pause icon in the corner.
fn draw_playing_overlay(
    canvas: &mut Canvas<Window>,
    assets: &Assets,
    session: &GameSession,
) -> Result<(), String> {
    let score = session.score();
    draw_score(
        canvas,
        &assets.digits,
        score,
        SCREEN_WIDTH / 2 - digit_span(score),
        50,
        24,
        36,
    )?;
    canvas.copy(&assets.pause_icon, None, Some(corner_icon_rect()))?;
    Ok(())
}

fn draw_pause_overlay(
    canvas: &mut Canvas<Window>,
    assets: &Assets,
    session: &GameSession,
) -> Result<(), String> {
    canvas.copy(&assets.resume_icon, None, Some(corner_icon_rect()))?;

    let tab = Rect::new((SCREEN_WIDTH - 250) / 2, (SCREEN_HEIGHT - 128) / 2, 250, 128);
    canvas.copy(&assets.pause_tab, None, Some(tab))?;

    // The icon sheet stacks the on/off frames vertically; the destination is
    // the mute control's own hit-region.
    let clip_y = if session.sound_enabled() { 0 } else { 24 };
    let src = Rect::new(0, clip_y, 32, 24);
    if let Some(dest) = region_rect(Mode::Paused, "mute") {
        canvas.copy(&assets.sound_icon, Some(src), Some(dest))?;
    }

    let score = session.score();
    let best = session.best_score();
    draw_score(
        canvas,
        &assets.digits,
        score,
        SCREEN_WIDTH / 2 - digit_span(score) + 80,
        SCREEN_HEIGHT / 2 - 30,
        20,
        30,
    )?;
    draw_score(
        canvas,
        &assets.digits,
        best,
        SCREEN_WIDTH / 2 - digit_span(best) + 80,
        SCREEN_HEIGHT / 2 + 20,
        20,
        30,
    )?;
    Ok(())
}

/// Game-over card with the replay button, run score on the right and best
/// score on the left.
fn draw_game_over_overlay(
    canvas: &mut Canvas<Window>,
    assets: &Assets,
    session: &GameSession,
) -> Result<(), String> {
    let card = Rect::new((SCREEN_WIDTH - 250) / 2, (SCREEN_HEIGHT - 209) / 2, 250, 209);
    canvas.copy(&assets.game_over, None, Some(card))?;

    // The replay button is drawn exactly where its hit-region listens.
    if let Some(replay) = region_rect(Mode::GameOver, "replay") {
        canvas.copy(&assets.replay_icon, None, Some(replay))?;
    }

    let score = session.score();
    let best = session.best_score();
    draw_score(
        canvas,
        &assets.digits,
        score,
        SCREEN_WIDTH / 2 - digit_span(score) + 68,
        SCREEN_HEIGHT / 2 + 15,
        16,
        21,
    )?;
    draw_score(
        canvas,
        &assets.digits,
        best,
        SCREEN_WIDTH / 2 - digit_span(best) - 55,
        SCREEN_HEIGHT / 2 + 15,
        16,
        21,
    )?;
    Ok(())
}

/// The pause/resume icon slot in the top-right corner. Clicks are resolved
/// against the larger hit-region in the input layer, not this rect.
fn corner_icon_rect() -> Rect {
    Rect::new(SCREEN_WIDTH - 45, 15, 30, 30)
}

/// Centering offset for a rendered number: 13px per decimal digit.
fn digit_span(value: u32) -> i32 {
    value.to_string().len() as i32 * 13
}

/// Draws a non-negative integer from the per-digit textures, left to right
/// with a 2px gap between digits.
fn draw_score(
    canvas: &mut Canvas<Window>,
    digits: &[Texture],
    value: u32,
    x: i32,
    y: i32,
    digit_width: u32,
    digit_height: u32,
) -> Result<(), String> {
    for (i, ch) in value.to_string().chars().enumerate() {
        if let Some(digit) = ch.to_digit(10) {
            let dest = Rect::new(
                x + i as i32 * (digit_width as i32 + 2),
                y,
                digit_width,
                digit_height,
            );
            canvas.copy(&digits[digit as usize], None, Some(dest))?;
        }
    }
    Ok(())
}
