//! Translates raw SDL2 events into game intents.
//!
//! Both the keyboard mapping and the clickable controls depend on the
//! current mode, so interpretation lives here as pure helpers over
//! (event, mode). The clickable controls are a table of named hit-regions
//! rather than coordinate checks scattered through the event loop.

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::rect::Rect;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::session::{GameIntent, Mode};

/// A named clickable rectangle, active in exactly one mode.
pub struct HitRegion {
    pub name: &'static str,
    pub rect: Rect,
    pub intent: GameIntent,
}

/// The clickable controls for the given mode. The rectangles match where
/// the renderer puts the corresponding icons.
pub fn hit_regions(mode: Mode) -> Vec<HitRegion> {
    match mode {
        Mode::Paused => vec![
            HitRegion {
                name: "resume",
                rect: Rect::new(SCREEN_WIDTH - 60, 10, 50, 50),
                intent: GameIntent::PauseToggle,
            },
            HitRegion {
                name: "mute",
                rect: Rect::new(
                    (SCREEN_WIDTH - 250) / 2 + 50,
                    (SCREEN_HEIGHT - 128) / 2 + 40,
                    32,
                    24,
                ),
                intent: GameIntent::MuteToggle,
            },
        ],
        Mode::GameOver => vec![HitRegion {
            name: "replay",
            rect: Rect::new(
                (SCREEN_WIDTH - 100) / 2,
                (SCREEN_HEIGHT - 56) / 2 + 100,
                100,
                56,
            ),
            intent: GameIntent::Restart,
        }],
        Mode::NotStarted | Mode::Playing => Vec::new(),
    }
}

/// Drains every pending event and folds them into intents. Finite per tick;
/// events that mean nothing in the current mode produce nothing.
pub fn poll_intents(event_pump: &mut EventPump, mode: Mode) -> Vec<GameIntent> {
    let mut intents = Vec::new();

    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. } => intents.push(GameIntent::Quit),
            Event::KeyDown {
                keycode: Some(key), ..
            } => {
                if let Some(intent) = interpret_key(key, mode) {
                    intents.push(intent);
                }
            }
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                if let Some(intent) = interpret_click(x, y, mode) {
                    intents.push(intent);
                }
            }
            _ => {}
        }
    }

    intents
}

/// Space starts the run or jumps; P and Escape toggle pause.
pub fn interpret_key(key: Keycode, mode: Mode) -> Option<GameIntent> {
    match (key, mode) {
        (Keycode::Space, Mode::NotStarted) => Some(GameIntent::Start),
        (Keycode::Space, Mode::Playing) => Some(GameIntent::Jump),
        (Keycode::P | Keycode::Escape, Mode::Playing | Mode::Paused) => {
            Some(GameIntent::PauseToggle)
        }
        _ => None,
    }
}

/// The rect of a named control, shared with the renderer so an icon and its
/// hit-region cannot drift apart.
pub fn region_rect(mode: Mode, name: &str) -> Option<Rect> {
    hit_regions(mode)
        .iter()
        .find(|region| region.name == name)
        .map(|region| region.rect)
}

/// Looks a click up in the hit-region table for the current mode.
pub fn interpret_click(x: i32, y: i32, mode: Mode) -> Option<GameIntent> {
    hit_regions(mode)
        .iter()
        .find(|region| region.rect.contains_point((x, y)))
        .map(|region| region.intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_starts_before_the_run_and_jumps_during_it() {
        assert_eq!(
            interpret_key(Keycode::Space, Mode::NotStarted),
            Some(GameIntent::Start)
        );
        assert_eq!(
            interpret_key(Keycode::Space, Mode::Playing),
            Some(GameIntent::Jump)
        );
        assert_eq!(interpret_key(Keycode::Space, Mode::Paused), None);
        assert_eq!(interpret_key(Keycode::Space, Mode::GameOver), None);
    }

    #[test]
    fn pause_keys_only_act_during_a_run() {
        assert_eq!(
            interpret_key(Keycode::P, Mode::Playing),
            Some(GameIntent::PauseToggle)
        );
        assert_eq!(
            interpret_key(Keycode::Escape, Mode::Paused),
            Some(GameIntent::PauseToggle)
        );
        assert_eq!(interpret_key(Keycode::P, Mode::NotStarted), None);
        assert_eq!(interpret_key(Keycode::Escape, Mode::GameOver), None);
    }

    #[test]
    fn unmapped_keys_are_ignored_everywhere() {
        for mode in [Mode::NotStarted, Mode::Playing, Mode::Paused, Mode::GameOver] {
            assert_eq!(interpret_key(Keycode::W, mode), None);
            assert_eq!(interpret_key(Keycode::Return, mode), None);
        }
    }

    #[test]
    fn replay_button_restarts_only_on_the_game_over_screen() {
        // Center of the replay button.
        let (x, y) = (SCREEN_WIDTH / 2, (SCREEN_HEIGHT - 56) / 2 + 128);

        assert_eq!(interpret_click(x, y, Mode::GameOver), Some(GameIntent::Restart));
        assert_eq!(interpret_click(x, y, Mode::Playing), None);
        assert_eq!(interpret_click(x, y, Mode::Paused), None);
        assert_eq!(interpret_click(x, y, Mode::NotStarted), None);
    }

    #[test]
    fn pause_overlay_clicks_resume_and_mute() {
        let resume = (SCREEN_WIDTH - 35, 35);
        assert_eq!(
            interpret_click(resume.0, resume.1, Mode::Paused),
            Some(GameIntent::PauseToggle)
        );

        let mute = ((SCREEN_WIDTH - 250) / 2 + 60, (SCREEN_HEIGHT - 128) / 2 + 50);
        assert_eq!(
            interpret_click(mute.0, mute.1, Mode::Paused),
            Some(GameIntent::MuteToggle)
        );

        // The same spots do nothing outside the pause overlay.
        assert_eq!(interpret_click(resume.0, resume.1, Mode::Playing), None);
        assert_eq!(interpret_click(mute.0, mute.1, Mode::GameOver), None);
    }

    #[test]
    fn clicks_outside_every_region_produce_nothing() {
        for mode in [Mode::NotStarted, Mode::Playing, Mode::Paused, Mode::GameOver] {
            assert_eq!(interpret_click(1, 1, mode), None);
        }
    }

    #[test]
    fn region_tables_match_their_modes() {
        assert!(hit_regions(Mode::NotStarted).is_empty());
        assert!(hit_regions(Mode::Playing).is_empty());

        let paused: Vec<_> = hit_regions(Mode::Paused).iter().map(|r| r.name).collect();
        assert_eq!(paused, vec!["resume", "mute"]);

        let game_over: Vec<_> = hit_regions(Mode::GameOver).iter().map(|r| r.name).collect();
        assert_eq!(game_over, vec!["replay"]);
    }
}
