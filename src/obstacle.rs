use crate::config::{DRIFT_MAX, GAP_MIN, PIPE_BODY_HEIGHT, PIPE_GAP, PIPE_WIDTH};
use rand::Rng;
use sdl2::rect::Rect;

/// One pipe pair. `gap_y` is the y of the gap's top edge; the opening spans
/// `gap_y..gap_y + PIPE_GAP` and everything else in the column is solid.
pub struct Obstacle {
    pub x: i32,
    pub gap_y: i32,
    pub passed: bool,
    pub can_drift: bool,
    osc_velocity: i32,
}

impl Obstacle {
    /// The drift velocity is sampled up front even when drifting starts out
    /// disabled, so a pipe enabled mid-flight already has a direction. It
    /// must never be zero; a zero draw becomes +1.
    pub fn new(x: i32, gap_y: i32, can_drift: bool, rng: &mut impl Rng) -> Self {
        let mut osc_velocity = rng.random_range(-1..=1);
        if osc_velocity == 0 {
            osc_velocity = 1;
        }

        Obstacle {
            x,
            gap_y,
            passed: false,
            can_drift,
            osc_velocity,
        }
    }

    pub fn advance(&mut self, speed: i32) {
        self.x -= speed;
    }

    /// Vertical drift, reflecting off the walls at GAP_MIN and DRIFT_MAX.
    pub fn drift(&mut self) {
        if self.can_drift {
            self.gap_y += self.osc_velocity;
            if self.gap_y < GAP_MIN || self.gap_y > DRIFT_MAX {
                self.osc_velocity = -self.osc_velocity;
            }
        }
    }

    /// Idempotent; drift stays on for the rest of the pipe's life.
    pub fn enable_drift(&mut self) {
        self.can_drift = true;
    }

    /// The solid upper pipe, drawn upright.
    pub fn top_rect(&self) -> Rect {
        Rect::new(
            self.x,
            self.gap_y - PIPE_BODY_HEIGHT,
            PIPE_WIDTH as u32,
            PIPE_BODY_HEIGHT as u32,
        )
    }

    /// The solid lower pipe, drawn vertically flipped.
    pub fn bottom_rect(&self) -> Rect {
        Rect::new(
            self.x,
            self.gap_y + PIPE_GAP,
            PIPE_WIDTH as u32,
            PIPE_BODY_HEIGHT as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn advance_scrolls_left() {
        let mut obstacle = Obstacle::new(350, 100, false, &mut rng());
        obstacle.advance(3);
        assert_eq!(obstacle.x, 347);
        obstacle.advance(5);
        assert_eq!(obstacle.x, 342);
    }

    #[test]
    fn osc_velocity_is_never_zero() {
        let mut rng = rng();
        for _ in 0..100 {
            let obstacle = Obstacle::new(350, 100, true, &mut rng);
            assert_ne!(obstacle.osc_velocity, 0);
            assert!(obstacle.osc_velocity == 1 || obstacle.osc_velocity == -1);
        }
    }

    #[test]
    fn drift_is_inert_until_enabled() {
        let mut obstacle = Obstacle::new(350, 100, false, &mut rng());
        for _ in 0..50 {
            obstacle.drift();
        }
        assert_eq!(obstacle.gap_y, 100);

        obstacle.enable_drift();
        obstacle.drift();
        assert_ne!(obstacle.gap_y, 100);
    }

    #[test]
    fn drift_reflects_at_both_walls() {
        let mut obstacle = Obstacle::new(350, GAP_MIN + 1, true, &mut rng());
        obstacle.osc_velocity = -1;

        // Walk down through the lower wall and back up through the upper one.
        // Reflection happens on the step that crosses a wall, so the gap
        // never gets further than one step outside [GAP_MIN, DRIFT_MAX].
        for _ in 0..2 * (DRIFT_MAX - GAP_MIN) + 10 {
            obstacle.drift();
            assert!(obstacle.gap_y >= GAP_MIN - 1);
            assert!(obstacle.gap_y <= DRIFT_MAX + 1);
            assert_ne!(obstacle.osc_velocity, 0);
        }
    }

    #[test]
    fn drift_turns_around_below_the_lower_wall() {
        let mut obstacle = Obstacle::new(350, GAP_MIN, true, &mut rng());
        obstacle.osc_velocity = -1;

        obstacle.drift();
        assert_eq!(obstacle.gap_y, GAP_MIN - 1);
        assert_eq!(obstacle.osc_velocity, 1);

        obstacle.drift();
        assert_eq!(obstacle.gap_y, GAP_MIN);
    }

    #[test]
    fn solid_rects_bracket_the_gap() {
        let obstacle = Obstacle::new(200, 120, false, &mut rng());

        let top = obstacle.top_rect();
        assert_eq!(top.x(), 200);
        assert_eq!(top.y() + top.height() as i32, 120);

        let bottom = obstacle.bottom_rect();
        assert_eq!(bottom.x(), 200);
        assert_eq!(bottom.y(), 120 + PIPE_GAP);
    }
}
