use crate::config::{ACTOR_SIZE, ACTOR_START_X, ACTOR_START_Y, FLOOR_Y, GRAVITY, JUMP_STRENGTH};
use sdl2::rect::Rect;

/// The player character. Horizontal position is fixed for the whole run;
/// only vertical physics apply.
pub struct Actor {
    pub x: i32,
    pub y: i32,
    pub velocity: i32,
}

impl Actor {
    pub fn new() -> Self {
        Actor {
            x: ACTOR_START_X,
            y: ACTOR_START_Y,
            velocity: 0,
        }
    }

    /// One tick of gravity. Clamps at the ceiling and at the floor; both
    /// clamps zero the velocity. Returns true when the floor clamp fired,
    /// which is a terminal collision for the run.
    pub fn apply_gravity(&mut self) -> bool {
        self.velocity += GRAVITY;
        self.y += self.velocity;

        if self.y < 0 {
            self.y = 0;
            self.velocity = 0;
        }
        if self.y + ACTOR_SIZE > FLOOR_Y {
            self.y = FLOOR_Y - ACTOR_SIZE;
            self.velocity = 0;
            return true;
        }

        false
    }

    /// Upward impulse, ignored once the actor is resting on the ground.
    pub fn jump(&mut self) {
        if self.y + ACTOR_SIZE < FLOOR_Y {
            self.velocity = JUMP_STRENGTH;
        }
    }

    /// The 32x32 collision box at the actor's current position.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, ACTOR_SIZE as u32, ACTOR_SIZE as u32)
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}
