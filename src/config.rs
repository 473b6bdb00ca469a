//! Fixed game configuration. Nothing in here is runtime-configurable.

pub const SCREEN_WIDTH: i32 = 350;
pub const SCREEN_HEIGHT: i32 = 485;
pub const GROUND_HEIGHT: i32 = 50;

/// y of the ground line the actor lands on.
pub const FLOOR_Y: i32 = SCREEN_HEIGHT - GROUND_HEIGHT;

pub const GRAVITY: i32 = 1;
pub const JUMP_STRENGTH: i32 = -9;

pub const PIPE_WIDTH: i32 = 70;
pub const PIPE_GAP: i32 = 160;
/// Height of each solid pipe half, both for drawing and collision.
pub const PIPE_BODY_HEIGHT: i32 = 320;
pub const PIPE_SPEED: i32 = 3;
pub const GROUND_SPEED: i32 = 3;

/// A new pipe spawns once the newest one has scrolled left of this x.
pub const SPAWN_THRESHOLD: i32 = SCREEN_WIDTH - 210;

/// Gap-top heights are sampled uniformly from [GAP_MIN, GAP_SAMPLE_MAX).
pub const GAP_MIN: i32 = 50;
pub const GAP_SAMPLE_MAX: i32 = GAP_MIN + SCREEN_HEIGHT / 2;
/// Drifting pipes reflect their gap top between GAP_MIN and DRIFT_MAX.
pub const DRIFT_MAX: i32 = SCREEN_HEIGHT / 2;
/// Score at which pipes start drifting vertically.
pub const DRIFT_ACTIVATION_SCORE: u32 = 20;

pub const ACTOR_START_X: i32 = 50;
pub const ACTOR_START_Y: i32 = SCREEN_HEIGHT / 2;
/// Collision box. The sprite itself is drawn slightly larger.
pub const ACTOR_SIZE: i32 = 32;
pub const ACTOR_DRAW_WIDTH: u32 = 50;
pub const ACTOR_DRAW_HEIGHT: u32 = 35;

pub const FRAME_DELAY_MS: u64 = 25;
