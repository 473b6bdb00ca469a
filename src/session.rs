//! The game session: an explicit four-state machine advanced one fixed tick
//! at a time.
//!
//! Input reaches the session as [`GameIntent`]s, state leaves it through
//! read-only accessors consumed by the renderer, and sound effects leave it
//! as queued [`Cue`]s drained by the main loop. The session owns the actor,
//! the obstacle queue, both scores, and the RNG; nothing else mutates them.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::actor::Actor;
use crate::collision::aabb_intersect;
use crate::config::{
    DRIFT_ACTIVATION_SCORE, GAP_MIN, GAP_SAMPLE_MAX, GROUND_SPEED, PIPE_SPEED, PIPE_WIDTH,
    SCREEN_WIDTH, SPAWN_THRESHOLD,
};
use crate::obstacle::Obstacle;
use crate::score::ScoreStore;

/// UI/simulation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    NotStarted,
    Playing,
    Paused,
    GameOver,
}

/// Player-facing intents, produced by the input adapter. Intents that make
/// no sense in the current mode are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    Start,
    Jump,
    PauseToggle,
    MuteToggle,
    Restart,
    Quit,
}

/// Fire-and-forget sound cues queued by the simulation and drained by the
/// main loop once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Jump,
    Death,
}

pub struct GameSession {
    mode: Mode,
    actor: Actor,
    obstacles: VecDeque<Obstacle>,
    score: u32,
    best_score: u32,
    sound_enabled: bool,
    ground_scroll: i32,
    pipe_speed: i32,
    ground_speed: i32,
    death_cue_fired: bool,
    cues: Vec<Cue>,
    rng: Pcg32,
    store: Box<dyn ScoreStore>,
}

impl GameSession {
    /// The persisted best score is read once here; afterwards the store is
    /// only written to.
    pub fn new(store: Box<dyn ScoreStore>, seed: u64) -> Self {
        let best_score = store.read_best();

        GameSession {
            mode: Mode::NotStarted,
            actor: Actor::new(),
            obstacles: VecDeque::new(),
            score: 0,
            best_score,
            sound_enabled: true,
            ground_scroll: 0,
            pipe_speed: PIPE_SPEED,
            ground_speed: GROUND_SPEED,
            death_cue_fired: false,
            cues: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            store,
        }
    }

    /// Applies one intent. Every legal (mode, intent) pair is listed here;
    /// everything else falls through as a no-op.
    pub fn apply(&mut self, intent: GameIntent) {
        match (self.mode, intent) {
            (Mode::NotStarted, GameIntent::Start) => self.mode = Mode::Playing,
            (Mode::Playing, GameIntent::Jump) => {
                self.actor.jump();
                self.cues.push(Cue::Jump);
            }
            (Mode::Playing, GameIntent::PauseToggle) => self.mode = Mode::Paused,
            (Mode::Paused, GameIntent::PauseToggle) => self.mode = Mode::Playing,
            (Mode::Paused, GameIntent::MuteToggle) => {
                self.sound_enabled = !self.sound_enabled;
            }
            (Mode::GameOver, GameIntent::Restart) => self.restart(),
            _ => {}
        }
    }

    /// Advances the simulation by one fixed tick. Physics, spawning, scoring
    /// and collision only run while Playing; the ground also scrolls on the
    /// get-ready screen.
    pub fn advance(&mut self) {
        if self.mode == Mode::Playing && self.actor.apply_gravity() {
            self.enter_game_over();
        }

        if self.mode == Mode::Playing {
            self.spawn_obstacle_if_due();
            self.step_obstacles();
            self.despawn_offscreen();
            self.pipe_speed = PIPE_SPEED + (self.score / 5) as i32;
            self.ground_speed = GROUND_SPEED + (self.score / 5) as i32;
        }

        if self.mode != Mode::GameOver && self.mode != Mode::Paused {
            self.ground_scroll -= self.ground_speed;
            if self.ground_scroll <= -SCREEN_WIDTH {
                self.ground_scroll = 0;
            }
        }
    }

    fn spawn_obstacle_if_due(&mut self) {
        let due = match self.obstacles.back() {
            None => true,
            Some(last) => last.x < SPAWN_THRESHOLD,
        };

        if due {
            let gap_y = self.rng.random_range(GAP_MIN..GAP_SAMPLE_MAX);
            let drifting = self.score >= DRIFT_ACTIVATION_SCORE;
            let obstacle = Obstacle::new(SCREEN_WIDTH, gap_y, drifting, &mut self.rng);
            self.obstacles.push_back(obstacle);
        }
    }

    /// Scroll, drift, score and collide every live obstacle. The pass check
    /// runs before the collision check so a point earned on the final tick
    /// of a run still counts.
    fn step_obstacles(&mut self) {
        let actor_bounds = self.actor.bounds();
        let mut new_best = None;
        let mut collided = false;

        for obstacle in &mut self.obstacles {
            obstacle.advance(self.pipe_speed);
            obstacle.drift();
            if self.score >= DRIFT_ACTIVATION_SCORE {
                obstacle.enable_drift();
            }

            if !obstacle.passed && self.actor.x > obstacle.x + PIPE_WIDTH {
                obstacle.passed = true;
                self.score += 1;
                if self.score > self.best_score {
                    self.best_score = self.score;
                    new_best = Some(self.score);
                }
            }

            if aabb_intersect(&actor_bounds, &obstacle.top_rect())
                || aabb_intersect(&actor_bounds, &obstacle.bottom_rect())
            {
                collided = true;
            }
        }

        if let Some(best) = new_best {
            if let Err(e) = self.store.write_best(best) {
                eprintln!("Failed to persist best score: {}", e);
            }
        }
        if collided {
            self.enter_game_over();
        }
    }

    fn despawn_offscreen(&mut self) {
        if let Some(front) = self.obstacles.front() {
            if front.x < -PIPE_WIDTH {
                self.obstacles.pop_front();
            }
        }
    }

    /// Playing -> GameOver. Idempotent: the death cue fires at most once per
    /// run no matter how many collision ticks follow.
    fn enter_game_over(&mut self) {
        if self.mode == Mode::GameOver {
            return;
        }
        self.mode = Mode::GameOver;
        self.actor.velocity = 0;
        if !self.death_cue_fired {
            self.death_cue_fired = true;
            self.cues.push(Cue::Death);
        }
    }

    /// Fresh run straight from the game-over screen; the get-ready screen is
    /// skipped and the best score survives.
    fn restart(&mut self) {
        self.obstacles.clear();
        self.actor = Actor::new();
        self.score = 0;
        self.death_cue_fired = false;
        self.mode = Mode::Playing;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn ground_scroll(&self) -> i32 {
        self.ground_scroll
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn obstacles(&self) -> &VecDeque<Obstacle> {
        &self.obstacles
    }

    /// Drains the cues queued since the last call.
    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }
}
