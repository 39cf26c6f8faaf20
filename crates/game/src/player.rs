use std::sync::Arc;

use engine::{Canvas, Sprite, Vec2};

use crate::world::{GROUND_HEIGHT, PIXELS_PER_METER};

const HORIZONTAL_DRAG: f32 = 8.0;
const VERTICAL_DRAG: f32 = 0.2;
const AIR_CONTROL_FACTOR: f32 = 0.5;
const RUN_SPEED_THRESHOLD_PIXELS_PER_SECOND: f32 = 10.0;

/// The controllable character. Position and velocity live in world
/// coordinates (pixels, y up, ground at `GROUND_HEIGHT`).
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    facing: f32,
    idle_sprite: Arc<Sprite>,
    run_sprite: Arc<Sprite>,
}

impl Player {
    pub fn new(position: Vec2, idle_sprite: Arc<Sprite>, run_sprite: Arc<Sprite>) -> Self {
        Self {
            position,
            velocity: Vec2::default(),
            facing: 1.0,
            idle_sprite,
            run_sprite,
        }
    }

    /// `1.0` when facing right, `-1.0` when facing left. Persists through
    /// standstill; only a nonzero horizontal velocity changes it.
    pub fn facing(&self) -> f32 {
        self.facing
    }

    /// Advances the character by one forward Euler step.
    ///
    /// Grounded means `position.y` equals `GROUND_HEIGHT` exactly; any other
    /// value counts as airborne, which suppresses the jump impulse and
    /// halves the horizontal force. Drag is proportional to velocity on
    /// both axes. Crossing below the ground snaps the character onto it and
    /// zeroes vertical velocity.
    pub fn step(&mut self, dt_seconds: f32, horizontal_force: f32, jump_impulse: f32) {
        let mut horizontal_force = horizontal_force;
        let mut jump_impulse = jump_impulse;
        if self.position.y != GROUND_HEIGHT {
            jump_impulse = 0.0;
            horizontal_force *= AIR_CONTROL_FACTOR;
        }

        let gravity = -9.81 * PIXELS_PER_METER;
        self.velocity.x += (horizontal_force - HORIZONTAL_DRAG * self.velocity.x) * dt_seconds;
        // the jump impulse is an instantaneous velocity change, not a force,
        // so it is applied outside the dt-scaled gravity and drag terms
        self.velocity.y += jump_impulse + (gravity - VERTICAL_DRAG * self.velocity.y) * dt_seconds;
        self.position += self.velocity * dt_seconds;

        if self.velocity.x != 0.0 {
            self.facing = self.velocity.x.signum();
        }
        if self.position.y < GROUND_HEIGHT {
            self.position.y = GROUND_HEIGHT;
            self.velocity.y = 0.0;
        }
    }

    /// Draws the run sprite above the speed threshold, the idle sprite
    /// otherwise, mirrored when facing left.
    pub fn render(&self, canvas: &mut Canvas<'_>) {
        let sprite = if self.velocity.x.abs() > RUN_SPEED_THRESHOLD_PIXELS_PER_SECOND {
            &self.run_sprite
        } else {
            &self.idle_sprite
        };
        sprite.draw(canvas, self.position, self.facing < 0.0);
    }
}
