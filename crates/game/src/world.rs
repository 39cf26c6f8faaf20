use std::sync::Arc;

use engine::{Canvas, ControlSignals, Rect, Rgba, Scene, Sprite, Vec2};

use crate::player::Player;

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 480;

/// World-to-screen scale for physical quantities such as gravity.
pub const PIXELS_PER_METER: f32 = 64.0;

/// Height of the walkable ground band, one fifth of the canvas.
pub const GROUND_HEIGHT: f32 = (CANVAS_HEIGHT / 5) as f32;

const PLAYER_SPAWN_X: f32 = 50.0;
const HORIZONTAL_FORCE_SCALE: f32 = 1500.0;
const JUMP_IMPULSE_SCALE: f32 = 350.0;

const SKY_TOP: Rgba = [114, 177, 211, 255];
const SKY_BOTTOM: Rgba = [221, 236, 244, 255];
const GROUND_TOP: Rgba = [170, 140, 72, 255];
const GROUND_BOTTOM: Rgba = [102, 91, 68, 255];

/// The single scene: gradient sky, gradient ground band, one character.
pub struct WorldScene {
    player: Player,
}

impl WorldScene {
    pub fn new(idle_sprite: Arc<Sprite>, run_sprite: Arc<Sprite>) -> Self {
        let spawn = Vec2 {
            x: PLAYER_SPAWN_X,
            y: GROUND_HEIGHT,
        };
        Self {
            player: Player::new(spawn, idle_sprite, run_sprite),
        }
    }
}

impl Scene for WorldScene {
    fn update(&mut self, dt_seconds: f32, signals: &mut ControlSignals) {
        let horizontal_force = signals.horizontal as f32 * HORIZONTAL_FORCE_SCALE;
        let jump_impulse = signals.jump as f32 * JUMP_IMPULSE_SCALE;
        self.player.step(dt_seconds, horizontal_force, jump_impulse);
        // the jump is a one-shot impulse, consumed by this frame
        signals.jump = 0;
    }

    fn render(&self, canvas: &mut Canvas<'_>) {
        let width = canvas.width();
        let height = canvas.height();
        canvas.fill_vertical_gradient(
            Rect {
                left: 0,
                top: 0,
                width,
                height,
            },
            SKY_TOP,
            SKY_BOTTOM,
        );
        let ground_rows = GROUND_HEIGHT as u32;
        canvas.fill_vertical_gradient(
            Rect {
                left: 0,
                top: height as i32 - ground_rows as i32,
                width,
                height: ground_rows,
            },
            GROUND_TOP,
            GROUND_BOTTOM,
        );
        self.player.render(canvas);
    }
}
