mod input;
mod loop_runner;
mod math;
mod rendering;
mod scene;
mod sprite;

pub use input::ControlSignals;
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use math::Vec2;
pub use rendering::{Canvas, Rect, Renderer, Rgba};
pub use scene::Scene;
pub use sprite::{ImageData, Sprite, SpriteError};
