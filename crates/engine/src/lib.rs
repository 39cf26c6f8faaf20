pub mod app;

pub use app::{
    run_app, AppError, Canvas, ControlSignals, ImageData, LoopConfig, Rect, Renderer, Rgba, Scene,
    Sprite, SpriteError, Vec2,
};
