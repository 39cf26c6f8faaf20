mod canvas;
mod renderer;

pub use canvas::{Canvas, Rect, Rgba};
pub use renderer::Renderer;
