use super::input::ControlSignals;
use super::rendering::Canvas;

/// A simulation driven by the frame loop: one `update` per frame with the
/// wall-clock delta and the live control signals, then one `render` against
/// the exclusively locked framebuffer canvas.
pub trait Scene {
    fn update(&mut self, dt_seconds: f32, signals: &mut ControlSignals);
    fn render(&self, canvas: &mut Canvas<'_>);
}
