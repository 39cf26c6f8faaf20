use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use super::canvas::Canvas;
use crate::app::scene::Scene;

/// Owns the presentation surface and the off-screen framebuffer. The
/// framebuffer keeps the configured canvas size; window resizes only rebuild
/// the surface it is scaled onto.
pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    canvas_width: u32,
    canvas_height: u32,
}

impl Renderer {
    pub fn new(window: Arc<Window>, canvas_width: u32, canvas_height: u32) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(
            Arc::clone(&window),
            size.width.max(1),
            size.height.max(1),
            canvas_width,
            canvas_height,
        )?;
        Ok(Self {
            window,
            pixels,
            canvas_width,
            canvas_height,
        })
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(
            Arc::clone(&self.window),
            width,
            height,
            self.canvas_width,
            self.canvas_height,
        )?;
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        surface_width: u32,
        surface_height: u32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(surface_width, surface_height, window);
        Pixels::new(canvas_width, canvas_height, surface)
    }

    /// Runs one render pass: lock the framebuffer for exclusive write, let
    /// the scene draw through a `Canvas`, then blit and present. A failed
    /// present is fatal to the frame loop.
    pub fn render_scene(&mut self, scene: &dyn Scene) -> Result<(), Error> {
        let frame = self.pixels.frame_mut();
        let mut canvas = Canvas::new(frame, self.canvas_width, self.canvas_height);
        scene.render(&mut canvas);
        self.pixels.render()
    }
}
