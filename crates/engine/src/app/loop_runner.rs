use std::sync::Arc;
use std::time::Instant;

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

use super::input::ControlSignals;
use super::rendering::Renderer;
use super::scene::Scene;

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "Sidewalk".to_string(),
            canvas_width: 800,
            canvas_height: 480,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

/// Runs the synchronous frame loop: drain pending input, compute the
/// wall-clock delta, step the scene, render into the framebuffer, present.
/// The delta is deliberately unclamped; a stall produces one large step.
pub fn run_app(config: LoopConfig, mut scene: Box<dyn Scene>) -> Result<(), AppError> {
    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                config.canvas_width as f64,
                config.canvas_height as f64,
            ))
            .with_resizable(false)
            .build(&event_loop)
            .map_err(AppError::CreateWindow)?,
    );
    let mut renderer = Renderer::new(
        Arc::clone(&window),
        config.canvas_width,
        config.canvas_height,
    )
    .map_err(AppError::CreateRenderer)?;

    event_loop.set_control_flow(ControlFlow::Poll);

    info!(
        canvas_width = config.canvas_width,
        canvas_height = config.canvas_height,
        "startup"
    );

    let mut input = InputCollector::default();
    let mut last_frame_instant = Instant::now();

    event_loop
        .run(move |event, window_target| match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    info!(reason = "window_close", "shutdown_requested");
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    if let Err(error) = renderer.resize_surface(new_size.width, new_size.height) {
                        warn!(error = %error, "renderer_resize_failed");
                        window_target.exit();
                    }
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input.handle_keyboard_input(&event);
                    if input.quit_requested {
                        info!(reason = "escape_key", "shutdown_requested");
                        window_target.exit();
                    }
                }
                WindowEvent::RedrawRequested => {
                    let now = Instant::now();
                    let dt_seconds = now
                        .saturating_duration_since(last_frame_instant)
                        .as_secs_f32();
                    last_frame_instant = now;

                    scene.update(dt_seconds, input.signals_mut());
                    if let Err(error) = renderer.render_scene(scene.as_ref()) {
                        warn!(error = %error, "renderer_draw_failed");
                        window_target.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            Event::LoopExiting => {
                info!("shutdown");
            }
            _ => {}
        })
        .map_err(AppError::EventLoopRun)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackedKey {
    KeyA,
    ArrowLeft,
    KeyD,
    ArrowRight,
    KeyW,
    ArrowUp,
    Space,
}

const TRACKED_KEY_COUNT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyRole {
    Left,
    Right,
    Jump,
}

impl TrackedKey {
    const fn index(self) -> usize {
        match self {
            TrackedKey::KeyA => 0,
            TrackedKey::ArrowLeft => 1,
            TrackedKey::KeyD => 2,
            TrackedKey::ArrowRight => 3,
            TrackedKey::KeyW => 4,
            TrackedKey::ArrowUp => 5,
            TrackedKey::Space => 6,
        }
    }

    const fn role(self) -> KeyRole {
        match self {
            TrackedKey::KeyA | TrackedKey::ArrowLeft => KeyRole::Left,
            TrackedKey::KeyD | TrackedKey::ArrowRight => KeyRole::Right,
            TrackedKey::KeyW | TrackedKey::ArrowUp | TrackedKey::Space => KeyRole::Jump,
        }
    }
}

fn tracked_key(key: PhysicalKey) -> Option<TrackedKey> {
    match key {
        PhysicalKey::Code(KeyCode::KeyA) => Some(TrackedKey::KeyA),
        PhysicalKey::Code(KeyCode::ArrowLeft) => Some(TrackedKey::ArrowLeft),
        PhysicalKey::Code(KeyCode::KeyD) => Some(TrackedKey::KeyD),
        PhysicalKey::Code(KeyCode::ArrowRight) => Some(TrackedKey::ArrowRight),
        PhysicalKey::Code(KeyCode::KeyW) => Some(TrackedKey::KeyW),
        PhysicalKey::Code(KeyCode::ArrowUp) => Some(TrackedKey::ArrowUp),
        PhysicalKey::Code(KeyCode::Space) => Some(TrackedKey::Space),
        _ => None,
    }
}

/// Translates raw key transitions into the frame's control signals. Per-key
/// down state filters OS key repeat, so each physical key contributes its
/// ±1 to the accumulator exactly once per press.
#[derive(Debug, Default)]
struct InputCollector {
    quit_requested: bool,
    key_is_down: [bool; TRACKED_KEY_COUNT],
    signals: ControlSignals,
}

impl InputCollector {
    fn handle_keyboard_input(&mut self, key_event: &winit::event::KeyEvent) {
        self.apply_key_state(
            key_event.physical_key,
            key_event.state == ElementState::Pressed,
        );
    }

    fn apply_key_state(&mut self, key: PhysicalKey, is_pressed: bool) {
        if matches!(key, PhysicalKey::Code(KeyCode::Escape)) {
            if is_pressed {
                self.quit_requested = true;
            }
            return;
        }
        let Some(tracked) = tracked_key(key) else {
            return;
        };
        if self.key_is_down[tracked.index()] == is_pressed {
            return;
        }
        self.key_is_down[tracked.index()] = is_pressed;
        match (tracked.role(), is_pressed) {
            (KeyRole::Left, true) => self.signals.horizontal -= 1,
            (KeyRole::Left, false) => self.signals.horizontal += 1,
            (KeyRole::Right, true) => self.signals.horizontal += 1,
            (KeyRole::Right, false) => self.signals.horizontal -= 1,
            (KeyRole::Jump, true) => self.signals.jump = 1,
            (KeyRole::Jump, false) => {}
        }
    }

    fn signals_mut(&mut self) -> &mut ControlSignals {
        &mut self.signals
    }
}
