use std::path::Path;
use std::sync::Arc;

use image::ImageReader;
use thiserror::Error;
use tracing::info;

use super::math::Vec2;
use super::rendering::Canvas;

#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("failed to open image at {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image at {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("rgba buffer length {actual} does not match {width}x{height} pixels")]
    BufferSize {
        width: u32,
        height: u32,
        actual: usize,
    },
}

/// A decoded RGBA image. Created once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl ImageData {
    pub fn load(path: &Path) -> Result<Self, SpriteError> {
        let reader = ImageReader::open(path).map_err(|source| SpriteError::Open {
            path: path.display().to_string(),
            source,
        })?;
        let decoded = reader.decode().map_err(|source| SpriteError::Decode {
            path: path.display().to_string(),
            source,
        })?;
        let image = decoded.to_rgba8();
        let (width, height) = (image.width(), image.height());
        info!(path = %path.display(), width, height, "sprite_loaded");
        Ok(Self {
            width,
            height,
            rgba: image.into_raw(),
        })
    }

    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, SpriteError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(SpriteError::BufferSize {
                width,
                height,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

/// An image plus the draw anchor aligning its horizontal center and bottom
/// edge with an entity's logical position. Shared between entities via `Arc`.
#[derive(Debug, Clone)]
pub struct Sprite {
    image: Arc<ImageData>,
    anchor_offset: Vec2,
}

impl Sprite {
    /// The anchor is fixed at construction: `(-(width / 2), height)` with a
    /// truncating half-width division.
    pub fn new(image: Arc<ImageData>) -> Self {
        let anchor_offset = Vec2 {
            x: -((image.width() / 2) as f32),
            y: image.height() as f32,
        };
        Self {
            image,
            anchor_offset,
        }
    }

    pub fn anchor_offset(&self) -> Vec2 {
        self.anchor_offset
    }

    pub fn image(&self) -> &Arc<ImageData> {
        &self.image
    }

    /// Draws the image center-bottom anchored at `world_position`. World y
    /// points up while the canvas origin is top-left, so the draw row is
    /// `canvas_height - (world_position.y + anchor_offset.y)`. When
    /// `mirrored`, the image flips around its own vertical centerline
    /// within the same rectangle.
    pub fn draw(&self, canvas: &mut Canvas<'_>, world_position: Vec2, mirrored: bool) {
        let anchored = world_position + self.anchor_offset;
        let left = anchored.x.round() as i32;
        let top = (canvas.height() as f32 - anchored.y).round() as i32;
        canvas.draw_image(left, top, &self.image, mirrored);
    }
}
