use crate::app::sprite::ImageData;

pub type Rgba = [u8; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

/// Exclusive view over the locked RGBA framebuffer for one render pass.
/// All writes are clipped to the canvas bounds.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(frame.len(), width as usize * height as usize * 4);
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let Some((left, top, right, bottom)) = self.clip(rect) else {
            return;
        };
        for y in top..bottom {
            self.fill_row(left, right, y, color);
        }
    }

    /// Vertical linear gradient. The interpolation parameter spans the full
    /// canvas height (`t = y / height`) regardless of the fill rectangle,
    /// so a clipped band shows the matching slice of the full-height ramp.
    pub fn fill_vertical_gradient(&mut self, rect: Rect, top_color: Rgba, bottom_color: Rgba) {
        let Some((left, top, right, bottom)) = self.clip(rect) else {
            return;
        };
        let span = self.height as f32;
        for y in top..bottom {
            let t = y as f32 / span;
            let color = lerp_rgba(top_color, bottom_color, t);
            self.fill_row(left, right, y, color);
        }
    }

    /// Top-left blit with clipping. Fully transparent source pixels are
    /// skipped; `mirrored` reads source columns right to left.
    pub fn draw_image(&mut self, left: i32, top: i32, image: &ImageData, mirrored: bool) {
        let image_width = image.width();
        let image_height = image.height();
        if image_width == 0 || image_height == 0 {
            return;
        }
        let rgba = image.rgba();
        let right = left + image_width as i32;
        let bottom = top + image_height as i32;

        let draw_left = left.max(0);
        let draw_top = top.max(0);
        let draw_right = right.min(self.width as i32);
        let draw_bottom = bottom.min(self.height as i32);
        if draw_left >= draw_right || draw_top >= draw_bottom {
            return;
        }

        let frame_width = self.width as usize;
        let src_width = image_width as usize;
        for out_y in draw_top..draw_bottom {
            let src_y = (out_y - top) as usize;
            let src_row_offset = src_y * src_width * 4;
            let dst_row_offset = out_y as usize * frame_width * 4;
            for out_x in draw_left..draw_right {
                let dx = (out_x - left) as usize;
                let src_x = if mirrored { src_width - 1 - dx } else { dx };
                let src_offset = src_row_offset + src_x * 4;
                let alpha = rgba[src_offset + 3];
                if alpha == 0 {
                    continue;
                }
                let dst_offset = dst_row_offset + out_x as usize * 4;
                self.frame[dst_offset..dst_offset + 4]
                    .copy_from_slice(&rgba[src_offset..src_offset + 4]);
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let mut color = [0u8; 4];
        color.copy_from_slice(&self.frame[offset..offset + 4]);
        Some(color)
    }

    fn fill_row(&mut self, left: u32, right: u32, y: u32, color: Rgba) {
        let row_offset = y as usize * self.width as usize * 4;
        for x in left..right {
            let offset = row_offset + x as usize * 4;
            self.frame[offset..offset + 4].copy_from_slice(&color);
        }
    }

    fn clip(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let left = rect.left.max(0) as u32;
        let top = rect.top.max(0) as u32;
        let right = rect
            .left
            .saturating_add(rect.width.min(i32::MAX as u32) as i32)
            .clamp(0, self.width as i32) as u32;
        let bottom = rect
            .top
            .saturating_add(rect.height.min(i32::MAX as u32) as i32)
            .clamp(0, self.height as i32) as u32;
        if left >= right || top >= bottom {
            return None;
        }
        Some((left, top, right, bottom))
    }
}

fn lerp_rgba(from: Rgba, to: Rgba, t: f32) -> Rgba {
    let mut color = [0u8; 4];
    for channel in 0..4 {
        let a = from[channel] as f32;
        let b = to[channel] as f32;
        color[channel] = (a + (b - a) * t).round() as u8;
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_from_pixels(width: u32, height: u32, pixels: &[Rgba]) -> ImageData {
        let mut rgba = Vec::with_capacity(pixels.len() * 4);
        for pixel in pixels {
            rgba.extend_from_slice(pixel);
        }
        ImageData::from_rgba(width, height, rgba).expect("image")
    }

    #[test]
    fn fill_rect_writes_only_inside_rect() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        canvas.fill_rect(
            Rect {
                left: 1,
                top: 1,
                width: 2,
                height: 2,
            },
            [7, 8, 9, 255],
        );
        assert_eq!(canvas.pixel(1, 1), Some([7, 8, 9, 255]));
        assert_eq!(canvas.pixel(2, 2), Some([7, 8, 9, 255]));
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(3, 3), Some([0, 0, 0, 0]));
    }

    #[test]
    fn fill_rect_clips_out_of_bounds_regions() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        canvas.fill_rect(
            Rect {
                left: -2,
                top: -2,
                width: 100,
                height: 100,
            },
            [1, 1, 1, 255],
        );
        assert_eq!(canvas.pixel(0, 0), Some([1, 1, 1, 255]));
        assert_eq!(canvas.pixel(3, 3), Some([1, 1, 1, 255]));
    }

    #[test]
    fn fill_rect_fully_outside_is_a_noop() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        canvas.fill_rect(
            Rect {
                left: 10,
                top: 10,
                width: 2,
                height: 2,
            },
            [1, 1, 1, 255],
        );
        assert!(frame.iter().all(|byte| *byte == 0));
    }

    #[test]
    fn gradient_interpolates_from_top_to_bottom() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        canvas.fill_vertical_gradient(
            Rect {
                left: 0,
                top: 0,
                width: 4,
                height: 4,
            },
            [0, 0, 0, 255],
            [255, 255, 255, 255],
        );
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 255]));
        // t = 3/4 -> 191.25 rounds to 191
        assert_eq!(canvas.pixel(0, 3), Some([191, 191, 191, 255]));
    }

    #[test]
    fn gradient_parameter_spans_full_canvas_height_when_clipped() {
        let mut frame = vec![0u8; 4 * 8 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 8);
        canvas.fill_vertical_gradient(
            Rect {
                left: 0,
                top: 4,
                width: 4,
                height: 4,
            },
            [0, 0, 0, 255],
            [255, 255, 255, 255],
        );
        assert_eq!(canvas.pixel(0, 3), Some([0, 0, 0, 0]));
        // first filled row sits halfway down the canvas: t = 4/8 = 0.5
        assert_eq!(canvas.pixel(0, 4), Some([128, 128, 128, 255]));
    }

    #[test]
    fn draw_image_mirrored_reverses_columns() {
        let left_pixel = [10, 0, 0, 255];
        let right_pixel = [0, 20, 0, 255];
        let image = image_from_pixels(2, 1, &[left_pixel, right_pixel]);
        let mut frame = vec![0u8; 4 * 1 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 1);

        canvas.draw_image(0, 0, &image, false);
        assert_eq!(canvas.pixel(0, 0), Some(left_pixel));
        assert_eq!(canvas.pixel(1, 0), Some(right_pixel));

        canvas.draw_image(2, 0, &image, true);
        assert_eq!(canvas.pixel(2, 0), Some(right_pixel));
        assert_eq!(canvas.pixel(3, 0), Some(left_pixel));
    }

    #[test]
    fn draw_image_skips_transparent_pixels() {
        let opaque = [5, 5, 5, 255];
        let transparent = [200, 200, 200, 0];
        let image = image_from_pixels(2, 1, &[transparent, opaque]);
        let mut frame = vec![9u8; 2 * 1 * 4];
        let mut canvas = Canvas::new(&mut frame, 2, 1);

        canvas.draw_image(0, 0, &image, false);
        assert_eq!(canvas.pixel(0, 0), Some([9, 9, 9, 9]));
        assert_eq!(canvas.pixel(1, 0), Some(opaque));
    }

    #[test]
    fn draw_image_clips_negative_origin() {
        let image = image_from_pixels(2, 2, &[[1, 0, 0, 255]; 4]);
        let mut frame = vec![0u8; 2 * 2 * 4];
        let mut canvas = Canvas::new(&mut frame, 2, 2);

        canvas.draw_image(-1, -1, &image, false);
        assert_eq!(canvas.pixel(0, 0), Some([1, 0, 0, 255]));
        assert_eq!(canvas.pixel(1, 1), Some([0, 0, 0, 0]));
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let mut frame = vec![0u8; 2 * 2 * 4];
        let canvas = Canvas::new(&mut frame, 2, 2);
        assert_eq!(canvas.pixel(2, 0), None);
        assert_eq!(canvas.pixel(0, 2), None);
    }
}
