//! CPU 画布渲染器
//!
//! 把圆形光栅化到 `RgbaImage`，按源覆盖（source-over）混合。用于截图和测试。

use super::GlowRenderer;
use crate::starfield::Color;
use glam::Vec2;
use image::{Rgba, RgbaImage};
use std::path::Path;

pub struct CanvasRenderer {
    image: RgbaImage,
    background: Color,
}

impl CanvasRenderer {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let mut canvas = Self {
            image: RgbaImage::new(width, height),
            background,
        };
        canvas.clear();
        canvas
    }

    /// 用背景色填充整个画布
    pub fn clear(&mut self) {
        let bg = Rgba([self.background.r, self.background.g, self.background.b, 255]);
        for pixel in self.image.pixels_mut() {
            *pixel = bg;
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.image.save_with_format(path, image::ImageFormat::Png)
    }

    fn blend(&mut self, x: u32, y: u32, color: Color, alpha: f32) {
        let dst = self.image.get_pixel_mut(x, y);
        let src = [color.r, color.g, color.b];
        for (channel, s) in dst.0.iter_mut().zip(src) {
            let blended = s as f32 * alpha + *channel as f32 * (1.0 - alpha);
            *channel = blended.round().clamp(0.0, 255.0) as u8;
        }
    }
}

impl GlowRenderer for CanvasRenderer {
    fn draw(&mut self, position: Vec2, radius: f32, color: Color, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha == 0.0 || !radius.is_finite() || radius <= 0.0 {
            return;
        }

        // 小于半个像素的圆至少覆盖圆心所在像素
        let r = radius.max(0.5);
        let (w, h) = self.image.dimensions();
        let min_x = (position.x - r).floor().max(0.0) as u32;
        let min_y = (position.y - r).floor().max(0.0) as u32;
        let max_x = ((position.x + r).ceil().max(0.0) as u32).min(w);
        let max_y = ((position.y + r).ceil().max(0.0) as u32).min(h);

        let r2 = r * r;
        for y in min_y..max_y {
            for x in min_x..max_x {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if center.distance_squared(position) <= r2 {
                    self.blend(x, y, color, alpha);
                }
            }
        }
    }
}
