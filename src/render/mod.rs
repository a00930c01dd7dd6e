//! 星星绘制
//!
//! 核心只提供几何与颜色，具体绘制由实现 [`GlowRenderer`] 的后端完成：
//! - [`canvas::CanvasRenderer`]：CPU 光栅化到 `image::RgbaImage`
//! - [`wgpu::WgpuStarRenderer`]：GPU 实例化圆形绘制

pub mod canvas;
pub mod wgpu;

use crate::config::RenderConfig;
use crate::ecs::Viewport;
use crate::starfield::{Color, StarField};
use glam::Vec2;

pub use canvas::CanvasRenderer;
pub use self::wgpu::WgpuStarRenderer;

/// 可以绘制带透明度的实心圆的渲染后端
pub trait GlowRenderer {
    /// 以 `position` 为圆心、`radius` 为半径绘制实心圆（像素坐标）
    fn draw(&mut self, position: Vec2, radius: f32, color: Color, alpha: f32);
}

/// 按数组顺序绘制星空，返回实际绘制的星星数
///
/// 投影落在视口外的星星跳过；每颗星星先画光晕再画本体。
pub fn draw_field<R: GlowRenderer + ?Sized>(
    field: &StarField,
    renderer: &mut R,
    viewport: &Viewport,
    style: &RenderConfig,
) -> usize {
    let mut drawn = 0;
    for star in field.snapshot_render_data() {
        if !viewport.contains(star.position) {
            continue;
        }
        if style.glow_scale > 0.0 && style.glow_alpha > 0.0 {
            renderer.draw(
                star.position,
                star.size * style.glow_scale,
                star.color,
                style.glow_alpha,
            );
        }
        renderer.draw(star.position, star.size, star.color, style.core_alpha);
        drawn += 1;
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// 只记录调用的渲染器
    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<(Vec2, f32, Color, f32)>,
    }

    impl GlowRenderer for RecordingRenderer {
        fn draw(&mut self, position: Vec2, radius: f32, color: Color, alpha: f32) {
            self.calls.push((position, radius, color, alpha));
        }
    }

    fn viewport() -> Viewport {
        Viewport {
            width: 800,
            height: 600,
        }
    }

    #[test]
    fn test_glow_then_core_in_field_order() {
        let field = StarField::initialize(
            50,
            5,
            FieldConfig::default(),
            viewport().center(),
            StdRng::seed_from_u64(3),
        );
        let style = RenderConfig::default();
        let mut renderer = RecordingRenderer::default();

        let drawn = draw_field(&field, &mut renderer, &viewport(), &style);
        assert_eq!(renderer.calls.len(), drawn * 2);

        let visible: Vec<_> = field
            .snapshot_render_data()
            .filter(|s| viewport().contains(s.position))
            .collect();
        assert_eq!(visible.len(), drawn);

        for (pair, star) in renderer.calls.chunks(2).zip(&visible) {
            let (glow, core) = (pair[0], pair[1]);
            assert_eq!(glow.0, star.position);
            assert!((glow.1 - star.size * 2.0).abs() < 1e-6);
            assert!((glow.3 - 50.0 / 255.0).abs() < 1e-6);
            assert_eq!(core.1, star.size);
            assert_eq!(core.3, 1.0);
            assert_eq!(core.2, star.color);
        }
    }

    #[test]
    fn test_offscreen_stars_skipped() {
        // 出生半径远大于视口：部分星星一定落在屏幕外
        let config = FieldConfig {
            spawn_radius: Some(5000.0),
            ..Default::default()
        };
        let field = StarField::initialize(
            200,
            0,
            config,
            viewport().center(),
            StdRng::seed_from_u64(9),
        );
        let mut renderer = RecordingRenderer::default();

        let drawn = draw_field(&field, &mut renderer, &viewport(), &RenderConfig::default());
        assert!(drawn < field.population_count());
        assert!(renderer
            .calls
            .iter()
            .all(|(position, ..)| viewport().contains(*position)));
    }

    #[test]
    fn test_glow_disabled() {
        let field = StarField::initialize(
            10,
            0,
            FieldConfig {
                spawn_radius: Some(0.0),
                ..Default::default()
            },
            viewport().center(),
            StdRng::seed_from_u64(1),
        );
        let style = RenderConfig {
            glow_alpha: 0.0,
            ..Default::default()
        };
        let mut renderer = RecordingRenderer::default();

        let drawn = draw_field(&field, &mut renderer, &viewport(), &style);
        assert_eq!(drawn, 10);
        assert_eq!(renderer.calls.len(), 10);
    }
}
