//! 单颗星星：深度推进、透视投影与回收

use super::color::Color;
use crate::config::{FieldConfig, StarKind, StarProfile};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// 投影到屏幕后的位置与半径
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub position: Vec2,
    pub size: f32,
}

/// 一颗星星
///
/// `depth` 是到观察者距离的倒数：越大越近。每次 [`Star::advance`] 深度增加
/// `speed`，超过 `depth_limit` 后原地重置，星星永不消亡。
///
/// 种类只影响创建时的属性；重置总是按普通星星采样。
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    origin: Vec2,
    depth: f32,
    speed: f32,
    color: Color,
    base_size: f32,
}

impl Star {
    /// 在 `center` 附近随机生成一颗星星
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        kind: StarKind,
        center: Vec2,
        config: &FieldConfig,
    ) -> Self {
        let mut star = Self {
            origin: center,
            depth: 1.0,
            speed: 0.0,
            color: Color::WHITE,
            base_size: 0.0,
        };
        star.reset(rng, center, config);
        if kind != StarKind::Base {
            star.sample_profile(rng, config.profile(kind));
        }
        star
    }

    /// 点击生成：让星星当前的投影正好落在 `screen_point`
    ///
    /// 深度必须先采样，出生点依赖于它。
    pub fn spawn_from<R: Rng + ?Sized>(
        rng: &mut R,
        screen_point: Vec2,
        view_center: Vec2,
        config: &FieldConfig,
    ) -> Self {
        let depth = config.spawn_depth_range.sample(rng);
        let origin = view_center + (screen_point - view_center) * depth;
        let profile = &config.base;

        Self {
            origin,
            depth,
            speed: profile.speed.sample(rng),
            color: profile.sample_color(rng),
            base_size: profile.size.sample(rng),
        }
    }

    /// 重新采样全部属性（普通星星的范围与调色板）
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, center: Vec2, config: &FieldConfig) {
        let angle = rng.gen_range(0.0..TAU);
        let distance = rng.gen_range(0.0..=config.spawn_radius());
        self.origin = center + Vec2::from_angle(angle) * distance;
        self.depth = config.depth_range.sample(rng);
        self.sample_profile(rng, &config.base);

        debug_assert!(self.depth > 0.0, "star depth must stay positive");
    }

    fn sample_profile<R: Rng + ?Sized>(&mut self, rng: &mut R, profile: &StarProfile) {
        self.speed = profile.speed.sample(rng);
        self.color = profile.sample_color(rng);
        self.base_size = profile.size.sample(rng);
    }

    /// 推进一帧，越过深度上限时回收
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, center: Vec2, config: &FieldConfig) {
        self.depth += self.speed;
        if self.depth > config.depth_limit {
            self.reset(rng, center, config);
        }
    }

    /// 透视除法
    ///
    /// ```text
    /// position = origin / depth + view_center * (1 - 1 / depth)
    /// size     = base_size / depth
    /// ```
    pub fn project(&self, view_center: Vec2) -> Projection {
        debug_assert!(self.depth > 0.0, "projecting a star at zero depth");
        let inv = self.depth.recip();
        Projection {
            position: self.origin * inv + view_center * (1.0 - inv),
            size: self.base_size * inv,
        }
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn base_size(&self) -> f32 {
        self.base_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CENTER: Vec2 = Vec2::new(400.0, 300.0);

    fn star_at(origin: Vec2, depth: f32, speed: f32) -> Star {
        Star {
            origin,
            depth,
            speed,
            color: Color::WHITE,
            base_size: 2.0,
        }
    }

    #[test]
    fn test_reset_samples_within_ranges() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for kind in [StarKind::Base, StarKind::Constellation] {
            for _ in 0..200 {
                let star = Star::new(&mut rng, kind, CENTER, &config);
                let profile = config.profile(kind);
                assert!(star.depth() > 0.0 && star.depth() <= config.depth_range.max);
                assert!(profile.speed.contains(star.speed()));
                assert!(profile.size.contains(star.base_size()));
                assert!(profile.palette.contains(&star.color()));
                assert!(star.origin().distance(CENTER) <= config.spawn_radius() + 1e-3);
            }
        }
    }

    #[test]
    fn test_advance_adds_speed() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut star = star_at(Vec2::ZERO, 1.0, 0.25);

        star.advance(&mut rng, CENTER, &config);
        assert!((star.depth() - 1.25).abs() < 1e-6);
        assert_eq!(star.origin(), Vec2::ZERO);
    }

    #[test]
    fn test_advance_recycles_past_limit() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut star = star_at(Vec2::ZERO, 9.95, 0.1);

        star.advance(&mut rng, CENTER, &config);
        assert!(config.depth_range.contains(star.depth()));
        assert!(config.base.speed.contains(star.speed()));
        assert!(star.origin().distance(CENTER) <= config.spawn_radius() + 1e-3);
    }

    #[test]
    fn test_advance_at_exact_limit_keeps_star() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut star = star_at(Vec2::ZERO, 9.5, 0.5);

        star.advance(&mut rng, CENTER, &config);
        assert_eq!(star.depth(), 10.0);
        assert_eq!(star.origin(), Vec2::ZERO);
    }

    #[test]
    fn test_constellation_recycles_as_base_star() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(4);
        let mut star = Star::new(&mut rng, StarKind::Constellation, CENTER, &config);
        assert_eq!(star.color(), Color::HIGHLIGHT);
        assert!(config.constellation.speed.contains(star.speed()));

        // 最慢 0.01/帧，从深度 1.0 出发 1000 帧内必然越过上限
        let mut recycled = false;
        for _ in 0..1000 {
            let before = star.depth();
            star.advance(&mut rng, CENTER, &config);
            if star.depth() < before {
                recycled = true;
                break;
            }
        }
        assert!(recycled);
        assert!(config.base.speed.contains(star.speed()));
        assert!(config.base.size.contains(star.base_size()));
        assert!(config.base.palette.contains(&star.color()));
    }

    #[test]
    fn test_project_formula() {
        let star = star_at(Vec2::new(600.0, 100.0), 2.0, 0.1);
        let p = star.project(CENTER);

        // 600/2 + 400*(1-1/2) = 500, 100/2 + 300*(1-1/2) = 200
        assert!((p.position - Vec2::new(500.0, 200.0)).length() < 1e-4);
        assert!((p.size - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_project_at_depth_one_is_origin() {
        let star = star_at(Vec2::new(123.0, 45.0), 1.0, 0.1);
        let p = star.project(CENTER);
        assert!((p.position - Vec2::new(123.0, 45.0)).length() < 1e-4);
        assert_eq!(p.size, 2.0);
    }

    #[test]
    fn test_project_converges_to_center() {
        let origin = Vec2::new(700.0, 50.0);
        let near = star_at(origin, 10.0, 0.1).project(CENTER);
        let far = star_at(origin, 1000.0, 0.1).project(CENTER);

        assert!(far.position.distance(CENTER) < near.position.distance(CENTER));
        assert!(far.position.distance(CENTER) < 1.0);
    }

    #[test]
    fn test_spawn_from_projects_onto_click() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let click = Vec2::new(120.0, 480.0);

        for _ in 0..100 {
            let star = Star::spawn_from(&mut rng, click, CENTER, &config);
            assert!(config.spawn_depth_range.contains(star.depth()));
            assert!(config.base.speed.contains(star.speed()));
            assert!(star.project(CENTER).position.distance(click) < 1e-2);
        }
    }

    #[test]
    fn test_spawn_at_center_stays_at_center() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(6);
        let star = Star::spawn_from(&mut rng, CENTER, CENTER, &config);
        assert!(star.origin().distance(CENTER) < 1e-4);
        assert!(star.project(CENTER).position.distance(CENTER) < 1e-2);
    }
}
