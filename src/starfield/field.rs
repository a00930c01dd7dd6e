//! 星空：星星池的初始化、逐帧推进、重置与点击生成

use super::color::Color;
use super::star::Star;
use crate::config::{FieldConfig, StarKind};
use crate::diagnostics::FieldStats;
use bevy_ecs::prelude::Resource;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// 渲染器每帧消费的单颗星星数据
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStar {
    pub position: Vec2,
    pub size: f32,
    pub color: Color,
}

/// 星星集合
///
/// 数组顺序即绘制顺序（画家算法，不做深度排序）。数量只增不减：
/// 回收是原地重置，点击生成是追加。
#[derive(Resource, Debug, Clone)]
pub struct StarField {
    stars: Vec<Star>,
    config: FieldConfig,
    center: Vec2,
    rng: StdRng,
}

impl StarField {
    /// 创建 `base_count` 颗普通星星，再追加 `constellation_count` 颗星座星星
    pub fn initialize(
        base_count: usize,
        constellation_count: usize,
        config: FieldConfig,
        center: Vec2,
        mut rng: StdRng,
    ) -> Self {
        let mut stars = Vec::with_capacity(base_count + constellation_count);
        stars.extend((0..base_count).map(|_| Star::new(&mut rng, StarKind::Base, center, &config)));
        stars.extend(
            (0..constellation_count)
                .map(|_| Star::new(&mut rng, StarKind::Constellation, center, &config)),
        );

        tracing::debug!(
            target: "starfield",
            base_count,
            constellation_count,
            "Star field initialized"
        );

        Self {
            stars,
            config,
            center,
            rng,
        }
    }

    /// 按配置中的数量和种子创建；未设置种子时使用系统熵
    pub fn from_config(config: FieldConfig, center: Vec2) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::initialize(
            config.base_count,
            config.constellation_count,
            config,
            center,
            rng,
        )
    }

    /// 推进所有星星一帧
    pub fn tick(&mut self) {
        for star in &mut self.stars {
            star.advance(&mut self.rng, self.center, &self.config);
        }
    }

    /// 原地重置所有星星，数量与顺序不变
    pub fn reset_all(&mut self) {
        for star in &mut self.stars {
            star.reset(&mut self.rng, self.center, &self.config);
        }
        tracing::debug!(target: "starfield", population = self.stars.len(), "All stars reset");
    }

    /// 在屏幕点追加一颗星星
    ///
    /// 不做限流；调用方负责去抖。
    pub fn spawn_at(&mut self, screen_point: Vec2, view_center: Vec2) -> &Star {
        let star = Star::spawn_from(&mut self.rng, screen_point, view_center, &self.config);
        self.stars.push(star);
        tracing::debug!(
            target: "starfield",
            x = screen_point.x,
            y = screen_point.y,
            population = self.stars.len(),
            "Star spawned"
        );
        &self.stars[self.stars.len() - 1]
    }

    /// 按数组顺序投影全部星星
    pub fn snapshot_render_data(&self) -> impl Iterator<Item = RenderStar> + '_ {
        let view_center = self.center;
        self.stars.iter().map(move |star| {
            let projection = star.project(view_center);
            RenderStar {
                position: projection.position,
                size: projection.size,
                color: star.color(),
            }
        })
    }

    pub fn population_count(&self) -> usize {
        self.stars.len()
    }

    /// 当前最小/最大深度；空集合返回 `None`
    pub fn depth_range(&self) -> Option<(f32, f32)> {
        min_max(self.stars.iter().map(Star::depth))
    }

    /// 当前最小/最大速度；空集合返回 `None`
    pub fn speed_range(&self) -> Option<(f32, f32)> {
        min_max(self.stars.iter().map(Star::speed))
    }

    pub fn stats(&self) -> FieldStats {
        let (min_depth, max_depth) = self.depth_range().unwrap_or_default();
        let (min_speed, max_speed) = self.speed_range().unwrap_or_default();
        FieldStats {
            population: self.population_count(),
            min_depth,
            max_depth,
            min_speed,
            max_speed,
        }
    }

    /// 视点中心（同时也是重置出生点的中心）
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// 窗口尺寸变化后更新中心；已有星星保持出生点不变
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

fn min_max(values: impl Iterator<Item = f32>) -> Option<(f32, f32)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Vec2 = Vec2::new(400.0, 300.0);

    fn field(base: usize, constellation: usize, seed: u64) -> StarField {
        StarField::initialize(
            base,
            constellation,
            FieldConfig::default(),
            CENTER,
            StdRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn test_initialize_population_and_order() {
        let field = field(300, 15, 1);
        assert_eq!(field.population_count(), 315);

        let config = field.config();
        let (base, specials) = field.stars().split_at(300);
        assert!(base.iter().all(|s| config.base.speed.contains(s.speed())));
        assert!(specials
            .iter()
            .all(|s| config.constellation.speed.contains(s.speed())));
        assert!(specials.iter().all(|s| s.color() == Color::HIGHLIGHT));
    }

    #[test]
    fn test_spawn_at_grows_by_one() {
        let mut field = field(300, 15, 2);
        let star = field.spawn_at(Vec2::new(400.0, 300.0), CENTER).clone();

        assert_eq!(field.population_count(), 316);
        assert!(star.depth() >= 0.1 && star.depth() <= 0.5);
        assert_eq!(field.stars().last(), Some(&star));
    }

    #[test]
    fn test_tick_keeps_population() {
        let mut field = field(50, 5, 3);
        for _ in 0..1000 {
            field.tick();
            assert_eq!(field.population_count(), 55);
        }
        let limit = field.config().depth_limit;
        assert!(field.stars().iter().all(|s| s.depth() > 0.0 && s.depth() <= limit));
    }

    #[test]
    fn test_tick_increases_depth() {
        let mut field = field(20, 0, 4);
        let before: Vec<f32> = field.stars().iter().map(Star::depth).collect();
        field.tick();
        // 初始深度最多 1.0，单帧不可能越过上限
        for (star, depth) in field.stars().iter().zip(before) {
            assert!((star.depth() - (depth + star.speed())).abs() < 1e-5);
        }
    }

    #[test]
    fn test_reset_all_preserves_population() {
        let mut field = field(10, 3, 5);
        field.spawn_at(Vec2::new(10.0, 10.0), CENTER);
        let before = field.stars().to_vec();

        field.reset_all();

        assert_eq!(field.population_count(), 14);
        assert_ne!(before, field.stars().to_vec());
        let range = field.config().depth_range;
        assert!(field.stars().iter().all(|s| range.contains(s.depth())));
    }

    #[test]
    fn test_reset_all_turns_constellation_into_base_stars() {
        let mut field = field(0, 15, 12);
        field.reset_all();

        let base = &field.config().base;
        for star in field.stars() {
            assert!(base.speed.contains(star.speed()));
            assert!(base.size.contains(star.base_size()));
            assert!(base.palette.contains(&star.color()));
            assert_ne!(star.color(), Color::HIGHLIGHT);
        }
    }

    #[test]
    fn test_snapshot_matches_projection() {
        let field = field(25, 2, 6);
        let snapshot: Vec<RenderStar> = field.snapshot_render_data().collect();

        assert_eq!(snapshot.len(), field.population_count());
        for (render, star) in snapshot.iter().zip(field.stars()) {
            let projection = star.project(CENTER);
            assert_eq!(render.position, projection.position);
            assert_eq!(render.size, projection.size);
            assert_eq!(render.color, star.color());
        }

        // 无缓存状态：重复调用结果相同
        let again: Vec<RenderStar> = field.snapshot_render_data().collect();
        assert_eq!(snapshot, again);
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let mut a = field(30, 3, 42);
        let mut b = field(30, 3, 42);
        for _ in 0..200 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn test_stats() {
        let field = field(40, 4, 7);
        let stats = field.stats();
        let min_depth = field.stars().iter().map(Star::depth).fold(f32::MAX, f32::min);
        let max_speed = field.stars().iter().map(Star::speed).fold(f32::MIN, f32::max);

        assert_eq!(stats.population, 44);
        assert_eq!(stats.min_depth, min_depth);
        assert_eq!(stats.max_speed, max_speed);
        assert!(stats.min_speed <= stats.max_speed);
        // 星座星星更慢
        assert!(stats.min_speed <= 0.03);
    }

    #[test]
    fn test_empty_field() {
        let mut field = field(0, 0, 8);
        field.tick();
        assert_eq!(field.depth_range(), None);
        assert_eq!(field.speed_range(), None);
        assert_eq!(field.stats(), FieldStats::default());
        assert_eq!(field.snapshot_render_data().count(), 0);
    }
}
