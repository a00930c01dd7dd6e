use super::{ConfigError, ConfigResult};
use crate::impl_default;
use crate::starfield::color::{default_palette, Color};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 闭区间均匀采样范围
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f32,
    pub max: f32,
}

impl SampleRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// 在 `[min, max]` 中均匀采样
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, name: &str) -> ConfigResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "{name}: bounds must be finite"
            )));
        }
        if self.min > self.max {
            return Err(ConfigError::ValidationError(format!(
                "{name}: min {} is greater than max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    fn validate_positive(&self, name: &str) -> ConfigResult<()> {
        self.validate(name)?;
        if self.min <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{name}: min must be strictly positive, got {}",
                self.min
            )));
        }
        Ok(())
    }
}

/// 星星种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarKind {
    /// 普通星星
    Base,
    /// 星座星星：更慢、更大、高亮色
    Constellation,
}

/// 一类星星的属性采样范围
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarProfile {
    /// 每帧深度增量
    pub speed: SampleRange,
    /// 基础半径（像素）
    pub size: SampleRange,
    /// 颜色从中均匀选取
    pub palette: Vec<Color>,
}

impl StarProfile {
    pub fn base() -> Self {
        Self {
            speed: SampleRange::new(0.05, 0.2),
            size: SampleRange::new(1.0, 3.0),
            palette: default_palette(),
        }
    }

    pub fn constellation() -> Self {
        Self {
            speed: SampleRange::new(0.01, 0.03),
            size: SampleRange::new(2.0, 4.0),
            palette: vec![Color::HIGHLIGHT],
        }
    }

    pub fn sample_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        self.palette.choose(rng).copied().unwrap_or(Color::WHITE)
    }

    fn validate(&self, name: &str) -> ConfigResult<()> {
        self.speed.validate_positive(&format!("{name}.speed"))?;
        self.size.validate(&format!("{name}.size"))?;
        if self.size.min < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{name}.size: sizes must not be negative"
            )));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{name}.palette: at least one color is required"
            )));
        }
        Ok(())
    }
}

/// 星空配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// 初始普通星星数量
    pub base_count: usize,
    /// 初始星座星星数量
    pub constellation_count: usize,
    /// 出生点相对中心的最大距离（像素）；未设置时取窗口宽度的一半
    pub spawn_radius: Option<f32>,
    /// 重置时的初始深度
    pub depth_range: SampleRange,
    /// 点击生成时的初始深度（更近）
    pub spawn_depth_range: SampleRange,
    /// 深度超过此值即回收
    pub depth_limit: f32,
    /// 普通星星
    pub base: StarProfile,
    /// 星座星星
    pub constellation: StarProfile,
    /// 随机种子（None = 使用系统熵）
    pub seed: Option<u64>,
}

impl_default!(FieldConfig {
    base_count: 300,
    constellation_count: 15,
    spawn_radius: None,
    depth_range: SampleRange::new(0.1, 1.0),
    spawn_depth_range: SampleRange::new(0.1, 0.5),
    depth_limit: 10.0,
    base: StarProfile::base(),
    constellation: StarProfile::constellation(),
    seed: None,
});

/// 默认窗口宽度 800 的一半
pub const DEFAULT_SPAWN_RADIUS: f32 = 400.0;

impl FieldConfig {
    /// 生效的出生半径
    pub fn spawn_radius(&self) -> f32 {
        self.spawn_radius.unwrap_or(DEFAULT_SPAWN_RADIUS)
    }

    /// 未显式设置出生半径时按窗口宽度推导
    pub fn resolve_spawn_radius(&mut self, window_width: u32) {
        if self.spawn_radius.is_none() {
            self.spawn_radius = Some(window_width as f32 * 0.5);
        }
    }

    pub fn profile(&self, kind: StarKind) -> &StarProfile {
        match kind {
            StarKind::Base => &self.base,
            StarKind::Constellation => &self.constellation,
        }
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        let radius = self.spawn_radius();
        if !radius.is_finite() || radius < 0.0 {
            return Err(ConfigError::ValidationError(
                "field.spawn_radius must be a non-negative number".to_string(),
            ));
        }
        self.depth_range.validate_positive("field.depth_range")?;
        self.spawn_depth_range
            .validate_positive("field.spawn_depth_range")?;
        if !self.depth_limit.is_finite()
            || self.depth_limit < self.depth_range.max
            || self.depth_limit < self.spawn_depth_range.max
        {
            return Err(ConfigError::ValidationError(format!(
                "field.depth_limit {} must not be below the initial depth ranges",
                self.depth_limit
            )));
        }
        self.base.validate("field.base")?;
        self.constellation.validate("field.constellation")?;
        Ok(())
    }
}
