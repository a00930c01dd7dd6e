use super::{ConfigError, ConfigResult};
use crate::impl_default;
use crate::starfield::color::Color;
use serde::{Deserialize, Serialize};

/// 窗口与帧率配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// 窗口标题前缀
    pub title: String,

    /// 宽度（像素）
    pub width: u32,

    /// 高度（像素）
    pub height: u32,

    /// 每秒固定步进次数
    pub target_fps: u32,

    /// 垂直同步
    pub vsync: bool,

    /// 背景色
    pub background: Color,
}

impl_default!(WindowConfig {
    title: "Starfield Simulation".to_string(),
    width: 800,
    height: 600,
    target_fps: 60,
    vsync: true,
    background: Color::BACKGROUND,
});

impl WindowConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ValidationError(
                "Invalid resolution".to_string(),
            ));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ValidationError(
                "target_fps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// 固定时间步长（秒）
    pub fn fixed_time_step(&self) -> f64 {
        1.0 / self.target_fps.max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_resolution_rejected() {
        let config = WindowConfig {
            width: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_fixed_time_step() {
        let config = WindowConfig::default();
        assert!((config.fixed_time_step() - 1.0 / 60.0).abs() < 1e-12);
    }
}
