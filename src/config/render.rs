use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 星星光晕绘制参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// 光晕半径相对星星半径的倍数
    pub glow_scale: f32,

    /// 光晕不透明度
    pub glow_alpha: f32,

    /// 星星本体不透明度
    pub core_alpha: f32,
}

impl_default!(RenderConfig {
    glow_scale: 2.0,
    glow_alpha: 50.0 / 255.0,
    core_alpha: 1.0,
});

impl RenderConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.glow_alpha) || !(0.0..=1.0).contains(&self.core_alpha) {
            return Err(ConfigError::ValidationError(
                "alpha values must lie in [0, 1]".to_string(),
            ));
        }
        if !self.glow_scale.is_finite() || self.glow_scale < 0.0 {
            return Err(ConfigError::ValidationError(
                "glow_scale must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}
