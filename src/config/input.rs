use super::{ConfigError, ConfigResult};
use crate::impl_default;
use crate::platform::KeyCode;
use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 输入配置
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// 两次点击生成之间的最短间隔（毫秒）
    pub spawn_cooldown_ms: u64,

    /// 键盘映射
    pub key_bindings: KeyBindings,

    /// 显示“点击添加星星”提示的区域
    pub hint_region: HintRegion,
}

impl_default!(InputConfig {
    spawn_cooldown_ms: 100,
    key_bindings: KeyBindings::default(),
    hint_region: HintRegion::default(),
});

impl InputConfig {
    pub fn spawn_cooldown(&self) -> Duration {
        Duration::from_millis(self.spawn_cooldown_ms)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.key_bindings.reset == self.key_bindings.quit {
            return Err(ConfigError::ValidationError(
                "reset and quit must be bound to different keys".to_string(),
            ));
        }
        if self.hint_region.top > self.hint_region.bottom {
            return Err(ConfigError::ValidationError(
                "hint_region.top must not exceed hint_region.bottom".to_string(),
            ));
        }
        Ok(())
    }
}

/// 键盘映射
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub reset: KeyCode,
    pub quit: KeyCode,
}

impl_default!(KeyBindings {
    reset: KeyCode::R,
    quit: KeyCode::Escape,
});

/// 提示区域：水平方向两侧内缩 `inset_x`，垂直方向 `(top, bottom)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HintRegion {
    pub inset_x: f32,
    pub top: f32,
    pub bottom: f32,
}

impl_default!(HintRegion {
    inset_x: 100.0,
    top: 400.0,
    bottom: 500.0,
});
