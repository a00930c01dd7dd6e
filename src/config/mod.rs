/// 统一配置系统
///
/// 提供TOML/JSON配置文件、环境变量覆盖和加载时验证
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub mod field;
pub mod input;
pub mod render;
pub mod window;

pub use field::{FieldConfig, SampleRange, StarKind, StarProfile};
pub use input::{HintRegion, InputConfig, KeyBindings};
pub use render::RenderConfig;
pub use window::WindowConfig;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 主配置
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StarfieldConfig {
    /// 窗口配置
    #[serde(default)]
    pub window: WindowConfig,

    /// 星空配置
    #[serde(default)]
    pub field: FieldConfig,

    /// 绘制配置
    #[serde(default)]
    pub render: RenderConfig,

    /// 输入配置
    #[serde(default)]
    pub input: InputConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StarfieldConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 保存为JSON文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    pub fn apply_env_overrides(&mut self) {
        override_from_env("STARFIELD_WIDTH", &mut self.window.width);
        override_from_env("STARFIELD_HEIGHT", &mut self.window.height);
        override_from_env("STARFIELD_TARGET_FPS", &mut self.window.target_fps);
        override_from_env("STARFIELD_VSYNC", &mut self.window.vsync);
        override_from_env("STARFIELD_BASE_COUNT", &mut self.field.base_count);
        override_from_env(
            "STARFIELD_CONSTELLATION_COUNT",
            &mut self.field.constellation_count,
        );

        if let Ok(val) = env::var("STARFIELD_SEED") {
            if let Ok(seed) = val.parse() {
                self.field.seed = Some(seed);
            }
        }
    }

    /// 星空配置，出生半径未设置时取窗口宽度的一半
    pub fn field_for_window(&self) -> FieldConfig {
        let mut field = self.field.clone();
        field.resolve_spawn_radius(self.window.width);
        field
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.window.validate()?;
        self.field.validate()?;
        self.render.validate()?;
        self.input.validate()?;
        Ok(())
    }

    /// 自动查找并加载配置文件
    ///
    /// 按以下顺序查找：
    /// 1. ./starfield.toml
    /// 2. ./starfield.json
    /// 3. <用户配置目录>/starfield/config.toml
    /// 4. 使用默认配置
    pub fn load_or_default() -> Self {
        for path in Self::search_paths() {
            let loaded = match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => Self::from_json_file(&path),
                _ => Self::from_toml_file(&path),
            };
            match loaded {
                Ok(config) => {
                    tracing::info!(target: "config", "Loaded config from {:?}", path);
                    return config;
                }
                Err(ConfigError::FileError(_)) => {}
                Err(e) => {
                    tracing::warn!(target: "config", "Ignoring {:?}: {}", path, e);
                }
            }
        }

        tracing::info!(target: "config", "Using default configuration");
        Self::default()
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("starfield.toml"),
            PathBuf::from("starfield.json"),
        ];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("starfield").join("config.toml"));
        }
        paths
    }
}

fn override_from_env<T: FromStr>(key: &str, target: &mut T) {
    if let Ok(val) = env::var(key) {
        match val.parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => {
                tracing::warn!(target: "config", "Ignoring unparsable {}={}", key, val);
            }
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别（`RUST_LOG` 优先）
    pub level: LogLevel,

    /// 每隔多少帧输出一次诊断信息（0 = 关闭）
    pub diagnostics_interval_frames: u64,
}

use crate::impl_default;

impl_default!(LoggingConfig {
    level: LogLevel::Info,
    diagnostics_interval_frames: 300,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}

impl LogLevel {
    /// EnvFilter 指令字符串
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
