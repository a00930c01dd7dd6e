//! 统一错误处理模块
//!
//! - `StarfieldError`：应用级错误（窗口、事件循环、配置等）
//! - `RenderError`：GPU 渲染后端错误
//!
//! 配置错误定义在 `config::ConfigError`，通过 `#[from]` 汇入 `StarfieldError`。

use crate::config::ConfigError;
use thiserror::Error;

/// 应用错误类型
#[derive(Error, Debug)]
pub enum StarfieldError {
    #[error("Window creation failed: {0}")]
    Window(String),

    #[error("Event loop error: {0}")]
    EventLoop(String),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 渲染系统错误
#[derive(Error, Debug, Clone)]
pub enum RenderError {
    #[error("Failed to create surface: {0}")]
    SurfaceCreation(String),

    #[error("Failed to request adapter: no compatible GPU found")]
    NoAdapter,

    #[error("Failed to request device: {0}")]
    DeviceRequest(String),

    #[error("Surface error: {0}")]
    Surface(String),
}

pub type StarfieldResult<T> = Result<T, StarfieldError>;
pub type RenderResult<T> = Result<T, RenderError>;
