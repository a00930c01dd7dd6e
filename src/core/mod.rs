//! 核心模块
//!
//! - `app` - 窗口、事件循环与帧调度
//! - `error` - 错误类型定义
//! - `macros` - 配置默认值宏

pub mod app;
pub mod error;
#[macro_use]
pub mod macros;

pub use app::App;
pub use error::{RenderError, RenderResult, StarfieldError, StarfieldResult};
