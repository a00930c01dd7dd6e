//! 星空颜色
//!
//! 8 位 sRGB 颜色以及默认调色板。

use serde::{Deserialize, Serialize};

/// 8 位 sRGB 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const LIGHT_BLUE: Color = Color::rgb(200, 200, 255);
    pub const LIGHT_YELLOW: Color = Color::rgb(255, 240, 200);
    pub const LIGHT_GREEN: Color = Color::rgb(200, 255, 200);
    pub const LIGHT_RED: Color = Color::rgb(255, 200, 200);

    /// 星座粒子的高亮色
    pub const HIGHLIGHT: Color = Color::rgb(100, 200, 255);
    /// 背景色（深蓝夜空）
    pub const BACKGROUND: Color = Color::rgb(10, 10, 30);
    /// 叠加文字颜色
    pub const TEXT: Color = Color::rgb(220, 220, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 归一化到 `[0, 1]` 的 sRGB 分量
    pub fn to_f32_array(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// 线性空间分量，用于 sRGB 渲染目标
    pub fn to_linear(self) -> [f32; 3] {
        self.to_f32_array().map(srgb_to_linear)
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// 普通星星的默认调色板
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::WHITE,
        Color::LIGHT_BLUE,
        Color::LIGHT_YELLOW,
        Color::LIGHT_GREEN,
        Color::LIGHT_RED,
    ]
}
