//! 透视星空
//!
//! 星星从消失点沿径向飞向观察者。每颗星星只保存一个深度值，投影时做一次
//! 透视除法得到屏幕位置和半径：
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  输入 → StarField::tick → snapshot → 渲染器  │
//! │                                              │
//! │  depth += speed                              │
//! │  depth > depth_limit  ⇒  原地重置（回收）    │
//! │  position = origin/depth + center(1-1/depth) │
//! │  size     = base_size/depth                  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## 使用示例
//!
//! ```
//! use glam::Vec2;
//! use rand::{rngs::StdRng, SeedableRng};
//! use starfield::config::FieldConfig;
//! use starfield::starfield::StarField;
//!
//! let center = Vec2::new(400.0, 300.0);
//! let mut field = StarField::initialize(300, 15, FieldConfig::default(), center, StdRng::seed_from_u64(1));
//! field.tick();
//! field.spawn_at(Vec2::new(100.0, 100.0), center);
//! assert_eq!(field.population_count(), 316);
//! ```

pub mod color;
pub mod field;
pub mod star;


pub use color::Color;
pub use field::{RenderStar, StarField};
pub use star::{Projection, Star};
