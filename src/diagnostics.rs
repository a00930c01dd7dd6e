//! 诊断叠加层
//!
//! 星星数量、深度与速度范围，以及说明文字。没有字体渲染，这些文本行
//! 通过窗口标题和日志输出。

use crate::config::HintRegion;
use crate::ecs::Viewport;
use glam::Vec2;

/// 星空统计
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldStats {
    pub population: usize,
    pub min_depth: f32,
    pub max_depth: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

/// 操作说明
pub fn instruction_lines(stats: &FieldStats) -> Vec<String> {
    vec![
        "Press R: Reset simulation".to_string(),
        "Press ESC: Exit".to_string(),
        "Click: Create a new star".to_string(),
        format!("Stars: {}", stats.population),
    ]
}

/// 物理信息
pub fn physics_lines(stats: &FieldStats) -> Vec<String> {
    vec![
        "Physics:".to_string(),
        format!(
            "- Star speed: {:.2} to {:.2}",
            stats.min_speed, stats.max_speed
        ),
        format!(
            "- Star depth: {:.2} to {:.2}",
            stats.min_depth, stats.max_depth
        ),
    ]
}

pub const HINT_TEXT: &str = "Click anywhere to add a star!";

/// 光标是否位于提示区域内（开区间）
pub fn hint_visible(pointer: Vec2, viewport: &Viewport, region: &HintRegion) -> bool {
    let right = viewport.width as f32 - region.inset_x;
    pointer.x > region.inset_x
        && pointer.x < right
        && pointer.y > region.top
        && pointer.y < region.bottom
}

/// 窗口标题只含星星数量和提示，只在点击生成或提示切换时变化
pub fn window_title(base: &str, population: usize, show_hint: bool) -> String {
    if show_hint {
        format!("{} | Stars: {} | {}", base, population, HINT_TEXT)
    } else {
        format!("{} | Stars: {}", base, population)
    }
}

/// 输出一次诊断日志
pub fn log_stats(stats: &FieldStats) {
    tracing::info!(
        target: "starfield",
        population = stats.population,
        min_depth = stats.min_depth,
        max_depth = stats.max_depth,
        min_speed = stats.min_speed,
        max_speed = stats.max_speed,
        "Field diagnostics"
    );
    for line in physics_lines(stats) {
        tracing::debug!(target: "starfield", "{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> FieldStats {
        FieldStats {
            population: 316,
            min_depth: 0.1234,
            max_depth: 9.876,
            min_speed: 0.01,
            max_speed: 0.2,
        }
    }

    #[test]
    fn test_instruction_lines() {
        let lines = instruction_lines(&stats());
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "Stars: 316");
    }

    #[test]
    fn test_physics_lines_two_decimals() {
        let lines = physics_lines(&stats());
        assert_eq!(lines[1], "- Star speed: 0.01 to 0.20");
        assert_eq!(lines[2], "- Star depth: 0.12 to 9.88");
    }

    #[test]
    fn test_hint_region() {
        let viewport = Viewport {
            width: 800,
            height: 600,
        };
        let region = HintRegion::default();

        assert!(hint_visible(Vec2::new(400.0, 450.0), &viewport, &region));
        assert!(!hint_visible(Vec2::new(100.0, 450.0), &viewport, &region));
        assert!(!hint_visible(Vec2::new(700.0, 450.0), &viewport, &region));
        assert!(!hint_visible(Vec2::new(400.0, 500.0), &viewport, &region));
    }

    #[test]
    fn test_window_title() {
        assert_eq!(
            window_title("Starfield Simulation", 316, false),
            "Starfield Simulation | Stars: 316"
        );
        assert_eq!(
            window_title("Starfield Simulation", 316, true),
            "Starfield Simulation | Stars: 316 | Click anywhere to add a star!"
        );
    }

    #[test]
    fn test_window_title_stable_across_ticks() {
        use crate::config::FieldConfig;
        use crate::starfield::StarField;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut field = StarField::initialize(
            30,
            3,
            FieldConfig::default(),
            Vec2::new(400.0, 300.0),
            StdRng::seed_from_u64(8),
        );
        let first = window_title("Starfield", field.population_count(), false);
        for _ in 0..50 {
            field.tick();
            assert_eq!(window_title("Starfield", field.population_count(), false), first);
        }
    }
}
