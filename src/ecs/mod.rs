//! 帧循环资源与调度
//!
//! 星空作为 ECS 资源由帧循环独占；输入每帧处理一次，物理按固定时间步推进。

use crate::config::StarfieldConfig;
use crate::input::{PointerState, SpawnDebounce};
use crate::platform::InputBuffer;
use crate::starfield::StarField;
use bevy_ecs::prelude::*;
use glam::Vec2;

pub mod systems;

pub use systems::{
    create_fixed_schedule, create_update_schedule, diagnostics_system, starfield_input_system,
    starfield_tick_system,
};

/// 帧时间与固定步长累加器
#[derive(Resource, Debug, Clone)]
pub struct Time {
    pub elapsed_seconds: f64,
    pub fixed_time_step: f64,
    /// 单帧最多补偿的步数，超出部分丢弃
    pub max_steps_per_frame: u32,
    accumulator: f64,
}

impl Default for Time {
    fn default() -> Self {
        Self {
            elapsed_seconds: 0.0,
            fixed_time_step: 1.0 / 60.0,
            max_steps_per_frame: 5,
            accumulator: 0.0,
        }
    }
}

impl Time {
    pub fn with_fixed_step(fixed_time_step: f64) -> Self {
        Self {
            fixed_time_step,
            ..Default::default()
        }
    }

    /// 记录一帧的真实耗时，返回本帧应执行的固定步数
    pub fn advance(&mut self, delta: f64) -> u32 {
        let delta = delta.max(0.0);
        self.elapsed_seconds += delta;
        self.accumulator += delta;

        let mut steps = 0;
        while self.accumulator >= self.fixed_time_step && steps < self.max_steps_per_frame {
            self.accumulator -= self.fixed_time_step;
            steps += 1;
        }
        if steps == self.max_steps_per_frame {
            // 卡顿后不追帧
            self.accumulator = self.accumulator.min(self.fixed_time_step);
        }

        steps
    }
}

/// 窗口尺寸（像素）
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 * 0.5, self.height as f32 * 0.5)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.width as f32
            && point.y < self.height as f32
    }
}

/// 已执行的固定步数
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct FrameCounter {
    pub ticks: u64,
    pub last_report: u64,
}

/// 诊断日志间隔（固定步数，0 = 关闭）
#[derive(Resource, Debug, Clone, Copy)]
pub struct DiagnosticsInterval(pub u64);

/// 收到退出命令
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExitRequested(pub bool);

/// 插入帧循环所需的全部资源
pub fn setup_resources(world: &mut World, config: &StarfieldConfig, field: StarField) {
    world.insert_resource(Time::with_fixed_step(config.window.fixed_time_step()));
    world.insert_resource(Viewport {
        width: config.window.width,
        height: config.window.height,
    });
    world.insert_resource(InputBuffer::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(SpawnDebounce::new(config.input.spawn_cooldown()));
    world.insert_resource(config.input.clone());
    world.insert_resource(FrameCounter::default());
    world.insert_resource(DiagnosticsInterval(
        config.logging.diagnostics_interval_frames,
    ));
    world.insert_resource(ExitRequested::default());
    world.insert_resource(field);
}
