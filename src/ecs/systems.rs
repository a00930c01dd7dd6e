use super::{DiagnosticsInterval, ExitRequested, FrameCounter, Time, Viewport};
use crate::config::InputConfig;
use crate::diagnostics;
use crate::input::{collect_commands, FieldCommand, PointerState, SpawnDebounce};
use crate::platform::{InputBuffer, InputEvent};
use crate::starfield::StarField;
use bevy_ecs::prelude::*;

/// 消费输入缓冲区并把命令应用到星空
#[allow(clippy::too_many_arguments)]
pub fn starfield_input_system(
    mut buffer: ResMut<InputBuffer>,
    mut pointer: ResMut<PointerState>,
    mut debounce: ResMut<SpawnDebounce>,
    input: Res<InputConfig>,
    time: Res<Time>,
    mut viewport: ResMut<Viewport>,
    mut field: ResMut<StarField>,
    mut exit: ResMut<ExitRequested>,
) {
    let events = buffer.drain();

    for event in &events {
        if let InputEvent::WindowResized { width, height } = *event {
            if width > 0 && height > 0 {
                *viewport = Viewport { width, height };
                field.set_center(viewport.center());
                tracing::debug!(target: "input", width, height, "Viewport resized");
            }
        }
    }

    let commands = collect_commands(
        &events,
        &mut pointer,
        &mut debounce,
        &input.key_bindings,
        time.elapsed_seconds,
    );

    for command in commands {
        match command {
            FieldCommand::Quit => {
                tracing::info!(target: "input", "Quit requested");
                exit.0 = true;
            }
            FieldCommand::ResetAll => field.reset_all(),
            FieldCommand::SpawnAt(point) => {
                let view_center = field.center();
                field.spawn_at(point, view_center);
            }
        }
    }
}

/// 推进星空一个固定步
pub fn starfield_tick_system(mut field: ResMut<StarField>, mut frames: ResMut<FrameCounter>) {
    field.tick();
    frames.ticks += 1;
}

/// 按间隔输出诊断日志
pub fn diagnostics_system(
    field: Res<StarField>,
    interval: Res<DiagnosticsInterval>,
    mut frames: ResMut<FrameCounter>,
) {
    if interval.0 == 0 || frames.ticks - frames.last_report < interval.0 {
        return;
    }
    frames.last_report = frames.ticks;
    diagnostics::log_stats(&field.stats());
}

/// 创建固定时间步调度器
pub fn create_fixed_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(starfield_tick_system);
    schedule
}

/// 创建更新调度器
pub fn create_update_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((starfield_input_system, diagnostics_system).chain());
    schedule
}
