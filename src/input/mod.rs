//! 输入到星空命令的映射
//!
//! 按键与指针状态转换为 [`FieldCommand`]；点击生成通过 [`SpawnDebounce`]
//! 限流，按住鼠标时每个冷却周期生成一颗星星。

use crate::config::KeyBindings;
use crate::platform::{InputEvent, MouseButton};
use bevy_ecs::prelude::Resource;
use glam::Vec2;
use std::time::Duration;

/// 交给星空执行的命令
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldCommand {
    Quit,
    ResetAll,
    SpawnAt(Vec2),
}

/// 指针位置与左键按住状态
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub pressed: bool,
}

impl PointerState {
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::MouseMoved { x, y } => self.position = Vec2::new(x, y),
            InputEvent::MouseButtonPressed {
                button: MouseButton::Left,
                x,
                y,
            } => {
                self.position = Vec2::new(x, y);
                self.pressed = true;
            }
            InputEvent::MouseButtonReleased {
                button: MouseButton::Left,
                ..
            } => self.pressed = false,
            _ => {}
        }
    }
}

/// 点击生成的限流
#[derive(Resource, Debug, Clone)]
pub struct SpawnDebounce {
    cooldown: Duration,
    last_accepted: Option<f64>,
}

impl SpawnDebounce {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_accepted: None,
        }
    }

    /// `now` 为单调时间（秒）；距上次接受不足冷却时间则拒绝
    pub fn try_accept(&mut self, now: f64) -> bool {
        let ready = match self.last_accepted {
            None => true,
            Some(last) => now - last >= self.cooldown.as_secs_f64(),
        };
        if ready {
            self.last_accepted = Some(now);
        }
        ready
    }
}

impl Default for SpawnDebounce {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

/// 处理本帧事件，返回需要执行的命令
///
/// 事件按顺序处理；按住左键时每帧都请求一次生成，由 `debounce` 决定是否接受。
/// 同一帧内按下又松开的点击也会请求一次，位置取按下处。
pub fn collect_commands(
    events: &[InputEvent],
    pointer: &mut PointerState,
    debounce: &mut SpawnDebounce,
    bindings: &KeyBindings,
    now: f64,
) -> Vec<FieldCommand> {
    let mut commands = Vec::new();
    let mut clicked = None;

    for event in events {
        pointer.apply(event);
        match event {
            InputEvent::MouseButtonPressed {
                button: MouseButton::Left,
                x,
                y,
            } => clicked = Some(Vec2::new(*x, *y)),
            InputEvent::WindowCloseRequested => commands.push(FieldCommand::Quit),
            InputEvent::KeyPressed { key } if *key == bindings.quit => {
                commands.push(FieldCommand::Quit)
            }
            InputEvent::KeyPressed { key } if *key == bindings.reset => {
                commands.push(FieldCommand::ResetAll)
            }
            _ => {}
        }
    }

    let request = if pointer.pressed {
        Some(pointer.position)
    } else {
        clicked
    };
    if let Some(point) = request {
        if debounce.try_accept(now) {
            commands.push(FieldCommand::SpawnAt(point));
        }
    }

    commands
}
