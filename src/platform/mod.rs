pub mod winit;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

// ============================================================================
// Input Abstraction
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    // Keyboard
    KeyPressed { key: KeyCode },
    KeyReleased { key: KeyCode },

    // Mouse
    MouseMoved { x: f32, y: f32 },
    MouseButtonPressed { button: MouseButton, x: f32, y: f32 },
    MouseButtonReleased { button: MouseButton, x: f32, y: f32 },

    // Window
    WindowResized { width: u32, height: u32 },
    WindowCloseRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Escape, Space, Enter, Tab,
    Unknown(u32),
}

impl KeyCode {
    /// 字母键（大小写不敏感），其余字符返回 `Unknown`
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'A' => KeyCode::A,
            'B' => KeyCode::B,
            'C' => KeyCode::C,
            'D' => KeyCode::D,
            'E' => KeyCode::E,
            'F' => KeyCode::F,
            'G' => KeyCode::G,
            'H' => KeyCode::H,
            'I' => KeyCode::I,
            'J' => KeyCode::J,
            'K' => KeyCode::K,
            'L' => KeyCode::L,
            'M' => KeyCode::M,
            'N' => KeyCode::N,
            'O' => KeyCode::O,
            'P' => KeyCode::P,
            'Q' => KeyCode::Q,
            'R' => KeyCode::R,
            'S' => KeyCode::S,
            'T' => KeyCode::T,
            'U' => KeyCode::U,
            'V' => KeyCode::V,
            'W' => KeyCode::W,
            'X' => KeyCode::X,
            'Y' => KeyCode::Y,
            'Z' => KeyCode::Z,
            ' ' => KeyCode::Space,
            other => KeyCode::Unknown(other as u32),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left, Right, Middle, Other(u16),
}

/// 本帧尚未处理的输入事件
#[derive(Resource, Default, Clone, Debug)]
pub struct InputBuffer {
    pub events: Vec<InputEvent>,
}

impl InputBuffer {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// 取出全部事件并清空缓冲区
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_char_case_insensitive() {
        assert_eq!(KeyCode::from_char('r'), KeyCode::R);
        assert_eq!(KeyCode::from_char('R'), KeyCode::R);
        assert_eq!(KeyCode::from_char('7'), KeyCode::Unknown('7' as u32));
    }

    #[test]
    fn test_input_buffer_drain() {
        let mut buf = InputBuffer::default();
        buf.push(InputEvent::WindowCloseRequested);
        buf.push(InputEvent::MouseMoved { x: 1.0, y: 2.0 });

        let events = buf.drain();
        assert_eq!(events.len(), 2);
        assert!(buf.events.is_empty());
    }
}
