//! winit 事件到平台无关输入事件的转换

use super::{InputEvent, KeyCode, MouseButton};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, NamedKey};

/// 记录最后一次光标位置，使鼠标按键事件带上坐标
#[derive(Debug, Default, Clone, Copy)]
pub struct WinitInputTranslator {
    cursor: (f32, f32),
}

impl WinitInputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 转换单个窗口事件；与输入无关的事件返回 `None`
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::WindowCloseRequested),
            WindowEvent::Resized(sz) => Some(InputEvent::WindowResized {
                width: sz.width,
                height: sz.height,
            }),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                Some(InputEvent::MouseMoved {
                    x: self.cursor.0,
                    y: self.cursor.1,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let mb = match button {
                    winit::event::MouseButton::Left => MouseButton::Left,
                    winit::event::MouseButton::Right => MouseButton::Right,
                    winit::event::MouseButton::Middle => MouseButton::Middle,
                    winit::event::MouseButton::Other(b) => MouseButton::Other(*b),
                    winit::event::MouseButton::Back => MouseButton::Other(8),
                    winit::event::MouseButton::Forward => MouseButton::Other(9),
                };
                let (x, y) = self.cursor;
                Some(match state {
                    ElementState::Pressed => InputEvent::MouseButtonPressed { button: mb, x, y },
                    ElementState::Released => InputEvent::MouseButtonReleased { button: mb, x, y },
                })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                translate_key_event(&event.logical_key, event.state, event.repeat)
            }
            _ => None,
        }
    }
}

/// 系统按键重复不产生事件，按住只算一次按下
fn translate_key_event(key: &Key, state: ElementState, repeat: bool) -> Option<InputEvent> {
    if repeat {
        return None;
    }
    let key = translate_key(key);
    Some(match state {
        ElementState::Pressed => InputEvent::KeyPressed { key },
        ElementState::Released => InputEvent::KeyReleased { key },
    })
}

fn translate_key(key: &Key) -> KeyCode {
    match key {
        Key::Character(c) => {
            let mut chars = c.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::from_char(ch),
                _ => KeyCode::Unknown(0),
            }
        }
        Key::Named(NamedKey::Escape) => KeyCode::Escape,
        Key::Named(NamedKey::Enter) => KeyCode::Enter,
        Key::Named(NamedKey::Tab) => KeyCode::Tab,
        Key::Named(NamedKey::Space) => KeyCode::Space,
        _ => KeyCode::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_character_key() {
        assert_eq!(translate_key(&Key::Character("r".into())), KeyCode::R);
        assert_eq!(translate_key(&Key::Character("ab".into())), KeyCode::Unknown(0));
        assert_eq!(translate_key(&Key::Named(NamedKey::Escape)), KeyCode::Escape);
    }

    #[test]
    fn test_key_repeat_ignored() {
        let r = Key::Character("r".into());
        assert_eq!(
            translate_key_event(&r, ElementState::Pressed, false),
            Some(InputEvent::KeyPressed { key: KeyCode::R })
        );
        assert_eq!(translate_key_event(&r, ElementState::Pressed, true), None);
        assert_eq!(
            translate_key_event(&r, ElementState::Released, false),
            Some(InputEvent::KeyReleased { key: KeyCode::R })
        );
    }

    #[test]
    fn test_close_requested() {
        let mut translator = WinitInputTranslator::new();
        assert_eq!(
            translator.translate(&WindowEvent::CloseRequested),
            Some(InputEvent::WindowCloseRequested)
        );
    }

    #[test]
    fn test_resize() {
        let mut translator = WinitInputTranslator::new();
        let event = WindowEvent::Resized(winit::dpi::PhysicalSize::new(640, 480));
        assert_eq!(
            translator.translate(&event),
            Some(InputEvent::WindowResized {
                width: 640,
                height: 480
            })
        );
    }
}
