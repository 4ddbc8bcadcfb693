use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use winit::event::{ElementState, KeyboardInput, VirtualKeyCode, WindowEvent};

/// Event id of the window close request.
pub const QUIT_EVENT_ID: i32 = 1;

macro_rules! keys {
    ($($name:ident = $code:literal),* $(,)?) => {
        /// Keyboard keys, numbered like the GLFW key table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        #[repr(i32)]
        pub enum Key {
            $($name = $code),*
        }

        impl Key {
            pub const ALL: &'static [Key] = &[$(Key::$name),*];

            /// Look up a key by its numeric code. Codes without a key return `None`.
            pub fn from_code(code: i32) -> Option<Key> {
                match code {
                    $($code => Some(Key::$name),)*
                    _ => None,
                }
            }
        }
    };
}

keys! {
    Space = 32,
    Apostrophe = 39,
    Comma = 44,
    Minus = 45,
    Period = 46,
    Slash = 47,
    Num0 = 48,
    Num1 = 49,
    Num2 = 50,
    Num3 = 51,
    Num4 = 52,
    Num5 = 53,
    Num6 = 54,
    Num7 = 55,
    Num8 = 56,
    Num9 = 57,
    Semicolon = 59,
    Equal = 61,
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,
    LeftBracket = 91,
    Backslash = 92,
    RightBracket = 93,
    GraveAccent = 96,
    World1 = 161,
    World2 = 162,

    Escape = 256,
    Enter = 257,
    Tab = 258,
    Backspace = 259,
    Insert = 260,
    Delete = 261,
    Right = 262,
    Left = 263,
    Down = 264,
    Up = 265,
    PageUp = 266,
    PageDown = 267,
    Home = 268,
    End = 269,
    CapsLock = 280,
    ScrollLock = 281,
    NumLock = 282,
    PrintScreen = 283,
    Pause = 284,
    F1 = 290,
    F2 = 291,
    F3 = 292,
    F4 = 293,
    F5 = 294,
    F6 = 295,
    F7 = 296,
    F8 = 297,
    F9 = 298,
    F10 = 299,
    F11 = 300,
    F12 = 301,
    F13 = 302,
    F14 = 303,
    F15 = 304,
    F16 = 305,
    F17 = 306,
    F18 = 307,
    F19 = 308,
    F20 = 309,
    F21 = 310,
    F22 = 311,
    F23 = 312,
    F24 = 313,
    F25 = 314,
    Kp0 = 320,
    Kp1 = 321,
    Kp2 = 322,
    Kp3 = 323,
    Kp4 = 324,
    Kp5 = 325,
    Kp6 = 326,
    Kp7 = 327,
    Kp8 = 328,
    Kp9 = 329,
    KpDecimal = 330,
    KpDivide = 331,
    KpMultiply = 332,
    KpSubtract = 333,
    KpAdd = 334,
    KpEnter = 335,
    KpEqual = 336,
    LeftShift = 340,
    LeftControl = 341,
    LeftAlt = 342,
    LeftSuper = 343,
    RightShift = 344,
    RightControl = 345,
    RightAlt = 346,
    RightSuper = 347,
    Menu = 348,
}

impl Key {
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Map a winit virtual key code. Keys without a counterpart in the table return `None`.
    pub fn from_virtual_keycode(keycode: VirtualKeyCode) -> Option<Key> {
        use VirtualKeyCode as Vk;

        let key = match keycode {
            Vk::Space => Key::Space,
            Vk::Apostrophe => Key::Apostrophe,
            Vk::Comma => Key::Comma,
            Vk::Minus => Key::Minus,
            Vk::Period => Key::Period,
            Vk::Slash => Key::Slash,
            Vk::Key0 => Key::Num0,
            Vk::Key1 => Key::Num1,
            Vk::Key2 => Key::Num2,
            Vk::Key3 => Key::Num3,
            Vk::Key4 => Key::Num4,
            Vk::Key5 => Key::Num5,
            Vk::Key6 => Key::Num6,
            Vk::Key7 => Key::Num7,
            Vk::Key8 => Key::Num8,
            Vk::Key9 => Key::Num9,
            Vk::Semicolon => Key::Semicolon,
            Vk::Equals => Key::Equal,
            Vk::A => Key::A,
            Vk::B => Key::B,
            Vk::C => Key::C,
            Vk::D => Key::D,
            Vk::E => Key::E,
            Vk::F => Key::F,
            Vk::G => Key::G,
            Vk::H => Key::H,
            Vk::I => Key::I,
            Vk::J => Key::J,
            Vk::K => Key::K,
            Vk::L => Key::L,
            Vk::M => Key::M,
            Vk::N => Key::N,
            Vk::O => Key::O,
            Vk::P => Key::P,
            Vk::Q => Key::Q,
            Vk::R => Key::R,
            Vk::S => Key::S,
            Vk::T => Key::T,
            Vk::U => Key::U,
            Vk::V => Key::V,
            Vk::W => Key::W,
            Vk::X => Key::X,
            Vk::Y => Key::Y,
            Vk::Z => Key::Z,
            Vk::LBracket => Key::LeftBracket,
            Vk::Backslash => Key::Backslash,
            Vk::RBracket => Key::RightBracket,
            Vk::Grave => Key::GraveAccent,
            Vk::OEM102 => Key::World2,

            Vk::Escape => Key::Escape,
            Vk::Return => Key::Enter,
            Vk::Tab => Key::Tab,
            Vk::Back => Key::Backspace,
            Vk::Insert => Key::Insert,
            Vk::Delete => Key::Delete,
            Vk::Right => Key::Right,
            Vk::Left => Key::Left,
            Vk::Down => Key::Down,
            Vk::Up => Key::Up,
            Vk::PageUp => Key::PageUp,
            Vk::PageDown => Key::PageDown,
            Vk::Home => Key::Home,
            Vk::End => Key::End,
            Vk::Capital => Key::CapsLock,
            Vk::Scroll => Key::ScrollLock,
            Vk::Numlock => Key::NumLock,
            Vk::Snapshot => Key::PrintScreen,
            Vk::Pause => Key::Pause,
            Vk::F1 => Key::F1,
            Vk::F2 => Key::F2,
            Vk::F3 => Key::F3,
            Vk::F4 => Key::F4,
            Vk::F5 => Key::F5,
            Vk::F6 => Key::F6,
            Vk::F7 => Key::F7,
            Vk::F8 => Key::F8,
            Vk::F9 => Key::F9,
            Vk::F10 => Key::F10,
            Vk::F11 => Key::F11,
            Vk::F12 => Key::F12,
            Vk::F13 => Key::F13,
            Vk::F14 => Key::F14,
            Vk::F15 => Key::F15,
            Vk::F16 => Key::F16,
            Vk::F17 => Key::F17,
            Vk::F18 => Key::F18,
            Vk::F19 => Key::F19,
            Vk::F20 => Key::F20,
            Vk::F21 => Key::F21,
            Vk::F22 => Key::F22,
            Vk::F23 => Key::F23,
            Vk::F24 => Key::F24,
            Vk::Numpad0 => Key::Kp0,
            Vk::Numpad1 => Key::Kp1,
            Vk::Numpad2 => Key::Kp2,
            Vk::Numpad3 => Key::Kp3,
            Vk::Numpad4 => Key::Kp4,
            Vk::Numpad5 => Key::Kp5,
            Vk::Numpad6 => Key::Kp6,
            Vk::Numpad7 => Key::Kp7,
            Vk::Numpad8 => Key::Kp8,
            Vk::Numpad9 => Key::Kp9,
            Vk::NumpadDecimal => Key::KpDecimal,
            Vk::NumpadDivide => Key::KpDivide,
            Vk::NumpadMultiply => Key::KpMultiply,
            Vk::NumpadSubtract => Key::KpSubtract,
            Vk::NumpadAdd => Key::KpAdd,
            Vk::NumpadEnter => Key::KpEnter,
            Vk::NumpadEquals => Key::KpEqual,
            Vk::LShift => Key::LeftShift,
            Vk::LControl => Key::LeftControl,
            Vk::LAlt => Key::LeftAlt,
            Vk::LWin => Key::LeftSuper,
            Vk::RShift => Key::RightShift,
            Vk::RControl => Key::RightControl,
            Vk::RAlt => Key::RightAlt,
            Vk::RWin => Key::RightSuper,
            Vk::Apps => Key::Menu,
            _ => return None,
        };

        Some(key)
    }
}

/// Something [`crate::Context::check_event`] can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The user asked to close the window.
    Quit,
    /// A key is currently down.
    Key(Key),
}

impl Event {
    /// Decode a numeric event id: [`QUIT_EVENT_ID`] or a key code.
    pub fn from_id(id: i32) -> Option<Event> {
        if id == QUIT_EVENT_ID {
            return Some(Event::Quit);
        }
        Key::from_code(id).map(Event::Key)
    }

    pub fn id(self) -> i32 {
        match self {
            Event::Quit => QUIT_EVENT_ID,
            Event::Key(key) => key.code(),
        }
    }
}

impl From<Key> for Event {
    fn from(key: Key) -> Self {
        Event::Key(key)
    }
}

/// Level-triggered input state, fed by a renderer's event pump.
#[derive(Debug, Default)]
pub struct InputState {
    pressed_keys: HashSet<Key>,
    close_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.pressed_keys.insert(key);
        } else {
            self.pressed_keys.remove(&key);
        }
    }

    /// Once set, the close flag stays set.
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed_keys.contains(&key)
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    pub fn is_active(&self, event: Event) -> bool {
        match event {
            Event::Quit => self.close_requested,
            Event::Key(key) => self.is_pressed(key),
        }
    }

    /// Apply a window event.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.request_close(),
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state,
                        virtual_keycode: Some(keycode),
                        ..
                    },
                ..
            } => {
                if let Some(key) = Key::from_virtual_keycode(*keycode) {
                    self.set_key(key, *state == ElementState::Pressed);
                }
            }
            // Keys released while unfocused never reach us.
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }
}
