use crate::coords::Vec2;

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

impl MouseButton {
    /// Maps a numeric button id as reported by X11/SDL style backends
    /// (`1` left, `2` middle, `3` right, `8`/`9` back/forward).
    pub fn from_index(index: u16) -> Self {
        match index {
            1 => MouseButton::Left,
            2 => MouseButton::Middle,
            3 => MouseButton::Right,
            8 => MouseButton::Back,
            9 => MouseButton::Forward,
            n => MouseButton::Other(n),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Modifier keys state.
///
/// This is stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Pointer move event in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button event.
///
/// Coordinates are included so a single event is enough for hit testing,
/// without tracking a separate "current pointer position".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}

impl PointerButtonEvent {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Platform-agnostic pointer events.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),
    /// Pointer left the window surface.
    PointerLeft,
}

impl InputEvent {
    /// Shorthand for a button press at `(x, y)` with no modifiers held.
    pub fn pressed(button: MouseButton, x: f32, y: f32) -> Self {
        Self::button(button, MouseButtonState::Pressed, x, y)
    }

    /// Shorthand for a button release at `(x, y)` with no modifiers held.
    pub fn released(button: MouseButton, x: f32, y: f32) -> Self {
        Self::button(button, MouseButtonState::Released, x, y)
    }

    fn button(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> Self {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    /// The button payload, if this is a button event.
    #[inline]
    pub fn as_button(&self) -> Option<&PointerButtonEvent> {
        match self {
            InputEvent::PointerButton(b) => Some(b),
            _ => None,
        }
    }
}
