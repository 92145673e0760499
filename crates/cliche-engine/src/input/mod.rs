//! Input subsystem.
//!
//! Public API is platform-agnostic. Whatever owns the window translates its
//! native pointer events into [`InputEvent`]s and hands them to the UI.

mod types;

pub use types::{
    InputEvent,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
