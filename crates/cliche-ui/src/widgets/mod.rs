//! Concrete widgets.

pub mod button;
pub mod rect;
pub mod text_button;
