//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store backend-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific payloads isolated per file under `scene::shapes`

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
pub use shapes::image::ImageCmd;
pub use shapes::rect::{RectCmd, RectStyle};
pub use shapes::text::TextCmd;
