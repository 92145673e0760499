//! Font loading and text measurement.
//!
//! Glyph rasterization belongs to whichever backend consumes the draw list;
//! the engine only needs metrics so the UI can size and center text.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem, TextMeasure};
