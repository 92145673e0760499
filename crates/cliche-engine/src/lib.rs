//! Cliche engine crate.
//!
//! Owns the drawing and asset primitives the widget layer delegates to:
//! geometry, colors, the recorded draw stream, font measurement, image
//! decoding/scaling and platform-agnostic pointer events. Rasterizing the
//! draw stream is left to whichever backend consumes it.

pub mod coords;
pub mod image;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
