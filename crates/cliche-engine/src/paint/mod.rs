//! Paint model shared between the widget layer and draw-list consumers.
//!
//! Widgets only ever fill or stroke with a single solid color, so this module
//! is just the color type. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
