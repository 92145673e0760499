use std::fmt;

use cliche_engine::coords::Vec2;
use cliche_engine::image::ImageLoadError;
use cliche_engine::text::FontLoadError;

use crate::grid::GridPos;
use crate::panel::PanelId;

/// Configuration errors raised while building or mutating widgets.
///
/// All of them are fail-fast: the widget is left as it was before the call.
#[derive(Debug, Clone)]
pub enum UiError {
    /// Border width was zero, negative or not finite.
    BorderWidth(f32),
    /// Stroke width was negative or not finite.
    StrokeWidth(f32),
    /// Grid coordinate does not name a cell of the target grid.
    CellOutOfBounds { cell: GridPos, cols: u32, rows: u32 },
    /// Cell size must be positive and finite on both axes.
    InvalidGrid(Vec2),
    /// Parent handle does not belong to this panel table.
    UnknownPanel(PanelId),
    Font(FontLoadError),
    Image(ImageLoadError),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::BorderWidth(w) => write!(f, "border width must be positive, got {w}"),
            UiError::StrokeWidth(w) => write!(f, "stroke width must be zero or positive, got {w}"),
            UiError::CellOutOfBounds { cell, cols, rows } => write!(
                f,
                "grid cell ({}, {}) outside {cols}x{rows} grid",
                cell.col, cell.row
            ),
            UiError::InvalidGrid(size) => {
                write!(f, "invalid grid cell size {}x{}", size.x, size.y)
            }
            UiError::UnknownPanel(id) => write!(f, "unknown panel {id}"),
            UiError::Font(e) => write!(f, "{e}"),
            UiError::Image(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for UiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UiError::Font(e) => Some(e),
            UiError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FontLoadError> for UiError {
    fn from(e: FontLoadError) -> Self {
        UiError::Font(e)
    }
}

impl From<ImageLoadError> for UiError {
    fn from(e: ImageLoadError) -> Self {
        UiError::Image(e)
    }
}
