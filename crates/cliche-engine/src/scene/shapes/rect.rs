use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// How a rectangle is painted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RectStyle {
    /// Fill the whole area.
    Filled,
    /// Stroke the inside edge with a line `width` pixels wide.
    Outline { width: f32 },
}

impl RectStyle {
    /// Maps a stroke width to a style; `0` means filled.
    #[inline]
    pub fn from_width(width: f32) -> Self {
        if width <= 0.0 {
            RectStyle::Filled
        } else {
            RectStyle::Outline { width }
        }
    }

    /// Stroke width, `0` for filled.
    #[inline]
    pub fn width(self) -> f32 {
        match self {
            RectStyle::Filled => 0.0,
            RectStyle::Outline { width } => width,
        }
    }
}

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
    pub style: RectStyle,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, color: Color, style: RectStyle) -> Self {
        Self { rect, color, style }
    }
}

impl DrawList {
    /// Records an already-built rectangle command.
    #[inline]
    pub fn push_rect_cmd(&mut self, z: ZIndex, cmd: RectCmd) {
        self.push(z, DrawCmd::Rect(cmd));
    }
}
