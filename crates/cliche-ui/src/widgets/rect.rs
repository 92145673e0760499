use std::path::Path;

use cliche_engine::coords::{Rect, Vec2};
use cliche_engine::image::{ImageId, ImageStore};
use cliche_engine::paint::Color;
use cliche_engine::scene::{RectCmd, RectStyle};

use crate::config::{UiConfig, FILLED};
use crate::error::UiError;
use crate::painter::Painter;
use crate::widget::Widget;

/// Stroke drawn around the outside of a widget.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub color: Color,
    pub width: f32,
}

/// Image attached to a widget, with the size its pixels were scaled to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AttachedImage {
    pub id: ImageId,
    pub size: Vec2,
}

/// A colored rectangle with optional border and image.
///
/// Every setter rebuilds the draw primitives straight away from the current
/// field values, so [`primitive`](Self::primitive) is always in sync.
///
/// # Example
/// ```rust,ignore
/// let mut r = RectWidget::new(Rect::new(0.0, 0.0, 40.0, 20.0), &UiConfig::default());
/// r.set_color((200, 40, 40, 255));
/// r.set_border((255, 255, 255, 255), 2.0)?;
/// r.set_image(&mut images, "icon.png")?;
/// ```
#[derive(Debug, Clone)]
pub struct RectWidget {
    pos: Vec2,
    dimensions: Vec2,
    /// Size of one spanned unit; fixed at construction.
    base_cell: Vec2,
    span: (u32, u32),

    color: Color,
    style: RectStyle,
    outline_width: f32,

    border: Option<Border>,
    image: Option<AttachedImage>,

    rect: RectCmd,
    border_rect: Option<RectCmd>,
}

impl RectWidget {
    pub fn new(rect: Rect, config: &UiConfig) -> Self {
        let style = RectStyle::from_width(FILLED);
        Self {
            pos: rect.origin,
            dimensions: rect.size,
            base_cell: rect.size,
            span: (0, 0),
            color: config.fill,
            style,
            outline_width: config.outline_width,
            border: None,
            image: None,
            rect: RectCmd::new(rect, config.fill, style),
            border_rect: None,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn dimensions(&self) -> Vec2 {
        self.dimensions
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.pos, self.dimensions)
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn style(&self) -> RectStyle {
        self.style
    }

    /// Extra cells covered along `(columns, rows)`.
    #[inline]
    pub fn span(&self) -> (u32, u32) {
        self.span
    }

    #[inline]
    pub fn border(&self) -> Option<Border> {
        self.border
    }

    #[inline]
    pub fn image(&self) -> Option<ImageId> {
        self.image.map(|img| img.id)
    }

    /// Size the attached image is drawn at. Spanning does not change it.
    #[inline]
    pub fn image_size(&self) -> Option<Vec2> {
        self.image.map(|img| img.size)
    }

    /// The rectangle primitive handed to the painter.
    #[inline]
    pub fn primitive(&self) -> &RectCmd {
        &self.rect
    }

    /// The border primitive, if a border is set.
    #[inline]
    pub fn border_primitive(&self) -> Option<&RectCmd> {
        self.border_rect.as_ref()
    }

    // ── mutators ──────────────────────────────────────────────────────────

    pub fn set_color(&mut self, color: impl Into<Color>) {
        self.color = color.into();
        self.rebuild();
    }

    /// Stroke width of the rectangle; [`FILLED`] (zero) fills it.
    ///
    /// Negative and non-finite widths are rejected and leave the style as is.
    pub fn set_width(&mut self, width: f32) -> Result<(), UiError> {
        if !(width.is_finite() && width >= 0.0) {
            log::warn!("rejected stroke width {width} on widget at {:?}", self.pos);
            return Err(UiError::StrokeWidth(width));
        }
        self.style = RectStyle::from_width(width);
        self.rebuild();
        Ok(())
    }

    /// `true` fills the rectangle, `false` outlines it with the configured width.
    pub fn set_solid(&mut self, solid: bool) -> Result<(), UiError> {
        let width = if solid { FILLED } else { self.outline_width };
        self.set_width(width)
    }

    /// Stretches the widget over `span.0` extra columns and `span.1` extra rows.
    ///
    /// The size is always derived from the original cell, so repeated calls
    /// do not compound.
    pub fn set_span(&mut self, span: (u32, u32)) {
        self.span = span;
        self.dimensions = Vec2::new(
            (span.0 + 1) as f32 * self.base_cell.x,
            (span.1 + 1) as f32 * self.base_cell.y,
        );
        self.rebuild();
    }

    /// Attaches the image at `path`, scaled to the widget's current size.
    ///
    /// The image keeps that size if the widget is spanned afterwards.
    pub fn set_image(&mut self, images: &mut ImageStore, path: impl AsRef<Path>) -> Result<(), UiError> {
        let id = images.load_scaled(path, self.dimensions)?;
        let size = images.size_of(id).unwrap_or(self.dimensions);
        self.image = Some(AttachedImage { id, size });
        Ok(())
    }

    /// Attaches an image that is already in a store, drawn at `size`.
    pub fn set_image_id(&mut self, image: ImageId, size: impl Into<Vec2>) {
        self.image = Some(AttachedImage { id: image, size: size.into() });
    }

    /// Draws a `width`-pixel frame just outside the widget.
    ///
    /// A zero-width border is a configuration error.
    pub fn set_border(&mut self, color: impl Into<Color>, width: f32) -> Result<(), UiError> {
        if !(width.is_finite() && width > 0.0) {
            log::warn!("rejected border of width {width} on widget at {:?}", self.pos);
            return Err(UiError::BorderWidth(width));
        }
        self.border = Some(Border { color: color.into(), width });
        self.rebuild();
        Ok(())
    }

    fn rebuild(&mut self) {
        let rect = self.rect();
        self.rect = RectCmd::new(rect, self.color, self.style);
        self.border_rect = self
            .border
            .map(|b| RectCmd::new(rect.inflate(b.width), b.color, RectStyle::Outline { width: b.width }));
    }

    // ── painting ──────────────────────────────────────────────────────────

    pub(crate) fn draw_image(&self, painter: &mut Painter<'_>) {
        if let Some(img) = self.image {
            painter.image(img.id, self.pos, img.size);
        }
    }

    pub(crate) fn draw_border(&self, painter: &mut Painter<'_>) {
        if let Some(border) = &self.border_rect {
            painter.rect(border);
        }
    }
}

impl Widget for RectWidget {
    fn bounds(&self) -> Rect {
        self.rect()
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        painter.rect(&self.rect);
        self.draw_image(painter);
        self.draw_border(painter);
    }
}
