use cliche_engine::coords::{Rect, Vec2};

use crate::error::UiError;
use crate::event::Clickable;
use crate::grid::{cell_offset, GridPos};
use crate::painter::Painter;
use crate::panel::{PanelId, PanelTable};
use crate::widget::Widget;
use crate::widgets::rect::RectWidget;

/// A clickable rectangle occupying one cell of its parent panel.
///
/// Unlike nested panels, buttons use their **immediate** parent's grid: the
/// cell size comes from the parent's `GridSpec`, and the cells available are
/// those that start inside the parent's actual dimensions.
///
/// # Example
/// ```rust,ignore
/// let mut ok = RectButton::new(&panels, toolbar, (2, 0))?;
/// ok.widget_mut().set_color((40, 160, 80, 255));
///
/// // In the event loop:
/// ok.on_click(&event, || submit(&form));
/// ```
#[derive(Debug, Clone)]
pub struct RectButton {
    parent: PanelId,
    position_in_grid: GridPos,
    widget: RectWidget,
}

impl RectButton {
    pub fn new(panels: &PanelTable, parent: PanelId, cell: impl Into<GridPos>) -> Result<Self, UiError> {
        let cell = cell.into();
        let host = panels.panel(parent)?;
        let cell_size = host.grid().cell_size;
        let offset = cell_offset(host.dimensions(), cell_size, cell)?;

        let rect = Rect::from_origin_size(host.pos() + offset, cell_size);
        log::debug!("button in {parent} at cell ({}, {}) -> {:?}", cell.col, cell.row, rect);

        Ok(Self {
            parent,
            position_in_grid: cell,
            widget: RectWidget::new(rect, panels.config()),
        })
    }

    #[inline]
    pub fn parent(&self) -> PanelId {
        self.parent
    }

    #[inline]
    pub fn position_in_grid(&self) -> GridPos {
        self.position_in_grid
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.widget.pos()
    }

    #[inline]
    pub fn dimensions(&self) -> Vec2 {
        self.widget.dimensions()
    }

    #[inline]
    pub fn widget(&self) -> &RectWidget {
        &self.widget
    }

    #[inline]
    pub fn widget_mut(&mut self) -> &mut RectWidget {
        &mut self.widget
    }
}

impl Clickable for RectButton {
    fn hit_region(&self) -> Rect {
        self.widget.rect()
    }
}

impl Widget for RectButton {
    fn bounds(&self) -> Rect {
        self.widget.rect()
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        self.widget.draw(painter);
    }
}
