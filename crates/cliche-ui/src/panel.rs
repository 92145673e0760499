//! Panels and the table that owns them.
//!
//! A panel is a rectangle divided into a cell grid. Panels may nest: a child
//! panel names its parent by [`PanelId`] and occupies one cell of the
//! outermost ancestor's grid (see [`grid::resolve`](crate::grid::resolve)).
//!
//! Parents are referenced by index, never owned, so a child never keeps its
//! parent alive and there are no reference cycles. A parent is always added
//! before its children, which makes every id larger than its parent's and
//! guarantees ancestor walks terminate.

use std::fmt;

use cliche_engine::coords::{Rect, Vec2};

use crate::config::UiConfig;
use crate::error::UiError;
use crate::grid::{resolve, GridHost, GridPos, GridSpec};
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::rect::RectWidget;

/// Non-owning handle to a panel in a [`PanelTable`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PanelId(usize);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel#{}", self.0)
    }
}

/// A grid-divided rectangle.
#[derive(Debug, Clone)]
pub struct Panel {
    grid: GridSpec,
    parent: Option<PanelId>,
    position_in_grid: GridPos,
    widget: RectWidget,
}

impl Panel {
    #[inline]
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    #[inline]
    pub fn parent(&self) -> Option<PanelId> {
        self.parent
    }

    /// Cell occupied in the outermost ancestor's grid; `(0, 0)` for root panels.
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

    /// Color, border, image and span setters live on the underlying widget.
    #[inline]
    pub fn widget_mut(&mut self) -> &mut RectWidget {
        &mut self.widget
    }
}

impl GridHost for Panel {
    fn grid(&self) -> &GridSpec {
        &self.grid
    }

    fn pos(&self) -> Vec2 {
        self.widget.pos()
    }

    fn dimensions(&self) -> Vec2 {
        self.widget.dimensions()
    }
}

impl Widget for Panel {
    fn bounds(&self) -> Rect {
        self.widget.rect()
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        self.widget.draw(painter);
    }
}

/// Owns every panel of a UI and the defaults new widgets are built with.
#[derive(Debug, Default)]
pub struct PanelTable {
    panels: Vec<Panel>,
    config: UiConfig,
}

impl PanelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self { panels: Vec::new(), config }
    }

    #[inline]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Adds a top-level panel covering its whole grid, at `pos` or the origin.
    pub fn add_root(&mut self, grid: GridSpec, pos: Option<Vec2>) -> Result<PanelId, UiError> {
        grid.validate()?;
        let rect = Rect::from_origin_size(pos.unwrap_or_default(), grid.extent());
        let id = self.push(Panel {
            grid,
            parent: None,
            position_in_grid: GridPos::default(),
            widget: RectWidget::new(rect, &self.config),
        });
        log::debug!("{id}: root panel at {:?}, {:?}", rect.origin, rect.size);
        Ok(id)
    }

    /// Adds a panel nested under `parent`, occupying `cell`.
    ///
    /// The cell is resolved against the outermost ancestor's grid and the new
    /// panel takes that ancestor's cell size. `grid` only matters for
    /// buttons later placed directly in the new panel.
    pub fn add_child(
        &mut self,
        grid: GridSpec,
        parent: PanelId,
        cell: impl Into<GridPos>,
    ) -> Result<PanelId, UiError> {
        grid.validate()?;
        let cell = cell.into();

        let placement = {
            let chain = self.chain(parent)?;
            resolve(cell, &grid, Vec2::zero(), &chain[..])?
        };

        let id = self.push(Panel {
            grid,
            parent: Some(parent),
            position_in_grid: cell,
            widget: RectWidget::new(placement.rect(), &self.config),
        });
        log::debug!(
            "{id}: nested in {parent} at cell ({}, {}) -> {:?}, {:?}",
            cell.col, cell.row, placement.pos, placement.dimensions
        );
        Ok(id)
    }

    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(id.0)
    }

    pub fn get_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(id.0)
    }

    /// Like [`get`](Self::get) but reports an unknown id as an error.
    pub fn panel(&self, id: PanelId) -> Result<&Panel, UiError> {
        self.get(id).ok_or(UiError::UnknownPanel(id))
    }

    /// `id` followed by each ancestor, ending at the outermost panel.
    ///
    /// Built fresh on every call.
    pub fn chain(&self, id: PanelId) -> Result<Vec<&Panel>, UiError> {
        let mut chain = Vec::new();
        let mut next = Some(id);
        while let Some(cur) = next {
            let panel = self.panel(cur)?;
            chain.push(panel);
            next = panel.parent;
        }
        Ok(chain)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PanelId, &Panel)> {
        self.panels.iter().enumerate().map(|(i, p)| (PanelId(i), p))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    fn push(&mut self, panel: Panel) -> PanelId {
        let id = PanelId(self.panels.len());
        self.panels.push(panel);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(cell: (f32, f32), cols: u32, rows: u32) -> GridSpec {
        GridSpec::new(cell, cols, rows)
    }

    // ── roots ─────────────────────────────────────────────────────────────

    #[test]
    fn root_covers_whole_grid() {
        let mut t = PanelTable::new();
        let id = t.add_root(grid((20.0, 30.0), 4, 3), Some(Vec2::new(5.0, 6.0))).unwrap();
        let p = t.panel(id).unwrap();
        assert_eq!(p.pos(), Vec2::new(5.0, 6.0));
        assert_eq!(p.dimensions(), Vec2::new(80.0, 90.0));
        assert_eq!(p.position_in_grid(), GridPos::new(0, 0));
        assert!(p.parent().is_none());
    }

    #[test]
    fn root_defaults_to_origin() {
        let mut t = PanelTable::new();
        let id = t.add_root(grid((10.0, 10.0), 1, 1), None).unwrap();
        assert_eq!(t.panel(id).unwrap().pos(), Vec2::zero());
    }

    #[test]
    fn root_rejects_degenerate_grid() {
        let mut t = PanelTable::new();
        assert!(matches!(
            t.add_root(grid((0.0, 10.0), 2, 2), None),
            Err(UiError::InvalidGrid(_))
        ));
        assert!(t.is_empty());
    }

    // ── nesting ───────────────────────────────────────────────────────────

    #[test]
    fn child_takes_one_root_cell() {
        let mut t = PanelTable::new();
        let root = t.add_root(grid((100.0, 50.0), 3, 2), Some(Vec2::new(10.0, 20.0))).unwrap();
        let child = t.add_child(grid((10.0, 10.0), 5, 5), root, (2, 1)).unwrap();

        let p = t.panel(child).unwrap();
        assert_eq!(p.pos(), Vec2::new(210.0, 70.0));
        assert_eq!(p.dimensions(), Vec2::new(100.0, 50.0));
        assert_eq!(p.parent(), Some(root));
    }

    #[test]
    fn deep_nesting_resolves_against_root_grid() {
        let mut t = PanelTable::new();
        let root = t.add_root(grid((40.0, 40.0), 4, 4), Some(Vec2::new(100.0, 100.0))).unwrap();
        let a = t.add_child(grid((7.0, 3.0), 9, 9), root, (1, 1)).unwrap();
        let b = t.add_child(grid((2.0, 2.0), 2, 2), a, (3, 0)).unwrap();
        let c = t.add_child(grid((1.0, 1.0), 1, 1), b, (0, 3)).unwrap();

        for id in [a, b, c] {
            assert_eq!(t.panel(id).unwrap().dimensions(), Vec2::new(40.0, 40.0));
        }
        assert_eq!(t.panel(b).unwrap().pos(), Vec2::new(220.0, 100.0));
        assert_eq!(t.panel(c).unwrap().pos(), Vec2::new(100.0, 220.0));
        let chain = t.chain(c).unwrap();
        assert_eq!(chain.len(), 4);
        assert!(chain[3].parent().is_none());
    }

    #[test]
    fn child_outside_root_grid_is_rejected() {
        let mut t = PanelTable::new();
        let root = t.add_root(grid((10.0, 10.0), 2, 2), None).unwrap();
        let err = t.add_child(grid((1.0, 1.0), 50, 50), root, (2, 0)).unwrap_err();
        assert!(matches!(err, UiError::CellOutOfBounds { cols: 2, rows: 2, .. }));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn unknown_parent_is_rejected() {
        let mut other = PanelTable::new();
        other.add_root(grid((1.0, 1.0), 1, 1), None).unwrap();
        let foreign = other.add_root(grid((1.0, 1.0), 1, 1), None).unwrap();

        let mut t = PanelTable::new();
        let err = t.add_child(grid((1.0, 1.0), 1, 1), foreign, (0, 0)).unwrap_err();
        assert!(matches!(err, UiError::UnknownPanel(id) if id == foreign));
    }

    #[test]
    fn chain_is_fresh_per_call() {
        let mut t = PanelTable::new();
        let r1 = t.add_root(grid((10.0, 10.0), 2, 2), None).unwrap();
        let r2 = t.add_root(grid((10.0, 10.0), 2, 2), Some(Vec2::new(500.0, 0.0))).unwrap();
        let c1 = t.add_child(grid((5.0, 5.0), 1, 1), r1, (1, 1)).unwrap();
        let c2 = t.add_child(grid((5.0, 5.0), 1, 1), r2, (1, 1)).unwrap();

        assert_eq!(t.chain(c1).unwrap().len(), 2);
        assert_eq!(t.chain(c2).unwrap().len(), 2);
        assert_eq!(t.panel(c1).unwrap().pos(), Vec2::new(10.0, 10.0));
        assert_eq!(t.panel(c2).unwrap().pos(), Vec2::new(510.0, 10.0));
    }

    #[test]
    fn panels_use_table_config() {
        let cfg = UiConfig::new().fill((1, 2, 3, 255));
        let mut t = PanelTable::with_config(cfg.clone());
        let id = t.add_root(grid((1.0, 1.0), 1, 1), None).unwrap();
        assert_eq!(t.panel(id).unwrap().widget().color(), cfg.fill);
        assert_eq!(t.iter().count(), 1);
    }
}
