//! Grid layout resolution.
//!
//! Panels divide their area into equally sized cells. A widget is placed by
//! naming a cell; the resolver turns that into an absolute pixel position and
//! size.
//!
//! Nested panels do not stack their own grids: every nested panel resolves
//! against the **outermost** ancestor's cell grid, whatever the intermediate
//! panels declare. Only one level of grid nesting is therefore effective.

use cliche_engine::coords::{Rect, Vec2};

use crate::error::UiError;

/// A cell coordinate: column, then row, both zero-based.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct GridPos {
    pub col: u32,
    pub row: u32,
}

impl GridPos {
    #[inline]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

impl From<(u32, u32)> for GridPos {
    #[inline]
    fn from((col, row): (u32, u32)) -> Self {
        GridPos::new(col, row)
    }
}

/// Cell layout of a panel: the size of one cell and how many there are.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridSpec {
    pub cell_size: Vec2,
    pub cols: u32,
    pub rows: u32,
}

impl GridSpec {
    pub fn new(cell_size: impl Into<Vec2>, cols: u32, rows: u32) -> Self {
        Self { cell_size: cell_size.into(), cols, rows }
    }

    /// Pixel size of the whole grid.
    #[inline]
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.cols as f32 * self.cell_size.x, self.rows as f32 * self.cell_size.y)
    }

    pub(crate) fn validate(&self) -> Result<(), UiError> {
        validate_cell_size(self.cell_size)
    }
}

/// Absolute geometry of a placed widget.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub pos: Vec2,
    pub dimensions: Vec2,
}

impl Placement {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.pos, self.dimensions)
    }
}

/// Geometry the resolver needs from an ancestor panel.
pub trait GridHost {
    fn grid(&self) -> &GridSpec;
    /// Absolute top-left in logical pixels.
    fn pos(&self) -> Vec2;
    /// Absolute size in logical pixels.
    fn dimensions(&self) -> Vec2;
}

fn validate_cell_size(cell_size: Vec2) -> Result<(), UiError> {
    if cell_size.is_finite() && cell_size.x > 0.0 && cell_size.y > 0.0 {
        Ok(())
    } else {
        Err(UiError::InvalidGrid(cell_size))
    }
}

/// Length of the offset table `0, step, 2*step, ...` for offsets below `extent`.
#[inline]
fn cells_along(extent: f32, step: f32) -> u32 {
    if extent <= 0.0 {
        0
    } else {
        (extent / step).ceil() as u32
    }
}

/// Pixel offset of `cell` inside an area of size `extent` stepped by `cell_size`.
///
/// The area is split into `ceil(extent / cell_size)` cells per axis; a cell
/// past that is rejected.
pub fn cell_offset(extent: Vec2, cell_size: Vec2, cell: GridPos) -> Result<Vec2, UiError> {
    validate_cell_size(cell_size)?;

    let cols = cells_along(extent.x, cell_size.x);
    let rows = cells_along(extent.y, cell_size.y);
    if cell.col >= cols || cell.row >= rows {
        return Err(UiError::CellOutOfBounds { cell, cols, rows });
    }

    Ok(Vec2::new(cell.col as f32 * cell_size.x, cell.row as f32 * cell_size.y))
}

/// Resolves `cell` to absolute geometry.
///
/// `ancestors` runs from the immediate parent up to the outermost panel and
/// must be built fresh for each call.
///
/// - No ancestors: the cell is taken from `own` and offset from `origin`.
/// - Otherwise only the outermost ancestor matters: its grid supplies both
///   the offset table and the cell size, and its position is the origin.
pub fn resolve<H: GridHost + ?Sized>(
    cell: GridPos,
    own: &GridSpec,
    origin: Vec2,
    ancestors: &[&H],
) -> Result<Placement, UiError> {
    match ancestors.last() {
        None => {
            let offset = cell_offset(own.extent(), own.cell_size, cell)?;
            Ok(Placement { pos: origin + offset, dimensions: own.cell_size })
        }
        Some(root) => {
            let cell_size = root.grid().cell_size;
            let offset = cell_offset(root.dimensions(), cell_size, cell)?;
            Ok(Placement { pos: root.pos() + offset, dimensions: cell_size })
        }
    }
}
