use cliche_engine::coords::Rect;

use crate::painter::Painter;

/// Something that occupies a rectangle and can paint itself.
///
/// Widgets are positioned once, in absolute pixels, when they are built, so
/// painting takes no layout arguments.
pub trait Widget {
    /// Absolute area covered by the widget (border excluded).
    fn bounds(&self) -> Rect;

    /// Record this widget's draw commands.
    fn draw(&self, painter: &mut Painter<'_>);
}
