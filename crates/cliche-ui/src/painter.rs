use cliche_engine::coords::Vec2;
use cliche_engine::image::ImageId;
use cliche_engine::paint::Color;
use cliche_engine::scene::{DrawList, RectCmd, ZIndex};
use cliche_engine::text::FontId;

/// Drawing surface passed to [`Widget::draw`](crate::widget::Widget::draw).
///
/// Wraps the engine's `DrawList`. Every call lands one layer above the
/// previous one, so paint order is call order.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Records a prebuilt rectangle primitive.
    pub fn rect(&mut self, cmd: &RectCmd) {
        let z = self.next_z();
        self.draw_list.push_rect_cmd(z, cmd.clone());
    }

    /// Blits an already-scaled image with its top-left at `origin`.
    pub fn image(&mut self, image: ImageId, origin: Vec2, size: Vec2) {
        let z = self.next_z();
        self.draw_list.push_image(z, image, origin, size);
    }

    /// Single line of text with its top-left at `origin`.
    pub fn text(&mut self, text: &str, font: FontId, size: f32, color: Color, origin: Vec2) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, color, origin);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
