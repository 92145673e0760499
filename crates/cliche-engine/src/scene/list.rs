use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });
        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;
    use crate::scene::{RectCmd, RectStyle};

    fn rect_at(x: f32) -> Rect {
        Rect::new(x, 0.0, 1.0, 1.0)
    }

    fn first_x(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Rect(r) => r.rect.origin.x,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_rect_cmd(ZIndex::new(2), RectCmd::new(rect_at(0.0), Color::black(), RectStyle::Filled));
        list.push_rect_cmd(ZIndex::new(1), RectCmd::new(rect_at(1.0), Color::black(), RectStyle::Filled));
        list.push_rect_cmd(ZIndex::new(1), RectCmd::new(rect_at(2.0), Color::black(), RectStyle::Filled));

        let xs: Vec<f32> = list.iter_in_paint_order().map(first_x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 0.0]);
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        list.push_rect_cmd(ZIndex::new(0), RectCmd::new(rect_at(0.0), Color::black(), RectStyle::Filled));
        list.clear();
        assert!(list.is_empty());

        list.push_rect_cmd(ZIndex::new(0), RectCmd::new(rect_at(5.0), Color::black(), RectStyle::Filled));
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(list.len(), 1);
    }
}
