use cliche_engine::image::ImageStore;
use cliche_engine::scene::DrawList;
use cliche_engine::text::{FontId, FontSystem};

use crate::config::UiConfig;
use crate::error::UiError;
use crate::painter::Painter;
use crate::panel::PanelTable;
use crate::widget::Widget;

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the `FontSystem` and `ImageStore` (each asset is decoded once and
/// then only borrowed), the `DrawList` that is repopulated by [`frame`] and
/// the `UiConfig` that panel tables are built from.
///
/// Whatever rasterizes the UI reads `draw_list` after each `frame` call,
/// together with `fonts` and `images` to resolve the handles it contains.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::with_config(UiConfig::new().text_size(14.0));
/// let font = ui.load_font(&std::fs::read("DejaVuSans.ttf")?)?;
/// let mut panels = ui.panel_table();
///
/// // Every frame:
/// let draw_list = ui.frame(&[&root_panel, &play_button]);
/// backend.render(draw_list, &ui.fonts, &ui.images);
/// ```
///
/// [`frame`]: UiScene::frame
pub struct UiScene {
    pub fonts: FontSystem,
    pub images: ImageStore,
    /// Draw list populated by the most recent [`frame`](UiScene::frame) call.
    pub draw_list: DrawList,
    pub config: UiConfig,
}

impl UiScene {
    pub fn new() -> Self {
        Self::with_config(UiConfig::default())
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self {
            fonts: FontSystem::new(),
            images: ImageStore::new(),
            draw_list: DrawList::new(),
            config,
        }
    }

    /// Empty panel table carrying this scene's config.
    pub fn panel_table(&self) -> PanelTable {
        PanelTable::with_config(self.config.clone())
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, UiError> {
        Ok(self.fonts.load_font(data)?)
    }

    /// Clears the draw list and paints `widgets` in order, later ones on top.
    pub fn frame(&mut self, widgets: &[&dyn Widget]) -> &mut DrawList {
        self.draw_list.clear();
        {
            let mut painter = Painter::new(&mut self.draw_list);
            for widget in widgets {
                widget.draw(&mut painter);
            }
        }
        log::trace!("frame recorded {} draw commands", self.draw_list.len());
        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cliche_engine::coords::Vec2;
    use cliche_engine::scene::DrawCmd;

    use crate::grid::GridSpec;
    use crate::widgets::button::RectButton;

    #[test]
    fn frame_replaces_previous_commands() {
        let mut panels = PanelTable::new();
        let root = panels.add_root(GridSpec::new((10.0, 10.0), 2, 2), None).unwrap();
        let button = RectButton::new(&panels, root, (1, 0)).unwrap();
        let panel = panels.panel(root).unwrap();

        let mut ui = UiScene::new();
        assert_eq!(ui.frame(&[panel, &button]).len(), 2);
        assert_eq!(ui.frame(&[&button]).len(), 1);

        match &ui.draw_list.items()[0].cmd {
            DrawCmd::Rect(r) => assert_eq!(r.rect.origin, Vec2::new(10.0, 0.0)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn panel_table_inherits_scene_config() {
        let ui = UiScene::with_config(UiConfig::new().fill((9, 9, 9, 255)).text_size(20.0));
        let mut panels = ui.panel_table();
        assert_eq!(panels.config(), &ui.config);

        let root = panels.add_root(GridSpec::new((4.0, 4.0), 1, 1), None).unwrap();
        assert_eq!(panels.panel(root).unwrap().widget().color(), ui.config.fill);
    }

    #[test]
    fn bad_font_bytes_surface_as_ui_error() {
        let mut ui = UiScene::new();
        assert!(matches!(ui.load_font(&[0, 1, 2]), Err(UiError::Font(_))));
    }
}
