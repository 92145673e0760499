use cliche_engine::coords::{Rect, Vec2};
use cliche_engine::paint::Color;
use cliche_engine::text::{FontId, TextMeasure};

use crate::config::UiConfig;
use crate::error::UiError;
use crate::event::Clickable;
use crate::grid::GridPos;
use crate::painter::Painter;
use crate::panel::{PanelId, PanelTable};
use crate::widget::Widget;
use crate::widgets::button::RectButton;

/// Text attached to a widget: the string plus how to render it.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub value: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
}

impl Label {
    pub fn new(value: impl Into<String>, font: FontId, size: f32, color: impl Into<Color>) -> Self {
        Self { value: value.into(), font, size, color: color.into() }
    }

    /// Label sized by `config.text_size`.
    pub fn from_config(config: &UiConfig, value: impl Into<String>, font: FontId, color: impl Into<Color>) -> Self {
        Self::new(value, font, config.text_size, color)
    }
}

/// A [`RectButton`] with a single line of text centered on it.
///
/// The text is measured whenever it changes; centering follows the button's
/// current size, so spanning the button keeps the text in the middle.
///
/// # Example
/// ```rust,ignore
/// let label = Label::new("Play", font, 18.0, (255, 255, 255, 255));
/// let mut play = TextButton::new(&panels, menu, (0, 1), label, &scene.fonts)?;
/// play.set_span((2, 0));
/// play.set_text(&scene.fonts, "Resume");
/// ```
#[derive(Debug, Clone)]
pub struct TextButton {
    button: RectButton,
    label: Label,
    /// Measured size of `label.value`.
    text_size: Vec2,
}

impl TextButton {
    pub fn new(
        panels: &PanelTable,
        parent: PanelId,
        cell: impl Into<GridPos>,
        label: Label,
        fonts: &impl TextMeasure,
    ) -> Result<Self, UiError> {
        let button = RectButton::new(panels, parent, cell)?;
        let text_size = fonts.measure_text(&label.value, label.font, label.size);
        Ok(Self { button, label, text_size })
    }

    #[inline]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Size of the current text as last measured.
    #[inline]
    pub fn text_size(&self) -> Vec2 {
        self.text_size
    }

    /// Top-left of the text block so that it is centered on the button.
    pub fn text_origin(&self) -> Vec2 {
        let half = self.button.dimensions() / 2.0;
        let half_text = self.text_size / 2.0;
        self.button.pos() + (half - half_text)
    }

    #[inline]
    pub fn button(&self) -> &RectButton {
        &self.button
    }

    #[inline]
    pub fn button_mut(&mut self) -> &mut RectButton {
        &mut self.button
    }

    /// Replaces the text and re-measures it.
    pub fn set_text(&mut self, fonts: &impl TextMeasure, value: impl Into<String>) {
        self.label.value = value.into();
        self.text_size = fonts.measure_text(&self.label.value, self.label.font, self.label.size);
    }

    pub fn set_text_color(&mut self, color: impl Into<Color>) {
        self.label.color = color.into();
    }

    /// Spans the button over extra cells; the text stays centered.
    pub fn set_span(&mut self, span: (u32, u32)) {
        self.button.widget_mut().set_span(span);
    }
}

impl Clickable for TextButton {
    fn hit_region(&self) -> Rect {
        self.button.hit_region()
    }
}

impl Widget for TextButton {
    fn bounds(&self) -> Rect {
        self.button.bounds()
    }

    /// Paints rect, border, image, then the text on top.
    fn draw(&self, painter: &mut Painter<'_>) {
        let widget = self.button.widget();
        painter.rect(widget.primitive());
        widget.draw_border(painter);
        widget.draw_image(painter);
        painter.text(
            &self.label.value,
            self.label.font,
            self.label.size,
            self.label.color,
            self.text_origin(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cliche_engine::input::{InputEvent, MouseButton};
    use cliche_engine::scene::{DrawCmd, DrawList};
    use crate::grid::GridSpec;

    /// Fixed-advance metrics: every char is half the font size wide.
    struct Mono;

    impl TextMeasure for Mono {
        fn measure_text(&self, text: &str, _font: FontId, size: f32) -> Vec2 {
            Vec2::new(text.chars().count() as f32 * size * 0.5, size)
        }
    }

    fn button(text: &str) -> TextButton {
        let mut t = PanelTable::new();
        let root = t.add_root(GridSpec::new((100.0, 40.0), 2, 2), None).unwrap();
        let label = Label::new(text, FontId::from_index(0), 10.0, Color::white());
        TextButton::new(&t, root, (1, 1), label, &Mono).unwrap()
    }

    #[test]
    fn text_is_centered_on_button() {
        let b = button("abcd");
        assert_eq!(b.text_size(), Vec2::new(20.0, 10.0));
        // Button at (100, 40) sized 100x40; half = (50, 20), half text = (10, 5).
        assert_eq!(b.text_origin(), Vec2::new(140.0, 55.0));
    }

    #[test]
    fn set_text_recenters_from_new_value_each_time() {
        let mut b = button("ab");
        b.set_text(&Mono, "abcdefgh");
        assert_eq!(b.text_size().x, 40.0);
        assert_eq!(b.text_origin().x, 100.0 + 50.0 - 20.0);

        b.set_text(&Mono, "a");
        assert_eq!(b.label().value, "a");
        assert_eq!(b.text_size().x, 5.0);
        assert_eq!(b.text_origin().x, 100.0 + 50.0 - 2.5);
    }

    #[test]
    fn span_keeps_text_centered() {
        let mut b = button("abcd");
        b.set_span((0, 1));
        assert_eq!(b.button().dimensions(), Vec2::new(100.0, 80.0));
        assert_eq!(b.text_origin(), Vec2::new(140.0, 40.0 + 40.0 - 5.0));
    }

    #[test]
    fn draw_puts_text_last() {
        let mut b = button("go");
        b.button_mut().widget_mut().set_border(Color::white(), 1.0).unwrap();
        b.set_text_color((255, 0, 0, 255));

        let mut list = DrawList::new();
        b.draw(&mut Painter::new(&mut list));

        let cmds: Vec<&DrawCmd> = list.iter_in_paint_order().map(|i| &i.cmd).collect();
        assert_eq!(cmds.len(), 3);
        match cmds[2] {
            DrawCmd::Text(t) => {
                assert_eq!(t.text, "go");
                assert_eq!(t.color, Color::from_srgb_u8(255, 0, 0, 255));
                assert_eq!(t.origin, b.text_origin());
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn label_from_config_takes_text_size() {
        let t = PanelTable::with_config(UiConfig::new().text_size(12.0));
        let label = Label::from_config(t.config(), "abc", FontId::from_index(0), Color::white());
        assert_eq!(label.size, 12.0);
        assert_eq!(Mono.measure_text(&label.value, label.font, label.size), Vec2::new(18.0, 12.0));
    }

    #[test]
    fn click_reaches_text_button() {
        let b = button("ok");
        let mut hits = 0;
        b.on_click(&InputEvent::pressed(MouseButton::Left, 150.0, 60.0), || hits += 1);
        b.on_click(&InputEvent::pressed(MouseButton::Left, 50.0, 60.0), || hits += 1);
        assert_eq!(hits, 1);
    }
}
