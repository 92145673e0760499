use cliche_engine::paint::Color;

/// Stroke width meaning "fill the whole rectangle".
pub const FILLED: f32 = 0.0;

/// Outline width used by `set_solid(false)` unless configured otherwise.
pub const DEFAULT_OUTLINE_WIDTH: f32 = 1.0;

/// Font size given to labels built with [`Label::from_config`](crate::widgets::text_button::Label::from_config).
pub const DEFAULT_TEXT_SIZE: f32 = 16.0;

/// Defaults applied to every widget built through a [`PanelTable`](crate::panel::PanelTable).
///
/// ```rust,ignore
/// let panels = PanelTable::with_config(
///     UiConfig::new()
///         .outline_width(2.0)
///         .fill(Color::from_srgb_u8(30, 30, 40, 255))
///         .text_size(14.0),
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Width used when a widget is switched from solid to outline.
    pub outline_width: f32,
    /// Initial color of new widgets.
    pub fill: Color,
    /// Font size for labels that do not pick their own.
    pub text_size: f32,
}

impl UiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outline_width(mut self, width: f32) -> Self {
        self.outline_width = width;
        self
    }

    pub fn fill(mut self, color: impl Into<Color>) -> Self {
        self.fill = color.into();
        self
    }

    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            outline_width: DEFAULT_OUTLINE_WIDTH,
            fill: Color::transparent(),
            text_size: DEFAULT_TEXT_SIZE,
        }
    }
}
