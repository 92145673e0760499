//! Cliche UI — grid-aligned panels, buttons and text buttons on top of
//! `cliche-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cliche_ui::prelude::*;
//!
//! let mut ui = UiScene::new();
//! let font = ui.load_font(&font_bytes)?;
//!
//! let mut panels = ui.panel_table();
//! let root = panels.add_root(GridSpec::new((80.0, 40.0), 4, 6), None)?;
//! let sidebar = panels.add_child(GridSpec::new((20.0, 20.0), 4, 2), root, (0, 0))?;
//!
//! let mut quit = TextButton::new(
//!     &panels, sidebar, (0, 1),
//!     Label::from_config(panels.config(), "Quit", font, (255, 255, 255, 255)),
//!     &ui.fonts,
//! )?;
//! quit.set_span((3, 0));
//!
//! // Per input event:
//! quit.on_click(&event, || running = false);
//!
//! // Per frame:
//! let draw_list = ui.frame(&[panels.panel(root)?, &quit]);
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod painter;
pub mod panel;
pub mod scene;
pub mod widget;
pub mod widgets;

pub use error::UiError;

/// Everything needed to build a UI — import this in application code.
pub mod prelude {
    pub use crate::config::{UiConfig, DEFAULT_OUTLINE_WIDTH, DEFAULT_TEXT_SIZE, FILLED};
    pub use crate::error::UiError;
    pub use crate::event::{hit_test, Clickable, EventResult};
    pub use crate::grid::{GridPos, GridSpec, Placement};
    pub use crate::painter::Painter;
    pub use crate::panel::{Panel, PanelId, PanelTable};
    pub use crate::scene::UiScene;
    pub use crate::widget::Widget;
    pub use crate::widgets::{
        button::RectButton,
        rect::{AttachedImage, Border, RectWidget},
        text_button::{Label, TextButton},
    };

    // Re-export the engine primitives everyone needs.
    pub use cliche_engine::coords::{Rect, Vec2};
    pub use cliche_engine::input::{InputEvent, MouseButton, MouseButtonState};
    pub use cliche_engine::paint::Color;
    pub use cliche_engine::text::{FontId, TextMeasure};
}
