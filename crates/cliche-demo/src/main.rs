use std::cell::Cell;

use anyhow::{Context, Result};
use cliche_engine::logging::{init_logging, LoggingConfig};
use cliche_engine::scene::DrawCmd;
use cliche_ui::prelude::*;

/// Builds a small nested layout without a window, feeds it a few pointer
/// events and logs the recorded draw stream.
///
/// Usage: `cliche-demo [IMAGE]` — the optional image is scaled onto the
/// title bar.
fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut ui = UiScene::with_config(UiConfig::new().outline_width(2.0).text_size(18.0));
    let font = match load_font() {
        Some(bytes) => ui.load_font(&bytes).context("loading system font")?,
        None => {
            log::warn!("no system font found, text will measure as empty");
            FontId::from_index(0)
        }
    };

    let mut panels = ui.panel_table();
    let root = panels
        .add_root(GridSpec::new((120.0, 60.0), 4, 3), Some(Vec2::new(20.0, 20.0)))
        .context("root panel")?;
    let toolbar = panels
        .add_child(GridSpec::new((30.0, 30.0), 4, 2), root, (3, 0))
        .context("toolbar panel")?;

    let root_panel = panels.get_mut(root).context("root panel vanished")?;
    root_panel.widget_mut().set_color((24, 24, 32, 255));
    root_panel.widget_mut().set_border((90, 90, 110, 255), 3.0)?;

    let mut title = RectButton::new(&panels, root, (0, 0))?;
    title.widget_mut().set_span((2, 0));
    title.widget_mut().set_color((50, 70, 120, 255));
    if let Some(path) = std::env::args().nth(1) {
        title
            .widget_mut()
            .set_image(&mut ui.images, &path)
            .with_context(|| format!("attaching image {path}"))?;
    }

    let mut close = RectButton::new(&panels, toolbar, (3, 0))?;
    close.widget_mut().set_color((200, 50, 50, 255));
    close.widget_mut().set_solid(false)?;

    let mut play = TextButton::new(
        &panels,
        root,
        (1, 1),
        Label::from_config(panels.config(), "Play", font, (255, 255, 255, 255)),
        &ui.fonts,
    )?;
    play.set_span((1, 0));
    play.button_mut().widget_mut().set_color((40, 140, 80, 255));

    // ── input ─────────────────────────────────────────────────────────────
    let plays = Cell::new(0);
    let closed = Cell::new(false);
    let center = play.bounds().center();
    let events = [
        InputEvent::pressed(MouseButton::Left, center.x, center.y),
        InputEvent::released(MouseButton::Left, center.x, center.y),
        InputEvent::pressed(MouseButton::Right, center.x, center.y),
        InputEvent::released(MouseButton::Left, close.pos().x + 1.0, close.pos().y + 1.0),
    ];
    for event in &events {
        play.on_click(event, || plays.set(plays.get() + 1));
        close.on_release(event, || closed.set(true));
    }
    play.set_text(&ui.fonts, format!("Played x{}", plays.get()));
    log::info!("play clicked {} time(s), close released: {}", plays.get(), closed.get());

    // ── paint ─────────────────────────────────────────────────────────────
    let root_panel = panels.panel(root)?;
    let toolbar_panel = panels.panel(toolbar)?;
    let draw_list = ui.frame(&[root_panel, toolbar_panel, &title, &close, &play]);

    for item in draw_list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Rect(r) => log::info!("rect  {:?} {:?}", r.rect, r.style),
            DrawCmd::Image(i) => log::info!("image {:?} at {:?}", i.image, i.origin),
            DrawCmd::Text(t) => log::info!("text  {:?} at {:?}", t.text, t.origin),
        }
    }
    log::info!("{} draw commands recorded", draw_list.len());
    Ok(())
}

fn load_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}
