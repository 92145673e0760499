//! Click dispatch.
//!
//! There is no event routing tree: the application hands each raw
//! [`InputEvent`] to the buttons it cares about, together with the callback
//! to run. A callback fires when the event is a button event of the right
//! kind and button whose position lies inside the widget.

use cliche_engine::coords::{Rect, Vec2};
use cliche_engine::input::{InputEvent, MouseButton, MouseButtonState};

/// Result returned by the dispatch helpers on [`Clickable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The callback ran.
    Consumed,
    /// Wrong event, wrong button or outside the widget.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// Half-open point-in-rectangle test, `[min, max)` on both axes.
#[inline]
pub fn hit_test(point: Vec2, region: Rect) -> bool {
    region.contains(point)
}

fn dispatch(
    region: Rect,
    event: &InputEvent,
    state: MouseButtonState,
    button: MouseButton,
    f: impl FnOnce(),
) -> EventResult {
    match event.as_button() {
        Some(ev) if ev.state == state && ev.button == button && hit_test(ev.pos(), region) => {
            f();
            EventResult::Consumed
        }
        _ => EventResult::Ignored,
    }
}

/// A widget that can run callbacks for pointer presses and releases over it.
///
/// Arguments for the callback are captured by the closure:
///
/// ```rust,ignore
/// let mut count = 0;
/// button.on_click(&event, || count += 1);
/// ```
pub trait Clickable {
    /// Area that reacts to the pointer.
    fn hit_region(&self) -> Rect;

    /// Primary button pressed over the widget.
    fn on_click(&self, event: &InputEvent, f: impl FnOnce()) -> EventResult {
        self.on_mouse_button_click(event, MouseButton::Left, f)
    }

    /// Primary button released over the widget.
    fn on_release(&self, event: &InputEvent, f: impl FnOnce()) -> EventResult {
        self.on_mouse_button_release(event, MouseButton::Left, f)
    }

    /// `button` pressed over the widget.
    fn on_mouse_button_click(&self, event: &InputEvent, button: MouseButton, f: impl FnOnce()) -> EventResult {
        dispatch(self.hit_region(), event, MouseButtonState::Pressed, button, f)
    }

    /// `button` released over the widget.
    fn on_mouse_button_release(&self, event: &InputEvent, button: MouseButton, f: impl FnOnce()) -> EventResult {
        dispatch(self.hit_region(), event, MouseButtonState::Released, button, f)
    }
}
