//! Host input events routed to a carousel.

use crate::geometry::Point;
use crate::input::keyboard::KeyEvent;
use crate::input::pointer::PointerEvent;

/// Page visibility as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// An input event delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Keyboard event (the host decides whether the carousel has focus).
    Key(KeyEvent),
    /// Pointer press/move/release/cancel over the carousel.
    Pointer(PointerEvent),
    /// Activation (click/tap) at a position; dispatched to generated controls.
    Click(Point),
    /// Pointer entered the carousel region.
    HoverEnter,
    /// Pointer left the carousel region.
    HoverLeave,
    /// Page visibility changed.
    Visibility(Visibility),
}

impl From<KeyEvent> for InputEvent {
    fn from(e: KeyEvent) -> Self {
        Self::Key(e)
    }
}

impl From<PointerEvent> for InputEvent {
    fn from(e: PointerEvent) -> Self {
        Self::Pointer(e)
    }
}

impl From<Visibility> for InputEvent {
    fn from(v: Visibility) -> Self {
        Self::Visibility(v)
    }
}

/// What the carousel did with an input event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputResponse {
    /// The carousel consumed the event.
    pub handled: bool,
    /// The host should suppress the platform default (scrolling, page jump).
    pub prevent_default: bool,
}

impl InputResponse {
    /// Event was not relevant to the carousel.
    pub const IGNORED: Self = Self {
        handled: false,
        prevent_default: false,
    };

    /// Event was consumed; platform default may proceed.
    pub const HANDLED: Self = Self {
        handled: true,
        prevent_default: false,
    };

    /// Event was consumed and the platform default must be suppressed.
    pub const CAPTURED: Self = Self {
        handled: true,
        prevent_default: true,
    };
}
