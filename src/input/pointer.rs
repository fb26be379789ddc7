//! Pointer (mouse and touch) event handling.

use crate::geometry::Point;

/// Device that produced a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    /// Mouse or pen.
    Mouse,
    /// Touch contact.
    Touch,
}

/// Kind of pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// Button pressed or finger down.
    Press,
    /// Pointer moved.
    Move,
    /// Button released or finger lifted.
    Release,
    /// Sequence aborted by the platform (touchcancel, capture lost).
    Cancel,
}

/// A pointer event in host coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Position of the pointer.
    pub position: Point,
    /// Kind of event.
    pub kind: PointerKind,
    /// Device that produced the event.
    pub source: PointerSource,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub fn new(x: f32, y: f32, kind: PointerKind, source: PointerSource) -> Self {
        Self {
            position: Point::new(x, y),
            kind,
            source,
        }
    }

    /// Create a mouse press event.
    #[must_use]
    pub fn press(x: f32, y: f32) -> Self {
        Self::new(x, y, PointerKind::Press, PointerSource::Mouse)
    }

    /// Create a mouse move event.
    #[must_use]
    pub fn move_to(x: f32, y: f32) -> Self {
        Self::new(x, y, PointerKind::Move, PointerSource::Mouse)
    }

    /// Create a mouse release event.
    #[must_use]
    pub fn release(x: f32, y: f32) -> Self {
        Self::new(x, y, PointerKind::Release, PointerSource::Mouse)
    }

    /// Create a cancel event.
    #[must_use]
    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(x, y, PointerKind::Cancel, PointerSource::Mouse)
    }

    /// Mark this event as coming from a touch contact.
    #[must_use]
    pub fn touch(mut self) -> Self {
        self.source = PointerSource::Touch;
        self
    }
}
