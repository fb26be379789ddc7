//! Scripted pointer sequences for gesture tests.

#![allow(dead_code)] // Shared test helper; not every integration test uses every builder

use slidekit::{Carousel, InputResponse, PointerEvent};

/// Responses to the three events of a simulated drag.
#[derive(Clone, Copy, Debug)]
pub struct DragResponses {
    pub press: InputResponse,
    pub moved: InputResponse,
    pub release: InputResponse,
}

/// Press at a fixed origin, move halfway, release at `(dx, dy)` from origin.
pub fn drag<T>(carousel: &mut Carousel<T>, dx: f32, dy: f32) -> DragResponses {
    drag_from(carousel, (400.0, 250.0), dx, dy, false)
}

/// Same as [`drag`] but reported as touch input.
pub fn touch_drag<T>(carousel: &mut Carousel<T>, dx: f32, dy: f32) -> DragResponses {
    drag_from(carousel, (400.0, 250.0), dx, dy, true)
}

pub fn drag_from<T>(
    carousel: &mut Carousel<T>,
    origin: (f32, f32),
    dx: f32,
    dy: f32,
    touch: bool,
) -> DragResponses {
    let mark = |event: PointerEvent| if touch { event.touch() } else { event };
    let (x, y) = origin;
    let press = carousel.handle_event(mark(PointerEvent::press(x, y)).into());
    let moved = carousel.handle_event(mark(PointerEvent::move_to(x + dx / 2.0, y + dy / 2.0)).into());
    let release = carousel.handle_event(mark(PointerEvent::release(x + dx, y + dy)).into());
    DragResponses {
        press,
        moved,
        release,
    }
}
