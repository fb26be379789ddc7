//! Host input dispatch: keyboard bindings, gestures, hover and visibility.

use crate::gesture::Swipe;
use crate::input::{
    InputEvent, InputResponse, KeyCode, KeyEvent, PointerEvent, PointerKind, Visibility,
};

use super::{Carousel, Suspension};

impl<T> Carousel<T> {
    /// Route one host input event.
    ///
    /// The returned [`InputResponse`] tells the host whether the event was
    /// consumed and whether to suppress the platform default action.
    pub fn handle_event(&mut self, event: InputEvent) -> InputResponse {
        if self.disposed {
            return InputResponse::IGNORED;
        }
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Pointer(pointer) => self.handle_pointer(pointer),
            InputEvent::Click(point) => match self.controls.hit_test(point) {
                Some(id) => {
                    self.activate(id);
                    InputResponse::HANDLED
                }
                None => InputResponse::IGNORED,
            },
            InputEvent::HoverEnter => {
                if self.config.pause_on_hover {
                    self.suspend(Suspension::HOVER);
                    InputResponse::HANDLED
                } else {
                    InputResponse::IGNORED
                }
            }
            InputEvent::HoverLeave => {
                if self.suspensions.contains(Suspension::HOVER) {
                    self.resume(Suspension::HOVER);
                    InputResponse::HANDLED
                } else {
                    InputResponse::IGNORED
                }
            }
            InputEvent::Visibility(Visibility::Hidden) => {
                self.suspend(Suspension::HIDDEN);
                InputResponse::HANDLED
            }
            InputEvent::Visibility(Visibility::Visible) => {
                if self.suspensions.contains(Suspension::HIDDEN) {
                    self.resume(Suspension::HIDDEN);
                    InputResponse::HANDLED
                } else {
                    InputResponse::IGNORED
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> InputResponse {
        if self.is_inert() || key.has_command_modifier() {
            return InputResponse::IGNORED;
        }
        match key.code {
            KeyCode::Left => {
                self.prev();
                InputResponse::HANDLED
            }
            KeyCode::Right => {
                self.next();
                InputResponse::HANDLED
            }
            code if code.is_space() && self.config.autoplay => {
                self.toggle_play();
                InputResponse::CAPTURED
            }
            _ => InputResponse::IGNORED,
        }
    }

    fn handle_pointer(&mut self, pointer: PointerEvent) -> InputResponse {
        if !self.config.swipe_enabled || self.is_inert() {
            return InputResponse::IGNORED;
        }
        let at = pointer.position;
        match pointer.kind {
            PointerKind::Press => {
                // Presses on generated controls are clicks, not drags.
                if self.controls.hit_test(at).is_some() || !self.gesture.press(at) {
                    return InputResponse::IGNORED;
                }
                self.suspend(Suspension::DRAG);
                InputResponse::HANDLED
            }
            PointerKind::Move => {
                if !self.gesture.is_tracking() {
                    InputResponse::IGNORED
                } else if self.gesture.motion(at) {
                    InputResponse::CAPTURED
                } else {
                    InputResponse::HANDLED
                }
            }
            PointerKind::Release => {
                if !self.gesture.is_tracking() {
                    return InputResponse::IGNORED;
                }
                match self.gesture.release(at) {
                    Some(Swipe::Prev) => {
                        self.prev();
                    }
                    Some(Swipe::Next) => {
                        self.next();
                    }
                    None => {}
                }
                self.resume(Suspension::DRAG);
                InputResponse::HANDLED
            }
            PointerKind::Cancel => {
                if self.gesture.cancel() {
                    self.resume(Suspension::DRAG);
                    InputResponse::HANDLED
                } else {
                    InputResponse::IGNORED
                }
            }
        }
    }

    /// Whether a press → release sequence is being tracked.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_tracking()
    }
}
