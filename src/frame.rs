//! Per-frame visual snapshot handed to the host renderer.

use crate::controls::Control;

/// Visual state of one slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideView {
    pub index: usize,
    /// Active marker (`is-active` class, `aria-hidden="false"`).
    pub active: bool,
    /// Opacity override while a fade is running; `None` means "use the stylesheet".
    pub opacity: Option<f32>,
}

/// Everything a host needs to draw a carousel at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Settled slide index (changes only when a transition completes).
    pub current_index: usize,
    /// Track offset in percent of the viewport width (`translateX`).
    pub track_offset: f32,
    /// Linear progress of the in-flight transition, if any.
    pub transition_progress: Option<f32>,
    pub playing: bool,
    pub slides: Vec<SlideView>,
    pub controls: Vec<Control>,
}

impl Frame {
    /// Indices of slides carrying the active marker.
    #[must_use]
    pub fn active_slides(&self) -> Vec<usize> {
        self.slides
            .iter()
            .filter(|slide| slide.active)
            .map(|slide| slide.index)
            .collect()
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.transition_progress.is_none()
    }
}
