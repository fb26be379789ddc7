//! Swipe/drag recognition for carousel navigation.
//!
//! [`GestureRecognizer`] tracks one press → move → release sequence at a time
//! and turns it into a directional intent. Mouse and touch input go through
//! the same policy.
//!
//! # State Machine
//!
//! ```text
//! Idle --press--> Tracking --release--> Idle (maybe Swipe)
//!                    |  ^
//!                    +--+ move (reports axis)
//!                    |
//!                    +--cancel--> Idle
//! ```
//!
//! # Invariants
//!
//! 1. At most one sequence is tracked; a press while tracking is ignored.
//! 2. A swipe commits only when the horizontal delta dominates the vertical
//!    delta *and* exceeds [`SWIPE_THRESHOLD`].
//! 3. Release and cancel always return the recognizer to `Idle`.

use crate::geometry::Point;

/// Minimum horizontal travel (device-independent pixels) for a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Navigation intent produced by a committed swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Content dragged right (positive delta): show the previous slide.
    Prev,
    /// Content dragged left (negative delta): show the next slide.
    Next,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Idle,
    Tracking { start: Point },
}

/// Single-slot swipe recognizer.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    state: State,
    threshold: f32,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRecognizer {
    /// Create a recognizer with the standard threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD)
    }

    /// Create a recognizer with a custom commit distance.
    #[must_use]
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            state: State::Idle,
            threshold: threshold.max(0.0),
        }
    }

    /// Begin tracking. Returns `false` if a sequence is already in progress.
    pub fn press(&mut self, at: Point) -> bool {
        if self.is_tracking() {
            return false;
        }
        self.state = State::Tracking { start: at };
        true
    }

    /// Inspect a move within the tracked sequence.
    ///
    /// Returns `true` while the gesture reads as a horizontal swipe, meaning
    /// the host should suppress its default scroll for this move.
    pub fn motion(&self, at: Point) -> bool {
        match self.state {
            State::Idle => false,
            State::Tracking { start } => {
                let (dx, dy) = at.delta_from(start);
                dx.abs() > dy.abs()
            }
        }
    }

    /// Finish the sequence and decide whether it was a swipe.
    pub fn release(&mut self, at: Point) -> Option<Swipe> {
        let State::Tracking { start, .. } = std::mem::replace(&mut self.state, State::Idle) else {
            return None;
        };
        let (dx, dy) = at.delta_from(start);
        let swipe = classify(dx, dy, self.threshold);
        tracing::trace!(dx, dy, ?swipe, "gesture released");
        swipe
    }

    /// Abort the sequence without navigating. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        let was_tracking = self.is_tracking();
        self.state = State::Idle;
        was_tracking
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, State::Tracking { .. })
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

/// Apply the swipe policy to a final displacement.
#[must_use]
pub fn classify(dx: f32, dy: f32, threshold: f32) -> Option<Swipe> {
    if dx.abs() <= dy.abs() || dx.abs() <= threshold {
        return None;
    }
    if dx > 0.0 {
        Some(Swipe::Prev)
    } else {
        Some(Swipe::Next)
    }
}
