//! Slide transition strategies and their per-frame visual state.
//!
//! Both strategies run for a fixed, non-cancelable [`TRANSITION_DURATION`].
//! The carousel refuses new navigation while one is in flight, so there is
//! never more than one [`Transition`] to interpolate.

use std::time::Duration;

/// Fixed duration of every slide transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// How a slide change is animated. Fixed per carousel at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Move the slide track so the target slide scrolls into view.
    Displacement,
    /// Cross-fade the outgoing and incoming slides in place.
    Fade,
}

impl Strategy {
    #[must_use]
    pub fn from_fade_flag(fade_effect: bool) -> Self {
        if fade_effect {
            Self::Fade
        } else {
            Self::Displacement
        }
    }
}

/// CSS-style `ease-in-out` curve (cubic in, cubic out).
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Track offset, in percent of the viewport width, that shows `index`.
#[must_use]
pub fn track_offset_for(index: usize) -> f32 {
    -(index as f32) * 100.0
}

/// An in-flight slide change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub strategy: Strategy,
    pub started_at: Duration,
    pub duration: Duration,
}

impl Transition {
    #[must_use]
    pub fn new(from: usize, to: usize, strategy: Strategy, started_at: Duration) -> Self {
        Self {
            from,
            to,
            strategy,
            started_at,
            duration: TRANSITION_DURATION,
        }
    }

    /// Time at which settled state is applied.
    #[must_use]
    pub fn ends_at(&self) -> Duration {
        self.started_at.saturating_add(self.duration)
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Track offset (percent of viewport width) at `now`.
    ///
    /// Fade transitions keep the track at rest; slides are stacked.
    #[must_use]
    pub fn track_offset(&self, now: Duration) -> f32 {
        match self.strategy {
            Strategy::Displacement => {
                let start = track_offset_for(self.from);
                let end = track_offset_for(self.to);
                (end - start).mul_add(ease_in_out(self.progress(now)), start)
            }
            Strategy::Fade => 0.0,
        }
    }

    /// Opacity override for `slide` at `now`, if the transition animates it.
    #[must_use]
    pub fn opacity(&self, slide: usize, now: Duration) -> Option<f32> {
        if self.strategy != Strategy::Fade {
            return None;
        }
        let eased = ease_in_out(self.progress(now));
        if slide == self.to {
            Some(eased)
        } else if slide == self.from {
            Some(1.0 - eased)
        } else {
            None
        }
    }

    /// Whether `slide` carries the active marker while this transition runs.
    ///
    /// Fade marks the incoming slide immediately and keeps the outgoing one
    /// until settle. Displacement only changes markers at settle.
    #[must_use]
    pub fn is_active(&self, slide: usize) -> bool {
        match self.strategy {
            Strategy::Displacement => slide == self.from,
            Strategy::Fade => slide == self.from || slide == self.to,
        }
    }
}
