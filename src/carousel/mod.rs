//! The carousel aggregate: slide index, transition locking and settle.
//!
//! A [`Carousel`] owns every piece of mutable state for one widget instance:
//! the settled index, the in-flight transition, autoplay intent, its timer
//! queue, the gesture recognizer, generated controls and subscribers.
//! Several carousels can coexist; nothing is process-global.
//!
//! # Serialization
//!
//! All navigation (keyboard, controls, gestures, autoplay) funnels through
//! [`Carousel::go_to`]. While a transition is in flight every request is
//! dropped, so at most one transition exists and settled-state writes never
//! interleave. The only asynchronous re-entries are the two timer kinds,
//! fired from [`Carousel::tick`].

mod autoplay;
mod input;
pub mod navigation;

use std::time::Duration;

use crate::config::CarouselConfig;
use crate::controls::{ControlId, Controls};
use crate::event::{CarouselEvent, Subscribers, SubscriptionId};
use crate::frame::{Frame, SlideView};
use crate::geometry::{Point, Rect};
use crate::gesture::GestureRecognizer;
use crate::scheduler::{Scheduler, TaskId};
use crate::transition::{Strategy, TRANSITION_DURATION, Transition, track_offset_for};

pub use autoplay::Suspension;

/// Timer kinds owned by a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerKind {
    AutoplayAdvance,
    TransitionComplete,
}

/// Headless carousel over opaque slide handles `T`.
#[derive(Debug)]
pub struct Carousel<T> {
    slides: Vec<T>,
    config: CarouselConfig,
    strategy: Strategy,
    current_index: usize,
    transition: Option<Transition>,
    is_playing: bool,
    autoplay_task: Option<TaskId>,
    suspensions: Suspension,
    scheduler: Scheduler<TimerKind>,
    gesture: GestureRecognizer,
    controls: Controls,
    subscribers: Subscribers,
    disposed: bool,
}

impl<T> Carousel<T> {
    /// Build a carousel over `slides`.
    ///
    /// Places slide 0 without animation or notifications, then starts
    /// autoplay if configured. With zero or one slide the carousel is inert.
    pub fn new(slides: Vec<T>, config: CarouselConfig) -> Self {
        let controls = Controls::generate(&config, slides.len());
        let mut carousel = Self {
            slides,
            config,
            strategy: Strategy::from_fade_flag(config.fade_effect),
            current_index: 0,
            transition: None,
            is_playing: false,
            autoplay_task: None,
            suspensions: Suspension::empty(),
            scheduler: Scheduler::new(),
            gesture: GestureRecognizer::new(),
            controls,
            subscribers: Subscribers::new(),
            disposed: false,
        };

        if !carousel.slides.is_empty() {
            carousel.set_slide(0);
        }
        if carousel.config.autoplay {
            carousel.start();
        }
        tracing::debug!(
            slides = carousel.slides.len(),
            strategy = ?carousel.strategy,
            playing = carousel.is_playing,
            "carousel created"
        );
        carousel
    }

    /// Apply settled state for `index` without animating.
    fn set_slide(&mut self, index: usize) {
        self.current_index = index;
        self.controls.set_current(index);
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Request a transition to `target`, applying the boundary policy.
    ///
    /// Returns `true` if a transition started. Requests are dropped while
    /// another transition runs, when the resolved target is already current,
    /// when the carousel is inert, and after disposal.
    pub fn go_to(&mut self, target: isize) -> bool {
        if self.disposed || self.is_inert() {
            return false;
        }
        if self.transition.is_some() {
            tracing::trace!(requested = target, "navigation dropped: transition in flight");
            return false;
        }

        let to = navigation::resolve_target(target, self.slides.len(), self.config.loop_slides);
        let from = self.current_index;
        if to == from {
            return false;
        }

        self.subscribers
            .emit(&CarouselEvent::SlideChangeRequested { from, to });
        self.begin_transition(from, to);
        true
    }

    /// Advance one slide.
    pub fn next(&mut self) -> bool {
        self.go_to(navigation::step(self.current_index, true))
    }

    /// Go back one slide.
    pub fn prev(&mut self) -> bool {
        self.go_to(navigation::step(self.current_index, false))
    }

    fn begin_transition(&mut self, from: usize, to: usize) {
        let started_at = self.scheduler.now();
        self.transition = Some(Transition::new(from, to, self.strategy, started_at));
        self.scheduler
            .schedule_once(TRANSITION_DURATION, TimerKind::TransitionComplete);
        tracing::debug!(from, to, strategy = ?self.strategy, "transition started");
    }

    /// Apply settled state once the fixed transition duration has elapsed.
    fn complete_transition(&mut self) {
        let Some(transition) = self.transition.take() else {
            return;
        };
        if self.disposed {
            tracing::trace!(to = transition.to, "completion after dispose ignored");
            return;
        }
        self.set_slide(transition.to);
        tracing::debug!(index = transition.to, "transition settled");
        self.subscribers.emit(&CarouselEvent::SlideChanged {
            index: transition.to,
        });
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    /// Advance the carousel clock to `now`, firing every timer due on the way.
    ///
    /// `now` is a monotonic timestamp from a host-chosen origin. Earlier
    /// timestamps are ignored. Autoplay fires at most once per call, so a
    /// long gap (first tick against an epoch origin, resume after sleep)
    /// advances one slide rather than replaying every missed period.
    pub fn tick(&mut self, now: Duration) {
        while let Some((_, kind)) = self.scheduler.pop_due(now) {
            match kind {
                TimerKind::AutoplayAdvance => {
                    tracing::trace!(at = ?self.scheduler.now(), "autoplay tick");
                    self.next();
                }
                TimerKind::TransitionComplete => self.complete_transition(),
            }
        }
        self.scheduler.settle(now);
    }

    /// Advance the carousel clock by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        let now = self.scheduler.now().saturating_add(dt);
        self.tick(now);
    }

    /// Current carousel clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    /// Subscribe to `slide-change-requested` and `slide-changed`.
    ///
    /// Subscribing to a disposed carousel is accepted but never delivers.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&CarouselEvent) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // ------------------------------------------------------------------
    // Controls
    // ------------------------------------------------------------------

    /// Trigger a generated control as if it had been clicked.
    ///
    /// Returns `true` when the control exists and its action took effect.
    pub fn activate(&mut self, id: ControlId) -> bool {
        if self.disposed || !self.controls.contains(id) {
            return false;
        }
        tracing::trace!(?id, "control activated");
        match id {
            ControlId::Prev => self.prev(),
            ControlId::Next => self.next(),
            ControlId::Dot(index) => self.go_to(index as isize),
            ControlId::PlayPause => {
                self.toggle_play();
                true
            }
        }
    }

    /// Record where the host laid out a generated control.
    pub fn set_control_bounds(&mut self, id: ControlId, bounds: Rect) -> bool {
        self.controls.set_bounds(id, bounds)
    }

    /// Topmost generated control under `point`.
    #[must_use]
    pub fn control_at(&self, point: Point) -> Option<ControlId> {
        self.controls.hit_test(point)
    }

    #[must_use]
    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Tear down: cancel autoplay and clear the intent to play, then drop
    /// subscribers, controls and gesture state. A pending transition
    /// completion stays queued but no-ops.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.pause();
        self.is_playing = false;
        self.disposed = true;
        self.suspensions = Suspension::empty();
        self.gesture.cancel();
        self.subscribers.clear();
        self.controls.clear();
        tracing::debug!("carousel disposed");
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&T> {
        self.slides.get(self.current_index)
    }

    /// A carousel with at most one slide neither navigates nor autoplays.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.slides.len() <= 1
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Visual snapshot at the current carousel clock.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let now = self.scheduler.now();
        let transition = self.transition.as_ref();

        let slides = (0..self.slides.len())
            .map(|index| SlideView {
                index,
                active: transition.map_or(index == self.current_index, |t| t.is_active(index)),
                opacity: transition.and_then(|t| t.opacity(index, now)),
            })
            .collect();

        let track_offset = match (transition, self.strategy) {
            (Some(t), _) => t.track_offset(now),
            (None, Strategy::Displacement) => track_offset_for(self.current_index),
            (None, Strategy::Fade) => 0.0,
        };

        Frame {
            current_index: self.current_index,
            track_offset,
            transition_progress: transition.map(|t| t.progress(now)),
            playing: self.is_playing,
            slides,
            controls: self.controls.iter().cloned().collect(),
        }
    }
}
