//! Autoplay timer and suspension sources.
//!
//! `is_playing` is the user's intent; the recurring task is the mechanism.
//! Suspension sources (hover, hidden page, active drag) cancel the task
//! without touching intent, and re-arm it on release only while intent is
//! still "playing" and no other source is active.

use bitflags::bitflags;

use super::{Carousel, TimerKind};

bitflags! {
    /// Active autoplay suspension sources.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Suspension: u8 {
        /// Pointer is over the carousel (only with `pause_on_hover`).
        const HOVER = 0b0000_0001;
        /// Host page is hidden.
        const HIDDEN = 0b0000_0010;
        /// A swipe/drag sequence is in progress.
        const DRAG = 0b0000_0100;
    }
}

impl<T> Carousel<T> {
    /// Arm the recurring autoplay timer and record the intent to play.
    ///
    /// No-op when autoplay is disabled, the carousel is inert, or disposed.
    /// Any existing timer is cancelled first, so repeated calls restart the
    /// period rather than stacking timers.
    pub fn start(&mut self) {
        if self.disposed || !self.config.autoplay || self.is_inert() {
            return;
        }
        self.disarm();
        let task = self
            .scheduler
            .schedule_every(self.config.autoplay_delay, TimerKind::AutoplayAdvance);
        self.autoplay_task = Some(task);
        self.is_playing = true;
        self.controls.set_playing(true);
        tracing::debug!(delay = ?self.config.autoplay_delay, "autoplay armed");
    }

    /// Cancel the autoplay timer without changing the intent to play.
    pub fn pause(&mut self) {
        if self.disarm() {
            tracing::debug!(playing = self.is_playing, "autoplay paused");
        }
    }

    /// Flip the intent to play (play/pause button, space bar).
    ///
    /// No-op when autoplay is disabled, so intent never claims playback
    /// that cannot happen.
    pub fn toggle_play(&mut self) {
        if self.disposed || !self.config.autoplay || self.is_inert() {
            return;
        }
        if self.is_playing {
            self.is_playing = false;
            self.controls.set_playing(false);
            self.pause();
        } else {
            self.is_playing = true;
            self.controls.set_playing(true);
            self.start();
        }
    }

    fn disarm(&mut self) -> bool {
        match self.autoplay_task.take() {
            Some(task) => self.scheduler.cancel(task),
            None => false,
        }
    }

    /// Begin a suspension from `source`.
    pub(crate) fn suspend(&mut self, source: Suspension) {
        self.suspensions.insert(source);
        self.pause();
    }

    /// End a suspension from `source`, re-arming if nothing else holds it.
    pub(crate) fn resume(&mut self, source: Suspension) {
        self.suspensions.remove(source);
        if self.is_playing && self.suspensions.is_empty() {
            self.start();
        }
    }

    /// Whether autoplay is intended (independent of suspensions).
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether the recurring timer is currently scheduled.
    #[must_use]
    pub fn is_autoplay_armed(&self) -> bool {
        self.autoplay_task.is_some()
    }

    /// Carousel time of the next autoplay advance, if armed.
    #[must_use]
    pub fn next_autoplay_at(&self) -> Option<std::time::Duration> {
        self.autoplay_task.and_then(|task| self.scheduler.due(task))
    }

    #[must_use]
    pub fn suspensions(&self) -> Suspension {
        self.suspensions
    }
}
