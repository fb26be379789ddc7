//! Notification capture for carousel tests.

#![allow(dead_code)] // Shared test helper; not every integration test uses every accessor

use std::cell::RefCell;
use std::rc::Rc;

use slidekit::{Carousel, CarouselEvent, SubscriptionId};

/// Records every notification a carousel emits, in order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<CarouselEvent>>>,
}

impl Recorder {
    /// Subscribe a new recorder to `carousel`.
    pub fn attach<T>(carousel: &mut Carousel<T>) -> (Self, SubscriptionId) {
        let recorder = Self::default();
        let sink = Rc::clone(&recorder.events);
        let id = carousel.subscribe(move |event| sink.borrow_mut().push(*event));
        (recorder, id)
    }

    pub fn events(&self) -> Vec<CarouselEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Indices reported by `slide-changed`, in order.
    pub fn settled(&self) -> Vec<usize> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                CarouselEvent::SlideChanged { index } => Some(*index),
                CarouselEvent::SlideChangeRequested { .. } => None,
            })
            .collect()
    }

    /// `(from, to)` pairs reported by `slide-change-requested`, in order.
    pub fn requested(&self) -> Vec<(usize, usize)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                CarouselEvent::SlideChangeRequested { from, to } => Some((*from, *to)),
                CarouselEvent::SlideChanged { .. } => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
