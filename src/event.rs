//! Carousel notifications and per-instance subscriber registry.

use std::fmt;

/// Observable notification emitted by a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum CarouselEvent {
    /// A slide change was accepted and its transition is about to run.
    SlideChangeRequested { from: usize, to: usize },
    /// A transition settled on `index`.
    SlideChanged { index: usize },
}

impl CarouselEvent {
    /// Stable kebab-case name of this notification kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SlideChangeRequested { .. } => "slide-change-requested",
            Self::SlideChanged { .. } => "slide-changed",
        }
    }
}

/// Handle returned by [`Subscribers::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&CarouselEvent) + 'static>;

/// Ordered list of notification callbacks.
///
/// Callbacks receive read-only snapshots and run in subscription order.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl Subscribers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every notification.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&CarouselEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Deliver a notification to every subscriber.
    pub fn emit(&mut self, event: &CarouselEvent) {
        tracing::trace!(event = event.name(), subscribers = self.entries.len(), "emit");
        for (_, callback) in &mut self.entries {
            callback(event);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
