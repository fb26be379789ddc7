//! Generated carousel controls and their hit regions.
//!
//! Controls exist only for carousels with more than one slide. Their state
//! (dot highlighting, play/pause label) mirrors *settled* carousel state and
//! is exposed with the accessibility attributes a host needs to render them.

use crate::config::CarouselConfig;
use crate::geometry::{Point, Rect};

/// Identifier of a generated control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlId {
    Prev,
    Next,
    /// Position indicator for a slide.
    Dot(usize),
    PlayPause,
}

/// Render state of one control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    pub id: ControlId,
    /// Accessible label (`aria-label`).
    pub label: String,
    /// Marks the dot of the settled slide (`aria-current`).
    pub current: bool,
    /// Toggle state of the play/pause button (`aria-pressed`).
    pub pressed: bool,
}

impl Control {
    fn new(id: ControlId, label: String) -> Self {
        Self {
            id,
            label,
            current: false,
            pressed: false,
        }
    }
}

const PREV_LABEL: &str = "Previous slide";
const NEXT_LABEL: &str = "Next slide";
const PAUSE_LABEL: &str = "Pause autoplay";
const PLAY_LABEL: &str = "Start autoplay";

/// The set of controls generated for one carousel.
#[derive(Clone, Debug, Default)]
pub struct Controls {
    controls: Vec<Control>,
    /// Registered hit areas; later registrations sit on top.
    regions: Vec<(ControlId, Rect)>,
}

impl Controls {
    /// Generate controls for `slide_count` slides.
    #[must_use]
    pub fn generate(config: &CarouselConfig, slide_count: usize) -> Self {
        let mut controls = Vec::new();
        if slide_count > 1 {
            if config.show_arrows {
                controls.push(Control::new(ControlId::Prev, PREV_LABEL.to_string()));
                controls.push(Control::new(ControlId::Next, NEXT_LABEL.to_string()));
            }
            if config.show_dots {
                controls.extend(
                    (0..slide_count)
                        .map(|i| Control::new(ControlId::Dot(i), format!("Go to slide {}", i + 1))),
                );
            }
            if config.autoplay {
                controls.push(Control::new(ControlId::PlayPause, PLAY_LABEL.to_string()));
            }
        }
        Self {
            controls,
            regions: Vec::new(),
        }
    }

    /// Highlight the dot for the settled slide.
    pub fn set_current(&mut self, index: usize) {
        for control in &mut self.controls {
            if let ControlId::Dot(i) = control.id {
                control.current = i == index;
            }
        }
    }

    /// Mirror autoplay intent on the play/pause button.
    pub fn set_playing(&mut self, playing: bool) {
        if let Some(control) = self.get_mut(ControlId::PlayPause) {
            control.pressed = playing;
            control.label = if playing { PAUSE_LABEL } else { PLAY_LABEL }.to_string();
        }
    }

    #[must_use]
    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ControlId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Register where the host laid out a control.
    ///
    /// Returns `false` for controls this carousel did not generate.
    pub fn set_bounds(&mut self, id: ControlId, bounds: Rect) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.regions.retain(|(region_id, _)| *region_id != id);
        self.regions.push((id, bounds));
        true
    }

    /// Find the topmost control under `point`.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<ControlId> {
        self.regions
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(point))
            .map(|(id, _)| *id)
    }

    /// Drop every control and hit region.
    pub fn clear(&mut self) {
        self.controls.clear();
        self.regions.clear();
    }
}
