//! `slidekit` - Headless carousel engine
//!
//! Owns the state of a slide carousel (index, transition locking, looping
//! policy, displacement/fade transitions, autoplay with multi-source
//! suspension and swipe recognition) while the host owns drawing, real input
//! devices and the frame clock.
//!
//! ```
//! use std::time::Duration;
//! use slidekit::{Carousel, CarouselConfig, CarouselEvent};
//!
//! let mut carousel = Carousel::new(vec!["a", "b", "c"], CarouselConfig::default());
//! carousel.subscribe(|event| {
//!     if let CarouselEvent::SlideChanged { index } = event {
//!         println!("now showing slide {index}");
//!     }
//! });
//! carousel.next();
//! carousel.advance(Duration::from_millis(500));
//! assert_eq!(carousel.current_index(), 1);
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional index/offset casts
#![allow(clippy::cast_sign_loss)] // Intentional index conversions
#![allow(clippy::cast_precision_loss)] // Slide indices are far below f32 precision limits
#![allow(clippy::cast_possible_wrap)] // Slide counts never approach isize::MAX
#![allow(clippy::module_name_repetitions)] // Allow CarouselConfig etc
#![allow(clippy::struct_excessive_bools)] // Configuration needs multiple flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::must_use_candidate)] // Navigation results are informational

pub mod carousel;
pub mod config;
pub mod controls;
pub mod error;
pub mod event;
pub mod frame;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod scheduler;
pub mod transition;

// Re-export core types at crate root
pub use carousel::{Carousel, Suspension};
pub use config::{CarouselConfig, CarouselConfigBuilder};
pub use controls::{Control, ControlId, Controls};
pub use error::{Error, Result};
pub use event::{CarouselEvent, SubscriptionId};
pub use frame::{Frame, SlideView};
pub use geometry::{Point, Rect};
pub use gesture::{GestureRecognizer, SWIPE_THRESHOLD, Swipe};
pub use transition::{Strategy, TRANSITION_DURATION, Transition};

// Re-export input types
pub use input::{
    InputEvent, InputResponse, KeyCode, KeyEvent, KeyModifiers, PointerEvent, PointerKind,
    PointerSource, Visibility,
};
