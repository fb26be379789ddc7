//! Input events the host forwards to a carousel.
//!
//! The host translates its platform events (DOM, terminal, native toolkit)
//! into these types. Mouse and touch share [`PointerEvent`] so the gesture
//! recognizer applies one policy to both.

mod event;
mod keyboard;
mod pointer;

pub use event::{InputEvent, InputResponse, Visibility};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use pointer::{PointerEvent, PointerKind, PointerSource};
