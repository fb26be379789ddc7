//! End-to-end carousel scenarios driven through the public API.
//!
//! Each test owns its carousel and advances the carousel clock explicitly,
//! so timing is deterministic.

mod common;

use common::input_sim::{drag, touch_drag};
use common::recorder::Recorder;
use common::{defaults, init_tracing, manual, ms};
use std::time::Duration;

use slidekit::{
    Carousel, CarouselConfig, CarouselEvent, ControlId, InputEvent, InputResponse, KeyCode,
    KeyEvent, TRANSITION_DURATION, Visibility,
};

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn test_next_then_settle_scenario() {
    init_tracing();
    let config = CarouselConfig {
        loop_slides: true,
        fade_effect: false,
        autoplay_delay: ms(5000),
        ..CarouselConfig::default()
    };
    let mut carousel = Carousel::new((0..4).collect::<Vec<_>>(), config);
    let (recorder, _) = Recorder::attach(&mut carousel);
    assert_eq!(carousel.current_index(), 0);

    assert!(carousel.next());
    assert_eq!(
        recorder.events(),
        vec![CarouselEvent::SlideChangeRequested { from: 0, to: 1 }]
    );

    carousel.advance(TRANSITION_DURATION);
    assert_eq!(
        recorder.events(),
        vec![
            CarouselEvent::SlideChangeRequested { from: 0, to: 1 },
            CarouselEvent::SlideChanged { index: 1 },
        ]
    );
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_looping_full_cycle_visits_every_index_once() {
    let mut carousel = manual(5, true);
    let (recorder, _) = Recorder::attach(&mut carousel);
    for _ in 0..5 {
        assert!(carousel.next());
        carousel.advance(TRANSITION_DURATION);
    }
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(recorder.settled(), vec![1, 2, 3, 4, 0]);
}

#[test]
fn test_prev_from_first_wraps_to_last() {
    let mut carousel = manual(4, true);
    carousel.prev();
    carousel.advance(TRANSITION_DURATION);
    assert_eq!(carousel.current_index(), 3);
}

#[test]
fn test_clamped_boundaries() {
    let mut carousel = manual(3, false);
    let (recorder, _) = Recorder::attach(&mut carousel);

    assert!(!carousel.prev(), "prev at index 0 clamps to 0");
    for _ in 0..5 {
        carousel.next();
        carousel.advance(TRANSITION_DURATION);
    }
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(recorder.settled(), vec![1, 2]);

    assert!(!carousel.go_to(99));
    assert!(carousel.go_to(-7));
    carousel.advance(TRANSITION_DURATION);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_go_to_current_is_silent() {
    let mut carousel = manual(3, true);
    let (recorder, _) = Recorder::attach(&mut carousel);
    assert!(!carousel.go_to(0));
    carousel.advance(ms(10_000));
    assert!(recorder.is_empty());
    assert!(!carousel.is_transitioning());
}

#[test]
fn test_back_to_back_next_runs_one_transition() {
    let mut carousel = manual(4, true);
    let (recorder, _) = Recorder::attach(&mut carousel);
    assert!(carousel.next());
    assert!(!carousel.next());
    carousel.advance(ms(2000));
    assert_eq!(recorder.settled(), vec![1]);
    assert_eq!(recorder.requested(), vec![(0, 1)]);
}

#[test]
fn test_navigation_reopens_after_settle() {
    let mut carousel = manual(4, true);
    carousel.next();
    carousel.advance(ms(499));
    assert!(!carousel.next());
    carousel.advance(ms(1));
    assert!(carousel.next());
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let mut carousel = manual(3, true);
    let (recorder, id) = Recorder::attach(&mut carousel);
    carousel.next();
    assert!(carousel.unsubscribe(id));
    carousel.advance(TRANSITION_DURATION);
    assert_eq!(recorder.len(), 1);
}

// =============================================================================
// Autoplay
// =============================================================================

#[test]
fn test_autoplay_cycles_with_default_delay() {
    let mut carousel = defaults(3);
    let (recorder, _) = Recorder::attach(&mut carousel);
    carousel.advance(ms(4999));
    assert!(recorder.is_empty());
    carousel.advance(ms(1));
    assert_eq!(recorder.requested(), vec![(0, 1)]);
    for _ in 0..3 {
        carousel.advance(ms(5000));
    }
    carousel.advance(TRANSITION_DURATION);
    assert_eq!(recorder.settled(), vec![1, 2, 0, 1]);
}

#[test]
fn test_long_clock_gap_advances_one_slide() {
    let mut carousel = defaults(4);
    let (recorder, _) = Recorder::attach(&mut carousel);
    carousel.tick(Duration::from_secs(3600));
    assert_eq!(recorder.requested(), vec![(0, 1)]);
    assert_eq!(recorder.settled(), vec![1]);
    assert!(carousel.next_autoplay_at() > Some(Duration::from_secs(3600)));

    // Epoch-style timestamps behave the same way.
    recorder.clear();
    carousel.tick(Duration::from_secs(1_700_000_000));
    assert_eq!(recorder.len(), 2);
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn test_hover_cycle_rearms_timer() {
    let mut carousel = defaults(3);
    assert!(carousel.is_playing());
    carousel.handle_event(InputEvent::HoverEnter);
    assert!(!carousel.is_autoplay_armed());
    carousel.handle_event(InputEvent::HoverLeave);
    assert!(carousel.is_autoplay_armed());
}

#[test]
fn test_paused_intent_survives_hover_cycle() {
    let mut carousel = defaults(3);
    carousel.toggle_play();
    carousel.handle_event(InputEvent::HoverEnter);
    carousel.handle_event(InputEvent::HoverLeave);
    assert!(!carousel.is_playing());
    assert!(!carousel.is_autoplay_armed());
}

#[test]
fn test_hover_while_hidden_waits_for_visibility() {
    let mut carousel = defaults(3);
    carousel.handle_event(Visibility::Hidden.into());
    carousel.handle_event(InputEvent::HoverEnter);
    carousel.handle_event(InputEvent::HoverLeave);
    assert!(!carousel.is_autoplay_armed());
    carousel.handle_event(Visibility::Visible.into());
    assert!(carousel.is_autoplay_armed());
}

#[test]
fn test_toggle_play_arms_while_hovered() {
    let mut carousel = defaults(3);
    carousel.handle_event(InputEvent::HoverEnter);
    assert!(!carousel.is_autoplay_armed());
    carousel.toggle_play();
    assert!(!carousel.is_playing());
    carousel.toggle_play();
    assert!(carousel.is_playing());
    assert!(carousel.is_autoplay_armed());
}

#[test]
fn test_hover_restarts_period() {
    let mut carousel = defaults(3);
    carousel.advance(ms(4000));
    carousel.handle_event(InputEvent::HoverEnter);
    carousel.advance(ms(3000));
    carousel.handle_event(InputEvent::HoverLeave);
    assert_eq!(carousel.next_autoplay_at(), Some(ms(12_000)));
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_play_pause_control_and_space_bar() {
    let mut carousel = defaults(3);
    assert!(carousel.activate(ControlId::PlayPause));
    assert!(!carousel.is_playing());
    let response = carousel.handle_event(KeyEvent::char(' ').into());
    assert_eq!(response, InputResponse::CAPTURED);
    assert!(carousel.is_playing());
    assert!(carousel.is_autoplay_armed());
}

// =============================================================================
// Gestures
// =============================================================================

#[test]
fn test_gesture_threshold() {
    let mut carousel = manual(3, true);
    drag(&mut carousel, -51.0, 10.0);
    assert_eq!(carousel.transition().map(|t| t.to), Some(1));
    carousel.advance(TRANSITION_DURATION);

    drag(&mut carousel, -49.0, 0.0);
    assert!(!carousel.is_transitioning());

    drag(&mut carousel, 60.0, 70.0);
    assert!(!carousel.is_transitioning());
}

#[test]
fn test_mouse_and_touch_share_policy() {
    for touch in [false, true] {
        let mut carousel = manual(3, true);
        let responses = if touch {
            touch_drag(&mut carousel, 60.0, 70.0)
        } else {
            drag(&mut carousel, 60.0, 70.0)
        };
        assert_eq!(responses.moved, InputResponse::HANDLED);
        assert!(!carousel.is_transitioning(), "touch={touch}");
    }
}

#[test]
fn test_drag_suspends_and_resumes_autoplay() {
    let mut carousel = defaults(3);
    carousel.handle_event(slidekit::PointerEvent::press(10.0, 10.0).into());
    assert!(!carousel.is_autoplay_armed());
    carousel.advance(ms(20_000));
    assert_eq!(carousel.current_index(), 0);
    carousel.handle_event(slidekit::PointerEvent::release(10.0, 10.0).into());
    assert!(carousel.is_autoplay_armed());
}

#[test]
fn test_swipe_during_transition_is_dropped() {
    let mut carousel = manual(4, true);
    carousel.next();
    let responses = drag(&mut carousel, -120.0, 0.0);
    assert_eq!(responses.release, InputResponse::HANDLED);
    carousel.advance(ms(5000));
    assert_eq!(carousel.current_index(), 1);
}

// =============================================================================
// Inert carousels and disposal
// =============================================================================

#[test]
fn test_single_slide_is_fully_inert() {
    let mut carousel = defaults(1);
    let (recorder, _) = Recorder::attach(&mut carousel);

    assert!(carousel.controls().is_empty());
    assert!(!carousel.is_autoplay_armed());
    assert!(!carousel.next());
    assert!(!carousel.prev());

    let responses = drag(&mut carousel, -200.0, 0.0);
    assert_eq!(responses.press, InputResponse::IGNORED);
    assert_eq!(
        carousel.handle_event(KeyEvent::key(KeyCode::Right).into()),
        InputResponse::IGNORED
    );
    carousel.toggle_play();
    assert!(!carousel.is_autoplay_armed());

    carousel.advance(ms(60_000));
    assert!(recorder.is_empty());
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_dispose_mid_transition() {
    let mut carousel = defaults(3);
    let (recorder, _) = Recorder::attach(&mut carousel);
    carousel.next();
    carousel.dispose();
    carousel.dispose();
    carousel.advance(ms(60_000));

    assert_eq!(recorder.requested(), vec![(0, 1)]);
    assert!(recorder.settled().is_empty());
    assert!(!carousel.is_autoplay_armed());
}
