#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Shared test helpers; not every integration test uses every builder

pub mod input_sim;
pub mod recorder;

use std::time::Duration;

use slidekit::{Carousel, CarouselConfig};

/// Install a fmt subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Carousel over `count` numbered slides with autoplay off.
pub fn manual(count: usize, loop_slides: bool) -> Carousel<usize> {
    let config = CarouselConfig {
        autoplay: false,
        loop_slides,
        ..CarouselConfig::default()
    };
    Carousel::new((0..count).collect(), config)
}

/// Carousel over `count` numbered slides with the default configuration.
pub fn defaults(count: usize) -> Carousel<usize> {
    Carousel::new((0..count).collect(), CarouselConfig::default())
}
