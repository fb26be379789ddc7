//! Carousel configuration and host attribute overrides.

use std::time::Duration;

use crate::error::{Error, Result};

/// Default autoplay period.
pub const DEFAULT_AUTOPLAY_DELAY: Duration = Duration::from_millis(5000);

/// Immutable configuration snapshot for one carousel instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselConfig {
    /// Enable timer-driven advance.
    pub autoplay: bool,
    /// Timer period. Always greater than zero.
    pub autoplay_delay: Duration,
    /// Wrap navigation at the boundaries instead of clamping.
    pub loop_slides: bool,
    /// Generate position indicators.
    pub show_dots: bool,
    /// Generate prev/next controls.
    pub show_arrows: bool,
    /// Enable the swipe/drag gesture recognizer.
    pub swipe_enabled: bool,
    /// Cross-fade slides instead of displacing the track.
    pub fade_effect: bool,
    /// Suspend autoplay while the pointer hovers the carousel.
    pub pause_on_hover: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_delay: DEFAULT_AUTOPLAY_DELAY,
            loop_slides: true,
            show_dots: true,
            show_arrows: true,
            swipe_enabled: true,
            fade_effect: false,
            pause_on_hover: true,
        }
    }
}

impl CarouselConfig {
    /// Start building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> CarouselConfigBuilder {
        CarouselConfigBuilder::default()
    }

    /// Apply per-instance host attribute overrides (`data-*` style).
    ///
    /// Unknown attribute names are ignored. Boolean attributes accept
    /// `true/false`, `1/0`, `yes/no` and `on/off`; an empty value counts as
    /// `true`, matching a bare HTML attribute.
    pub fn with_attributes<'a, I>(mut self, attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in attributes {
            match name {
                "data-autoplay" => self.autoplay = parse_flag(name, value)?,
                "data-autoplay-delay" => self.autoplay_delay = parse_delay(name, value)?,
                "data-loop" => self.loop_slides = parse_flag(name, value)?,
                "data-show-dots" => self.show_dots = parse_flag(name, value)?,
                "data-show-arrows" => self.show_arrows = parse_flag(name, value)?,
                "data-swipe" => self.swipe_enabled = parse_flag(name, value)?,
                "data-fade" => self.fade_effect = parse_flag(name, value)?,
                "data-pause-on-hover" => self.pause_on_hover = parse_flag(name, value)?,
                _ => tracing::trace!(attribute = name, "ignoring unknown carousel attribute"),
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// Check the invariants that cannot be expressed in the types.
    pub fn validate(&self) -> Result<()> {
        if self.autoplay_delay.is_zero() {
            return Err(Error::InvalidDelay);
        }
        Ok(())
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid(name, value)),
    }
}

fn parse_delay(name: &str, value: &str) -> Result<Duration> {
    let millis: u64 = value.trim().parse().map_err(|_| invalid(name, value))?;
    if millis == 0 {
        return Err(Error::InvalidDelay);
    }
    Ok(Duration::from_millis(millis))
}

fn invalid(name: &str, value: &str) -> Error {
    Error::InvalidAttribute {
        name: name.to_string(),
        value: value.to_string(),
    }
}

/// Builder for [`CarouselConfig`].
#[derive(Clone, Debug, Default)]
pub struct CarouselConfigBuilder {
    config: CarouselConfig,
}

impl CarouselConfigBuilder {
    #[must_use]
    pub fn autoplay(mut self, enabled: bool) -> Self {
        self.config.autoplay = enabled;
        self
    }

    #[must_use]
    pub fn autoplay_delay(mut self, delay: Duration) -> Self {
        self.config.autoplay_delay = delay;
        self
    }

    #[must_use]
    pub fn loop_slides(mut self, enabled: bool) -> Self {
        self.config.loop_slides = enabled;
        self
    }

    #[must_use]
    pub fn show_dots(mut self, enabled: bool) -> Self {
        self.config.show_dots = enabled;
        self
    }

    #[must_use]
    pub fn show_arrows(mut self, enabled: bool) -> Self {
        self.config.show_arrows = enabled;
        self
    }

    #[must_use]
    pub fn swipe_enabled(mut self, enabled: bool) -> Self {
        self.config.swipe_enabled = enabled;
        self
    }

    #[must_use]
    pub fn fade_effect(mut self, enabled: bool) -> Self {
        self.config.fade_effect = enabled;
        self
    }

    #[must_use]
    pub fn pause_on_hover(mut self, enabled: bool) -> Self {
        self.config.pause_on_hover = enabled;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<CarouselConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
