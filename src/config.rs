use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("intersection ratio must be within [0, 1], got {0}")]
    RatioOutOfRange(f64),
    #[error("scroll offset must be finite and non-negative, got {0}")]
    InvalidOffset(f64),
}

/// Fraction of a section that must be inside the viewport before it reveals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RevealRatio(f64);

impl RevealRatio {
    pub const fn new_unchecked(ratio: f64) -> Self {
        Self(ratio)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for RevealRatio {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::RatioOutOfRange(value))
        }
    }
}

/// Vertical offsets (px) the header reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThresholds {
    compact_header: f64,
    back_to_top: f64,
}

impl ScrollThresholds {
    pub fn new(compact_header: f64, back_to_top: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            compact_header: check_offset(compact_header)?,
            back_to_top: check_offset(back_to_top)?,
        })
    }

    pub fn compact_header(&self) -> f64 {
        self.compact_header
    }

    pub fn back_to_top(&self) -> f64 {
        self.back_to_top
    }
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            compact_header: 50.0,
            back_to_top: 300.0,
        }
    }
}

fn check_offset(offset: f64) -> Result<f64, ConfigError> {
    if offset.is_finite() && offset >= 0.0 {
        Ok(offset)
    } else {
        Err(ConfigError::InvalidOffset(offset))
    }
}

/// Every tunable number the page sections read, provided once through context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    pub scroll: ScrollThresholds,
    pub about_reveal: RevealRatio,
    pub section_reveal: RevealRatio,
    pub submit_delay: Duration,
    pub card_stagger: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollThresholds::default(),
            about_reveal: RevealRatio::new_unchecked(0.3),
            section_reveal: RevealRatio::new_unchecked(0.2),
            submit_delay: Duration::from_millis(1000),
            card_stagger: Duration::from_millis(150),
        }
    }
}

impl SiteConfig {
    /// Animation delay for the card at `index` in a staggered grid.
    pub fn stagger_delay(&self, index: usize) -> Duration {
        self.card_stagger * index as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = SiteConfig::default();
        assert_eq!(config.scroll.compact_header(), 50.0);
        assert_eq!(config.scroll.back_to_top(), 300.0);
        assert_eq!(config.about_reveal.get(), 0.3);
        assert_eq!(config.section_reveal.get(), 0.2);
        assert_eq!(config.submit_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_ratio_bounds() {
        assert!(RevealRatio::try_from(0.0).is_ok());
        assert!(RevealRatio::try_from(1.0).is_ok());
        assert_eq!(
            RevealRatio::try_from(1.5),
            Err(ConfigError::RatioOutOfRange(1.5))
        );
        assert!(RevealRatio::try_from(-0.1).is_err());
        assert!(RevealRatio::try_from(f64::NAN).is_err());
    }

    #[test]
    fn test_offsets_must_be_finite() {
        assert!(ScrollThresholds::new(10.0, 20.0).is_ok());
        assert_eq!(
            ScrollThresholds::new(-1.0, 20.0),
            Err(ConfigError::InvalidOffset(-1.0))
        );
        assert!(ScrollThresholds::new(10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_stagger_delay() {
        let config = SiteConfig::default();
        assert_eq!(config.stagger_delay(0), Duration::ZERO);
        assert_eq!(config.stagger_delay(2), Duration::from_millis(300));
    }
}
