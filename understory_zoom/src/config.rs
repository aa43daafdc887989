// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning values for [`crate::ZoomableImage`].

use core::fmt;

use crate::animation::Transition;

/// Tuning values for the zoom state machine.
///
/// The [`Default`] values give a view that rests between `1.0` and `2.5`,
/// ignores pinch jitter below 1% and flings with half of the predicted drag
/// overshoot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Smallest scale the view settles at.
    pub min_scale: f64,
    /// Largest scale the view settles at.
    ///
    /// Large values let the image be dragged far enough that the boundary
    /// correction has a lot of ground to cover.
    pub max_scale: f64,
    /// Per-tick pinch deltas with `abs(1 - delta)` at or below this are ignored.
    pub snap_jitter_threshold: f64,
    /// Fraction of the predicted end translation applied as inertia.
    pub inertia_damping: f64,
    /// Transition used for the inertial fling at the end of a drag.
    pub inertia_transition: Transition,
    /// Transition used for scale snap-back, boundary correction and double tap.
    pub default_transition: Transition,
    /// Factor applied to the scale by a double tap below `max_scale`.
    pub tap_zoom_factor: f64,
}

impl ZoomConfig {
    /// Default smallest scale.
    pub const DEFAULT_MIN_SCALE: f64 = 1.0;
    /// Default largest scale.
    pub const DEFAULT_MAX_SCALE: f64 = 2.5;
    /// Default pinch jitter threshold.
    pub const DEFAULT_SNAP_JITTER_THRESHOLD: f64 = 0.01;
    /// Default inertia damping.
    pub const DEFAULT_INERTIA_DAMPING: f64 = 0.5;
    /// Default double-tap zoom factor.
    pub const DEFAULT_TAP_ZOOM_FACTOR: f64 = 2.0;

    /// Returns a copy with new scale limits.
    ///
    /// The pair is normalized so that `min_scale <= max_scale`.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Returns a copy with a new pinch jitter threshold.
    #[must_use]
    pub fn with_snap_jitter_threshold(mut self, threshold: f64) -> Self {
        self.snap_jitter_threshold = threshold;
        self
    }

    /// Returns a copy with a new inertia damping and fling transition.
    #[must_use]
    pub fn with_inertia(mut self, damping: f64, transition: Transition) -> Self {
        self.inertia_damping = damping;
        self.inertia_transition = transition;
        self
    }

    /// Returns a copy with a new default transition.
    #[must_use]
    pub fn with_default_transition(mut self, transition: Transition) -> Self {
        self.default_transition = transition;
        self
    }

    /// Returns a copy with a new double-tap zoom factor.
    #[must_use]
    pub fn with_tap_zoom_factor(mut self, factor: f64) -> Self {
        self.tap_zoom_factor = factor;
        self
    }

    /// Checks that every value describes a usable configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("snap_jitter_threshold", self.snap_jitter_threshold),
            ("inertia_damping", self.inertia_damping),
            ("tap_zoom_factor", self.tap_zoom_factor),
        ];
        if let Some((field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(*field));
        }
        // Boundary correction assumes the image covers the viewport at rest.
        if self.min_scale < 1.0 {
            return Err(ConfigError::MinScaleBelowOne(self.min_scale));
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::InvertedScaleLimits {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if self.snap_jitter_threshold < 0.0 {
            return Err(ConfigError::NegativeJitterThreshold(
                self.snap_jitter_threshold,
            ));
        }
        if !(0.0..=1.0).contains(&self.inertia_damping) {
            return Err(ConfigError::DampingOutOfRange(self.inertia_damping));
        }
        if self.tap_zoom_factor <= 1.0 {
            return Err(ConfigError::TapZoomFactorTooSmall(self.tap_zoom_factor));
        }
        Ok(())
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: Self::DEFAULT_MIN_SCALE,
            max_scale: Self::DEFAULT_MAX_SCALE,
            snap_jitter_threshold: Self::DEFAULT_SNAP_JITTER_THRESHOLD,
            inertia_damping: Self::DEFAULT_INERTIA_DAMPING,
            inertia_transition: Transition::INERTIA,
            default_transition: Transition::DEFAULT,
            tap_zoom_factor: Self::DEFAULT_TAP_ZOOM_FACTOR,
        }
    }
}

/// Error returned by [`ZoomConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The named field is NaN or infinite.
    NonFinite(&'static str),
    /// `min_scale` is below `1.0`, so the image would not cover the viewport at rest.
    MinScaleBelowOne(f64),
    /// `min_scale` is larger than `max_scale`.
    InvertedScaleLimits {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// `snap_jitter_threshold` is negative.
    NegativeJitterThreshold(f64),
    /// `inertia_damping` is outside `[0, 1]`.
    DampingOutOfRange(f64),
    /// `tap_zoom_factor` would not zoom in.
    TapZoomFactorTooSmall(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite(field) => write!(f, "`{field}` must be finite"),
            Self::MinScaleBelowOne(v) => {
                write!(f, "minimum scale must be at least 1, got {v}")
            }
            Self::InvertedScaleLimits { min, max } => {
                write!(f, "minimum scale {min} exceeds maximum scale {max}")
            }
            Self::NegativeJitterThreshold(v) => {
                write!(f, "jitter threshold must not be negative, got {v}")
            }
            Self::DampingOutOfRange(v) => {
                write!(f, "inertia damping must be within [0, 1], got {v}")
            }
            Self::TapZoomFactorTooSmall(v) => {
                write!(f, "double-tap zoom factor must exceed 1, got {v}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{ConfigError, ZoomConfig};

    #[test]
    fn default_config_is_valid() {
        let config = ZoomConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.min_scale, 1.0);
        assert_eq!(config.max_scale, 2.5);
        assert_eq!(config.inertia_damping, 0.5);
        assert_eq!(config.snap_jitter_threshold, 0.01);
    }

    #[test]
    fn scale_limits_are_normalized() {
        let config = ZoomConfig::default().with_scale_limits(4.0, 1.5);
        assert_eq!(config.min_scale, 1.5);
        assert_eq!(config.max_scale, 4.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_unusable_values() {
        let base = ZoomConfig::default();

        let nan = base.with_snap_jitter_threshold(f64::NAN);
        assert_eq!(
            nan.validate(),
            Err(ConfigError::NonFinite("snap_jitter_threshold"))
        );

        let zero_min = base.with_scale_limits(0.0, 2.0);
        assert_eq!(zero_min.validate(), Err(ConfigError::MinScaleBelowOne(0.0)));

        let inverted = ZoomConfig {
            min_scale: 3.0,
            max_scale: 2.0,
            ..base
        };
        assert!(matches!(
            inverted.validate(),
            Err(ConfigError::InvertedScaleLimits { .. })
        ));

        let damping = base.with_inertia(1.5, base.inertia_transition);
        assert_eq!(damping.validate(), Err(ConfigError::DampingOutOfRange(1.5)));

        let tap = base.with_tap_zoom_factor(1.0);
        assert_eq!(
            tap.validate(),
            Err(ConfigError::TapZoomFactorTooSmall(1.0))
        );
    }

    #[test]
    fn rejects_min_scale_below_one() {
        let config = ZoomConfig::default().with_scale_limits(0.5, 2.5);
        assert_eq!(config.validate(), Err(ConfigError::MinScaleBelowOne(0.5)));

        let config = ZoomConfig::default().with_scale_limits(1.0, 2.5);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let msg = ConfigError::DampingOutOfRange(2.0).to_string();
        assert!(msg.contains("damping"));
        let msg = ConfigError::NonFinite("max_scale").to_string();
        assert!(msg.contains("max_scale"));
    }
}
