// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch tracking: turn cumulative magnification ratios into per-tick scale factors.

use crate::transform::SCALE_FLOOR;

/// Per-gesture state of a pinch.
///
/// Samples are the ratio of the current pinch span to the span at gesture
/// start. Each update divides by the previous sample to get the factor for
/// this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnifyTracker {
    /// Ratio observed at the previous update; `1.0` between gestures.
    pub last_scale: f64,
}

impl Default for MagnifyTracker {
    fn default() -> Self {
        Self { last_scale: 1.0 }
    }
}

impl MagnifyTracker {
    /// Feeds a cumulative ratio and returns the new scale, if it changed.
    ///
    /// Ticks whose factor satisfies `abs(1 - delta) <= jitter_threshold` still
    /// advance the tracker but leave the scale alone. The result may leave the
    /// configured scale limits; it never drops below [`SCALE_FLOOR`].
    ///
    /// Zero, negative or non-finite ratios, and ratios that would make the
    /// scale non-finite, are discarded without touching the tracker.
    pub fn update(&mut self, ratio: f64, scale: f64, jitter_threshold: f64) -> Option<f64> {
        if !ratio.is_finite() || ratio <= 0.0 {
            log::warn!("discarding magnification sample {ratio}");
            return None;
        }
        let delta = ratio / self.last_scale;
        let next = (scale * delta).max(SCALE_FLOOR);
        if !next.is_finite() {
            log::warn!("discarding magnification sample {ratio}: scale would overflow");
            return None;
        }
        self.last_scale = ratio;
        if (1.0 - delta).abs() > jitter_threshold {
            log::trace!("pinch delta {delta:.4}, scale {scale:.4} -> {next:.4}");
            Some(next)
        } else {
            None
        }
    }

    /// Ends the gesture, re-basing the tracker for the next pinch.
    pub fn end(&mut self) {
        self.last_scale = 1.0;
    }
}

/// Scale the view should settle at after a pinch, if `scale` is out of range.
#[must_use]
pub fn settle_scale(scale: f64, min_scale: f64, max_scale: f64) -> Option<f64> {
    if scale > max_scale {
        Some(max_scale)
    } else if scale < min_scale {
        Some(min_scale)
    } else {
        None
    }
}
