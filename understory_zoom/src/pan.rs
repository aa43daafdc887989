// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan tracking: turn cumulative drag translations into incremental offset changes.
//!
//! ## Usage
//!
//! 1) On each drag update, call [`PanTracker::update`] with the translation since
//!    the gesture began and add the returned delta to the offset.
//! 2) At gesture end, apply [`inertia`] to the predicted end translation.
//! 3) Boundary correction calls [`PanTracker::rebase`] so that the next drag
//!    starts counting from zero.
//!
//! ```
//! use kurbo::Vec2;
//! use understory_zoom::PanTracker;
//!
//! let mut pan = PanTracker::default();
//! assert_eq!(pan.update(Vec2::new(10.0, 0.0)), Vec2::new(10.0, 0.0));
//! assert_eq!(pan.update(Vec2::new(25.0, 0.0)), Vec2::new(15.0, 0.0));
//! ```

use kurbo::Vec2;

/// Per-gesture state of a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanTracker {
    /// Cumulative translation observed at the previous update.
    pub last_translation: Vec2,
}

impl PanTracker {
    /// Feeds a cumulative translation, returning the movement since the last update.
    ///
    /// Non-finite samples are discarded and produce no movement.
    pub fn update(&mut self, translation: Vec2) -> Vec2 {
        if !translation.is_finite() {
            log::warn!("discarding drag sample {translation:?}");
            return Vec2::ZERO;
        }
        let delta = translation - self.last_translation;
        self.last_translation = translation;
        delta
    }

    /// Forgets the last translation so the next update counts from zero.
    pub fn rebase(&mut self) {
        self.last_translation = Vec2::ZERO;
    }
}

/// Extra offset applied when a drag ends, from its predicted end translation.
///
/// Non-finite predictions produce no fling.
#[must_use]
pub fn inertia(predicted_end_translation: Vec2, damping: f64) -> Vec2 {
    if !predicted_end_translation.is_finite() {
        return Vec2::ZERO;
    }
    predicted_end_translation * damping
}
