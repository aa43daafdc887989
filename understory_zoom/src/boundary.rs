// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary correction: how far a scaled image may be dragged before empty
//! space would show inside the viewport.
//!
//! At `scale = 1` the image exactly fills the viewport and no offset is legal.
//! Above that, the image overhangs the viewport by `(scale - 1) * size` in
//! total, split evenly between both sides.

use kurbo::{Size, Vec2};

/// Largest legal absolute offset on each axis for `scale` in `viewport`.
///
/// Negative when `scale < 1`.
#[must_use]
pub fn max_offset(scale: f64, viewport: Size) -> Vec2 {
    Vec2::new(
        viewport.width * (scale - 1.0) / 2.0,
        viewport.height * (scale - 1.0) / 2.0,
    )
}

/// Returns `offset` pulled back inside the legal range for `scale` and `viewport`.
///
/// Each axis is corrected independently; see [`correct_axis`].
#[must_use]
pub fn corrected_offset(offset: Vec2, scale: f64, viewport: Size) -> Vec2 {
    let max = max_offset(scale, viewport);
    Vec2::new(correct_axis(offset.x, max.x), correct_axis(offset.y, max.y))
}

/// Corrects one axis against its bound `max`.
///
/// First the magnitude is clamped to `max`, keeping the sign. A value that
/// still lies outside `[-max, max]` afterwards snaps to `0` when positive and
/// to `-max` otherwise. For `max >= 0` the clamp always lands inside the range,
/// so only a negative bound (`scale < 1`) reaches the snap.
///
/// A zero `value` is never divided by.
#[must_use]
pub fn correct_axis(value: f64, max: f64) -> f64 {
    let mut corrected = value;
    if corrected.abs() > max && corrected != 0.0 {
        corrected = max * (corrected.abs() / corrected);
    }
    if corrected < -max || corrected > max {
        corrected = if corrected > 0.0 { 0.0 } else { -max };
    }
    corrected
}
