// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Smallest scale the state machine will ever produce.
///
/// A malformed gesture stream can drive the scale towards zero; flooring it
/// keeps the produced transform invertible.
pub const SCALE_FLOOR: f64 = 1e-3;

/// Uniform zoom and pan applied to an image centered in a viewport.
///
/// `offset` is the translation of the image center away from the viewport
/// center, in viewport units. The image is scaled about its center first and
/// then translated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Translation of the image center from the viewport center.
    pub offset: Vec2,
}

impl TransformState {
    /// Unit scale, no offset.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    /// Creates a transform from a scale and an offset.
    #[must_use]
    pub const fn new(scale: f64, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    /// Returns this transform with a different scale.
    #[must_use]
    pub const fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Returns this transform with a different offset.
    #[must_use]
    pub const fn with_offset(self, offset: Vec2) -> Self {
        Self { offset, ..self }
    }

    /// Linear interpolation between `self` (at `t = 0`) and `other` (at `t = 1`).
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            scale: self.scale + (other.scale - self.scale) * t,
            offset: self.offset.lerp(other.offset, t),
        }
    }

    /// Viewport-space transform for content laid out in a viewport of `viewport` size.
    ///
    /// Content is scaled about the viewport center and then shifted by `offset`.
    #[must_use]
    pub fn to_affine(self, viewport: Size) -> Affine {
        let center = Vec2::new(viewport.width * 0.5, viewport.height * 0.5);
        Affine::translate(center + self.offset)
            * Affine::scale(self.scale)
            * Affine::translate(-center)
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Largest rectangle with the aspect ratio of `content` that fits in `viewport`, centered.
///
/// Degenerate content sizes fill the whole viewport.
#[must_use]
pub fn aspect_fit(content: Size, viewport: Size) -> Rect {
    let full = Rect::from_origin_size(Point::ORIGIN, viewport);
    if content.width <= 0.0 || content.height <= 0.0 {
        return full;
    }
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return full;
    }
    let sx = viewport.width / content.width;
    let sy = viewport.height / content.height;
    let fit = content * sx.min(sy);
    Rect::from_center_size(full.center(), fit)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{TransformState, aspect_fit};

    #[test]
    fn identity_affine_is_identity() {
        let viewport = Size::new(300.0, 200.0);
        let affine = TransformState::IDENTITY.to_affine(viewport);
        let p = affine * Point::new(12.0, 34.0);
        assert!((p.x - 12.0).abs() < 1e-9);
        assert!((p.y - 34.0).abs() < 1e-9);
    }

    #[test]
    fn affine_scales_about_viewport_center_then_translates() {
        let viewport = Size::new(300.0, 300.0);
        let state = TransformState::new(2.0, Vec2::new(10.0, -20.0));
        let affine = state.to_affine(viewport);

        // The viewport center only moves by the offset.
        let center = affine * Point::new(150.0, 150.0);
        assert!((center.x - 160.0).abs() < 1e-9);
        assert!((center.y - 130.0).abs() < 1e-9);

        // The origin corner moves away from the center by the scale.
        let corner = affine * Point::ORIGIN;
        assert!((corner.x - (-150.0 + 10.0)).abs() < 1e-9);
        assert!((corner.y - (-150.0 - 20.0)).abs() < 1e-9);
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let a = TransformState::new(1.0, Vec2::ZERO);
        let b = TransformState::new(3.0, Vec2::new(100.0, -50.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.scale, 2.0);
        assert_eq!(mid.offset, Vec2::new(50.0, -25.0));
    }

    #[test]
    fn aspect_fit_letterboxes_wide_content() {
        let rect = aspect_fit(Size::new(400.0, 100.0), Size::new(300.0, 300.0));
        assert_eq!(rect, Rect::new(0.0, 112.5, 300.0, 187.5));
    }

    #[test]
    fn aspect_fit_pillarboxes_tall_content() {
        let rect = aspect_fit(Size::new(50.0, 100.0), Size::new(300.0, 300.0));
        assert_eq!(rect, Rect::new(75.0, 0.0, 225.0, 300.0));
    }

    #[test]
    fn aspect_fit_degenerate_content_fills_viewport() {
        let viewport = Size::new(300.0, 200.0);
        let rect = aspect_fit(Size::ZERO, viewport);
        assert_eq!(rect, Rect::new(0.0, 0.0, 300.0, 200.0));
    }
}
