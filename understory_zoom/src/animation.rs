// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation boundary: the [`Animator`] trait and two host-agnostic implementations.
//!
//! The state machine in [`crate::ZoomableImage`] always holds the *model*
//! transform, which jumps straight to its new value. An [`Animator`] receives
//! every model change and decides how the *presented* transform gets there:
//! [`Immediate`] snaps, [`TweenAnimator`] interpolates over time.
//!
//! Requests are fire-and-forget. A request that arrives while another is in
//! flight replaces it, starting from whatever is presented at that moment.

use core::time::Duration;

use crate::transform::TransformState;

/// Easing curve mapping linear progress in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Curve {
    /// Constant speed.
    Linear,
    /// Slow start, fast finish (cubic).
    EaseIn,
    /// Fast start, slow settle (cubic).
    EaseOut,
    /// Slow start and finish (cubic).
    #[default]
    EaseInOut,
}

impl Curve {
    /// Maps `t` (clamped to `[0, 1]`) through the curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 - 2.0 * t;
                    1.0 - u * u * u * 0.5
                }
            }
        }
    }
}

/// Duration and curve of an animated change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Total time the change takes.
    pub duration: Duration,
    /// Easing applied over `duration`.
    pub curve: Curve,
}

impl Transition {
    /// Implicit animation for snap-back, boundary correction and double tap.
    pub const DEFAULT: Self = Self::new(Duration::from_millis(350), Curve::EaseInOut);
    /// Inertial fling at the end of a drag.
    pub const INERTIA: Self = Self::new(Duration::from_millis(500), Curve::EaseOut);

    /// Creates a transition.
    #[must_use]
    pub const fn new(duration: Duration, curve: Curve) -> Self {
        Self { duration, curve }
    }

    /// Eased progress after `elapsed` time, in `[0, 1]`.
    ///
    /// A zero-length transition is always complete.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }
        self.curve
            .apply(elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Receives every change of the model transform.
///
/// Implementations never fail; a new request may arrive at any time and
/// replaces any previous one.
pub trait Animator {
    /// Presents `state` immediately, cancelling any running animation.
    fn set(&mut self, state: TransformState);

    /// Moves the presented transform to `target` over `transition`.
    fn animate(&mut self, target: TransformState, transition: Transition);
}

impl<A: Animator + ?Sized> Animator for &mut A {
    fn set(&mut self, state: TransformState) {
        (**self).set(state);
    }

    fn animate(&mut self, target: TransformState, transition: Transition) {
        (**self).animate(target, transition);
    }
}

/// Animator that applies every change instantly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Immediate {
    presented: TransformState,
}

impl Immediate {
    /// The last transform handed to this animator.
    #[must_use]
    pub fn presented(&self) -> TransformState {
        self.presented
    }
}

impl Animator for Immediate {
    fn set(&mut self, state: TransformState) {
        self.presented = state;
    }

    fn animate(&mut self, target: TransformState, _transition: Transition) {
        self.presented = target;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tween {
    from: TransformState,
    to: TransformState,
    transition: Transition,
    elapsed: Duration,
}

/// Time-driven interpolating animator.
///
/// The host advances it once per frame with [`TweenAnimator::advance`] and
/// draws [`TweenAnimator::presented`].
///
/// ```rust
/// use core::time::Duration;
/// use understory_zoom::{Animator, TransformState, Transition, TweenAnimator};
///
/// let mut anim = TweenAnimator::default();
/// anim.animate(TransformState::IDENTITY.with_scale(2.0), Transition::DEFAULT);
/// assert!(anim.is_animating());
///
/// let presented = anim.advance(Duration::from_secs(1));
/// assert_eq!(presented.scale, 2.0);
/// assert!(!anim.is_animating());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TweenAnimator {
    presented: TransformState,
    tween: Option<Tween>,
}

impl TweenAnimator {
    /// Creates an idle animator presenting `initial`.
    #[must_use]
    pub fn new(initial: TransformState) -> Self {
        Self {
            presented: initial,
            tween: None,
        }
    }

    /// Transform to draw right now.
    #[must_use]
    pub fn presented(&self) -> TransformState {
        self.presented
    }

    /// Target of the running animation, if any.
    #[must_use]
    pub fn target(&self) -> Option<TransformState> {
        self.tween.map(|t| t.to)
    }

    /// Returns `true` while an animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Advances time by `dt` and returns the transform to draw.
    pub fn advance(&mut self, dt: Duration) -> TransformState {
        let Some(mut tween) = self.tween else {
            return self.presented;
        };
        tween.elapsed = tween.elapsed.saturating_add(dt);
        if tween.elapsed >= tween.transition.duration {
            self.presented = tween.to;
            self.tween = None;
        } else {
            let t = tween.transition.progress(tween.elapsed);
            self.presented = tween.from.lerp(tween.to, t);
            self.tween = Some(tween);
        }
        self.presented
    }
}

impl Animator for TweenAnimator {
    fn set(&mut self, state: TransformState) {
        self.presented = state;
        self.tween = None;
    }

    fn animate(&mut self, target: TransformState, transition: Transition) {
        if transition.duration.is_zero() {
            self.set(target);
            return;
        }
        self.tween = Some(Tween {
            from: self.presented,
            to: target,
            transition,
            elapsed: Duration::ZERO,
        });
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::Vec2;

    use super::{Animator, Curve, Immediate, Transition, TweenAnimator};
    use crate::transform::TransformState;

    #[test]
    fn curves_hit_endpoints() {
        for curve in [Curve::Linear, Curve::EaseIn, Curve::EaseOut, Curve::EaseInOut] {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?} at 0");
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-12, "{curve:?} at 1");
            assert_eq!(curve.apply(-3.0), 0.0, "{curve:?} below range");
            assert!((curve.apply(7.0) - 1.0).abs() < 1e-12, "{curve:?} above range");
        }
    }

    #[test]
    fn ease_out_starts_fast() {
        let t = 0.25;
        assert!(Curve::EaseOut.apply(t) > Curve::Linear.apply(t));
        assert!(Curve::EaseIn.apply(t) < Curve::Linear.apply(t));
        assert!((Curve::EaseInOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_duration_transition_is_complete() {
        let t = Transition::new(Duration::ZERO, Curve::EaseOut);
        assert_eq!(t.progress(Duration::ZERO), 1.0);
    }

    #[test]
    fn immediate_presents_targets() {
        let mut anim = Immediate::default();
        let target = TransformState::new(2.0, Vec2::new(5.0, 5.0));
        anim.animate(target, Transition::DEFAULT);
        assert_eq!(anim.presented(), target);
    }

    #[test]
    fn tween_interpolates_and_finishes() {
        let mut anim = TweenAnimator::default();
        let target = TransformState::new(1.0, Vec2::new(100.0, 0.0));
        anim.animate(target, Transition::new(Duration::from_millis(100), Curve::Linear));

        let half = anim.advance(Duration::from_millis(50));
        assert!((half.offset.x - 50.0).abs() < 1e-9);
        assert!(anim.is_animating());
        assert_eq!(anim.target(), Some(target));

        let done = anim.advance(Duration::from_millis(50));
        assert_eq!(done, target);
        assert!(!anim.is_animating());
        assert_eq!(anim.advance(Duration::from_millis(10)), target);
    }

    #[test]
    fn retarget_starts_from_presented_value() {
        let mut anim = TweenAnimator::default();
        let linear = Transition::new(Duration::from_millis(100), Curve::Linear);
        anim.animate(TransformState::new(1.0, Vec2::new(100.0, 0.0)), linear);
        anim.advance(Duration::from_millis(50));

        // Last write wins: the new animation begins where the old one was.
        let second = TransformState::new(1.0, Vec2::new(-100.0, 0.0));
        anim.animate(second, linear);
        let p = anim.advance(Duration::from_millis(50));
        assert!((p.offset.x - (-25.0)).abs() < 1e-9);

        anim.advance(Duration::from_millis(50));
        assert_eq!(anim.presented(), second);
    }

    #[test]
    fn set_cancels_running_animation() {
        let mut anim = TweenAnimator::new(TransformState::IDENTITY);
        anim.animate(TransformState::IDENTITY.with_scale(2.5), Transition::DEFAULT);
        let jump = TransformState::IDENTITY.with_scale(1.5);
        anim.set(jump);
        assert!(!anim.is_animating());
        assert_eq!(anim.advance(Duration::from_secs(1)), jump);
    }
}
