// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::config::ZoomConfig;
use crate::transform::TransformState;

/// Transform a double tap moves to.
///
/// Below `max_scale` the scale grows by `tap_zoom_factor`, capped to the scale
/// limits; at or above it the view resets to `min_scale` with no offset.
///
/// Never panics, even for a config that fails [`ZoomConfig::validate`]; the
/// result is then only as meaningful as the limits.
#[must_use]
pub fn double_tap_target(state: TransformState, config: &ZoomConfig) -> TransformState {
    if state.scale < config.max_scale {
        let scale = (state.scale * config.tap_zoom_factor)
            .max(config.min_scale)
            .min(config.max_scale);
        state.with_scale(scale)
    } else {
        TransformState::IDENTITY.with_scale(config.min_scale)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::double_tap_target;
    use crate::config::ZoomConfig;
    use crate::transform::TransformState;

    #[test]
    fn zooms_in_and_keeps_offset() {
        let config = ZoomConfig::default();
        let state = TransformState::new(1.0, Vec2::new(3.0, 4.0));
        let next = double_tap_target(state, &config);
        assert_eq!(next, TransformState::new(2.0, Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn zoom_in_is_capped() {
        let config = ZoomConfig::default();
        let next = double_tap_target(TransformState::IDENTITY.with_scale(2.0), &config);
        assert_eq!(next.scale, 2.5);
    }

    #[test]
    fn zoom_in_from_below_min_lands_in_range() {
        let config = ZoomConfig::default();
        let next = double_tap_target(TransformState::IDENTITY.with_scale(0.3), &config);
        assert_eq!(next.scale, 1.0);
    }

    #[test]
    fn at_max_resets() {
        let config = ZoomConfig::default();
        let state = TransformState::new(2.5, Vec2::new(-100.0, 60.0));
        assert_eq!(double_tap_target(state, &config), TransformState::IDENTITY);

        let over = TransformState::new(3.0, Vec2::new(1.0, 1.0));
        assert_eq!(double_tap_target(over, &config), TransformState::IDENTITY);
    }

    #[test]
    fn unvalidated_limits_do_not_panic() {
        let inverted = ZoomConfig {
            min_scale: 3.0,
            max_scale: 2.0,
            ..ZoomConfig::default()
        };
        let next = double_tap_target(TransformState::IDENTITY, &inverted);
        assert_eq!(next.scale, 2.0);

        let nan = ZoomConfig {
            min_scale: f64::NAN,
            ..ZoomConfig::default()
        };
        let next = double_tap_target(TransformState::IDENTITY, &nan);
        assert_eq!(next.scale, 2.0);
    }
}
