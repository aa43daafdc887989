// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// A normalized gesture event, tagged with the viewport size at delivery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Pinch update: ratio of the current span to the span at gesture start.
    MagnifyChanged {
        /// Cumulative magnification ratio.
        ratio: f64,
        /// Viewport size.
        viewport: Size,
    },
    /// Pinch ended.
    MagnifyEnded {
        /// Viewport size.
        viewport: Size,
    },
    /// Drag update: translation since the gesture started.
    DragChanged {
        /// Cumulative translation.
        translation: Vec2,
        /// Viewport size.
        viewport: Size,
    },
    /// Drag ended.
    DragEnded {
        /// Velocity-extrapolated final translation.
        predicted_end_translation: Vec2,
        /// Viewport size.
        viewport: Size,
    },
    /// Two taps in quick succession.
    DoubleTap {
        /// Viewport size.
        viewport: Size,
    },
}

impl GestureEvent {
    /// Viewport size the event was delivered with.
    #[must_use]
    pub fn viewport(&self) -> Size {
        match *self {
            Self::MagnifyChanged { viewport, .. }
            | Self::MagnifyEnded { viewport }
            | Self::DragChanged { viewport, .. }
            | Self::DragEnded { viewport, .. }
            | Self::DoubleTap { viewport } => viewport,
        }
    }
}

bitflags::bitflags! {
    /// Gesture recognizers currently in progress.
    ///
    /// Pinch and drag are recognized simultaneously, so both may be set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ActiveGestures: u8 {
        /// A pinch is in progress.
        const PINCH = 1 << 0;
        /// A drag is in progress.
        const DRAG = 1 << 1;
    }
}
