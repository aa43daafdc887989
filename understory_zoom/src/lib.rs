// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom --heading-base-level=0

//! Understory Zoom: a headless pinch/drag/double-tap zoom state machine for image views.
//!
//! This crate turns normalized gesture input into a bounded uniform transform
//! (scale + offset) for a single image:
//! - Pinch: cumulative magnification ratios scale the image, with sub-threshold
//!   jitter ignored. The scale may stretch past its limits while the pinch is
//!   live and settles back when it ends.
//! - Drag: cumulative translations move the image 1:1; releasing flings it by
//!   a damped share of the predicted end translation.
//! - Double tap: zooms in by a fixed factor, or resets once at the maximum.
//! - Boundary correction: when a gesture ends, the offset is pulled back so the
//!   scaled image never exposes empty space inside the viewport.
//!
//! It does **not** decode, lay out or draw images, and it does not talk to a
//! platform input system. Callers are expected to:
//! - Deliver [`GestureEvent`]s (or call the `on_*` methods) tagged with the
//!   current viewport size.
//! - Draw the image inside [`ZoomableImage::content_rect`] with the transform
//!   reported to their [`Animator`], clipped to the viewport.
//! - Provide an [`Animator`], or use [`Immediate`] / [`TweenAnimator`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use understory_zoom::ZoomableImage;
//!
//! let viewport = Size::new(300.0, 300.0);
//! let mut view = ZoomableImage::new(Size::new(1200.0, 800.0));
//!
//! // Zoom in, then drag far to the right.
//! view.on_double_tap(viewport);
//! view.on_drag_changed(Vec2::new(400.0, 0.0), viewport);
//! view.on_drag_ended(Vec2::ZERO, viewport);
//!
//! // At scale 2 the image may only shift 150 px before its edge shows.
//! assert_eq!(view.scale(), 2.0);
//! assert_eq!(view.offset(), Vec2::new(150.0, 0.0));
//! ```
//!
//! ## Animation
//!
//! The model transform always jumps straight to its new value; live updates
//! reach the animator through [`Animator::set`] and gesture-end corrections
//! through [`Animator::animate`]. A newer request replaces an older one.
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Size;
//! use understory_zoom::{TweenAnimator, ZoomConfig, ZoomableImage};
//!
//! let viewport = Size::new(300.0, 300.0);
//! let mut view =
//!     ZoomableImage::with_animator((), ZoomConfig::default(), TweenAnimator::default())
//!         .unwrap();
//!
//! view.on_double_tap(viewport);
//! assert_eq!(view.scale(), 2.0);
//! assert!(view.animator().presented().scale < 2.0);
//!
//! let presented = view.animator_mut().advance(Duration::from_secs(1));
//! assert_eq!(presented, view.state());
//! ```
//!
//! ## Threading
//!
//! All methods take `&mut self`; a host that receives input on several
//! threads must route it to the single owner, for example by queueing with
//! [`ZoomableImage::push`] and draining with [`ZoomableImage::process`].
//!
//! Diagnostics go through the `log` facade. This crate is `no_std`.

#![no_std]

extern crate alloc;

mod animation;
mod boundary;
mod config;
mod event;
mod magnify;
mod pan;
mod tap;
mod transform;
mod view;

pub use animation::{Animator, Curve, Immediate, Transition, TweenAnimator};
pub use boundary::{correct_axis, corrected_offset, max_offset};
pub use config::{ConfigError, ZoomConfig};
pub use event::{ActiveGestures, GestureEvent};
pub use magnify::{MagnifyTracker, settle_scale};
pub use pan::{PanTracker, inertia};
pub use tap::double_tap_target;
pub use transform::{SCALE_FLOOR, TransformState, aspect_fit};
pub use view::{ImageContent, ZoomDebugInfo, ZoomableImage};
