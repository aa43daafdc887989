// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::animation::{Animator, Immediate, Transition};
use crate::boundary::{corrected_offset, max_offset};
use crate::config::{ConfigError, ZoomConfig};
use crate::event::{ActiveGestures, GestureEvent};
use crate::magnify::{MagnifyTracker, settle_scale};
use crate::pan::{PanTracker, inertia};
use crate::tap::double_tap_target;
use crate::transform::{TransformState, aspect_fit};

/// Displayable content shown by a [`ZoomableImage`].
///
/// The state machine never looks at pixels. Content that knows its size gets
/// aspect-fit inside the viewport; anything else fills it.
pub trait ImageContent {
    /// Natural size of the content, if known.
    fn intrinsic_size(&self) -> Option<Size> {
        None
    }
}

impl ImageContent for Size {
    fn intrinsic_size(&self) -> Option<Size> {
        Some(*self)
    }
}

impl ImageContent for () {}

impl<T: ImageContent + ?Sized> ImageContent for &T {
    fn intrinsic_size(&self) -> Option<Size> {
        (**self).intrinsic_size()
    }
}

/// Pan-and-zoom state for a single image.
///
/// `ZoomableImage` owns the model [`TransformState`] and the per-gesture
/// trackers, and forwards every model change to its [`Animator`]. Pinch and
/// drag may be in progress at the same time; boundary correction only runs
/// when a gesture ends or on a double tap, never per tick.
///
/// Events can be applied directly with the `on_*` methods or [`Self::handle`],
/// or queued with [`Self::push`] and applied in arrival order by
/// [`Self::process`].
///
/// ```rust
/// use kurbo::Size;
/// use understory_zoom::ZoomableImage;
///
/// let viewport = Size::new(300.0, 300.0);
/// let mut view = ZoomableImage::new(());
///
/// view.on_magnify_changed(3.0, viewport);
/// assert_eq!(view.scale(), 3.0);
///
/// // Released beyond the limit: settles back at the maximum.
/// view.on_magnify_ended(viewport);
/// assert_eq!(view.scale(), 2.5);
///
/// view.on_double_tap(viewport);
/// assert_eq!(view.scale(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct ZoomableImage<I, A = Immediate> {
    image: I,
    config: ZoomConfig,
    state: TransformState,
    magnify: MagnifyTracker,
    pan: PanTracker,
    active: ActiveGestures,
    animator: A,
    pending: VecDeque<GestureEvent>,
    viewport: Size,
    revision: u64,
}

impl<I> ZoomableImage<I, Immediate> {
    /// Creates a view of `image` with the default configuration.
    #[must_use]
    pub fn new(image: I) -> Self {
        Self::build(image, ZoomConfig::default(), Immediate::default())
    }

    /// Creates a view of `image` with a custom configuration.
    pub fn with_config(image: I, config: ZoomConfig) -> Result<Self, ConfigError> {
        Self::with_animator(image, config, Immediate::default())
    }
}

impl<I, A: Animator> ZoomableImage<I, A> {
    /// Creates a view of `image` that reports changes to `animator`.
    pub fn with_animator(image: I, config: ZoomConfig, animator: A) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(image, config, animator))
    }

    fn build(image: I, config: ZoomConfig, mut animator: A) -> Self {
        let state = TransformState::IDENTITY.with_scale(config.min_scale);
        animator.set(state);
        Self {
            image,
            config,
            state,
            magnify: MagnifyTracker::default(),
            pan: PanTracker::default(),
            active: ActiveGestures::empty(),
            animator,
            pending: VecDeque::new(),
            viewport: Size::ZERO,
            revision: 0,
        }
    }

    /// Image content.
    #[must_use]
    pub fn image(&self) -> &I {
        &self.image
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Current model transform.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.state
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Current offset of the image center from the viewport center.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.state.offset
    }

    /// Counter bumped on every change of the model transform.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Viewport size delivered with the most recent event.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Gestures currently in progress.
    #[must_use]
    pub fn active_gestures(&self) -> ActiveGestures {
        self.active
    }

    /// Returns `true` when no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Animator receiving model changes.
    #[must_use]
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Mutable access to the animator, for example to advance it per frame.
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// Applies a pinch update.
    pub fn on_magnify_changed(&mut self, ratio: f64, viewport: Size) {
        self.viewport = viewport;
        self.active.insert(ActiveGestures::PINCH);
        let threshold = self.config.snap_jitter_threshold;
        if let Some(scale) = self.magnify.update(ratio, self.state.scale, threshold) {
            self.commit(self.state.with_scale(scale), None);
        }
    }

    /// Ends a pinch: settles the scale back into its limits, then corrects the offset.
    pub fn on_magnify_ended(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.active.remove(ActiveGestures::PINCH);
        self.magnify.end();
        let settled = settle_scale(
            self.state.scale,
            self.config.min_scale,
            self.config.max_scale,
        );
        if let Some(scale) = settled {
            log::debug!(
                "pinch released at scale {:.3}, settling at {scale}",
                self.state.scale
            );
            self.commit(
                self.state.with_scale(scale),
                Some(self.config.default_transition),
            );
        }
        self.adjust(viewport);
    }

    /// Applies a drag update. The offset follows the pointer 1:1 at any scale.
    pub fn on_drag_changed(&mut self, translation: Vec2, viewport: Size) {
        self.viewport = viewport;
        self.active.insert(ActiveGestures::DRAG);
        let delta = self.pan.update(translation);
        if delta != Vec2::ZERO {
            log::trace!("drag delta {delta:?}");
            self.commit(self.state.with_offset(self.state.offset + delta), None);
        }
    }

    /// Ends a drag: flings by the damped predicted translation, then corrects the offset.
    pub fn on_drag_ended(&mut self, predicted_end_translation: Vec2, viewport: Size) {
        self.viewport = viewport;
        self.active.remove(ActiveGestures::DRAG);
        let fling = inertia(predicted_end_translation, self.config.inertia_damping);
        if fling != Vec2::ZERO {
            log::debug!("drag released, fling {fling:?}");
            self.commit(
                self.state.with_offset(self.state.offset + fling),
                Some(self.config.inertia_transition),
            );
        }
        self.adjust(viewport);
    }

    /// Toggles between zoomed in and fully reset, then corrects the offset.
    pub fn on_double_tap(&mut self, viewport: Size) {
        self.viewport = viewport;
        let target = double_tap_target(self.state, &self.config);
        log::debug!(
            "double tap, scale {:.3} -> {:.3}",
            self.state.scale,
            target.scale
        );
        self.commit(target, Some(self.config.default_transition));
        self.adjust(viewport);
    }

    /// Pulls the offset back inside the legal range for the current scale.
    ///
    /// Animates when the offset changes. Always re-bases drag tracking, so
    /// the next drag update counts from zero. Returns `true` if the offset
    /// changed.
    pub fn adjust(&mut self, viewport: Size) -> bool {
        self.viewport = viewport;
        let corrected = corrected_offset(self.state.offset, self.state.scale, viewport);
        let changed = corrected != self.state.offset;
        if changed {
            log::debug!("correcting offset {:?} -> {corrected:?}", self.state.offset);
            self.commit(
                self.state.with_offset(corrected),
                Some(self.config.default_transition),
            );
        }
        self.pan.rebase();
        changed
    }

    /// Animates back to `min_scale` with no offset and forgets gesture tracking.
    pub fn reset(&mut self) {
        self.magnify.end();
        self.pan.rebase();
        self.commit(
            TransformState::IDENTITY.with_scale(self.config.min_scale),
            Some(self.config.default_transition),
        );
    }

    /// Applies one event.
    pub fn handle(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::MagnifyChanged { ratio, viewport } => {
                self.on_magnify_changed(ratio, viewport);
            }
            GestureEvent::MagnifyEnded { viewport } => self.on_magnify_ended(viewport),
            GestureEvent::DragChanged {
                translation,
                viewport,
            } => self.on_drag_changed(translation, viewport),
            GestureEvent::DragEnded {
                predicted_end_translation,
                viewport,
            } => self.on_drag_ended(predicted_end_translation, viewport),
            GestureEvent::DoubleTap { viewport } => self.on_double_tap(viewport),
        }
    }

    /// Queues an event for [`Self::process`].
    pub fn push(&mut self, event: GestureEvent) {
        self.pending.push_back(event);
    }

    /// Number of queued events.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Applies all queued events in arrival order and returns how many ran.
    pub fn process(&mut self) -> usize {
        let mut count = 0;
        while let Some(event) = self.pending.pop_front() {
            self.handle(event);
            count += 1;
        }
        count
    }

    /// Viewport-space transform to draw the content with.
    #[must_use]
    pub fn transform(&self, viewport: Size) -> Affine {
        self.state.to_affine(viewport)
    }

    /// Rectangle the content is clipped to.
    #[must_use]
    pub fn clip_rect(&self, viewport: Size) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, viewport)
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomDebugInfo {
        ZoomDebugInfo {
            state: self.state,
            viewport: self.viewport,
            max_offset: max_offset(self.state.scale, self.viewport),
            active: self.active,
            last_scale: self.magnify.last_scale,
            last_translation: self.pan.last_translation,
            pending: self.pending.len(),
            revision: self.revision,
            min_scale: self.config.min_scale,
            max_scale: self.config.max_scale,
        }
    }

    fn commit(&mut self, next: TransformState, transition: Option<Transition>) {
        if next == self.state {
            return;
        }
        self.state = next;
        self.revision = self.revision.wrapping_add(1);
        match transition {
            Some(transition) => self.animator.animate(next, transition),
            None => self.animator.set(next),
        }
    }
}

impl<I: ImageContent, A> ZoomableImage<I, A> {
    /// Where the unscaled content sits inside a viewport of `viewport` size.
    #[must_use]
    pub fn content_rect(&self, viewport: Size) -> Rect {
        match self.image.intrinsic_size() {
            Some(size) => aspect_fit(size, viewport),
            None => Rect::from_origin_size(Point::ORIGIN, viewport),
        }
    }
}

/// Debug snapshot of a [`ZoomableImage`].
#[derive(Clone, Copy, Debug)]
pub struct ZoomDebugInfo {
    /// Model transform.
    pub state: TransformState,
    /// Viewport size from the most recent event.
    pub viewport: Size,
    /// Legal offset bound for `state.scale` in `viewport`.
    pub max_offset: Vec2,
    /// Gestures in progress.
    pub active: ActiveGestures,
    /// Pinch tracker's last ratio.
    pub last_scale: f64,
    /// Drag tracker's last translation.
    pub last_translation: Vec2,
    /// Queued events.
    pub pending: usize,
    /// Change counter.
    pub revision: u64,
    /// Configured minimum scale.
    pub min_scale: f64,
    /// Configured maximum scale.
    pub max_scale: f64,
}
