//! Scroll-driven animation scrubbing.
//!
//! [`ScrollBoundAnimator`] binds the animation groups targeting a node to a
//! scroll position. Every scroll event is mapped to a progress ratio
//! `offset / (content - viewport)` and each bound group is sought to
//! `from + (to - from) * progress`. The seek runs as a play/seek/pause
//! cycle so groups that were never started still move.
//!
//! Runtime misuse is fail-soft: an unscrollable container divides by zero,
//! the resulting non-finite ratio is recorded, and the scrub is skipped so
//! every group holds its last frame.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::behavior::Behavior;
use crate::observable::ObserverId;
use crate::scene::{AnimationGroup, AnimationScene, NodeOf, NodeRef, SharedAnimationGroup};
use crate::scroll::{ScrollAxis, ScrollSource};

/// Reshapes the raw progress ratio before it is stored and applied.
pub type ProgressTransform = Box<dyn Fn(f64) -> f64>;

/// Construction-time knobs for [`ScrollBoundAnimator`].
#[derive(Default)]
pub struct ScrollAnimatorOptions {
    /// Scroll axis the ratio is read from. Vertical by default.
    pub axis: ScrollAxis,
    /// Optional easing or clamping of the raw ratio. Runs before the ratio
    /// is stored, so [`ScrollBoundAnimator::progress`] reports the
    /// transformed value.
    pub transform: Option<ProgressTransform>,
}

/// State shared between the animator and the callbacks it registers.
struct ScrubState<G: AnimationGroup> {
    source: Rc<dyn ScrollSource>,
    axis: ScrollAxis,
    transform: Option<ProgressTransform>,
    /// `Some` exactly while attached. Frozen at attach time; an empty set
    /// still records progress.
    groups: RefCell<Option<Vec<SharedAnimationGroup<G>>>>,
    /// Last recorded ratio, non-finite values included.
    progress: Cell<Option<f64>>,
}

impl<G: AnimationGroup> ScrubState<G> {
    fn update(&self) {
        // Handles are snapshotted so a group callback cannot alias the
        // borrow of the cache.
        let Some(groups) = self.groups.borrow().clone() else {
            return;
        };

        let raw = self.source.metrics(self.axis).progress();
        let progress = match &self.transform {
            Some(transform) => transform(raw),
            None => raw,
        };
        self.progress.set(Some(progress));

        // A zero scroll range divides to NaN or an infinity. The ratio is
        // recorded above, the scrub is skipped.
        if !progress.is_finite() {
            return;
        }

        for group in &groups {
            let mut group = group.borrow_mut();
            let from = f64::from(group.from_frame());
            let to = f64::from(group.to_frame());
            let frame = (from + (to - from) * progress) as f32;
            group.play();
            group.goto_frame(frame);
            group.pause();
        }
    }
}

/// Everything attach installed, kept around for exact teardown.
struct Attachment<S: AnimationScene> {
    node: NodeOf<S>,
    scene: Weak<S>,
    scroll_observer: ObserverId,
    render_observer: ObserverId,
}

/// Drives a node's animation groups from a scroll position.
///
/// On attach the animator freezes the set of the scene's animation groups
/// whose targeted animations reference the node, subscribes to the scroll
/// source, and registers a one-shot on the scene's pre-render notification
/// so the first painted frame already reflects the current scroll position.
/// Groups added to the scene after the attach are ignored until the next
/// attach.
///
/// Detach removes exactly the two observers attach installed and drops the
/// frozen set. Dropping an attached animator detaches it.
///
/// The raw ratio is used as-is. Scrolling past the content (rubber-banding)
/// or a transform returning values outside `[0, 1]` extrapolates the frame
/// range; hosts that want clamping express it as a
/// [`transform`](ScrollAnimatorOptions::transform).
pub struct ScrollBoundAnimator<S: AnimationScene> {
    state: Rc<ScrubState<S::Group>>,
    attachment: Option<Attachment<S>>,
}

impl<S: AnimationScene> ScrollBoundAnimator<S> {
    /// Vertical-axis animator with no progress transform.
    #[must_use]
    pub fn new(source: Rc<dyn ScrollSource>) -> Self {
        Self::with_options(source, ScrollAnimatorOptions::default())
    }

    #[must_use]
    pub fn with_options(source: Rc<dyn ScrollSource>, options: ScrollAnimatorOptions) -> Self {
        Self {
            state: Rc::new(ScrubState {
                source,
                axis: options.axis,
                transform: options.transform,
                groups: RefCell::new(None),
                progress: Cell::new(None),
            }),
            attachment: None,
        }
    }

    /// Binds the animator to `target`.
    ///
    /// Attaching while already attached detaches from the previous target
    /// first, so at most one attachment exists at a time.
    pub fn attach(&mut self, target: &NodeRef<S>) {
        self.detach();

        let scene = target.owning_scene();
        let node = target.node();

        let bound: Vec<_> = scene
            .animation_groups()
            .into_iter()
            .filter(|group| group.borrow().animated_targets().contains(&node))
            .collect();
        log::debug!(
            "ScrollBoundAnimator: bound {} animation group(s) to {node:?}",
            bound.len()
        );
        *self.state.groups.borrow_mut() = Some(bound);

        let state = Rc::clone(&self.state);
        let scroll_observer = self.state.source.on_scroll().add(move |_| state.update());

        let state = Rc::clone(&self.state);
        let render_observer = scene.before_render().add_once(move |_| state.update());

        self.attachment = Some(Attachment {
            node,
            scene: Rc::downgrade(scene),
            scroll_observer,
            render_observer,
        });
    }

    /// Removes the observers installed by [`attach`](Self::attach) and drops
    /// the frozen group set. A no-op when not attached.
    pub fn detach(&mut self) {
        let Some(attachment) = self.attachment.take() else {
            return;
        };

        self.state.source.on_scroll().remove(attachment.scroll_observer);
        if let Some(scene) = attachment.scene.upgrade() {
            // May already be gone: one-shots deregister themselves.
            scene.before_render().remove(attachment.render_observer);
        }
        *self.state.groups.borrow_mut() = None;
        log::debug!("ScrollBoundAnimator: detached from {:?}", attachment.node);
    }

    /// Whether the animator currently holds an attachment.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// The last progress ratio recorded by a scroll or pre-render update,
    /// or `None` before the first update. Non-finite ratios from an
    /// unscrollable container are reported here even though they are never
    /// applied to a frame.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.state.progress.get()
    }
}

impl<S: AnimationScene> Behavior for ScrollBoundAnimator<S> {
    type Target = NodeRef<S>;

    fn name(&self) -> &'static str {
        "ScrollBoundAnimator"
    }

    fn attach(&mut self, target: NodeRef<S>) {
        ScrollBoundAnimator::attach(self, &target);
    }

    fn detach(&mut self) {
        ScrollBoundAnimator::detach(self);
    }
}

impl<S: AnimationScene> Drop for ScrollBoundAnimator<S> {
    fn drop(&mut self) {
        self.detach();
    }
}
