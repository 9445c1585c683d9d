//! Host scene seam.
//!
//! The animator never talks to a concrete engine. It consumes the three
//! host-owned facts it needs through the traits in this module:
//!
//! - [`AnimationGroup`]: a playable frame range `[from, to]` that can be
//!   played, sought to an arbitrary frame, and paused, plus the identities
//!   of the nodes its targeted animations drive.
//! - [`AnimationScene`]: the owning scene's ordered animation-group
//!   collection and its pre-render notification.
//! - [`NodeRef`]: the attachable target, a node identity paired with a
//!   handle to its owning scene.
//!
//! # Identity
//!
//! Group filtering compares node identities with `==`, the single-threaded
//! Rust counterpart of the reference-equality check engines with aliased
//! object graphs use. Arena-based engines pass their handle/index type
//! directly; `Rc`-graph engines can use a raw pointer newtype.
//!
//! # Sharing
//!
//! Groups circulate as [`SharedAnimationGroup`] handles (`Rc<RefCell<_>>`):
//! the scene keeps ownership of the collection while attached animators cache
//! the handles of the groups they scrub. Everything is single-threaded; no
//! `Send`/`Sync` bound appears anywhere in the seam.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::observable::Observable;

/// A playable animation range the host can scrub.
///
/// Mirrors the minimal playback surface of an engine-side animation group:
/// frame bounds, play/pause/seek, and targeted-node identities. The
/// `'static` bound lets group handles live inside registered observers.
pub trait AnimationGroup: 'static {
    /// Identity of a node in the host scene.
    type Node: Copy + PartialEq + fmt::Debug;

    /// First frame of the playable range.
    fn from_frame(&self) -> f32;

    /// Last frame of the playable range.
    fn to_frame(&self) -> f32;

    /// Forces the group into a playing state.
    fn play(&mut self);

    /// Halts playback, holding the current frame.
    fn pause(&mut self);

    /// Seeks playback to `frame`.
    fn goto_frame(&mut self, frame: f32);

    /// Identities of the nodes referenced by this group's targeted
    /// animations, in declaration order.
    fn animated_targets(&self) -> &[Self::Node];
}

/// The handle form in which animation groups circulate between the scene and
/// attached behaviors.
pub type SharedAnimationGroup<G> = Rc<RefCell<G>>;

/// What the animator needs from the owning scene.
pub trait AnimationScene {
    type Group: AnimationGroup;

    /// Ordered snapshot of the scene's current animation groups.
    ///
    /// Taken once per attach; groups added to the scene afterwards are not
    /// picked up until the next attach.
    fn animation_groups(&self) -> Vec<SharedAnimationGroup<Self::Group>>;

    /// Fired by the host once per frame, before rendering.
    ///
    /// The animator only ever registers one-shots here, to reflect the
    /// current scroll position before the first paint after an attach.
    fn before_render(&self) -> &Observable<()>;
}

/// Node identity type of a scene, resolved through its group type.
pub type NodeOf<S> = <<S as AnimationScene>::Group as AnimationGroup>::Node;

/// A node reference that knows its owning scene. This is the unit a
/// behavior is attached to.
pub struct NodeRef<S: AnimationScene> {
    scene: Rc<S>,
    node: NodeOf<S>,
}

impl<S: AnimationScene> NodeRef<S> {
    #[must_use]
    pub fn new(scene: &Rc<S>, node: NodeOf<S>) -> Self {
        Self {
            scene: Rc::clone(scene),
            node,
        }
    }

    /// The scene this node lives in.
    #[must_use]
    pub fn owning_scene(&self) -> &Rc<S> {
        &self.scene
    }

    /// The node's identity.
    #[must_use]
    pub fn node(&self) -> NodeOf<S> {
        self.node
    }
}

impl<S: AnimationScene> Clone for NodeRef<S> {
    fn clone(&self) -> Self {
        Self {
            scene: Rc::clone(&self.scene),
            node: self.node,
        }
    }
}

impl<S: AnimationScene> fmt::Debug for NodeRef<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("node", &self.node)
            .finish_non_exhaustive()
    }
}
