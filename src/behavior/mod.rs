//! Node behaviors.
//!
//! A behavior is a detachable unit of logic bound to a scene node.
//! [`attach`](Behavior::attach) installs whatever observers the behavior
//! needs, [`detach`](Behavior::detach) removes exactly those observers and
//! releases the target. A detached behavior holds no host resources and can
//! be attached again, to the same node or a different one.

mod scroll_animator;

pub use scroll_animator::{ProgressTransform, ScrollAnimatorOptions, ScrollBoundAnimator};

/// Attachable node logic.
pub trait Behavior {
    /// What the behavior binds to.
    type Target;

    /// Identifying name, used in diagnostics.
    fn name(&self) -> &'static str;

    /// One-time setup before the first attach. The default does nothing.
    fn init(&mut self) {}

    /// Binds the behavior to `target` and installs its observers.
    ///
    /// Attaching an already-attached behavior rebinds it: the previous
    /// target is detached first.
    fn attach(&mut self, target: Self::Target);

    /// Removes every observer installed by [`attach`](Behavior::attach) and
    /// releases the target. Detaching an already-detached behavior is a
    /// no-op.
    fn detach(&mut self);
}
