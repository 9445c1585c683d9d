#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod behavior;
pub mod errors;
pub mod observable;
pub mod scene;
pub mod scroll;

pub use behavior::{Behavior, ProgressTransform, ScrollAnimatorOptions, ScrollBoundAnimator};
pub use errors::ScrollBoundError;
pub use observable::{Observable, ObserverId};
pub use scene::{AnimationGroup, AnimationScene, NodeOf, NodeRef, SharedAnimationGroup};
pub use scroll::{ScrollAxis, ScrollMetrics, ScrollSource, ScrollState};

#[cfg(target_arch = "wasm32")]
pub use scroll::{DomScrollSource, DomScrollTarget};
