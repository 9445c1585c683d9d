//! Scroll source abstraction.
//!
//! Everything the animator knows about scrolling lives behind
//! [`ScrollSource`]: a snapshot of per-axis metrics plus an observable that
//! fires on every scroll event. Two implementations ship with the crate:
//!
//! - [`ScrollState`]: a programmatic source driven by the host (native
//!   engines, tests)
//! - `DomScrollSource`: a `web-sys` backed source reading a DOM element or
//!   the document root (wasm32 only)

pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use state::ScrollState;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomScrollSource, DomScrollTarget};

use std::fmt;
use std::str::FromStr;

use crate::errors::ScrollBoundError;
use crate::observable::Observable;

/// The axis along which scroll progress is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollAxis {
    /// Height metrics: `scrollTop` / `scrollHeight` / `clientHeight`.
    #[default]
    Vertical,
    /// Width metrics: `scrollLeft` / `scrollWidth` / `clientWidth`.
    Horizontal,
}

impl fmt::Display for ScrollAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollAxis::Vertical => write!(f, "vertical"),
            ScrollAxis::Horizontal => write!(f, "horizontal"),
        }
    }
}

impl FromStr for ScrollAxis {
    type Err = ScrollBoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("vertical") {
            Ok(ScrollAxis::Vertical)
        } else if s.eq_ignore_ascii_case("horizontal") {
            Ok(ScrollAxis::Horizontal)
        } else {
            Err(ScrollBoundError::InvalidAxis(s.to_string()))
        }
    }
}

/// One-axis scroll measurements, in the units of the underlying source
/// (CSS pixels for DOM sources).
///
/// Field names follow the DOM model: `offset` is `scrollTop`/`scrollLeft`,
/// `content` is `scrollHeight`/`scrollWidth`, `viewport` is
/// `clientHeight`/`clientWidth`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current scroll offset along the axis.
    pub offset: f64,
    /// Total scrollable extent of the content.
    pub content: f64,
    /// Visible extent of the container.
    pub viewport: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(offset: f64, content: f64, viewport: f64) -> Self {
        Self {
            offset,
            content,
            viewport,
        }
    }

    /// Maximum reachable scroll offset (`content - viewport`).
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.content - self.viewport
    }

    /// Normalized scroll progress, `offset / max_offset`.
    ///
    /// Deliberately unguarded division: when the content exactly fits the
    /// viewport this is `0.0 / 0.0 = NaN`, and offsets past the scrollable
    /// range produce values outside `[0, 1]`. The consumer owns the
    /// finiteness and clamping policy.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.offset / self.max_offset()
    }
}

/// A place scroll positions can be read from and scroll events subscribed to.
///
/// Object-safe; the animator consumes it as `Rc<dyn ScrollSource>` so one
/// source can drive any number of behaviors.
pub trait ScrollSource {
    /// Current measurements along `axis`.
    fn metrics(&self, axis: ScrollAxis) -> ScrollMetrics;

    /// Fired once per scroll event delivered by the underlying container.
    fn on_scroll(&self) -> &Observable<()>;
}
