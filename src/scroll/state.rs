//! Programmatic scroll source.
//!
//! [`ScrollState`] stands in for a scrollable container on platforms without
//! a DOM (native hosts feeding their own input layer) and in tests. The host
//! owns a `Rc<ScrollState>`, pushes offsets into it, and every bound animator
//! sees the update through the shared [`ScrollSource`] seam.

use std::cell::Cell;

use crate::observable::Observable;
use crate::scroll::{ScrollAxis, ScrollMetrics, ScrollSource};

/// In-memory scroll model with per-axis metrics.
///
/// Mutators take `&self` (interior mutability) so the state can be shared as
/// `Rc<ScrollState>` between the driving host and subscribed animators.
pub struct ScrollState {
    vertical: Cell<ScrollMetrics>,
    horizontal: Cell<ScrollMetrics>,
    scrolled: Observable<()>,
}

impl ScrollState {
    /// Creates a state with zeroed metrics on both axes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertical: Cell::new(ScrollMetrics::default()),
            horizontal: Cell::new(ScrollMetrics::default()),
            scrolled: Observable::new(),
        }
    }

    fn cell(&self, axis: ScrollAxis) -> &Cell<ScrollMetrics> {
        match axis {
            ScrollAxis::Vertical => &self.vertical,
            ScrollAxis::Horizontal => &self.horizontal,
        }
    }

    /// Sets the content and viewport extents along `axis`.
    ///
    /// Does not notify: a resize is not a scroll event. The current offset is
    /// kept as-is.
    pub fn set_extents(&self, axis: ScrollAxis, content: f64, viewport: f64) {
        let cell = self.cell(axis);
        let mut metrics = cell.get();
        metrics.content = content;
        metrics.viewport = viewport;
        cell.set(metrics);
    }

    /// Sets the scroll offset along `axis`.
    ///
    /// Notifies scroll observers only when the offset actually changes,
    /// matching how browsers deliver `"scroll"`.
    #[allow(clippy::float_cmp)] // duplicate-event gate wants exact positions
    pub fn set_offset(&self, axis: ScrollAxis, offset: f64) {
        let cell = self.cell(axis);
        let mut metrics = cell.get();
        if metrics.offset == offset {
            return;
        }
        metrics.offset = offset;
        cell.set(metrics);
        self.scrolled.notify(&());
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSource for ScrollState {
    fn metrics(&self, axis: ScrollAxis) -> ScrollMetrics {
        self.cell(axis).get()
    }

    fn on_scroll(&self) -> &Observable<()> {
        &self.scrolled
    }
}
