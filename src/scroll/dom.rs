//! DOM-backed scroll source (wasm32).
//!
//! Bridges a browser scroll container into the [`ScrollSource`] seam. The
//! container is given as a [`DomScrollTarget`] and resolved exactly once at
//! construction: listening happens on the element (or the document itself),
//! while metrics are always read from a concrete element. For the document
//! root that is `document.documentElement`, mirroring how browsers surface
//! document scroll offsets.
//!
//! One `Closure` is created at construction and reused, by reference, for
//! both `addEventListener` and `removeEventListener`. Unsubscription can
//! therefore never miss: the remove call always sees the same function
//! identity the add call registered.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget};

use crate::errors::{Result, ScrollBoundError};
use crate::observable::Observable;
use crate::scroll::{ScrollAxis, ScrollMetrics, ScrollSource};

/// What to read scroll positions from: a specific element, or the document
/// root (the page itself).
pub enum DomScrollTarget {
    Element(Element),
    DocumentRoot(Document),
}

/// [`ScrollSource`] over a DOM scroll container.
///
/// Dropping the source removes its DOM listener; animators subscribed to
/// [`on_scroll`](ScrollSource::on_scroll) hold tokens into the observable and
/// are unaffected by each other.
pub struct DomScrollSource {
    /// Element metrics are read from (`documentElement` for the document
    /// root).
    element: Element,
    /// Where the `"scroll"` listener is registered.
    event_target: EventTarget,
    /// The one listener closure, kept alive and identical for add/remove.
    listener: Closure<dyn FnMut(Event)>,
    scrolled: Rc<Observable<()>>,
}

impl DomScrollSource {
    /// Wires a scroll listener onto `target` and resolves the metrics
    /// element.
    pub fn new(target: DomScrollTarget) -> Result<Self> {
        let (element, event_target) = match target {
            DomScrollTarget::Element(el) => {
                let event_target = EventTarget::from(el.clone());
                (el, event_target)
            }
            DomScrollTarget::DocumentRoot(doc) => {
                let root = doc
                    .document_element()
                    .ok_or(ScrollBoundError::DocumentUnavailable)?;
                (root, EventTarget::from(doc))
            }
        };

        let scrolled = Rc::new(Observable::new());
        let events = Rc::clone(&scrolled);
        let listener =
            Closure::wrap(Box::new(move |_event: Event| events.notify(&())) as Box<dyn FnMut(_)>);

        event_target
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .map_err(|err| ScrollBoundError::Dom(format!("{err:?}")))?;
        log::debug!("DomScrollSource: scroll listener installed");

        Ok(Self {
            element,
            event_target,
            listener,
            scrolled,
        })
    }

    /// Source over the document root, the equivalent of scrolling the page.
    pub fn document() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(ScrollBoundError::DocumentUnavailable)?;
        Self::new(DomScrollTarget::DocumentRoot(document))
    }

    /// Source over the first element matching a CSS selector.
    pub fn from_selector(selector: &str) -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(ScrollBoundError::DocumentUnavailable)?;
        let element = document
            .query_selector(selector)
            .map_err(|err| ScrollBoundError::Dom(format!("{err:?}")))?
            .ok_or_else(|| ScrollBoundError::ElementNotFound(selector.to_string()))?;
        Self::new(DomScrollTarget::Element(element))
    }

    /// Source over an element the caller already holds.
    pub fn from_element(element: Element) -> Result<Self> {
        Self::new(DomScrollTarget::Element(element))
    }
}

impl Drop for DomScrollSource {
    fn drop(&mut self) {
        let _ = self
            .event_target
            .remove_event_listener_with_callback("scroll", self.listener.as_ref().unchecked_ref());
        log::debug!("DomScrollSource: scroll listener removed");
    }
}

impl ScrollSource for DomScrollSource {
    fn metrics(&self, axis: ScrollAxis) -> ScrollMetrics {
        match axis {
            ScrollAxis::Vertical => ScrollMetrics::new(
                f64::from(self.element.scroll_top()),
                f64::from(self.element.scroll_height()),
                f64::from(self.element.client_height()),
            ),
            ScrollAxis::Horizontal => ScrollMetrics::new(
                f64::from(self.element.scroll_left()),
                f64::from(self.element.scroll_width()),
                f64::from(self.element.client_width()),
            ),
        }
    }

    fn on_scroll(&self) -> &Observable<()> {
        &self.scrolled
    }
}
