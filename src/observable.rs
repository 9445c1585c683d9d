//! Single-threaded observer registry.
//!
//! [`Observable`] is the notification primitive shared by scroll sources and
//! host scenes: scroll sources expose one for `"scroll"` delivery, scenes
//! expose one for the pre-render tick. Registration hands back an
//! [`ObserverId`] token and removal goes through that token, so unsubscribing
//! never depends on closure identity (a fresh closure passed to a remove call
//! can never silently miss the registered one).
//!
//! ```rust
//! use scrollbound::Observable;
//!
//! let scrolled = Observable::new();
//! let id = scrolled.add(|()| println!("scrolled"));
//! scrolled.notify(&());
//! assert!(scrolled.remove(id));
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Token identifying one registered observer.
///
/// Issued by the [`Observable`] that registered the callback; only meaningful
/// when passed back to that same observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Entry<T> {
    id: u64,
    once: bool,
    callback: Callback<T>,
}

/// A list of callbacks invoked in registration order on [`notify`].
///
/// Single-threaded (interior mutability via `RefCell`/`Cell`, no locks): all
/// registration and dispatch happens on the host's event thread.
///
/// Dispatch runs over a snapshot of the current observers, so callbacks may
/// freely add or remove observers (including themselves) while a notification
/// is in flight: additions are picked up from the next notification on,
/// removals take effect immediately.
///
/// [`notify`]: Observable::notify
pub struct Observable<T> {
    entries: RefCell<Vec<Entry<T>>>,
    next_id: Cell<u64>,
}

impl<T> Observable<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    /// Registers a callback invoked on every notification.
    pub fn add(&self, callback: impl FnMut(&T) + 'static) -> ObserverId {
        self.insert(callback, false)
    }

    /// Registers a callback invoked on the next notification only.
    ///
    /// The entry is deregistered *before* the callback runs, so even a
    /// re-entrant notification from inside the callback cannot fire it twice.
    pub fn add_once(&self, callback: impl FnMut(&T) + 'static) -> ObserverId {
        self.insert(callback, true)
    }

    fn insert(&self, callback: impl FnMut(&T) + 'static, once: bool) -> ObserverId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push(Entry {
            id,
            once,
            callback: Rc::new(RefCell::new(callback)),
        });
        ObserverId(id)
    }

    /// Removes the observer registered under `id`.
    ///
    /// Returns `false` when the token is unknown: already removed, already
    /// fired (for one-shots), or issued by another observable. Callers may
    /// unsubscribe unconditionally.
    pub fn remove(&self, id: ObserverId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|entry| entry.id != id.0);
        entries.len() != before
    }

    /// Removes all observers.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Number of currently registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Invokes every registered observer with `value`, in registration order.
    pub fn notify(&self, value: &T) {
        // Snapshot the list so callbacks can mutate the registry mid-dispatch.
        let snapshot: Vec<(u64, bool, Callback<T>)> = self
            .entries
            .borrow()
            .iter()
            .map(|entry| (entry.id, entry.once, Rc::clone(&entry.callback)))
            .collect();

        for (id, once, callback) in snapshot {
            // Skip entries removed by an earlier callback in this dispatch.
            let registered = self.entries.borrow().iter().any(|entry| entry.id == id);
            if !registered {
                continue;
            }
            if once {
                self.remove(ObserverId(id));
            }
            (callback.borrow_mut())(value);
        }
    }
}

impl<T> Default for Observable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> Rc<RefCell<Vec<&'static str>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn notify_runs_in_registration_order() {
        let log = recorder();
        let obs = Observable::new();
        let l = log.clone();
        obs.add(move |()| l.borrow_mut().push("first"));
        let l = log.clone();
        obs.add(move |()| l.borrow_mut().push("second"));

        obs.notify(&());
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn remove_by_token() {
        let log = recorder();
        let obs = Observable::new();
        let l = log.clone();
        let id = obs.add(move |()| l.borrow_mut().push("boom"));

        assert!(obs.remove(id));
        assert!(!obs.remove(id), "second removal must report false");
        obs.notify(&());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn once_fires_exactly_once() {
        let count = Rc::new(Cell::new(0));
        let obs = Observable::new();
        let c = count.clone();
        obs.add_once(move |()| c.set(c.get() + 1));

        obs.notify(&());
        obs.notify(&());
        assert_eq!(count.get(), 1);
        assert_eq!(obs.observer_count(), 0, "one-shot must deregister itself");
    }

    #[test]
    fn once_removed_before_callback_runs() {
        // A re-entrant notify from inside the one-shot must not re-fire it.
        let obs = Rc::new(Observable::new());
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let inner = Rc::clone(&obs);
        obs.add_once(move |()| {
            c.set(c.get() + 1);
            if c.get() < 5 {
                inner.notify(&());
            }
        });

        obs.notify(&());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn observer_removed_mid_dispatch_is_skipped() {
        let obs = Rc::new(Observable::new());
        let log = recorder();

        let victim = Rc::new(Cell::new(None));
        let v = victim.clone();
        let inner = Rc::clone(&obs);
        let l = log.clone();
        obs.add(move |()| {
            l.borrow_mut().push("remover");
            if let Some(id) = v.get() {
                inner.remove(id);
            }
        });
        let l = log.clone();
        let id = obs.add(move |()| l.borrow_mut().push("victim"));
        victim.set(Some(id));

        obs.notify(&());
        assert_eq!(*log.borrow(), vec!["remover"]);
    }

    #[test]
    fn observer_added_mid_dispatch_waits_for_next_round() {
        let obs = Rc::new(Observable::new());
        let count = Rc::new(Cell::new(0));

        let inner = Rc::clone(&obs);
        let c = count.clone();
        obs.add(move |()| {
            let c2 = c.clone();
            inner.add_once(move |()| c2.set(c2.get() + 1));
        });

        obs.notify(&());
        assert_eq!(count.get(), 0, "added observer must not run in-flight");
        obs.notify(&());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn clear_drops_everything() {
        let obs = Observable::new();
        obs.add(|_: &u32| {});
        obs.add_once(|_: &u32| {});
        assert_eq!(obs.observer_count(), 2);

        obs.clear();
        assert_eq!(obs.observer_count(), 0);
        obs.notify(&7);
    }

    #[test]
    fn tokens_are_unique_across_removals() {
        let obs = Observable::<()>::new();
        let a = obs.add(|()| {});
        obs.remove(a);
        let b = obs.add(|()| {});
        assert_ne!(a, b);
    }

    #[test]
    fn notify_carries_payload() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let obs = Observable::new();
        let s = seen.clone();
        obs.add(move |v: &i32| s.borrow_mut().push(*v));

        obs.notify(&3);
        obs.notify(&-1);
        assert_eq!(*seen.borrow(), vec![3, -1]);
    }
}
