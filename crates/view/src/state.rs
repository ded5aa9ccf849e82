//! Observable view-state cell.
//!
//! `ViewState` is the single shared cell per fetched collection. Writers
//! apply typed transitions; readers either take a synchronous snapshot or
//! subscribe for push-based updates. Subscribers are notified synchronously
//! and in subscription order, so no update is ever observed half-applied.
//!
//! The cell is single-threaded by design. It is shared as
//! `Rc<RefCell<ViewState<..>>>` on the UI event loop; porting to a
//! multi-threaded runtime would require mutual exclusion around every
//! transition.

use crate::view::View;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

/// Unique identifier for a subscription.
pub type SubscriptionId = u64;

/// Callback type for view notifications.
type ViewCallback<T, E> = Box<dyn Fn(&View<T, E>)>;

/// An observable cell holding a `View` value.
///
/// # Example
///
/// ```rust
/// use tracklet_view::ViewState;
///
/// let mut state: ViewState<u32, &str> = ViewState::new();
///
/// // New subscribers immediately receive the current value
/// let id = state.subscribe(|view| {
///     let _ = view.data();
/// });
///
/// state.resolve(3);
/// state.unsubscribe(id);
/// ```
pub struct ViewState<T, E> {
    /// Most recently published value
    current: View<T, E>,
    /// Subscriptions in subscription order
    subscriptions: Vec<(SubscriptionId, ViewCallback<T, E>)>,
    /// Next subscription ID to assign
    next_id: SubscriptionId,
}

impl<T, E> Default for ViewState<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> ViewState<T, E> {
    /// Creates a cell in the initial loading state.
    pub fn new() -> Self {
        Self {
            current: View::loading(),
            subscriptions: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a cell holding the given view.
    pub fn with_initial(view: View<T, E>) -> Self {
        Self {
            current: view,
            subscriptions: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns a reference to the current value without subscribing.
    #[inline]
    pub fn current(&self) -> &View<T, E> {
        &self.current
    }

    /// Subscribes to updates with the given callback.
    ///
    /// The current value is replayed to the callback immediately; afterwards
    /// the callback runs on every transition, in subscription order.
    /// Callbacks must not re-enter the cell.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&View<T, E>) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;

        callback(&self.current);
        self.subscriptions.push((id, Box::new(callback)));

        id
    }

    /// Unsubscribes by ID.
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.subscriptions.len();
        self.subscriptions.retain(|(sub_id, _)| *sub_id != id);
        self.subscriptions.len() < len_before
    }

    /// Returns the number of active subscriptions.
    #[inline]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Transitions into `Loading`, keeping the current payload as stale.
    pub fn begin_load(&mut self) {
        let previous = mem::take(&mut self.current);
        self.current = previous.begin_load();
        self.publish();
    }

    /// Publishes a fresh payload, clearing any error and stale data.
    pub fn resolve(&mut self, data: T) {
        self.current = View::Ready(data);
        self.publish();
    }

    /// Publishes a failure, keeping the current payload as stale.
    pub fn fail(&mut self, error: E) {
        let previous = mem::take(&mut self.current);
        self.current = previous.fail(error);
        self.publish();
    }

    /// Replaces the value wholesale. Last write wins.
    pub fn replace(&mut self, view: View<T, E>) {
        self.current = view;
        self.publish();
    }

    fn publish(&self) {
        for (_, callback) in &self.subscriptions {
            callback(&self.current);
        }
    }
}

impl<T: Clone, E: Clone> ViewState<T, E> {
    /// Returns a clone of the most recently published value.
    ///
    /// Never blocks and never subscribes.
    #[inline]
    pub fn snapshot(&self) -> View<T, E> {
        self.current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn test_state_initial() {
        let state: ViewState<u32, &str> = ViewState::new();
        assert!(state.current().is_loading());
        assert_eq!(state.current().data(), None);
        assert_eq!(state.subscription_count(), 0);
    }

    #[test]
    fn test_state_stale_during_reload() {
        let mut state: ViewState<Vec<u32>, &str> = ViewState::new();
        state.resolve(vec![1]);
        state.begin_load();

        let view = state.snapshot();
        assert!(view.is_loading());
        assert_eq!(view.data(), Some(&vec![1]));
        assert_eq!(view.error(), None);
    }

    #[test]
    fn test_state_fail_keeps_stale() {
        let mut state: ViewState<Vec<u32>, &str> = ViewState::new();
        state.resolve(vec![1, 2]);
        state.begin_load();
        state.fail("network down");

        let view = state.snapshot();
        assert!(view.is_failed());
        assert_eq!(view.data(), Some(&vec![1, 2]));
        assert_eq!(view.error(), Some(&"network down"));
    }

    #[test]
    fn test_state_resolve_clears_error() {
        let mut state: ViewState<u32, &str> = ViewState::new();
        state.fail("boom");
        state.resolve(9);

        let view = state.snapshot();
        assert!(view.is_ready());
        assert_eq!(view.error(), None);
        assert_eq!(view.data(), Some(&9));
    }

    #[test]
    fn test_subscribe_replays_current() {
        let mut state: ViewState<u32, &str> = ViewState::new();
        state.resolve(4);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();

        state.subscribe(move |view| {
            seen_clone.borrow_mut().push(view.data().copied());
        });

        // Replayed immediately, before any further transition
        assert_eq!(*seen.borrow(), vec![Some(4)]);

        state.resolve(5);
        assert_eq!(*seen.borrow(), vec![Some(4), Some(5)]);
    }

    #[test]
    fn test_notification_in_subscription_order() {
        let mut state: ViewState<u32, &str> = ViewState::new();

        let order = Rc::new(RefCell::new(Vec::new()));
        let o1 = order.clone();
        let o2 = order.clone();
        let o3 = order.clone();

        state.subscribe(move |_| o1.borrow_mut().push(1));
        state.subscribe(move |_| o2.borrow_mut().push(2));
        state.subscribe(move |_| o3.borrow_mut().push(3));
        order.borrow_mut().clear();

        state.resolve(1);
        assert_eq!(*order.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut state: ViewState<u32, &str> = ViewState::new();

        let count = Rc::new(RefCell::new(0));
        let count_clone = count.clone();

        let id = state.subscribe(move |_| {
            *count_clone.borrow_mut() += 1;
        });
        assert_eq!(*count.borrow(), 1); // replay

        assert!(state.unsubscribe(id));
        state.resolve(1);

        assert_eq!(*count.borrow(), 1);
        assert!(!state.unsubscribe(id)); // already removed
    }

    #[test]
    fn test_unsubscribe_middle_subscriber() {
        let mut state: ViewState<u32, &str> = ViewState::new();

        let count1 = Rc::new(RefCell::new(0));
        let count2 = Rc::new(RefCell::new(0));
        let count3 = Rc::new(RefCell::new(0));

        let c1 = count1.clone();
        let c2 = count2.clone();
        let c3 = count3.clone();

        let _id1 = state.subscribe(move |_| *c1.borrow_mut() += 1);
        let id2 = state.subscribe(move |_| *c2.borrow_mut() += 1);
        let _id3 = state.subscribe(move |_| *c3.borrow_mut() += 1);

        state.unsubscribe(id2);
        state.resolve(1);

        assert_eq!(*count1.borrow(), 2);
        assert_eq!(*count2.borrow(), 1); // replay only
        assert_eq!(*count3.borrow(), 2);
    }

    #[test]
    fn test_replace_wholesale() {
        let mut state: ViewState<Vec<u32>, &str> = ViewState::new();
        state.resolve(vec![1, 2, 3]);

        state.replace(View::Ready(vec![9]));
        assert_eq!(state.snapshot().data(), Some(&vec![9]));
    }

    #[test]
    fn test_transitions_notify_synchronously() {
        let mut state: ViewState<u32, &str> = ViewState::new();

        let phases = Rc::new(RefCell::new(Vec::new()));
        let phases_clone = phases.clone();

        state.subscribe(move |view| {
            let phase = if view.is_loading() {
                "loading"
            } else if view.is_ready() {
                "ready"
            } else {
                "failed"
            };
            phases_clone.borrow_mut().push(phase);
        });

        state.begin_load();
        state.resolve(1);
        state.begin_load();
        state.fail("x");

        assert_eq!(
            *phases.borrow(),
            vec!["loading", "loading", "ready", "loading", "failed"]
        );
    }
}
