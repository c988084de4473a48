use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

/// Receives the current bookmark value for one session.
pub type BookmarkListener = Rc<dyn Fn(bool)>;

/// Source of truth for per-session bookmark flags.
pub trait BookmarkStore {
    fn is_bookmarked(&self, session_id: &str) -> bool;

    /// Fire-and-forget write. Listeners learn about the change through their
    /// subscription, not through a return value.
    fn set_bookmarked(&self, session_id: &str, bookmarked: bool);

    /// Register `listener` for `session_id`. The listener stays registered
    /// until the returned handle is dropped.
    fn subscribe(&self, session_id: &str, listener: BookmarkListener) -> BookmarkSubscription;
}

/// Cancels a store subscription when dropped.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct BookmarkSubscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl BookmarkSubscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to cancel.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for BookmarkSubscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for BookmarkSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookmarkSubscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[derive(Default)]
struct StoreState {
    flags: HashMap<String, bool>,
    listeners: HashMap<String, Vec<(u64, BookmarkListener)>>,
    next_listener_id: u64,
}

impl StoreState {
    fn listeners_for(&self, session_id: &str) -> Vec<(u64, BookmarkListener)> {
        self.listeners
            .get(session_id)
            .map(|entries| entries.iter().map(|(id, l)| (*id, Rc::clone(l))).collect())
            .unwrap_or_default()
    }

    fn is_subscribed(&self, session_id: &str, listener_id: u64) -> bool {
        self.listeners
            .get(session_id)
            .is_some_and(|entries| entries.iter().any(|(id, _)| *id == listener_id))
    }

    fn remove_listener(&mut self, session_id: &str, listener_id: u64) {
        if let Some(entries) = self.listeners.get_mut(session_id) {
            entries.retain(|(id, _)| *id != listener_id);
            if entries.is_empty() {
                self.listeners.remove(session_id);
            }
        }
    }
}

/// Single-threaded in-memory store.
///
/// Cloning yields another handle to the same flags. A subscriber receives the
/// current value as soon as it subscribes and then every change; writes that
/// leave the value unchanged are not re-emitted. A listener cancelled while an
/// emission is in progress is skipped for the rest of that emission.
#[derive(Clone, Default)]
pub struct InMemoryBookmarkStore {
    state: Rc<RefCell<StoreState>>,
}

impl InMemoryBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookmarks<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        {
            let mut state = store.state.borrow_mut();
            for id in ids {
                state.flags.insert(id.into(), true);
            }
        }
        store
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self, session_id: &str) -> usize {
        self.state
            .borrow()
            .listeners
            .get(session_id)
            .map_or(0, Vec::len)
    }
}

impl BookmarkStore for InMemoryBookmarkStore {
    fn is_bookmarked(&self, session_id: &str) -> bool {
        self.state
            .borrow()
            .flags
            .get(session_id)
            .copied()
            .unwrap_or(false)
    }

    fn set_bookmarked(&self, session_id: &str, bookmarked: bool) {
        let listeners = {
            let mut state = self.state.borrow_mut();
            let previous = state.flags.insert(session_id.to_string(), bookmarked);
            if previous.unwrap_or(false) == bookmarked {
                return;
            }
            state.listeners_for(session_id)
        };

        tracing::debug!(session_id, bookmarked, listeners = listeners.len(), "bookmark changed");
        // Borrow released: listeners may read or write the store
        for (listener_id, listener) in listeners {
            if !self.state.borrow().is_subscribed(session_id, listener_id) {
                continue;
            }
            listener(bookmarked);
        }
    }

    fn subscribe(&self, session_id: &str, listener: BookmarkListener) -> BookmarkSubscription {
        let (listener_id, current) = {
            let mut state = self.state.borrow_mut();
            let listener_id = state.next_listener_id;
            state.next_listener_id += 1;
            state
                .listeners
                .entry(session_id.to_string())
                .or_default()
                .push((listener_id, Rc::clone(&listener)));
            let current = state.flags.get(session_id).copied().unwrap_or(false);
            (listener_id, current)
        };
        tracing::debug!(session_id, listener_id, "bookmark subscription opened");

        listener(current);

        let weak: Weak<RefCell<StoreState>> = Rc::downgrade(&self.state);
        let session_id = session_id.to_string();
        BookmarkSubscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().remove_listener(&session_id, listener_id);
                tracing::debug!(session_id = %session_id, listener_id, "bookmark subscription closed");
            }
        })
    }
}
