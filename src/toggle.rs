use std::rc::Rc;

use yew::functional::Reducible;

use crate::bookmarks::{BookmarkStore, BookmarkSubscription};
use crate::theme::{Color, TintPalette};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkIcon {
    Add,
    Remove,
}

impl BookmarkIcon {
    pub fn for_state(bookmarked: bool) -> Self {
        if bookmarked {
            BookmarkIcon::Remove
        } else {
            BookmarkIcon::Add
        }
    }

    /// Material Symbols ligature name.
    pub fn ligature(&self) -> &'static str {
        match self {
            BookmarkIcon::Add => "bookmark_add",
            BookmarkIcon::Remove => "bookmark_remove",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookmarkIcon::Add => "Add bookmark",
            BookmarkIcon::Remove => "Remove bookmark",
        }
    }
}

pub enum ToggleAction {
    /// The store pushed a value for this session.
    Emitted(bool),
}

/// Bookmark control state for one session.
///
/// The flag only changes on `ToggleAction::Emitted`; activating the control
/// writes to the store and waits for the store to echo the new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkToggle {
    session_id: String,
    bookmarked: bool,
}

impl BookmarkToggle {
    /// Starts as not bookmarked until the store emits.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            bookmarked: false,
        }
    }

    pub fn is_bookmarked(&self) -> bool {
        self.bookmarked
    }

    pub fn icon(&self) -> BookmarkIcon {
        BookmarkIcon::for_state(self.bookmarked)
    }

    pub fn tint(&self, palette: &TintPalette) -> Color {
        palette.tint_for(self.bookmarked)
    }

    /// Ask the store to flip the flag. Local state is left untouched.
    pub fn activate(&self, store: &dyn BookmarkStore) {
        let requested = !self.bookmarked;
        tracing::debug!(session_id = %self.session_id, requested, "bookmark toggle activated");
        store.set_bookmarked(&self.session_id, requested);
    }
}

/// Forward store emissions for `session_id` as toggle actions until the
/// returned subscription is dropped.
pub fn bind(
    store: &dyn BookmarkStore,
    session_id: &str,
    dispatch: impl Fn(ToggleAction) + 'static,
) -> BookmarkSubscription {
    store.subscribe(
        session_id,
        Rc::new(move |bookmarked: bool| dispatch(ToggleAction::Emitted(bookmarked))),
    )
}

impl Reducible for BookmarkToggle {
    type Action = ToggleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToggleAction::Emitted(bookmarked) if bookmarked == self.bookmarked => self,
            ToggleAction::Emitted(bookmarked) => Rc::new(Self {
                session_id: self.session_id.clone(),
                bookmarked,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::{BookmarkListener, BookmarkSubscription, InMemoryBookmarkStore};
    use std::cell::RefCell;

    /// Records writes without ever emitting.
    #[derive(Default)]
    struct RecordingStore {
        writes: RefCell<Vec<(String, bool)>>,
    }

    impl BookmarkStore for RecordingStore {
        fn is_bookmarked(&self, _session_id: &str) -> bool {
            false
        }

        fn set_bookmarked(&self, session_id: &str, bookmarked: bool) {
            self.writes.borrow_mut().push((session_id.to_string(), bookmarked));
        }

        fn subscribe(&self, _session_id: &str, _listener: BookmarkListener) -> BookmarkSubscription {
            BookmarkSubscription::detached()
        }
    }

    #[test]
    fn test_initial_state_is_not_bookmarked() {
        let toggle = BookmarkToggle::new("1");
        assert!(!toggle.is_bookmarked());
        assert_eq!(toggle.icon(), BookmarkIcon::Add);
        assert_eq!(toggle.tint(&TintPalette::default()), Color::LIGHT_GRAY);
    }

    #[test]
    fn test_activation_writes_once_without_local_change() {
        let store = RecordingStore::default();
        let toggle = BookmarkToggle::new("1");

        toggle.activate(&store);

        assert_eq!(*store.writes.borrow(), vec![("1".to_string(), true)]);
        assert_eq!(toggle.icon(), BookmarkIcon::Add);
    }

    #[test]
    fn test_emission_switches_icon() {
        let toggle = Rc::new(BookmarkToggle::new("1"));
        let toggle = toggle.reduce(ToggleAction::Emitted(true));
        assert_eq!(toggle.icon(), BookmarkIcon::Remove);
        assert_eq!(toggle.tint(&TintPalette::default()), Color::BOOKMARKED);

        let toggle = toggle.reduce(ToggleAction::Emitted(false));
        assert_eq!(toggle.icon(), BookmarkIcon::Add);
    }

    #[test]
    fn test_repeated_emission_keeps_same_state() {
        let toggle = Rc::new(BookmarkToggle::new("1"));
        let next = Rc::clone(&toggle).reduce(ToggleAction::Emitted(false));
        assert!(Rc::ptr_eq(&toggle, &next));
    }

    #[test]
    fn test_round_trip_through_store() {
        let store = InMemoryBookmarkStore::new();
        let toggle = Rc::new(RefCell::new(Rc::new(BookmarkToggle::new("1"))));

        let _sub = {
            let toggle = Rc::clone(&toggle);
            store.subscribe(
                "1",
                Rc::new(move |value: bool| {
                    let current = Rc::clone(&toggle.borrow());
                    *toggle.borrow_mut() = current.reduce(ToggleAction::Emitted(value));
                }),
            )
        };
        assert_eq!(toggle.borrow().icon(), BookmarkIcon::Add);

        let current = Rc::clone(&toggle.borrow());
        current.activate(&store);
        assert_eq!(toggle.borrow().icon(), BookmarkIcon::Remove);
        assert!(store.is_bookmarked("1"));

        let current = Rc::clone(&toggle.borrow());
        current.activate(&store);
        assert_eq!(toggle.borrow().icon(), BookmarkIcon::Add);
        assert!(!store.is_bookmarked("1"));
    }

    /// Toggle state driven by `bind`, the way the button's reducer is.
    fn bound(store: &InMemoryBookmarkStore, session_id: &str) -> (Rc<RefCell<Rc<BookmarkToggle>>>, BookmarkSubscription) {
        let toggle = Rc::new(RefCell::new(Rc::new(BookmarkToggle::new(session_id))));
        let subscription = {
            let toggle = Rc::clone(&toggle);
            bind(store, session_id, move |action| {
                let current = Rc::clone(&toggle.borrow());
                *toggle.borrow_mut() = current.reduce(action);
            })
        };
        (toggle, subscription)
    }

    #[test]
    fn test_bind_picks_up_stored_value() {
        let store = InMemoryBookmarkStore::with_bookmarks(["1"]);
        let (toggle, _sub) = bound(&store, "1");
        assert_eq!(toggle.borrow().icon(), BookmarkIcon::Remove);
    }

    #[test]
    fn test_binding_lives_as_long_as_subscription() {
        let store = InMemoryBookmarkStore::new();
        let (toggle, sub) = bound(&store, "1");
        assert_eq!(store.subscriber_count("1"), 1);

        drop(sub);
        assert_eq!(store.subscriber_count("1"), 0);

        store.set_bookmarked("1", true);
        assert_eq!(toggle.borrow().icon(), BookmarkIcon::Add);
    }

    #[test]
    fn test_rebinding_to_another_session() {
        let store = InMemoryBookmarkStore::with_bookmarks(["2"]);
        let (_, first) = bound(&store, "1");

        // Session id changes: old subscription is torn down before the new one
        drop(first);
        let (toggle, _second) = bound(&store, "2");

        assert_eq!(store.subscriber_count("1"), 0);
        assert_eq!(store.subscriber_count("2"), 1);
        assert_eq!(toggle.borrow().icon(), BookmarkIcon::Remove);
    }

    #[test]
    fn test_icon_names() {
        assert_eq!(BookmarkIcon::Add.ligature(), "bookmark_add");
        assert_eq!(BookmarkIcon::Remove.ligature(), "bookmark_remove");
        assert_eq!(BookmarkIcon::for_state(true).label(), "Remove bookmark");
    }
}
