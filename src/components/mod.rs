mod agenda_list;
mod agenda_row;
mod agenda_view;
mod bookmark_button;

pub use agenda_list::{AgendaList, AgendaListProps};
pub use agenda_row::{AgendaRow, AgendaRowProps};
pub use agenda_view::{AgendaView, AgendaViewProps};
pub use bookmark_button::{BookmarkButton, BookmarkButtonProps};

use std::ops::Deref;
use std::rc::Rc;

use crate::bookmarks::BookmarkStore;

/// Shared store reference passed through component props.
///
/// Two handles are equal when they point at the same store, which is what
/// yew needs to decide whether a prop changed.
#[derive(Clone)]
pub struct BookmarkStoreHandle(Rc<dyn BookmarkStore>);

impl BookmarkStoreHandle {
    pub fn new(store: impl BookmarkStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl From<Rc<dyn BookmarkStore>> for BookmarkStoreHandle {
    fn from(store: Rc<dyn BookmarkStore>) -> Self {
        Self(store)
    }
}

impl Deref for BookmarkStoreHandle {
    type Target = dyn BookmarkStore;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for BookmarkStoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::InMemoryBookmarkStore;

    #[test]
    fn test_handle_equality_is_identity() {
        let store = InMemoryBookmarkStore::new();
        let a = BookmarkStoreHandle::new(store.clone());
        let b = a.clone();
        let c = BookmarkStoreHandle::new(store);

        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn test_activation_through_handle_reaches_store() {
        use crate::toggle::{bind, BookmarkIcon, BookmarkToggle};
        use std::cell::RefCell;
        use yew::functional::Reducible;

        let store = InMemoryBookmarkStore::new();
        let handle = BookmarkStoreHandle::new(store.clone());
        let toggle = Rc::new(RefCell::new(Rc::new(BookmarkToggle::new("1"))));
        let _sub = {
            let toggle = Rc::clone(&toggle);
            bind(&*handle, "1", move |action| {
                let current = Rc::clone(&toggle.borrow());
                *toggle.borrow_mut() = current.reduce(action);
            })
        };

        // What the button's click callback does
        let current = Rc::clone(&toggle.borrow());
        current.activate(&*handle);

        assert!(store.is_bookmarked("1"));
        assert_eq!(toggle.borrow().icon(), BookmarkIcon::Remove);
    }

    #[test]
    fn test_handle_shares_state() {
        let store = InMemoryBookmarkStore::new();
        let handle = BookmarkStoreHandle::new(store.clone());
        handle.set_bookmarked("1", true);
        assert!(store.is_bookmarked("1"));
    }
}
