//! Capabilities the synchronization engine needs from a rendering target.
//!
//! The engine never touches a terminal directly. It mutates whatever
//! implements these traits: the in-memory [`NodeView`](crate::view::NodeView)
//! in the application, recording fakes in tests.

use crate::error::Result;
use crate::messages::MessageEntry;

/// A list rebuilt from scratch on every refresh.
pub trait ListSurface<T> {
    /// Remove every item.
    fn clear(&mut self);

    /// Append one item at the end.
    fn push_item(&mut self, item: T);

    /// Replace the whole list.
    fn replace_all(&mut self, items: Vec<T>) {
        self.clear();
        for item in items {
            self.push_item(item);
        }
    }
}

impl<T> ListSurface<T> for Vec<T> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn push_item(&mut self, item: T) {
        self.push(item);
    }
}

/// An append-only log of rendered messages.
pub trait MessageSurface {
    /// Render one entry after the ones already shown.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Render`](crate::UiError::Render) if the entry
    /// could not be shown; the caller must not count it as rendered.
    fn append_entry(&mut self, entry: MessageEntry) -> Result<()>;
}

/// A single-selection control.
pub trait ChoiceSurface {
    /// The currently selected value.
    fn selected(&self) -> Option<&str>;

    /// Replace the option list. Clears the selection.
    fn set_options(&mut self, options: Vec<String>);

    /// Select `value`. Returns `false` (and changes nothing) if it is not an option.
    fn select(&mut self, value: &str) -> bool;
}
