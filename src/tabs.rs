//! Exclusive tab selection.
//!
//! A [`TabGroup`] always has exactly one active tab. The first tab is active
//! from construction, so there is no "nothing selected" state to handle.

use crate::error::{Result, UiError};
use std::fmt;

/// Panels of the node view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Message log and composer.
    Messages,
    /// Known peers.
    Peers,
    /// Shared files and downloads.
    Files,
}

impl Panel {
    /// Every panel in display order.
    pub const ALL: [Panel; 3] = [Panel::Messages, Panel::Peers, Panel::Files];
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Panel::Messages => write!(f, "Messages"),
            Panel::Peers => write!(f, "Peers"),
            Panel::Files => write!(f, "Files"),
        }
    }
}

/// A group of sibling tabs with one active member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup<T> {
    tabs: Vec<T>,
    active: usize,
}

impl<T> TabGroup<T> {
    /// Build a group and activate its first tab.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Tab`] if `tabs` is empty.
    pub fn new(tabs: Vec<T>) -> Result<Self> {
        if tabs.is_empty() {
            return Err(UiError::Tab("a tab group needs at least one tab".into()));
        }
        Ok(Self { tabs, active: 0 })
    }

    /// Make tab `index` the only active one.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Tab`] if `index` is out of range; the active tab
    /// is unchanged.
    pub fn activate(&mut self, index: usize) -> Result<()> {
        if index >= self.tabs.len() {
            return Err(UiError::Tab(format!(
                "tab {index} out of range (group has {})",
                self.tabs.len()
            )));
        }
        self.active = index;
        Ok(())
    }

    /// Activate the following tab, wrapping around.
    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.tabs.len();
    }

    /// Activate the preceding tab, wrapping around.
    pub fn previous(&mut self) {
        self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false: a group is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Tabs with their "selected" marker, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, bool)> {
        self.tabs
            .iter()
            .enumerate()
            .map(move |(i, tab)| (tab, i == self.active))
    }
}

impl<T: Copy> TabGroup<T> {
    /// The active tab's value.
    pub fn active(&self) -> T {
        self.tabs[self.active]
    }
}
