//! Selection-preserving rebuild of single-choice controls.
//!
//! The destination set is re-fetched on every refresh and may gain or lose
//! members. Rebuilding a picker must not yank the user's choice away unless
//! that choice no longer exists, and must never leave a non-empty picker
//! without a selection.

use crate::surface::ChoiceSurface;
use std::collections::BTreeSet;
use tracing::debug;

/// Option meaning "no specific destination": broadcast to everyone.
pub const WILDCARD: &str = "";

/// How [`render_options`] settled the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The previous selection is still offered and stays selected.
    Restored,
    /// The previous selection vanished (or there was none); the default was chosen.
    FellBack,
    /// No options at all, nothing selected.
    Empty,
}

/// Order candidates for display: the wildcard (when requested) first, then
/// every other value in ascending string order, duplicates removed.
pub fn sort_candidates<I>(candidates: I, include_wildcard: bool) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut rest: BTreeSet<String> = candidates.into_iter().collect();
    let mut sorted = Vec::with_capacity(rest.len() + 1);
    if include_wildcard {
        rest.remove(WILDCARD);
        sorted.push(WILDCARD.to_owned());
    }
    sorted.extend(rest);
    sorted
}

/// Rebuild `control`'s options from `candidates`, keeping its selection when
/// possible.
///
/// The fallback is the wildcard for controls that offer it and the first
/// sorted candidate otherwise.
pub fn render_options<C, I>(control: &mut C, candidates: I, include_wildcard: bool) -> SelectionOutcome
where
    C: ChoiceSurface + ?Sized,
    I: IntoIterator<Item = String>,
{
    let previous = control.selected().map(str::to_owned);
    let options = sort_candidates(candidates, include_wildcard);

    let restored = previous
        .as_deref()
        .filter(|prev| options.iter().any(|o| o == prev))
        .map(str::to_owned);
    let fallback = options.first().cloned();
    control.set_options(options);

    if let Some(prev) = restored {
        control.select(&prev);
        return SelectionOutcome::Restored;
    }
    match fallback {
        Some(default) => {
            debug!(previous = ?previous, fallback = %default, "selection fell back");
            control.select(&default);
            SelectionOutcome::FellBack
        }
        None => SelectionOutcome::Empty,
    }
}

/// In-memory single-choice control with its own wildcard policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusiveChoice {
    options: Vec<String>,
    selected: Option<usize>,
    include_wildcard: bool,
}

impl ExclusiveChoice {
    /// A control that offers the "everyone" option.
    pub fn with_wildcard() -> Self {
        let mut control = Self {
            include_wildcard: true,
            ..Self::default()
        };
        render_options(&mut control, std::iter::empty(), true);
        control
    }

    /// A control that only offers concrete destinations.
    pub fn without_wildcard() -> Self {
        Self::default()
    }

    /// Whether this control offers the wildcard option.
    pub fn includes_wildcard(&self) -> bool {
        self.include_wildcard
    }

    /// Rebuild from a freshly fetched set using this control's policy.
    pub fn refresh<I>(&mut self, candidates: I) -> SelectionOutcome
    where
        I: IntoIterator<Item = String>,
    {
        let include_wildcard = self.include_wildcard;
        render_options(self, candidates, include_wildcard)
    }

    /// Options in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the selected option.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selection as a concrete destination; `None` for the wildcard or
    /// when nothing is selected.
    pub fn destination(&self) -> Option<&str> {
        self.selected().filter(|s| *s != WILDCARD)
    }

    /// Move the selection to the next option, wrapping around.
    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
    }

    /// Move the selection to the previous option, wrapping around.
    pub fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        self.selected = Some(match self.selected {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        });
    }
}

impl ChoiceSurface for ExclusiveChoice {
    fn selected(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        self.selected = None;
    }

    fn select(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o == value) {
            Some(i) => {
                self.selected = Some(i);
                true
            }
            None => false,
        }
    }
}
