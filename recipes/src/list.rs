//! Fetch lifecycle of a recipe list screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the home screen and the saved-recipes screen load one list keyed by
//! an identity (the user id, or a fixed key for "all recipes"). This state
//! decides when a fetch is due, which response is still relevant, and which
//! of the four mutually exclusive render phases applies.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::error::ApiError;
use crate::recipe::Recipe;

pub const SAVED_LOAD_FAILED: &str = "Failed to load saved recipes. Please try again.";
pub const SAVED_EMPTY: &str = "No recipes saved yet.";
pub const ALL_LOAD_FAILED: &str = "Failed to load recipes. Please try again.";
pub const ALL_EMPTY: &str = "No recipes yet.";

/// What a list screen should render right now.
#[derive(Clone, Debug, PartialEq)]
pub enum ListPhase {
    Loading,
    Failed(String),
    Empty(String),
    Ready(Vec<Recipe>),
}

/// Loaded items plus the bookkeeping to fetch once per identity.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeListState {
    key: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub items: Vec<Recipe>,
    failure_message: &'static str,
    empty_message: &'static str,
}

impl RecipeListState {
    /// A list that starts in the loading phase, before any identity is known.
    #[must_use]
    pub fn new(failure_message: &'static str, empty_message: &'static str) -> Self {
        Self {
            key: None,
            loading: true,
            error: None,
            items: Vec::new(),
            failure_message,
            empty_message,
        }
    }

    /// State for the saved-recipes screen.
    #[must_use]
    pub fn saved() -> Self {
        Self::new(SAVED_LOAD_FAILED, SAVED_EMPTY)
    }

    /// State for the all-recipes home screen.
    #[must_use]
    pub fn all() -> Self {
        Self::new(ALL_LOAD_FAILED, ALL_EMPTY)
    }

    /// Identity the current (or in-flight) data belongs to.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Start a fetch for `key`. Returns `false` when that identity was
    /// already requested, in which case the caller must not fetch again.
    pub fn begin(&mut self, key: &str) -> bool {
        if self.key.as_deref() == Some(key) {
            return false;
        }
        self.key = Some(key.to_owned());
        self.loading = true;
        self.error = None;
        self.items.clear();
        true
    }

    /// Apply a fetch outcome. Outcomes for an identity other than the current
    /// one are stale and dropped; returns whether the outcome was applied.
    pub fn finish(&mut self, key: &str, outcome: Result<Vec<Recipe>, ApiError>) -> bool {
        if self.key.as_deref() != Some(key) {
            return false;
        }
        match outcome {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(_) => {
                self.items.clear();
                self.error = Some(self.failure_message.to_owned());
            }
        }
        self.loading = false;
        true
    }

    /// Forget the identity and go back to loading, e.g. after logout.
    pub fn reset(&mut self) {
        self.key = None;
        self.loading = true;
        self.error = None;
        self.items.clear();
    }

    /// Loading wins over error, error over empty, empty over the list.
    #[must_use]
    pub fn phase(&self) -> ListPhase {
        if self.loading {
            ListPhase::Loading
        } else if let Some(error) = &self.error {
            ListPhase::Failed(error.clone())
        } else if self.items.is_empty() {
            ListPhase::Empty(self.empty_message.to_owned())
        } else {
            ListPhase::Ready(self.items.clone())
        }
    }
}
