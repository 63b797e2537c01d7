//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and identity-aware pages to coordinate login
//! redirects and per-user fetches. Provided as `RwSignal<AuthState>` context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Identity of the current user and whether it has been resolved yet.
///
/// Starts out `loading` because the stored identity is only readable in the
/// browser; SSR never leaves this state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user_id: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user_id: None, loading: true }
    }
}

impl AuthState {
    /// Identity after reading browser storage, a login, or a logout.
    #[must_use]
    pub fn resolved(user_id: Option<String>) -> Self {
        Self { user_id, loading: false }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }
}
