//! URL builders for the recipe API.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Address of the recipe API when none is configured at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Resolves every recipe API path against one base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl Endpoints {
    /// Trailing slashes on `base` are dropped; a blank base falls back to
    /// [`DEFAULT_API_BASE`].
    #[must_use]
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        let base = if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed };
        Self { base: base.to_owned() }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn register(&self) -> String {
        format!("{}/auth/register", self.base)
    }

    #[must_use]
    pub fn login(&self) -> String {
        format!("{}/auth/login", self.base)
    }

    /// `GET` lists every recipe, `PUT` saves one for a user.
    #[must_use]
    pub fn recipes(&self) -> String {
        format!("{}/recipes", self.base)
    }

    #[must_use]
    pub fn saved_recipes(&self, user_id: &str) -> String {
        format!("{}/recipes/saved/{}", self.base, encode_segment(user_id))
    }

    #[must_use]
    pub fn saved_recipe_ids(&self, user_id: &str) -> String {
        format!("{}/recipes/savedRecipes/ids/{}", self.base, encode_segment(user_id))
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
