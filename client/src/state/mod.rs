//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only identity is app-wide. Recipe lists are page-scoped and use
//! `recipes::RecipeListState` directly.

pub mod auth;
