//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, notifications) and recipe
//! presentation while pages own fetching and navigation.

pub mod nav_bar;
pub mod notification_banner;
pub mod recipe_card;
pub mod recipe_list;
