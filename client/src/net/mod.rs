//! Networking modules for the recipe REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls; request/response shapes live in the
//! `recipes` crate so they stay testable without a browser.

pub mod api;
